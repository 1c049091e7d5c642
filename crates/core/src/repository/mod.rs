//! Storage of catalog records.
//!
//! Repositories own persistence; listing semantics live in [`crate::search`].
//! A repository hands the search layer its records in insertion order, which
//! is what makes ties in ordering deterministic.

mod memory;
mod sqlite;

pub use memory::InMemoryRepository;
pub use sqlite::SqliteRepository;

use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::entity::CatalogEntity;
use crate::search::{search, SearchInput, SearchOutput, SortField};

/// Errors for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("{kind} '{id}' already exists")]
    Duplicate { kind: &'static str, id: Uuid },

    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(e: rusqlite::Error) -> Self {
        RepositoryError::Database(e.to_string())
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(e: serde_json::Error) -> Self {
        RepositoryError::Serialization(e.to_string())
    }
}

/// Trait for catalog record storage backends.
pub trait Repository<T: CatalogEntity>: Send + Sync {
    /// Store a new record.
    fn insert(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Store several records, keeping their order.
    fn insert_many(&self, entities: &[T]) -> Result<(), RepositoryError> {
        for entity in entities {
            self.insert(entity)?;
        }
        Ok(())
    }

    /// Get a record by ID.
    fn get(&self, id: Uuid) -> Result<T, RepositoryError>;

    /// Replace a stored record with the same ID.
    fn update(&self, entity: &T) -> Result<(), RepositoryError>;

    /// Remove a record, returning it.
    fn delete(&self, id: Uuid) -> Result<T, RepositoryError>;

    /// All records, in insertion order.
    fn all(&self) -> Result<Vec<T>, RepositoryError>;

    /// Number of stored records.
    fn count(&self) -> Result<u64, RepositoryError>;

    /// Remove every record.
    fn clear(&self) -> Result<(), RepositoryError>;

    /// Filter, order and page the stored records.
    fn search(&self, input: &SearchInput) -> Result<SearchOutput<T>, RepositoryError> {
        let candidates = self.all()?;
        let output = search(candidates, input);
        debug!(
            kind = T::KIND,
            search = %input.search,
            sort = SortField::resolve(&input.order_by).as_str(),
            dir = input.order.as_str(),
            page = input.page,
            per_page = input.per_page,
            total = output.total,
            "Listing search"
        );
        Ok(output)
    }
}
