//! In-memory repository.

use std::sync::{PoisonError, RwLock};

use uuid::Uuid;

use super::{Repository, RepositoryError};
use crate::entity::CatalogEntity;

/// Repository keeping records in a vector, in insertion order.
#[derive(Debug)]
pub struct InMemoryRepository<T> {
    items: RwLock<Vec<T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: CatalogEntity> Repository<T> for InMemoryRepository<T> {
    fn insert(&self, entity: &T) -> Result<(), RepositoryError> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        if items.iter().any(|item| item.id() == entity.id()) {
            return Err(RepositoryError::Duplicate {
                kind: T::KIND,
                id: entity.id(),
            });
        }
        items.push(entity.clone());
        Ok(())
    }

    fn get(&self, id: Uuid) -> Result<T, RepositoryError> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        items
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or(RepositoryError::NotFound { kind: T::KIND, id })
    }

    fn update(&self, entity: &T) -> Result<(), RepositoryError> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        let slot = items
            .iter_mut()
            .find(|item| item.id() == entity.id())
            .ok_or(RepositoryError::NotFound {
                kind: T::KIND,
                id: entity.id(),
            })?;
        *slot = entity.clone();
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<T, RepositoryError> {
        let mut items = self.items.write().unwrap_or_else(PoisonError::into_inner);
        let index = items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(RepositoryError::NotFound { kind: T::KIND, id })?;
        Ok(items.remove(index))
    }

    fn all(&self) -> Result<Vec<T>, RepositoryError> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        Ok(items.clone())
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        let items = self.items.read().unwrap_or_else(PoisonError::into_inner);
        Ok(items.len() as u64)
    }

    fn clear(&self) -> Result<(), RepositoryError> {
        self.items
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        Ok(())
    }
}
