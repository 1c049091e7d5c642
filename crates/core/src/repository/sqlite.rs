//! SQLite-backed repository implementation.

use std::marker::PhantomData;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rusqlite::{params, Connection, ErrorCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use super::{Repository, RepositoryError};
use crate::entity::CatalogEntity;

/// SQLite-backed repository, one table per record kind.
///
/// Listing columns are kept next to a JSON payload of the whole record.
/// Records are read back in `rowid` order, i.e. insertion order.
pub struct SqliteRepository<T> {
    conn: Mutex<Connection>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> SqliteRepository<T>
where
    T: CatalogEntity + Serialize + DeserializeOwned,
{
    /// Open (or create) the database file and the record table.
    pub fn new(path: &Path) -> Result<Self, RepositoryError> {
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// Create an in-memory SQLite repository (useful for testing).
    pub fn in_memory() -> Result<Self, RepositoryError> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, RepositoryError> {
        Self::initialize_schema(&conn)?;
        debug!(kind = T::KIND, "SQLite repository ready");
        Ok(Self {
            conn: Mutex::new(conn),
            _marker: PhantomData,
        })
    }

    fn initialize_schema(conn: &Connection) -> Result<(), RepositoryError> {
        // Only `id` and `payload` are read back. The other columns mirror the
        // listing fields so the table can be inspected with plain SQL.
        let table = T::KIND;
        conn.execute_batch(&format!(
            r#"
            CREATE TABLE IF NOT EXISTS {table} (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                is_active INTEGER NOT NULL,
                created_at TEXT NOT NULL,
                payload TEXT NOT NULL
            );
            "#
        ))?;
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn not_found(id: Uuid) -> RepositoryError {
        RepositoryError::NotFound { kind: T::KIND, id }
    }
}

impl<T> Repository<T> for SqliteRepository<T>
where
    T: CatalogEntity + Serialize + DeserializeOwned,
{
    fn insert(&self, entity: &T) -> Result<(), RepositoryError> {
        let payload = serde_json::to_string(entity)?;
        let conn = self.lock();

        let result = conn.execute(
            &format!(
                "INSERT INTO {} (id, name, is_active, created_at, payload) VALUES (?, ?, ?, ?, ?)",
                T::KIND
            ),
            params![
                entity.id().to_string(),
                entity.name(),
                entity.is_active(),
                entity.created_at().to_rfc3339(),
                payload,
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                Err(RepositoryError::Duplicate {
                    kind: T::KIND,
                    id: entity.id(),
                })
            }
            Err(e) => Err(e.into()),
        }
    }

    fn insert_many(&self, entities: &[T]) -> Result<(), RepositoryError> {
        let mut conn = self.lock();
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO {} (id, name, is_active, created_at, payload) VALUES (?, ?, ?, ?, ?)",
                T::KIND
            ))?;
            for entity in entities {
                let payload = serde_json::to_string(entity)?;
                stmt.execute(params![
                    entity.id().to_string(),
                    entity.name(),
                    entity.is_active(),
                    entity.created_at().to_rfc3339(),
                    payload,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn get(&self, id: Uuid) -> Result<T, RepositoryError> {
        let conn = self.lock();

        let result = conn.query_row(
            &format!("SELECT payload FROM {} WHERE id = ?", T::KIND),
            params![id.to_string()],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(payload) => Ok(serde_json::from_str(&payload)?),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(Self::not_found(id)),
            Err(e) => Err(e.into()),
        }
    }

    fn update(&self, entity: &T) -> Result<(), RepositoryError> {
        let payload = serde_json::to_string(entity)?;
        let conn = self.lock();

        let changed = conn.execute(
            &format!(
                "UPDATE {} SET name = ?, is_active = ?, payload = ? WHERE id = ?",
                T::KIND
            ),
            params![
                entity.name(),
                entity.is_active(),
                payload,
                entity.id().to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(Self::not_found(entity.id()));
        }
        Ok(())
    }

    fn delete(&self, id: Uuid) -> Result<T, RepositoryError> {
        let conn = self.lock();

        // Fetch first so the removed record can be returned
        let payload = match conn.query_row(
            &format!("SELECT payload FROM {} WHERE id = ?", T::KIND),
            params![id.to_string()],
            |row| row.get::<_, String>(0),
        ) {
            Ok(payload) => payload,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Err(Self::not_found(id)),
            Err(e) => return Err(e.into()),
        };

        conn.execute(
            &format!("DELETE FROM {} WHERE id = ?", T::KIND),
            params![id.to_string()],
        )?;

        Ok(serde_json::from_str(&payload)?)
    }

    fn all(&self) -> Result<Vec<T>, RepositoryError> {
        let conn = self.lock();

        let mut stmt = conn.prepare(&format!("SELECT payload FROM {} ORDER BY rowid", T::KIND))?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut items = Vec::new();
        for row in rows {
            items.push(serde_json::from_str(&row?)?);
        }
        Ok(items)
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        let conn = self.lock();
        let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", T::KIND), [], |row| {
            row.get(0)
        })?;
        Ok(count as u64)
    }

    fn clear(&self) -> Result<(), RepositoryError> {
        let conn = self.lock();
        conn.execute(&format!("DELETE FROM {}", T::KIND), [])?;
        Ok(())
    }
}
