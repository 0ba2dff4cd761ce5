//! redb-based cart cache
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `cart` | `"cart"` | `Vec<CartLine>` (JSON) | Persisted cart contents |
//!
//! # Durability
//!
//! redb commits are persistent as soon as `commit()` returns (copy-on-write
//! with atomic pointer swap), so a kiosk losing power mid-session restarts
//! with the last committed cart.
//!
//! # Load semantics
//!
//! Loading is best effort: an absent key, unreadable database state, or
//! corrupt JSON all yield an empty cart with a warning. The cache is a
//! convenience, never a source of failure at startup.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::order::CartLine;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Table for the persisted cart: key = fixed `"cart"`, value = JSON-serialized lines
const CART_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("cart");

const CART_KEY: &str = "cart";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Cart cache backed by redb
#[derive(Clone)]
pub struct CartStorage {
    db: Arc<Database>,
}

impl CartStorage {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;

        // Initialize the table
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CART_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CART_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Load the persisted cart, best effort
    ///
    /// Absent or corrupt data yields an empty cart; corruption is logged
    /// and the bad entry is left in place until the next `save` overwrites it.
    pub fn load(&self) -> Vec<CartLine> {
        let bytes = match self.read_raw() {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Cart cache unreadable, starting with an empty cart");
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!(error = %e, "Cart cache corrupt, starting with an empty cart");
                Vec::new()
            }
        }
    }

    /// Serialize and persist the full cart contents
    pub fn save(&self, lines: &[CartLine]) -> StorageResult<()> {
        let bytes = serde_json::to_vec(lines)?;
        self.write_raw(&bytes)
    }

    /// Remove the persisted cart entry
    pub fn clear(&self) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_TABLE)?;
            table.remove(CART_KEY)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Whether a cart entry is currently persisted
    pub fn has_cart(&self) -> StorageResult<bool> {
        Ok(self.read_raw()?.is_some())
    }

    fn read_raw(&self) -> StorageResult<Option<Vec<u8>>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CART_TABLE)?;
        Ok(table.get(CART_KEY)?.map(|guard| guard.value().to_vec()))
    }

    fn write_raw(&self, bytes: &[u8]) -> StorageResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CART_TABLE)?;
            table.insert(CART_KEY, bytes)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl std::fmt::Debug for CartStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStorage").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{MenuCategory, MenuItem};

    fn sample_lines() -> Vec<CartLine> {
        let burger = MenuItem::new(1, "Classic Burger", 8.99, "img/b.jpg", MenuCategory::Quick);
        let fries = MenuItem::new(2, "Fries", 3.50, "img/f.jpg", MenuCategory::Quick);
        vec![CartLine::from_item(&burger, 2), CartLine::from_item(&fries, 1)]
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let storage = CartStorage::open_in_memory().unwrap();
        let lines = sample_lines();

        storage.save(&lines).unwrap();
        assert_eq!(storage.load(), lines);
        assert!(storage.has_cart().unwrap());
    }

    #[test]
    fn test_absent_cart_loads_empty() {
        let storage = CartStorage::open_in_memory().unwrap();
        assert!(storage.load().is_empty());
        assert!(!storage.has_cart().unwrap());
    }

    #[test]
    fn test_corrupt_cart_loads_empty() {
        let storage = CartStorage::open_in_memory().unwrap();
        storage.write_raw(b"{not json").unwrap();

        assert!(storage.load().is_empty());
        // Entry still present until overwritten
        assert!(storage.has_cart().unwrap());
    }

    #[test]
    fn test_clear_removes_entry() {
        let storage = CartStorage::open_in_memory().unwrap();
        storage.save(&sample_lines()).unwrap();
        assert!(storage.has_cart().unwrap());

        storage.clear().unwrap();
        assert!(!storage.has_cart().unwrap());
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_clear_on_empty_is_noop() {
        let storage = CartStorage::open_in_memory().unwrap();
        storage.clear().unwrap();
        assert!(!storage.has_cart().unwrap());
    }
}
