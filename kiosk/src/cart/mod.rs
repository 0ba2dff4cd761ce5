//! Cart manager
//!
//! Ordered sequence of cart lines, unique by menu item ID. Quantities never
//! drop below 1; removal is the only way to take a line out. Every mutation
//! serializes the full cart to the persisted cache; the cache is read once
//! at construction (best effort).

pub mod storage;

pub use storage::{CartStorage, StorageError, StorageResult};

use crate::money;
use shared::models::MenuItem;
use shared::order::CartLine;

/// Cart manager with write-through persistence
#[derive(Debug)]
pub struct CartManager {
    lines: Vec<CartLine>,
    storage: CartStorage,
}

impl CartManager {
    /// Create a manager, rehydrating the cart from the cache
    pub fn new(storage: CartStorage) -> Self {
        let lines = storage.load();
        if !lines.is_empty() {
            tracing::info!(lines = lines.len(), "Cart rehydrated from cache");
        }
        Self { lines, storage }
    }

    /// Add one unit of a menu item
    ///
    /// Increments the quantity if the item is already in the cart, otherwise
    /// appends a new line with quantity 1. Always succeeds.
    pub fn add(&mut self, item: &MenuItem) -> StorageResult<()> {
        match self.lines.iter_mut().find(|line| line.item_id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::from_item(item, 1)),
        }
        self.persist()
    }

    /// Remove the line with the given item ID
    ///
    /// Returns whether the cart changed; an absent ID is a no-op.
    pub fn remove(&mut self, item_id: i64) -> StorageResult<bool> {
        let before = self.lines.len();
        self.lines.retain(|line| line.item_id != item_id);
        if self.lines.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Adjust a line's quantity by `delta`, clamped at 1
    ///
    /// Returns whether the cart changed; an absent ID is a no-op. Reaching 0
    /// is only possible through [`CartManager::remove`].
    pub fn change_quantity(&mut self, item_id: i64, delta: i32) -> StorageResult<bool> {
        let Some(line) = self.lines.iter_mut().find(|line| line.item_id == item_id) else {
            return Ok(false);
        };
        line.quantity = (line.quantity + delta).max(1);
        self.persist()?;
        Ok(true)
    }

    /// Empty the cart and drop the cache entry
    pub fn clear(&mut self) -> StorageResult<()> {
        self.lines.clear();
        self.storage.clear()
    }

    /// Cart total, recomputed on demand
    pub fn total(&self) -> f64 {
        money::cart_total(&self.lines)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn storage(&self) -> &CartStorage {
        &self.storage
    }

    fn persist(&self) -> StorageResult<()> {
        self.storage.save(&self.lines)
    }
}
