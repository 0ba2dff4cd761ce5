//! Data models
//!
//! Menu catalog entities. All IDs are `i64`.

pub mod menu_item;

// Re-exports
pub use menu_item::*;
