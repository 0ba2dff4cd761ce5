//! Shared types for the Menu Fast kiosk
//!
//! Common types used across the workspace: menu catalog models, cart and
//! order types, and the command/event/response surface of the kiosk engine.

pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
