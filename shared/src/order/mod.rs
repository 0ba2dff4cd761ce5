//! Order Module
//!
//! This module provides the types flowing through the kiosk engine:
//! - Commands: requests from the UI to mutate cart/checkout/order state
//! - Events: facts broadcast after command processing
//! - Snapshots: the captured order state at confirmation time

pub mod command;
pub mod event;
pub mod snapshot;
pub mod types;

// Re-exports
pub use command::{KioskCommand, KioskCommandPayload};
pub use event::{EventPayload, KioskEvent};
pub use snapshot::{OrderSnapshot, OrderStatus};
pub use types::*;
