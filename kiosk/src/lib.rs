//! Menu Fast Kiosk - self-service ordering engine
//!
//! # Architecture
//!
//! The engine is a single-owner state store with an event-driven mutation
//! API. A UI issues [`KioskCommand`]s, subscribes to [`KioskEvent`]s, and
//! reads the query surface of [`KioskManager`]; rendering never touches
//! engine state directly.
//!
//! - **Catalog** (`catalog`): static menu with category filtering
//! - **Cart** (`cart`): quantity-merged cart lines, write-through persisted
//!   to an embedded redb cache
//! - **Checkout** (`checkout`): payment simulation state machine
//! - **Manager** (`manager`): command processing, event broadcast, and the
//!   timer chains driving the simulated payment and delivery timelines
//!
//! # Module Structure
//!
//! ```text
//! kiosk/src/
//! ├── core/          # Configuration
//! ├── catalog/       # Menu catalog
//! ├── cart/          # Cart manager + redb cache
//! ├── checkout/      # Payment simulation state machine
//! ├── manager/       # Command processing, events, timer chains
//! ├── money.rs       # Decimal-precise totals
//! └── utils/         # Logging setup
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod manager;
pub mod money;
pub mod utils;

// Re-export public types
pub use cart::{CartManager, CartStorage, StorageError, StorageResult};
pub use catalog::MenuCatalog;
pub use checkout::{CheckoutError, CheckoutFlow, CheckoutState};
pub use core::Config;
pub use manager::{KioskManager, ManagerError, ManagerResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Re-export shared types for convenience
pub use shared::models::{MenuCategory, MenuFilter, MenuItem};
pub use shared::order::{
    CartLine, CommandError, CommandErrorCode, CommandResponse, EventPayload, KioskCommand,
    KioskCommandPayload, KioskEvent, OrderSnapshot, OrderStatus, PaymentInput, PaymentMethod,
};
