//! Kiosk events - facts broadcast after command processing
//!
//! The UI renders exclusively from these events plus the query surface of
//! the manager; it never reaches into engine state directly.

use super::snapshot::{OrderSnapshot, OrderStatus};
use super::types::{CartLine, PaymentMethod};
use serde::{Deserialize, Serialize};

/// Kiosk event envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KioskEvent {
    /// Event unique ID
    pub event_id: String,
    /// Engine timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Event payload
    pub payload: EventPayload,
}

impl KioskEvent {
    pub fn new(payload: EventPayload) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            timestamp: crate::util::now_millis(),
            payload,
        }
    }
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    // ========== Cart ==========
    /// Cart contents changed (add/remove/quantity/clear)
    CartChanged { lines: Vec<CartLine>, total: f64 },

    // ========== Checkout ==========
    /// Payment form opened
    CheckoutStarted,
    /// Payment form abandoned before submission
    CheckoutCancelled,
    /// Payment submitted, simulated processing underway
    PaymentProcessing { method: PaymentMethod },
    /// Payment approved, order captured from the cart
    OrderConfirmed { order: OrderSnapshot },
    /// Confirmation display finished, checkout returned to idle
    CheckoutClosed,

    // ========== Order Timeline ==========
    /// Tracked order advanced along the delivery timeline
    OrderStatusChanged {
        order_id: String,
        status: OrderStatus,
    },
    /// Tracked order discarded by the customer
    OrderDismissed { order_id: String },
}
