//! Kiosk commands - requests from the UI to mutate engine state

use super::types::PaymentInput;
use serde::{Deserialize, Serialize};

/// Kiosk command envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KioskCommand {
    /// Command unique ID
    pub command_id: String,
    /// Client timestamp (Unix milliseconds)
    pub timestamp: i64,
    /// Command payload
    pub payload: KioskCommandPayload,
}

impl KioskCommand {
    pub fn new(payload: KioskCommandPayload) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            timestamp: crate::util::now_millis(),
            payload,
        }
    }
}

/// Command payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KioskCommandPayload {
    // ========== Cart ==========
    /// Add one unit of a menu item (increments quantity if already present)
    AddItem { item_id: i64 },
    /// Remove a line entirely (no-op if absent)
    RemoveItem { item_id: i64 },
    /// Adjust quantity by delta, clamped at 1 (no-op if absent)
    ChangeQuantity { item_id: i64, delta: i32 },

    // ========== Checkout ==========
    /// Open the payment form
    BeginCheckout,
    /// Submit the selected payment method
    SubmitPayment { payment: PaymentInput },
    /// Abandon the payment form (only before payment is submitted)
    CancelCheckout,

    // ========== Order ==========
    /// Discard the tracked order regardless of its status
    DismissOrder,
}
