//! Shared types for the kiosk ordering flow

use crate::models::{MenuCategory, MenuItem};
use serde::{Deserialize, Serialize};

// ============================================================================
// Cart Types
// ============================================================================

/// A cart line - a menu item snapshot extended with a quantity
///
/// Exists only inside the cart or a captured order. Item fields are
/// denormalized at add time so a later catalog change cannot rewrite
/// history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Menu item ID
    pub item_id: i64,
    /// Item name snapshot
    pub name: String,
    /// Unit price snapshot
    pub price: f64,
    /// Image reference snapshot
    pub image: String,
    /// Category snapshot
    pub category: MenuCategory,
    /// Quantity, always >= 1
    pub quantity: i32,
}

impl CartLine {
    /// Snapshot a menu item into a line with the given quantity
    pub fn from_item(item: &MenuItem, quantity: i32) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            category: item.category,
            quantity,
        }
    }
}

// ============================================================================
// Payment Types
// ============================================================================

/// Payment method selected in the checkout form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    #[default]
    Card,
    Transfer,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "CASH"),
            PaymentMethod::Card => write!(f, "CARD"),
            PaymentMethod::Transfer => write!(f, "TRANSFER"),
        }
    }
}

/// Payment input submitted from the checkout form
///
/// Card payments carry the card number typed by the customer. Presence is
/// the only check applied - the simulator never contacts a gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInput {
    pub method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
}

impl PaymentInput {
    pub fn cash() -> Self {
        Self {
            method: PaymentMethod::Cash,
            card_number: None,
        }
    }

    pub fn card(number: impl Into<String>) -> Self {
        Self {
            method: PaymentMethod::Card,
            card_number: Some(number.into()),
        }
    }

    pub fn transfer() -> Self {
        Self {
            method: PaymentMethod::Transfer,
            card_number: None,
        }
    }
}

// ============================================================================
// Command Response
// ============================================================================

/// Command response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    /// The command ID this responds to
    pub command_id: String,
    /// Whether the command succeeded
    pub success: bool,
    /// Affected order ID (only for order-scoped commands)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    /// Error details if failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn success(command_id: String, order_id: Option<String>) -> Self {
        Self {
            command_id,
            success: true,
            order_id,
            error: None,
        }
    }

    pub fn error(command_id: String, error: CommandError) -> Self {
        Self {
            command_id,
            success: false,
            order_id: None,
            error: Some(error),
        }
    }
}

/// Command error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

impl CommandError {
    pub fn new(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Command error codes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    ItemNotFound,
    EmptyCart,
    CardNumberRequired,
    InvalidState,
    OrderNotFound,
    InternalError,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_line_snapshots_item_fields() {
        let item = MenuItem::new(1, "Classic Burger", 8.99, "img/burger.jpg", MenuCategory::Quick);
        let line = CartLine::from_item(&item, 2);

        assert_eq!(line.item_id, 1);
        assert_eq!(line.name, "Classic Burger");
        assert_eq!(line.price, 8.99);
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_payment_method_wire_casing() {
        let json = serde_json::to_string(&PaymentMethod::Transfer).unwrap();
        assert_eq!(json, "\"TRANSFER\"");
    }

    #[test]
    fn test_card_input_carries_number() {
        let input = PaymentInput::card("4111 1111 1111 1111");
        assert_eq!(input.method, PaymentMethod::Card);
        assert_eq!(input.card_number.as_deref(), Some("4111 1111 1111 1111"));

        let input = PaymentInput::cash();
        assert!(input.card_number.is_none());
    }
}
