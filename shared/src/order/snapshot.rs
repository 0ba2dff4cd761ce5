//! Order snapshot - the cart captured at confirmation time
//!
//! Immutable except for `status`, which only ever advances along the
//! simulated delivery timeline.

use super::types::CartLine;
use serde::{Deserialize, Serialize};

/// Order status along the simulated delivery timeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Preparing,
    InTransit,
    Delivered,
}

impl OrderStatus {
    /// The next status in the timeline, or `None` once delivered
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Preparing => Some(OrderStatus::InTransit),
            OrderStatus::InTransit => Some(OrderStatus::Delivered),
            OrderStatus::Delivered => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Preparing => write!(f, "PREPARING"),
            OrderStatus::InTransit => write!(f, "IN_TRANSIT"),
            OrderStatus::Delivered => write!(f, "DELIVERED"),
        }
    }
}

/// Order snapshot - created once per checkout confirmation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSnapshot {
    /// Opaque order token (assigned by the engine)
    pub order_id: String,
    /// Item lines at confirmation time
    pub items: Vec<CartLine>,
    /// Computed total at confirmation time
    pub total: f64,
    /// Current delivery status
    pub status: OrderStatus,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,
}

impl OrderSnapshot {
    /// Capture a confirmed order from the cart contents
    pub fn new(order_id: String, items: Vec<CartLine>, total: f64) -> Self {
        Self {
            order_id,
            items,
            total,
            status: OrderStatus::Preparing,
            created_at: crate::util::now_millis(),
        }
    }

    /// Advance to the next status, returning the new status
    ///
    /// Returns `None` when already delivered; the status never skips a step
    /// and never reverses.
    pub fn advance_status(&mut self) -> Option<OrderStatus> {
        let next = self.status.next()?;
        self.status = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_advances_in_strict_sequence() {
        let mut order = OrderSnapshot::new("ord-1".into(), vec![], 0.0);
        assert_eq!(order.status, OrderStatus::Preparing);

        assert_eq!(order.advance_status(), Some(OrderStatus::InTransit));
        assert_eq!(order.status, OrderStatus::InTransit);

        assert_eq!(order.advance_status(), Some(OrderStatus::Delivered));
        assert_eq!(order.status, OrderStatus::Delivered);

        // Terminal - no further transitions, never wraps back
        assert_eq!(order.advance_status(), None);
        assert_eq!(order.status, OrderStatus::Delivered);
    }

    #[test]
    fn test_status_never_skips() {
        assert_eq!(OrderStatus::Preparing.next(), Some(OrderStatus::InTransit));
        assert_eq!(OrderStatus::InTransit.next(), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::Delivered.next(), None);
    }

    #[test]
    fn test_status_wire_casing() {
        let json = serde_json::to_string(&OrderStatus::InTransit).unwrap();
        assert_eq!(json, "\"IN_TRANSIT\"");
    }
}
