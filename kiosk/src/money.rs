//! Money calculation utilities using rust_decimal for precision
//!
//! Cart and order totals are computed with `Decimal` internally, then
//! converted back to `f64` for storage and serialization. Rounding is two
//! decimal places, half-up.

use rust_decimal::prelude::*;
use shared::order::CartLine;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Line total: unit price x quantity
pub fn line_total(price: f64, quantity: i32) -> f64 {
    let total = to_decimal(price) * Decimal::from(quantity);
    round_money(total).to_f64().unwrap_or(0.0)
}

/// Cart total: sum of price x quantity across all lines
///
/// Recomputed on demand, never cached. An empty cart totals 0.
pub fn cart_total(lines: &[CartLine]) -> f64 {
    let total: Decimal = lines
        .iter()
        .map(|line| to_decimal(line.price) * Decimal::from(line.quantity))
        .sum();
    round_money(total).to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{MenuCategory, MenuItem};

    fn line(id: i64, price: f64, quantity: i32) -> CartLine {
        let item = MenuItem::new(id, format!("Item {}", id), price, "", MenuCategory::Quick);
        CartLine::from_item(&item, quantity)
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(8.99, 2), 17.98);
        assert_eq!(line_total(3.50, 1), 3.50);
        assert_eq!(line_total(0.0, 5), 0.0);
    }

    #[test]
    fn test_cart_total_menu_scenario() {
        // Classic Burger 8.99 x 2 + Fries 3.50 x 1
        let lines = vec![line(1, 8.99, 2), line(2, 3.50, 1)];
        assert_eq!(cart_total(&lines), 21.48);
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        assert_eq!(cart_total(&[]), 0.0);
    }

    #[test]
    fn test_no_float_drift_on_repeated_cents() {
        // 0.1 + 0.2 style accumulation stays exact under decimal arithmetic
        let lines = vec![line(1, 0.10, 1), line(2, 0.20, 1)];
        assert_eq!(cart_total(&lines), 0.30);

        let lines = vec![line(1, 1.99, 3)];
        assert_eq!(cart_total(&lines), 5.97);
    }
}
