//! Order-quantity clamp for the product quantity stepper.
//!
//! A customer may order between 1 and 10 units of a product, never more than
//! the stock on hand. The stepper on the product page and any server-side
//! interpretation of a submitted quantity both go through these functions.

/// The most units of a single product one order may contain.
pub const MAX_ORDER_QUANTITY: u32 = 10;

/// The upper bound of the quantity stepper for a product with `stock` units
/// on hand.
///
/// Returns 0 when the product is out of stock, in which case the stepper is
/// not shown at all.
#[must_use]
pub const fn max_order_quantity(stock: u32) -> u32 {
    if stock < MAX_ORDER_QUANTITY {
        stock
    } else {
        MAX_ORDER_QUANTITY
    }
}

/// Clamp a requested quantity into `[1, max_order_quantity(stock)]`.
///
/// Out-of-range requests (including zero and negative values from tampered
/// form input) snap to the nearest bound. Returns 0 only when the product is
/// out of stock.
#[must_use]
pub fn clamp_order_quantity(requested: i64, stock: u32) -> u32 {
    let max = max_order_quantity(stock);
    if max == 0 {
        return 0;
    }
    u32::try_from(requested.clamp(1, i64::from(max))).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_is_stock_when_low() {
        assert_eq!(max_order_quantity(3), 3);
        assert_eq!(max_order_quantity(0), 0);
    }

    #[test]
    fn test_max_is_capped_at_ten() {
        assert_eq!(max_order_quantity(10), 10);
        assert_eq!(max_order_quantity(50), 10);
    }

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp_order_quantity(0, 5), 1);
        assert_eq!(clamp_order_quantity(-4, 5), 1);
        assert_eq!(clamp_order_quantity(7, 5), 5);
        assert_eq!(clamp_order_quantity(99, 50), 10);
        assert_eq!(clamp_order_quantity(4, 50), 4);
    }

    #[test]
    fn test_clamp_out_of_stock() {
        assert_eq!(clamp_order_quantity(1, 0), 0);
    }

    #[test]
    fn test_any_step_sequence_stays_in_range() {
        // Simulates the stepper: an arbitrary mix of +1/-1 clicks never
        // leaves [1, min(stock, 10)].
        for stock in [1_u32, 3, 10, 25] {
            let mut quantity = 1_i64;
            for (i, step) in [1_i64, 1, -1, 1, 1, 1, 1, 1, 1, 1, 1, -1, -1, -1, -1, -1]
                .iter()
                .cycle()
                .take(64)
                .enumerate()
            {
                quantity = i64::from(clamp_order_quantity(quantity + step, stock));
                assert!(
                    (1..=i64::from(max_order_quantity(stock))).contains(&quantity),
                    "escaped range at step {i} with stock {stock}: {quantity}"
                );
            }
        }
    }
}
