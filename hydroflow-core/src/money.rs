use rust_decimal::{Decimal, RoundingStrategy};

/// Round a currency amount to 2 decimal places, half away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// The automatic discount applied to cash payments: 10% of the subtotal,
/// rounded to cents.
pub fn cash_discount(subtotal: Decimal) -> Decimal {
    round_money(subtotal * Decimal::new(10, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn cash_discount_is_ten_percent() {
        assert_eq!(cash_discount(dec!(15.00)), dec!(1.50));
        assert_eq!(cash_discount(dec!(45.00)), dec!(4.50));
        assert_eq!(cash_discount(dec!(0)), dec!(0));
    }

    #[test]
    fn discount_rounds_half_up() {
        // 14.55 * 0.10 = 1.455, the midpoint rounds away from zero
        assert_eq!(cash_discount(dec!(14.55)), dec!(1.46));
        assert_eq!(cash_discount(dec!(14.54)), dec!(1.45));
    }

    #[test]
    fn round_money_keeps_two_places() {
        assert_eq!(round_money(dec!(10.005)), dec!(10.01));
        assert_eq!(round_money(dec!(10.004)), dec!(10.00));
    }
}
