//! Custom Test Assertions
//!
//! Provides assertion helpers for provider amounts that give more meaningful
//! failure messages than a bare `assert_eq!`.

use core_kernel::{Currency, Money};
use rust_decimal::Decimal;

/// Asserts that a decimal accessor agrees with its `*_in_cents` source
///
/// # Panics
///
/// Panics if `amount * 100` differs from `cents` or the amount does not
/// carry exactly two decimal places.
pub fn assert_decimal_matches_cents(amount: Decimal, cents: i64) {
    assert_eq!(
        amount * Decimal::ONE_HUNDRED,
        Decimal::from(cents),
        "Decimal amount {} does not match {} cents",
        amount,
        cents
    );
    assert_eq!(
        amount.scale(),
        2,
        "Expected a two-place amount for {} cents, got {}",
        cents,
        amount
    );
}

/// Asserts that an amount renders as the expected US dollar string
pub fn assert_usd_display(cents: i64, expected: &str) {
    let rendered = Money::from_cents(cents, Currency::USD).to_string();
    assert_eq!(
        rendered, expected,
        "Expected {} cents to render as {:?}, got {:?}",
        cents, expected, rendered
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_assert_decimal_matches_cents() {
        assert_decimal_matches_cents(dec!(5.00), 500);
        assert_decimal_matches_cents(dec!(-0.01), -1);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_assert_decimal_matches_cents_fails() {
        assert_decimal_matches_cents(dec!(5.00), 50);
    }

    #[test]
    fn test_assert_usd_display() {
        assert_usd_display(1000, "$ 10.00");
    }
}
