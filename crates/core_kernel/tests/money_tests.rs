//! Unit tests for the Money module
//!
//! Tests cover the cents-to-decimal conversion, Money construction,
//! predicates and display formatting.

use core_kernel::{cents_to_decimal, Currency, Money};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod conversion {
    use super::*;

    #[test]
    fn test_two_hundred_fifty_cents_is_two_fifty() {
        assert_eq!(cents_to_decimal(250), dec!(2.50));
    }

    #[test]
    fn test_conversion_keeps_cent_scale() {
        let amount = cents_to_decimal(1000);
        assert_eq!(amount.scale(), 2);
        assert_eq!(amount.to_string(), "10.00");
    }

    #[test]
    fn test_negative_cents() {
        assert_eq!(cents_to_decimal(-1995), dec!(-19.95));
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        assert_eq!(cents_to_decimal(i64::MAX) * dec!(100), Decimal::from(i64::MAX));
        assert_eq!(cents_to_decimal(i64::MIN + 1) * dec!(100), Decimal::from(i64::MIN + 1));
    }
}

mod creation {
    use super::*;

    #[test]
    fn test_from_cents_uses_requested_currency() {
        let m = Money::from_cents(10050, Currency::GBP);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::GBP);
    }

    #[test]
    fn test_negative_amount_keeps_sign() {
        let m = Money::from_cents(-500, Currency::USD);
        assert_eq!(m.amount(), dec!(-5.00));
    }
}

mod display {
    use super::*;

    #[test]
    fn test_display_uses_symbol_and_two_places() {
        assert_eq!(Money::from_cents(1000, Currency::USD).to_string(), "$ 10.00");
        assert_eq!(Money::from_cents(5, Currency::CAD).to_string(), "C$ 0.05");
    }

    #[test]
    fn test_currency_display_is_iso_code() {
        assert_eq!(Currency::CHF.to_string(), "CHF");
        assert_eq!(Currency::default(), Currency::USD);
    }

    #[test]
    fn test_currency_deserializes_from_uppercase_code() {
        let currency: Currency = serde_json::from_str("\"EUR\"").unwrap();
        assert_eq!(currency, Currency::EUR);
    }
}

proptest! {
    #[test]
    fn decimal_amount_is_exactly_cents_over_hundred(cents in -1_000_000_000_000_000i64..1_000_000_000_000_000i64) {
        let amount = cents_to_decimal(cents);
        prop_assert_eq!(amount, Decimal::from(cents) / dec!(100));
    }

    #[test]
    fn money_from_cents_matches_conversion(cents in -1_000_000_000i64..1_000_000_000i64) {
        prop_assert_eq!(Money::from_cents(cents, Currency::USD).amount(), cents_to_decimal(cents));
    }
}
