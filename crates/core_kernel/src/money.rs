//! Money types with precise decimal arithmetic
//!
//! Chargify reports every currency amount as an integer number of cents.
//! This module converts those integers into exact `rust_decimal` amounts
//! and pairs them with a display currency.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places in a cents-denominated wire amount
pub const CENTS_SCALE: u32 = 2;

/// Converts an integer amount in cents to its decimal value (`cents / 100`)
///
/// The conversion is exact: the cents value becomes the mantissa of a
/// decimal with scale 2, so no rounding ever takes place.
///
/// # Example
///
/// ```rust
/// use core_kernel::money::cents_to_decimal;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(cents_to_decimal(250), dec!(2.50));
/// ```
pub fn cents_to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, CENTS_SCALE)
}

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
    CHF,
}

impl Currency {
    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::CAD => "C$",
            Currency::AUD => "A$",
            Currency::CHF => "CHF",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::CHF => "CHF",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary amount with associated currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates Money from a cents-denominated wire amount
    pub fn from_cents(cents: i64, currency: Currency) -> Self {
        Self::new(cents_to_decimal(cents), currency)
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.dp$}",
            self.currency.symbol(),
            self.amount,
            dp = CENTS_SCALE as usize
        )
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    proptest! {
        #[test]
        fn cents_times_hundred_round_trips(cents in -1_000_000_000_000i64..1_000_000_000_000i64) {
            let amount = cents_to_decimal(cents);
            prop_assert_eq!(amount * dec!(100), Decimal::from(cents));
        }
    }
}
