//! Tax entries applied to a line item

use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

use core_kernel::field::{decode_int, decode_list, decode_string};
use core_kernel::{cents_to_decimal, Currency, Decode, DecodeError, Money, Record};

const RATE: &str = "rate";
const TAX_AMOUNT_IN_CENTS: &str = "tax_amount_in_cents";
const TAX_ID: &str = "tax_id";
const TAX_NAME: &str = "tax_name";
const TAX_RULES: &str = "tax_rules";
const TAX_RULE_ITEM: &str = "tax_rule";

/// One tax applied to a charge
#[derive(Debug, Clone, Default, Serialize)]
pub struct Taxation {
    #[serde(skip_serializing_if = "Option::is_none")]
    rate: Option<String>,
    tax_amount_in_cents: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    tax_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tax_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tax_rules: Option<Vec<String>>,
}

impl Taxation {
    /// Tax rate exactly as the provider formats it (e.g. `"0.0825"`)
    pub fn rate(&self) -> Option<&str> {
        self.rate.as_deref()
    }

    pub fn tax_amount_in_cents(&self) -> i64 {
        self.tax_amount_in_cents
    }

    pub fn tax_amount(&self) -> Decimal {
        cents_to_decimal(self.tax_amount_in_cents)
    }

    pub fn tax_id(&self) -> Option<&str> {
        self.tax_id.as_deref()
    }

    pub fn tax_name(&self) -> Option<&str> {
        self.tax_name.as_deref()
    }

    /// Rules that produced this tax, in provider order
    pub fn tax_rules(&self) -> Option<&[String]> {
        self.tax_rules.as_deref()
    }

    /// Orders by tax name; unnamed taxes sort first
    pub fn cmp_by_tax_name(&self, other: &Self) -> Ordering {
        self.tax_name.cmp(&other.tax_name)
    }
}

impl Decode for Taxation {
    const ROOT: &'static str = "taxation";

    fn decode_fields(record: &Record) -> Result<Self, DecodeError> {
        let mut taxation = Taxation::default();

        for (key, value) in record.fields() {
            match key {
                RATE => taxation.rate = decode_string(value),
                TAX_AMOUNT_IN_CENTS => taxation.tax_amount_in_cents = decode_int(value),
                TAX_ID => taxation.tax_id = decode_string(value),
                TAX_NAME => taxation.tax_name = decode_string(value),
                TAX_RULES => {
                    let rules = decode_list(value, TAX_RULE_ITEM, |rule| {
                        Ok(decode_string(rule).unwrap_or_default())
                    })?;
                    taxation.tax_rules = Some(rules);
                }
                other => trace!(field = other, "ignoring unknown taxation field"),
            }
        }

        Ok(taxation)
    }
}

/// Compares rate, amount and name only; `tax_id` and `tax_rules` are not compared
impl PartialEq for Taxation {
    fn eq(&self, other: &Self) -> bool {
        self.rate == other.rate
            && self.tax_amount_in_cents == other.tax_amount_in_cents
            && self.tax_name == other.tax_name
    }
}

impl fmt::Display for Taxation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "taxation {}: {}",
            self.tax_name.as_deref().unwrap_or("unnamed"),
            Money::from_cents(self.tax_amount_in_cents, Currency::USD)
        )
    }
}
