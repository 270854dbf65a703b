//! Renewal previews: the forecast of a subscription's next renewal charge

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

use core_kernel::field::{decode_bool, decode_datetime, decode_int, decode_list, is_unset_date};
use core_kernel::{cents_to_decimal, Currency, Decode, DecodeError, Money, Record, UNSET_DATE};

use crate::line_item::LineItem;

const NEXT_ASSESSMENT_AT: &str = "next_assessment_at";
const EXISTING_BALANCE_IN_CENTS: &str = "existing_balance_in_cents";
const SUBTOTAL_IN_CENTS: &str = "subtotal_in_cents";
const TOTAL_DISCOUNT_IN_CENTS: &str = "total_discount_in_cents";
const TOTAL_TAX_IN_CENTS: &str = "total_tax_in_cents";
const TOTAL_IN_CENTS: &str = "total_in_cents";
const TOTAL_AMOUNT_DUE_IN_CENTS: &str = "total_amount_due_in_cents";
const UNCALCULATED_TAXES: &str = "uncalculated_taxes";
const LINE_ITEMS: &str = "line_items";

/// Forecast of the next renewal, before it is billed
#[derive(Debug, Clone, Serialize)]
pub struct RenewalPreview {
    #[serde(skip_serializing_if = "is_unset_date")]
    next_assessment_at: DateTime<Utc>,
    existing_balance_in_cents: i64,
    subtotal_in_cents: i64,
    total_discount_in_cents: i64,
    total_tax_in_cents: i64,
    total_in_cents: i64,
    total_amount_due_in_cents: i64,
    uncalculated_taxes: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_items: Option<Vec<LineItem>>,
}

impl Default for RenewalPreview {
    fn default() -> Self {
        Self {
            next_assessment_at: UNSET_DATE,
            existing_balance_in_cents: 0,
            subtotal_in_cents: 0,
            total_discount_in_cents: 0,
            total_tax_in_cents: 0,
            total_in_cents: 0,
            total_amount_due_in_cents: 0,
            uncalculated_taxes: false,
            line_items: None,
        }
    }
}

impl RenewalPreview {
    /// When the renewal will be assessed, or [`UNSET_DATE`] when not reported
    pub fn next_assessment_at(&self) -> DateTime<Utc> {
        self.next_assessment_at
    }

    pub fn existing_balance_in_cents(&self) -> i64 {
        self.existing_balance_in_cents
    }

    pub fn existing_balance(&self) -> Decimal {
        cents_to_decimal(self.existing_balance_in_cents)
    }

    pub fn subtotal_in_cents(&self) -> i64 {
        self.subtotal_in_cents
    }

    pub fn subtotal(&self) -> Decimal {
        cents_to_decimal(self.subtotal_in_cents)
    }

    pub fn total_discount_in_cents(&self) -> i64 {
        self.total_discount_in_cents
    }

    pub fn total_discount(&self) -> Decimal {
        cents_to_decimal(self.total_discount_in_cents)
    }

    pub fn total_tax_in_cents(&self) -> i64 {
        self.total_tax_in_cents
    }

    pub fn total_tax(&self) -> Decimal {
        cents_to_decimal(self.total_tax_in_cents)
    }

    pub fn total_in_cents(&self) -> i64 {
        self.total_in_cents
    }

    pub fn total(&self) -> Decimal {
        cents_to_decimal(self.total_in_cents)
    }

    pub fn total_amount_due_in_cents(&self) -> i64 {
        self.total_amount_due_in_cents
    }

    /// Total plus the existing balance carried into the renewal
    pub fn total_amount_due(&self) -> Decimal {
        cents_to_decimal(self.total_amount_due_in_cents)
    }

    /// True when the provider could not compute taxes for this preview
    pub fn uncalculated_taxes(&self) -> bool {
        self.uncalculated_taxes
    }

    pub fn line_items(&self) -> Option<&[LineItem]> {
        self.line_items.as_deref()
    }

    /// Orders by total in cents
    pub fn cmp_by_total(&self, other: &Self) -> Ordering {
        self.total_in_cents.cmp(&other.total_in_cents)
    }
}

impl Decode for RenewalPreview {
    const ROOT: &'static str = "renewal_preview";

    fn decode_fields(record: &Record) -> Result<Self, DecodeError> {
        let mut preview = RenewalPreview::default();

        for (key, value) in record.fields() {
            match key {
                NEXT_ASSESSMENT_AT => preview.next_assessment_at = decode_datetime(value),
                EXISTING_BALANCE_IN_CENTS => preview.existing_balance_in_cents = decode_int(value),
                SUBTOTAL_IN_CENTS => preview.subtotal_in_cents = decode_int(value),
                TOTAL_DISCOUNT_IN_CENTS => preview.total_discount_in_cents = decode_int(value),
                TOTAL_TAX_IN_CENTS => preview.total_tax_in_cents = decode_int(value),
                TOTAL_IN_CENTS => preview.total_in_cents = decode_int(value),
                TOTAL_AMOUNT_DUE_IN_CENTS => preview.total_amount_due_in_cents = decode_int(value),
                UNCALCULATED_TAXES => preview.uncalculated_taxes = decode_bool(value),
                LINE_ITEMS => {
                    let items = decode_list(value, LineItem::ROOT, |entry| {
                        LineItem::from_value_as(entry, LineItem::ROOT)
                    })?;
                    preview.line_items = Some(items);
                }
                other => trace!(field = other, "ignoring unknown renewal preview field"),
            }
        }

        Ok(preview)
    }
}

/// Compares the assessment date, amounts and tax flag; `line_items` are not compared
impl PartialEq for RenewalPreview {
    fn eq(&self, other: &Self) -> bool {
        self.next_assessment_at == other.next_assessment_at
            && self.existing_balance_in_cents == other.existing_balance_in_cents
            && self.total_amount_due_in_cents == other.total_amount_due_in_cents
            && self.subtotal_in_cents == other.subtotal_in_cents
            && self.total_discount_in_cents == other.total_discount_in_cents
            && self.total_in_cents == other.total_in_cents
            && self.total_tax_in_cents == other.total_tax_in_cents
            && self.uncalculated_taxes == other.uncalculated_taxes
    }
}

impl fmt::Display for RenewalPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Renewal Preview: {}",
            Money::from_cents(self.total_in_cents, Currency::USD)
        )
    }
}
