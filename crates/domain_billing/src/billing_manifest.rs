//! Billing manifests
//!
//! A manifest summarises every charge for one billing period. The provider
//! returns it standalone as `billing_manifest` and nested inside subscription
//! previews as `current_billing_manifest` / `next_billing_manifest`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

use core_kernel::field::{decode_datetime, decode_enum, decode_int, decode_list, is_unset_date};
use core_kernel::{cents_to_decimal, Currency, Decode, DecodeError, Money, Record, UNSET_DATE};

use crate::enums::PeriodType;
use crate::line_item::LineItem;

const START_DATE: &str = "start_date";
const END_DATE: &str = "end_date";
const PERIOD_TYPE: &str = "period_type";
const EXISTING_BALANCE_IN_CENTS: &str = "existing_balance_in_cents";
const SUBTOTAL_IN_CENTS: &str = "subtotal_in_cents";
const TOTAL_DISCOUNT_IN_CENTS: &str = "total_discount_in_cents";
const TOTAL_TAX_IN_CENTS: &str = "total_tax_in_cents";
const TOTAL_IN_CENTS: &str = "total_in_cents";
const LINE_ITEMS: &str = "line_items";

/// Charges for one billing period
#[derive(Debug, Clone, Serialize)]
pub struct BillingManifest {
    #[serde(skip_serializing_if = "is_unset_date")]
    start_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "is_unset_date")]
    end_date: DateTime<Utc>,
    period_type: PeriodType,
    existing_balance_in_cents: i64,
    subtotal_in_cents: i64,
    total_discount_in_cents: i64,
    total_tax_in_cents: i64,
    total_in_cents: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    line_items: Option<Vec<LineItem>>,
}

impl Default for BillingManifest {
    fn default() -> Self {
        Self {
            start_date: UNSET_DATE,
            end_date: UNSET_DATE,
            period_type: PeriodType::Unknown,
            existing_balance_in_cents: 0,
            subtotal_in_cents: 0,
            total_discount_in_cents: 0,
            total_tax_in_cents: 0,
            total_in_cents: 0,
            line_items: None,
        }
    }
}

impl BillingManifest {
    /// Start of the period, or [`UNSET_DATE`] when not reported
    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// End of the period, or [`UNSET_DATE`] when not reported
    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    pub fn period_type(&self) -> PeriodType {
        self.period_type
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

    /// Line items in provider order; `None` when the payload had no `line_items` field
    pub fn line_items(&self) -> Option<&[LineItem]> {
        self.line_items.as_deref()
    }

    /// Orders by total in cents
    pub fn cmp_by_total(&self, other: &Self) -> Ordering {
        self.total_in_cents.cmp(&other.total_in_cents)
    }
}

impl Decode for BillingManifest {
    const ROOT: &'static str = "billing_manifest";

    fn decode_fields(record: &Record) -> Result<Self, DecodeError> {
        let mut manifest = BillingManifest::default();

        for (key, value) in record.fields() {
            match key {
                START_DATE => manifest.start_date = decode_datetime(value),
                END_DATE => manifest.end_date = decode_datetime(value),
                PERIOD_TYPE => manifest.period_type = decode_enum(value),
                EXISTING_BALANCE_IN_CENTS => manifest.existing_balance_in_cents = decode_int(value),
                SUBTOTAL_IN_CENTS => manifest.subtotal_in_cents = decode_int(value),
                TOTAL_DISCOUNT_IN_CENTS => manifest.total_discount_in_cents = decode_int(value),
                TOTAL_TAX_IN_CENTS => manifest.total_tax_in_cents = decode_int(value),
                TOTAL_IN_CENTS => manifest.total_in_cents = decode_int(value),
                LINE_ITEMS => {
                    let items = decode_list(value, LineItem::ROOT, |entry| {
                        LineItem::from_value_as(entry, LineItem::ROOT)
                    })?;
                    manifest.line_items = Some(items);
                }
                other => trace!(field = other, "ignoring unknown billing manifest field"),
            }
        }

        Ok(manifest)
    }
}

/// Compares dates, period type and amounts; `line_items` are not compared
impl PartialEq for BillingManifest {
    fn eq(&self, other: &Self) -> bool {
        self.start_date == other.start_date
            && self.end_date == other.end_date
            && self.existing_balance_in_cents == other.existing_balance_in_cents
            && self.period_type == other.period_type
            && self.subtotal_in_cents == other.subtotal_in_cents
            && self.total_discount_in_cents == other.total_discount_in_cents
            && self.total_in_cents == other.total_in_cents
            && self.total_tax_in_cents == other.total_tax_in_cents
    }
}

impl fmt::Display for BillingManifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Billing Manifest: {}",
            Money::from_cents(self.total_in_cents, Currency::USD)
        )
    }
}
