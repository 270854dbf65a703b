//! Line items: one billable transaction within a billing period

use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

use core_kernel::field::{decode_enum, decode_int, decode_list, decode_string};
use core_kernel::{cents_to_decimal, Currency, Decode, DecodeError, Money, Record};

use crate::enums::{TransactionChargeKind, TransactionType};
use crate::taxation::Taxation;

const AMOUNT_IN_CENTS: &str = "amount_in_cents";
const DISCOUNT_AMOUNT_IN_CENTS: &str = "discount_amount_in_cents";
const KIND: &str = "kind";
const MEMO: &str = "memo";
const TAXABLE_AMOUNT_IN_CENTS: &str = "taxable_amount_in_cents";
const TAXATIONS: &str = "taxations";
const TRANSACTION_TYPE: &str = "transaction_type";

/// A single charge, credit or adjustment contributing to a manifest
#[derive(Debug, Clone, Default, Serialize)]
pub struct LineItem {
    amount_in_cents: i64,
    discount_amount_in_cents: i64,
    kind: TransactionChargeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    memo: Option<String>,
    taxable_amount_in_cents: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    taxations: Option<Vec<Taxation>>,
    transaction_type: TransactionType,
}

impl LineItem {
    pub fn amount_in_cents(&self) -> i64 {
        self.amount_in_cents
    }

    pub fn amount(&self) -> Decimal {
        cents_to_decimal(self.amount_in_cents)
    }

    pub fn discount_amount_in_cents(&self) -> i64 {
        self.discount_amount_in_cents
    }

    pub fn discount_amount(&self) -> Decimal {
        cents_to_decimal(self.discount_amount_in_cents)
    }

    pub fn kind(&self) -> TransactionChargeKind {
        self.kind
    }

    pub fn memo(&self) -> Option<&str> {
        self.memo.as_deref()
    }

    pub fn taxable_amount_in_cents(&self) -> i64 {
        self.taxable_amount_in_cents
    }

    pub fn taxable_amount(&self) -> Decimal {
        cents_to_decimal(self.taxable_amount_in_cents)
    }

    /// Taxes applied to this item; `None` when the payload had no `taxations` field
    pub fn taxations(&self) -> Option<&[Taxation]> {
        self.taxations.as_deref()
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    /// Orders by amount in cents
    pub fn cmp_by_amount(&self, other: &Self) -> Ordering {
        self.amount_in_cents.cmp(&other.amount_in_cents)
    }
}

impl Decode for LineItem {
    const ROOT: &'static str = "line_item";

    fn decode_fields(record: &Record) -> Result<Self, DecodeError> {
        let mut item = LineItem::default();

        for (key, value) in record.fields() {
            match key {
                AMOUNT_IN_CENTS => item.amount_in_cents = decode_int(value),
                DISCOUNT_AMOUNT_IN_CENTS => item.discount_amount_in_cents = decode_int(value),
                KIND => item.kind = decode_enum(value),
                MEMO => item.memo = decode_string(value),
                TAXABLE_AMOUNT_IN_CENTS => item.taxable_amount_in_cents = decode_int(value),
                TAXATIONS => {
                    let taxations = decode_list(value, Taxation::ROOT, |entry| {
                        Taxation::from_value_as(entry, Taxation::ROOT)
                    })?;
                    item.taxations = Some(taxations);
                }
                TRANSACTION_TYPE => item.transaction_type = decode_enum(value),
                other => trace!(field = other, "ignoring unknown line item field"),
            }
        }

        Ok(item)
    }
}

/// Compares the item's own scalar fields; `taxations` are not compared
impl PartialEq for LineItem {
    fn eq(&self, other: &Self) -> bool {
        self.amount_in_cents == other.amount_in_cents
            && self.discount_amount_in_cents == other.discount_amount_in_cents
            && self.kind == other.kind
            && self.memo == other.memo
            && self.taxable_amount_in_cents == other.taxable_amount_in_cents
            && self.transaction_type == other.transaction_type
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line item {}: {}",
            self.transaction_type,
            Money::from_cents(self.amount_in_cents, Currency::USD)
        )
    }
}
