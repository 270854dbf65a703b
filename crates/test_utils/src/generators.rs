//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating provider payloads. Free text
//! may carry leading and trailing spaces, which both wire formats must keep.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

use crate::builders::{
    BillingManifestPayload, LineItemPayload, RenewalPreviewPayload, SubscriptionPreviewPayload,
    TaxationPayload,
};

/// Charge kinds the provider documents
pub const CHARGE_KIND_CODES: &[&str] = &[
    "baseline",
    "initial",
    "trial",
    "quantity_based_component",
    "on_off_component",
    "metered_component",
    "prepaid_usage_component",
    "event_based_component",
    "delay_capture",
    "coupon",
    "tax",
];

/// Transaction types the provider documents
pub const TRANSACTION_TYPE_CODES: &[&str] = &[
    "charge",
    "refund",
    "payment",
    "credit",
    "payment_authorization",
    "info",
    "adjustment",
];

/// Strategy for amounts in cents, including credits
pub fn cents_strategy() -> impl Strategy<Value = i64> {
    -1_000_000_000i64..1_000_000_000i64
}

/// Strategy for non-negative amounts in cents
pub fn positive_cents_strategy() -> impl Strategy<Value = i64> {
    0i64..1_000_000_000i64
}

/// Strategy for instants during 2024, second precision
pub fn timestamp_2024_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..366 * 24 * 3600).prop_map(|seconds| {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(seconds)
    })
}

/// Strategy for RFC 3339 timestamps as the provider formats them
pub fn timestamp_text_strategy() -> impl Strategy<Value = String> {
    timestamp_2024_strategy().prop_map(|instant| instant.to_rfc3339())
}

/// Picks a documented code, or an undocumented one to exercise the fallback
fn wire_code_strategy(known: &'static [&'static str]) -> impl Strategy<Value = String> {
    prop_oneof![
        4 => proptest::sample::select(known).prop_map(str::to_string),
        1 => "[a-z][a-z_]{2,15}[a-z]",
    ]
}

/// Strategy for `kind` codes, documented or not
pub fn charge_kind_code_strategy() -> impl Strategy<Value = String> {
    wire_code_strategy(CHARGE_KIND_CODES)
}

/// Strategy for `transaction_type` codes, documented or not
pub fn transaction_type_code_strategy() -> impl Strategy<Value = String> {
    wire_code_strategy(TRANSACTION_TYPE_CODES)
}

/// Strategy for free text such as memos and tax names
pub fn label_strategy() -> impl Strategy<Value = String> {
    " {0,2}[A-Z][a-z]{2,12}( [A-Za-z0-9&<>]{1,8}){0,3} {0,2}"
}

/// Strategy for taxation payloads
pub fn taxation_payload_strategy() -> impl Strategy<Value = TaxationPayload> {
    (
        option::of("0\\.[0-9]{1,4}"),
        positive_cents_strategy(),
        option::of("[1-9][0-9]{0,5}"),
        option::of(label_strategy()),
        option::of(vec("[a-z]{3,10}", 0..4)),
    )
        .prop_map(|(rate, tax_amount_in_cents, tax_id, tax_name, tax_rules)| TaxationPayload {
            rate,
            tax_amount_in_cents,
            tax_id,
            tax_name,
            tax_rules,
        })
}

/// Strategy for line item payloads
pub fn line_item_payload_strategy() -> impl Strategy<Value = LineItemPayload> {
    (
        cents_strategy(),
        positive_cents_strategy(),
        charge_kind_code_strategy(),
        option::of(label_strategy()),
        positive_cents_strategy(),
        transaction_type_code_strategy(),
        option::of(vec(taxation_payload_strategy(), 0..3)),
    )
        .prop_map(
            |(amount, discount, kind, memo, taxable, transaction_type, taxations)| LineItemPayload {
                amount_in_cents: amount,
                discount_amount_in_cents: discount,
                kind,
                memo,
                taxable_amount_in_cents: taxable,
                transaction_type,
                taxations,
            },
        )
}

/// Strategy for billing manifest payloads
pub fn billing_manifest_payload_strategy() -> impl Strategy<Value = BillingManifestPayload> {
    (
        option::of(timestamp_text_strategy()),
        option::of(timestamp_text_strategy()),
        prop_oneof![Just("recurring".to_string()), "[a-z]{4,10}"],
        vec(cents_strategy(), 5),
        option::of(vec(line_item_payload_strategy(), 0..4)),
    )
        .prop_map(|(start_date, end_date, period_type, amounts, line_items)| {
            BillingManifestPayload {
                start_date,
                end_date,
                period_type,
                existing_balance_in_cents: amounts[0],
                subtotal_in_cents: amounts[1],
                total_discount_in_cents: amounts[2],
                total_tax_in_cents: amounts[3],
                total_in_cents: amounts[4],
                line_items,
            }
        })
}

/// Strategy for renewal preview payloads
pub fn renewal_preview_payload_strategy() -> impl Strategy<Value = RenewalPreviewPayload> {
    (
        option::of(timestamp_text_strategy()),
        vec(cents_strategy(), 6),
        any::<bool>(),
        option::of(vec(line_item_payload_strategy(), 0..4)),
    )
        .prop_map(|(next_assessment_at, amounts, uncalculated_taxes, line_items)| {
            RenewalPreviewPayload {
                next_assessment_at,
                existing_balance_in_cents: amounts[0],
                subtotal_in_cents: amounts[1],
                total_discount_in_cents: amounts[2],
                total_tax_in_cents: amounts[3],
                total_in_cents: amounts[4],
                total_amount_due_in_cents: amounts[5],
                uncalculated_taxes,
                line_items,
            }
        })
}

/// Strategy for subscription preview payloads
pub fn subscription_preview_payload_strategy() -> impl Strategy<Value = SubscriptionPreviewPayload> {
    (
        option::of(billing_manifest_payload_strategy()),
        option::of(billing_manifest_payload_strategy()),
    )
        .prop_map(|(current, next)| SubscriptionPreviewPayload {
            current_billing_manifest: current,
            next_billing_manifest: next,
        })
}
