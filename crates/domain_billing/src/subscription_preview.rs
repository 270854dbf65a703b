//! Subscription previews
//!
//! A forecast for a subscription that does not exist yet: what the signup
//! would bill now, and what the first renewal would bill.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use tracing::trace;

use core_kernel::field::decode_nested;
use core_kernel::{Decode, DecodeError, Record};

use crate::billing_manifest::BillingManifest;

const CURRENT_BILLING_MANIFEST: &str = "current_billing_manifest";
const NEXT_BILLING_MANIFEST: &str = "next_billing_manifest";

/// Current and next billing manifests of a hypothetical subscription
#[derive(Debug, Clone, Default, Serialize)]
pub struct SubscriptionPreview {
    #[serde(skip_serializing_if = "Option::is_none")]
    current_billing_manifest: Option<BillingManifest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    next_billing_manifest: Option<BillingManifest>,
}

impl SubscriptionPreview {
    /// Charges billed at signup
    pub fn current_billing_manifest(&self) -> Option<&BillingManifest> {
        self.current_billing_manifest.as_ref()
    }

    /// Charges billed at the first renewal
    pub fn next_billing_manifest(&self) -> Option<&BillingManifest> {
        self.next_billing_manifest.as_ref()
    }

    /// Orders by the current manifest's total, then the next manifest's
    ///
    /// A missing manifest sorts before a present one.
    pub fn cmp_by_manifests(&self, other: &Self) -> Ordering {
        cmp_manifest(self.current_billing_manifest(), other.current_billing_manifest())
            .then_with(|| cmp_manifest(self.next_billing_manifest(), other.next_billing_manifest()))
    }
}

fn cmp_manifest(left: Option<&BillingManifest>, right: Option<&BillingManifest>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.cmp_by_total(right),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    }
}

impl Decode for SubscriptionPreview {
    const ROOT: &'static str = "subscription_preview";

    fn decode_fields(record: &Record) -> Result<Self, DecodeError> {
        let mut preview = SubscriptionPreview::default();

        for (key, value) in record.fields() {
            match key {
                CURRENT_BILLING_MANIFEST => {
                    preview.current_billing_manifest = decode_nested(value, CURRENT_BILLING_MANIFEST)?;
                }
                NEXT_BILLING_MANIFEST => {
                    preview.next_billing_manifest = decode_nested(value, NEXT_BILLING_MANIFEST)?;
                }
                other => trace!(field = other, "ignoring unknown subscription preview field"),
            }
        }

        Ok(preview)
    }
}

/// Compares both manifests with [`BillingManifest`]'s scoped equality
impl PartialEq for SubscriptionPreview {
    fn eq(&self, other: &Self) -> bool {
        self.current_billing_manifest == other.current_billing_manifest
            && self.next_billing_manifest == other.next_billing_manifest
    }
}

impl fmt::Display for SubscriptionPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Subscription Preview")
    }
}
