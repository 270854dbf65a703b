//! Billing Domain - Chargify billing previews
//!
//! This crate decodes the billing-preview payloads returned by the Chargify
//! API into immutable, strongly typed records.
//!
//! # Entities
//!
//! - **Taxation**: one tax applied to a line item
//! - **LineItem**: one charge, credit or adjustment, owning its taxations
//! - **BillingManifest**: the charges of one billing period, owning line items
//! - **RenewalPreview**: the forecast of a subscription's next renewal
//! - **SubscriptionPreview**: current and next manifests of a prospective subscription
//!
//! Every `*_in_cents` field has a decimal accessor computed as `cents / 100`.
//!
//! # Equality
//!
//! Entity equality is scoped to the entity's own scalar fields: nested line
//! items and taxations do not take part. Ordering is exposed as single-key
//! comparator methods (`cmp_by_total`, `cmp_by_amount`, `cmp_by_tax_name`).
//!
//! # Example
//!
//! ```rust
//! use domain_billing::{Decode, LineItem, TransactionChargeKind};
//! use rust_decimal_macros::dec;
//!
//! let item = LineItem::from_xml_str(
//!     "<line_item><amount_in_cents>500</amount_in_cents><kind>initial</kind></line_item>",
//! )?;
//!
//! assert_eq!(item.amount(), dec!(5.00));
//! assert_eq!(item.kind(), TransactionChargeKind::Initial);
//! # Ok::<(), domain_billing::DecodeError>(())
//! ```

pub mod enums;
pub mod taxation;
pub mod line_item;
pub mod billing_manifest;
pub mod renewal_preview;
pub mod subscription_preview;

pub use enums::{PeriodType, TransactionChargeKind, TransactionType};
pub use taxation::Taxation;
pub use line_item::LineItem;
pub use billing_manifest::BillingManifest;
pub use renewal_preview::RenewalPreview;
pub use subscription_preview::SubscriptionPreview;

pub use core_kernel::{Decode, DecodeError, WireEnum, UNSET_DATE};
