//! Chargify billing previews
//!
//! Decodes the billing-preview payloads of the Chargify API, in XML or JSON,
//! into strongly typed records.
//!
//! # Crates
//!
//! - `core_kernel`: money, the intermediate field representation, XML/JSON adapters
//! - `domain_billing`: the preview entities
//!
//! # Example
//!
//! ```rust
//! use chargify_previews::{Decode, RenewalPreview};
//!
//! let preview = RenewalPreview::from_json_str(
//!     r#"{"renewal_preview": {"total_in_cents": 6000, "uncalculated_taxes": false}}"#,
//! )?;
//!
//! assert_eq!(preview.to_string(), "Renewal Preview: $ 60.00");
//! # Ok::<(), chargify_previews::DecodeError>(())
//! ```

pub use core_kernel::{cents_to_decimal, Currency, Money};
pub use domain_billing::*;
