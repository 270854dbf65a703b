//! Payload inspection
//!
//! Decodes a payload into the requested entity and renders it back as a
//! one-line summary plus its JSON form.

use std::fmt;

use clap::ValueEnum;
use core_kernel::{Currency, Decode, DecodeError, Money};
use domain_billing::{BillingManifest, LineItem, RenewalPreview, SubscriptionPreview, Taxation};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Entities the inspector can decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Taxation,
    LineItem,
    BillingManifest,
    RenewalPreview,
    SubscriptionPreview,
}

impl EntityKind {
    /// Root element / wrapper key of the entity
    pub fn root(&self) -> &'static str {
        match self {
            EntityKind::Taxation => Taxation::ROOT,
            EntityKind::LineItem => LineItem::ROOT,
            EntityKind::BillingManifest => BillingManifest::ROOT,
            EntityKind::RenewalPreview => RenewalPreview::ROOT,
            EntityKind::SubscriptionPreview => SubscriptionPreview::ROOT,
        }
    }
}

/// Wire format of a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadFormat {
    Xml,
    Json,
}

impl fmt::Display for PayloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadFormat::Xml => write!(f, "xml"),
            PayloadFormat::Json => write!(f, "json"),
        }
    }
}

/// Inspection errors
#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Cannot tell the payload format; pass --format")]
    UnknownFormat,

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Failed to render entity as JSON: {0}")]
    Render(#[from] serde_json::Error),
}

/// Guesses the format from the first non-whitespace character
pub fn detect_format(text: &str) -> Option<PayloadFormat> {
    match text.trim_start().chars().next()? {
        '<' => Some(PayloadFormat::Xml),
        '{' => Some(PayloadFormat::Json),
        _ => None,
    }
}

/// A decoded payload, ready to print
#[derive(Debug, Clone)]
pub struct Inspection {
    pub entity: EntityKind,
    pub format: PayloadFormat,
    /// The entity's `Display` rendering
    pub summary: String,
    /// The amount that characterises the entity, when it has one
    pub headline_cents: Option<i64>,
    /// The entity serialized with wire field names
    pub document: serde_json::Value,
}

impl Inspection {
    /// Headline amount in the given currency
    pub fn headline(&self, currency: Currency) -> Option<Money> {
        self.headline_cents
            .map(|cents| Money::from_cents(cents, currency))
    }
}

/// Decodes `text` as `entity`, detecting the format when none is given
pub fn inspect(
    entity: EntityKind,
    format: Option<PayloadFormat>,
    text: &str,
) -> Result<Inspection, InspectError> {
    let format = match format {
        Some(format) => format,
        None => detect_format(text).ok_or(InspectError::UnknownFormat)?,
    };
    debug!(entity = entity.root(), %format, bytes = text.len(), "decoding payload");

    let inspection = match entity {
        EntityKind::Taxation => {
            inspect_as::<Taxation>(entity, format, text, |taxation| Some(taxation.tax_amount_in_cents()))
        }
        EntityKind::LineItem => {
            inspect_as::<LineItem>(entity, format, text, |item| Some(item.amount_in_cents()))
        }
        EntityKind::BillingManifest => {
            inspect_as::<BillingManifest>(entity, format, text, |manifest| Some(manifest.total_in_cents()))
        }
        EntityKind::RenewalPreview => {
            inspect_as::<RenewalPreview>(entity, format, text, |preview| {
                Some(preview.total_amount_due_in_cents())
            })
        }
        EntityKind::SubscriptionPreview => {
            inspect_as::<SubscriptionPreview>(entity, format, text, |preview| {
                preview.current_billing_manifest().map(BillingManifest::total_in_cents)
            })
        }
    }?;

    info!(
        entity = entity.root(),
        %format,
        summary = %inspection.summary,
        "decoded payload"
    );
    Ok(inspection)
}

fn inspect_as<T>(
    entity: EntityKind,
    format: PayloadFormat,
    text: &str,
    headline: impl Fn(&T) -> Option<i64>,
) -> Result<Inspection, InspectError>
where
    T: Decode + Serialize + fmt::Display,
{
    let decoded = match format {
        PayloadFormat::Xml => T::from_xml_str(text)?,
        PayloadFormat::Json => T::from_json_str(text)?,
    };

    Ok(Inspection {
        entity,
        format,
        summary: decoded.to_string(),
        headline_cents: headline(&decoded),
        document: serde_json::to_value(&decoded)?,
    })
}
