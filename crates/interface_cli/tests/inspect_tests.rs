//! Integration tests for payload inspection

use core_kernel::{Currency, DecodeError};
use interface_cli::{inspect, EntityKind, InspectError, PayloadFormat};
use test_utils::{LineItemPayload, Payload, PayloadFixtures};

#[test]
fn test_renewal_preview_from_xml() {
    let inspection = inspect(
        EntityKind::RenewalPreview,
        None,
        PayloadFixtures::renewal_preview_xml(),
    )
    .unwrap();

    assert_eq!(inspection.format, PayloadFormat::Xml);
    assert_eq!(inspection.summary, "Renewal Preview: $ 60.00");
    assert_eq!(inspection.headline_cents, Some(7500));
    assert_eq!(inspection.document["line_items"][1]["kind"], "quantity_based_component");
}

#[test]
fn test_subscription_preview_from_json() {
    let inspection = inspect(
        EntityKind::SubscriptionPreview,
        None,
        PayloadFixtures::subscription_preview_json(),
    )
    .unwrap();

    assert_eq!(inspection.format, PayloadFormat::Json);
    assert_eq!(inspection.summary, "Subscription Preview");
    assert_eq!(inspection.headline_cents, Some(0));
    assert_eq!(
        inspection.document["next_billing_manifest"]["total_in_cents"],
        4871
    );
}

#[test]
fn test_headline_uses_configured_currency() {
    let inspection = inspect(
        EntityKind::LineItem,
        Some(PayloadFormat::Json),
        &LineItemPayload::new().with_amount_in_cents(1234).json_document(),
    )
    .unwrap();

    let headline = inspection.headline(Currency::EUR).unwrap();
    assert_eq!(headline.to_string(), "€ 12.34");
    assert_eq!(inspection.summary, "line item charge: $ 12.34");
}

#[test]
fn test_wrong_entity_is_a_root_error() {
    let err = inspect(
        EntityKind::BillingManifest,
        None,
        PayloadFixtures::renewal_preview_xml(),
    )
    .unwrap_err();

    match err {
        InspectError::Decode(DecodeError::UnexpectedRoot { expected, found }) => {
            assert_eq!(expected, "billing_manifest");
            assert_eq!(found, "renewal_preview");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_malformed_xml_is_reported() {
    let err = inspect(EntityKind::Taxation, None, "<taxation><tax_name>VAT</taxation>").unwrap_err();
    assert!(matches!(err, InspectError::Decode(DecodeError::MalformedXml(_))));
}
