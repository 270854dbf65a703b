//! Tests for core_kernel error types

use core_kernel::error::DecodeError;

#[test]
fn test_unexpected_root_carries_both_names() {
    let error = DecodeError::unexpected_root("line_item", "taxation");

    match error {
        DecodeError::UnexpectedRoot { expected, found } => {
            assert_eq!(expected, "line_item");
            assert_eq!(found, "taxation");
        }
        _ => panic!("Expected UnexpectedRoot error"),
    }
}

#[test]
fn test_empty_payload() {
    let error = DecodeError::empty("billing_manifest");

    match error {
        DecodeError::EmptyPayload(name) => assert_eq!(name, "billing_manifest"),
        _ => panic!("Expected EmptyPayload error"),
    }
}

#[test]
fn test_missing_argument() {
    let error = DecodeError::missing("renewal_preview");
    assert!(matches!(error, DecodeError::MissingArgument(_)));
}

#[test]
fn test_from_serde_json_error() {
    let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: DecodeError = json_error.into();

    assert!(matches!(error, DecodeError::MalformedJson(_)));
    assert!(!error.is_structural());
}

#[test]
fn test_structural_classification() {
    assert!(DecodeError::empty("x").is_structural());
    assert!(DecodeError::missing("x").is_structural());
    assert!(DecodeError::unexpected_root("x", "y").is_structural());
    assert!(!DecodeError::malformed_xml("bad").is_structural());
}

#[test]
fn test_error_display() {
    let error = DecodeError::unexpected_root("line_item", "taxation");
    let display = format!("{}", error);

    assert!(display.contains("Unexpected root"));
    assert!(display.contains("line_item"));
    assert!(display.contains("taxation"));
}
