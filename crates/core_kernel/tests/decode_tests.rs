//! Tests for the shared field decoders and the Decode entry points
//!
//! A small `Probe` entity exercises the trait the same way the billing
//! entities do.

use chrono::{TimeZone, Utc};
use core_kernel::field::{
    decode_bool, decode_datetime, decode_int, decode_list, decode_nested, decode_string,
    is_unset_date, parse_datetime,
};
use core_kernel::{Decode, DecodeError, Record, Value, UNSET_DATE};
use serde_json::json;

#[derive(Debug, Default, PartialEq)]
struct Probe {
    count: i64,
    label: Option<String>,
    tags: Option<Vec<String>>,
    child: Option<Box<Probe>>,
}

impl Decode for Probe {
    const ROOT: &'static str = "probe";

    fn decode_fields(record: &Record) -> Result<Self, DecodeError> {
        let mut probe = Probe::default();
        for (key, value) in record.fields() {
            match key {
                "count" => probe.count = decode_int(value),
                "label" => probe.label = decode_string(value),
                "tags" => {
                    probe.tags = Some(decode_list(value, "tag", |tag| {
                        Ok(decode_string(tag).unwrap_or_default())
                    })?)
                }
                "child" => probe.child = decode_nested::<Probe>(value, "child")?.map(Box::new),
                _ => {}
            }
        }
        Ok(probe)
    }
}

mod scalars {
    use super::*;

    #[test]
    fn test_bool_accepts_text_and_json() {
        assert!(decode_bool(&Value::from("TRUE")));
        assert!(decode_bool(&Value::Bool(true)));
        assert!(!decode_bool(&Value::from("no")));
        assert!(!decode_bool(&Value::Null));
    }

    #[test]
    fn test_string_renders_scalars() {
        assert_eq!(decode_string(&Value::Integer(42)), Some("42".to_string()));
        assert_eq!(decode_string(&Value::Bool(false)), Some("false".to_string()));
        assert_eq!(decode_string(&Value::Null), None);
    }

    #[test]
    fn test_datetime_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 15, 0, 0).unwrap();

        assert_eq!(parse_datetime("2024-03-01T10:00:00-05:00"), Some(expected));
        assert_eq!(parse_datetime("2024-03-01T15:00:00Z"), Some(expected));
        assert_eq!(parse_datetime("2024-03-01T15:00:00"), Some(expected));
        assert_eq!(
            parse_datetime("2024-03-01"),
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_datetime_defaults_to_unset() {
        assert_eq!(decode_datetime(&Value::from("next tuesday")), UNSET_DATE);
        assert_eq!(decode_datetime(&Value::from("")), UNSET_DATE);
        assert!(is_unset_date(&decode_datetime(&Value::Null)));
    }
}

mod lists {
    use super::*;

    #[test]
    fn test_xml_container_filters_by_item_tag() {
        let probe = Probe::from_xml_str(
            "<probe><tags><tag>a</tag><note>ignored</note><tag>b</tag></tags></probe>",
        )
        .unwrap();

        assert_eq!(probe.tags, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_empty_containers_decode_to_empty_vec() {
        let from_xml = Probe::from_xml_str("<probe><tags/></probe>").unwrap();
        let from_json = Probe::from_json_value(&json!({ "tags": [] })).unwrap();
        let from_null = Probe::from_json_value(&json!({ "tags": null })).unwrap();

        assert_eq!(from_xml.tags, Some(vec![]));
        assert_eq!(from_json.tags, Some(vec![]));
        assert_eq!(from_null.tags, Some(vec![]));
    }

    #[test]
    fn test_absent_list_stays_none() {
        let probe = Probe::from_json_value(&json!({ "count": 1 })).unwrap();
        assert_eq!(probe.tags, None);
    }
}

mod entry_points {
    use super::*;

    #[test]
    fn test_xml_and_json_decode_equal() {
        let from_xml = Probe::from_xml_str(
            "<probe><count>7</count><label>x</label><child><count>2</count></child></probe>",
        )
        .unwrap();
        let from_json =
            Probe::from_json_str(r#"{"probe": {"count": 7, "label": "x", "child": {"count": 2}}}"#)
                .unwrap();

        assert_eq!(from_xml, from_json);
        assert_eq!(from_xml.child.as_ref().map(|child| child.count), Some(2));
    }

    #[test]
    fn test_wrong_xml_root_is_rejected() {
        let result = Probe::from_xml_str("<other><count>1</count></other>");
        assert!(matches!(result, Err(DecodeError::UnexpectedRoot { .. })));
    }

    #[test]
    fn test_childless_root_is_empty() {
        assert!(matches!(
            Probe::from_xml_str("<probe></probe>"),
            Err(DecodeError::EmptyPayload(_))
        ));
        assert!(matches!(
            Probe::from_json_str(r#"{"probe": {}}"#),
            Err(DecodeError::EmptyPayload(_))
        ));
    }

    #[test]
    fn test_null_json_is_missing_argument() {
        assert!(matches!(
            Probe::from_json_value(&serde_json::Value::Null),
            Err(DecodeError::MissingArgument(_))
        ));
        assert!(matches!(
            Probe::from_json_str(r#"{"probe": null}"#),
            Err(DecodeError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_malformed_text_is_rejected() {
        assert!(matches!(
            Probe::from_xml_str("<probe><count>1</probe>"),
            Err(DecodeError::MalformedXml(_))
        ));
        assert!(matches!(
            Probe::from_json_str("{\"probe\": "),
            Err(DecodeError::MalformedJson(_))
        ));
    }

    #[test]
    fn test_wrapped_bare_object_is_unwrapped() {
        let probe = Probe::from_json_value(&json!({ "probe": { "count": 3 } })).unwrap();
        assert_eq!(probe.count, 3);
    }

    #[test]
    fn test_nested_error_propagates() {
        let result = Probe::from_json_value(&json!({ "child": {} }));
        assert!(matches!(result, Err(DecodeError::EmptyPayload(name)) if name == "child"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let probe = Probe::from_json_value(&json!({ "count": 1, "brand_new_field": true })).unwrap();
        assert_eq!(probe.count, 1);
    }
}
