//! Lenient field decoders
//!
//! Every decoder returns the field's native type or its documented default.
//! Only nested entities can fail, because their own structure is checked.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use tracing::debug;

use crate::decode::Decode;
use crate::error::DecodeError;
use crate::value::Value;

/// Date used for date fields that are absent or unparseable
pub const UNSET_DATE: DateTime<Utc> = DateTime::<Utc>::MIN_UTC;

/// Returns true when `date` is the [`UNSET_DATE`] placeholder
pub fn is_unset_date(date: &DateTime<Utc>) -> bool {
    *date == UNSET_DATE
}

/// A closed set of wire codes with a reserved `Unknown` fallback
///
/// `UNKNOWN` is never part of `VARIANTS`, so no wire value the provider
/// sends can be confused with the fallback.
pub trait WireEnum: Sized + Copy + 'static {
    /// Fallback for unrecognized or absent values
    const UNKNOWN: Self;

    /// Every recognized variant
    const VARIANTS: &'static [Self];

    /// The provider's snake_case code for this variant
    fn wire_name(&self) -> &'static str;

    /// Case-insensitive lookup by wire code
    fn from_wire(raw: &str) -> Self {
        let raw = raw.trim();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.wire_name().eq_ignore_ascii_case(raw))
            .unwrap_or(Self::UNKNOWN)
    }
}

/// Decodes an integer field; defaults to 0
pub fn decode_int(value: &Value) -> i64 {
    match value {
        Value::Integer(integer) => *integer,
        Value::Float(float) if float.fract() == 0.0 => *float as i64,
        Value::Text(text) if text.is_empty() => 0,
        Value::Text(text) => text.trim().parse().unwrap_or_else(|_| {
            debug!(raw = %text, "unparseable integer, defaulting to 0");
            0
        }),
        Value::Null => 0,
        other => {
            debug!(value = ?other, "non-integer value, defaulting to 0");
            0
        }
    }
}

/// Decodes a boolean field; defaults to false
pub fn decode_bool(value: &Value) -> bool {
    match value {
        Value::Bool(flag) => *flag,
        Value::Text(text) => text.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Decodes a string field; scalars are rendered as text, null is `None`
pub fn decode_string(value: &Value) -> Option<String> {
    match value {
        Value::Text(text) => Some(text.clone()),
        Value::Integer(integer) => Some(integer.to_string()),
        Value::Float(float) => Some(float.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::List(_) | Value::Record(_) => None,
    }
}

/// Decodes a date field; defaults to [`UNSET_DATE`]
pub fn decode_datetime(value: &Value) -> DateTime<Utc> {
    let Some(text) = value.as_text() else {
        return UNSET_DATE;
    };
    if text.is_empty() {
        return UNSET_DATE;
    }
    parse_datetime(text).unwrap_or_else(|| {
        debug!(raw = %text, "unparseable date, using unset date");
        UNSET_DATE
    })
}

/// Parses the date formats the provider emits
///
/// Accepts RFC 3339 with an offset, a naive date-time (taken as UTC) and a
/// bare `YYYY-MM-DD` date (midnight UTC).
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Decodes an enumeration field; anything unrecognized is `E::UNKNOWN`
pub fn decode_enum<E: WireEnum>(value: &Value) -> E {
    match value.as_text() {
        Some(text) => E::from_wire(text),
        None => E::UNKNOWN,
    }
}

/// Decodes a list field through a per-item decoder
///
/// JSON arrays decode every item. XML containers decode every child element
/// named `item_tag` and skip the rest. `null` and empty containers yield an
/// empty vector.
///
/// # Errors
///
/// Propagates the first error returned by `decode_item`.
pub fn decode_list<T, F>(value: &Value, item_tag: &str, mut decode_item: F) -> Result<Vec<T>, DecodeError>
where
    F: FnMut(&Value) -> Result<T, DecodeError>,
{
    match value {
        Value::List(items) => items.iter().map(&mut decode_item).collect(),
        Value::Record(container) => container
            .values_named(item_tag)
            .map(&mut decode_item)
            .collect(),
        Value::Null => Ok(Vec::new()),
        Value::Text(text) if text.is_empty() => Ok(Vec::new()),
        other => {
            debug!(value = ?other, item_tag, "scalar where a list was expected, using empty list");
            Ok(Vec::new())
        }
    }
}

/// Decodes an object-valued field through the entity decoder
///
/// # Errors
///
/// Propagates structural errors from the nested entity.
pub fn decode_nested<T: Decode>(value: &Value, root: &str) -> Result<Option<T>, DecodeError> {
    if value.is_null() {
        return Ok(None);
    }
    T::from_value_as(value, root).map(Some)
}
