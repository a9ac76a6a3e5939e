//! JER (JSON Encoding Rules) projection of the UUIDv7 record
//!
//! Renders a decoded record as the JSON object structurally analogous to
//! the DER SEQUENCE: two members, `high` before `low`.
//!
//! # Number precision policy
//!
//! JSON numbers are IEEE-754 doubles in most consumers, which represent
//! integers exactly only up to 2^53 - 1. A field value at or below
//! [`JER_SAFE_INTEGER_MAX`] is rendered as a JSON number; anything above
//! is rendered as a decimal string so no reader loses precision. The
//! policy applies per field, so one record can mix both forms.

use serde_json::Value;
use uuid7der_core::UuidV7Record;

/// Largest integer a JSON number carries exactly (2^53 - 1).
pub const JER_SAFE_INTEGER_MAX: u64 = (1 << 53) - 1;

/// Render the record as compact JER text.
///
/// Output is deterministic, UTF-8, and carries no trailing newline; the
/// caller's output layer decides line framing. There are no error
/// conditions: every record is in the input domain.
pub fn render(record: &UuidV7Record) -> String {
    format!(
        "{{\"high\":{},\"low\":{}}}",
        member_text(record.high()),
        member_text(record.low())
    )
}

/// The same projection as a [`serde_json::Value`], for embedding in a
/// larger JSON document.
///
/// Serializing this value with `serde_json` yields exactly the text
/// [`render`] produces (`high` sorts before `low`, so map ordering and
/// the documented field order agree).
pub fn jer_value(record: &UuidV7Record) -> Value {
    let mut object = serde_json::Map::new();
    object.insert("high".to_owned(), member_value(record.high()));
    object.insert("low".to_owned(), member_value(record.low()));
    Value::Object(object)
}

fn member_value(value: u64) -> Value {
    if value <= JER_SAFE_INTEGER_MAX {
        Value::from(value)
    } else {
        Value::String(value.to_string())
    }
}

fn member_text(value: u64) -> String {
    if value <= JER_SAFE_INTEGER_MAX {
        value.to_string()
    } else {
        format!("\"{value}\"")
    }
}
