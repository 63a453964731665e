//! Purpose: Decode upstream JSON only when every schema-declared key is present.
//! Exports: `decode_document`, `decode_page`, `check_presence`, `parse_object`.
//! Role: Two-phase decode: presence walk over raw JSON, then ordinary serde decode.
//! Invariants: `null` satisfies presence; an absent key never does.
//! Invariants: The first missing key in schema order is reported; nothing is aggregated.
//! Invariants: A record's own keys are all checked before any nested record is entered.
#![allow(clippy::result_large_err)]

use crate::api::Page;
use crate::core::error::{DecodeFailure, Error};
use crate::core::schema::{FieldKind, Record, Schema};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

type DecodeResult<T> = Result<T, Error>;

/// Keys every collection envelope must carry.
pub const PAGE_KEYS: [&str; 2] = ["data", "next_token"];

/// Decode a single document into `T`, enforcing `T`'s schema recursively.
pub fn decode_document<T: Record>(payload: &[u8]) -> DecodeResult<T> {
    let value = parse_object(payload)?;
    check_presence(&value, T::schema(), "")?;
    structural_decode(value, T::schema().name)
}

/// Decode a `{"data": [...], "next_token": ...}` envelope of `T` records.
pub fn decode_page<T: Record>(payload: &[u8]) -> DecodeResult<Page<T>> {
    let value = parse_object(payload)?;
    let object = as_object(&value, "")?;
    for key in PAGE_KEYS {
        require_key(object, key, "")?;
    }
    if let Some(Value::Array(items)) = object.get("data") {
        for (index, item) in items.iter().enumerate() {
            check_nested(item, T::schema(), &format!("data[{index}]"))?;
        }
    }
    structural_decode(value, "Page")
}

/// Parse raw bytes and require a top-level JSON object.
pub fn parse_object(payload: &[u8]) -> DecodeResult<Value> {
    let value: Value = serde_json::from_slice(payload).map_err(|err| {
        Error::decode(DecodeFailure::MalformedPayload)
            .with_message("response body is not valid json")
            .with_path("")
            .with_source(err)
    })?;
    as_object(&value, "")?;
    Ok(value)
}

/// Verify `value` holds every key in `schema`, then descend into nested records.
///
/// `path` names the location of `value` within the payload and is attached to
/// any error raised; pass `""` for the root.
pub fn check_presence(value: &Value, schema: &Schema, path: &str) -> DecodeResult<()> {
    let object = as_object(value, path)?;
    for key in schema.keys() {
        require_key(object, key, path)?;
    }

    for field in schema.fields {
        let Some(inner) = object.get(field.key) else {
            continue;
        };
        match field.kind {
            FieldKind::Scalar => {}
            FieldKind::Record(nested) => {
                check_nested(inner, nested, &join_path(path, field.key))?;
            }
            FieldKind::RecordList(nested) => {
                if let Value::Array(items) = inner {
                    let base = join_path(path, field.key);
                    for (index, item) in items.iter().enumerate() {
                        check_nested(item, nested, &format!("{base}[{index}]"))?;
                    }
                }
            }
        }
    }
    Ok(())
}

// Null nested values are left for the structural pass: nullable fields accept
// them, required ones fail there as a mismatch.
fn check_nested(value: &Value, schema: &Schema, path: &str) -> DecodeResult<()> {
    if value.is_null() {
        return Ok(());
    }
    check_presence(value, schema, path)
}

fn as_object<'a>(value: &'a Value, path: &str) -> DecodeResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        Error::decode(DecodeFailure::MalformedPayload)
            .with_message(format!("expected a json object, found {}", json_kind(value)))
            .with_path(path)
    })
}

fn require_key(object: &Map<String, Value>, key: &str, path: &str) -> DecodeResult<()> {
    if object.contains_key(key) {
        return Ok(());
    }
    Err(Error::decode(DecodeFailure::MissingField(key.to_string()))
        .with_message(format!("required field {key} not found"))
        .with_path(path))
}

fn structural_decode<T: DeserializeOwned>(value: Value, target: &str) -> DecodeResult<T> {
    serde_json::from_value(value).map_err(|err| {
        Error::decode(DecodeFailure::StructuralMismatch)
            .with_message(format!("failed to decode {target}: {err}"))
            .with_path("")
            .with_source(err)
    })
}

fn join_path(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{base}.{key}")
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
