/*!
 Helpers for decoding archived payloads into [`plist::Value`] trees and converting them to JSON.

 Sketch stores `NSKeyedArchiver` output as base64 text inside its JSON documents. The payload is a
 binary property list; the [`plist`] crate decodes it and these helpers bridge the result into the
 [`json`] document tree.
*/

use std::{io::Cursor, time::SystemTime};

use base64::{prelude::BASE64_STANDARD, Engine};
use chrono::{DateTime, SecondsFormat, Utc};
use json::{object::Object, JsonValue};
use plist::Value;

use crate::error::archive::KeyedArchiveError;

/// The key JSON uses to represent a UID reference, matching how keyed archives are commonly dumped
pub const UID_KEY: &str = "UID";

/// Get the raw bytes of an archived payload
///
/// The payload is either base64 text or an array of byte values.
pub fn payload_bytes(payload: &JsonValue) -> Result<Vec<u8>, KeyedArchiveError> {
    match payload {
        JsonValue::String(_) | JsonValue::Short(_) => {
            let text = payload.as_str().ok_or(KeyedArchiveError::InvalidPayload)?;
            BASE64_STANDARD
                .decode(text.trim())
                .map_err(KeyedArchiveError::InvalidBase64)
        }
        JsonValue::Array(items) => items
            .iter()
            .map(|item| item.as_u8().ok_or(KeyedArchiveError::InvalidPayload))
            .collect(),
        _ => Err(KeyedArchiveError::InvalidPayload),
    }
}

/// Parse a binary (or XML) property list
pub fn parse_plist(bytes: &[u8]) -> Result<Value, KeyedArchiveError> {
    Value::from_reader(Cursor::new(bytes)).map_err(KeyedArchiveError::InvalidPlist)
}

/// Convert a property list value into its JSON equivalent
///
/// - Dictionaries keep their key order
/// - `Data` becomes base64 text
/// - `Date` becomes an RFC 3339 timestamp
/// - `Uid` becomes `{"UID": n}`, it is not resolved
pub fn plist_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Array(items) => JsonValue::Array(items.iter().map(plist_to_json).collect()),
        Value::Dictionary(dictionary) => {
            let mut object = Object::with_capacity(dictionary.len());
            for (key, item) in dictionary {
                object.insert(key, plist_to_json(item));
            }
            JsonValue::Object(object)
        }
        Value::Boolean(flag) => JsonValue::Boolean(*flag),
        Value::Data(bytes) => JsonValue::from(BASE64_STANDARD.encode(bytes)),
        Value::Date(date) => {
            let timestamp: DateTime<Utc> = SystemTime::from(date.clone()).into();
            JsonValue::from(timestamp.to_rfc3339_opts(SecondsFormat::Secs, true))
        }
        Value::Real(number) => JsonValue::from(*number),
        Value::Integer(number) => match number.as_signed() {
            Some(signed) => JsonValue::from(signed),
            None => number
                .as_unsigned()
                .map(JsonValue::from)
                .unwrap_or(JsonValue::Null),
        },
        Value::String(text) => JsonValue::from(text.as_str()),
        Value::Uid(uid) => {
            let mut object = Object::with_capacity(1);
            object.insert(UID_KEY, JsonValue::from(uid.get()));
            JsonValue::Object(object)
        }
        _ => JsonValue::Null,
    }
}
