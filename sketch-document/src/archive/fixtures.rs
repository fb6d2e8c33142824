//! Keyed archives shaped like the ones Sketch writes, built in memory for tests.

use base64::{prelude::BASE64_STANDARD, Engine};
use json::{object::Object, JsonValue};
use plist::{Dictionary, Uid, Value};

pub(crate) fn dictionary(entries: Vec<(&str, Value)>) -> Value {
    let mut dictionary = Dictionary::new();
    for (key, value) in entries {
        dictionary.insert(key.to_string(), value);
    }
    Value::Dictionary(dictionary)
}

fn uid(idx: u64) -> Value {
    Value::Uid(Uid::new(idx))
}

fn class(name: &str, parents: &[&str]) -> Value {
    let mut classes = vec![Value::String(name.to_string())];
    classes.extend(parents.iter().map(|parent| Value::String(parent.to_string())));
    dictionary(vec![
        ("$classname", Value::String(name.to_string())),
        ("$classes", Value::Array(classes)),
    ])
}

/// Wrap an object table in the root dictionary `NSKeyedArchiver` writes
pub(crate) fn archive(objects: Vec<Value>) -> Value {
    dictionary(vec![
        ("$version", Value::Integer(100000.into())),
        ("$archiver", Value::String("NSKeyedArchiver".to_string())),
        ("$top", dictionary(vec![("root", uid(1))])),
        ("$objects", Value::Array(objects)),
    ])
}

/// Serialize as a binary property list, then base64, the way Sketch stores `_archive`
pub(crate) fn encode(archive: &Value) -> String {
    let mut bytes = vec![];
    archive
        .to_writer_binary(&mut bytes)
        .expect("in-memory plist write");
    BASE64_STANDARD.encode(bytes)
}

fn archived(archive: &Value) -> JsonValue {
    let mut object = Object::new();
    object.insert("_archive", JsonValue::from(encode(archive)));
    JsonValue::Object(object)
}

/// An `NSAttributedString` archive, optionally without its text
pub(crate) fn attributed_string_archive(text: Option<&str>) -> Value {
    match text {
        Some(text) => archive(vec![
            Value::String("$null".to_string()),
            dictionary(vec![
                ("NSString", uid(2)),
                ("NSAttributes", uid(3)),
                ("$class", uid(4)),
            ]),
            Value::String(text.to_string()),
            dictionary(vec![
                ("NS.keys", Value::Array(vec![])),
                ("NS.objects", Value::Array(vec![])),
            ]),
            class("NSAttributedString", &["NSObject"]),
        ]),
        None => archive(vec![
            Value::String("$null".to_string()),
            dictionary(vec![("$class", uid(2))]),
            class("NSAttributedString", &["NSObject"]),
        ]),
    }
}

/// An `NSDictionary` of font attributes, as stored under `MSAttributedStringFontAttribute`
pub(crate) fn font_archive() -> Value {
    archive(vec![
        Value::String("$null".to_string()),
        dictionary(vec![
            ("NS.keys", Value::Array(vec![uid(2), uid(3)])),
            ("NS.objects", Value::Array(vec![uid(4), uid(5)])),
            ("$class", uid(6)),
        ]),
        Value::String("NSFontNameAttribute".to_string()),
        Value::String("NSFontSizeAttribute".to_string()),
        Value::String("Helvetica".to_string()),
        Value::Real(14.0),
        class("NSDictionary", &["NSObject"]),
    ])
}

/// An `NSParagraphStyle` archive, with the style record in slot `1`
pub(crate) fn paragraph_archive() -> Value {
    archive(vec![
        Value::String("$null".to_string()),
        dictionary(vec![
            ("NSAlignment", Value::Integer(2.into())),
            ("NSAllowsTighteningForTruncation", Value::Integer(1.into())),
            ("$class", uid(2)),
        ]),
        class("NSMutableParagraphStyle", &["NSParagraphStyle", "NSObject"]),
    ])
}

/// The JSON Sketch writes for an `attributedString` field
pub(crate) fn attributed_string_field(text: Option<&str>) -> JsonValue {
    let mut field = Object::new();
    field.insert("_class", JsonValue::from("MSAttributedString"));
    field.insert(
        "archivedAttributedString",
        archived(&attributed_string_archive(text)),
    );
    JsonValue::Object(field)
}

/// The JSON Sketch writes for a `textStyle` field
pub(crate) fn text_style_field(font: &Value, paragraph: &Value) -> JsonValue {
    let mut attributes = Object::new();
    attributes.insert("MSAttributedStringFontAttribute", archived(font));
    attributes.insert("NSParagraphStyle", archived(paragraph));

    let mut field = Object::new();
    field.insert("_class", JsonValue::from("textStyle"));
    field.insert("encodedAttributes", JsonValue::Object(attributes));
    JsonValue::Object(field)
}
