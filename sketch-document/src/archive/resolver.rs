/*!
 Resolves the handful of keyed archive shapes Sketch embeds in its documents into plain values.

 Resolution is shallow: each UID reference is followed exactly one level. Anything
 deeper stays in the output as `{"UID": n}`.
*/

use json::{object::Object, JsonValue};

use crate::{
    archive::object_table::ObjectTable, error::archive::KeyedArchiveError,
    util::plist::plist_to_json,
};

/// Field holding the base64 property list inside any archived value
pub const ARCHIVE_KEY: &str = "_archive";
/// Field of an `attributedString` that holds the archived `NSAttributedString`
pub const ARCHIVED_ATTRIBUTED_STRING_KEY: &str = "archivedAttributedString";
/// Field of a `textStyle` that holds the archived attributes
pub const ENCODED_ATTRIBUTES_KEY: &str = "encodedAttributes";
/// Attribute holding the archived font descriptor dictionary
pub const FONT_ATTRIBUTE_KEY: &str = "MSAttributedStringFontAttribute";
/// Attribute holding the archived `NSParagraphStyle`
pub const PARAGRAPH_STYLE_KEY: &str = "NSParagraphStyle";

/// `NSDictionary` field listing UID references to the keys
const NS_KEYS: &str = "NS.keys";
/// `NSDictionary` field listing UID references to the values
const NS_OBJECTS: &str = "NS.objects";
/// `NSAttributedString` field referencing the plain text
const NS_STRING: &str = "NSString";
/// The paragraph style record is always archived directly after the `$null` sentinel
const PARAGRAPH_STYLE_SLOT: usize = 1;

/// A resolved `textStyle` field
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Font attributes, i.e. `NSFontNameAttribute` and `NSFontSizeAttribute`
    pub font: Object,
    /// The archived paragraph style record, as stored in the object table
    pub paragraph: JsonValue,
}

impl From<TextStyle> for JsonValue {
    fn from(style: TextStyle) -> Self {
        let mut object = Object::with_capacity(2);
        object.insert("font", JsonValue::Object(style.font));
        object.insert("paragraph", style.paragraph);
        JsonValue::Object(object)
    }
}

/// Walk down a chain of mapping keys, failing with the dotted path of the missing key
fn archived_field<'a>(field: &'a JsonValue, path: &[&str]) -> Result<&'a JsonValue, KeyedArchiveError> {
    let mut current = field;
    for (depth, key) in path.iter().enumerate() {
        current = match current {
            JsonValue::Object(object) => object
                .get(key)
                .ok_or_else(|| KeyedArchiveError::MissingKey(path[..=depth].join(".")))?,
            _ => {
                let parent = match depth {
                    0 => "root".to_string(),
                    _ => path[..depth].join("."),
                };
                return Err(KeyedArchiveError::InvalidType(parent, "object".to_string()));
            }
        };
    }
    Ok(current)
}

/// Decode an archived `NSDictionary` into a flat mapping
///
/// The first entries carrying `NS.keys` and `NS.objects` are paired up by index. If either is
/// missing the archive holds no dictionary and the result is empty. Keys must resolve to strings;
/// values are converted to JSON as they are stored in the table.
pub fn decode_flat_mapping(table: &ObjectTable) -> Result<Object, KeyedArchiveError> {
    let (keys_entry, values_entry) = match (
        table.find_entry_with(NS_KEYS),
        table.find_entry_with(NS_OBJECTS),
    ) {
        (Some(keys), Some(values)) => (keys, values),
        _ => return Ok(Object::new()),
    };

    let keys = keys_entry
        .get(NS_KEYS)
        .and_then(|keys| keys.as_array())
        .ok_or_else(|| KeyedArchiveError::InvalidType(NS_KEYS.to_string(), "array".to_string()))?;
    let values = values_entry
        .get(NS_OBJECTS)
        .and_then(|values| values.as_array())
        .ok_or_else(|| {
            KeyedArchiveError::InvalidType(NS_OBJECTS.to_string(), "array".to_string())
        })?;

    if keys.len() != values.len() {
        return Err(KeyedArchiveError::MismatchedLength(keys.len(), values.len()));
    }

    let mut mapping = Object::with_capacity(keys.len());
    for (idx, (key_ref, value_ref)) in keys.iter().zip(values).enumerate() {
        let key = table
            .resolve(key_ref, NS_KEYS)?
            .as_string()
            .ok_or_else(|| {
                KeyedArchiveError::InvalidType(format!("{NS_KEYS}[{idx}]"), "string".to_string())
            })?;
        let value = table.resolve(value_ref, NS_OBJECTS)?;
        mapping.insert(key, plist_to_json(value));
    }

    Ok(mapping)
}

/// Decode the plain text of an `attributedString` field
///
/// Returns [`JsonValue::Null`] when the archive has no `NSString` entry.
pub fn decode_attributed_string(field: &JsonValue) -> Result<JsonValue, KeyedArchiveError> {
    let payload = archived_field(field, &[ARCHIVED_ATTRIBUTED_STRING_KEY, ARCHIVE_KEY])?;
    let table = ObjectTable::from_payload(payload)?;

    match table.find_entry_with(NS_STRING) {
        Some(wrapper) => {
            let reference = wrapper
                .get(NS_STRING)
                .ok_or_else(|| KeyedArchiveError::MissingKey(NS_STRING.to_string()))?;
            Ok(plist_to_json(table.resolve(reference, NS_STRING)?))
        }
        None => Ok(JsonValue::Null),
    }
}

/// Decode the font attributes and paragraph style of a `textStyle` field
pub fn decode_text_style(field: &JsonValue) -> Result<TextStyle, KeyedArchiveError> {
    let font_payload = archived_field(
        field,
        &[ENCODED_ATTRIBUTES_KEY, FONT_ATTRIBUTE_KEY, ARCHIVE_KEY],
    )?;
    let paragraph_payload = archived_field(
        field,
        &[ENCODED_ATTRIBUTES_KEY, PARAGRAPH_STYLE_KEY, ARCHIVE_KEY],
    )?;

    let font = decode_flat_mapping(&ObjectTable::from_payload(font_payload)?)?;

    // Only the archiver Sketch ships lays the style out at a fixed slot
    let paragraph_table = ObjectTable::from_payload(paragraph_payload)?;
    let paragraph = plist_to_json(paragraph_table.get(PARAGRAPH_STYLE_SLOT)?);

    Ok(TextStyle { font, paragraph })
}
