/*!
 Walks a document tree and replaces every archived text field with its resolved value.

 Sketch serializes text with [`NSKeyedArchiver`](https://developer.apple.com/documentation/foundation/nskeyedarchiver).
 Only the `attributedString` and `textStyle` fields are decoded, and only to the extent the
 [`resolver`](crate::archive::resolver) supports.
*/

use json::JsonValue;

use crate::{
    archive::resolver::{decode_attributed_string, decode_text_style},
    error::archive::MalformedArchiveError,
};

/// Key of the archived `NSAttributedString` fields
pub const ATTRIBUTED_STRING_KEY: &str = "attributedString";
/// Key of the archived text style fields
pub const TEXT_STYLE_KEY: &str = "textStyle";

/// Resolve every archived field in `tree`, returning the resolved tree
///
/// Scalars and any key other than [`ATTRIBUTED_STRING_KEY`] or [`TEXT_STYLE_KEY`] are left as
/// they are. A resolved value is not walked again.
pub fn unarchive(mut tree: JsonValue) -> Result<JsonValue, MalformedArchiveError> {
    visit(&mut tree)?;
    Ok(tree)
}

fn visit(node: &mut JsonValue) -> Result<(), MalformedArchiveError> {
    match node {
        JsonValue::Object(object) => {
            for (key, value) in object.iter_mut() {
                match key {
                    ATTRIBUTED_STRING_KEY => {
                        *value = decode_attributed_string(value)
                            .map_err(|why| MalformedArchiveError::new(key, why))?;
                    }
                    TEXT_STYLE_KEY => {
                        *value = decode_text_style(value)
                            .map(JsonValue::from)
                            .map_err(|why| MalformedArchiveError::new(key, why))?;
                    }
                    _ => visit(value).map_err(|why| why.within_key(key))?,
                }
            }
        }
        JsonValue::Array(items) => {
            for (idx, item) in items.iter_mut().enumerate() {
                visit(item).map_err(|why| why.within_index(idx))?;
            }
        }
        _ => {}
    }
    Ok(())
}
