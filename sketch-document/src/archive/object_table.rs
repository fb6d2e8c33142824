/*!
 The flat object table at the heart of an `NSKeyedArchiver` payload.

 A keyed archive flattens an object graph into the `$objects` array. Index `0` holds the `$null`
 sentinel and every other slot holds a scalar, a class description, or a dictionary whose fields
 point at other slots through UID references.
*/

use json::JsonValue;
use plist::{Dictionary, Value};

use crate::{
    error::archive::KeyedArchiveError,
    util::plist::{parse_plist, payload_bytes},
};

/// The key that holds the object table in the archive root
const OBJECTS_KEY: &str = "$objects";

/// Decoded `$objects` of a keyed archive
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectTable {
    objects: Vec<Value>,
}

impl ObjectTable {
    /// Decode the table from an archived payload stored in the document tree
    pub fn from_payload(payload: &JsonValue) -> Result<Self, KeyedArchiveError> {
        Self::from_bytes(&payload_bytes(payload)?)
    }

    /// Decode the table from the bytes of a property list
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, KeyedArchiveError> {
        Self::from_plist(parse_plist(bytes)?)
    }

    /// Build the table from a decoded property list
    ///
    /// The root is the archive dictionary. Some decoders wrap the root in an array; in that case
    /// the first element is used.
    pub fn from_plist(root: Value) -> Result<Self, KeyedArchiveError> {
        let root = match root {
            Value::Array(items) => items
                .into_iter()
                .next()
                .ok_or(KeyedArchiveError::MissingObjects)?,
            other => other,
        };

        let mut archive = match root {
            Value::Dictionary(archive) => archive,
            _ => {
                return Err(KeyedArchiveError::InvalidType(
                    "root".to_string(),
                    "dictionary".to_string(),
                ))
            }
        };

        match archive.remove(OBJECTS_KEY) {
            Some(Value::Array(objects)) => Ok(Self { objects }),
            Some(_) => Err(KeyedArchiveError::InvalidType(
                OBJECTS_KEY.to_string(),
                "array".to_string(),
            )),
            None => Err(KeyedArchiveError::MissingObjects),
        }
    }

    /// All of the entries in the table, in archive order
    pub fn objects(&self) -> &[Value] {
        &self.objects
    }

    /// Get the entry at a fixed slot
    pub fn get(&self, idx: usize) -> Result<&Value, KeyedArchiveError> {
        self.objects
            .get(idx)
            .ok_or(KeyedArchiveError::MissingSlot(idx, self.objects.len()))
    }

    /// Follow a single UID reference into the table
    ///
    /// `key` names the field the reference came from and is only used to describe failures.
    pub fn resolve(&self, reference: &Value, key: &str) -> Result<&Value, KeyedArchiveError> {
        let uid = match reference {
            Value::Uid(uid) => uid.get(),
            _ => return Err(KeyedArchiveError::NotAReference(key.to_string())),
        };

        usize::try_from(uid)
            .ok()
            .and_then(|idx| self.objects.get(idx))
            .ok_or(KeyedArchiveError::UidOutOfBounds(uid, self.objects.len()))
    }

    /// Find the first dictionary entry that carries `key`
    pub fn find_entry_with(&self, key: &str) -> Option<&Dictionary> {
        self.objects
            .iter()
            .filter_map(Value::as_dictionary)
            .find(|entry| entry.contains_key(key))
    }
}
