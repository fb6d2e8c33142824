/*!
 Errors that can happen when resolving `NSKeyedArchiver` data embedded in a document tree.
*/

use std::{
    error::Error,
    fmt::{Display, Formatter, Result},
};

/// Reasons a keyed archive payload does not have the expected shape
#[derive(Debug)]
pub enum KeyedArchiveError {
    InvalidBase64(base64::DecodeError),
    InvalidPlist(plist::Error),
    InvalidPayload,
    MissingKey(String),
    InvalidType(String, String),
    MissingObjects,
    UidOutOfBounds(u64, usize),
    MismatchedLength(usize, usize),
    MissingSlot(usize, usize),
    NotAReference(String),
}

impl Display for KeyedArchiveError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            KeyedArchiveError::InvalidBase64(why) => {
                write!(fmt, "failed to decode base64 payload: {why}")
            }
            KeyedArchiveError::InvalidPlist(why) => {
                write!(fmt, "failed to parse binary property list: {why}")
            }
            KeyedArchiveError::InvalidPayload => {
                write!(fmt, "payload is neither a string nor an array of bytes")
            }
            KeyedArchiveError::MissingKey(key) => write!(fmt, "missing key {key}"),
            KeyedArchiveError::InvalidType(key, expected) => {
                write!(fmt, "invalid type for {key}, expected {expected}")
            }
            KeyedArchiveError::MissingObjects => write!(fmt, "archive has no $objects table"),
            KeyedArchiveError::UidOutOfBounds(uid, len) => {
                write!(fmt, "UID {uid} is outside of $objects of length {len}")
            }
            KeyedArchiveError::MismatchedLength(keys, values) => {
                write!(fmt, "archive has {keys} keys but {values} values")
            }
            KeyedArchiveError::MissingSlot(idx, len) => {
                write!(fmt, "can't access index {idx} on $objects of length {len}")
            }
            KeyedArchiveError::NotAReference(key) => write!(fmt, "{key} is not a UID reference"),
        }
    }
}

impl Error for KeyedArchiveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            KeyedArchiveError::InvalidBase64(why) => Some(why),
            KeyedArchiveError::InvalidPlist(why) => Some(why),
            _ => None,
        }
    }
}

/// A keyed archive field that could not be resolved, along with where it lives in the document tree
#[derive(Debug)]
pub struct MalformedArchiveError {
    /// Location of the field, i.e. `pages.p1.layers[0].attributedString`
    pub path: String,
    /// Why the field could not be resolved
    pub reason: KeyedArchiveError,
}

impl MalformedArchiveError {
    pub(crate) fn new(key: &str, reason: KeyedArchiveError) -> Self {
        Self {
            path: key.to_string(),
            reason,
        }
    }

    /// Prefix the path with the key of the mapping that contains it
    pub(crate) fn within_key(mut self, key: &str) -> Self {
        self.path = if self.path.starts_with('[') {
            format!("{key}{}", self.path)
        } else {
            format!("{key}.{}", self.path)
        };
        self
    }

    /// Prefix the path with the index of the sequence that contains it
    pub(crate) fn within_index(mut self, idx: usize) -> Self {
        self.path = if self.path.starts_with('[') {
            format!("[{idx}]{}", self.path)
        } else {
            format!("[{idx}].{}", self.path)
        };
        self
    }
}

impl Display for MalformedArchiveError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        write!(fmt, "malformed archive at {}: {}", self.path, self.reason)
    }
}

impl Error for MalformedArchiveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.reason)
    }
}
