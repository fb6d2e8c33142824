/*!
 Errors that can happen when reading a document package and assembling its document tree.
*/

use std::{
    error::Error,
    fmt::{Display, Formatter, Result},
    io::Error as IoError,
};

use zip::result::ZipError;

use crate::error::archive::MalformedArchiveError;

/// Errors that can happen when converting a document package
#[derive(Debug)]
pub enum PackageError {
    /// The input is not a readable zip archive
    CannotOpen(ZipError),
    /// The input file could not be read from disk
    CannotReadFile(IoError),
    /// An entry exists but its contents could not be read
    CannotRead(String, IoError),
    /// The entry at this index of the central directory could not be read
    CannotList(usize, ZipError),
    /// An entry was requested that the archive does not contain
    MissingEntry(String, ZipError),
    /// An entry exists but cannot be decompressed, i.e. its compression method is unsupported
    CannotExtract(String, ZipError),
    /// A JSON entry is not valid JSON
    EntryDecode(String, json::Error),
    /// A keyed archive field in the document tree could not be resolved
    MalformedArchive(MalformedArchiveError),
    /// An asset could not be handed to the output sink
    CannotEmit(String, IoError),
}

impl Display for PackageError {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> Result {
        match self {
            PackageError::CannotOpen(why) => write!(fmt, "Unable to open package: {why}"),
            PackageError::CannotReadFile(why) => write!(fmt, "Unable to read package: {why}"),
            PackageError::CannotRead(path, why) => write!(fmt, "Unable to read {path}: {why}"),
            PackageError::CannotList(idx, why) => {
                write!(fmt, "Unable to read package entry {idx}: {why}")
            }
            PackageError::MissingEntry(path, why) => {
                write!(fmt, "Package entry {path} not found: {why}")
            }
            PackageError::CannotExtract(path, why) => {
                write!(fmt, "Unable to extract {path}: {why}")
            }
            PackageError::EntryDecode(path, why) => {
                write!(fmt, "Failed to parse {path} as JSON: {why}")
            }
            PackageError::MalformedArchive(why) => write!(fmt, "{why}"),
            PackageError::CannotEmit(path, why) => write!(fmt, "Unable to emit {path}: {why}"),
        }
    }
}

impl Error for PackageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PackageError::CannotOpen(why)
            | PackageError::CannotList(_, why)
            | PackageError::MissingEntry(_, why)
            | PackageError::CannotExtract(_, why) => Some(why),
            PackageError::CannotReadFile(why)
            | PackageError::CannotRead(_, why)
            | PackageError::CannotEmit(_, why) => Some(why),
            PackageError::EntryDecode(_, why) => Some(why),
            PackageError::MalformedArchive(why) => Some(why),
        }
    }
}

impl From<MalformedArchiveError> for PackageError {
    fn from(why: MalformedArchiveError) -> Self {
        PackageError::MalformedArchive(why)
    }
}
