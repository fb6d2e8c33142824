use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use json::JsonValue;

use crate::app::{error::RuntimeError, runtime::Config};

/// Number of spaces used per level when the output is indented
const PRETTY_INDENT: u16 = 2;

/// Defines behavior for writing a converted document to the export directory
pub trait Exporter<'a> {
    /// Create a new exporter, creating or truncating its output file
    fn new(config: &'a Config) -> Result<Self, RuntimeError>
    where
        Self: Sized;
    /// Serialize the document and write it out
    fn write_document(&mut self, document: &JsonValue) -> Result<(), RuntimeError>;
}

/// Serialize a document, honoring the `--pretty` option
pub(super) fn serialize(config: &Config, document: &JsonValue) -> String {
    if config.options.pretty {
        document.pretty(PRETTY_INDENT)
    } else {
        document.dump()
    }
}

/// Create the output file, replacing anything already at `path`
pub(super) fn create_file(path: PathBuf) -> Result<BufWriter<File>, RuntimeError> {
    let file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .map_err(|err| RuntimeError::CreateError(err, path))?;
    Ok(BufWriter::new(file))
}

pub(super) fn write_to_file(file: &mut BufWriter<File>, text: &str) -> Result<(), RuntimeError> {
    file.write_all(text.as_bytes())
        .and_then(|_| file.flush())
        .map_err(RuntimeError::DiskError)
}
