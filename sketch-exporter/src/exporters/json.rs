use std::{fs::File, io::BufWriter};

use json::JsonValue;

use crate::{
    app::{error::RuntimeError, runtime::Config},
    exporters::exporter::{create_file, serialize, write_to_file, Exporter},
};

/// Writes the document as a plain JSON file
pub struct JSON<'a> {
    /// Data that is setup from the application's runtime
    pub config: &'a Config,
    /// Handle to the output file
    file: BufWriter<File>,
}

impl<'a> Exporter<'a> for JSON<'a> {
    fn new(config: &'a Config) -> Result<Self, RuntimeError> {
        Ok(JSON {
            config,
            file: create_file(config.document_path())?,
        })
    }

    fn write_document(&mut self, document: &JsonValue) -> Result<(), RuntimeError> {
        let text = serialize(self.config, document);
        write_to_file(&mut self.file, &text)
    }
}
