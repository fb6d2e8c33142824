/*!
 Files a conversion emits alongside the document tree.

 Binary assets never enter the document tree; they are handed to an [`OutputSink`] at their
 original package path, i.e. `images/logo.png`.
*/

use std::io::Result;

/// A binary asset extracted from a package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Logical path of the file, identical to its path in the package
    pub path: String,
    /// Raw contents of the file
    pub contents: Vec<u8>,
}

impl OutputFile {
    pub fn new(path: String, contents: Vec<u8>) -> Self {
        Self { path, contents }
    }
}

/// Defines where emitted files go
pub trait OutputSink {
    /// Receive a single emitted file
    fn emit_file(&mut self, file: &OutputFile) -> Result<()>;
}

/// An [`OutputSink`] that keeps every emitted file in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub files: Vec<OutputFile>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an emitted file by its logical path
    pub fn get(&self, path: &str) -> Option<&OutputFile> {
        self.files.iter().find(|file| file.path == path)
    }
}

impl OutputSink for MemorySink {
    fn emit_file(&mut self, file: &OutputFile) -> Result<()> {
        self.files.push(file.clone());
        Ok(())
    }
}
