use std::fmt::Display;

/// Represents the serialization the document tree is written in
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ExportType {
    /// Plain JSON document
    Json,
    /// A CommonJS module that exports the document
    Module,
}

impl ExportType {
    /// Given user's input, return a variant if the input matches one
    pub fn from_cli(export_type: &str) -> Option<Self> {
        match export_type.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "module" | "js" => Some(Self::Module),
            _ => None,
        }
    }

    /// The extension of the file the document is written to
    pub fn extension(&self) -> &'static str {
        match self {
            ExportType::Json => "json",
            ExportType::Module => "js",
        }
    }
}

impl Default for ExportType {
    fn default() -> Self {
        Self::Json
    }
}

impl Display for ExportType {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportType::Json => write!(fmt, "json"),
            ExportType::Module => write!(fmt, "module"),
        }
    }
}
