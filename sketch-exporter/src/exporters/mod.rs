pub mod exporter;
pub mod json;
pub mod module;
