use std::{fs::File, io::BufWriter};

use json::JsonValue;

use crate::{
    app::{error::RuntimeError, runtime::Config},
    exporters::exporter::{create_file, serialize, write_to_file, Exporter},
};

/// Prefix that turns the serialized document into a CommonJS module
const MODULE_PREFIX: &str = "module.exports = ";

/// Writes the document as a CommonJS module that exports the tree
pub struct Module<'a> {
    /// Data that is setup from the application's runtime
    pub config: &'a Config,
    /// Handle to the output file
    file: BufWriter<File>,
}

impl<'a> Exporter<'a> for Module<'a> {
    fn new(config: &'a Config) -> Result<Self, RuntimeError> {
        Ok(Module {
            config,
            file: create_file(config.document_path())?,
        })
    }

    fn write_document(&mut self, document: &JsonValue) -> Result<(), RuntimeError> {
        let mut text = String::from(MODULE_PREFIX);
        text.push_str(&serialize(self.config, document));
        write_to_file(&mut self.file, &text)
    }
}

#[cfg(test)]
mod tests {
    use std::{fs::read_to_string, path::PathBuf};

    use crate::{
        app::{
            asset_manager::AssetManager, error::RuntimeError, export_type::ExportType,
            options::Options, runtime::Config,
        },
        exporters::{exporter::Exporter, module::Module},
    };

    fn config(export_path: PathBuf) -> Config {
        Config::new(Options {
            sketch_path: PathBuf::from("Design.sketch"),
            export_path,
            export_type: ExportType::Module,
            asset_manager: AssetManager::Disabled,
            pretty: false,
            ignore_disk_space: true,
        })
    }

    #[test]
    fn can_write_module() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path().to_path_buf());

        Module::new(&config)
            .unwrap()
            .write_document(&json::object! { "document": { "a": 1 } })
            .unwrap();

        assert_eq!(
            read_to_string(dir.path().join("Design.js")).unwrap(),
            r#"module.exports = {"document":{"a":1}}"#
        );
    }

    #[test]
    fn cant_create_in_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(dir.path().join("missing"));

        assert!(matches!(
            Module::new(&config),
            Err(RuntimeError::CreateError(_, _))
        ));
    }
}
