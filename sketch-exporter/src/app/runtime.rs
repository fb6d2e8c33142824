use std::{fs::create_dir_all, path::PathBuf};

use fs2::available_space;
use sketch_document::{convert, package::reader::ZipPackage};

use crate::{
    app::{error::RuntimeError, export_type::ExportType, options::Options},
    exporters::{exporter::Exporter, json::JSON, module::Module},
};

/// Name of the output file when the package path has no usable stem
const DEFAULT_DOCUMENT_NAME: &str = "document";

/// Stores the application state and handles application lifecycle
pub struct Config {
    /// App configuration options
    pub options: Options,
}

impl Config {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Get the path the converted document is written to
    ///
    /// The name follows the package, i.e. `Design.sketch` exports to `Design.json`.
    pub fn document_path(&self) -> PathBuf {
        let stem = self
            .options
            .sketch_path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .unwrap_or(DEFAULT_DOCUMENT_NAME);

        let mut path = self.options.export_path.clone();
        path.push(stem);
        path.set_extension(self.options.export_type.extension());
        path
    }

    /// Ensure the export directory exists
    fn ensure_export_path(&self) -> Result<(), RuntimeError> {
        create_dir_all(&self.options.export_path)
            .map_err(|why| RuntimeError::CreateError(why, self.options.export_path.clone()))
    }

    /// Make sure the export directory can hold the unpacked package
    fn ensure_free_space(&self, estimated_bytes: u64) -> Result<(), RuntimeError> {
        let available_bytes =
            available_space(&self.options.export_path).map_err(RuntimeError::DiskError)?;
        if estimated_bytes >= available_bytes {
            return Err(RuntimeError::NotEnoughAvailableSpace(
                estimated_bytes,
                available_bytes,
            ));
        }
        Ok(())
    }

    /// Convert the package and write the document and its assets
    pub async fn start(&self) -> Result<(), RuntimeError> {
        let package =
            ZipPackage::open(&self.options.sketch_path).map_err(RuntimeError::PackageError)?;

        self.ensure_export_path()?;
        if !self.options.ignore_disk_space {
            let estimated_bytes = package
                .uncompressed_size()
                .map_err(RuntimeError::PackageError)?;
            self.ensure_free_space(estimated_bytes)?;
        }

        // Tell the user what we are doing
        eprintln!(
            "Exporting to {} as {}...",
            self.options.export_path.display(),
            self.options.export_type
        );

        let mut assets = self
            .options
            .asset_manager
            .writer(&self.options.export_path);
        let converted = convert(&package, &mut assets).await;
        assets.finish();
        let document = converted.map_err(RuntimeError::PackageError)?;

        match self.options.export_type {
            ExportType::Json => JSON::new(self)?.write_document(&document)?,
            ExportType::Module => Module::new(self)?.write_document(&document)?,
        }

        eprintln!(
            "Wrote {} and {} assets",
            self.document_path().display(),
            assets.written.len()
        );
        Ok(())
    }
}
