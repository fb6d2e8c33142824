use std::{
    fmt::Display,
    fs::{create_dir_all, write},
    io::{Error, ErrorKind, Result},
    path::{Path, PathBuf},
};

use indicatif::ProgressBar;
use sketch_document::package::output::{OutputFile, OutputSink};

use crate::app::{progress::build_progress_spinner, sanitizers::sanitize_asset_path};

/// Represents different ways the app can handle the images a document embeds
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AssetManager {
    /// Do not write assets
    Disabled,
    /// Write assets to the export directory at their package paths
    Copy,
}

impl AssetManager {
    /// Create an instance of the enum given user input
    pub fn from_cli(copy_state: &str) -> Option<Self> {
        match copy_state.to_lowercase().as_str() {
            "copy" => Some(Self::Copy),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }

    /// Build the sink that receives the assets of a conversion
    ///
    /// No progress is drawn when assets are not written.
    pub fn writer(&self, export_path: &Path) -> AssetWriter {
        let progress = match self {
            AssetManager::Disabled => ProgressBar::hidden(),
            AssetManager::Copy => build_progress_spinner(),
        };
        AssetWriter {
            manager: *self,
            root: export_path.to_path_buf(),
            progress,
            written: vec![],
        }
    }
}

impl Default for AssetManager {
    fn default() -> Self {
        Self::Copy
    }
}

impl Display for AssetManager {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetManager::Disabled => write!(fmt, "disabled"),
            AssetManager::Copy => write!(fmt, "copy"),
        }
    }
}

/// Writes emitted files under the export directory
pub struct AssetWriter {
    manager: AssetManager,
    root: PathBuf,
    progress: ProgressBar,
    /// Paths of every file written so far
    pub written: Vec<PathBuf>,
}

impl AssetWriter {
    /// Resolve where an emitted file lands on disk
    fn destination(&self, file: &OutputFile) -> Result<PathBuf> {
        let relative = sanitize_asset_path(&file.path).ok_or_else(|| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("refusing to write outside of the export directory: {}", file.path),
            )
        })?;
        Ok(self.root.join(relative))
    }

    /// Stop displaying progress
    pub fn finish(&self) {
        self.progress.finish_and_clear();
    }
}

impl OutputSink for AssetWriter {
    fn emit_file(&mut self, file: &OutputFile) -> Result<()> {
        if matches!(self.manager, AssetManager::Disabled) {
            return Ok(());
        }

        let to = self.destination(file)?;

        // Ensure the directory tree exists
        if let Some(folder) = to.parent() {
            if !folder.exists() {
                create_dir_all(folder)?;
            }
        }
        write(&to, &file.contents)?;

        self.progress.inc(1);
        self.progress.set_message(file.path.clone());
        log::debug!("Wrote {} bytes to {to:?}", file.contents.len());
        self.written.push(to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs::read;

    use sketch_document::package::output::{OutputFile, OutputSink};

    use crate::app::asset_manager::AssetManager;

    #[test]
    fn can_parse_any_case() {
        assert_eq!(AssetManager::from_cli("copy"), Some(AssetManager::Copy));
        assert_eq!(AssetManager::from_cli("COPY"), Some(AssetManager::Copy));
        assert_eq!(AssetManager::from_cli("Disabled"), Some(AssetManager::Disabled));
        assert_eq!(AssetManager::from_cli("efficient"), None);
    }

    #[test]
    fn can_write_assets() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = AssetManager::Copy.writer(dir.path());

        writer
            .emit_file(&OutputFile::new(
                "images/nested/logo.png".to_string(),
                vec![1, 2, 3],
            ))
            .unwrap();
        writer.finish();

        let expected = dir.path().join("images").join("nested").join("logo.png");
        assert_eq!(writer.written, vec![expected.clone()]);
        assert_eq!(read(expected).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn can_skip_assets_when_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = AssetManager::Disabled.writer(dir.path());

        writer
            .emit_file(&OutputFile::new("images/logo.png".to_string(), vec![1]))
            .unwrap();

        assert!(writer.written.is_empty());
        assert!(!dir.path().join("images").exists());
    }

    #[test]
    fn can_hide_progress_when_disabled() {
        let dir = tempfile::tempdir().unwrap();

        assert!(AssetManager::Disabled.writer(dir.path()).progress.is_hidden());
    }

    #[test]
    fn cant_write_outside_export_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = AssetManager::Copy.writer(dir.path());

        let result = writer.emit_file(&OutputFile::new(
            "images/../../escape.png".to_string(),
            vec![1],
        ));

        assert!(result.is_err());
        assert!(writer.written.is_empty());
    }
}
