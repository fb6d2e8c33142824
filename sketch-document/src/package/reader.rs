/*!
 Reads entries out of a Sketch package.

 A `.sketch` file is a zip archive. The [`Package`] trait describes the reads the loader needs so
 the assembler does not depend on where the bytes come from; [`ZipPackage`] is the implementation
 backed by the [`zip`] crate.
*/

use std::{
    cell::RefCell,
    fs,
    io::{Cursor, Read},
    path::Path,
};

use zip::{result::ZipError, ZipArchive};

use crate::error::package::PackageError;

/// Defines the reads the loader performs against a package
///
/// Reads are asynchronous per entry so that a loader can issue all of them at once.
#[allow(async_fn_in_trait)]
pub trait Package {
    /// Paths of every file entry, in archive order; directories are not included
    fn entry_names(&self) -> Result<Vec<String>, PackageError>;
    /// Read an entry as UTF-8 text
    async fn read_string(&self, path: &str) -> Result<String, PackageError>;
    /// Read an entry as raw bytes
    async fn read_bytes(&self, path: &str) -> Result<Vec<u8>, PackageError>;
}

/// A package held in memory as a zip archive
///
/// Reads are served one at a time on the current thread.
pub struct ZipPackage {
    archive: RefCell<ZipArchive<Cursor<Vec<u8>>>>,
}

impl ZipPackage {
    /// Open a package from its raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, PackageError> {
        let archive = ZipArchive::new(Cursor::new(bytes)).map_err(PackageError::CannotOpen)?;
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Read and open the package at `path`
    pub fn open(path: &Path) -> Result<Self, PackageError> {
        Self::from_bytes(fs::read(path).map_err(PackageError::CannotReadFile)?)
    }

    /// Sum of the uncompressed sizes of every file entry, read from the central directory
    pub fn uncompressed_size(&self) -> Result<u64, PackageError> {
        let mut archive = self.archive.borrow_mut();
        let mut total = 0;
        for idx in 0..archive.len() {
            total += archive
                .by_index_raw(idx)
                .map_err(|why| PackageError::CannotList(idx, why))?
                .size();
        }
        Ok(total)
    }

    fn read_entry(&self, path: &str, into: &mut Vec<u8>) -> Result<(), PackageError> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive.by_name(path).map_err(|why| match why {
            ZipError::FileNotFound => PackageError::MissingEntry(path.to_string(), why),
            _ => PackageError::CannotExtract(path.to_string(), why),
        })?;
        file.read_to_end(into)
            .map_err(|why| PackageError::CannotRead(path.to_string(), why))?;
        Ok(())
    }
}

impl Package for ZipPackage {
    /// Names come from entry metadata only; nothing is decompressed until it is read
    fn entry_names(&self) -> Result<Vec<String>, PackageError> {
        let mut archive = self.archive.borrow_mut();
        let mut names = Vec::with_capacity(archive.len());
        for idx in 0..archive.len() {
            let file = archive
                .by_index_raw(idx)
                .map_err(|why| PackageError::CannotList(idx, why))?;
            if file.is_dir() {
                log::debug!("Skipping directory entry {}", file.name());
                continue;
            }
            names.push(file.name().to_string());
        }
        Ok(names)
    }

    async fn read_string(&self, path: &str) -> Result<String, PackageError> {
        let mut bytes = vec![];
        self.read_entry(path, &mut bytes)?;
        String::from_utf8(bytes).map_err(|why| {
            PackageError::CannotRead(
                path.to_string(),
                std::io::Error::new(std::io::ErrorKind::InvalidData, why),
            )
        })
    }

    async fn read_bytes(&self, path: &str) -> Result<Vec<u8>, PackageError> {
        let mut bytes = vec![];
        self.read_entry(path, &mut bytes)?;
        Ok(bytes)
    }
}
