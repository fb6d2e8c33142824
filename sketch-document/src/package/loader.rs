/*!
 Assembles a package into a single document tree.

 Every entry is loaded as its own future and all of them are joined before anything else happens.
 Each entry writes to its own slot of the result, so the results are merged after the join. Assets
 are only handed to the [`OutputSink`] once the whole document has converted; a failed conversion
 emits nothing.
*/

use futures::future::try_join_all;
use json::JsonValue;
use log::{debug, info};

use crate::{
    archive::unarchiver::unarchive,
    error::package::PackageError,
    package::{
        entry::{EntryKind, Section},
        models::SketchDocument,
        output::{OutputFile, OutputSink},
        reader::{Package, ZipPackage},
    },
};

/// The result of loading a single package entry
#[derive(Debug)]
enum LoadedEntry {
    Section(Section, JsonValue),
    Page(String, JsonValue),
    Asset(OutputFile),
}

/// The contents of a package, before archived fields are resolved
#[derive(Debug, Default)]
pub struct LoadedPackage {
    /// The JSON documents
    pub document: SketchDocument,
    /// Binary assets, in package order
    pub assets: Vec<OutputFile>,
}

async fn load_json<P: Package>(package: &P, path: &str) -> Result<JsonValue, PackageError> {
    let text = package.read_string(path).await?;
    json::parse(&text).map_err(|why| PackageError::EntryDecode(path.to_string(), why))
}

async fn load_entry<P: Package>(
    package: &P,
    path: String,
    kind: EntryKind,
) -> Result<LoadedEntry, PackageError> {
    debug!("Loading {path} as {kind}");
    match kind {
        EntryKind::Section(section) => Ok(LoadedEntry::Section(
            section,
            load_json(package, &path).await?,
        )),
        EntryKind::Page(id) => Ok(LoadedEntry::Page(id, load_json(package, &path).await?)),
        EntryKind::Image | EntryKind::Ignored => {
            let contents = package.read_bytes(&path).await?;
            Ok(LoadedEntry::Asset(OutputFile::new(path, contents)))
        }
    }
}

/// Load every recognized entry of a package
///
/// Fails on the first entry that cannot be read or parsed.
pub async fn load<P: Package>(package: &P) -> Result<LoadedPackage, PackageError> {
    let tasks = package.entry_names()?.into_iter().filter_map(|path| {
        match EntryKind::classify(&path) {
            EntryKind::Ignored => {
                debug!("Ignoring {path}");
                None
            }
            kind => Some(load_entry(package, path, kind)),
        }
    });

    let mut loaded = LoadedPackage::default();
    for entry in try_join_all(tasks).await? {
        match entry {
            LoadedEntry::Section(section, value) => loaded.document.set_section(section, value),
            LoadedEntry::Page(id, page) => loaded.document.insert_page(&id, page),
            LoadedEntry::Asset(file) => loaded.assets.push(file),
        }
    }
    Ok(loaded)
}

/// Convert a package into its resolved document tree
///
/// Image assets are emitted to `sink` only after every entry has loaded and every archived field
/// has resolved.
pub async fn convert<P: Package, S: OutputSink>(
    package: &P,
    sink: &mut S,
) -> Result<JsonValue, PackageError> {
    let LoadedPackage { document, assets } = load(package).await?;
    let pages = document.pages.len();

    let tree = unarchive(document.into_json())?;

    for asset in &assets {
        sink.emit_file(asset)
            .map_err(|why| PackageError::CannotEmit(asset.path.clone(), why))?;
    }

    info!(
        "Converted package with {pages} pages and {} assets",
        assets.len()
    );
    Ok(tree)
}

/// Convert the raw bytes of a package, returning the serialized document tree
pub async fn convert_bytes<S: OutputSink>(
    bytes: Vec<u8>,
    sink: &mut S,
) -> Result<String, PackageError> {
    let package = ZipPackage::from_bytes(bytes)?;
    Ok(convert(&package, sink).await?.dump())
}
