/*!
 Command line options and their validation.
*/

use std::{env, path::PathBuf};

use clap::{crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches, Command};

use crate::app::{asset_manager::AssetManager, error::RuntimeError, export_type::ExportType};

// CLI Arg Names
pub const OPTION_SKETCH_PATH: &str = "sketch-path";
pub const OPTION_EXPORT_PATH: &str = "export-path";
pub const OPTION_EXPORT_TYPE: &str = "format";
pub const OPTION_COPY_METHOD: &str = "copy-method";
pub const OPTION_PRETTY: &str = "pretty";
pub const OPTION_BYPASS_FREE_SPACE_CHECK: &str = "ignore-disk-warning";

// Other CLI Text
pub const SUPPORTED_FILE_TYPES: &str = "json, module";
pub const SUPPORTED_COPY_METHODS: &str = "copy, disabled";
/// Directory created in the user's home folder when no export path is given
pub const DEFAULT_OUTPUT_DIR: &str = "sketch_export";

#[derive(Debug, PartialEq, Eq)]
pub struct Options {
    /// Path to the `.sketch` file
    pub sketch_path: PathBuf,
    /// Directory the document and its assets are written to
    pub export_path: PathBuf,
    /// Serialization of the document tree
    pub export_type: ExportType,
    /// How to handle embedded images
    pub asset_manager: AssetManager,
    /// Whether to indent the output
    pub pretty: bool,
    /// If true, do not check for free disk space before exporting
    pub ignore_disk_space: bool,
}

impl Options {
    pub fn from_args(args: &ArgMatches) -> Result<Self, RuntimeError> {
        let sketch_path = args
            .get_one::<String>(OPTION_SKETCH_PATH)
            .map(PathBuf::from)
            .ok_or_else(|| {
                RuntimeError::InvalidOptions(format!("Option --{OPTION_SKETCH_PATH} is required"))
            })?;
        let user_export_path = args.get_one::<String>(OPTION_EXPORT_PATH);
        let export_type = args.get_one::<String>(OPTION_EXPORT_TYPE);
        let copy_method = args.get_one::<String>(OPTION_COPY_METHOD);
        let pretty = args.get_flag(OPTION_PRETTY);
        let ignore_disk_space = args.get_flag(OPTION_BYPASS_FREE_SPACE_CHECK);

        // Ensure the package exists
        if !sketch_path.is_file() {
            return Err(RuntimeError::InvalidOptions(format!(
                "Sketch file not found at {}",
                sketch_path.display()
            )));
        }

        // Ensure export type is allowed
        let export_type = match export_type {
            Some(export_type) => ExportType::from_cli(export_type).ok_or_else(|| {
                RuntimeError::InvalidOptions(format!(
                    "{export_type} is not a valid export type! Must be one of <{SUPPORTED_FILE_TYPES}>"
                ))
            })?,
            None => ExportType::default(),
        };

        // Ensure the copy method is allowed
        let asset_manager = match copy_method {
            Some(copy_method) => AssetManager::from_cli(copy_method).ok_or_else(|| {
                RuntimeError::InvalidOptions(format!(
                    "{copy_method} is not a valid copy method! Must be one of <{SUPPORTED_COPY_METHODS}>"
                ))
            })?,
            None => AssetManager::default(),
        };

        // Ensure the export path is usable
        let export_path = match user_export_path {
            Some(path) => PathBuf::from(path),
            None => default_export_path(),
        };
        if export_path.exists() && !export_path.is_dir() {
            return Err(RuntimeError::InvalidOptions(format!(
                "Specified export path {} is not a directory!",
                export_path.display()
            )));
        }

        Ok(Options {
            sketch_path,
            export_path,
            export_type,
            asset_manager,
            pretty,
            ignore_disk_space,
        })
    }
}

/// Get the default export directory, inside the user's home folder when it is known
fn default_export_path() -> PathBuf {
    match env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(DEFAULT_OUTPUT_DIR),
        None => PathBuf::from(DEFAULT_OUTPUT_DIR),
    }
}

/// Build the command line interface
pub fn get_command() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg_required_else_help(true)
        .args(&[
            Arg::new(OPTION_SKETCH_PATH)
                .short('p')
                .long(OPTION_SKETCH_PATH)
                .help("Specify the path to the .sketch file to convert\n")
                .required(true)
                .value_name("path/to/Design.sketch"),
            Arg::new(OPTION_EXPORT_PATH)
                .short('o')
                .long(OPTION_EXPORT_PATH)
                .help(format!("Specify a custom directory for outputting exported data\nIf omitted, the default directory is ~/{DEFAULT_OUTPUT_DIR}\n"))
                .value_name("path/to/some/folder"),
            Arg::new(OPTION_EXPORT_TYPE)
                .short('f')
                .long(OPTION_EXPORT_TYPE)
                .help("Specify the serialization of the exported document\nIf omitted, the default is json\n")
                .value_name(SUPPORTED_FILE_TYPES),
            Arg::new(OPTION_COPY_METHOD)
                .short('c')
                .long(OPTION_COPY_METHOD)
                .help("Specify whether embedded images are written to the export directory\nIf omitted, the default is copy\n")
                .value_name(SUPPORTED_COPY_METHODS),
            Arg::new(OPTION_PRETTY)
                .long(OPTION_PRETTY)
                .help("Indent the exported document\n")
                .action(ArgAction::SetTrue),
            Arg::new(OPTION_BYPASS_FREE_SPACE_CHECK)
                .short('b')
                .long(OPTION_BYPASS_FREE_SPACE_CHECK)
                .help("Bypass the disk space check when exporting data\nBy default, exports will not run if there is not enough free disk space\n")
                .action(ArgAction::SetTrue),
        ])
}

#[cfg(test)]
mod tests {
    use std::{fs::File, path::PathBuf};

    use crate::app::{
        asset_manager::AssetManager,
        error::RuntimeError,
        export_type::ExportType,
        options::{get_command, Options},
    };

    fn parse(args: &[&str]) -> Result<Options, RuntimeError> {
        let mut argv = vec!["sketch-exporter"];
        argv.extend_from_slice(args);
        let matches = get_command().try_get_matches_from(argv).unwrap();
        Options::from_args(&matches)
    }

    #[test]
    fn can_build_valid_options() {
        let dir = tempfile::tempdir().unwrap();
        let sketch = dir.path().join("Design.sketch");
        File::create(&sketch).unwrap();
        let out = dir.path().join("out");

        let options = parse(&[
            "-p",
            sketch.to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
            "-f",
            "module",
            "-c",
            "disabled",
            "--pretty",
        ])
        .unwrap();

        assert_eq!(
            options,
            Options {
                sketch_path: sketch,
                export_path: out,
                export_type: ExportType::Module,
                asset_manager: AssetManager::Disabled,
                pretty: true,
                ignore_disk_space: false,
            }
        );
    }

    #[test]
    fn can_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let sketch = dir.path().join("Design.sketch");
        File::create(&sketch).unwrap();

        let options = parse(&["-p", sketch.to_str().unwrap(), "-b"]).unwrap();

        assert_eq!(options.export_type, ExportType::Json);
        assert_eq!(options.asset_manager, AssetManager::Copy);
        assert!(!options.pretty);
        assert!(options.ignore_disk_space);
        assert!(options.export_path.ends_with(PathBuf::from("sketch_export")));
    }

    #[test]
    fn cant_use_missing_package() {
        let dir = tempfile::tempdir().unwrap();
        let sketch = dir.path().join("Missing.sketch");

        assert!(matches!(
            parse(&["-p", sketch.to_str().unwrap()]),
            Err(RuntimeError::InvalidOptions(_))
        ));
    }

    #[test]
    fn cant_use_invalid_format() {
        let dir = tempfile::tempdir().unwrap();
        let sketch = dir.path().join("Design.sketch");
        File::create(&sketch).unwrap();

        assert!(matches!(
            parse(&["-p", sketch.to_str().unwrap(), "-f", "html"]),
            Err(RuntimeError::InvalidOptions(_))
        ));
    }

    #[test]
    fn cant_use_invalid_copy_method() {
        let dir = tempfile::tempdir().unwrap();
        let sketch = dir.path().join("Design.sketch");
        File::create(&sketch).unwrap();

        assert!(matches!(
            parse(&["-p", sketch.to_str().unwrap(), "-c", "convert"]),
            Err(RuntimeError::InvalidOptions(_))
        ));
    }

    #[test]
    fn cant_export_into_file() {
        let dir = tempfile::tempdir().unwrap();
        let sketch = dir.path().join("Design.sketch");
        File::create(&sketch).unwrap();

        assert!(matches!(
            parse(&[
                "-p",
                sketch.to_str().unwrap(),
                "-o",
                sketch.to_str().unwrap()
            ]),
            Err(RuntimeError::InvalidOptions(_))
        ));
    }
}
