use std::{collections::HashSet, path::PathBuf, sync::LazyLock};

/// Characters disallowed in a filename
static FILENAME_DISALLOWED_CHARS: LazyLock<HashSet<&char>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    set.insert(&'*');
    set.insert(&'"');
    set.insert(&'/');
    set.insert(&'\\');
    set.insert(&'<');
    set.insert(&'>');
    set.insert(&':');
    set.insert(&'|');
    set.insert(&'?');
    set
});
/// The character to replace disallowed chars with
const FILENAME_REPLACEMENT_CHAR: char = '_';

/// Remove unsafe chars in [this list](FILENAME_DISALLOWED_CHARS).
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|letter| {
            if FILENAME_DISALLOWED_CHARS.contains(&letter) {
                FILENAME_REPLACEMENT_CHAR
            } else {
                letter
            }
        })
        .collect()
}

/// Turn the logical path of an emitted file into a relative path that stays inside the export directory
///
/// Empty and `.` components are dropped and each remaining component is passed through
/// [`sanitize_filename`]. Paths that climb with `..` or contain nothing are rejected.
pub fn sanitize_asset_path(path: &str) -> Option<PathBuf> {
    let mut sanitized = PathBuf::new();
    for component in path.split(['/', '\\']) {
        match component {
            "" | "." => continue,
            ".." => return None,
            other => sanitized.push(sanitize_filename(other)),
        }
    }
    if sanitized.as_os_str().is_empty() {
        return None;
    }
    Some(sanitized)
}


#[cfg(test)]
mod test_asset_path {
    use std::path::PathBuf;

    use crate::app::sanitizers::sanitize_asset_path;

    #[test]
    fn can_keep_plain_path() {
        assert_eq!(
            sanitize_asset_path("images/logo.png"),
            Some(PathBuf::from("images").join("logo.png"))
        );
    }

    #[test]
    fn can_drop_empty_components() {
        assert_eq!(
            sanitize_asset_path("/images//./logo.png"),
            Some(PathBuf::from("images").join("logo.png"))
        );
    }

    #[test]
    fn can_sanitize_components() {
        assert_eq!(
            sanitize_asset_path("images/a:b?.png"),
            Some(PathBuf::from("images").join("a_b_.png"))
        );
    }

    #[test]
    fn cant_escape_export_directory() {
        assert_eq!(sanitize_asset_path("images/../../etc/passwd"), None);
        assert_eq!(sanitize_asset_path("..\\secrets"), None);
    }

    #[test]
    fn cant_use_empty_path() {
        assert_eq!(sanitize_asset_path(""), None);
        assert_eq!(sanitize_asset_path("/./"), None);
    }
}
