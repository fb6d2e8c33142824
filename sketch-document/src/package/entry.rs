/*!
 Classifies package entries by their path.
*/

use std::{fmt::Display, sync::LazyLock};

use regex::Regex;

/// Top-level documents, i.e. `document.json`
static SECTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(user|document|meta)\.json$").unwrap());
/// Page documents, i.e. `pages/<id>.json`
static PAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^pages/(.+)\.json$").unwrap());
/// Binary assets, i.e. `images/<name>`
static IMAGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^images/(.+)$").unwrap());

/// The top-level JSON documents of a package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    User,
    Document,
    Meta,
}

impl Section {
    /// Every section, in the order they are written to the output
    pub const ALL: [Section; 3] = [Section::User, Section::Document, Section::Meta];

    /// The key this section is stored under in the document tree
    pub fn key(&self) -> &'static str {
        match self {
            Section::User => "user",
            Section::Document => "document",
            Section::Meta => "meta",
        }
    }

    fn from_key(key: &str) -> Option<Self> {
        match key {
            "user" => Some(Section::User),
            "document" => Some(Section::Document),
            "meta" => Some(Section::Meta),
            _ => None,
        }
    }
}

impl Display for Section {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "{}", self.key())
    }
}

/// What a package entry holds, determined by its path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// `user.json`, `document.json`, or `meta.json`
    Section(Section),
    /// `pages/<id>.json`, holding the page id
    Page(String),
    /// `images/<name>`, emitted as an output file at its original path
    Image,
    /// Anything else, such as `previews/preview.png`
    Ignored,
}

impl EntryKind {
    /// Determine the kind of the entry at `path`
    pub fn classify(path: &str) -> Self {
        if let Some(section) = SECTION_PATTERN
            .captures(path)
            .and_then(|captures| Section::from_key(captures.get(1)?.as_str()))
        {
            return Self::Section(section);
        }
        if let Some(id) = PAGE_PATTERN
            .captures(path)
            .and_then(|captures| captures.get(1))
        {
            return Self::Page(id.as_str().to_string());
        }
        if IMAGE_PATTERN.is_match(path) {
            return Self::Image;
        }
        Self::Ignored
    }
}

impl Display for EntryKind {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::Section(section) => write!(fmt, "section {section}"),
            EntryKind::Page(id) => write!(fmt, "page {id}"),
            EntryKind::Image => write!(fmt, "image"),
            EntryKind::Ignored => write!(fmt, "ignored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::package::entry::{EntryKind, Section};

    #[test]
    fn can_classify_sections() {
        assert_eq!(EntryKind::classify("user.json"), EntryKind::Section(Section::User));
        assert_eq!(
            EntryKind::classify("document.json"),
            EntryKind::Section(Section::Document)
        );
        assert_eq!(EntryKind::classify("meta.json"), EntryKind::Section(Section::Meta));
    }

    #[test]
    fn can_classify_pages() {
        assert_eq!(
            EntryKind::classify("pages/6B1B4E5F-2E0C-4D7A-9C31-5C3F6A0B1D2E.json"),
            EntryKind::Page("6B1B4E5F-2E0C-4D7A-9C31-5C3F6A0B1D2E".to_string())
        );
        assert_eq!(
            EntryKind::classify("pages/nested/p1.json"),
            EntryKind::Page("nested/p1".to_string())
        );
    }

    #[test]
    fn can_classify_images() {
        assert_eq!(EntryKind::classify("images/logo.png"), EntryKind::Image);
        assert_eq!(EntryKind::classify("images/sub/dir/logo.pdf"), EntryKind::Image);
    }

    #[test]
    fn can_ignore_everything_else() {
        assert_eq!(EntryKind::classify("previews/preview.png"), EntryKind::Ignored);
        assert_eq!(EntryKind::classify("text-previews/text.txt"), EntryKind::Ignored);
        assert_eq!(EntryKind::classify("images/"), EntryKind::Ignored);
        assert_eq!(EntryKind::classify("pages/.json"), EntryKind::Ignored);
    }

    #[test]
    fn cant_match_unanchored_paths() {
        assert_eq!(EntryKind::classify("old/document.json"), EntryKind::Ignored);
        assert_eq!(EntryKind::classify("documentXjson"), EntryKind::Ignored);
        assert_eq!(EntryKind::classify("meta.json.bak"), EntryKind::Ignored);
        assert_eq!(EntryKind::classify("backup/pages/p1.json"), EntryKind::Ignored);
        assert_eq!(EntryKind::classify("pages/p1.jsonx"), EntryKind::Ignored);
    }

    #[test]
    fn can_get_section_keys() {
        let keys: Vec<&str> = Section::ALL.iter().map(Section::key).collect();
        assert_eq!(keys, vec!["user", "document", "meta"]);
    }
}
