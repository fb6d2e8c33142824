/*!
 The aggregate document assembled from a package's JSON entries.
*/

use json::{object::Object, JsonValue};

use crate::package::entry::Section;

/// Key of the page mapping in the document tree
pub const PAGES_KEY: &str = "pages";

/// The JSON documents of a package, before any archived fields are resolved
#[derive(Debug, Clone, PartialEq)]
pub struct SketchDocument {
    /// Contents of `user.json`
    pub user: Option<JsonValue>,
    /// Contents of `document.json`
    pub document: Option<JsonValue>,
    /// Contents of `meta.json`
    pub meta: Option<JsonValue>,
    /// Contents of every `pages/<id>.json`, keyed by page id
    pub pages: Object,
}

impl Default for SketchDocument {
    fn default() -> Self {
        Self {
            user: None,
            document: None,
            meta: None,
            pages: Object::new(),
        }
    }
}

impl SketchDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the contents of a top-level section, if the package had it
    pub fn section(&self, section: Section) -> Option<&JsonValue> {
        match section {
            Section::User => self.user.as_ref(),
            Section::Document => self.document.as_ref(),
            Section::Meta => self.meta.as_ref(),
        }
    }

    /// Store the contents of a top-level section
    pub fn set_section(&mut self, section: Section, value: JsonValue) {
        let slot = match section {
            Section::User => &mut self.user,
            Section::Document => &mut self.document,
            Section::Meta => &mut self.meta,
        };
        *slot = Some(value);
    }

    /// Store the contents of a page
    pub fn insert_page(&mut self, id: &str, page: JsonValue) {
        self.pages.insert(id, page);
    }

    /// Build the document tree
    ///
    /// The tree always has the `user`, `document`, `meta`, and `pages` keys. Sections the package
    /// did not contain are `null`.
    pub fn into_json(self) -> JsonValue {
        let mut tree = Object::with_capacity(Section::ALL.len() + 1);
        let Self {
            user,
            document,
            meta,
            pages,
        } = self;
        tree.insert(Section::User.key(), user.unwrap_or(JsonValue::Null));
        tree.insert(Section::Document.key(), document.unwrap_or(JsonValue::Null));
        tree.insert(Section::Meta.key(), meta.unwrap_or(JsonValue::Null));
        tree.insert(PAGES_KEY, JsonValue::Object(pages));
        JsonValue::Object(tree)
    }
}
