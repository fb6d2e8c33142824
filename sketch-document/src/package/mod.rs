/*!
 Reads a Sketch package and assembles its entries into one document tree.

 A `.sketch` file is a zip archive containing:

 - `document.json`, `meta.json`, and `user.json`
 - `pages/<id>.json` for every page
 - `images/<name>` for every embedded bitmap
 - previews and other files this loader does not use
*/

pub mod entry;
pub mod loader;
pub mod models;
pub mod output;
pub mod reader;
