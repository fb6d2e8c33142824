#![forbid(unsafe_code)]
#![doc = include_str!("../README.md")]

pub mod archive;
pub mod error;
pub mod package;
pub mod util;

pub use package::loader::{convert, convert_bytes};
