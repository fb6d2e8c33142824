/*!
 This module defines common utilities used across the package loader.
*/

pub mod plist;
