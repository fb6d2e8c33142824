/*!
 Errors that can happen when reading packages and resolving their archived fields.
*/

pub mod archive;
pub mod package;
