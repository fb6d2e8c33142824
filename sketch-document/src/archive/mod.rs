/*!
 Contains logic to resolve the `NSKeyedArchiver` payloads Sketch embeds in its JSON documents.

 ## Overview

 A keyed archive is a binary property list whose `$objects` array stores a flattened object graph.
 Objects point at each other with UID references, which are indexes into `$objects`.

 - [`object_table`] decodes a payload into its `$objects`
 - [`resolver`] turns the archive shapes Sketch uses into plain values
 - [`unarchiver`] finds those fields in a document tree and replaces them
*/

pub mod object_table;
pub mod resolver;
pub mod unarchiver;

#[cfg(test)]
pub(crate) mod fixtures;
