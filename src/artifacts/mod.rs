//! Git data structures and algorithms
//!
//! - `objects`: object ids and the object types (blob, tree, commit)
//! - `log`: first-parent commit history traversal

pub mod log;
pub mod objects;
