//! Git object types and operations
//!
//! Git stores all content as objects identified by their hash. Four
//! kinds exist on disk:
//!
//! - **Blob**: file content (raw bytes)
//! - **Tree**: directory listing (modes, names, and object ids)
//! - **Commit**: snapshot with metadata (tree, parents, author, message)
//! - **Tag**: annotated reference to another object
//!
//! Every loose object is the zlib-compressed encoding
//! `<kind> <size>\0<payload>`, and its id is the hash of that encoding.

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const SHA1_HEX_LENGTH: usize = 40;

/// Length of a SHA-256 hash in hexadecimal format
pub const SHA256_HEX_LENGTH: usize = 64;
