//! `lore` reads commit history straight from a Git repository's loose
//! object store: no git binary, no index, no network.
//!
//! The crate is organized the same way the data flows:
//!
//! - [`areas`]: the repository components — object database, reference
//!   resolver, and the repository facade tying them together
//! - [`artifacts`]: object types (blob, tree, commit) and the
//!   first-parent history walk
//! - [`commands`]: the thin porcelain (`log`) and plumbing (`cat-file`)
//!   layer on top of the library
//!
//! History traversal deliberately follows only the first parent of each
//! commit; commits reachable solely through other parents of a merge
//! are never visited.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod error;

pub use error::{Error, Result};
