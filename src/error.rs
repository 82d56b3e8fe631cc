//! Error taxonomy for the object store and history traversal
//!
//! Every failure surfaced by the library is one of these variants, so
//! callers can tell a missing object from a corrupt one, and a finished
//! walk from an aborted one. None of these conditions is transient:
//! they reflect store corruption or misconfiguration, so nothing in the
//! crate retries.

use crate::artifacts::objects::object_id::ObjectId;

/// Failures produced while reading the object store and references.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No loose object file exists for the requested id.
    #[error("object {oid} not found")]
    NotFound { oid: ObjectId },

    /// The loose object file exists but its contents are not trustworthy:
    /// decompression failed, the header is malformed, the declared size
    /// does not match the payload, or the recomputed hash differs from
    /// the id used to fetch it.
    #[error("corrupt object {oid}: {reason}")]
    CorruptObject { oid: ObjectId, reason: String },

    /// A commit payload violated the commit grammar.
    #[error("malformed commit {oid}: {reason}")]
    MalformedCommit { oid: ObjectId, reason: String },

    /// A symbolic reference chain exceeded the indirection bound,
    /// which in practice means the refs point at each other in a loop.
    #[error("reference chain starting at {name} exceeded {limit} hops")]
    ReferenceCycle { name: String, limit: usize },

    /// A reference named a target that does not exist on disk.
    #[error("unresolved reference: {name}")]
    UnresolvedReference { name: String },

    /// A string that should have been a 40- or 64-character hex hash
    /// was not one.
    #[error("invalid object id: {0}")]
    InvalidObjectId(String),

    /// No `.git` directory was found here or in any parent directory.
    #[error("not a git repository (or any of the parent directories): {path}")]
    NotARepository { path: String },

    /// Filesystem failure other than a missing object or reference.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
