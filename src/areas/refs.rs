//! Git references (HEAD and named refs)
//!
//! References are human-readable names pointing at commits, stored as
//! text files under `.git`:
//!
//! - Direct: the file holds a hex object id
//! - Symbolic: the file holds `ref: <path>` naming another reference
//!   (e.g. HEAD -> refs/heads/main)
//!
//! Resolution follows symbolic indirection until it reaches a direct
//! id. The chain is bounded so two refs pointing at each other fail
//! with [`Error::ReferenceCycle`] instead of spinning forever.
//!
//! This module is a read-only consumer; it never creates, updates or
//! deletes references.

use crate::artifacts::objects::object_id::ObjectId;
use crate::error::{Error, Result};
use derive_new::new;
use std::path::Path;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Maximum symbolic indirection hops before a chain is declared cyclic.
/// The format leaves the bound implicit; ten levels is far beyond any
/// chain a real repository produces.
pub const MAX_REF_HOPS: usize = 10;

/// Read-only reference resolver rooted at the `.git` directory.
#[derive(Debug, new)]
pub struct Refs {
    /// Path to the git directory (typically `.git`)
    path: Box<Path>,
}

/// A reference file's content: another reference's path, or an id.
#[derive(Debug, Clone)]
enum SymRefOrOid {
    SymRef { target: String },
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read(path: &Path, name: &str) -> Result<SymRefOrOid> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::UnresolvedReference {
                    name: name.to_string(),
                });
            }
            Err(e) => return Err(e.into()),
        };
        let content = content.trim();

        let symref_regex =
            regex::Regex::new(SYMREF_REGEX).expect("symref pattern is a valid regex");
        if let Some(symref_match) = symref_regex.captures(content) {
            Ok(SymRefOrOid::SymRef {
                target: symref_match[1].to_string(),
            })
        } else {
            Ok(SymRefOrOid::Oid(ObjectId::try_parse(content.to_string())?))
        }
    }
}

impl Refs {
    /// Resolve HEAD to a concrete object id.
    pub fn resolve_head(&self) -> Result<ObjectId> {
        self.resolve(HEAD_REF_NAME)
    }

    /// Resolve a reference name to a concrete object id, following
    /// `ref: <path>` indirection up to [`MAX_REF_HOPS`] times.
    ///
    /// A missing file at any hop is [`Error::UnresolvedReference`] for
    /// that hop's name; running out of hops is [`Error::ReferenceCycle`].
    pub fn resolve(&self, name: &str) -> Result<ObjectId> {
        let mut current = name.to_string();

        for _ in 0..MAX_REF_HOPS {
            let ref_path = self.path.join(&current);
            match SymRefOrOid::read(&ref_path, &current)? {
                SymRefOrOid::SymRef { target } => current = target,
                SymRefOrOid::Oid(oid) => return Ok(oid),
            }
        }

        Err(Error::ReferenceCycle {
            name: name.to_string(),
            limit: MAX_REF_HOPS,
        })
    }

    pub fn git_path(&self) -> &Path {
        &self.path
    }
}
