//! First-parent history walk
//!
//! [`HistoryWalk`] is a lazy iterator over a commit chain: each call to
//! `next` decodes one commit and moves the cursor to its first parent.
//! Nothing is pre-materialized, so walking a huge history costs one
//! object decode per element pulled.
//!
//! Merge policy: only the first parent of a merge is ever followed.
//! Commits reachable solely through other parents are never yielded.
//! This is the documented contract, not a shortcut to fix later.
//!
//! A decode failure mid-walk yields exactly one `Err` and then fuses
//! the iterator, so callers can tell "reached the root" (stream ends
//! after an `Ok` with no parents) from "aborted" (stream ends after an
//! `Err`). Commits yielded before the failure remain valid.

use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::error::Result;

/// One step of a history walk: the commit and the id it was fetched by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub oid: ObjectId,
    pub commit: Commit,
}

/// Lazy first-parent walk starting from a resolved commit id.
///
/// Forward-only and non-restartable; construct a new walk to start
/// over. Cyclic parent chains are outside the contract and simply
/// never terminate.
#[derive(Debug)]
pub struct HistoryWalk<'d> {
    database: &'d Database,
    cursor: Option<ObjectId>,
    aborted: bool,
}

impl<'d> HistoryWalk<'d> {
    /// Start a walk at the given commit id.
    pub fn new(database: &'d Database, start: ObjectId) -> Self {
        HistoryWalk {
            database,
            cursor: Some(start),
            aborted: false,
        }
    }
}

impl Iterator for HistoryWalk<'_> {
    type Item = Result<HistoryEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.aborted {
            return None;
        }
        let oid = self.cursor.take()?;

        match self.database.load_commit(&oid) {
            Ok(commit) => {
                // Follow the first parent only; a root commit ends the walk.
                self.cursor = commit.parent().cloned();
                Some(Ok(HistoryEntry { oid, commit }))
            }
            Err(error) => {
                self.aborted = true;
                Some(Err(error))
            }
        }
    }
}
