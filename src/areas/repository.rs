//! Repository facade
//!
//! Ties the object database and reference resolver to a worktree path
//! and owns the output writer the commands print through. All access is
//! read-only; the facade never mutates the repository it points at.

use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::artifacts::log::rev_list::HistoryWalk;
use crate::error::{Error, Result};
use std::cell::{RefCell, RefMut};
use std::path::Path;

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
}

impl Repository {
    /// Open the repository whose worktree root is `path`.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let git_path = path.join(".git");
        let database = Database::new(git_path.join("objects").into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Ok(Repository {
            path: path.into(),
            writer: RefCell::new(writer),
            database,
            refs,
        })
    }

    /// Find the repository containing `start` by walking up the
    /// directory tree until a `.git` directory appears.
    ///
    /// Reaching the filesystem root without finding one is
    /// [`Error::NotARepository`].
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        let mut current = start;

        loop {
            if current.join(".git").is_dir() {
                return Self::new(current, writer);
            }
            current = match current.parent() {
                Some(parent) => parent,
                None => {
                    return Err(Error::NotARepository {
                        path: start.display().to_string(),
                    });
                }
            };
        }
    }

    /// Walk first-parent history starting from the commit HEAD
    /// resolves to.
    pub fn history(&self) -> Result<HistoryWalk<'_>> {
        let head = self.refs.resolve_head()?;
        Ok(HistoryWalk::new(&self.database, head))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }
}
