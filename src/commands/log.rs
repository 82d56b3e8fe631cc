//! History listing
//!
//! Renders the first-parent walk the way git's default log does:
//! newest first, medium format (`commit` line, author, date, indented
//! message) or oneline format. Rendering stops at the first decode
//! failure and propagates it; everything printed before that remains
//! valid output.

use crate::areas::repository::Repository;
use crate::artifacts::log::rev_list::HistoryEntry;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    pub oneline: bool,
    pub abbrev_commit: bool,
}

impl Repository {
    pub fn log(&self, opts: &LogOptions) -> Result<()> {
        let mut first = true;

        for entry in self.history()? {
            let entry = entry?;

            if opts.oneline {
                self.show_commit_oneline(&entry, true)?;
            } else {
                if !first {
                    writeln!(self.writer())?;
                }
                self.show_commit_medium(&entry, opts.abbrev_commit)?;
            }
            first = false;
        }

        Ok(())
    }

    fn show_commit_medium(&self, entry: &HistoryEntry, abbrev_commit: bool) -> Result<()> {
        writeln!(self.writer(), "commit {}", self.format_oid(entry, abbrev_commit))?;
        writeln!(
            self.writer(),
            "Author: {}",
            entry.commit.author().display_name()
        )?;
        writeln!(
            self.writer(),
            "Date:   {}",
            entry.commit.author().readable_timestamp()
        )?;
        writeln!(self.writer())?;
        for message_line in entry.commit.message().lines() {
            writeln!(self.writer(), "    {}", message_line)?;
        }

        Ok(())
    }

    fn show_commit_oneline(&self, entry: &HistoryEntry, abbrev_commit: bool) -> Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            self.format_oid(entry, abbrev_commit),
            entry.commit.short_message()
        )?;

        Ok(())
    }

    fn format_oid(&self, entry: &HistoryEntry, abbrev_commit: bool) -> String {
        if abbrev_commit {
            entry.oid.to_short_oid()
        } else {
            entry.oid.to_string()
        }
    }
}
