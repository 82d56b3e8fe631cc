//! Git commit object
//!
//! Commits record a snapshot of the repository and its ancestry:
//!
//! - the tree object id (directory snapshot)
//! - zero or more parent commit ids, in on-disk order
//! - author and committer identities with timestamps
//! - the commit message
//! - optionally one embedded signature block (`gpgsig`)
//!
//! ## Payload format
//!
//! ```text
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <unix-seconds> <±HHMM>
//! committer <name> <email> <unix-seconds> <±HHMM>
//! gpgsig -----BEGIN PGP SIGNATURE-----
//!  <continuation lines, each folded behind a single space>
//!  -----END PGP SIGNATURE-----
//!
//! <commit message>
//! ```
//!
//! The signature value folds across continuation lines until the next
//! top-level key or the blank header/message separator, so the parser
//! runs a small state machine rather than a line-by-line split.

use crate::artifacts::objects::object_id::ObjectId;
use crate::error::{Error, Result};

/// Author or committer identity
///
/// Name, email, and the recorded timestamp with its original UTC offset.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl Author {
    /// Parse the identity pattern `Name <email> <unix-seconds> <±HHMM>`.
    ///
    /// Splits from the right so names containing spaces survive intact.
    /// Returns `None` on any structural violation; the commit parser
    /// turns that into a `MalformedCommit` naming the offending line.
    fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.rsplitn(3, ' ');
        let zone = parts.next()?;
        let seconds = parts.next()?.parse::<i64>().ok()?;
        let name_email = parts.next()?;

        let email_start = name_email.find('<')?;
        let email_end = name_email.find('>')?;
        if email_end < email_start {
            return None;
        }
        let name = name_email[..email_start].trim().to_string();
        let email = name_email[email_start + 1..email_end].to_string();

        let offset = Self::parse_zone_offset(zone)?;
        let timestamp = chrono::DateTime::from_timestamp(seconds, 0)?.with_timezone(&offset);

        Some(Author {
            name,
            email,
            timestamp,
        })
    }

    /// Decode a `±HHMM` UTC offset into a `FixedOffset`.
    fn parse_zone_offset(zone: &str) -> Option<chrono::FixedOffset> {
        let bytes = zone.as_bytes();
        if bytes.len() != 5 {
            return None;
        }
        let sign = match bytes[0] {
            b'+' => 1,
            b'-' => -1,
            _ => return None,
        };
        let hours = zone[1..3].parse::<i32>().ok()?;
        let minutes = zone[3..5].parse::<i32>().ok()?;
        chrono::FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
    }

    /// Format name and email for display
    ///
    /// String in format "Name <email@example.com>"
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// Format timestamp in human-readable form
    ///
    /// String like "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }
}

/// Parser position inside a commit payload.
enum ParseState {
    /// Reading `<key> <value>` header lines
    Header,
    /// Folding the continuation lines of a `gpgsig` block
    InSignature,
    /// Everything after the blank separator is message text
    Body,
}

/// Git commit object
///
/// Parents keep their on-disk order; the chosen parent for history
/// traversal is always the first one.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    tree_oid: ObjectId,
    parents: Vec<ObjectId>,
    author: Author,
    committer: Author,
    message: String,
    gpgsig: Option<String>,
}

impl Commit {
    /// Parse a commit payload (the bytes after the loose-object header).
    ///
    /// `oid` is the id the payload was fetched by; it only feeds error
    /// reporting so a failed walk can say which commit broke.
    pub fn parse(oid: &ObjectId, payload: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(payload)
            .map_err(|_| malformed(oid, "commit is not valid UTF-8"))?;

        let mut state = ParseState::Header;
        let mut tree_oid: Option<ObjectId> = None;
        let mut parents: Vec<ObjectId> = Vec::new();
        let mut author: Option<Author> = None;
        let mut committer: Option<Author> = None;
        let mut signature_lines: Vec<&str> = Vec::new();
        let mut signature: Option<String> = None;
        let mut message_lines: Vec<&str> = Vec::new();

        for line in text.split('\n') {
            if let ParseState::InSignature = state {
                if let Some(folded) = line.strip_prefix(' ') {
                    signature_lines.push(folded);
                    continue;
                }
                // The block ends at the first non-continuation line,
                // which is itself a header line or the blank separator.
                signature = Some(signature_lines.join("\n"));
                signature_lines.clear();
                state = ParseState::Header;
            }

            match state {
                ParseState::Header => {
                    if line.is_empty() {
                        state = ParseState::Body;
                        continue;
                    }
                    let (key, value) = line
                        .split_once(' ')
                        .ok_or_else(|| malformed(oid, format!("header line without value: {line:?}")))?;
                    match key {
                        "tree" => {
                            if tree_oid.is_some() {
                                return Err(malformed(oid, "duplicate tree line"));
                            }
                            tree_oid = Some(ObjectId::try_parse(value.to_string()).map_err(
                                |_| malformed(oid, format!("invalid tree id {value:?}")),
                            )?);
                        }
                        "parent" => {
                            parents.push(ObjectId::try_parse(value.to_string()).map_err(
                                |_| malformed(oid, format!("invalid parent id {value:?}")),
                            )?);
                        }
                        "author" => {
                            if author.is_some() {
                                return Err(malformed(oid, "duplicate author line"));
                            }
                            author = Some(Author::parse(value).ok_or_else(|| {
                                malformed(oid, format!("invalid author line {value:?}"))
                            })?);
                        }
                        "committer" => {
                            if committer.is_some() {
                                return Err(malformed(oid, "duplicate committer line"));
                            }
                            committer = Some(Author::parse(value).ok_or_else(|| {
                                malformed(oid, format!("invalid committer line {value:?}"))
                            })?);
                        }
                        "gpgsig" => {
                            if signature.is_some() {
                                return Err(malformed(oid, "more than one signature block"));
                            }
                            signature_lines.push(value);
                            state = ParseState::InSignature;
                        }
                        // Other headers (encoding, mergetag, ...) are
                        // not needed for history listing; skip them.
                        _ => {}
                    }
                }
                ParseState::Body => message_lines.push(line),
                ParseState::InSignature => unreachable!("handled before the match"),
            }
        }

        if !signature_lines.is_empty() {
            // Payload ended inside the signature block: there was no
            // blank separator, so the message is missing too.
            return Err(malformed(oid, "unterminated signature block"));
        }

        let tree_oid = tree_oid.ok_or_else(|| malformed(oid, "missing tree line"))?;
        let author = author.ok_or_else(|| malformed(oid, "missing author line"))?;
        let committer = committer.ok_or_else(|| malformed(oid, "missing committer line"))?;

        Ok(Commit {
            tree_oid,
            parents,
            author,
            committer,
            message: message_lines.join("\n"),
            gpgsig: signature,
        })
    }

    /// Get the first line of the commit message
    ///
    /// Useful for short-form display (e.g., `log --oneline`)
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    /// All parents in on-disk order
    pub fn parents(&self) -> &[ObjectId] {
        &self.parents
    }

    /// The chosen parent for history traversal: always the first one.
    /// Merge ancestry reachable only through later parents is never
    /// followed; that is a documented policy, not an oversight.
    pub fn parent(&self) -> Option<&ObjectId> {
        self.parents.first()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn committer(&self) -> &Author {
        &self.committer
    }

    /// The opaque signature block, if the commit was signed
    pub fn signature(&self) -> Option<&str> {
        self.gpgsig.as_deref()
    }
}

fn malformed(oid: &ObjectId, reason: impl Into<String>) -> Error {
    Error::MalformedCommit {
        oid: oid.clone(),
        reason: reason.into(),
    }
}
