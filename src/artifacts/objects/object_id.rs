//! Git object identifier
//!
//! Object ids are hexadecimal strings naming the hash of an object's
//! encoded form. A repository uses one of two hash flavors:
//!
//! - SHA-1: 40 hex characters (20 bytes)
//! - SHA-256: 64 hex characters (32 bytes)
//!
//! Equality is plain byte-equality of the hex form.
//!
//! ## Storage
//!
//! Objects live in `.git/objects/<first-2-chars>/<remaining-chars>`

use crate::artifacts::objects::{SHA1_HEX_LENGTH, SHA256_HEX_LENGTH};
use crate::error::{Error, Result};
use std::path::PathBuf;

/// Hash algorithm a repository's object store is keyed by,
/// implied by the length of its object ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha1,
    Sha256,
}

impl HashAlgorithm {
    /// Width of a raw (binary) hash in bytes
    pub fn raw_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => SHA1_HEX_LENGTH / 2,
            HashAlgorithm::Sha256 => SHA256_HEX_LENGTH / 2,
        }
    }
}

/// Git object identifier
///
/// A validated hex string uniquely identifying an object. Provides
/// parsing, path conversion and abbreviation utilities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object id from a string
    ///
    /// Accepts 40-character (SHA-1) and 64-character (SHA-256) lowercase
    /// or uppercase hex; anything else is [`Error::InvalidObjectId`].
    pub fn try_parse(id: String) -> Result<Self> {
        if id.len() != SHA1_HEX_LENGTH && id.len() != SHA256_HEX_LENGTH {
            return Err(Error::InvalidObjectId(id));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::InvalidObjectId(id));
        }
        Ok(Self(id))
    }

    /// The hash flavor this id was produced by
    pub fn algorithm(&self) -> HashAlgorithm {
        if self.0.len() == SHA1_HEX_LENGTH {
            HashAlgorithm::Sha1
        } else {
            HashAlgorithm::Sha256
        }
    }

    /// Convert to the loose-object path relative to the objects directory
    ///
    /// Splits the hash as `XX/YYYY...` where XX is the first 2 chars.
    /// For example, `abc123...` becomes `ab/c123...`
    pub fn to_path(&self) -> PathBuf {
        let (dir, file) = self.0.split_at(2);
        PathBuf::from(dir).join(file)
    }

    /// Get abbreviated form of the object id
    ///
    /// First 7 characters of the hash (standard Git abbreviation)
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }

    /// Read an object id from its raw binary form
    ///
    /// Used when decoding tree entries, which embed ids as raw bytes.
    pub fn from_raw_bytes(bytes: &[u8]) -> Result<Self> {
        let hex = bytes.iter().map(|b| format!("{b:02x}")).collect::<String>();
        Self::try_parse(hex)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
