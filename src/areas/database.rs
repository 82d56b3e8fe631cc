//! Read-only loose object database
//!
//! Objects live under the objects directory, sharded by the first two
//! hex digits of their id: `objects/ab/c123...`. Each file is the
//! zlib-compressed encoding `<kind> <size>\0<payload>`.
//!
//! Fetching verifies everything the format declares: the payload length
//! must equal the declared size and the hash of the re-encoded form
//! must equal the id the object was fetched by. Verification is part of
//! the contract, not an option. Failures are permanent; the store is
//! local and immutable, so nothing retries.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{StoredObject, object_id_for};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::error::{Error, Result};
use bytes::Bytes;
use derive_new::new;
use std::io::Read;
use std::path::Path;

// TODO: support pack files so repositories that have been gc'd are readable
#[derive(Debug, new)]
pub struct Database {
    /// Path to the objects directory (typically `.git/objects`)
    path: Box<Path>,
}

impl Database {
    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Fetch and verify a single loose object.
    ///
    /// Returns the declared kind and the payload whose length equals
    /// the declared size. A missing file is [`Error::NotFound`]; every
    /// other violation (decompression failure, malformed header,
    /// unknown kind, size mismatch, hash mismatch) is
    /// [`Error::CorruptObject`].
    pub fn fetch(&self, oid: &ObjectId) -> Result<StoredObject> {
        let object_path = self.path.join(oid.to_path());

        let compressed = match std::fs::read(&object_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound { oid: oid.clone() });
            }
            Err(e) => return Err(e.into()),
        };

        let decoded = Self::decompress(oid, &compressed)?;
        let (kind, size, payload) = Self::split_header(oid, decoded)?;

        if payload.len() != size {
            return Err(corrupt(
                oid,
                format!("declared size {size} but payload is {} bytes", payload.len()),
            ));
        }

        let actual = object_id_for(kind, &payload, oid.algorithm());
        if &actual != oid {
            return Err(corrupt(oid, format!("content hashes to {actual}")));
        }

        Ok(StoredObject {
            kind,
            size,
            payload,
        })
    }

    /// Fetch an object that must be a commit and parse it.
    pub fn load_commit(&self, oid: &ObjectId) -> Result<Commit> {
        let object = self.fetch(oid)?;
        if object.kind != ObjectType::Commit {
            return Err(corrupt(oid, format!("expected a commit, found a {}", object.kind)));
        }
        Commit::parse(oid, &object.payload)
    }

    /// Fetch an object that must be a blob.
    pub fn load_blob(&self, oid: &ObjectId) -> Result<Blob> {
        let object = self.fetch(oid)?;
        if object.kind != ObjectType::Blob {
            return Err(corrupt(oid, format!("expected a blob, found a {}", object.kind)));
        }
        Ok(Blob::new(object.payload))
    }

    /// Fetch an object that must be a tree and parse it.
    pub fn load_tree(&self, oid: &ObjectId) -> Result<Tree> {
        let object = self.fetch(oid)?;
        if object.kind != ObjectType::Tree {
            return Err(corrupt(oid, format!("expected a tree, found a {}", object.kind)));
        }
        Tree::parse(oid, &object.payload)
    }

    fn decompress(oid: &ObjectId, data: &[u8]) -> Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decoded = Vec::new();
        decoder
            .read_to_end(&mut decoded)
            .map_err(|e| corrupt(oid, format!("decompression failed: {e}")))?;

        Ok(decoded.into())
    }

    /// Split the decompressed bytes at the first NUL into the
    /// `<kind> <size>` header and the payload.
    fn split_header(oid: &ObjectId, decoded: Bytes) -> Result<(ObjectType, usize, Bytes)> {
        let nul = decoded
            .iter()
            .position(|&b| b == b'\0')
            .ok_or_else(|| corrupt(oid, "missing header terminator"))?;

        let header = std::str::from_utf8(&decoded[..nul])
            .map_err(|_| corrupt(oid, "header is not valid UTF-8"))?;
        let (kind, size) = header
            .split_once(' ')
            .ok_or_else(|| corrupt(oid, format!("malformed header {header:?}")))?;

        let kind = ObjectType::try_from(kind).map_err(|reason| corrupt(oid, reason))?;
        let size = size
            .parse::<usize>()
            .map_err(|_| corrupt(oid, format!("non-numeric size {size:?}")))?;

        let payload = decoded.slice(nul + 1..);
        Ok((kind, size, payload))
    }
}

fn corrupt(oid: &ObjectId, reason: impl Into<String>) -> Error {
    Error::CorruptObject {
        oid: oid.clone(),
        reason: reason.into(),
    }
}
