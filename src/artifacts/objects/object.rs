//! Loose object encoding and hashing
//!
//! Every object is stored as the zlib-compressed byte sequence
//! `<kind> <size>\0<payload>`, and its id is the hash of that exact
//! (uncompressed) sequence. The helpers here produce the encoded form
//! and the id it hashes to; the decoder uses them to verify what it
//! reads, and tests use them to build fixture stores.

use crate::artifacts::objects::object_id::{HashAlgorithm, ObjectId};
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use sha2::Sha256;

/// A decoded loose object: its declared kind and the raw payload.
///
/// Invariant upheld by the decoder: `payload.len()` equals the size
/// declared in the object header, and the hash of the re-encoded form
/// equals the id the object was fetched by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub kind: ObjectType,
    pub size: usize,
    pub payload: Bytes,
}

/// Encode a payload into the on-disk (pre-compression) loose format:
/// `<kind> <size>\0<payload>`.
pub fn encode_loose(kind: ObjectType, payload: &[u8]) -> Bytes {
    let header = format!("{} {}\0", kind.as_str(), payload.len());
    let mut encoded = Vec::with_capacity(header.len() + payload.len());
    encoded.extend_from_slice(header.as_bytes());
    encoded.extend_from_slice(payload);
    Bytes::from(encoded)
}

/// Compute the id a payload would be stored under.
pub fn object_id_for(
    kind: ObjectType,
    payload: &[u8],
    algorithm: HashAlgorithm,
) -> ObjectId {
    let encoded = encode_loose(kind, payload);
    let hex = match algorithm {
        HashAlgorithm::Sha1 => {
            let mut hasher = Sha1::new();
            hasher.update(&encoded);
            format!("{:x}", hasher.finalize())
        }
        HashAlgorithm::Sha256 => {
            let mut hasher = Sha256::new();
            hasher.update(&encoded);
            format!("{:x}", hasher.finalize())
        }
    };

    // A hex digest of the right width always parses.
    ObjectId::try_parse(hex).expect("hash digest is valid hex")
}
