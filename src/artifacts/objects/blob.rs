//! Git blob object
//!
//! Blobs store file content. The payload is opaque to history listing;
//! this wrapper only exists so `cat-file -p` can print it back out.

use bytes::Bytes;
use derive_new::new;

/// Git blob object holding raw file content.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Blob {
    content: Bytes,
}

impl Blob {
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}
