//! Git tree object
//!
//! Trees list directory contents. Each entry is encoded as
//! `<mode> <name>\0<raw-oid>` where the oid is raw bytes whose width
//! depends on the store's hash flavor. History listing itself never
//! needs tree contents; this decoder exists so `cat-file -p` can
//! pretty-print any object it is pointed at.

use crate::artifacts::objects::object_id::{HashAlgorithm, ObjectId};
use crate::error::{Error, Result};

/// One directory entry: mode, name, and the object it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub mode: String,
    pub name: String,
    pub oid: ObjectId,
}

impl TreeEntry {
    /// Entries with mode `40000` point at sub-trees.
    pub fn is_tree(&self) -> bool {
        self.mode == "40000"
    }
}

/// Git tree object: the parsed entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    /// Parse a tree payload.
    ///
    /// `oid` is the tree's own id; it determines the raw-oid width of
    /// the entries and feeds error reporting.
    pub fn parse(oid: &ObjectId, payload: &[u8]) -> Result<Self> {
        let raw_len = oid.algorithm().raw_len();
        let mut entries = Vec::new();
        let mut rest = payload;

        while !rest.is_empty() {
            let space = rest
                .iter()
                .position(|&b| b == b' ')
                .ok_or_else(|| corrupt(oid, "tree entry without mode"))?;
            let mode = std::str::from_utf8(&rest[..space])
                .map_err(|_| corrupt(oid, "tree entry mode is not valid UTF-8"))?
                .to_string();
            rest = &rest[space + 1..];

            let nul = rest
                .iter()
                .position(|&b| b == b'\0')
                .ok_or_else(|| corrupt(oid, "tree entry without name terminator"))?;
            let name = String::from_utf8_lossy(&rest[..nul]).into_owned();
            rest = &rest[nul + 1..];

            if rest.len() < raw_len {
                return Err(corrupt(oid, "tree entry truncated before oid"));
            }
            let entry_oid = ObjectId::from_raw_bytes(&rest[..raw_len])?;
            rest = &rest[raw_len..];

            entries.push(TreeEntry {
                mode,
                name,
                oid: entry_oid,
            });
        }

        Ok(Tree { entries })
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }
}

fn corrupt(oid: &ObjectId, reason: &str) -> Error {
    Error::CorruptObject {
        oid: oid.clone(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::objects::object::object_id_for;
    use crate::artifacts::objects::object_type::ObjectType;

    fn tree_payload(entries: &[(&str, &str, [u8; 20])]) -> Vec<u8> {
        let mut payload = Vec::new();
        for (mode, name, raw) in entries {
            payload.extend_from_slice(mode.as_bytes());
            payload.push(b' ');
            payload.extend_from_slice(name.as_bytes());
            payload.push(b'\0');
            payload.extend_from_slice(raw);
        }
        payload
    }

    #[test]
    fn test_parse_entries_in_order() {
        let payload = tree_payload(&[
            ("100644", "README.md", [0x11; 20]),
            ("40000", "src", [0x22; 20]),
        ]);
        let oid = object_id_for(ObjectType::Tree, &payload, HashAlgorithm::Sha1);
        let tree = Tree::parse(&oid, &payload).unwrap();

        let entries = tree.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "README.md");
        assert_eq!(entries[0].mode, "100644");
        assert!(!entries[0].is_tree());
        assert_eq!(entries[1].name, "src");
        assert!(entries[1].is_tree());
        assert_eq!(entries[1].oid.as_ref(), "22".repeat(20));
    }

    #[test]
    fn test_truncated_entry_is_corrupt() {
        let mut payload = tree_payload(&[("100644", "a.txt", [0x11; 20])]);
        payload.truncate(payload.len() - 4);
        let oid = object_id_for(ObjectType::Tree, &payload, HashAlgorithm::Sha1);
        assert!(matches!(
            Tree::parse(&oid, &payload),
            Err(Error::CorruptObject { .. })
        ));
    }
}
