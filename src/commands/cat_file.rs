//! Object pretty-printer
//!
//! `cat-file -p` for loose objects: commits and tags print their
//! payload as text, trees print one `mode type oid\tname` line per
//! entry, blobs print their raw content.

use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use crate::error::Result;

impl Repository {
    pub fn cat_file(&self, raw_oid: &str) -> Result<()> {
        let oid = ObjectId::try_parse(raw_oid.to_string())?;
        let object = self.database().fetch(&oid)?;

        match object.kind {
            ObjectType::Blob => {
                let blob = Blob::new(object.payload);
                self.writer().write_all(blob.content())?;
            }
            ObjectType::Tree => {
                let tree = Tree::parse(&oid, &object.payload)?;
                for entry in tree.entries() {
                    let kind = if entry.is_tree() { "tree" } else { "blob" };
                    writeln!(
                        self.writer(),
                        "{:0>6} {} {}\t{}",
                        entry.mode,
                        kind,
                        entry.oid,
                        entry.name
                    )?;
                }
            }
            ObjectType::Commit | ObjectType::Tag => {
                self.writer().write_all(&object.payload)?;
            }
        }

        Ok(())
    }
}
