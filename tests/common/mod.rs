#![allow(dead_code)]

//! Fixture repositories built directly on disk: loose objects are
//! encoded, hashed and zlib-compressed by hand, so no git binary is
//! needed to run the suite.

use assert_fs::TempDir;
use assert_fs::fixture::PathChild;
use lore::artifacts::objects::object::{encode_loose, object_id_for};
use lore::artifacts::objects::object_id::{HashAlgorithm, ObjectId};
use lore::artifacts::objects::object_type::ObjectType;
use sha1::{Digest, Sha1};
use std::io::Write;
use std::path::Path;

/// An initialized fixture repository for rstest-style tests.
#[rstest::fixture]
pub fn repository_dir() -> TempDir {
    init_repo()
}

/// Create `.git` with empty objects and refs directories and a HEAD
/// pointing at `refs/heads/main`.
pub fn init_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("create temp dir");
    let git = temp_dir.child(".git");
    std::fs::create_dir_all(git.path().join("objects")).expect("create objects dir");
    std::fs::create_dir_all(git.path().join("refs").join("heads")).expect("create refs dir");
    write_ref(temp_dir.path(), "HEAD", "ref: refs/heads/main");
    temp_dir
}

/// Write a reference file with the given raw content.
pub fn write_ref(worktree: &Path, name: &str, content: &str) {
    let path = worktree.join(".git").join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create ref parent dirs");
    }
    std::fs::write(path, format!("{content}\n")).expect("write ref file");
}

/// Point `refs/heads/main` at a commit.
pub fn set_main(worktree: &Path, oid: &ObjectId) {
    write_ref(worktree, "refs/heads/main", oid.as_ref());
}

/// Store a payload as a loose object of the given kind; returns its id.
pub fn write_loose(worktree: &Path, kind: ObjectType, payload: &[u8]) -> ObjectId {
    let oid = object_id_for(kind, payload, HashAlgorithm::Sha1);
    write_raw_loose(worktree, &oid, &encode_loose(kind, payload));
    oid
}

/// Store pre-encoded loose bytes under the id they hash to. Used to
/// plant objects with broken headers that still pass hash verification.
pub fn write_raw_encoded(worktree: &Path, encoded: &[u8]) -> ObjectId {
    let mut hasher = Sha1::new();
    hasher.update(encoded);
    let oid = ObjectId::try_parse(format!("{:x}", hasher.finalize())).expect("valid digest");
    write_raw_loose(worktree, &oid, encoded);
    oid
}

/// Compress `encoded` and place it at the loose path for `oid`,
/// whether or not it actually hashes to `oid`.
pub fn write_raw_loose(worktree: &Path, oid: &ObjectId, encoded: &[u8]) {
    let object_path = worktree.join(".git").join("objects").join(oid.to_path());
    std::fs::create_dir_all(object_path.parent().expect("sharded path has a parent"))
        .expect("create object dir");

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(encoded).expect("compress object");
    let compressed = encoder.finish().expect("finish compression");
    std::fs::write(object_path, compressed).expect("write object file");
}

/// Store an empty tree and return its id.
pub fn write_empty_tree(worktree: &Path) -> ObjectId {
    write_loose(worktree, ObjectType::Tree, b"")
}

/// Build and store a commit with the given parents and message.
/// Timestamps advance with `sequence` so each commit is distinct.
pub fn write_commit(
    worktree: &Path,
    tree: &ObjectId,
    parents: &[&ObjectId],
    message: &str,
    sequence: i64,
) -> ObjectId {
    let mut lines = vec![format!("tree {tree}")];
    for parent in parents {
        lines.push(format!("parent {parent}"));
    }
    let identity = format!("Test Author <test@example.com> {} +0000", 1465164000 + sequence);
    lines.push(format!("author {identity}"));
    lines.push(format!("committer {identity}"));
    lines.push(String::new());
    lines.push(message.to_string());

    write_loose(worktree, ObjectType::Commit, lines.join("\n").as_bytes())
}

/// A linear chain of `count` commits; returned newest-last.
pub fn write_linear_history(worktree: &Path, count: usize) -> Vec<ObjectId> {
    let tree = write_empty_tree(worktree);
    let mut oids: Vec<ObjectId> = Vec::with_capacity(count);

    for i in 0..count {
        let parents: Vec<&ObjectId> = oids.last().into_iter().collect();
        let oid = write_commit(worktree, &tree, &parents, &format!("Add {}", i + 1), i as i64);
        oids.push(oid);
    }

    oids
}
