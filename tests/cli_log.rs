mod common;

use assert_cmd::Command;
use assert_fs::TempDir;
use common::{set_main, write_linear_history, write_loose};
use lore::artifacts::objects::object_type::ObjectType;
use predicates::prelude::*;
use rstest::rstest;
use std::path::Path;

fn lore_command(worktree: &Path) -> Command {
    let mut cmd = Command::cargo_bin("lore").expect("lore binary builds");
    cmd.current_dir(worktree);
    cmd
}

#[rstest]
fn log_prints_history_in_medium_format(
    #[from(common::repository_dir)] repository_dir: TempDir,
) {
    let oids = write_linear_history(repository_dir.path(), 3);
    set_main(repository_dir.path(), oids.last().unwrap());

    let output = lore_command(repository_dir.path())
        .arg("log")
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let commit_lines: Vec<&str> = stdout
        .lines()
        .filter(|line| line.starts_with("commit "))
        .collect();
    assert_eq!(commit_lines.len(), 3);
    assert_eq!(
        commit_lines[0],
        format!("commit {}", oids[2]),
        "newest commit comes first"
    );
    assert_eq!(commit_lines[2], format!("commit {}", oids[0]));

    assert!(stdout.contains("Author: Test Author <test@example.com>"));
    assert!(stdout.contains("    Add 3"), "message is indented");
}

#[rstest]
fn log_oneline_prints_abbreviated_ids_and_subjects(
    #[from(common::repository_dir)] repository_dir: TempDir,
) {
    let oids = write_linear_history(repository_dir.path(), 2);
    set_main(repository_dir.path(), oids.last().unwrap());

    let output = lore_command(repository_dir.path())
        .arg("log")
        .arg("--oneline")
        .assert()
        .success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("{} Add 2", oids[1].to_short_oid()));
    assert_eq!(lines[1], format!("{} Add 1", oids[0].to_short_oid()));
}

#[test]
fn log_outside_a_repository_is_fatal() {
    let empty = TempDir::new().unwrap();

    lore_command(empty.path())
        .arg("log")
        .assert()
        .code(128)
        .stderr(predicate::str::contains(
            "not a git repository (or any of the parent directories)",
        ));
}

#[rstest]
fn log_on_missing_branch_reports_the_reference(
    #[from(common::repository_dir)] repository_dir: TempDir,
) {
    // HEAD points at refs/heads/main, which was never created.
    lore_command(repository_dir.path())
        .arg("log")
        .assert()
        .code(128)
        .stderr(predicate::str::contains("refs/heads/main"));
}

#[rstest]
fn cat_file_pretty_prints_a_tree(
    #[from(common::repository_dir)] repository_dir: TempDir,
) {
    let blob = write_loose(repository_dir.path(), ObjectType::Blob, b"hi\n");

    let mut payload = Vec::new();
    payload.extend_from_slice(b"100644 greeting.txt\0");
    let hex = blob.as_ref();
    payload.extend(
        (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).unwrap()),
    );
    let tree = write_loose(repository_dir.path(), ObjectType::Tree, &payload);

    lore_command(repository_dir.path())
        .arg("cat-file")
        .arg("-p")
        .arg(tree.as_ref())
        .assert()
        .success()
        .stdout(format!("100644 blob {blob}\tgreeting.txt\n"));
}

#[rstest]
fn cat_file_prints_blob_content(
    #[from(common::repository_dir)] repository_dir: TempDir,
) {
    let oid = write_loose(
        repository_dir.path(),
        ObjectType::Blob,
        b"hello from the store\n",
    );

    lore_command(repository_dir.path())
        .arg("cat-file")
        .arg("-p")
        .arg(oid.as_ref())
        .assert()
        .success()
        .stdout("hello from the store\n");
}
