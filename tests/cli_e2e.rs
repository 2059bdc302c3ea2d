#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A taguh invocation isolated to `temp`: data lands in `temp/data`, and the
/// user's real config directory is never consulted.
fn taguh(temp: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("taguh"));
    cmd.current_dir(temp)
        .env("TAGUH_CONFIG_DIR", temp.join("config"))
        .env_remove("TAGUH_DATA_DIR")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn first_run_creates_data_documents() {
    let temp = TempDir::new().unwrap();

    taguh(temp.path())
        .args(["list", "tags"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Starred: "))
        .stdout(predicate::str::contains("Important: "))
        .stdout(predicate::str::contains("Archived: "));

    let tags = fs::read_to_string(temp.path().join("data/tags.json")).unwrap();
    assert!(tags.contains("\t\"Starred\": {"));
    assert!(temp.path().join("data/taguh.json").exists());
}

#[test]
fn tag_a_file_and_find_it() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("report.txt"), "q3 numbers").unwrap();

    taguh(temp.path())
        .args(["add", "-t", "work", "Files", "for", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created tag 'work'"));

    taguh(temp.path())
        .args(["add", "report.txt", "Starred", "WORK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tagged"));

    taguh(temp.path())
        .args(["find", "tag", "WORK"])
        .assert()
        .success()
        .stdout(predicate::str::contains("report.txt"))
        .stdout(predicate::str::contains("Tags: Starred,WORK"));

    taguh(temp.path())
        .args(["find", "file", "report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("File path: "))
        .stdout(predicate::str::contains("Found").not());

    let files = fs::read_to_string(temp.path().join("data/taguh.json")).unwrap();
    assert!(files.contains("report.txt\": {"));
    assert!(files.contains("\"tags\": \"Starred,WORK\""));
}

#[test]
fn readding_is_reported_not_rewritten() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "a").unwrap();

    taguh(temp.path())
        .args(["add", "a.txt", "Starred"])
        .assert()
        .success();
    let before = fs::read_to_string(temp.path().join("data/taguh.json")).unwrap();

    taguh(temp.path())
        .args(["add", "a.txt", "starred"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is already added to taguh"));
    let after = fs::read_to_string(temp.path().join("data/taguh.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn multiple_matches_are_counted_and_sorted() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(
        temp.path().join("data/taguh.json"),
        "{\n\t\"/x/older.txt\": {\"tags\": \"Starred\", \"created_on\": \"2023-01-01 00:00:00\"},\n\t\"/x/newer.txt\": {\"tags\": \"Starred\", \"created_on\": \"2024-01-01 00:00:00\"}\n}",
    )
    .unwrap();

    let output = taguh(temp.path())
        .args(["find", "tag", "Starred", "newest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 matching files"))
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let newer = text.find("/x/newer.txt").unwrap();
    let older = text.find("/x/older.txt").unwrap();
    assert!(newer < older);
}

#[test]
fn user_errors_exit_with_one() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "a").unwrap();

    taguh(temp.path())
        .args(["add"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("For usage : taguh add -h"));

    taguh(temp.path())
        .args(["add", "missing.txt", "Starred"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("file does not exist"));

    taguh(temp.path())
        .args(["add", "a.txt", "music"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("music"));

    taguh(temp.path())
        .args(["find", "tag", "Starred", "latest"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("option latest does not exist"));

    taguh(temp.path())
        .args(["find", "file", "nothing"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No such file found in taguh"));

    taguh(temp.path())
        .args(["list", "folders"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("folders"));

    taguh(temp.path())
        .args(["add", "-t", "x,y", "broken"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must not contain a comma"));
}

#[test]
fn comma_joined_tags_are_accepted() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), "a").unwrap();

    taguh(temp.path())
        .args(["add", "a.txt", "Starred,Important"])
        .assert()
        .success();

    taguh(temp.path())
        .args(["find", "tag", "important", "--exact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tags: Starred,Important"));
}

#[test]
fn corrupt_document_is_fatal() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("data")).unwrap();
    fs::write(temp.path().join("data/taguh.json"), "{ broken").unwrap();

    taguh(temp.path())
        .args(["list", "files"])
        .assert()
        .code(255)
        .stderr(predicate::str::contains("Serialization error"));
}

#[test]
fn data_dir_flag_overrides_default() {
    let temp = TempDir::new().unwrap();
    let custom = temp.path().join("elsewhere");

    taguh(temp.path())
        .args(["list", "files", "--data-dir"])
        .arg(&custom)
        .assert()
        .success()
        .stdout(predicate::str::contains("The list of files added to taguh"));

    assert!(custom.join("tags.json").exists());
    assert!(!temp.path().join("data").exists());
}
