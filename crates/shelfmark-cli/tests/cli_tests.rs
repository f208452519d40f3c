//! Integration tests for the shelfmark binary
//!
//! Each test builds a scratch library, runs the real binary over it, and
//! checks the resulting tree and report output.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FB2_SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<FictionBook xmlns="http://www.gribuser.ru/xml/fictionbook/2.0">
  <description>
    <title-info>
      <author>
        <first-name>Ivan</first-name>
        <middle-name>Ivanovich</middle-name>
        <last-name>Petrov</last-name>
      </author>
      <book-title>War and Peace (Annotated)</book-title>
    </title-info>
  </description>
  <body><section><p>Some text.</p></section></body>
</FictionBook>"#;

/// Helper to create a CLI command
fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shelfmark"))
}

fn write_fb2(dir: &Path, name: &str) {
    fs::write(dir.join(name), FB2_SAMPLE).unwrap();
}

#[test]
fn test_help_mentions_supported_formats() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("embedded metadata"));
}

#[test]
fn test_renames_fb2_in_place() {
    let library = TempDir::new().unwrap();
    write_fb2(library.path(), "scan0042.fb2");

    cli().arg(library.path()).assert().success();

    assert!(!library.path().join("scan0042.fb2").exists());
    assert!(library
        .path()
        .join("War_And_Peace-Ivan_Petrov.fb2")
        .exists());
}

#[test]
fn test_suggest_mode_leaves_files_untouched() {
    let library = TempDir::new().unwrap();
    write_fb2(library.path(), "scan0042.fb2");

    cli()
        .arg(library.path())
        .arg("--suggest")
        .assert()
        .success()
        .stdout(predicate::str::contains("War_And_Peace-Ivan_Petrov.fb2"));

    assert!(library.path().join("scan0042.fb2").exists());
}

#[test]
fn test_unsupported_files_are_reported_not_fatal() {
    let library = TempDir::new().unwrap();
    write_fb2(library.path(), "book.fb2");
    fs::write(library.path().join("notes.txt"), "not an ebook").unwrap();

    cli()
        .arg(library.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CAN'T RENAME:")
                .and(predicate::str::contains("notes.txt"))
                .and(predicate::str::contains(".txt")),
        );

    // The good file is still processed.
    assert!(library
        .path()
        .join("War_And_Peace-Ivan_Petrov.fb2")
        .exists());
}

#[test]
fn test_subdirectories_are_traversed() {
    let library = TempDir::new().unwrap();
    let shelf = library.path().join("fiction");
    fs::create_dir(&shelf).unwrap();
    write_fb2(&shelf, "scan.fb2");

    cli().arg(library.path()).assert().success();

    assert!(shelf.join("War_And_Peace-Ivan_Petrov.fb2").exists());
}

#[test]
fn test_ignored_and_dot_directories_are_skipped() {
    let library = TempDir::new().unwrap();
    let sorted = library.path().join("to-sort");
    let hidden = library.path().join(".cache");
    fs::create_dir(&sorted).unwrap();
    fs::create_dir(&hidden).unwrap();
    write_fb2(&sorted, "keep.fb2");
    write_fb2(&hidden, "keep.fb2");

    cli()
        .arg(library.path())
        .arg("--ignore")
        .arg("to-sort")
        .assert()
        .success();

    assert!(sorted.join("keep.fb2").exists());
    assert!(hidden.join("keep.fb2").exists());
}

#[test]
fn test_broken_file_reported_with_relative_path() {
    let library = TempDir::new().unwrap();
    let shelf = library.path().join("inbox");
    fs::create_dir(&shelf).unwrap();
    fs::write(shelf.join("corrupt.pdf"), b"not a pdf at all").unwrap();

    cli()
        .arg(library.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("CAN'T RENAME:").and(predicate::str::contains(
            Path::new("inbox").join("corrupt.pdf").display().to_string(),
        )));
}
