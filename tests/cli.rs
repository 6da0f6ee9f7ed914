//! End-to-end tests for the `bookbot` binary

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

fn bookbot() -> Command {
    Command::cargo_bin("bookbot").unwrap()
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn reports_small_book() {
    let dir = tempfile::tempdir().unwrap();
    let book = dir.path().join("tiny.txt");
    fs::write(&book, "Bb. Aa!").unwrap();

    let output = bookbot().arg(&book).assert().success().get_output().clone();

    let expected = format!(
        "============ BOOKBOT ============\n\
         Analyzing book found at {}...\n\
         ------------------------------\n\
         ----------- Word Count ----------\n\
         Found 2 total words\n\
         ------------------------------\n\
         --------- Character Count -------\n\
         b: 2\n\
         a: 2\n\
         ============= END ===============\n",
        book.display()
    );
    assert_eq!(stdout_of(&output), expected);
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let book = dir.path().join("book.txt");
    fs::write(
        &book,
        "It is a truth universally acknowledged, that a single man\n\
         in possession of a good fortune, must be in want of a wife. 1813\n",
    )
    .unwrap();

    let first = bookbot().arg(&book).assert().success().get_output().clone();
    let second = bookbot().arg(&book).assert().success().get_output().clone();
    assert_eq!(first.stdout, second.stdout);
    assert!(!stdout_of(&first).contains("1: "));
}

#[test]
fn missing_book_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let book = dir.path().join("missing.txt");

    let output = bookbot()
        .env_remove("RUST_LOG")
        .arg(&book)
        .assert()
        .code(1)
        .get_output()
        .clone();
    let stdout = stdout_of(&output);

    assert!(stdout.starts_with("============ BOOKBOT ============\n"));
    assert!(stdout.contains(&format!(
        "Error: The book at '{}' was not found.",
        book.display()
    )));
    assert!(stdout.ends_with("============= END ===============\n"));
    assert!(!stdout.contains("Word Count"));
    assert!(!stdout.contains("Character Count"));
    assert!(output.stderr.is_empty(), "unexpected stderr output");
}

#[test]
fn dash_prefixed_book_is_read_as_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("-notes.txt"), "Zz z").unwrap();

    let output = bookbot()
        .current_dir(dir.path())
        .arg("-notes.txt")
        .assert()
        .success()
        .get_output()
        .clone();
    let stdout = stdout_of(&output);

    assert!(stdout.contains("Analyzing book found at -notes.txt...\n"));
    assert!(stdout.contains("Found 2 total words\n"));
    assert!(stdout.contains("z: 3\n"));
}

#[test]
fn flag_like_arguments_are_book_paths() {
    let dir = tempfile::tempdir().unwrap();

    for arg in ["--help", "-h", "--version", "-V"] {
        let output = bookbot()
            .current_dir(dir.path())
            .arg(arg)
            .assert()
            .code(1)
            .get_output()
            .clone();
        let stdout = stdout_of(&output);

        assert!(
            stdout.contains(&format!("Error: The book at '{arg}' was not found.")),
            "{arg}: {stdout}"
        );
        assert!(!stdout.starts_with("Usage: "));
    }
}

#[test]
fn unreadable_book_reports_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let book = dir.path().join("binary.txt");
    fs::write(&book, [0xff, 0xfe, 0xfd]).unwrap();

    let output = bookbot().arg(&book).assert().code(1).get_output().clone();
    let stdout = stdout_of(&output);

    assert!(stdout.contains("An error occurred while reading the file: "));
    assert!(!stdout.contains("was not found"));
    assert!(!stdout.contains("Word Count"));
}

#[test]
fn no_arguments_prints_usage() {
    let output = bookbot().assert().code(1).get_output().clone();
    let stdout = stdout_of(&output);

    assert!(stdout.starts_with("Usage: "));
    assert!(stdout.ends_with(" <path_to_book>\n"));
    assert!(!stdout.contains("BOOKBOT"));
}

#[test]
fn two_arguments_prints_usage() {
    let output = bookbot()
        .args([Path::new("a.txt"), Path::new("b.txt")])
        .assert()
        .code(1)
        .get_output()
        .clone();
    let stdout = stdout_of(&output);

    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("Usage: "));
    assert!(!stdout.contains("BOOKBOT"));
}
