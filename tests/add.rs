use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn add_contact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let book = dir.path().join("addressbook.txt");

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&book)
        .args([
            "add",
            "--name",
            "Alice Smith",
            "--street",
            "12 Evergreen Terrace",
            "--zip",
            "49007",
            "--city",
            "Springfield",
            "--phone",
            "5550100",
            "--email",
            "alice@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added successfully"));

    assert_eq!(
        fs::read_to_string(&book)?,
        "Alice Smith|12 Evergreen Terrace|49007|Springfield|5550100|alice@example.com\n"
    );

    // Confirm newly added contact exist
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&book)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "  1. Alice Smith, 12 Evergreen Terrace, 49007 Springfield, 5550100, alice@example.com",
        ));

    Ok(())
}

#[test]
fn add_rejects_invalid_fields() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let book = dir.path().join("addressbook.txt");

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&book)
        .args([
            "add", "--name", "Bob", "--street", "7 Elm", "--zip", "49008", "--city",
            "Shelbyville", "--phone", "555-0111", "--email", "bob@example.com",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Phone must be numeric."));

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&book)
        .args([
            "add", "--name", "Bob", "--street", "7 Elm", "--zip", "49008", "--city",
            "Shelbyville", "--phone", "5550111", "--email", "bob.example.com",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Email must contain @."));

    // Nothing reached the backing file
    assert!(!book.exists());
    Ok(())
}
