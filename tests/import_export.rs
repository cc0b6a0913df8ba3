use assert_cmd::Command;
use predicates::str::contains;
use std::{fs, path::Path};
use tempfile::tempdir;

#[test]
fn export_import() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let book = dir.path().join("addressbook.txt");

    // Add a contact
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&book)
        .args([
            "add", "--name", "Alice", "--street", "1 Road", "--zip", "100", "--city",
            "Springfield", "--phone", "08031234567", "--email", "alice@example.com",
        ])
        .assert()
        .success()
        .stdout(contains("Contact added successfully"));

    // Export to a temporary CSV file
    let out_path = dir.path().join("out.csv");

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&book)
        .arg("export")
        .arg("--des")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(contains("Successfully exported 1 contacts"));

    // Ensure the exported file exists and has content
    assert!(Path::new(&out_path).exists());
    let exported = fs::read_to_string(&out_path)?;
    assert!(exported.contains("Alice"));

    // Delete the contact by name
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&book)
        .args(["delete", "--name", "Alice"])
        .assert()
        .success()
        .stdout(contains("Contact deleted successfully"));

    assert_eq!(fs::read_to_string(&book)?, "");

    // Import from the exported CSV (importing back should succeed)
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&book)
        .arg("import")
        .arg("--src")
        .arg(&out_path)
        .assert()
        .success()
        .stdout(contains("Successfully imported 1 contacts"));

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&book)
        .arg("list")
        .assert()
        .success()
        .stdout(contains(
            "  1. Alice, 1 Road, 100 Springfield, 08031234567, alice@example.com",
        ));

    Ok(())
}

#[test]
fn import_missing_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(dir.path().join("addressbook.txt"))
        .arg("import")
        .arg("--src")
        .arg(dir.path().join("missing.csv"))
        .assert()
        .failure()
        .stderr(contains("CSV file Not found"));

    Ok(())
}

#[test]
fn import_with_invalid_row_writes_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let book = dir.path().join("addressbook.txt");
    let src = dir.path().join("contacts.csv");
    fs::write(
        &src,
        "name,street,zip_code,city,phone,email\n\"Ann\nLee\",1 Road,100,Springfield,555,a@x.com\n",
    )?;

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .arg("--file")
        .arg(&book)
        .arg("import")
        .arg("--src")
        .arg(&src)
        .assert()
        .failure()
        .stderr(contains("Row 2: Fields must not contain line breaks."));

    assert!(!book.exists());
    Ok(())
}
