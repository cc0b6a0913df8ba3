use super::*;

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing::warn;

pub const DEFAULT_STORAGE_PATH: &str = "addressbook.txt";

/// One contact per line, fields separated by `|`.
pub struct TxtStore {
    pub medium: String,
    pub path: PathBuf,
}

impl TxtStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            medium: "txt".to_string(),
            path: path.into(),
        }
    }
}

impl Default for TxtStore {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_PATH)
    }
}

impl ContactStore for TxtStore {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(&self.path)? {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        deserialize_contacts_from_txt_buffer(reader)
    }

    fn save(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let data = serialize_contacts(contacts);
        file.write_all(data.as_bytes())?;
        file.flush()?;

        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}

pub fn serialize_contacts(contacts: &[Contact]) -> String {
    let mut data = String::new();

    for contact in contacts {
        data.push_str(&contact.to_line());
        data.push('\n');
    }
    data
}

/// Decodes one contact per line. Blank lines are skipped and so is any line
/// that does not decode; only I/O errors abort the read.
pub fn deserialize_contacts_from_txt_buffer<R: BufRead>(
    buffer: R,
) -> Result<Vec<Contact>, AppError> {
    let mut contacts = Vec::new();

    for (idx, line) in buffer.lines().enumerate() {
        let line = line?;

        if line.trim().is_empty() {
            continue;
        }

        match Contact::from_line(&line) {
            Ok(contact) => contacts.push(contact),
            Err(e) => {
                warn!(line = idx + 1, error = %e, "skipping malformed contact record");
            }
        }
    }

    Ok(contacts)
}
