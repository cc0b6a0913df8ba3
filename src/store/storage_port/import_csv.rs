use super::*;
use crate::domain::AddressBook;
use crate::validation::validate_contact;
use csv::Reader;
use tracing::{info, warn};

pub const IMPORT_PATH: &str = "./import_export/contacts.csv";

/// Appends every row of a `.csv` file (as written by the exporter) to `book`.
///
/// Each row goes through the same checks as a contact added by hand. One bad
/// row rejects the whole file and nothing is written.
pub fn import_contacts_from_csv(
    book: &mut AddressBook,
    src: Option<&Path>,
) -> Result<(PathBuf, u64), AppError> {
    let file_path = src.map_or_else(|| PathBuf::from(IMPORT_PATH), Path::to_path_buf);

    if !file_path.exists() {
        return Err(AppError::NotFound("CSV file".to_string()));
    }

    if !has_csv_extension(&file_path) {
        return Err(AppError::Validation("File not .csv".to_string()));
    }

    let mut reader = Reader::from_path(&file_path)?;

    let contacts = reader
        .deserialize()
        .collect::<Result<Vec<Contact>, csv::Error>>()?;

    for (i, contact) in contacts.iter().enumerate() {
        // Header is line 1
        let row = i + 2;
        validate_contact(contact).map_err(|err| match err {
            AppError::Validation(msg) => {
                warn!(path = %file_path.display(), row, %msg, "import rejected");
                AppError::Validation(format!("Row {row}: {msg}"))
            }
            other => other,
        })?;
    }

    let counter = book.add_contacts(contacts)? as u64;

    info!(path = %file_path.display(), count = counter, "contacts imported");
    Ok((file_path, counter))
}
