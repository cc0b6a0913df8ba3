pub mod memory;
pub mod storage_port;
pub mod txt;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use std::fs;
use std::path::Path;

/// A medium the address book can be loaded from and rewritten to.
pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    /// Replaces everything held by the medium with `contacts`, in order.
    fn save(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
