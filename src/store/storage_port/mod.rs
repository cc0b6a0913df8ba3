pub mod export_csv;
pub mod import_csv;

use super::*;
pub use export_csv::export_contacts_to_csv;
pub use import_csv::import_contacts_from_csv;

use std::path::PathBuf;

fn has_csv_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
