use super::*;
use csv::Writer;
use tracing::info;

pub const EXPORT_PATH: &str = "./import_export/exported.csv";

/// Writes `contacts` to a `.csv` file with a header row.
///
/// A directory destination receives `exported.csv`. Returns the file written
/// and the number of rows.
pub fn export_contacts_to_csv(
    contacts: &[&Contact],
    des: Option<&Path>,
) -> Result<(PathBuf, u64), AppError> {
    let mut file_path = des.map_or_else(|| PathBuf::from(EXPORT_PATH), Path::to_path_buf);

    if file_path.is_dir() {
        file_path = file_path.join("exported.csv");
    } else if !has_csv_extension(&file_path) {
        return Err(AppError::Validation(
            "Export file must be a .csv file".to_string(),
        ));
    }

    create_file_parent(&file_path)?;

    let mut writer = Writer::from_path(&file_path)?;

    let mut counter: u64 = 0;
    for &contact in contacts {
        writer.serialize(contact)?;
        counter += 1;
    }

    writer.flush()?;

    info!(path = %file_path.display(), count = counter, "contacts exported");
    Ok((file_path, counter))
}
