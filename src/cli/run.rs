use std::collections::HashSet;

use crate::{
    cli::listing_format,
    prelude::{
        AddressBook, AppError, Config, Contact, ContactPatch,
        command::{Cli, Commands},
        store::storage_port::{export_contacts_to_csv, import_contacts_from_csv},
    },
    validation::validate_contact,
};
use clap::Parser;
use uuid::Uuid;

pub fn run_app(config: Config) -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = config.with_storage_path(cli.file);

    let mut book = AddressBook::open(&config.storage_path)?;

    match cli.command {
        Commands::Add {
            name,
            street,
            zip,
            city,
            phone,
            email,
        } => {
            let new_contact = Contact::new(name, street, zip, city, phone, email);
            validate_contact(&new_contact)?;

            book.add_contact(new_contact)?;

            println!("Contact added successfully");
            Ok(())
        }

        // Listing contacts
        Commands::List => {
            if book.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (i, c) in book.contact_list().into_iter().enumerate() {
                println!("{}", listing_format(i + 1, c));
            }
            Ok(())
        }

        // Search for a contact
        Commands::Search { term } => {
            let term = term.unwrap_or_default();
            let matches: HashSet<Uuid> = book.search(&term).iter().map(|c| c.id).collect();

            if matches.is_empty() {
                println!("Couldn't find a contact matching {term}");
                return Ok(());
            }

            // Keep the numbering of `list` so results can be passed to --index
            for (i, c) in book.contact_list().into_iter().enumerate() {
                if matches.contains(&c.id) {
                    println!("{}", listing_format(i + 1, c));
                }
            }
            Ok(())
        }

        // Edit Contact
        Commands::Edit {
            index,
            name,
            new_name,
            new_street,
            new_zip,
            new_city,
            new_phone,
            new_email,
        } => {
            let patch = ContactPatch {
                name: new_name,
                street: new_street,
                zip_code: new_zip,
                city: new_city,
                phone: new_phone,
                email: new_email,
            };

            if patch.is_empty() {
                return Err(AppError::Validation(
                    "Nothing to update, provide at least one --new-* field".to_string(),
                ));
            }

            let id = select_contact(&book, index, name.as_deref())?
                .ok_or_else(|| AppError::NotFound("Contact".to_string()))?;

            let mut edited = book
                .get_contact(&id)
                .cloned()
                .ok_or_else(|| AppError::NotFound("Contact".to_string()))?;
            patch.apply(&mut edited);
            validate_contact(&edited)?;

            book.update_contact(&id, &patch)?;
            println!("Contact updated successfully");
            Ok(())
        }

        // Delete Contact
        Commands::Delete { index, name } => match select_contact(&book, index, name.as_deref())? {
            Some(id) => {
                book.delete_contact(&id)?;
                println!("Contact deleted successfully");
                Ok(())
            }
            None => {
                eprintln!("{}", AppError::NotFound("Contact".to_string()));
                Ok(())
            }
        },

        // Import contacts into storage from .csv file
        Commands::Import { src } => {
            let (path, total) = import_contacts_from_csv(&mut book, src.as_deref())?;

            println!("Successfully imported {} contacts from {:?}.", total, path);
            Ok(())
        }

        Commands::Export { des } => {
            let (path, total) = export_contacts_to_csv(&book.contact_list(), des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}

/// Resolves `--index` (1-based listing number) or `--name` to a contact id.
///
/// `Ok(None)` means nothing matched. A name shared by several contacts is
/// refused, since there is no way to tell which one was meant.
fn select_contact(
    book: &AddressBook,
    index: Option<usize>,
    name: Option<&str>,
) -> Result<Option<Uuid>, AppError> {
    match (index, name) {
        (Some(index), _) => Ok(index.checked_sub(1).and_then(|pos| book.id_at(pos))),
        (None, Some(name)) => match book.get_ids_by_name(name) {
            None => Ok(None),
            Some(ids) if ids.len() == 1 => Ok(Some(ids[0])),
            Some(ids) => Err(AppError::Validation(format!(
                "Found {} contacts named {}, please provide --index. See help",
                ids.len(),
                name
            ))),
        },
        (None, None) => Err(AppError::Validation(
            "Provide --index or --name to select a contact".to_string(),
        )),
    }
}
