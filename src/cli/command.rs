use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "addressbook", version, about = "Personal address book")]
pub struct Cli {
    /// Backing file, one contact per line
    #[arg(long, global = true, env = "ADDRESSBOOK_PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Street and house number
        #[arg(long)]
        street: String,

        /// Zip code (digits only)
        #[arg(long)]
        zip: String,

        /// City
        #[arg(long)]
        city: String,

        /// Phone number (digits only)
        #[arg(long)]
        phone: String,

        /// Email address
        #[arg(long)]
        email: String,
    },
    /// List contacts in the order they were added
    List,
    /// Search contacts whose name or city contains TERM, ignoring case
    Search {
        /// Text to look for. Empty lists every contact
        term: Option<String>,
    },
    /// Edit an existing contact
    /// Select it by its listing number or by its exact name,
    /// followed by as many fields as you wish to update
    Edit {
        /// Listing number as shown by `list`
        #[arg(long, conflicts_with = "name")]
        index: Option<usize>,

        /// Contact current name
        #[arg(long)]
        name: Option<String>,

        /// Update name
        #[arg(long)]
        new_name: Option<String>,

        /// Update street
        #[arg(long)]
        new_street: Option<String>,

        /// Update zip code
        #[arg(long)]
        new_zip: Option<String>,

        /// Update city
        #[arg(long)]
        new_city: Option<String>,

        /// Update phone number
        #[arg(long)]
        new_phone: Option<String>,

        /// Update email address
        #[arg(long)]
        new_email: Option<String>,
    },
    /// Delete a contact by listing number or by name
    Delete {
        /// Listing number as shown by `list`
        #[arg(long, conflicts_with = "name")]
        index: Option<usize>,

        /// Name of contact to delete
        #[arg(long)]
        name: Option<String>,
    },

    /// Import contacts from .csv file
    Import {
        /// File path to the source .csv file
        #[arg(short, long)]
        src: Option<PathBuf>,
    },

    /// Export contacts to a .csv file
    Export {
        /// File path to the destination location for export file
        #[arg(short, long)]
        des: Option<PathBuf>,
    },
}
