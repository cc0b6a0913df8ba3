pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::Contact;

/// One numbered line of `list`/`search` output. `position` is 1-based.
pub fn listing_format(position: usize, contact: &Contact) -> String {
    format!("{position:>3}. {contact}")
}
