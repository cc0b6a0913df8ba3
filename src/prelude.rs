pub use crate::cli::{command, run_app};
pub use crate::config::Config;
pub use crate::domain::{
    book::{AddressBook, ContactEvent},
    contact::{self, Contact, ContactPatch},
    search::search_name_or_city,
};
pub use crate::errors::AppError;
pub use crate::store::{self, ContactStore, memory::MemStore, txt::TxtStore};
pub use uuid;
