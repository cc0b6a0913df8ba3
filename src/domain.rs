pub mod book;
pub mod contact;
pub mod search;

use crate::errors::AppError;
use uuid::Uuid;

pub use book::{AddressBook, ContactEvent};
pub use contact::{Contact, ContactPatch};
