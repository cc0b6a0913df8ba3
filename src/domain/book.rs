use std::path::PathBuf;

use super::*;
use crate::store::{ContactStore, txt::TxtStore};
use super::search::search_name_or_city;
use tracing::{debug, info};

/// Change notification delivered to subscribers after a mutation was persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactEvent {
    Added(Uuid),
    Updated(Uuid),
    Deleted(Uuid),
    Reloaded,
}

type Listener = Box<dyn FnMut(&ContactEvent)>;

/// The in-memory contact list, kept in sync with its backing store.
///
/// Insertion order is the only order: nothing is ever sorted. Every mutation
/// rewrites the whole backing medium before returning, so after a successful
/// call the medium always holds exactly what `contact_list()` shows.
pub struct AddressBook {
    mem: Vec<Contact>,
    storage: Box<dyn ContactStore>,
    listeners: Vec<Listener>,
}

impl AddressBook {
    /// Creates the book and loads whatever the storage already holds.
    pub fn new(storage: Box<dyn ContactStore>) -> Result<Self, AppError> {
        let mut book = Self {
            mem: Vec::new(),
            storage,
            listeners: Vec::new(),
        };
        book.load()?;
        Ok(book)
    }

    /// Opens the pipe-delimited text file at `path`. A missing file is an empty book.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, AppError> {
        Self::new(Box::new(TxtStore::new(path)))
    }

    pub fn contact_list(&self) -> Vec<&Contact> {
        self.mem.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    pub fn medium(&self) -> &str {
        self.storage.get_medium()
    }

    pub fn get_contact(&self, id: &Uuid) -> Option<&Contact> {
        self.mem.iter().find(|c| &c.id == id)
    }

    /// Id of the contact at zero-based `position` in listing order.
    pub fn id_at(&self, position: usize) -> Option<Uuid> {
        self.mem.get(position).map(|c| c.id)
    }

    pub fn get_ids_by_name(&self, name: &str) -> Option<Vec<Uuid>> {
        let name = name.trim().to_lowercase();
        let ids: Vec<Uuid> = self
            .mem
            .iter()
            .filter(|c| c.name.trim().to_lowercase() == name)
            .map(|c| c.id)
            .collect();

        if ids.is_empty() { None } else { Some(ids) }
    }

    pub fn search(&self, term: &str) -> Vec<&Contact> {
        search_name_or_city(term, &self.mem)
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ContactEvent) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Appends `contact` under a fresh identity and returns that identity.
    pub fn add_contact(&mut self, mut contact: Contact) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        contact.id = id;
        self.mem.push(contact);

        if let Err(err) = self.persist() {
            self.mem.pop();
            return Err(err);
        }

        info!(%id, "contact added");
        self.emit(ContactEvent::Added(id));
        Ok(id)
    }

    /// Appends every contact and rewrites the storage once.
    pub fn add_contacts<I>(&mut self, contacts: I) -> Result<usize, AppError>
    where
        I: IntoIterator<Item = Contact>,
    {
        let before = self.mem.len();
        self.mem.extend(contacts.into_iter().map(|mut contact| {
            contact.id = Uuid::new_v4();
            contact
        }));
        let added = self.mem.len() - before;

        if added == 0 {
            return Ok(0);
        }

        if let Err(err) = self.persist() {
            self.mem.truncate(before);
            return Err(err);
        }
        info!(count = added, "contacts added");

        let ids: Vec<Uuid> = self.mem[before..].iter().map(|c| c.id).collect();
        for id in ids {
            self.emit(ContactEvent::Added(id));
        }
        Ok(added)
    }

    /// Removes the contact with this identity. An unknown id leaves the book untouched.
    pub fn delete_contact(&mut self, id: &Uuid) -> Result<Option<Contact>, AppError> {
        let Some(position) = self.mem.iter().position(|c| &c.id == id) else {
            debug!(%id, "delete ignored, contact not in book");
            return Ok(None);
        };

        let removed = self.mem.remove(position);
        if let Err(err) = self.persist() {
            self.mem.insert(position, removed);
            return Err(err);
        }

        info!(%id, "contact deleted");
        self.emit(ContactEvent::Deleted(*id));
        Ok(Some(removed))
    }

    pub fn update_contact(&mut self, id: &Uuid, patch: &ContactPatch) -> Result<(), AppError> {
        let position = self
            .mem
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| AppError::NotFound("Contact".to_string()))?;

        let previous = self.mem[position].clone();
        patch.apply(&mut self.mem[position]);
        if let Err(err) = self.persist() {
            self.mem[position] = previous;
            return Err(err);
        }

        info!(%id, "contact updated");
        self.emit(ContactEvent::Updated(*id));
        Ok(())
    }

    /// Rewrites the whole storage from the in-memory list.
    ///
    /// The mutating methods call this last and undo their in-memory change
    /// when it fails.
    pub fn persist(&self) -> Result<(), AppError> {
        debug!(
            medium = self.storage.get_medium(),
            count = self.mem.len(),
            "persisting contacts"
        );
        self.storage.save(&self.mem)
    }

    /// Discards the in-memory list and reads it again from storage.
    pub fn reload(&mut self) -> Result<(), AppError> {
        self.load()?;
        self.emit(ContactEvent::Reloaded);
        Ok(())
    }

    fn load(&mut self) -> Result<(), AppError> {
        self.mem = self.storage.load()?;
        debug!(medium = self.storage.get_medium(), count = self.mem.len(), "contacts loaded");
        Ok(())
    }

    fn emit(&mut self, event: ContactEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
