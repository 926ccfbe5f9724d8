use super::SnapshotStore;
use crate::error::Result;
use crate::model::{AddressBook, Notebook};

/// In-memory storage for testing.
/// Does NOT persist data; it only remembers the last snapshot of each kind.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: AddressBook,
    notes: Notebook,
    contact_saves: usize,
    note_saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(mut self, contacts: AddressBook) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_notes(mut self, notes: Notebook) -> Self {
        self.notes = notes;
        self
    }

    /// How many times the address book has been saved.
    pub fn contact_saves(&self) -> usize {
        self.contact_saves
    }

    /// How many times the notebook has been saved.
    pub fn note_saves(&self) -> usize {
        self.note_saves
    }
}

impl SnapshotStore for InMemoryStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        Ok(self.contacts.clone())
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        self.contacts = book.clone();
        self.contact_saves += 1;
        Ok(())
    }

    fn load_notes(&self) -> Result<Notebook> {
        Ok(self.notes.clone())
    }

    fn save_notes(&mut self, notes: &Notebook) -> Result<()> {
        self.notes = notes.clone();
        self.note_saves += 1;
        Ok(())
    }
}
