//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every abook operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns state**: the in-memory [`AddressBook`] and [`Notebook`], loaded once
//!   from the [`SnapshotStore`] when the API is opened
//! - **Dispatches** to the matching command function
//! - **Normalizes inputs** (joins free-text words, parses day offsets)
//! - **Persists**: after every successful mutating command, the affected
//!   collection is saved in full. A failed command saves nothing.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **Terminal I/O**: no stdout, stderr or prompts
//! - **Clock reads**: callers pass `today` so date queries stay deterministic
//!
//! ## Generic Over SnapshotStore
//!
//! `AbookApi<S: SnapshotStore>` runs on `FileStore` in production and on
//! `InMemoryStore` in tests.

use crate::commands::{self, birthdays, contacts, helpers::join_words, notes, search, CmdResult};
use crate::error::Result;
use crate::model::{AddressBook, Notebook, Record};
use crate::store::SnapshotStore;
use chrono::NaiveDate;

pub use commands::{CmdMessage, MessageLevel};

pub struct AbookApi<S: SnapshotStore> {
    store: S,
    contacts: AddressBook,
    notes: Notebook,
}

impl<S: SnapshotStore> AbookApi<S> {
    /// Restores both collections from `store`. Missing snapshots start empty.
    pub fn open(store: S) -> Result<Self> {
        let contacts = store.load_contacts()?;
        let notes = store.load_notes()?;
        tracing::debug!(
            contacts = contacts.len(),
            notes = notes.len(),
            "loaded snapshots"
        );
        Ok(Self {
            store,
            contacts,
            notes,
        })
    }

    pub fn contacts(&self) -> &AddressBook {
        &self.contacts
    }

    pub fn notes(&self) -> &Notebook {
        &self.notes
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn record(&self, name: &str) -> Result<&Record> {
        self.contacts.record(name)
    }

    /// Writes the whole address book after a successful command.
    ///
    /// The in-memory change is not rolled back when the write fails: the
    /// caller sees the store error, and the next successful save persists the
    /// change along with whatever comes after it.
    fn save_contacts(&mut self, result: CmdResult) -> Result<CmdResult> {
        self.store.save_contacts(&self.contacts)?;
        let affected: Vec<&str> = result.affected_records.iter().map(|r| r.name()).collect();
        tracing::debug!(
            contacts = self.contacts.len(),
            affected = ?affected,
            "saved contacts snapshot"
        );
        Ok(result)
    }

    /// Writes the whole notebook. Same failure behavior as `save_contacts`.
    fn save_notes(&mut self, result: CmdResult) -> Result<CmdResult> {
        self.store.save_notes(&self.notes)?;
        tracing::debug!(notes = self.notes.len(), "saved notes snapshot");
        Ok(result)
    }

    // --- Contacts ---

    pub fn add_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = contacts::add_phone(&mut self.contacts, name, phone)?;
        self.save_contacts(result)
    }

    pub fn change_phone(&mut self, name: &str, phone: &str) -> Result<CmdResult> {
        let result = contacts::change_phone(&mut self.contacts, name, phone)?;
        self.save_contacts(result)
    }

    pub fn get_phone(&self, name: &str) -> Result<CmdResult> {
        contacts::get_phone(&self.contacts, name)
    }

    pub fn add_birthday(&mut self, name: &str, date: &str) -> Result<CmdResult> {
        let result = contacts::add_birthday(&mut self.contacts, name, date)?;
        self.save_contacts(result)
    }

    pub fn show_birthday(&self, name: &str) -> Result<CmdResult> {
        contacts::show_birthday(&self.contacts, name)
    }

    pub fn add_address<I: AsRef<str>>(&mut self, name: &str, words: &[I]) -> Result<CmdResult> {
        let text = join_words(words)?;
        let result = contacts::add_address(&mut self.contacts, name, &text)?;
        self.save_contacts(result)
    }

    pub fn change_address<I: AsRef<str>>(
        &mut self,
        name: &str,
        words: &[I],
    ) -> Result<CmdResult> {
        let text = join_words(words)?;
        let result = contacts::change_address(&mut self.contacts, name, &text)?;
        self.save_contacts(result)
    }

    pub fn show_address(&self, name: &str) -> Result<CmdResult> {
        contacts::show_address(&self.contacts, name)
    }

    pub fn add_email(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        let result = contacts::add_email(&mut self.contacts, name, email)?;
        self.save_contacts(result)
    }

    pub fn change_email(&mut self, name: &str, email: &str) -> Result<CmdResult> {
        let result = contacts::change_email(&mut self.contacts, name, email)?;
        self.save_contacts(result)
    }

    pub fn show_email(&self, name: &str) -> Result<CmdResult> {
        contacts::show_email(&self.contacts, name)
    }

    pub fn delete_contact(&mut self, name: &str) -> Result<CmdResult> {
        let result = contacts::delete(&mut self.contacts, name)?;
        self.save_contacts(result)
    }

    pub fn list_contacts(&self) -> Result<CmdResult> {
        contacts::list_all(&self.contacts)
    }

    pub fn find_contacts(&self, query: &str) -> Result<CmdResult> {
        search::run(&self.contacts, query)
    }

    // --- Birthdays ---

    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Result<CmdResult> {
        birthdays::upcoming_within_week(&self.contacts, today)
    }

    pub fn birthdays_in(&self, today: NaiveDate, days: &str) -> Result<CmdResult> {
        let days = birthdays::parse_offset(days)?;
        birthdays::upcoming_on_offset(&self.contacts, today, days)
    }

    // --- Notes ---

    pub fn add_note<I: AsRef<str>>(&mut self, name: &str, words: &[I]) -> Result<CmdResult> {
        let text = join_words(words)?;
        let result = notes::run_add(&mut self.notes, name, &text)?;
        self.save_notes(result)
    }

    pub fn add_tags<I: AsRef<str>>(&mut self, name: &str, tags: &[I]) -> Result<CmdResult> {
        let tag_text = join_words(tags)?;
        let result = notes::run_add_tags(&mut self.notes, name, &tag_text)?;
        self.save_notes(result)
    }

    pub fn edit_note<I: AsRef<str>>(&mut self, name: &str, words: &[I]) -> Result<CmdResult> {
        let text = join_words(words)?;
        let result = notes::run_edit(&mut self.notes, name, &text)?;
        self.save_notes(result)
    }

    pub fn delete_note(&mut self, name: &str) -> Result<CmdResult> {
        let result = notes::run_delete(&mut self.notes, name)?;
        self.save_notes(result)
    }

    pub fn find_note(&self, name: &str) -> Result<CmdResult> {
        notes::run_find(&self.notes, name)
    }

    pub fn find_notes_by_tag(&self, tag: &str) -> Result<CmdResult> {
        notes::run_find_by_tag(&self.notes, tag)
    }

    pub fn sorted_notes(&self) -> Result<CmdResult> {
        notes::run_sort(&self.notes)
    }
}
