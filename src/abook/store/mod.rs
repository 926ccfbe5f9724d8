//! # Storage Layer
//!
//! Contacts and notes are persisted as two independent snapshots. The
//! [`SnapshotStore`] trait is the whole contract: load a collection, save a
//! collection. Nothing else in the crate touches the filesystem for data.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON files in the data directory
//!   - `contacts.json`: the address book, an array of records in listing order
//!   - `notes.json`: the notebook, an array of notes in listing order
//!   - A missing file loads as an empty collection
//!
//! - [`memory::InMemoryStore`]: keeps the last saved snapshots in memory, for tests
//!
//! ## Consistency
//!
//! Every save overwrites the whole snapshot. There is no write-ahead log and no
//! atomic rename, so a crash during a write can leave a truncated file.

use crate::error::Result;
use crate::model::{AddressBook, Notebook};

pub mod fs;
pub mod memory;

/// Load/save port for the two persisted collections.
pub trait SnapshotStore {
    /// Load the address book, empty if nothing was saved yet
    fn load_contacts(&self) -> Result<AddressBook>;

    /// Overwrite the address book snapshot
    fn save_contacts(&mut self, book: &AddressBook) -> Result<()>;

    /// Load the notebook, empty if nothing was saved yet
    fn load_notes(&self) -> Result<Notebook>;

    /// Overwrite the notebook snapshot
    fn save_notes(&mut self, notes: &Notebook) -> Result<()>;
}
