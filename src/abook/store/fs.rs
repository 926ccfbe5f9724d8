use super::SnapshotStore;
use crate::config::AbookConfig;
use crate::error::{AbookError, Result};
use crate::model::{AddressBook, Notebook};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub struct FileStore {
    root: PathBuf,
    contacts_file: String,
    notes_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        let defaults = AbookConfig::default();
        Self {
            root,
            contacts_file: defaults.contacts_file,
            notes_file: defaults.notes_file,
        }
    }

    pub fn with_config(mut self, config: &AbookConfig) -> Self {
        self.contacts_file = config.contacts_file.clone();
        self.notes_file = config.notes_file.clone();
        self
    }

    pub fn contacts_path(&self) -> PathBuf {
        self.root.join(&self.contacts_file)
    }

    pub fn notes_path(&self) -> PathBuf {
        self.root.join(&self.notes_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(AbookError::Io)?;
        }
        Ok(())
    }

    fn load_snapshot<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T> {
        if !path.exists() {
            return Ok(T::default());
        }
        let content = fs::read_to_string(path).map_err(AbookError::Io)?;
        let snapshot = serde_json::from_str(&content).map_err(AbookError::Serialization)?;
        Ok(snapshot)
    }

    fn save_snapshot<T: Serialize>(&self, path: &Path, snapshot: &T) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(snapshot).map_err(AbookError::Serialization)?;
        fs::write(path, content).map_err(AbookError::Io)?;
        Ok(())
    }
}

impl SnapshotStore for FileStore {
    fn load_contacts(&self) -> Result<AddressBook> {
        self.load_snapshot(&self.contacts_path())
    }

    fn save_contacts(&mut self, book: &AddressBook) -> Result<()> {
        self.save_snapshot(&self.contacts_path(), book)
    }

    fn load_notes(&self) -> Result<Notebook> {
        self.load_snapshot(&self.notes_path())
    }

    fn save_notes(&mut self, notes: &Notebook) -> Result<()> {
        self.save_snapshot(&self.notes_path(), notes)
    }
}
