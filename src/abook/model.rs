//! Core data types: contact fields, [`Record`], [`AddressBook`], [`Note`] and [`Notebook`].
//!
//! Both collections keep their entries in insertion order and look them up by
//! name with a linear scan. Replacing an existing entry keeps its position, so
//! listings stay stable across edits.

use crate::error::{AbookError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The only accepted birthday format, for both input and display.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(pub String);

/// A birthday as typed by the user (`DD.MM.YYYY`).
///
/// The raw string is what gets stored and displayed; [`Birthday::date`] gives
/// the calendar view and returns `None` for anything that does not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Birthday(pub String);

impl Birthday {
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, DATE_FORMAT).ok()
    }

    /// This birthday's month/day placed in `year`.
    ///
    /// 29 February falls back to 28 February in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        let date = self.date()?;
        NaiveDate::from_ymd_opt(year, date.month(), date.day()).or_else(|| {
            if date.month() == 2 && date.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }
}

macro_rules! display_inner {
    ($($ty:ident),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        })*
    };
}

display_inner!(Phone, Email, Address, Birthday);

/// One contact. The name is the primary key inside an [`AddressBook`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: String,
    #[serde(default)]
    phone: Option<Phone>,
    #[serde(default)]
    birthday: Option<Birthday>,
    #[serde(default)]
    address: Option<Address>,
    #[serde(default)]
    email: Option<Email>,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: None,
            birthday: None,
            address: None,
            email: None,
        }
    }

    /// The record's key. Fixed at creation so an [`AddressBook`] never holds
    /// two records under one name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_phone(&mut self, phone: Phone) {
        self.phone = Some(phone);
    }

    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn set_email(&mut self, email: Email) {
        self.email = Some(email);
    }

    pub fn phone(&self) -> Result<&Phone> {
        self.phone
            .as_ref()
            .ok_or_else(|| AbookError::not_set(&self.name, "phone"))
    }

    pub fn birthday(&self) -> Result<&Birthday> {
        self.birthday
            .as_ref()
            .ok_or_else(|| AbookError::not_set(&self.name, "birthday"))
    }

    pub fn address(&self) -> Result<&Address> {
        self.address
            .as_ref()
            .ok_or_else(|| AbookError::not_set(&self.name, "address"))
    }

    pub fn email(&self) -> Result<&Email> {
        self.email
            .as_ref()
            .ok_or_else(|| AbookError::not_set(&self.name, "email"))
    }

    pub fn has_birthday(&self) -> bool {
        self.birthday.is_some()
    }

    /// One-line summary used by `all` and `delete`.
    pub fn render(&self) -> String {
        let birthday = match &self.birthday {
            Some(b) => format!(" birthday: {},", b),
            None => String::new(),
        };
        let phone = self.phone.as_ref().map_or("-", |p| p.0.as_str());
        format!("Contact name: {},{} phone: {}", self.name, birthday, phone)
    }

    /// Text that `find` matches against: name, birthday, phone and address.
    /// Email is not searchable.
    pub fn search_text(&self) -> String {
        let mut parts = vec![format!("Contact name: {}", self.name)];
        if let Some(b) = &self.birthday {
            parts.push(format!("birthday: {}", b));
        }
        if let Some(p) = &self.phone {
            parts.push(format!("phone: {}", p));
        }
        if let Some(a) = &self.address {
            parts.push(format!("address: {}", a));
        }
        parts.join(", ")
    }
}

/// All contacts, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name == name)
    }

    /// Like [`AddressBook::get`], but a missing name is a lookup error.
    pub fn record(&self, name: &str) -> Result<&Record> {
        self.get(name)
            .ok_or_else(|| AbookError::NotFound(name.to_string()))
    }

    pub fn record_mut(&mut self, name: &str) -> Result<&mut Record> {
        self.get_mut(name)
            .ok_or_else(|| AbookError::NotFound(name.to_string()))
    }

    /// Inserts `record`, replacing (in place) any record with the same name.
    pub fn upsert(&mut self, record: Record) {
        match self.records.iter().position(|r| r.name == record.name) {
            Some(pos) => self.records[pos] = record,
            None => self.records.push(record),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Record> {
        let pos = self.records.iter().position(|r| r.name == name)?;
        Some(self.records.remove(pos))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    name: String,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Note {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            tags: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn render(&self) -> String {
        format!(
            "Note: {}, tags: {}, text: {}",
            self.name,
            self.tags.join(" "),
            self.text
        )
    }
}

/// All notes, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notebook {
    notes: Vec<Note>,
}

impl Notebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Note> {
        self.notes.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Note> {
        self.notes.iter_mut().find(|n| n.name == name)
    }

    pub fn upsert(&mut self, note: Note) {
        match self.notes.iter().position(|n| n.name == note.name) {
            Some(pos) => self.notes[pos] = note,
            None => self.notes.push(note),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Note> {
        let pos = self.notes.iter().position(|n| n.name == name)?;
        Some(self.notes.remove(pos))
    }
}
