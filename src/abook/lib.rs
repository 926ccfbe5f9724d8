//! # abook Architecture
//!
//! abook is a console address book: contacts with phones, birthdays,
//! addresses and emails, plus named notes with tags. The library holds all of
//! the behavior; the binary is a small read-eval-print loop on top of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads lines, tokenizes, runs the edit sub-menu           │
//! │  - The ONLY place that knows about stdin/stdout/colors      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the address book and notebook                       │
//! │  - Saves a snapshot after every successful mutation         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Validation, birthday windows, search, note ordering      │
//! │  - Pure functions over in-memory collections                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SnapshotStore trait: load/save whole collections         │
//! │  - FileStore (JSON files), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Every operation returns [`error::Result`]. Errors carry an
//! [`error::ErrorKind`] (usage, lookup, not-set, format, internal) and a
//! message meant for the user. The CLI prints them and keeps going; nothing
//! ends the session except `close`/`exit`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Contact, birthday, search and note logic
//! - [`model`]: `Record`, `AddressBook`, `Note`, `Notebook` and field types
//! - [`validation`]: Phone, email and birthday input checks
//! - [`store`]: Snapshot persistence
//! - [`config`]: Snapshot file names
//! - [`init`]: Data directory resolution and startup
//! - [`logging`]: `tracing` subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
