//! Note commands.
//!
//! The plain functions (`append_tags`, `edit_text`, `remove`, `render`,
//! `tagged`, `sorted`) are the note store operations. The `run_*` functions
//! wrap them into [`CmdResult`]s and turn "not there" into
//! [`AbookError::NotFound`].
//!
//! Tags are an ordered list that is only ever appended to. Adding a tag twice
//! stores it twice.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AbookError, Result};
use crate::model::{Note, Notebook};

pub const EMPTY_NOTEBOOK: &str = "Notes are empty, nothing to show";

/// Splits `tag_text` on single spaces and appends every token to the note's tags.
pub fn append_tags(notes: &mut Notebook, name: &str, tag_text: &str) -> Result<Vec<String>> {
    let note = notes
        .get_mut(name)
        .ok_or_else(|| AbookError::NotFound(name.to_string()))?;
    let added: Vec<String> = tag_text.split(' ').map(str::to_string).collect();
    note.tags.extend(added.iter().cloned());
    Ok(added)
}

/// Replaces a note's text. Returns whether the note existed.
pub fn edit_text(notes: &mut Notebook, name: &str, text: &str) -> bool {
    match notes.get_mut(name) {
        Some(note) => {
            note.text = text.to_string();
            true
        }
        None => false,
    }
}

/// Removes a note. Returns whether it existed.
pub fn remove(notes: &mut Notebook, name: &str) -> bool {
    notes.remove(name).is_some()
}

pub fn render(notes: &Notebook, name: &str) -> Option<String> {
    notes.get(name).map(Note::render)
}

/// Notes carrying exactly `tag`, in store order.
pub fn tagged<'a>(notes: &'a Notebook, tag: &str) -> Vec<&'a Note> {
    notes.iter().filter(|n| n.has_tag(tag)).collect()
}

/// All notes, most tags first, ties by name.
pub fn sorted(notes: &Notebook) -> Vec<&Note> {
    let mut all: Vec<&Note> = notes.iter().collect();
    all.sort_by(|a, b| {
        b.tags
            .len()
            .cmp(&a.tags.len())
            .then_with(|| a.name().cmp(b.name()))
    });
    all
}

pub fn run_add(notes: &mut Notebook, name: &str, text: &str) -> Result<CmdResult> {
    let note = Note::new(name, text);
    notes.upsert(note.clone());
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Note {} added", name)))
        .with_listed_notes(vec![note]))
}

pub fn run_add_tags(notes: &mut Notebook, name: &str, tag_text: &str) -> Result<CmdResult> {
    let added = append_tags(notes, name, tag_text)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Tags added to note {}: {}",
        name,
        added.join(" ")
    ))))
}

pub fn run_edit(notes: &mut Notebook, name: &str, text: &str) -> Result<CmdResult> {
    if !edit_text(notes, name, text) {
        return Err(AbookError::NotFound(name.to_string()));
    }
    Ok(CmdResult::default().with_message(CmdMessage::success(format!("Note {} changed", name))))
}

pub fn run_delete(notes: &mut Notebook, name: &str) -> Result<CmdResult> {
    if !remove(notes, name) {
        return Err(AbookError::NotFound(name.to_string()));
    }
    Ok(CmdResult::default().with_message(CmdMessage::success(format!("Note {} deleted", name))))
}

pub fn run_find(notes: &Notebook, name: &str) -> Result<CmdResult> {
    let rendered = render(notes, name).ok_or_else(|| AbookError::NotFound(name.to_string()))?;
    Ok(CmdResult::default().with_message(CmdMessage::info(rendered)))
}

pub fn run_find_by_tag(notes: &Notebook, tag: &str) -> Result<CmdResult> {
    let matching = tagged(notes, tag);
    if matching.is_empty() {
        return Ok(CmdResult::default()
            .with_message(CmdMessage::info(format!("No notes tagged '{}'", tag))));
    }
    Ok(listing(matching))
}

pub fn run_sort(notes: &Notebook) -> Result<CmdResult> {
    if notes.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY_NOTEBOOK)));
    }
    Ok(listing(sorted(notes)))
}

fn listing(notes: Vec<&Note>) -> CmdResult {
    let mut result = CmdResult::default();
    for note in &notes {
        result.add_message(CmdMessage::info(note.render()));
    }
    result.with_listed_notes(notes.into_iter().cloned().collect())
}
