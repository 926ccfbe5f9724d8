use crate::commands::{CmdMessage, CmdResult};
use crate::error::{AbookError, Result};
use crate::model::AddressBook;

pub const MIN_QUERY_LEN: usize = 3;

/// Case-insensitive substring search over each contact's searchable text.
///
/// Queries shorter than [`MIN_QUERY_LEN`] characters are refused before any
/// contact is looked at.
pub fn run(book: &AddressBook, query: &str) -> Result<CmdResult> {
    if query.chars().count() < MIN_QUERY_LEN {
        return Err(AbookError::Usage(format!(
            "Search query should be at least {} characters long",
            MIN_QUERY_LEN
        )));
    }
    let query_lower = query.to_lowercase();

    let mut result = CmdResult::default();
    for record in book.iter() {
        let text = record.search_text();
        if text.to_lowercase().contains(&query_lower) {
            result.add_message(CmdMessage::info(text));
            result.listed_records.push(record.clone());
        }
    }

    if result.listed_records.is_empty() {
        result.add_message(CmdMessage::info(format!("No contacts match '{}'", query)));
    }
    Ok(result)
}
