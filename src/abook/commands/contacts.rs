//! Contact commands: phones, birthdays, addresses, emails, delete and list.
//!
//! Every function validates first and mutates second, so a rejected input
//! leaves the [`AddressBook`] untouched. Persisting is the caller's job.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Address, AddressBook, Record};
use crate::validation::{parse_birthday, parse_email, parse_phone};

pub const EMPTY_BOOK: &str = "Data is empty, nothing to show";

/// Creates (or replaces) the contact `name` with a fresh record holding `raw` as phone.
///
/// Replacing drops every other field of the old record and adds a warning.
pub fn add_phone(book: &mut AddressBook, name: &str, raw: &str) -> Result<CmdResult> {
    let phone = parse_phone(raw)?;
    let replaced = book.get(name).is_some();
    let mut record = Record::new(name);
    record.set_phone(phone.clone());
    book.upsert(record.clone());

    let mut result = CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Contact: {} : {} added",
            name, phone
        )))
        .with_affected_records(vec![record]);
    if replaced {
        result.add_message(CmdMessage::warning(format!(
            "Contact {} already existed and was replaced",
            name
        )));
    }
    Ok(result)
}

/// Replaces the phone of an existing contact. The stored and echoed value is
/// the normalized phone, exactly as `add_phone` stores it.
pub fn change_phone(book: &mut AddressBook, name: &str, raw: &str) -> Result<CmdResult> {
    let phone = parse_phone(raw)?;
    let record = book.record_mut(name)?;
    record.set_phone(phone.clone());

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Contact: {} : {} changed",
            name, phone
        )))
        .with_affected_records(vec![record.clone()]))
}

pub fn get_phone(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let phone = book.record(name)?.phone()?;
    Ok(CmdResult::default().with_message(CmdMessage::info(phone.to_string())))
}

pub fn add_birthday(book: &mut AddressBook, name: &str, raw: &str) -> Result<CmdResult> {
    let birthday = parse_birthday(raw)?;
    let record = book.record_mut(name)?;
    record.set_birthday(birthday);

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Birthday for {} : {} added",
            name, raw
        )))
        .with_affected_records(vec![record.clone()]))
}

pub fn show_birthday(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let birthday = book.record(name)?.birthday()?;
    Ok(CmdResult::default().with_message(CmdMessage::info(birthday.to_string())))
}

fn set_address(book: &mut AddressBook, name: &str, text: &str, verb: &str) -> Result<CmdResult> {
    let record = book.record_mut(name)?;
    record.set_address(Address(text.to_string()));

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Address for {} : {} {}",
            name, text, verb
        )))
        .with_affected_records(vec![record.clone()]))
}

pub fn add_address(book: &mut AddressBook, name: &str, text: &str) -> Result<CmdResult> {
    set_address(book, name, text, "added")
}

pub fn change_address(book: &mut AddressBook, name: &str, text: &str) -> Result<CmdResult> {
    set_address(book, name, text, "changed")
}

pub fn show_address(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let address = book.record(name)?.address()?;
    Ok(CmdResult::default().with_message(CmdMessage::info(address.to_string())))
}

fn set_email(book: &mut AddressBook, name: &str, raw: &str, verb: &str) -> Result<CmdResult> {
    let email = parse_email(raw)?;
    let record = book.record_mut(name)?;
    record.set_email(email.clone());

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Email for {} : {} {}",
            name, email, verb
        )))
        .with_affected_records(vec![record.clone()]))
}

pub fn add_email(book: &mut AddressBook, name: &str, raw: &str) -> Result<CmdResult> {
    set_email(book, name, raw, "added")
}

pub fn change_email(book: &mut AddressBook, name: &str, raw: &str) -> Result<CmdResult> {
    set_email(book, name, raw, "changed")
}

pub fn show_email(book: &AddressBook, name: &str) -> Result<CmdResult> {
    let email = book.record(name)?.email()?;
    Ok(CmdResult::default().with_message(CmdMessage::info(email.to_string())))
}

pub fn delete(book: &mut AddressBook, name: &str) -> Result<CmdResult> {
    book.record(name)?;
    let mut result = CmdResult::default();
    if let Some(record) = book.remove(name) {
        result.add_message(CmdMessage::success(format!(
            "Contact deleted: {}",
            record.render()
        )));
        result.affected_records.push(record);
    }
    Ok(result)
}

pub fn list_all(book: &AddressBook) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info(EMPTY_BOOK)));
    }

    let mut result = CmdResult::default().with_listed_records(book.iter().cloned().collect());
    for record in book.iter() {
        result.add_message(CmdMessage::info(record.render()));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::{AbookError, ErrorKind};
    use proptest::prelude::*;

    fn book_with(name: &str, phone: &str) -> AddressBook {
        let mut book = AddressBook::new();
        add_phone(&mut book, name, phone).unwrap();
        book
    }

    #[test]
    fn add_phone_stores_normalized_phone() {
        let book = book_with("Bob", "+1 234 567 891");
        assert_eq!(book.record("Bob").unwrap().phone().unwrap().0, "+1234567891");
        let result = get_phone(&book, "Bob").unwrap();
        assert_eq!(result.text(), "+1234567891");
    }

    #[test]
    fn add_phone_rejects_short_numbers_without_mutation() {
        let mut book = AddressBook::new();
        let err = add_phone(&mut book, "Bob", "12345").unwrap_err();
        assert!(matches!(err, AbookError::InvalidPhone(_)));
        assert_eq!(
            err.to_string(),
            "Phone: 12345 is not correct it should contain 10 digits"
        );
        assert!(book.is_empty());
    }

    #[test]
    fn add_phone_for_existing_name_overwrites_record() {
        let mut book = book_with("Bob", "1234567891");
        add_birthday(&mut book, "Bob", "01.01.1990").unwrap();
        add_phone(&mut book, "Bob", "9876543219").unwrap();

        let record = book.record("Bob").unwrap();
        assert_eq!(record.phone().unwrap().0, "9876543219");
        assert!(!record.has_birthday());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn add_phone_warns_only_when_replacing() {
        let mut book = AddressBook::new();
        let first = add_phone(&mut book, "Bob", "1234567891").unwrap();
        assert!(first
            .messages
            .iter()
            .all(|m| m.level != MessageLevel::Warning));

        let second = add_phone(&mut book, "Bob", "9876543219").unwrap();
        let warning = second.messages.last().unwrap();
        assert_eq!(warning.level, MessageLevel::Warning);
        assert_eq!(warning.content, "Contact Bob already existed and was replaced");
    }

    #[test]
    fn mutations_report_the_updated_record() {
        let mut book = book_with("Bob", "1234567891");
        let result = add_email(&mut book, "Bob", "bob@example.com").unwrap();
        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(result.affected_records[0].email().unwrap().0, "bob@example.com");

        let result = delete(&mut book, "Bob").unwrap();
        assert_eq!(result.affected_records[0].name(), "Bob");
        assert!(get_phone(&book, "Bob").unwrap().affected_records.is_empty());
    }

    #[test]
    fn change_phone_requires_existing_contact() {
        let mut book = AddressBook::new();
        let err = change_phone(&mut book, "Ghost", "1234567891").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn change_phone_validates_before_lookup() {
        let mut book = book_with("Bob", "1234567891");
        let err = change_phone(&mut book, "Bob", "123").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(book.record("Bob").unwrap().phone().unwrap().0, "1234567891");
    }

    #[test]
    fn get_phone_of_unknown_contact_is_lookup_error() {
        let book = AddressBook::new();
        assert_eq!(get_phone(&book, "Bob").unwrap_err().kind(), ErrorKind::Lookup);
    }

    #[test]
    fn birthday_round_trip() {
        let mut book = book_with("Bob", "1234567891");
        let err = add_birthday(&mut book, "Bob", "1990/01/01").unwrap_err();
        assert!(err.to_string().contains("DD.MM.YYYY"));

        add_birthday(&mut book, "Bob", "01.01.1990").unwrap();
        assert_eq!(show_birthday(&book, "Bob").unwrap().text(), "01.01.1990");
    }

    #[test]
    fn show_birthday_unset_is_not_set_error() {
        let book = book_with("Bob", "1234567891");
        assert_eq!(
            show_birthday(&book, "Bob").unwrap_err().kind(),
            ErrorKind::NotSet
        );
    }

    #[test]
    fn address_add_and_change() {
        let mut book = book_with("Bob", "1234567891");
        add_address(&mut book, "Bob", "12 Baker Street").unwrap();
        assert_eq!(show_address(&book, "Bob").unwrap().text(), "12 Baker Street");

        let result = change_address(&mut book, "Bob", "221B Baker Street").unwrap();
        assert_eq!(result.text(), "Address for Bob : 221B Baker Street changed");
        assert_eq!(
            show_address(&book, "Bob").unwrap().text(),
            "221B Baker Street"
        );
    }

    #[test]
    fn email_add_rejects_bad_shape() {
        let mut book = book_with("Bob", "1234567891");
        assert_eq!(
            add_email(&mut book, "Bob", "bob-at-example").unwrap_err().kind(),
            ErrorKind::Format
        );
        assert_eq!(
            show_email(&book, "Bob").unwrap_err().kind(),
            ErrorKind::NotSet
        );

        add_email(&mut book, "Bob", "bob@example.com").unwrap();
        change_email(&mut book, "Bob", "robert@example.org").unwrap();
        assert_eq!(show_email(&book, "Bob").unwrap().text(), "robert@example.org");
    }

    #[test]
    fn delete_reports_rendered_record() {
        let mut book = book_with("Bob", "1234567891");
        let result = delete(&mut book, "Bob").unwrap();
        assert_eq!(
            result.text(),
            "Contact deleted: Contact name: Bob, phone: 1234567891"
        );
        assert!(book.is_empty());
    }

    #[test]
    fn delete_unknown_leaves_book_unchanged() {
        let mut book = book_with("Bob", "1234567891");
        let err = delete(&mut book, "Alice").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lookup);
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn list_all_renders_in_insertion_order() {
        let mut book = book_with("Zed", "1234567891");
        add_phone(&mut book, "Amy", "9876543219").unwrap();

        let result = list_all(&book).unwrap();
        assert_eq!(
            result.text(),
            "Contact name: Zed, phone: 1234567891\nContact name: Amy, phone: 9876543219"
        );
        assert_eq!(result.listed_records.len(), 2);
    }

    #[test]
    fn list_all_on_empty_book_returns_sentinel() {
        let result = list_all(&AddressBook::new()).unwrap();
        assert_eq!(result.text(), EMPTY_BOOK);
    }

    /// `(noise, token)` pairs. Noise never contains `+`, `(` or 1-9, so each
    /// token is counted exactly once; zeros and punctuation are ignored.
    fn noisy_tokens(
        len: impl Into<prop::collection::SizeRange>,
    ) -> impl Strategy<Value = Vec<(String, String)>> {
        prop::collection::vec(("[ 0a-z.)-]{0,3}", "[+(]?[1-9]"), len)
    }

    fn assemble(pairs: &[(String, String)]) -> (String, String) {
        let raw = pairs.iter().map(|(noise, token)| format!("{noise}{token}")).collect();
        let normalized = pairs.iter().map(|(_, token)| token.as_str()).collect();
        (raw, normalized)
    }

    proptest! {
        #[test]
        fn ten_tokens_are_stored_normalized(pairs in noisy_tokens(10), tail in "[ 0x]{0,3}") {
            let (raw, normalized) = assemble(&pairs);
            let raw = format!("{raw}{tail}");
            let mut book = book_with("Ann", "1111111111");

            add_phone(&mut book, "Bob", &raw).unwrap();
            prop_assert_eq!(get_phone(&book, "Bob").unwrap().text(), normalized.clone());
            prop_assert_eq!(get_phone(&book, "Ann").unwrap().text(), "1111111111");

            change_phone(&mut book, "Ann", &raw).unwrap();
            prop_assert_eq!(get_phone(&book, "Ann").unwrap().text(), normalized);
        }

        #[test]
        fn other_token_counts_leave_the_book_unchanged(
            pairs in noisy_tokens(0..20).prop_filter("ten tokens is a valid phone", |p| p.len() != 10)
        ) {
            let (raw, _) = assemble(&pairs);
            let mut book = book_with("Ann", "1111111111");
            add_email(&mut book, "Ann", "ann@example.com").unwrap();
            let before = book.clone();

            let err = add_phone(&mut book, "Bob", &raw).unwrap_err();
            prop_assert!(matches!(err, AbookError::InvalidPhone(_)));
            prop_assert_eq!(&book, &before);

            let err = add_phone(&mut book, "Ann", &raw).unwrap_err();
            prop_assert!(matches!(err, AbookError::InvalidPhone(_)));
            prop_assert_eq!(&book, &before);

            prop_assert!(change_phone(&mut book, "Ann", &raw).is_err());
            prop_assert_eq!(&book, &before);
        }
    }
}
