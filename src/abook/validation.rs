//! Input validation for contact fields.
//!
//! Phone numbers:
//! - Every occurrence of an optional `+` or `(` followed by a digit 1-9 counts
//!   as one token
//! - Exactly 10 tokens are required; the normalized phone is the tokens joined
//! - Anything else in the input (spaces, dashes, zeros) is ignored
//!
//! Emails:
//! - Must contain a `local@domain.tld` shaped match
//! - The raw input must be at most 50 characters long
//!
//! Birthdays:
//! - `DD.MM.YYYY`, see [`crate::model::DATE_FORMAT`]

use crate::error::{AbookError, Result};
use crate::model::{Birthday, Email, Phone};
use once_cell::sync::Lazy;
use regex::Regex;

pub const PHONE_TOKENS: usize = 10;
pub const MAX_EMAIL_LEN: usize = 50;

static PHONE_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+(]?[1-9]").expect("phone pattern is valid"));

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w.+-]+@[\w-]+\.[\w.-]+").expect("email pattern is valid"));

/// Normalizes a raw phone, or fails with [`AbookError::InvalidPhone`].
///
/// # Examples
/// ```
/// use abook::validation::parse_phone;
///
/// assert_eq!(parse_phone("1234567891").unwrap().0, "1234567891");
/// assert_eq!(parse_phone("+1234567891").unwrap().0, "+1234567891");
/// assert_eq!(parse_phone("123-456-789-1").unwrap().0, "1234567891");
///
/// assert!(parse_phone("123456789").is_err());
/// assert!(parse_phone("0501234567").is_err());
/// ```
pub fn parse_phone(raw: &str) -> Result<Phone> {
    let tokens: Vec<&str> = PHONE_TOKEN_RE.find_iter(raw).map(|m| m.as_str()).collect();
    if tokens.len() == PHONE_TOKENS {
        Ok(Phone(tokens.concat()))
    } else {
        Err(AbookError::InvalidPhone(raw.to_string()))
    }
}

/// Checks a raw email, or fails with [`AbookError::InvalidEmail`].
///
/// The stored value is the matched address. The length limit applies to the
/// raw input, whether or not all of it was part of the match.
pub fn parse_email(raw: &str) -> Result<Email> {
    let matched = EMAIL_RE.find(raw);
    match matched {
        Some(m) if raw.chars().count() <= MAX_EMAIL_LEN => Ok(Email(m.as_str().to_string())),
        _ => Err(AbookError::InvalidEmail(raw.to_string())),
    }
}

/// Accepts a raw birthday only if it parses as `DD.MM.YYYY`.
pub fn parse_birthday(raw: &str) -> Result<Birthday> {
    let birthday = Birthday(raw.to_string());
    match birthday.date() {
        Some(_) => Ok(birthday),
        None => Err(AbookError::InvalidDate(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn phone_accepts_leading_plus_or_paren() {
        assert_eq!(parse_phone("(123456789)1").unwrap().0, "(1234567891");
        assert_eq!(parse_phone("+3 8 1 9 1 2 3 4 5 6").unwrap().0, "+3819123456");
    }

    #[test]
    fn phone_ignores_unmatched_characters() {
        assert_eq!(parse_phone("abc1234567891xyz").unwrap().0, "1234567891");
    }

    #[test]
    fn phone_does_not_count_zero_digits() {
        assert!(matches!(
            parse_phone("1000000000"),
            Err(AbookError::InvalidPhone(_))
        ));
    }

    #[test]
    fn email_accepts_basic_shape() {
        assert_eq!(
            parse_email("john.doe@example.com").unwrap().0,
            "john.doe@example.com"
        );
    }

    #[test]
    fn email_rejects_missing_domain() {
        assert!(parse_email("john@localhost").is_err());
        assert!(parse_email("not-an-email").is_err());
    }

    #[test]
    fn email_length_counts_raw_input() {
        let padded = format!("{}a@b.io", " ".repeat(MAX_EMAIL_LEN));
        assert!(parse_email(&padded).is_err());

        let local = "a".repeat(MAX_EMAIL_LEN - "@b.io".len());
        assert!(parse_email(&format!("{local}@b.io")).is_ok());
        assert!(parse_email(&format!("{local}x@b.io")).is_err());
    }

    #[test]
    fn birthday_requires_fixed_format() {
        assert!(parse_birthday("31.12.1999").is_ok());
        assert!(matches!(
            parse_birthday("1999-12-31"),
            Err(AbookError::InvalidDate(_))
        ));
        assert!(parse_birthday("31.02.1999").is_err());
    }

    proptest! {
        #[test]
        fn ten_nonzero_digits_are_accepted(prefix in "[+(]?", digits in "[1-9]{10}") {
            let raw = format!("{prefix}{digits}");
            let phone = parse_phone(&raw).unwrap();
            prop_assert_eq!(phone.0, raw);
        }

        #[test]
        fn other_digit_counts_are_rejected(digits in "[1-9]{0,9}|[1-9]{11,16}") {
            prop_assert!(parse_phone(&digits).is_err());
        }
    }
}
