use crate::error::{AbookError, Result};

/// Joins argument tokens into one free-text value with single spaces.
///
/// An empty result is a usage error: free-text commands need at least one word.
pub fn join_words<I: AsRef<str>>(words: &[I]) -> Result<String> {
    let text = words
        .iter()
        .map(|w| w.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");
    if text.trim().is_empty() {
        return Err(AbookError::WrongArgCount);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_with_single_spaces() {
        assert_eq!(join_words(&["12", "Baker", "Street"]).unwrap(), "12 Baker Street");
    }

    #[test]
    fn empty_input_is_a_usage_error() {
        let none: [&str; 0] = [];
        assert!(matches!(join_words(&none), Err(AbookError::WrongArgCount)));
        assert!(matches!(join_words(&[" "]), Err(AbookError::WrongArgCount)));
    }
}
