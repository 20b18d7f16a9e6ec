use crate::error::{HangmanError, Result};

/// True if `raw`, once trimmed, is exactly one ASCII letter.
#[must_use]
pub fn validate(raw: &str) -> bool {
    let mut chars = raw.trim().chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

/// Validate `raw` and normalize it to the lowercase letter the engine expects.
///
/// # Errors
/// Returns `HangmanError::InvalidInput` carrying the raw text when it is rejected.
pub fn parse_letter(raw: &str) -> Result<char> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_lowercase()),
        _ => Err(HangmanError::InvalidInput(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_single_letters() {
        assert!(validate("a"));
        assert!(validate("Z"));
        assert!(validate("  q  "));
        assert!(validate("m\n"));
    }

    #[test]
    fn test_validate_rejects_everything_else() {
        assert!(!validate("AB")); // Too long
        assert!(!validate("1")); // Digit
        assert!(!validate("")); // Empty
        assert!(!validate(" ")); // Whitespace only
        assert!(!validate("?")); // Punctuation
        assert!(!validate("\u{e9}")); // Non-ASCII letter
        assert!(!validate("a b")); // Two letters with a gap
    }

    #[test]
    fn test_parse_letter_normalizes_to_lowercase() {
        assert_eq!(parse_letter("Z").unwrap(), 'z');
        assert_eq!(parse_letter(" k ").unwrap(), 'k');
    }

    #[test]
    fn test_parse_letter_agrees_with_validate() {
        for raw in ["a", "Q", " x\n", "ab", "", "9", "\u{fffd}"] {
            assert_eq!(parse_letter(raw).is_ok(), validate(raw), "{raw:?}");
        }
    }

    #[test]
    fn test_parse_letter_reports_rejected_input() {
        for raw in ["AB", "1", "", " "] {
            match parse_letter(raw) {
                Err(HangmanError::InvalidInput(text)) => assert_eq!(text, raw.trim()),
                other => panic!("Expected InvalidInput for {raw:?}, got {other:?}"),
            }
        }
    }
}
