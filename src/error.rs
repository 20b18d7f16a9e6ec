use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HangmanError {
    #[error("Failed to read dictionary from '{}': {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Dictionary contains no eligible words")]
    EmptyDictionary,

    #[error("Invalid input '{0}': enter a single alphabet character")]
    InvalidInput(String),

    #[error("Guess submitted after the round was already won")]
    InvalidState,
}

pub type Result<T> = std::result::Result<T, HangmanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_failure_and_empty_content_are_distinct() {
        let unreadable = HangmanError::SourceUnavailable {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let empty = HangmanError::EmptyDictionary;

        assert!(unreadable.to_string().contains("missing.txt"));
        assert_ne!(unreadable.to_string(), empty.to_string());
    }

    #[test]
    fn test_invalid_input_message_echoes_raw_text() {
        let err = HangmanError::InvalidInput("AB".to_string());
        assert!(err.to_string().contains("'AB'"));
    }
}
