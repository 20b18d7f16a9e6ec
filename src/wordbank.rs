use crate::debug_log;
use crate::error::{HangmanError, Result};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

const SPECIAL_SYMBOLS: [char; 4] = ['-', '\'', ' ', '.'];

/// A dictionary entry that can be the target of a round.
///
/// Always non-empty and made only of ASCII lowercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Why a raw dictionary line was left out of the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Empty,
    Uppercase,
    Digit,
    Symbol(char),
    NonAsciiLetter(char),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty entry"),
            Self::Uppercase => write!(f, "contains an uppercase character"),
            Self::Digit => write!(f, "contains a digit"),
            Self::Symbol(c) => write!(f, "contains the symbol {c:?}"),
            Self::NonAsciiLetter(c) => write!(f, "contains non-letter character {c:?}"),
        }
    }
}

impl Word {
    /// Trim `raw` and check it against the dictionary rules.
    ///
    /// Uppercase, digits and the symbols `-`, `'`, space and `.` are checked first
    /// so the reported reason matches the most common kinds of dictionary noise.
    pub fn parse(raw: &str) -> std::result::Result<Self, Rejection> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(Rejection::Empty);
        }
        if text.chars().any(char::is_uppercase) {
            return Err(Rejection::Uppercase);
        }
        if text.chars().any(|c| c.is_ascii_digit()) {
            return Err(Rejection::Digit);
        }
        if let Some(symbol) = text.chars().find(|c| SPECIAL_SYMBOLS.contains(c)) {
            return Err(Rejection::Symbol(symbol));
        }
        if let Some(other) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(Rejection::NonAsciiLetter(other));
        }
        Ok(Self {
            text: text.to_string(),
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.text.contains(letter)
    }

    #[must_use]
    pub fn distinct_letter_count(&self) -> usize {
        let mut seen = [false; 26];
        for byte in self.text.bytes() {
            seen[usize::from(byte - b'a')] = true;
        }
        seen.iter().filter(|&&present| present).count()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Filtered, read-only collection of words a round can be played with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordPool {
    words: Vec<Word>,
}

impl WordPool {
    /// Load and filter in one step.
    pub fn from_lines<I, S>(raw_lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        filter(load(raw_lines))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Pick a word uniformly at random without removing it from the pool.
    pub fn select_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Word> {
        let word = self.words.choose(rng).ok_or(HangmanError::EmptyDictionary)?;
        debug_log!("Selected word of length {} from {} candidates", word.len(), self.len());
        Ok(word)
    }
}

/// Drop blank lines from a raw dictionary source.
pub fn load<I, S>(raw_lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw_lines
        .into_iter()
        .filter(|line| !line.as_ref().trim().is_empty())
        .map(|line| line.as_ref().to_string())
        .collect()
}

/// Keep only the lines that form valid words; the rest are skipped silently.
pub fn filter(lines: Vec<String>) -> WordPool {
    let words: Vec<Word> = lines
        .iter()
        .filter_map(|line| match Word::parse(line) {
            Ok(word) => Some(word),
            Err(_reason) => {
                debug_log!("Skipping dictionary entry {:?}: {}", line, _reason);
                None
            }
        })
        .collect();
    debug_log!("Kept {} of {} dictionary entries", words.len(), lines.len());
    WordPool { words }
}

pub fn load_wordbank_from_str(data: &str) -> WordPool {
    WordPool::from_lines(data.lines())
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<WordPool> {
    let path = path.as_ref();
    let unavailable = |source| HangmanError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(unavailable)?;
    let reader = BufReader::new(file);
    let mut lines = Vec::new();
    // Undecodable bytes become U+FFFD and the entry is filtered out like any other noise.
    for line in reader.split(b'\n') {
        let bytes = line.map_err(unavailable)?;
        lines.push(String::from_utf8_lossy(&bytes).into_owned());
    }
    Ok(WordPool::from_lines(lines))
}

/// User-level dictionary override, `<config dir>/hangman/words.txt`.
#[must_use]
pub fn user_wordbank_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hangman").join("words.txt"))
}
