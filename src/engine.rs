//! Round state machine.
//!
//! A `GuessEngine` owns everything that changes during one round: the letters
//! confirmed so far, the letters guessed wrong and the attempt counter. It does
//! no I/O; callers feed it one lowercase letter at a time and render the
//! returned `GuessOutcome` however they like.
//!
//! # State Machine
//! - `InProgress` → `Won` once every distinct letter of the target is confirmed
//! - There is no losing state; a round only ends by revealing the word

use crate::error::{HangmanError, Result};
use crate::wordbank::Word;
use crate::{debug_log, info_log};
use std::collections::BTreeSet;
use std::fmt;

pub const PLACEHOLDER: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    AlreadyConfirmed,
    /// Letter was already guessed and is not in the word. Not counted again.
    AlreadyIncorrect,
    NewlyConfirmed,
    Incorrect,
    /// The word was fully revealed before this guess; the letter is not consumed.
    RoundComplete,
}

/// Per-position view of the target, `None` where the letter is still hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealPattern {
    slots: Vec<Option<char>>,
}

impl RevealPattern {
    #[must_use]
    pub fn slots(&self) -> &[Option<char>] {
        &self.slots
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

impl fmt::Display for RevealPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", slot.unwrap_or(PLACEHOLDER))?;
        }
        Ok(())
    }
}

/// Final numbers for a won round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    pub word: String,
    pub attempts: usize,
    pub incorrect_guesses: usize,
}

#[derive(Debug)]
pub struct GuessEngine<'w> {
    target: &'w Word,
    confirmed: BTreeSet<char>,
    incorrect: BTreeSet<char>,
    attempts: usize,
    state: RoundState,
}

impl<'w> GuessEngine<'w> {
    #[must_use]
    pub fn new(target: &'w Word) -> Self {
        info_log!("Starting round with a {}-letter word", target.len());
        Self {
            target,
            confirmed: BTreeSet::new(),
            incorrect: BTreeSet::new(),
            attempts: 0,
            state: RoundState::InProgress,
        }
    }

    /// Process one guessed letter.
    ///
    /// `letter` must already be a single lowercase ASCII letter; see
    /// [`crate::validator::parse_letter`].
    ///
    /// # Errors
    /// Returns `HangmanError::InvalidState` if the round has already been won.
    pub fn submit_guess(&mut self, letter: char) -> Result<GuessOutcome> {
        if self.state == RoundState::Won {
            return Err(HangmanError::InvalidState);
        }
        if self.poll_completion() {
            return Ok(GuessOutcome::RoundComplete);
        }

        let outcome = if self.confirmed.contains(&letter) {
            GuessOutcome::AlreadyConfirmed
        } else if self.incorrect.contains(&letter) {
            GuessOutcome::AlreadyIncorrect
        } else if self.target.contains(letter) {
            self.confirmed.insert(letter);
            self.attempts += 1;
            GuessOutcome::NewlyConfirmed
        } else {
            self.incorrect.insert(letter);
            self.attempts += 1;
            GuessOutcome::Incorrect
        };
        debug_log!(
            "submit_guess('{}') -> {:?}, attempts={}",
            letter,
            outcome,
            self.attempts
        );
        Ok(outcome)
    }

    /// Move to `Won` if every letter is revealed. Returns whether the round is won.
    pub fn poll_completion(&mut self) -> bool {
        if self.state == RoundState::InProgress && self.is_fully_revealed() {
            self.state = RoundState::Won;
            info_log!(
                "Round won after {} attempts ({} incorrect)",
                self.attempts,
                self.incorrect_guess_count()
            );
        }
        self.state == RoundState::Won
    }

    #[must_use]
    pub fn reveal_pattern(&self) -> RevealPattern {
        let slots = self
            .target
            .chars()
            .map(|c| self.confirmed.contains(&c).then_some(c))
            .collect();
        RevealPattern { slots }
    }

    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.target.chars().all(|c| self.confirmed.contains(&c))
    }

    /// Attempts minus correct letters; only meaningful once the round is won.
    #[must_use]
    pub fn incorrect_guess_count(&self) -> usize {
        // `confirmed` only ever holds letters of the target.
        self.attempts - self.confirmed.len()
    }

    /// Summary of the round, available once it is won.
    #[must_use]
    pub fn summary(&self) -> Option<RoundSummary> {
        (self.state == RoundState::Won).then(|| RoundSummary {
            word: self.target.to_string(),
            attempts: self.attempts,
            incorrect_guesses: self.incorrect_guess_count(),
        })
    }

    #[must_use]
    pub fn target(&self) -> &'w Word {
        self.target
    }

    #[must_use]
    pub fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    #[must_use]
    pub fn confirmed_letters(&self) -> &BTreeSet<char> {
        &self.confirmed
    }

    #[must_use]
    pub fn incorrect_letters(&self) -> &BTreeSet<char> {
        &self.incorrect
    }
}
