use crate::engine::{GuessEngine, GuessOutcome, RevealPattern, RoundSummary};
use crate::error::{HangmanError, Result};
use crate::validator::parse_letter;
use crate::wordbank::WordPool;
use crate::{debug_log, info_log};
use rand::Rng;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Raw text entered for a guess, not yet validated.
    Guess(String),
    Exit,
}

/// Presentation layer for a game session.
///
/// The loop decides what happens; implementations only render and collect input.
pub trait GameInterface {
    fn display_rules(&mut self);
    fn display_round_start(&mut self, round: usize, word_length: usize);
    fn display_pattern(&mut self, pattern: &RevealPattern);
    /// `None` means no usable action was produced; the loop will ask again.
    fn read_guess(&mut self) -> Option<UserAction>;
    fn display_invalid_input(&mut self, error: &HangmanError);
    fn display_outcome(&mut self, letter: char, outcome: GuessOutcome, incorrect: &BTreeSet<char>);
    fn display_round_won(&mut self, summary: &RoundSummary);
    fn read_play_again(&mut self) -> bool;
    fn display_exit_message(&mut self);
}

enum RoundResult {
    Won(RoundSummary),
    Abandoned,
}

/// Play rounds until the player declines a replay or quits.
///
/// Returns the summary of every round that was won.
///
/// # Errors
/// Returns `HangmanError::EmptyDictionary` if `pool` has no words.
pub fn game_loop<I, R>(pool: &WordPool, interface: &mut I, rng: &mut R) -> Result<Vec<RoundSummary>>
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let mut summaries = Vec::new();

    loop {
        let round = summaries.len() + 1;
        match play_round(pool, interface, rng, round)? {
            RoundResult::Won(summary) => {
                interface.display_round_won(&summary);
                summaries.push(summary);
            }
            RoundResult::Abandoned => {
                info_log!("Round {} abandoned", round);
                break;
            }
        }
        if !interface.read_play_again() {
            break;
        }
    }

    interface.display_exit_message();
    info_log!("Session finished after {} won round(s)", summaries.len());
    Ok(summaries)
}

fn play_round<I, R>(pool: &WordPool, interface: &mut I, rng: &mut R, round: usize) -> Result<RoundResult>
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    let word = pool.select_random(rng)?;
    let mut engine = GuessEngine::new(word);
    interface.display_rules();
    interface.display_round_start(round, word.len());

    loop {
        interface.display_pattern(&engine.reveal_pattern());
        if engine.poll_completion() {
            return engine.summary().map(RoundResult::Won).ok_or(HangmanError::InvalidState);
        }

        let letter = loop {
            match interface.read_guess() {
                Some(UserAction::Exit) => return Ok(RoundResult::Abandoned),
                Some(UserAction::Guess(raw)) => match parse_letter(&raw) {
                    Ok(letter) => break letter,
                    Err(e) => {
                        debug_log!("Rejected guess input {:?}", raw);
                        interface.display_invalid_input(&e);
                    }
                },
                None => {}
            }
        };

        let outcome = engine.submit_guess(letter)?;
        interface.display_outcome(letter, outcome, engine.incorrect_letters());
    }
}
