use crate::debug_log;
use crate::engine::{GuessOutcome, RevealPattern, RoundSummary};
use crate::error::HangmanError;
use crate::game_state::{GameInterface, UserAction};
use clap::Parser;
use std::collections::BTreeSet;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const SEPARATOR: &str =
    "===========================================================================";

/// Console hangman: guess the hidden word one letter at a time
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited dictionary file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<PathBuf>,

    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Seed for word selection, for reproducible rounds
    #[arg(long)]
    pub seed: Option<u64>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Read one line, `None` on end of input or a read error.
///
/// Bytes that are not valid UTF-8 are replaced rather than treated as an error,
/// so bad input is rejected by validation instead of ending the session.
fn read_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = Vec::new();
    match reader.read_until(b'\n', &mut input) {
        Ok(0) => None,
        Ok(_) => Some(String::from_utf8_lossy(&input).into_owned()),
        Err(_e) => {
            debug_log!("read_line() - {}", _e);
            None
        }
    }
}

fn prompt(text: &str) {
    print!("{text}");
    let _ = io::stdout().flush();
}

#[must_use]
pub fn format_incorrect_letters(letters: &BTreeSet<char>) -> String {
    let joined: Vec<String> = letters.iter().map(char::to_string).collect();
    format!("[{}]", joined.join(", "))
}

#[must_use]
pub fn is_play_again(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

pub fn display_rules() {
    println!("\n=============================== THE HANGMAN ===============================");
    println!("\n============================= MIND THE RULES  =============================\n");
    println!("1. Only Single character guesses are accepted as input");
    println!("2. Only Alphabets are accepted as input");
    println!("3. Repeating a wrong choice is not counted again");
    println!("\n============================ !!BEGIN THE GAME!! ===========================\n");
}

pub fn display_outcome(letter: char, outcome: GuessOutcome, incorrect: &BTreeSet<char>) {
    match outcome {
        GuessOutcome::AlreadyConfirmed => println!("\n{letter} is already in the word"),
        GuessOutcome::AlreadyIncorrect => {
            println!("\n{letter} was already guessed and is not in the word");
            println!("\nIncorrect Guesses: {}", format_incorrect_letters(incorrect));
        }
        GuessOutcome::Incorrect => {
            println!("\n{letter} is not in the word");
            println!("\nIncorrect Guesses: {}", format_incorrect_letters(incorrect));
        }
        GuessOutcome::NewlyConfirmed | GuessOutcome::RoundComplete => {}
    }
    println!("\n{SEPARATOR}\n");
}

pub fn display_round_won(summary: &RoundSummary) {
    println!("You Won");
    println!(
        "\nThe word is \"{}\"\n\nYou Guessed Incorrectly {} time(s)",
        summary.word, summary.incorrect_guesses
    );
    println!("\n{SEPARATOR}\n");
}

/// Line-oriented implementation of `GameInterface` over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_rules(&mut self) {
        display_rules();
    }

    fn display_round_start(&mut self, round: usize, word_length: usize) {
        println!("Round {round}: the word has {word_length} letter(s)\n");
    }

    fn display_pattern(&mut self, pattern: &RevealPattern) {
        println!("{pattern}\n");
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        prompt("Guess a letter in word >> ");
        match read_line(&mut self.reader) {
            Some(line) => Some(UserAction::Guess(line)),
            None => Some(UserAction::Exit),
        }
    }

    fn display_invalid_input(&mut self, _error: &HangmanError) {
        debug_log!("display_invalid_input() - {}", _error);
        println!("Invalid Input! Enter a VALID Alphabet Character");
    }

    fn display_outcome(&mut self, letter: char, outcome: GuessOutcome, incorrect: &BTreeSet<char>) {
        display_outcome(letter, outcome, incorrect);
    }

    fn display_round_won(&mut self, summary: &RoundSummary) {
        display_round_won(summary);
    }

    fn read_play_again(&mut self) -> bool {
        prompt("Do you want to play the game again, Type Y/y for Yes >> ");
        read_line(&mut self.reader).is_some_and(|answer| is_play_again(&answer))
    }

    fn display_exit_message(&mut self) {
        println!("\nThanks for playing.");
    }
}
