// Library interface for hangman
// This allows integration tests to access internal modules

pub mod cli;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod tui;
pub mod validator;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use engine::{GuessEngine, GuessOutcome, RevealPattern, RoundState, RoundSummary};
pub use error::{HangmanError, Result};
pub use game_state::{GameInterface, UserAction, game_loop};
pub use validator::{parse_letter, validate};
pub use wordbank::{Word, WordPool, load_wordbank_from_file, load_wordbank_from_str};
