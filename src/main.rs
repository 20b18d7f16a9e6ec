use hangman::cli::{CliInterface, parse_cli};
use hangman::error::{HangmanError, Result};
use hangman::game_state::{GameInterface, game_loop};
use hangman::info_log;
use hangman::logging::{default_log_path, init_logging};
use hangman::tui::TuiInterface;
use hangman::wordbank::{
    EMBEDDED_WORDBANK, WordPool, load_wordbank_from_file, load_wordbank_from_str,
    user_wordbank_path,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::Path;
use std::process::ExitCode;

fn load_pool(explicit_path: Option<&Path>) -> Result<WordPool> {
    let pool = match explicit_path {
        Some(path) => load_wordbank_from_file(path)?,
        None => match user_wordbank_path().filter(|path| path.is_file()) {
            Some(path) => load_wordbank_from_file(&path)?,
            None => load_wordbank_from_str(EMBEDDED_WORDBANK),
        },
    };
    if pool.is_empty() {
        return Err(HangmanError::EmptyDictionary);
    }
    info_log!("Loaded {} eligible words", pool.len());
    Ok(pool)
}

fn main() -> ExitCode {
    let cli = parse_cli();

    if let Err(e) = init_logging(default_log_path().as_deref()) {
        eprintln!("Logging disabled: {e}");
    }

    let pool = match load_pool(cli.wordbank_path.as_deref()) {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut interface: Box<dyn GameInterface> = if cli.tui {
        match TuiInterface::new() {
            Ok(tui) => Box::new(tui),
            Err(e) => {
                eprintln!("Failed to start terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        Box::new(CliInterface::new(io::stdin().lock()))
    };

    let result = game_loop(&pool, interface.as_mut(), &mut rng);
    // Restore the terminal before anything else is printed.
    drop(interface);

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
