// Integration tests for the hangman application
// These tests verify that dictionary loading, validation, the engine and the game loop work together

use hangman::cli::CliInterface;
use hangman::wordbank::EMBEDDED_WORDBANK;
use hangman::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::Cursor;

fn seeded() -> StdRng {
    StdRng::seed_from_u64(2024)
}

#[test]
fn test_end_to_end_single_round() {
    // Dictionary with one eligible word, so the target is known
    let pool = load_wordbank_from_str("Cat\ncat\nc4t\n\n");
    assert_eq!(pool.len(), 1);

    let input = "c\nc\nz\na\nt\nn\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let summaries = game_loop(&pool, &mut interface, &mut seeded()).unwrap();

    assert_eq!(
        summaries,
        vec![RoundSummary {
            word: "cat".to_string(),
            attempts: 4,
            incorrect_guesses: 1,
        }]
    );
}

#[test]
fn test_invalid_input_is_reprompted() {
    let pool = load_wordbank_from_str("aaa");

    // "AB", "1", "" and " " are rejected; "A" is accepted and normalized
    let input = "AB\n1\n\n \nA\nn\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let summaries = game_loop(&pool, &mut interface, &mut seeded()).unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].attempts, 1);
    assert_eq!(summaries[0].incorrect_guesses, 0);
}

#[test]
fn test_undecodable_guess_is_reprompted() {
    let pool = load_wordbank_from_str("cat");

    let input: &[u8] = b"\xe9\nc\na\nt\nn\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let summaries = game_loop(&pool, &mut interface, &mut seeded()).unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].attempts, 3);
    assert_eq!(summaries[0].incorrect_guesses, 0);
}

#[test]
fn test_wordbank_file_with_latin1_line() {
    let path = std::env::temp_dir().join("hangman_integration_latin1.txt");
    std::fs::write(&path, b"cat\ncaf\xe9\ndog\n").unwrap();

    let pool = load_wordbank_from_file(&path).unwrap();
    let words: Vec<&str> = pool.words().iter().map(Word::as_str).collect();
    assert_eq!(words, vec!["cat", "dog"]);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_multiple_rounds_with_replay() {
    let pool = load_wordbank_from_str("ox");

    let input = "o\nq\nx\ny\nx\no\nY\nz\no\nx\nno\n";
    let mut interface = CliInterface::new(Cursor::new(input));
    let summaries = game_loop(&pool, &mut interface, &mut seeded()).unwrap();

    let scores: Vec<usize> = summaries.iter().map(|s| s.incorrect_guesses).collect();
    assert_eq!(scores, vec![1, 0, 1]);
}

#[test]
fn test_end_of_input_abandons_round() {
    let pool = load_wordbank_from_str("zebra");
    let mut interface = CliInterface::new(Cursor::new("z\ne\n"));

    let summaries = game_loop(&pool, &mut interface, &mut seeded()).unwrap();
    assert!(summaries.is_empty());
}

#[test]
fn test_empty_dictionary_is_reported() {
    let pool = load_wordbank_from_str("Apple\nwell-known\nR2D2\n");
    let mut interface = CliInterface::new(Cursor::new("a\n"));

    assert!(matches!(
        game_loop(&pool, &mut interface, &mut seeded()),
        Err(HangmanError::EmptyDictionary)
    ));
}

#[test]
fn test_custom_wordbank_file_to_game() {
    use std::fs::File;
    use std::io::Write;

    let path = std::env::temp_dir().join("hangman_integration_wordbank.txt");
    {
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Pear").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  kiwi  ").unwrap();
        writeln!(file, "ice cream").unwrap();
    }

    let pool = load_wordbank_from_file(&path).unwrap();
    let words: Vec<&str> = pool.words().iter().map(Word::as_str).collect();
    assert_eq!(words, vec!["kiwi"]);

    let mut interface = CliInterface::new(Cursor::new("k\ni\nw\n"));
    let summaries = game_loop(&pool, &mut interface, &mut seeded()).unwrap();
    assert_eq!(summaries[0].word, "kiwi");
    assert_eq!(summaries[0].incorrect_guesses, 0);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_wordbank_file() {
    let path = std::env::temp_dir().join("hangman_no_such_wordbank.txt");
    let _ = std::fs::remove_file(&path);

    assert!(matches!(
        load_wordbank_from_file(&path),
        Err(HangmanError::SourceUnavailable { .. })
    ));
}

#[test]
fn test_every_embedded_word_can_be_won() {
    // Guessing the alphabet in order wins any word in the embedded dictionary
    let pool = load_wordbank_from_str(EMBEDDED_WORDBANK);
    assert!(!pool.is_empty());

    for word in pool.words() {
        let mut engine = GuessEngine::new(word);
        for letter in 'a'..='z' {
            if engine.poll_completion() {
                break;
            }
            engine.submit_guess(letter).unwrap();
        }
        assert!(engine.poll_completion(), "{word}");

        let summary = engine.summary().unwrap();
        assert_eq!(
            summary.incorrect_guesses,
            summary.attempts - word.distinct_letter_count()
        );
        assert_eq!(summary.incorrect_guesses, engine.incorrect_letters().len());
        assert!(engine.incorrect_letters().iter().all(|&c| !word.contains(c)));
    }
}

#[test]
fn test_selection_stays_within_pool() {
    let pool = load_wordbank_from_str(EMBEDDED_WORDBANK);
    let mut rng = seeded();
    for _ in 0..200 {
        let word = pool.select_random(&mut rng).unwrap();
        assert!(pool.contains(word));
    }
}

#[test]
fn test_validator_and_engine_agree_on_normalization() {
    let pool = load_wordbank_from_str("zoo");
    let word = &pool.words()[0];
    let mut engine = GuessEngine::new(word);

    assert!(validate("Z"));
    let letter = parse_letter("Z").unwrap();
    assert_eq!(engine.submit_guess(letter).unwrap(), GuessOutcome::NewlyConfirmed);
    assert_eq!(engine.reveal_pattern().to_string(), "z _ _");
}
