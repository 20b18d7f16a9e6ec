//! TUI (Terminal User Interface) module for Hangman
//!
//! A full-screen front end built on Ratatui. `TuiInterface` implements
//! `GameInterface`, so the same game loop drives it as the line-oriented CLI.
//!
//! # State Machine
//! - `EnteringGuess` → `RoundWon` → back to `EnteringGuess` on replay
//! - Terminal state: `Exiting`

use crate::cli::format_incorrect_letters;
use crate::engine::{GuessOutcome, PLACEHOLDER, RevealPattern, RoundSummary};
use crate::error::HangmanError;
use crate::game_state::{GameInterface, UserAction};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::collections::BTreeSet;
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;

const RULES: [&str; 3] = [
    "1. Only single character guesses are accepted",
    "2. Only alphabets are accepted",
    "3. Repeating a wrong choice is not counted again",
];

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringGuess,
    RoundWon,
    Exiting,
}

/// (background, foreground) for one letter tile.
fn tile_colors(slot: Option<char>) -> (Color, Color) {
    match slot {
        Some(_) => (Color::Green, Color::Black),
        None => (Color::DarkGray, Color::White),
    }
}

fn instructions(state: TuiState) -> &'static str {
    match state {
        TuiState::EnteringGuess => "Type a letter to guess | ESC: Quit",
        TuiState::RoundWon => "Y: Play again | N / ESC: Quit",
        TuiState::Exiting => "Goodbye",
    }
}

/// Context for rendering the UI - groups related parameters to avoid too many function arguments.
struct RenderContext<'a> {
    round: usize,
    pattern: &'a [Option<char>],
    incorrect: &'a BTreeSet<char>,
    state: TuiState,
    message: &'a str,
    error_message: &'a str,
    status: &'a str,
}

/// Main TUI interface component.
///
/// Owns the terminal for its lifetime and restores it on drop.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    round: usize,
    pattern: Vec<Option<char>>,
    incorrect: BTreeSet<char>,
    state: TuiState,
    message: String,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            round: 0,
            pattern: Vec::new(),
            incorrect: BTreeSet::new(),
            state: TuiState::EnteringGuess,
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let ctx = RenderContext {
            round: self.round,
            pattern: &self.pattern,
            incorrect: &self.incorrect,
            state: self.state,
            message: &self.message,
            error_message: &self.error_message,
            status: &self.status,
        };

        self.terminal.draw(|f| {
            Self::render_static(f, &ctx);
        })?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(_e) = self.draw() {
            debug_log!("Draw error: {}", _e);
        }
    }

    fn render_static(f: &mut Frame, ctx: &RenderContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(5), // Word
                Constraint::Min(8),    // Info panel
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        Self::render_word(f, chunks[1], ctx.round, ctx.pattern);
        Self::render_info(f, chunks[2], ctx);
        Self::render_status(f, chunks[3], ctx.status);
        Self::render_instructions(f, chunks[4], ctx.state);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("THE HANGMAN")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_word(f: &mut Frame, area: Rect, round: usize, pattern: &[Option<char>]) {
        let block = Block::default()
            .title(format!("Round {round}"))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut spans = vec![Span::raw("  ")];
        for &slot in pattern {
            let (bg_color, fg_color) = tile_colors(slot);
            let letter = slot.unwrap_or(PLACEHOLDER);
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }

        let y = inner.y + inner.height / 2;
        if y < inner.y + inner.height {
            f.render_widget(
                Paragraph::new(Line::from(spans)),
                Rect {
                    x: inner.x,
                    y,
                    width: inner.width,
                    height: 1,
                },
            );
        }
    }

    fn render_info(f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let mut lines = vec![Line::from(vec![Span::styled("Rules:", HEADER_STYLE)])];
        for rule in RULES {
            lines.push(Line::from(format!("  {rule}")));
        }
        lines.push(Line::from(""));

        lines.push(Line::from(vec![Span::styled(
            format!("Incorrect Guesses: {}", format_incorrect_letters(ctx.incorrect)),
            INFO_STYLE,
        )]));
        lines.push(Line::from(""));

        if !ctx.message.is_empty() {
            let style = if ctx.state == TuiState::RoundWon {
                SUCCESS_STYLE
            } else {
                MESSAGE_STYLE
            };
            lines.push(Line::from(vec![Span::styled(ctx.message, style)]));
        }

        if !ctx.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(ctx.error_message, ERROR_STYLE)]));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
        let paragraph = Paragraph::new(instructions(state))
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_status(f: &mut Frame, area: Rect, status: &str) {
        let status_text = if status.is_empty() { "Ready" } else { status };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    /// Wait briefly for the next key press. Non-key events are ignored.
    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            // Only process Press events, ignore Release and Repeat to avoid double input
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                debug_log!("next_key() - code={:?}, modifiers={:?}", key.code, key.modifiers);
                Ok(Some(key))
            }
            _other => {
                debug_log!("next_key() - Ignoring event: {:?}", _other);
                Ok(None)
            }
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(event::KeyModifiers::ALT)
            || key.modifiers.contains(event::KeyModifiers::CONTROL)
    }

    fn handle_guess_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Esc => {
                info_log!("handle_guess_input() - ESC pressed, returning Exit");
                Some(UserAction::Exit)
            }
            KeyCode::Char(_) if Self::has_modifier_keys(&key) => None,
            KeyCode::Char(c) => {
                self.error_message.clear();
                Some(UserAction::Guess(c.to_string()))
            }
            _ => None,
        }
    }

    fn handle_play_again_input(key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char('y' | 'Y') => Some(true),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(false),
            _ => None,
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_rules(&mut self) {
        self.message.clear();
        self.error_message.clear();
    }

    fn display_round_start(&mut self, round: usize, word_length: usize) {
        self.round = round;
        self.incorrect.clear();
        self.state = TuiState::EnteringGuess;
        self.message = format!("The word has {word_length} letter(s)");
        self.status = "Guess a letter in the word".to_string();
        self.draw_or_log();
    }

    fn display_pattern(&mut self, pattern: &RevealPattern) {
        self.pattern = pattern.slots().to_vec();
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<UserAction> {
        loop {
            if self.draw().is_err() {
                info_log!("read_guess() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }
            match self.next_key() {
                Ok(Some(key)) => {
                    if let Some(action) = self.handle_guess_input(key) {
                        return Some(action);
                    }
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_guess() - Input error: {}, returning Exit", _e);
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_invalid_input(&mut self, error: &HangmanError) {
        self.error_message = error.to_string();
        self.draw_or_log();
    }

    fn display_outcome(&mut self, letter: char, outcome: GuessOutcome, incorrect: &BTreeSet<char>) {
        self.incorrect.clone_from(incorrect);
        self.message = match outcome {
            GuessOutcome::AlreadyConfirmed => format!("{letter} is already in the word"),
            GuessOutcome::AlreadyIncorrect => {
                format!("{letter} was already guessed and is not in the word")
            }
            GuessOutcome::NewlyConfirmed => format!("{letter} is in the word"),
            GuessOutcome::Incorrect => format!("{letter} is not in the word"),
            GuessOutcome::RoundComplete => String::new(),
        };
        self.draw_or_log();
    }

    fn display_round_won(&mut self, summary: &RoundSummary) {
        self.state = TuiState::RoundWon;
        self.message = format!(
            "You Won! The word is \"{}\". You guessed incorrectly {} time(s)",
            summary.word, summary.incorrect_guesses
        );
        self.status = format!("Round {} complete", self.round);
        self.draw_or_log();
    }

    fn read_play_again(&mut self) -> bool {
        self.state = TuiState::RoundWon;
        loop {
            if self.draw().is_err() {
                return false;
            }
            match self.next_key() {
                Ok(Some(key)) => {
                    if let Some(answer) = Self::handle_play_again_input(key) {
                        info_log!("read_play_again() - {}", answer);
                        return answer;
                    }
                }
                Ok(None) => {}
                Err(_e) => {
                    debug_log!("read_play_again() - Input error: {}", _e);
                    return false;
                }
            }
        }
    }

    fn display_exit_message(&mut self) {
        self.state = TuiState::Exiting;
        self.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
