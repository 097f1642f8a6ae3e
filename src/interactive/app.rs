//! TUI application state and logic

use crate::engine::{BoardView, GameEngine, RoundState};
use crate::error::GameError;
use crate::store::GameStore;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, S: GameStore> {
    engine: &'a GameEngine<S>,
    user: String,
    timezone: Option<String>,
    pub view: BoardView,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: GameStore> App<'a, S> {
    /// Load today's round for the user
    pub fn new(
        engine: &'a GameEngine<S>,
        user: impl Into<String>,
        timezone: Option<String>,
    ) -> Result<Self> {
        let user = user.into();
        let view = engine.board(&user, timezone.as_deref())?;

        let input_mode = if view.state.is_terminal() {
            InputMode::RoundOver
        } else {
            InputMode::Typing
        };

        let mut app = Self {
            engine,
            user,
            timezone,
            view,
            input_buffer: String::new(),
            messages: Vec::new(),
            input_mode,
            should_quit: false,
        };

        match app.view.state {
            RoundState::InProgress => {
                app.add_message("Type a 5-letter word and press Enter.", MessageStyle::Info);
            }
            RoundState::Solved => {
                app.add_message("Already solved today - come back tomorrow!", MessageStyle::Success);
            }
            RoundState::Failed => {
                app.add_message("Today's round is over. Press 'q' to quit.", MessageStyle::Info);
            }
        }

        Ok(app)
    }

    /// Append a typed letter, capped at word length
    pub fn push_letter(&mut self, c: char) {
        if self.input_buffer.len() < 5 && c.is_ascii_alphabetic() {
            self.input_buffer.push(c.to_ascii_lowercase());
        }
    }

    /// Remove the last typed letter
    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed word as a guess
    pub fn submit(&mut self) {
        if self.input_buffer.len() != 5 {
            self.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
            return;
        }

        let guess = self.input_buffer.clone();
        match self
            .engine
            .submit_guess(&self.user, self.timezone.as_deref(), &guess)
        {
            Ok(view) => {
                self.input_buffer.clear();
                self.apply_view(view);
            }
            Err(err) if err.is_rejected_guess() => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(GameError::RoundComplete) => {
                self.input_mode = InputMode::RoundOver;
                self.add_message("Today's round is already complete.", MessageStyle::Info);
            }
            Err(err) => {
                self.add_message(&format!("Something went wrong: {err}"), MessageStyle::Error);
            }
        }
    }

    fn apply_view(&mut self, view: BoardView) {
        match view.state {
            RoundState::Solved => {
                self.input_mode = InputMode::RoundOver;

                let celebration = match view.attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.add_message(celebration, MessageStyle::Success);

                if let Some(points) = view.points {
                    self.add_message(&format!("+{points} points"), MessageStyle::Success);
                }
                if let Some(streak) = &view.streak {
                    self.add_message(
                        &format!("Streak: {} days (best {})", streak.current, streak.longest),
                        MessageStyle::Info,
                    );
                }
                self.add_message("Press 'q' to quit.", MessageStyle::Info);
            }
            RoundState::Failed => {
                self.input_mode = InputMode::RoundOver;

                if let Some(secret) = &view.secret {
                    self.add_message(
                        &format!("Out of guesses - the word was {}", secret.to_uppercase()),
                        MessageStyle::Error,
                    );
                }
                if let Some(points) = view.points {
                    self.add_message(&format!("+{points} points"), MessageStyle::Info);
                }
                self.add_message("Press 'q' to quit.", MessageStyle::Info);
            }
            RoundState::InProgress => {
                self.add_message(
                    &format!("{} guesses remaining", view.remaining),
                    MessageStyle::Info,
                );
            }
        }

        self.view = view;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: GameStore>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: GameStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::RoundOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    _ => {
                        // Round is over, ignore other keys
                    }
                },
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_letter();
                    }
                    KeyCode::Enter => {
                        app.submit();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameDay;
    use crate::store::{SqliteStore, WordOrigin};

    fn engine() -> GameEngine<SqliteStore> {
        let engine = GameEngine::new(SqliteStore::open_in_memory().unwrap());
        let pools = engine.pools();
        for word in ["wheat", "storm", "light"] {
            pools.add_answer_word(word, WordOrigin::Curated).unwrap();
        }
        engine
            .override_secret(GameDay::today(None), "wheat")
            .unwrap();
        engine
    }

    #[test]
    fn typing_respects_word_length() {
        let engine = engine();
        let mut app = App::new(&engine, "alice", None).unwrap();

        for c in "stormy".chars() {
            app.push_letter(c);
        }
        assert_eq!(app.input_buffer, "storm");

        app.pop_letter();
        assert_eq!(app.input_buffer, "stor");

        app.push_letter('7');
        assert_eq!(app.input_buffer, "stor");
    }

    #[test]
    fn short_submission_is_refused_locally() {
        let engine = engine();
        let mut app = App::new(&engine, "alice", None).unwrap();

        app.push_letter('a');
        app.submit();

        assert_eq!(app.view.attempts, 0);
        assert!(matches!(
            app.messages.last().unwrap().style,
            MessageStyle::Error
        ));
    }

    #[test]
    fn unknown_word_keeps_typing_mode() {
        let engine = engine();
        let mut app = App::new(&engine, "alice", None).unwrap();

        for c in "qajaq".chars() {
            app.push_letter(c);
        }
        app.submit();

        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.view.attempts, 0);
        // Buffer kept so the user can fix it
        assert_eq!(app.input_buffer, "qajaq");
    }

    #[test]
    fn solve_switches_to_round_over() {
        let engine = engine();
        let mut app = App::new(&engine, "alice", None).unwrap();

        for c in "wheat".chars() {
            app.push_letter(c);
        }
        app.submit();

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.view.state, RoundState::Solved);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn reopening_a_finished_round_starts_round_over() {
        let engine = engine();
        engine
            .submit_guess("alice", None, "wheat")
            .unwrap();

        let app = App::new(&engine, "alice", None).unwrap();
        assert_eq!(app.input_mode, InputMode::RoundOver);
    }
}
