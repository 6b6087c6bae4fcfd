//! # nihongo-quiz
//!
//! A terminal quiz for working through Japanese lessons: video-backed
//! multiple-choice questions and word-ordering exercises, with a score and a
//! limited number of lives.
//!
//! The progression rules live in [`session::QuizSession`] and can be driven
//! without a terminal; [`Quiz`] wires them to a ratatui front end.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nihongo_quiz::{Quiz, QuizConfig, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let quiz = Quiz::builtin(QuizConfig::default())?;
//!     quiz.run()?;
//!     Ok(())
//! }
//! ```

mod app;
pub mod config;
pub mod data;
pub mod media;
pub mod models;
pub mod session;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;

pub use app::{App, RunSummary, Screen};
pub use config::QuizConfig;
pub use data::{LessonRepository, LoadError, load_lessons_from_json};
pub use media::{CommandTransport, MediaTransport, SilentTransport};
pub use models::{Lesson, Question, QuestionKind};
pub use session::{Effect, QuizSession, SessionPhase, SessionState};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("failed to load lessons: {0}")]
    Load(#[from] LoadError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
    config: QuizConfig,
}

impl Quiz {
    pub fn new(repo: LessonRepository, config: QuizConfig) -> Self {
        Self {
            app: App::new(repo, config),
            config,
        }
    }

    /// Quiz over the lessons bundled with the crate.
    pub fn builtin(config: QuizConfig) -> Result<Self, QuizError> {
        Ok(Self::new(LessonRepository::builtin()?, config))
    }

    /// Load lessons from a JSON file.
    ///
    /// ```rust,no_run
    /// use nihongo_quiz::{Quiz, QuizConfig};
    ///
    /// let quiz = Quiz::from_json("lessons.json", QuizConfig::default())
    ///     .expect("Failed to load lessons");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, config: QuizConfig) -> Result<Self, QuizError> {
        Ok(Self::new(load_lessons_from_json(path)?, config))
    }

    /// Replace the media transport used for video and audio clips.
    pub fn with_media(self, media: Box<dyn MediaTransport>) -> Self {
        let repo = self.app.repository().clone();
        Self {
            app: App::with_media(repo, self.config, media),
            config: self.config,
        }
    }

    /// Take over the terminal until the learner quits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let mut guard = terminal::TerminalGuard::enter()?;
        run_event_loop(guard.terminal(), &mut self.app, &self.config)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    config: &QuizConfig,
) -> Result<(), QuizError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(config.tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_input(app, key.code) {
                    break;
                }
            }
        }

        app.tick();
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q')) {
        return true;
    }

    match app.screen {
        Screen::Home => handle_home_input(app, key),
        Screen::Quiz if app.is_game_over() => handle_game_over_input(app, key),
        Screen::Quiz => handle_quiz_input(app, key),
    }
    false
}

fn handle_home_input(app: &mut App, key: KeyCode) {
    if key == KeyCode::Enter {
        app.start_quiz();
    }
}

fn handle_game_over_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => app.retry(),
        KeyCode::Esc => app.navigate_home(),
        _ => {}
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.cursor_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_next(),
        KeyCode::Enter | KeyCode::Char(' ') => app.select_current(),
        KeyCode::Char(c @ '1'..='9') => app.pick(c as usize - '1' as usize),
        KeyCode::Backspace => app.undo_word(),
        KeyCode::Char('x') => app.clear_words(),
        KeyCode::Char('c') => app.check_order(),
        KeyCode::Char('h') => app.toggle_hint(),
        KeyCode::Char('p') => app.toggle_playback(),
        KeyCode::Char('n') | KeyCode::Right => app.continue_quiz(),
        KeyCode::Esc => app.navigate_home(),
        _ => {}
    }
}
