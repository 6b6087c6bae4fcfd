use crate::config::QuizConfig;
use crate::data::LessonRepository;
use crate::media::{MediaTransport, SilentTransport};
use crate::models::Question;
use crate::session::{Effect, QuizSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Quiz,
}

/// How the previous run ended, shown on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    pub lives: u32,
    pub completed: bool,
}

/// Terminal front end: owns the session, the cursor and the media transport.
pub struct App {
    pub screen: Screen,
    session: QuizSession,
    media: Box<dyn MediaTransport>,
    cursor: usize,
    last_run: Option<RunSummary>,
}

impl App {
    pub fn new(repo: LessonRepository, config: QuizConfig) -> Self {
        Self::with_media(repo, config, Box::new(SilentTransport::default()))
    }

    pub fn with_media(
        repo: LessonRepository,
        config: QuizConfig,
        media: Box<dyn MediaTransport>,
    ) -> Self {
        Self {
            screen: Screen::Home,
            session: QuizSession::new(repo, config),
            media,
            cursor: 0,
            last_run: None,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn repository(&self) -> &LessonRepository {
        self.session.repository()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn last_run(&self) -> Option<RunSummary> {
        self.last_run
    }

    pub fn is_game_over(&self) -> bool {
        self.session.state().is_game_over()
    }

    /// Begin a fresh run from the first lesson.
    pub fn start_quiz(&mut self) {
        let repo = self.session.repository().clone();
        let config = *self.session.config();
        self.media.rewind();
        self.session = QuizSession::new(repo, config);
        self.cursor = 0;
        self.screen = Screen::Quiz;
        log::info!("quiz started");
    }

    /// Leave the quiz screen. Any run in progress is abandoned.
    pub fn navigate_home(&mut self) {
        self.media.rewind();
        let state = self.session.state();
        self.last_run = Some(RunSummary {
            score: state.score,
            lives: state.lives,
            completed: state.is_completed(),
        });
        self.screen = Screen::Home;
    }

    pub fn cursor_next(&mut self) {
        let len = self.cursor_len();
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    pub fn cursor_previous(&mut self) {
        let len = self.cursor_len();
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }

    /// Act on the item under the cursor.
    pub fn select_current(&mut self) {
        self.pick(self.cursor);
    }

    /// Act on item `index` directly: answer with that option, or place that word.
    pub fn pick(&mut self, index: usize) {
        let Some(question) = self.session.current_question() else {
            return;
        };

        if question.is_word_order() {
            self.session.append_word(index);
            self.cursor = self.next_free_slot(index);
        } else {
            self.cursor = index.min(self.cursor_len().saturating_sub(1));
            self.session.submit_answer(index);
        }
        self.sync();
    }

    pub fn undo_word(&mut self) {
        self.session.remove_last_word();
        self.sync();
    }

    pub fn clear_words(&mut self) {
        self.session.clear_words();
        self.cursor = 0;
        self.sync();
    }

    pub fn check_order(&mut self) {
        self.session.submit_order();
        self.sync();
    }

    pub fn toggle_hint(&mut self) {
        self.session.toggle_hint();
        self.sync();
    }

    pub fn toggle_playback(&mut self) {
        self.session.toggle_playback();
        self.sync();
    }

    pub fn continue_quiz(&mut self) {
        let before = (
            self.session.state().lesson_index,
            self.session.state().question_index,
        );
        self.session.advance();
        let after = (
            self.session.state().lesson_index,
            self.session.state().question_index,
        );
        if before != after {
            self.cursor = 0;
        }
        self.sync();
    }

    pub fn retry(&mut self) {
        self.session.reset();
        self.cursor = 0;
        self.sync();
    }

    /// Poll the media transport; called once per loop iteration.
    pub fn tick(&mut self) {
        if self.media.poll_ended() {
            self.session.on_playback_ended();
        }
        self.sync();
    }

    fn cursor_len(&self) -> usize {
        match self.session.current_question() {
            Some(question) => item_count(question),
            None => 0,
        }
    }

    fn next_free_slot(&self, from: usize) -> usize {
        let len = self.cursor_len();
        (1..=len)
            .map(|step| (from + step) % len)
            .find(|&slot| !self.session.is_word_picked(slot))
            .unwrap_or(from.min(len.saturating_sub(1)))
    }

    /// Hand queued session effects to the router and media transport.
    fn sync(&mut self) {
        for effect in self.session.take_effects() {
            match effect {
                Effect::Play(source) => self.media.play(&source),
                Effect::Pause => self.media.pause(),
                Effect::StopMedia => self.media.rewind(),
                Effect::NavigateHome => self.navigate_home(),
            }
        }
    }
}

fn item_count(question: &Question) -> usize {
    match (question.choices(), question.words()) {
        (Some(choices), _) => choices.options.len(),
        (None, Some(words)) => words.len(),
        (None, None) => 0,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Rc<RefCell<Vec<String>>>,
        ended: Rc<RefCell<bool>>,
    }

    impl MediaTransport for Recorder {
        fn play(&mut self, source: &str) {
            self.calls.borrow_mut().push(format!("play {source}"));
        }

        fn pause(&mut self) {
            self.calls.borrow_mut().push("pause".to_string());
        }

        fn rewind(&mut self) {
            self.calls.borrow_mut().push("rewind".to_string());
        }

        fn poll_ended(&mut self) -> bool {
            std::mem::take(&mut *self.ended.borrow_mut())
        }
    }

    fn app_with_recorder() -> (App, Rc<RefCell<Vec<String>>>, Rc<RefCell<bool>>) {
        let recorder = Recorder::default();
        let calls = Rc::clone(&recorder.calls);
        let ended = Rc::clone(&recorder.ended);
        let repo = LessonRepository::builtin().unwrap();
        let mut app = App::with_media(repo, QuizConfig::default(), Box::new(recorder));
        app.start_quiz();
        calls.borrow_mut().clear();
        (app, calls, ended)
    }

    #[test]
    fn starts_on_home() {
        let app = App::new(LessonRepository::builtin().unwrap(), QuizConfig::default());
        assert_eq!(app.screen, Screen::Home);
        assert!(app.last_run().is_none());
    }

    #[test]
    fn cursor_wraps_over_options() {
        let (mut app, _, _) = app_with_recorder();
        app.cursor_previous();
        assert_eq!(app.cursor(), 3);
        app.cursor_next();
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn playback_reaches_transport_and_ends() {
        let (mut app, calls, ended) = app_with_recorder();
        app.toggle_playback();
        assert!(app.session().state().is_playing);
        assert_eq!(*calls.borrow(), vec!["play videos/jikoshoukai.mp4"]);

        *ended.borrow_mut() = true;
        app.tick();
        assert!(!app.session().state().is_playing);
    }

    #[test]
    fn continuing_rewinds_media() {
        let (mut app, calls, _) = app_with_recorder();
        app.toggle_playback();
        app.select_current();
        app.continue_quiz();

        assert_eq!(calls.borrow().last().map(String::as_str), Some("rewind"));
        assert_eq!(app.session().state().question_index, 1);
        assert_eq!(app.cursor(), 0);
    }

    #[test]
    fn word_cursor_skips_picked_words() {
        let (mut app, _, _) = app_with_recorder();
        app.pick(0);
        app.continue_quiz();

        app.pick(0);
        assert_eq!(app.cursor(), 1);
        app.pick(2);
        assert_eq!(app.cursor(), 1);
        app.select_current();
        app.check_order();

        // 学生 + 私は + です
        let state = app.session().state();
        assert_eq!(state.ordered_words, vec![0, 2, 1]);
        assert_eq!(state.was_correct, Some(false));
    }

    #[test]
    fn completing_navigates_home() {
        let (mut app, _, _) = app_with_recorder();
        let mut guard = 0;
        while app.screen == Screen::Quiz && guard < 100 {
            let correct = app
                .session()
                .current_question()
                .and_then(Question::choices)
                .map(|choices| choices.correct);
            if let Some(index) = correct {
                app.pick(index);
            }
            app.continue_quiz();
            guard += 1;
        }

        assert_eq!(app.screen, Screen::Home);
        let summary = app.last_run().unwrap();
        assert!(summary.completed);
        assert_eq!(summary.lives, 3);
    }

    #[test]
    fn retry_after_game_over() {
        let (mut app, _, _) = app_with_recorder();
        app.pick(1);
        app.continue_quiz();
        // Skip the word-order question.
        app.continue_quiz();
        app.pick(1);
        app.continue_quiz();
        app.pick(0);
        assert!(app.is_game_over());

        app.retry();
        assert!(!app.is_game_over());
        assert_eq!(app.session().state().lives, 3);
        assert_eq!(app.screen, Screen::Quiz);
    }
}
