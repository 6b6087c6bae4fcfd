use crate::config::QuizConfig;
use crate::data::LessonRepository;
use crate::models::{Lesson, Question, QuestionKind, Word};

use super::{Effect, SessionPhase, SessionState};

/// Drives one learner through the lesson catalog.
pub struct QuizSession {
    repo: LessonRepository,
    config: QuizConfig,
    state: SessionState,
    effects: Vec<Effect>,
}

impl QuizSession {
    /// A session always starts with at least one life.
    pub fn new(repo: LessonRepository, mut config: QuizConfig) -> Self {
        config.starting_lives = config.starting_lives.max(1);
        Self {
            repo,
            state: SessionState::new(config.starting_lives),
            config,
            effects: Vec::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.state.phase
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn repository(&self) -> &LessonRepository {
        &self.repo
    }

    /// `None` once the session is completed.
    pub fn current_lesson(&self) -> Option<&Lesson> {
        if self.state.is_completed() {
            return None;
        }
        self.repo.lesson(self.state.lesson_index).ok()
    }

    /// `None` once the session is completed.
    pub fn current_question(&self) -> Option<&Question> {
        if self.state.is_completed() {
            return None;
        }
        self.repo
            .question(self.state.lesson_index, self.state.question_index)
            .ok()
    }

    /// Picked words of the current word-order question, in pick order.
    pub fn ordered_words(&self) -> Vec<&Word> {
        let Some(words) = self.current_question().and_then(Question::words) else {
            return Vec::new();
        };
        self.state
            .ordered_words
            .iter()
            .filter_map(|&slot| words.get(slot))
            .collect()
    }

    pub fn assembled_sentence(&self) -> String {
        self.ordered_words()
            .iter()
            .map(|word| word.text.as_str())
            .collect()
    }

    pub fn is_word_picked(&self, slot: usize) -> bool {
        self.state.ordered_words.contains(&slot)
    }

    /// Queued side effects, oldest first.
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Answer a choice-like question with option `index`.
    pub fn submit_answer(&mut self, index: usize) {
        if !self.accepts_input() {
            return;
        }
        let Some(choices) = self.current_question().and_then(Question::choices) else {
            return;
        };
        if index >= choices.options.len() {
            return;
        }
        let correct = choices.is_correct(index);

        self.state.selected_answer = Some(index);
        self.reveal(correct);
    }

    /// Put the word in `slot` at the end of the assembled sentence.
    ///
    /// Each slot can be picked once per question, even when two words share
    /// the same text. Picking never scores.
    pub fn append_word(&mut self, slot: usize) {
        if !self.accepts_input() {
            return;
        }
        let Some(words) = self.current_question().and_then(Question::words) else {
            return;
        };
        if slot >= words.len() || self.is_word_picked(slot) {
            return;
        }
        self.state.ordered_words.push(slot);
    }

    pub fn remove_last_word(&mut self) {
        if self.accepts_input() {
            self.state.ordered_words.pop();
        }
    }

    pub fn clear_words(&mut self) {
        if self.accepts_input() {
            self.state.ordered_words.clear();
        }
    }

    /// Grade the assembled sentence once every word has been placed.
    pub fn submit_order(&mut self) {
        if !self.accepts_input() {
            return;
        }
        let Some(QuestionKind::WordOrder { words, correct, .. }) =
            self.current_question().map(|question| &question.kind)
        else {
            return;
        };
        if self.state.ordered_words.len() != words.len() {
            return;
        }
        let is_correct = self.assembled_sentence() == *correct;

        self.reveal(is_correct);
    }

    pub fn toggle_hint(&mut self) {
        if self.state.phase == SessionPhase::InProgress {
            self.state.hint_visible = true;
        }
    }

    /// Flip the playback intent for the current question's clip.
    pub fn toggle_playback(&mut self) {
        if self.state.phase != SessionPhase::InProgress {
            return;
        }
        let Some(media) = self.current_question().and_then(Question::media) else {
            return;
        };
        let effect = if self.state.is_playing {
            Effect::Pause
        } else {
            Effect::Play(media.to_string())
        };

        self.state.is_playing = !self.state.is_playing;
        self.effects.push(effect);
    }

    /// The media transport reached the end of the clip.
    pub fn on_playback_ended(&mut self) {
        self.state.is_playing = false;
    }

    /// Move to the next question, the next lesson, or finish.
    ///
    /// Choice-like questions must be revealed first; word-order questions
    /// can always be continued.
    pub fn advance(&mut self) {
        if self.state.phase != SessionPhase::InProgress {
            return;
        }
        let Some(question) = self.current_question() else {
            return;
        };
        if !question.is_word_order() && !self.state.answer_revealed {
            return;
        }

        let last_question = self
            .current_lesson()
            .map(Lesson::last_question_index)
            .unwrap_or_default();

        if self.state.question_index < last_question {
            self.state.question_index += 1;
        } else if self.state.lesson_index < self.repo.last_lesson_index() {
            self.state.lesson_index += 1;
            self.state.question_index = 0;
        } else {
            self.complete();
            return;
        }

        self.state.clear_question();
        self.effects.push(Effect::StopMedia);
        log::debug!(
            "advanced to lesson {} question {}",
            self.state.lesson_index,
            self.state.question_index
        );
    }

    /// Start over after running out of lives.
    pub fn reset(&mut self) {
        if self.state.phase != SessionPhase::GameOver {
            return;
        }
        self.state = SessionState::new(self.config.starting_lives);
        self.effects.push(Effect::StopMedia);
        log::debug!("session reset");
    }

    fn accepts_input(&self) -> bool {
        self.state.phase == SessionPhase::InProgress && !self.state.answer_revealed
    }

    fn reveal(&mut self, correct: bool) {
        self.state.answer_revealed = true;
        self.state.was_correct = Some(correct);

        if correct {
            self.state.score = self.state.score.saturating_add(self.config.points_per_correct);
        } else {
            self.state.lives = self.state.lives.saturating_sub(1);
            if self.state.lives == 0 {
                self.state.phase = SessionPhase::GameOver;
                self.state.is_playing = false;
                self.effects.push(Effect::StopMedia);
                log::debug!("game over with score {}", self.state.score);
            }
        }
    }

    fn complete(&mut self) {
        self.state.phase = SessionPhase::Completed;
        self.state.clear_question();
        self.effects.push(Effect::StopMedia);
        self.effects.push(Effect::NavigateHome);
        log::debug!("session completed with score {}", self.state.score);
    }
}
