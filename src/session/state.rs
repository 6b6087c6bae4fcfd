/// Coarse lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    InProgress,
    /// Lives ran out. Only `reset` does anything here.
    GameOver,
    /// Advanced past the last question of the last lesson. Terminal.
    Completed,
}

/// Everything that changes while a learner works through the lessons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub lesson_index: usize,
    pub question_index: usize,
    pub lives: u32,
    pub score: u32,
    /// Option picked on a choice-like question.
    pub selected_answer: Option<usize>,
    pub answer_revealed: bool,
    /// Outcome of the revealed answer.
    pub was_correct: Option<bool>,
    pub hint_visible: bool,
    /// Word slots of the current question, in pick order.
    pub ordered_words: Vec<usize>,
    pub is_playing: bool,
}

impl SessionState {
    pub fn new(starting_lives: u32) -> Self {
        Self {
            phase: SessionPhase::InProgress,
            lesson_index: 0,
            question_index: 0,
            lives: starting_lives,
            score: 0,
            selected_answer: None,
            answer_revealed: false,
            was_correct: None,
            hint_visible: false,
            ordered_words: Vec::new(),
            is_playing: false,
        }
    }

    /// Drop everything tied to the current question.
    pub(crate) fn clear_question(&mut self) {
        self.selected_answer = None;
        self.answer_revealed = false;
        self.was_correct = None;
        self.hint_visible = false;
        self.is_playing = false;
        self.ordered_words.clear();
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    pub fn is_completed(&self) -> bool {
        self.phase == SessionPhase::Completed
    }
}
