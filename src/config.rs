use std::time::Duration;

pub const DEFAULT_LIVES: u32 = 3;
pub const DEFAULT_POINTS_PER_CORRECT: u32 = 10;
const DEFAULT_TICK: Duration = Duration::from_millis(100);

/// Tunables for a quiz run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    /// Lives a session starts (and restarts) with.
    pub starting_lives: u32,
    /// Score awarded per correct answer.
    pub points_per_correct: u32,
    /// How long the terminal loop waits for input before ticking media.
    pub tick: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            starting_lives: DEFAULT_LIVES,
            points_per_correct: DEFAULT_POINTS_PER_CORRECT,
            tick: DEFAULT_TICK,
        }
    }
}

impl QuizConfig {
    pub fn with_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives.max(1);
        self
    }

    pub fn with_points(mut self, points: u32) -> Self {
        self.points_per_correct = points;
        self
    }
}
