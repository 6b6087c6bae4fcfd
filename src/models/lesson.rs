use serde::{Deserialize, Serialize};

use super::Question;

/// A named, ordered group of questions sharing a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    pub questions: Vec<Question>,
}

impl Lesson {
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn last_question_index(&self) -> usize {
        self.questions.len().saturating_sub(1)
    }
}
