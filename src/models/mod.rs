mod lesson;
mod question;

pub use lesson::Lesson;
pub use question::{Choices, Question, QuestionKind, Sentence, VideoChoices, Word, canonical_sentence};
