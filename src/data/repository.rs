use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::models::{Lesson, Question, QuestionKind, canonical_sentence};

/// Lookup failure on the lesson catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{what} index {index} out of range (len {len})")]
    OutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}

/// Lesson content that cannot be played.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ContentError {
    #[error("lesson catalog is empty")]
    NoLessons,

    #[error("lesson {lesson_id} has no questions")]
    EmptyLesson { lesson_id: u32 },

    #[error("lesson id {lesson_id} is used more than once")]
    DuplicateLessonId { lesson_id: u32 },

    #[error("lesson {lesson_id}, question {question}: no options")]
    NoOptions { lesson_id: u32, question: usize },

    #[error(
        "lesson {lesson_id}, question {question}: correct index {correct} is out of range for {options} options"
    )]
    CorrectOutOfRange {
        lesson_id: u32,
        question: usize,
        correct: usize,
        options: usize,
    },

    #[error("lesson {lesson_id}, question {question}: no words")]
    NoWords { lesson_id: u32, question: usize },

    #[error("lesson {lesson_id}, question {question}: word order {order} is used more than once")]
    DuplicateWordOrder {
        lesson_id: u32,
        question: usize,
        order: u32,
    },

    #[error(
        "lesson {lesson_id}, question {question}: words assemble to {assembled:?}, expected {correct:?}"
    )]
    UnsolvableWordOrder {
        lesson_id: u32,
        question: usize,
        assembled: String,
        correct: String,
    },
}

/// Ordered, validated, read-only lesson catalog.
///
/// Cloning is cheap; all clones share the same lessons.
#[derive(Debug, Clone)]
pub struct LessonRepository {
    lessons: Arc<[Lesson]>,
}

impl LessonRepository {
    /// Validate `lessons` and wrap them in a repository.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContentError`] found. Question positions in the
    /// error are zero-based.
    pub fn new(lessons: Vec<Lesson>) -> Result<Self, ContentError> {
        validate_catalog(&lessons)?;
        Ok(Self {
            lessons: lessons.into(),
        })
    }

    pub fn lesson(&self, index: usize) -> Result<&Lesson, RepositoryError> {
        self.lessons.get(index).ok_or(RepositoryError::OutOfRange {
            what: "lesson",
            index,
            len: self.lessons.len(),
        })
    }

    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }

    pub fn last_lesson_index(&self) -> usize {
        self.lessons.len().saturating_sub(1)
    }

    pub fn question(
        &self,
        lesson_index: usize,
        question_index: usize,
    ) -> Result<&Question, RepositoryError> {
        let lesson = self.lesson(lesson_index)?;
        lesson
            .questions
            .get(question_index)
            .ok_or(RepositoryError::OutOfRange {
                what: "question",
                index: question_index,
                len: lesson.questions.len(),
            })
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn question_count(&self) -> usize {
        self.lessons.iter().map(Lesson::question_count).sum()
    }
}

fn validate_catalog(lessons: &[Lesson]) -> Result<(), ContentError> {
    if lessons.is_empty() {
        return Err(ContentError::NoLessons);
    }

    let mut seen_ids = HashSet::new();
    for lesson in lessons {
        if !seen_ids.insert(lesson.id) {
            return Err(ContentError::DuplicateLessonId {
                lesson_id: lesson.id,
            });
        }
        if lesson.questions.is_empty() {
            return Err(ContentError::EmptyLesson {
                lesson_id: lesson.id,
            });
        }
        for (position, question) in lesson.questions.iter().enumerate() {
            validate_question(lesson.id, position, question)?;
        }
    }

    Ok(())
}

fn validate_question(lesson_id: u32, question: usize, item: &Question) -> Result<(), ContentError> {
    if let Some(choices) = item.choices() {
        if choices.options.is_empty() {
            return Err(ContentError::NoOptions {
                lesson_id,
                question,
            });
        }
        if choices.correct >= choices.options.len() {
            return Err(ContentError::CorrectOutOfRange {
                lesson_id,
                question,
                correct: choices.correct,
                options: choices.options.len(),
            });
        }
    }

    if let QuestionKind::WordOrder { words, correct, .. } = &item.kind {
        if words.is_empty() {
            return Err(ContentError::NoWords {
                lesson_id,
                question,
            });
        }

        let mut orders = HashSet::new();
        if let Some(word) = words.iter().find(|word| !orders.insert(word.order)) {
            return Err(ContentError::DuplicateWordOrder {
                lesson_id,
                question,
                order: word.order,
            });
        }

        let assembled = canonical_sentence(words);
        if assembled != *correct {
            return Err(ContentError::UnsolvableWordOrder {
                lesson_id,
                question,
                assembled,
                correct: correct.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Choices, Sentence, Word};

    fn choice(options: &[&str], correct: usize) -> Question {
        Question {
            question: "q".to_string(),
            explanation: "e".to_string(),
            hint: None,
            kind: QuestionKind::Choice(Choices {
                sentence: Sentence::default(),
                options: options.iter().map(|s| s.to_string()).collect(),
                correct,
            }),
        }
    }

    fn word_order(words: &[(&str, u32)], correct: &str) -> Question {
        Question {
            question: "q".to_string(),
            explanation: "e".to_string(),
            hint: None,
            kind: QuestionKind::WordOrder {
                words: words
                    .iter()
                    .map(|(text, order)| Word {
                        text: text.to_string(),
                        order: *order,
                    })
                    .collect(),
                correct: correct.to_string(),
                audio: None,
            },
        }
    }

    fn lesson(id: u32, questions: Vec<Question>) -> Lesson {
        Lesson {
            id,
            title: format!("Lesson {id}"),
            questions,
        }
    }

    #[test]
    fn accepts_valid_catalog() {
        let repo = LessonRepository::new(vec![
            lesson(1, vec![choice(&["a", "b"], 1)]),
            lesson(2, vec![word_order(&[("b", 1), ("a", 0)], "ab")]),
        ])
        .unwrap();

        assert_eq!(repo.lesson_count(), 2);
        assert_eq!(repo.question_count(), 2);
        assert_eq!(repo.lesson(1).unwrap().id, 2);
        assert!(repo.question(1, 0).unwrap().is_word_order());
    }

    #[test]
    fn accessors_report_out_of_range() {
        let repo = LessonRepository::new(vec![lesson(1, vec![choice(&["a"], 0)])]).unwrap();

        assert_eq!(
            repo.lesson(3).unwrap_err(),
            RepositoryError::OutOfRange {
                what: "lesson",
                index: 3,
                len: 1
            }
        );
        assert_eq!(
            repo.question(0, 1).unwrap_err(),
            RepositoryError::OutOfRange {
                what: "question",
                index: 1,
                len: 1
            }
        );
        assert!(repo.question(5, 0).is_err());
    }

    #[test]
    fn rejects_empty_catalog_and_lessons() {
        assert_eq!(LessonRepository::new(vec![]).unwrap_err(), ContentError::NoLessons);
        assert_eq!(
            LessonRepository::new(vec![lesson(4, vec![])]).unwrap_err(),
            ContentError::EmptyLesson { lesson_id: 4 }
        );
    }

    #[test]
    fn rejects_duplicate_lesson_ids() {
        let err = LessonRepository::new(vec![
            lesson(1, vec![choice(&["a"], 0)]),
            lesson(1, vec![choice(&["a"], 0)]),
        ])
        .unwrap_err();

        assert_eq!(err, ContentError::DuplicateLessonId { lesson_id: 1 });
    }

    #[test]
    fn rejects_correct_index_out_of_bounds() {
        let err = LessonRepository::new(vec![lesson(
            7,
            vec![choice(&["a", "b"], 0), choice(&["a", "b"], 2)],
        )])
        .unwrap_err();

        assert_eq!(
            err,
            ContentError::CorrectOutOfRange {
                lesson_id: 7,
                question: 1,
                correct: 2,
                options: 2
            }
        );
    }

    #[test]
    fn rejects_choice_without_options() {
        let err = LessonRepository::new(vec![lesson(1, vec![choice(&[], 0)])]).unwrap_err();
        assert_eq!(
            err,
            ContentError::NoOptions {
                lesson_id: 1,
                question: 0
            }
        );
    }

    #[test]
    fn rejects_unsolvable_word_order() {
        let err = LessonRepository::new(vec![lesson(
            2,
            vec![word_order(&[("学生", 1), ("私は", 0), ("です", 2)], "私は学生だ")],
        )])
        .unwrap_err();

        assert_eq!(
            err,
            ContentError::UnsolvableWordOrder {
                lesson_id: 2,
                question: 0,
                assembled: "私は学生です".to_string(),
                correct: "私は学生だ".to_string(),
            }
        );
    }

    #[test]
    fn word_order_comparison_is_exact() {
        // A trailing space is enough to make the exercise unsolvable.
        let err = LessonRepository::new(vec![lesson(
            1,
            vec![word_order(&[("a", 0), ("b", 1)], "ab ")],
        )])
        .unwrap_err();
        assert!(matches!(err, ContentError::UnsolvableWordOrder { .. }));
    }

    #[test]
    fn rejects_duplicate_word_order_and_empty_words() {
        let err = LessonRepository::new(vec![lesson(
            1,
            vec![word_order(&[("a", 0), ("b", 0)], "ab")],
        )])
        .unwrap_err();
        assert_eq!(
            err,
            ContentError::DuplicateWordOrder {
                lesson_id: 1,
                question: 0,
                order: 0
            }
        );

        let err = LessonRepository::new(vec![lesson(1, vec![word_order(&[], "")])]).unwrap_err();
        assert_eq!(
            err,
            ContentError::NoWords {
                lesson_id: 1,
                question: 0
            }
        );
    }

    #[test]
    fn duplicate_text_words_are_allowed() {
        let repo = LessonRepository::new(vec![lesson(
            1,
            vec![word_order(&[("とても", 1), ("とても", 0), ("です", 2)], "とてもとてもです")],
        )]);
        assert!(repo.is_ok());
    }
}
