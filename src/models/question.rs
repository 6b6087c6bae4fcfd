use serde::{Deserialize, Serialize};

/// One interactive exercise.
///
/// The prompt, explanation and hint are shared by every variant; everything
/// that differs between exercise types lives in [`QuestionKind`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(flatten)]
    pub kind: QuestionKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum QuestionKind {
    Choice(Choices),
    Translation(Choices),
    Dialogue(Choices),
    VideoChoice(VideoChoices),
    WordOrder {
        words: Vec<Word>,
        correct: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        audio: Option<String>,
    },
}

/// Options shared by every choice-like variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choices {
    #[serde(default)]
    pub sentence: Sentence,
    pub options: Vec<String>,
    pub correct: usize,
}

/// A choice question played against a video clip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoChoices {
    pub video: String,
    #[serde(flatten)]
    pub choices: Choices,
}

/// Fill-in-the-blank template: `prefix ＿＿ suffix`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
}

/// A tile in a word-order exercise. `order` is its canonical position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    pub order: u32,
}

impl Question {
    pub fn choices(&self) -> Option<&Choices> {
        match &self.kind {
            QuestionKind::Choice(choices)
            | QuestionKind::Translation(choices)
            | QuestionKind::Dialogue(choices)
            | QuestionKind::VideoChoice(VideoChoices { choices, .. }) => Some(choices),
            QuestionKind::WordOrder { .. } => None,
        }
    }

    pub fn words(&self) -> Option<&[Word]> {
        match &self.kind {
            QuestionKind::WordOrder { words, .. } => Some(words),
            _ => None,
        }
    }

    pub fn is_word_order(&self) -> bool {
        matches!(self.kind, QuestionKind::WordOrder { .. })
    }

    /// Video or audio reference attached to the question, if any.
    pub fn media(&self) -> Option<&str> {
        match &self.kind {
            QuestionKind::VideoChoice(clip) => Some(&clip.video),
            QuestionKind::WordOrder { audio, .. } => audio.as_deref(),
            _ => None,
        }
    }

    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            QuestionKind::Choice(_) => "choice",
            QuestionKind::Translation(_) => "translation",
            QuestionKind::Dialogue(_) => "dialogue",
            QuestionKind::VideoChoice(_) => "video-choice",
            QuestionKind::WordOrder { .. } => "word-order",
        }
    }
}

impl Choices {
    pub fn is_correct(&self, index: usize) -> bool {
        index == self.correct
    }
}

/// Concatenates the words in canonical (`order`) order.
pub fn canonical_sentence(words: &[Word]) -> String {
    let mut sorted: Vec<&Word> = words.iter().collect();
    sorted.sort_by_key(|word| word.order);
    sorted.iter().map(|word| word.text.as_str()).collect()
}
