use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::{ContentError, LessonRepository};
use crate::models::Lesson;

const BUILTIN_LESSONS: &str = include_str!("../../content/lessons.json");

/// Failure to turn a lesson file into a playable repository.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid lesson content in {origin}: {source}")]
    Content {
        origin: String,
        #[source]
        source: ContentError,
    },
}

/// Read a JSON array of lessons from `path` and validate it.
pub fn load_lessons_from_json<P: AsRef<Path>>(path: P) -> Result<LessonRepository, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let repo = parse_lessons(&json_content, &path.display().to_string())?;
    log::info!(
        "loaded {} lessons ({} questions) from {}",
        repo.lesson_count(),
        repo.question_count(),
        path.display()
    );
    Ok(repo)
}

/// Parse and validate lesson JSON. `origin` names the source in errors.
pub fn parse_lessons(json: &str, origin: &str) -> Result<LessonRepository, LoadError> {
    let lessons: Vec<Lesson> = serde_json::from_str(json).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    LessonRepository::new(lessons).map_err(|source| LoadError::Content {
        origin: origin.to_string(),
        source,
    })
}

impl LessonRepository {
    /// The lesson set bundled with the binary.
    pub fn builtin() -> Result<Self, LoadError> {
        parse_lessons(BUILTIN_LESSONS, "built-in lessons")
    }
}
