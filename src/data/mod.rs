mod loader;
mod repository;

pub use loader::{load_lessons_from_json, parse_lessons, LoadError};
pub use repository::{ContentError, LessonRepository, RepositoryError};
