//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// An engine operation was invoked in a phase where it does not apply.
/// State is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions loaded")]
    NoQuestions,
    #[error("quiz already completed")]
    Completed,
    #[error("current question already answered")]
    AlreadyAnswered,
    #[error("speed level {0} is outside 1..=3")]
    InvalidSpeedLevel(u8),
    #[error("timer no longer belongs to the active phase")]
    StaleTimer,
    #[error("option {0} does not exist")]
    OptionOutOfRange(usize),
}

/// The question document could not be turned into a usable question list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed vocabulary document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("entry {index} has an empty word")]
    EmptyWord { index: usize },
    #[error("entry {index} lists options without its word {word:?}")]
    MissingCorrectOption { index: usize, word: String },
    #[error("entry {index} repeats option {option:?}")]
    DuplicateOption { index: usize, option: String },
}
