use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::DatasetError;
use crate::session::question::{Question, Vocabulary};

const SAMPLE_VOCABULARY: &str = include_str!("../assets/vocabulary/sample.json");

/// Read and validate a `{ "vocabulary": [...] }` document from disk.
pub fn load_file(path: &Path) -> Result<Vec<Question>, DatasetError> {
    let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let questions = parse(&content)?;
    tracing::info!(path = %path.display(), count = questions.len(), "loaded vocabulary");
    Ok(questions)
}

pub fn parse(content: &str) -> Result<Vec<Question>, DatasetError> {
    let doc: Vocabulary = serde_json::from_str(content)?;
    validate(&doc)?;
    Ok(doc.vocabulary)
}

/// Structural checks the engine relies on. Empty option lists are allowed;
/// those get synthesized options at quiz time.
pub fn validate(doc: &Vocabulary) -> Result<(), DatasetError> {
    for (index, question) in doc.vocabulary.iter().enumerate() {
        if question.word.trim().is_empty() {
            return Err(DatasetError::EmptyWord { index });
        }
        if question.options.is_empty() {
            continue;
        }

        let mut seen = HashSet::new();
        for option in &question.options {
            if !seen.insert(option.as_str()) {
                return Err(DatasetError::DuplicateOption {
                    index,
                    option: option.clone(),
                });
            }
        }
        if !seen.contains(question.word.as_str()) {
            return Err(DatasetError::MissingCorrectOption {
                index,
                word: question.word.clone(),
            });
        }
    }
    Ok(())
}

/// The sample list shipped with the binary.
pub fn bundled() -> Vec<Question> {
    match parse(SAMPLE_VOCABULARY) {
        Ok(questions) => questions,
        Err(err) => {
            tracing::error!("bundled vocabulary is invalid: {err}");
            Vec::new()
        }
    }
}

pub fn shuffle_questions<R: Rng + ?Sized>(questions: &mut [Question], rng: &mut R) {
    questions.shuffle(rng);
}
