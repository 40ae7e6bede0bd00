use serde::{Deserialize, Serialize};

/// One vocabulary entry. `word` is the single correct answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub word: String,
    pub meaning: String,
    #[serde(default)]
    pub example: String,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
}

impl Question {
    pub fn new(word: &str, meaning: &str, example: &str, question: &str) -> Self {
        Self {
            word: word.to_string(),
            meaning: meaning.to_string(),
            example: example.to_string(),
            question: question.to_string(),
            options: Vec::new(),
        }
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        self.word == answer
    }

    pub fn needs_synthesis(&self) -> bool {
        self.options.is_empty()
    }
}

/// Top-level document shape: `{ "vocabulary": [...] }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    pub vocabulary: Vec<Question>,
}
