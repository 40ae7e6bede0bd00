use serde::Serialize;

use crate::session::question::Question;
use crate::session::snapshot::SessionSnapshot;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MissedWord {
    pub word: String,
    pub meaning: String,
    /// What was chosen instead; `None` when the question was skipped.
    pub answered: Option<String>,
}

/// End-of-quiz numbers for the summary screen.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub answered: usize,
    pub timed_out: usize,
    pub skipped: usize,
    pub accuracy: f64,
    pub missed: Vec<MissedWord>,
}

impl QuizSummary {
    pub fn from_snapshot(snapshot: &SessionSnapshot, questions: &[Question]) -> Self {
        let total = questions.len();
        let answered = snapshot.answers.len();
        let timed_out = snapshot.answers.iter().filter(|a| a.timed_out).count();

        let mut missed = Vec::new();
        for (index, question) in questions.iter().enumerate() {
            let answer = snapshot.answers.iter().find(|a| a.question_index == index);
            match answer {
                Some(a) if a.correct => {}
                Some(a) => missed.push(MissedWord {
                    word: question.word.clone(),
                    meaning: question.meaning.clone(),
                    answered: Some(a.value.clone()),
                }),
                // only questions the quiz actually moved past count as skipped
                None if index < snapshot.current_index || snapshot.completed => {
                    missed.push(MissedWord {
                        word: question.word.clone(),
                        meaning: question.meaning.clone(),
                        answered: None,
                    })
                }
                None => {}
            }
        }
        let skipped = missed.iter().filter(|m| m.answered.is_none()).count();

        let accuracy = if total > 0 {
            (snapshot.score as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        Self {
            score: snapshot.score,
            total,
            answered,
            timed_out,
            skipped,
            accuracy,
            missed,
        }
    }
}
