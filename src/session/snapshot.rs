use serde::Serialize;

use crate::session::question::Question;

/// Where the quiz stands, as seen from outside the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum QuizPhase {
    NoQuestion,
    Answering,
    Revealing,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerRecord {
    pub question_index: usize,
    pub value: String,
    pub correct: bool,
    /// Auto-submitted when the answering countdown ran out.
    pub timed_out: bool,
}

/// Read-only copy of the session handed to the renderer after each transition.
#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot {
    pub phase: QuizPhase,
    pub question_count: usize,
    pub current_index: usize,
    pub question: Option<Question>,
    pub display_options: Vec<String>,
    pub selected_answer: Option<String>,
    pub is_correct: Option<bool>,
    pub answers: Vec<AnswerRecord>,
    pub score: usize,
    pub is_paused: bool,
    pub speed_level: u8,
    pub completed: bool,
    pub revealing: bool,
    /// Answering countdown; `None` outside the answering phase.
    pub remaining_ms: Option<u64>,
    pub full_duration_ms: u64,
    pub countdown_ratio: f64,
    pub reveal_remaining_ms: Option<u64>,
    pub reveal_duration_ms: u64,
}

impl SessionSnapshot {
    /// 1-based position for "Question n of m" style display.
    pub fn position(&self) -> usize {
        (self.current_index + 1).min(self.question_count)
    }

    pub fn progress(&self) -> f64 {
        if self.question_count == 0 {
            return 0.0;
        }
        self.answers.len() as f64 / self.question_count as f64
    }

    pub fn reveal_ratio(&self) -> f64 {
        match self.reveal_remaining_ms {
            Some(ms) if self.reveal_duration_ms > 0 => {
                (ms as f64 / self.reveal_duration_ms as f64).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }
}
