pub mod countdown;
pub mod engine;
pub mod options;
pub mod question;
pub mod result;
pub mod snapshot;

pub use countdown::{Phase, PhaseToken, SpeedLevel, TickOutcome, Timings};
pub use engine::QuizEngine;
pub use question::{Question, Vocabulary};
pub use snapshot::{AnswerRecord, QuizPhase, SessionSnapshot};
