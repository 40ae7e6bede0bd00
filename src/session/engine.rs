use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::error::QuizError;
use crate::session::countdown::{
    COUNTDOWN_SCALE, Countdown, Phase, PhaseToken, SpeedLevel, TickOutcome, Timings,
};
use crate::session::options::build_display_options;
use crate::session::question::Question;
use crate::session::snapshot::{AnswerRecord, QuizPhase, SessionSnapshot};

/// The quiz session state machine.
///
/// Every public operation is one serialized transition. Rejected operations
/// return a [`QuizError`] and leave the session exactly as it was.
pub struct QuizEngine<R = SmallRng> {
    questions: Vec<Question>,
    loaded: bool,
    current_index: usize,
    answers: Vec<AnswerRecord>,
    score: usize,
    selected_answer: Option<String>,
    is_correct: Option<bool>,
    display_options: Vec<String>,
    is_paused: bool,
    speed_level: SpeedLevel,
    completed: bool,
    countdown: Countdown,
    rng: R,
}

impl QuizEngine<SmallRng> {
    pub fn new(timings: Timings) -> Self {
        Self::with_rng(timings, SmallRng::from_entropy())
    }
}

impl Default for QuizEngine<SmallRng> {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

/// Milliseconds left for `remaining` countdown units of a `full_ms` phase.
fn scaled_ms(remaining: u64, full_ms: u64) -> u64 {
    let ms = remaining as u128 * full_ms as u128 / COUNTDOWN_SCALE as u128;
    u64::try_from(ms).unwrap_or(u64::MAX)
}

impl<R: Rng> QuizEngine<R> {
    /// Engine with an injected random source, for reproducible option order.
    pub fn with_rng(timings: Timings, rng: R) -> Self {
        Self {
            questions: Vec::new(),
            loaded: false,
            current_index: 0,
            answers: Vec::new(),
            score: 0,
            selected_answer: None,
            is_correct: None,
            display_options: Vec::new(),
            is_paused: false,
            speed_level: SpeedLevel::default(),
            completed: false,
            countdown: Countdown::new(timings),
            rng,
        }
    }

    pub fn with_speed_level(mut self, speed: SpeedLevel) -> Self {
        self.speed_level = speed;
        self
    }

    /// Replace the whole session with a fresh one over `questions`.
    pub fn load(&mut self, questions: Vec<Question>) {
        tracing::info!(count = questions.len(), "loading questions");
        self.questions = questions;
        self.loaded = true;
        self.restart();
    }

    /// Back to the post-load state with the same questions.
    pub fn reset(&mut self) -> Result<(), QuizError> {
        if !self.loaded {
            return Err(self.reject(QuizError::NoQuestions, "reset"));
        }
        tracing::info!("restarting quiz");
        self.restart();
        Ok(())
    }

    fn restart(&mut self) {
        self.countdown.cancel();
        self.current_index = 0;
        self.answers.clear();
        self.score = 0;
        self.selected_answer = None;
        self.is_correct = None;
        self.display_options.clear();
        self.is_paused = false;

        if self.questions.is_empty() {
            tracing::info!("empty question list, quiz completes immediately");
            self.completed = true;
            return;
        }
        self.completed = false;
        self.activate_current();
    }

    /// Freeze the option order for the current question and start its countdown.
    fn activate_current(&mut self) {
        self.display_options =
            build_display_options(&self.questions, self.current_index, &mut self.rng);
        self.countdown
            .arm_answering(self.current_index, self.is_paused);
    }

    pub fn select_answer(&mut self, value: &str) -> Result<(), QuizError> {
        self.ensure_answerable("select_answer")?;
        self.submit(value.to_string(), false);
        Ok(())
    }

    /// Select by position in the frozen display order.
    pub fn select_option(&mut self, index: usize) -> Result<(), QuizError> {
        self.ensure_answerable("select_option")?;
        let Some(value) = self.display_options.get(index).cloned() else {
            return Err(self.reject(QuizError::OptionOutOfRange(index), "select_option"));
        };
        self.submit(value, false);
        Ok(())
    }

    fn ensure_answerable(&self, op: &'static str) -> Result<(), QuizError> {
        if !self.loaded {
            return Err(self.reject(QuizError::NoQuestions, op));
        }
        if self.completed {
            return Err(self.reject(QuizError::Completed, op));
        }
        if self.selected_answer.is_some() {
            return Err(self.reject(QuizError::AlreadyAnswered, op));
        }
        Ok(())
    }

    fn submit(&mut self, value: String, timed_out: bool) {
        let correct = self.questions[self.current_index].is_correct(&value);
        if correct {
            self.score += 1;
        }
        tracing::debug!(
            index = self.current_index,
            answer = %value,
            correct,
            timed_out,
            "answer submitted"
        );
        self.answers.push(AnswerRecord {
            question_index: self.current_index,
            value: value.clone(),
            correct,
            timed_out,
        });
        self.selected_answer = Some(value);
        self.is_correct = Some(correct);
        self.countdown.arm_reveal(self.current_index, self.is_paused);
    }

    /// Move to the next question, or complete the quiz from the last one.
    /// User skips and reveal expiry both land here.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        if !self.loaded {
            return Err(self.reject(QuizError::NoQuestions, "advance"));
        }
        if self.completed {
            return Err(self.reject(QuizError::Completed, "advance"));
        }

        if self.current_index + 1 >= self.questions.len() {
            self.countdown.cancel();
            self.completed = true;
            tracing::info!(
                score = self.score,
                total = self.questions.len(),
                "quiz completed"
            );
            return Ok(());
        }

        self.current_index += 1;
        self.selected_answer = None;
        self.is_correct = None;
        self.display_options.clear();
        self.activate_current();
        Ok(())
    }

    pub fn toggle_pause(&mut self) {
        self.is_paused = !self.is_paused;
        if self.is_paused {
            self.countdown.suspend();
        } else {
            self.countdown.resume();
        }
        tracing::debug!(paused = self.is_paused, "pause toggled");
    }

    pub fn set_speed_level(&mut self, level: u8) -> Result<(), QuizError> {
        let Some(speed) = SpeedLevel::new(level) else {
            return Err(self.reject(QuizError::InvalidSpeedLevel(level), "set_speed_level"));
        };
        self.speed_level = speed;
        Ok(())
    }

    pub fn cycle_speed(&mut self) -> SpeedLevel {
        self.speed_level = self.speed_level.next();
        tracing::debug!(level = self.speed_level.get(), "speed level changed");
        self.speed_level
    }

    /// Advance the active phase timer by one tick, applying its expiry.
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.countdown.tick(self.speed_level);
        if let TickOutcome::Fired(token) = outcome {
            // a token fresh from the countdown is always current
            let _ = self.fire(token);
        }
        outcome
    }

    /// Deliver a timer expiry. Tokens from a superseded question or phase
    /// are rejected without touching the session.
    pub fn fire(&mut self, token: PhaseToken) -> Result<(), QuizError> {
        if !self.countdown.is_current(token) || token.question_index != self.current_index {
            tracing::debug!(?token, "ignoring stale timer");
            return Err(QuizError::StaleTimer);
        }

        match token.phase {
            Phase::Answering => {
                if self.selected_answer.is_some() || self.completed {
                    return Err(self.reject(QuizError::StaleTimer, "fire"));
                }
                let word = self.questions[self.current_index].word.clone();
                tracing::debug!(index = self.current_index, "answer time ran out");
                self.submit(word, true);
                Ok(())
            }
            Phase::Revealing => self.advance(),
        }
    }

    fn reject(&self, err: QuizError, op: &'static str) -> QuizError {
        tracing::debug!(op, phase = ?self.phase(), "ignored: {err}");
        err
    }

    pub fn phase(&self) -> QuizPhase {
        if !self.loaded {
            QuizPhase::NoQuestion
        } else if self.completed {
            QuizPhase::Completed
        } else if self.selected_answer.is_some() {
            QuizPhase::Revealing
        } else {
            QuizPhase::Answering
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.completed {
            return None;
        }
        self.questions.get(self.current_index)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_revealing(&self) -> bool {
        self.selected_answer.is_some() && !self.completed
    }

    pub fn speed_level(&self) -> SpeedLevel {
        self.speed_level
    }

    /// The live timer's token, if a phase timer is currently running.
    pub fn active_token(&self) -> Option<PhaseToken> {
        self.countdown.current_token()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let timings = self.countdown.timings();
        let full_duration_ms = timings.answer_duration_ms(self.speed_level);
        let answer_remaining = self.countdown.answer_remaining();

        SessionSnapshot {
            phase: self.phase(),
            question_count: self.questions.len(),
            current_index: self.current_index,
            question: self.current_question().cloned(),
            display_options: self.display_options.clone(),
            selected_answer: self.selected_answer.clone(),
            is_correct: self.is_correct,
            answers: self.answers.clone(),
            score: self.score,
            is_paused: self.is_paused,
            speed_level: self.speed_level.get(),
            completed: self.completed,
            revealing: self.is_revealing(),
            remaining_ms: answer_remaining.map(|r| scaled_ms(r, full_duration_ms)),
            full_duration_ms,
            countdown_ratio: answer_remaining
                .map(|r| r as f64 / COUNTDOWN_SCALE as f64)
                .unwrap_or(0.0),
            reveal_remaining_ms: self.countdown.reveal_remaining_ms(),
            reveal_duration_ms: timings.reveal_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::countdown::{ANSWER_BASE_MS, REVEAL_MS, TICK_MS};

    fn q(word: &str) -> Question {
        Question::new(word, &format!("meaning of {word}"), "", "Which word?")
    }

    fn engine_with(words: &[&str]) -> QuizEngine<SmallRng> {
        let mut engine = QuizEngine::with_rng(Timings::default(), SmallRng::seed_from_u64(11));
        engine.load(words.iter().map(|w| q(w)).collect());
        engine
    }

    fn run_ticks<R: Rng>(engine: &mut QuizEngine<R>, n: u64) {
        for _ in 0..n {
            engine.tick();
            assert_invariants(&engine.snapshot(), engine.questions());
        }
    }

    fn assert_invariants(snap: &SessionSnapshot, questions: &[Question]) {
        assert_eq!(snap.selected_answer.is_some(), snap.is_correct.is_some());
        assert_eq!(
            snap.revealing,
            snap.selected_answer.is_some() && !snap.completed
        );
        let expected_score = snap
            .answers
            .iter()
            .filter(|a| questions[a.question_index].word == a.value)
            .count();
        assert_eq!(snap.score, expected_score);
        assert!(snap.current_index <= snap.question_count);
    }

    const REVEAL_TICKS: u64 = REVEAL_MS / TICK_MS;
    const ANSWER_TICKS: u64 = ANSWER_BASE_MS / TICK_MS;

    #[test]
    fn fresh_engine_has_no_question() {
        let engine = QuizEngine::with_rng(Timings::default(), SmallRng::seed_from_u64(1));
        let snap = engine.snapshot();
        assert_eq!(snap.phase, QuizPhase::NoQuestion);
        assert!(!snap.completed);
        assert!(snap.question.is_none());
    }

    #[test]
    fn operations_before_load_are_rejected_without_effect() {
        let mut engine = QuizEngine::with_rng(Timings::default(), SmallRng::seed_from_u64(1));
        assert_eq!(engine.select_answer("cat"), Err(QuizError::NoQuestions));
        assert_eq!(engine.select_option(0), Err(QuizError::NoQuestions));
        assert_eq!(engine.advance(), Err(QuizError::NoQuestions));
        assert_eq!(engine.reset(), Err(QuizError::NoQuestions));
        assert_eq!(engine.tick(), TickOutcome::Idle);
        let snap = engine.snapshot();
        assert_eq!(snap.score, 0);
        assert!(snap.answers.is_empty());
    }

    #[test]
    fn load_starts_answering_first_question() {
        let engine = engine_with(&["cat", "dog", "owl", "fox"]);
        let snap = engine.snapshot();
        assert_eq!(snap.phase, QuizPhase::Answering);
        assert_eq!(snap.current_index, 0);
        assert_eq!(snap.score, 0);
        assert!(snap.answers.is_empty());
        assert!(!snap.completed);
        assert_eq!(snap.display_options.len(), 4);
        assert_eq!(snap.remaining_ms, Some(ANSWER_BASE_MS));
        assert_eq!(snap.countdown_ratio, 1.0);
    }

    #[test]
    fn empty_load_completes_immediately() {
        let mut engine = engine_with(&[]);
        let snap = engine.snapshot();
        assert!(snap.completed);
        assert_eq!(snap.phase, QuizPhase::Completed);
        assert_eq!(snap.score, 0);
        assert_eq!(engine.select_answer("x"), Err(QuizError::Completed));
        assert_eq!(engine.advance(), Err(QuizError::Completed));
    }

    #[test]
    fn correct_selection_scores_and_reveals() {
        let mut engine = engine_with(&["cat", "dog"]);
        engine.select_answer("cat").unwrap();
        let snap = engine.snapshot();
        assert_eq!(snap.score, 1);
        assert!(snap.revealing);
        assert_eq!(snap.is_correct, Some(true));
        assert_eq!(snap.phase, QuizPhase::Revealing);
        assert_eq!(snap.reveal_remaining_ms, Some(REVEAL_MS));
        assert_eq!(snap.remaining_ms, None);
    }

    #[test]
    fn wrong_selection_records_without_scoring() {
        let mut engine = engine_with(&["cat", "dog"]);
        engine.select_answer("dog").unwrap();
        let snap = engine.snapshot();
        assert_eq!(snap.score, 0);
        assert_eq!(snap.is_correct, Some(false));
        assert_eq!(snap.answers.len(), 1);
        assert!(!snap.answers[0].correct);
    }

    #[test]
    fn second_selection_is_ignored() {
        let mut engine = engine_with(&["cat", "dog"]);
        engine.select_answer("cat").unwrap();
        assert_eq!(engine.select_answer("cat"), Err(QuizError::AlreadyAnswered));
        assert_eq!(engine.select_option(0), Err(QuizError::AlreadyAnswered));
        let snap = engine.snapshot();
        assert_eq!(snap.score, 1);
        assert_eq!(snap.answers.len(), 1);
    }

    #[test]
    fn select_option_uses_frozen_order() {
        let mut engine = engine_with(&["cat", "dog", "owl"]);
        let options = engine.snapshot().display_options;
        assert_eq!(engine.snapshot().display_options, options);

        engine.select_option(1).unwrap();
        assert_eq!(engine.snapshot().selected_answer.as_deref(), Some(options[1].as_str()));
    }

    #[test]
    fn select_option_out_of_range_is_rejected() {
        let mut engine = engine_with(&["cat", "dog"]);
        assert_eq!(engine.select_option(7), Err(QuizError::OptionOutOfRange(7)));
        assert!(engine.snapshot().selected_answer.is_none());
    }

    #[test]
    fn options_stay_frozen_across_ticks() {
        let mut engine = engine_with(&["cat", "dog", "owl", "fox", "elk"]);
        let options = engine.snapshot().display_options;
        run_ticks(&mut engine, 10);
        assert_eq!(engine.snapshot().display_options, options);
    }

    #[test]
    fn timeout_selects_the_correct_word() {
        let mut engine = engine_with(&["cat", "dog"]);
        run_ticks(&mut engine, ANSWER_TICKS - 1);
        assert!(engine.snapshot().selected_answer.is_none());

        run_ticks(&mut engine, 1);
        let snap = engine.snapshot();
        assert_eq!(snap.selected_answer.as_deref(), Some("cat"));
        assert_eq!(snap.is_correct, Some(true));
        assert_eq!(snap.score, 1);
        assert!(snap.answers[0].timed_out);
        assert!(snap.revealing);
    }

    #[test]
    fn reveal_expiry_advances() {
        let mut engine = engine_with(&["cat", "dog"]);
        engine.select_answer("dog").unwrap();
        run_ticks(&mut engine, REVEAL_TICKS - 1);
        assert_eq!(engine.snapshot().current_index, 0);

        run_ticks(&mut engine, 1);
        let snap = engine.snapshot();
        assert_eq!(snap.current_index, 1);
        assert!(snap.selected_answer.is_none());
        assert_eq!(snap.phase, QuizPhase::Answering);
    }

    #[test]
    fn skip_and_reveal_expiry_converge() {
        let mut skipped = engine_with(&["cat", "dog", "owl"]);
        let mut waited = engine_with(&["cat", "dog", "owl"]);
        skipped.select_answer("cat").unwrap();
        waited.select_answer("cat").unwrap();

        skipped.advance().unwrap();
        run_ticks(&mut waited, REVEAL_TICKS);

        let a = skipped.snapshot();
        let b = waited.snapshot();
        assert_eq!(a.current_index, b.current_index);
        assert_eq!(a.score, b.score);
        assert_eq!(a.answers, b.answers);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.selected_answer, b.selected_answer);
        assert_eq!(a.remaining_ms, b.remaining_ms);
        // same seed, same number of option draws
        assert_eq!(a.display_options, b.display_options);
    }

    #[test]
    fn advance_on_last_question_completes_once() {
        let mut engine = engine_with(&["cat"]);
        engine.select_answer("cat").unwrap();
        engine.advance().unwrap();
        let snap = engine.snapshot();
        assert!(snap.completed);
        assert!(!snap.revealing);
        assert_eq!(snap.phase, QuizPhase::Completed);

        assert_eq!(engine.advance(), Err(QuizError::Completed));
        run_ticks(&mut engine, REVEAL_TICKS * 2);
        let after = engine.snapshot();
        assert_eq!(after.current_index, snap.current_index);
        assert_eq!(after.score, snap.score);
        assert!(after.completed);
    }

    #[test]
    fn skipping_unanswered_question_records_nothing() {
        let mut engine = engine_with(&["cat", "dog"]);
        engine.advance().unwrap();
        let snap = engine.snapshot();
        assert_eq!(snap.current_index, 1);
        assert!(snap.answers.is_empty());

        engine.select_answer("dog").unwrap();
        let snap = engine.snapshot();
        assert_eq!(snap.score, 1);
        assert_eq!(snap.answers[0].question_index, 1);
        assert_invariants(&snap, engine.questions());
    }

    #[test]
    fn stale_answering_token_cannot_fire_after_selection() {
        let mut engine = engine_with(&["cat", "dog"]);
        let token = engine.active_token().unwrap();
        engine.select_answer("dog").unwrap();

        assert_eq!(engine.fire(token), Err(QuizError::StaleTimer));
        let snap = engine.snapshot();
        assert_eq!(snap.answers.len(), 1);
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn stale_reveal_token_cannot_skip_next_question() {
        let mut engine = engine_with(&["cat", "dog", "owl"]);
        engine.select_answer("cat").unwrap();
        let reveal = engine.active_token().unwrap();
        engine.advance().unwrap();

        assert_eq!(engine.fire(reveal), Err(QuizError::StaleTimer));
        assert_eq!(engine.snapshot().current_index, 1);
    }

    #[test]
    fn tokens_from_before_a_pause_are_stale() {
        let mut engine = engine_with(&["cat", "dog"]);
        let token = engine.active_token().unwrap();
        engine.toggle_pause();
        engine.toggle_pause();
        assert_eq!(engine.fire(token), Err(QuizError::StaleTimer));
        assert!(engine.snapshot().selected_answer.is_none());
    }

    #[test]
    fn current_token_fires_like_a_timeout() {
        let mut engine = engine_with(&["cat", "dog"]);
        let token = engine.active_token().unwrap();
        engine.fire(token).unwrap();
        let snap = engine.snapshot();
        assert_eq!(snap.selected_answer.as_deref(), Some("cat"));
        assert!(snap.answers[0].timed_out);
    }

    #[test]
    fn pause_freezes_answering_countdown() {
        let mut engine = engine_with(&["cat", "dog"]);
        run_ticks(&mut engine, 10);
        let before = engine.snapshot().remaining_ms;

        engine.toggle_pause();
        run_ticks(&mut engine, ANSWER_TICKS * 3);
        let snap = engine.snapshot();
        assert!(snap.is_paused);
        assert_eq!(snap.remaining_ms, before);
        assert!(snap.selected_answer.is_none());

        engine.toggle_pause();
        assert_eq!(engine.snapshot().remaining_ms, before);
        run_ticks(&mut engine, ANSWER_TICKS - 10);
        assert_eq!(engine.snapshot().selected_answer.as_deref(), Some("cat"));
    }

    #[test]
    fn pause_during_reveal_restarts_full_window() {
        let mut engine = engine_with(&["cat", "dog"]);
        engine.select_answer("cat").unwrap();
        run_ticks(&mut engine, REVEAL_TICKS - 1);

        engine.toggle_pause();
        run_ticks(&mut engine, REVEAL_TICKS);
        assert_eq!(engine.snapshot().current_index, 0);

        engine.toggle_pause();
        assert_eq!(engine.snapshot().reveal_remaining_ms, Some(REVEAL_MS));
        run_ticks(&mut engine, 1);
        assert_eq!(engine.snapshot().current_index, 0, "no early advance on resume");

        run_ticks(&mut engine, REVEAL_TICKS - 2);
        assert_eq!(engine.snapshot().current_index, 0);
        run_ticks(&mut engine, 1);
        assert_eq!(engine.snapshot().current_index, 1);
    }

    #[test]
    fn pause_does_not_touch_progress() {
        let mut engine = engine_with(&["cat", "dog"]);
        engine.select_answer("dog").unwrap();
        let before = engine.snapshot();
        engine.toggle_pause();
        let after = engine.snapshot();
        assert_eq!(before.current_index, after.current_index);
        assert_eq!(before.selected_answer, after.selected_answer);
        assert_eq!(before.answers, after.answers);
        assert!(after.is_paused);
    }

    #[test]
    fn user_actions_while_paused_keep_timers_suspended() {
        let mut engine = engine_with(&["cat", "dog"]);
        engine.toggle_pause();
        engine.select_answer("cat").unwrap();
        run_ticks(&mut engine, REVEAL_TICKS * 2);
        assert_eq!(engine.snapshot().current_index, 0);

        engine.advance().unwrap();
        run_ticks(&mut engine, ANSWER_TICKS * 2);
        let snap = engine.snapshot();
        assert_eq!(snap.current_index, 1);
        assert!(snap.selected_answer.is_none());
        assert_eq!(snap.remaining_ms, Some(ANSWER_BASE_MS));
    }

    #[test]
    fn speed_change_keeps_displayed_countdown_continuous() {
        let mut engine = engine_with(&["cat", "dog"]);
        run_ticks(&mut engine, 25);
        let ratio_before = engine.snapshot().countdown_ratio;
        assert_eq!(ratio_before, 0.5);

        engine.set_speed_level(3).unwrap();
        let snap = engine.snapshot();
        assert_eq!(snap.countdown_ratio, ratio_before);
        assert_eq!(snap.full_duration_ms, 3 * ANSWER_BASE_MS);

        // half of a 15s window at 100ms per tick
        run_ticks(&mut engine, 74);
        assert!(engine.snapshot().selected_answer.is_none());
        run_ticks(&mut engine, 1);
        assert_eq!(engine.snapshot().selected_answer.as_deref(), Some("cat"));
    }

    #[test]
    fn speed_level_cycles_and_rejects_out_of_range() {
        let mut engine = engine_with(&["cat"]);
        assert_eq!(engine.cycle_speed().get(), 2);
        assert_eq!(engine.cycle_speed().get(), 3);
        assert_eq!(engine.cycle_speed().get(), 1);
        assert_eq!(engine.set_speed_level(4), Err(QuizError::InvalidSpeedLevel(4)));
        assert_eq!(engine.speed_level().get(), 1);
    }

    #[test]
    fn reset_keeps_questions_and_clears_progress() {
        let mut engine = engine_with(&["cat", "dog"]);
        engine.select_answer("cat").unwrap();
        engine.advance().unwrap();
        engine.select_answer("cat").unwrap();
        engine.advance().unwrap();
        assert!(engine.is_completed());

        engine.reset().unwrap();
        let snap = engine.snapshot();
        assert_eq!(snap.phase, QuizPhase::Answering);
        assert_eq!(snap.question_count, 2);
        assert_eq!(snap.current_index, 0);
        assert_eq!(snap.score, 0);
        assert!(snap.answers.is_empty());
        assert_eq!(snap.remaining_ms, Some(ANSWER_BASE_MS));
    }

    #[test]
    fn reload_replaces_session() {
        let mut engine = engine_with(&["cat", "dog"]);
        engine.select_answer("cat").unwrap();
        let stale = engine.active_token().unwrap();

        engine.load(vec![q("owl"), q("fox"), q("elk")]);
        assert_eq!(engine.fire(stale), Err(QuizError::StaleTimer));
        let snap = engine.snapshot();
        assert_eq!(snap.question_count, 3);
        assert_eq!(snap.question.unwrap().word, "owl");
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn two_question_walkthrough() {
        let mut engine = engine_with(&["cat", "dog"]);

        engine.select_answer("cat").unwrap();
        let snap = engine.snapshot();
        assert_eq!(snap.score, 1);
        assert!(snap.revealing);

        engine.advance().unwrap();
        let snap = engine.snapshot();
        assert_eq!(snap.current_index, 1);
        assert!(snap.selected_answer.is_none());

        run_ticks(&mut engine, ANSWER_TICKS);
        let snap = engine.snapshot();
        assert_eq!(snap.selected_answer.as_deref(), Some("dog"));
        assert_eq!(snap.score, 2);

        engine.advance().unwrap();
        assert!(engine.snapshot().completed);
    }
}
