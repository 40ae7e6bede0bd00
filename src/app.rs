use std::time::{Duration, Instant};

use rand::rngs::SmallRng;

use crate::config::Config;
use crate::event::TickClock;
use crate::session::engine::QuizEngine;
use crate::session::question::Question;
use crate::session::result::QuizSummary;
use crate::session::snapshot::SessionSnapshot;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    Quiz,
    Summary,
}

pub struct App<R = SmallRng> {
    pub screen: AppScreen,
    pub snapshot: SessionSnapshot,
    pub summary: Option<QuizSummary>,
    pub theme: Theme,
    pub config: Config,
    pub source_label: String,
    pub should_quit: bool,
    engine: QuizEngine<R>,
    clock: TickClock,
}

impl App<SmallRng> {
    pub fn new(config: Config, questions: Vec<Question>, source_label: String) -> Self {
        let engine = QuizEngine::new(config.timings()).with_speed_level(config.speed());
        Self::with_engine(config, engine, questions, source_label)
    }
}

impl<R: rand::Rng> App<R> {
    pub fn with_engine(
        config: Config,
        mut engine: QuizEngine<R>,
        questions: Vec<Question>,
        source_label: String,
    ) -> Self {
        let theme = Theme::load(&config.theme).unwrap_or_default();
        let clock = TickClock::new(Duration::from_millis(config.tick_ms));
        engine.load(questions);
        let snapshot = engine.snapshot();

        let mut app = Self {
            screen: AppScreen::Quiz,
            snapshot,
            summary: None,
            theme,
            config,
            source_label,
            should_quit: false,
            engine,
            clock,
        };
        app.refresh();
        app
    }

    /// Re-read the engine after a transition and follow it to the summary.
    fn refresh(&mut self) {
        self.snapshot = self.engine.snapshot();
        if self.snapshot.completed && self.screen == AppScreen::Quiz {
            self.summary = Some(QuizSummary::from_snapshot(
                &self.snapshot,
                self.engine.questions(),
            ));
            self.screen = AppScreen::Summary;
        }
    }

    pub fn on_tick(&mut self, now: Instant) {
        let due = self.clock.due(now);
        if due == 0 {
            return;
        }
        for _ in 0..due {
            self.engine.tick();
            if self.engine.is_completed() {
                break;
            }
        }
        self.refresh();
    }

    pub fn select_option(&mut self, index: usize) {
        if let Err(err) = self.engine.select_option(index) {
            tracing::debug!("select ignored: {err}");
        }
        self.refresh();
    }

    pub fn advance(&mut self) {
        if let Err(err) = self.engine.advance() {
            tracing::debug!("advance ignored: {err}");
        }
        self.refresh();
    }

    pub fn toggle_pause(&mut self, now: Instant) {
        self.engine.toggle_pause();
        self.clock.rebase(now);
        self.refresh();
    }

    pub fn cycle_speed(&mut self) {
        let speed = self.engine.cycle_speed();
        self.config.speed_level = speed.get();
        self.refresh();
    }

    pub fn restart(&mut self, now: Instant) {
        if let Err(err) = self.engine.reset() {
            tracing::debug!("restart ignored: {err}");
        }
        self.clock.rebase(now);
        self.summary = None;
        self.screen = AppScreen::Quiz;
        self.refresh();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
