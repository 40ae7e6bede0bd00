use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize,
}

pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let _tx = tx.clone();

        thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    let sent = match event::read() {
                        Ok(Event::Key(key)) => tx.send(AppEvent::Key(key)),
                        Ok(Event::Resize(_, _)) => tx.send(AppEvent::Resize),
                        _ => Ok(()),
                    };
                    if sent.is_err() {
                        return;
                    }
                } else if tx.send(AppEvent::Tick).is_err() {
                    return;
                }
            }
        });

        Self { rx, _tx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}

/// Turns wall-clock time into whole engine ticks. Tick events from the
/// terminal thread are only a wake-up; key traffic would otherwise delay them.
pub struct TickClock {
    period: Duration,
    last: Instant,
    carry: Duration,
}

impl TickClock {
    pub fn new(period: Duration) -> Self {
        Self::starting_at(period, Instant::now())
    }

    pub fn starting_at(period: Duration, now: Instant) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            last: now,
            carry: Duration::ZERO,
        }
    }

    /// Number of ticks that elapsed up to `now`; the remainder carries over.
    pub fn due(&mut self, now: Instant) -> u32 {
        let elapsed = now.saturating_duration_since(self.last) + self.carry;
        self.last = now;
        let ticks = (elapsed.as_nanos() / self.period.as_nanos()) as u32;
        self.carry = elapsed - self.period * ticks;
        ticks
    }

    /// Drop accumulated time, e.g. after a pause or restart.
    pub fn rebase(&mut self, now: Instant) {
        self.last = now;
        self.carry = Duration::ZERO;
    }
}
