use serde::{Deserialize, Serialize};

pub const TICK_MS: u64 = 100;
pub const ANSWER_BASE_MS: u64 = 5000;
pub const REVEAL_MS: u64 = 5000;

/// Fixed-point denominator for the answering countdown. Divisible by the
/// per-tick step of every speed level at the default timings, so the bar
/// lands exactly on zero.
pub const COUNTDOWN_SCALE: u64 = 3_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;

    pub fn new(level: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&level).then_some(Self(level))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// 1 -> 2 -> 3 -> 1
    pub fn next(self) -> Self {
        if self.0 >= Self::MAX {
            Self(Self::MIN)
        } else {
            Self(self.0 + 1)
        }
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    pub tick_ms: u64,
    pub answer_base_ms: u64,
    pub reveal_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            answer_base_ms: ANSWER_BASE_MS,
            reveal_ms: REVEAL_MS,
        }
    }
}

impl Timings {
    pub fn answer_duration_ms(&self, speed: SpeedLevel) -> u64 {
        (speed.get() as u64).saturating_mul(self.answer_base_ms)
    }

    /// Scaled amount removed from the answering countdown per tick.
    fn answer_step(&self, speed: SpeedLevel) -> u64 {
        let duration = self.answer_duration_ms(speed).max(1);
        let step = (COUNTDOWN_SCALE as u128 * self.tick_ms as u128).div_ceil(duration as u128);
        step.clamp(1, COUNTDOWN_SCALE as u128) as u64
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Answering,
    Revealing,
}

/// Identity of one armed phase. Every arm, suspend or cancel bumps the
/// generation, so a token taken before that point can never match again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PhaseToken {
    pub generation: u64,
    pub question_index: usize,
    pub phase: Phase,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Timer {
    Answering { remaining: u64 },
    Revealing { remaining_ms: u64 },
}

impl Timer {
    fn phase(self) -> Phase {
        match self {
            Timer::Answering { .. } => Phase::Answering,
            Timer::Revealing { .. } => Phase::Revealing,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerState {
    Idle,
    Running { token: PhaseToken, timer: Timer },
    /// Reached zero; the token stays current until the owner acts on it.
    Expired { token: PhaseToken },
    Suspended { question_index: usize, timer: Timer },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Running,
    Fired(PhaseToken),
}

/// Two mutually exclusive timers per question: the answering countdown and
/// the reveal window. Driven one tick at a time by the owner.
#[derive(Clone, Debug)]
pub struct Countdown {
    timings: Timings,
    generation: u64,
    state: TimerState,
}

impl Countdown {
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            generation: 0,
            state: TimerState::Idle,
        }
    }

    pub fn timings(&self) -> Timings {
        self.timings
    }

    pub fn arm_answering(&mut self, question_index: usize, suspended: bool) -> Option<PhaseToken> {
        let timer = Timer::Answering {
            remaining: COUNTDOWN_SCALE,
        };
        self.arm(question_index, timer, suspended)
    }

    pub fn arm_reveal(&mut self, question_index: usize, suspended: bool) -> Option<PhaseToken> {
        let timer = Timer::Revealing {
            remaining_ms: self.timings.reveal_ms,
        };
        self.arm(question_index, timer, suspended)
    }

    fn arm(&mut self, question_index: usize, timer: Timer, suspended: bool) -> Option<PhaseToken> {
        self.generation += 1;
        if suspended {
            self.state = TimerState::Suspended {
                question_index,
                timer,
            };
            return None;
        }
        let token = PhaseToken {
            generation: self.generation,
            question_index,
            phase: timer.phase(),
        };
        self.state = TimerState::Running { token, timer };
        Some(token)
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
        self.state = TimerState::Idle;
    }

    /// Stop the running timer. Answering progress is kept; an expired timer
    /// is parked at zero so resuming fires it again.
    pub fn suspend(&mut self) {
        self.generation += 1;
        self.state = match self.state {
            TimerState::Running { token, timer } => TimerState::Suspended {
                question_index: token.question_index,
                timer,
            },
            TimerState::Expired { token } => TimerState::Suspended {
                question_index: token.question_index,
                timer: match token.phase {
                    Phase::Answering => Timer::Answering { remaining: 0 },
                    Phase::Revealing => Timer::Revealing { remaining_ms: 0 },
                },
            },
            other => other,
        };
    }

    /// Start a fresh schedule from the suspended one. The reveal window always
    /// restarts at its full length; answering continues where it stopped.
    pub fn resume(&mut self) -> Option<PhaseToken> {
        let TimerState::Suspended {
            question_index,
            timer,
        } = self.state
        else {
            return None;
        };
        let timer = match timer {
            Timer::Answering { .. } => timer,
            Timer::Revealing { .. } => Timer::Revealing {
                remaining_ms: self.timings.reveal_ms,
            },
        };
        self.arm(question_index, timer, false)
    }

    pub fn tick(&mut self, speed: SpeedLevel) -> TickOutcome {
        let TimerState::Running { token, timer } = self.state else {
            return TickOutcome::Idle;
        };

        let (timer, expired) = match timer {
            Timer::Answering { remaining } => {
                let remaining = remaining.saturating_sub(self.timings.answer_step(speed));
                (Timer::Answering { remaining }, remaining == 0)
            }
            Timer::Revealing { remaining_ms } => {
                let remaining_ms = remaining_ms.saturating_sub(self.timings.tick_ms);
                (Timer::Revealing { remaining_ms }, remaining_ms == 0)
            }
        };

        if expired {
            self.state = TimerState::Expired { token };
            TickOutcome::Fired(token)
        } else {
            self.state = TimerState::Running { token, timer };
            TickOutcome::Running
        }
    }

    pub fn current_token(&self) -> Option<PhaseToken> {
        match self.state {
            TimerState::Running { token, .. } | TimerState::Expired { token } => Some(token),
            _ => None,
        }
    }

    pub fn is_current(&self, token: PhaseToken) -> bool {
        self.current_token() == Some(token)
    }

    #[cfg(test)]
    fn is_suspended(&self) -> bool {
        matches!(self.state, TimerState::Suspended { .. })
    }

    #[cfg(test)]
    fn phase(&self) -> Option<Phase> {
        match self.state {
            TimerState::Idle => None,
            TimerState::Running { timer, .. } | TimerState::Suspended { timer, .. } => {
                Some(timer.phase())
            }
            TimerState::Expired { token } => Some(token.phase),
        }
    }

    /// Answering countdown in `COUNTDOWN_SCALE` units, or `None` outside that phase.
    pub fn answer_remaining(&self) -> Option<u64> {
        match self.state {
            TimerState::Running {
                timer: Timer::Answering { remaining },
                ..
            }
            | TimerState::Suspended {
                timer: Timer::Answering { remaining },
                ..
            } => Some(remaining),
            TimerState::Expired { token } if token.phase == Phase::Answering => Some(0),
            _ => None,
        }
    }

    pub fn reveal_remaining_ms(&self) -> Option<u64> {
        match self.state {
            TimerState::Running {
                timer: Timer::Revealing { remaining_ms },
                ..
            }
            | TimerState::Suspended {
                timer: Timer::Revealing { remaining_ms },
                ..
            } => Some(remaining_ms),
            TimerState::Expired { token } if token.phase == Phase::Revealing => Some(0),
            _ => None,
        }
    }
}
