//! Where the displayed time comes from, and when to look again.

use std::time::{Duration, Instant};

use chrono::{Local, NaiveTime};

/// Nominal refresh cadence of the clock.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1_000);

/// Supplies the current local wall-clock time.
pub trait TimeSource {
    fn now(&self) -> NaiveTime;

    fn name(&self) -> &str {
        "TimeSource"
    }
}

/// The system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }

    fn name(&self) -> &str {
        "local"
    }
}

/// Always reports the same time.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveTime);

impl TimeSource for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Auto-resetting interval timer driven by the host's event loop.
///
/// The host polls it with the current instant; a tick fires once the
/// interval has elapsed and the next deadline is re-armed from that
/// moment. Missed intervals collapse into a single tick.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    deadline: Instant,
}

impl Ticker {
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            deadline: start + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns `true` if a tick is due at `now`, re-arming the timer.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.deadline {
            return false;
        }
        self.deadline = now + self.interval;
        true
    }

    /// Time left until the next tick; zero if one is already due.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}
