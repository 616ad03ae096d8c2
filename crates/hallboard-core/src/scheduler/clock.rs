use std::cell::Cell;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDateTime};

/// Source of time for the display loop
pub trait Clock {
    /// Monotonic time elapsed since the clock's origin. Drives animation.
    fn monotonic(&self) -> Duration;

    /// Local wall-clock time. Drives the time, date and Hijri texts.
    fn local_now(&self) -> NaiveDateTime;
}

/// Host clock
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn monotonic(&self) -> Duration {
        self.origin.elapsed()
    }

    fn local_now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    monotonic: Cell<Duration>,
    local: Cell<NaiveDateTime>,
}

impl ManualClock {
    pub fn new(local: NaiveDateTime) -> Self {
        Self {
            monotonic: Cell::new(Duration::ZERO),
            local: Cell::new(local),
        }
    }

    /// Move both the monotonic and the wall clock forward
    pub fn advance(&self, by: Duration) {
        self.monotonic.set(self.monotonic.get() + by);
        let delta = chrono::Duration::from_std(by).unwrap_or_else(|_| chrono::Duration::zero());
        self.local.set(self.local.get() + delta);
    }

    /// Jump the wall clock without touching monotonic time
    pub fn set_local(&self, local: NaiveDateTime) {
        self.local.set(local);
    }
}

impl Clock for ManualClock {
    fn monotonic(&self) -> Duration {
        self.monotonic.get()
    }

    fn local_now(&self) -> NaiveDateTime {
        self.local.get()
    }
}
