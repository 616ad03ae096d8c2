//! Timing primitives for the single-threaded display loop
//!
//! Nothing here sleeps or spawns. The run loop asks the [`TimerQueue`] which
//! jobs are due at the current [`Clock`] reading and dispatches them itself,
//! which lets tests drive everything from a [`ManualClock`].

mod clock;
mod debounce;
mod timers;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::Debouncer;
pub use timers::{Schedule, TimerHandle, TimerQueue};
