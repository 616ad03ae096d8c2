use std::time::Duration;

use tracing::trace;

/// Identifies a registered timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// When a registered timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// On every call to [`TimerQueue::due`], i.e. once per frame
    EveryFrame,
    /// Periodically. Missed periods coalesce into a single firing.
    Every(Duration),
}

#[derive(Debug, Clone)]
struct Entry<K> {
    handle: TimerHandle,
    key: K,
    schedule: Schedule,
    next_due: Duration,
}

/// Registry of frame callbacks and coarse timers.
///
/// The queue hands back the keys of due timers; the owner decides what each
/// key means. Cancelled timers never fire again.
#[derive(Debug, Clone)]
pub struct TimerQueue<K> {
    entries: Vec<Entry<K>>,
    next_id: u64,
}

impl<K> Default for TimerQueue<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl<K: Clone> TimerQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, key: K, schedule: Schedule, now: Duration) -> TimerHandle {
        let schedule = match schedule {
            Schedule::Every(period) if period.is_zero() => Schedule::EveryFrame,
            other => other,
        };
        let next_due = match schedule {
            Schedule::EveryFrame => now,
            Schedule::Every(period) => now + period,
        };

        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            handle,
            key,
            schedule,
            next_due,
        });
        handle
    }

    /// Remove a timer. Returns false if it was already gone.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.handle != handle);
        before != self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Earliest deadline among the periodic timers, used to size the event
    /// poll timeout. Frame callbacks are paced by their owner and not counted.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.entries
            .iter()
            .filter(|e| e.schedule != Schedule::EveryFrame)
            .map(|e| e.next_due)
            .min()
    }

    /// Collect the keys of every timer due at `now`, in registration order,
    /// re-arming each one.
    pub fn due(&mut self, now: Duration) -> Vec<K> {
        let mut fired = Vec::new();

        for entry in self.entries.iter_mut() {
            if entry.next_due > now {
                continue;
            }
            fired.push(entry.key.clone());

            match entry.schedule {
                Schedule::EveryFrame => entry.next_due = now,
                Schedule::Every(period) => {
                    entry.next_due += period;
                    if entry.next_due <= now {
                        trace!("Timer {:?} fell behind, skipping missed ticks", entry.handle);
                        entry.next_due = now + period;
                    }
                }
            }
        }

        fired
    }
}
