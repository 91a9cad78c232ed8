//! Deferred task queue for the single-threaded controller
//!
//! Tasks are ordered by deadline, then by insertion order, so two tasks
//! scheduled for the same instant fire in the order they were scheduled.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Deadline-ordered queue of pending tasks
#[derive(Debug, Clone)]
pub struct TimerQueue<T> {
    entries: BTreeMap<(Instant, u64), T>,
    next_seq: u64,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            next_seq: 0,
        }
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to fire `delay` after `now`
    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.insert((now + delay, seq), task);
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Remove and return the earliest task if it is due at `now`
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, T)> {
        let key = *self.entries.keys().next()?;
        if key.0 > now {
            return None;
        }
        self.entries.remove(&key).map(|task| (key.0, task))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pending tasks in firing order
    pub fn iter(&self) -> impl Iterator<Item = (Instant, &T)> {
        self.entries.iter().map(|((deadline, _), task)| (*deadline, task))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_fires_in_deadline_then_insertion_order() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(t0, ms(700), "settle");
        timers.schedule(t0, ms(100), "restart");
        timers.schedule(t0, ms(100), "restart-2");

        assert_eq!(timers.next_deadline(), Some(t0 + ms(100)));
        assert!(timers.pop_due(t0 + ms(99)).is_none());

        let fired: Vec<_> = std::iter::from_fn(|| timers.pop_due(t0 + ms(1000)))
            .map(|(_, task)| task)
            .collect();
        assert_eq!(fired, vec!["restart", "restart-2", "settle"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_pop_due_reports_deadline() {
        let t0 = Instant::now();
        let mut timers = TimerQueue::new();
        timers.schedule(t0, ms(450), 1u8);
        let (deadline, task) = timers.pop_due(t0 + ms(500)).unwrap();
        assert_eq!(deadline, t0 + ms(450));
        assert_eq!(task, 1);
    }
}
