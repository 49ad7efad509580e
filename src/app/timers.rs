//! Keyed one-shot timers driven by the runtime loop.
//!
//! The queue never sleeps. The loop asks for the earliest deadline, sleeps
//! until it, then drains whatever is due.

use super::actions::{TimerAction, TimerKey};
use tokio::time::Instant;

#[derive(Debug, Clone)]
struct Entry {
    key: TimerKey,
    deadline: Instant,
    seq: u64,
    action: TimerAction,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `action` at `deadline`. Returns true when an existing timer for the
    /// same key was replaced.
    pub fn schedule(&mut self, deadline: Instant, action: TimerAction) -> bool {
        let key = action.key();
        let replaced = self.cancel(key);
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            key,
            deadline,
            seq,
            action,
        });
        replaced
    }

    pub fn cancel(&mut self, key: TimerKey) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.key != key);
        self.entries.len() != before
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.deadline).min()
    }

    /// Remove and return every action due at `now`, earliest first. Ties keep
    /// scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Vec<TimerAction> {
        let (mut due, pending): (Vec<Entry>, Vec<Entry>) = self
            .entries
            .drain(..)
            .partition(|entry| entry.deadline <= now);
        self.entries = pending;
        due.sort_by_key(|entry| (entry.deadline, entry.seq));
        due.into_iter().map(|entry| entry.action).collect()
    }

    pub fn contains(&self, key: TimerKey) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every pending timer, returning how many were armed.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        count
    }
}
