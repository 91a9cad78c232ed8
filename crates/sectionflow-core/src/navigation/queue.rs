use std::collections::VecDeque;

use super::Direction;
use crate::config::OverflowPolicy;

/// Result of pushing onto a full or non-full queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    Queued,
    /// The request was queued and this older one evicted
    Evicted(Direction),
    /// The request itself was discarded
    Rejected,
}

/// Bounded FIFO of pending scroll requests
#[derive(Debug, Clone)]
pub struct ScrollQueue {
    pending: VecDeque<Direction>,
    capacity: usize,
    policy: OverflowPolicy,
}

impl ScrollQueue {
    pub fn new(capacity: usize, policy: OverflowPolicy) -> Self {
        let capacity = capacity.max(1);
        Self {
            pending: VecDeque::with_capacity(capacity + 1),
            capacity,
            policy,
        }
    }

    pub fn push(&mut self, direction: Direction) -> PushOutcome {
        if self.pending.len() < self.capacity {
            self.pending.push_back(direction);
            return PushOutcome::Queued;
        }

        match self.policy {
            OverflowPolicy::DropOldest => {
                self.pending.push_back(direction);
                match self.pending.pop_front() {
                    Some(evicted) => PushOutcome::Evicted(evicted),
                    None => PushOutcome::Queued,
                }
            }
            OverflowPolicy::RejectNewest => PushOutcome::Rejected,
        }
    }

    pub fn pop(&mut self) -> Option<Direction> {
        self.pending.pop_front()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Pending requests, head first
    pub fn to_vec(&self) -> Vec<Direction> {
        self.pending.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::{Backward as B, Forward as F};

    #[test]
    fn test_drop_oldest_keeps_latest_intent() {
        let mut queue = ScrollQueue::new(3, OverflowPolicy::DropOldest);
        // A, B, C, D
        assert_eq!(queue.push(B), PushOutcome::Queued);
        assert_eq!(queue.push(F), PushOutcome::Queued);
        assert_eq!(queue.push(F), PushOutcome::Queued);
        assert_eq!(queue.push(B), PushOutcome::Evicted(B));
        assert_eq!(queue.to_vec(), vec![F, F, B]);
    }

    #[test]
    fn test_reject_newest() {
        let mut queue = ScrollQueue::new(2, OverflowPolicy::RejectNewest);
        queue.push(F);
        queue.push(B);
        assert_eq!(queue.push(F), PushOutcome::Rejected);
        assert_eq!(queue.to_vec(), vec![F, B]);
    }

    #[test]
    fn test_fifo_and_clear() {
        let mut queue = ScrollQueue::new(3, OverflowPolicy::DropOldest);
        queue.push(F);
        queue.push(B);
        assert_eq!(queue.pop(), Some(F));
        assert_eq!(queue.len(), 1);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_zero_capacity_clamped() {
        let queue = ScrollQueue::new(0, OverflowPolicy::DropOldest);
        assert_eq!(queue.capacity(), 1);
    }
}
