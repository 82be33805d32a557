// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-agnostic timer queue.
//!
//! The deck never sleeps and never reads a clock. It schedules payloads at
//! absolute deadlines (host milliseconds) and the host drains due entries
//! whenever it gets a tick, typically once per animation frame:
//!
//! ```
//! use understory_deck::timer::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule(300, "exit a");
//! timers.schedule(100, "spring back");
//! timers.schedule(300, "exit b");
//!
//! assert_eq!(timers.next_deadline(), Some(100));
//! assert_eq!(timers.pop_due(50), None);
//! assert_eq!(timers.pop_due(300), Some("spring back"));
//! // Equal deadlines fire in scheduling order.
//! assert_eq!(timers.pop_due(300), Some("exit a"));
//! assert_eq!(timers.pop_due(300), Some("exit b"));
//! assert!(timers.is_empty());
//! ```
//!
//! Entries carry no cancellation token. Payloads that may go stale should
//! carry enough context for the consumer to recognize that when they fire.

use std::collections::VecDeque;

#[derive(Clone, Debug)]
struct Timer<T> {
    deadline: u64,
    payload: T,
}

/// Timers ordered by deadline, then by scheduling order.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    timers: VecDeque<Timer<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            timers: VecDeque::new(),
        }
    }

    /// Schedules `payload` to become due at `deadline`.
    pub fn schedule(&mut self, deadline: u64, payload: T) {
        // Later entries sort after earlier ones at the same deadline.
        let at = self.timers.partition_point(|t| t.deadline <= deadline);
        self.timers.insert(at, Timer { deadline, payload });
    }

    /// Pops the earliest timer whose deadline is at or before `now`.
    pub fn pop_due(&mut self, now: u64) -> Option<T> {
        if self.timers.front()?.deadline > now {
            return None;
        }
        self.timers.pop_front().map(|t| t.payload)
    }

    /// Deadline of the earliest timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.front().map(|t| t.deadline)
    }

    /// Number of scheduled timers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Returns `true` if nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}
