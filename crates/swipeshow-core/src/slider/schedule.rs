//! Deadline-based task slot owned by the controller
//!
//! Holds at most one pending action. The owner polls it from its tick and can
//! cancel it at any time, getting the action back.

use std::time::Instant;

#[derive(Debug, Clone)]
struct Pending<A> {
    deadline: Instant,
    action: A,
}

/// A single cancellable scheduled action
#[derive(Debug, Clone)]
pub struct ScheduledTask<A> {
    pending: Option<Pending<A>>,
}

impl<A> Default for ScheduledTask<A> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<A> ScheduledTask<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` at `deadline`, returning any action it displaced
    pub fn schedule(&mut self, deadline: Instant, action: A) -> Option<A> {
        self.pending
            .replace(Pending { deadline, action })
            .map(|p| p.action)
    }

    /// Cancel the pending action and hand it back to the caller
    pub fn cancel(&mut self) -> Option<A> {
        self.pending.take().map(|p| p.action)
    }

    /// Take the action if its deadline has passed
    pub fn take_due(&mut self, now: Instant) -> Option<A> {
        let due = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if due {
            self.cancel()
        } else {
            None
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }
}
