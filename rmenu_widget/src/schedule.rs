// Copyright 2025 the Rmenu Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-slot delayed-action scheduling.

/// A single-slot delayed action with cancel-and-reschedule semantics.
///
/// Holds at most one pending action. Scheduling replaces whatever was
/// pending (last writer wins), so a burst of events collapses into the
/// outcome of the most recent one. [`DelaySlot::poll`] fires an action at
/// most once, when the caller-supplied clock reaches its deadline.
///
/// ```
/// use rmenu_widget::DelaySlot;
///
/// let mut slot = DelaySlot::new();
/// slot.schedule(0, 100, "first");
/// slot.schedule(40, 100, "second");
///
/// assert_eq!(slot.poll(100), None);
/// assert_eq!(slot.poll(140), Some("second"));
/// assert_eq!(slot.poll(200), None);
/// ```
#[derive(Clone, Debug)]
pub struct DelaySlot<A> {
    pending: Option<(u64, A)>,
}

impl<A> DelaySlot<A> {
    /// Create an empty slot.
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Schedule `action` to fire `delay_ms` after `now_ms`, replacing any
    /// pending action.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, action: A) {
        self.pending = Some((now_ms.saturating_add(delay_ms), action));
    }

    /// Drop any pending action.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns `true` while an action is waiting for its deadline.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Deadline of the pending action, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    /// Take the pending action if its deadline has passed.
    pub fn poll(&mut self, now_ms: u64) -> Option<A> {
        if self.deadline().is_some_and(|deadline| now_ms >= deadline) {
            self.pending.take().map(|(_, action)| action)
        } else {
            None
        }
    }
}

impl<A> Default for DelaySlot<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_at_the_deadline_not_before() {
        let mut slot = DelaySlot::new();
        slot.schedule(1_000, 100, 1);
        assert!(slot.is_pending());
        assert_eq!(slot.poll(1_099), None);
        assert_eq!(slot.poll(1_100), Some(1));
    }

    #[test]
    fn fires_at_most_once() {
        let mut slot = DelaySlot::new();
        slot.schedule(0, 100, 1);
        assert_eq!(slot.poll(150), Some(1));
        assert!(!slot.is_pending());
        assert_eq!(slot.poll(10_000), None);
    }

    #[test]
    fn rescheduling_replaces_the_pending_action() {
        let mut slot = DelaySlot::new();
        slot.schedule(0, 100, 1);
        slot.schedule(50, 100, 2);
        // The first deadline has passed, but the first action is gone.
        assert_eq!(slot.poll(120), None);
        assert_eq!(slot.poll(150), Some(2));
    }

    #[test]
    fn cancel_drops_the_pending_action() {
        let mut slot = DelaySlot::new();
        slot.schedule(0, 100, 1);
        slot.cancel();
        assert!(!slot.is_pending());
        assert_eq!(slot.poll(200), None);
    }

    #[test]
    fn deadline_reflects_the_latest_schedule() {
        let mut slot = DelaySlot::<u8>::new();
        assert_eq!(slot.deadline(), None);
        slot.schedule(10, 500, 1);
        assert_eq!(slot.deadline(), Some(510));
        slot.schedule(200, 500, 2);
        assert_eq!(slot.deadline(), Some(700));
    }
}
