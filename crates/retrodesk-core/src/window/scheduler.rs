//! Cancellable, clock-driven visual transitions.
//!
//! Minimize and restore play a CSS transition before the final class change
//! lands. Instead of fire-and-forget timers, each delayed class change is a
//! [`ScheduledTransition`] held here until the logical clock reaches its due
//! time. The manager cancels a window's pending transitions before scheduling
//! new ones, so a late callback can never act on a superseded state.

use serde::{Deserialize, Serialize};

use super::types::{VisualClass, WindowId};

/// A delayed class change on one window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Adds `minimized-hidden` once the minimize animation finished.
    HideMinimized,
    /// Drops `minimized` once the restored window has reflowed.
    ClearMinimized,
}

impl Transition {
    pub fn class(&self) -> VisualClass {
        match self {
            Transition::HideMinimized => VisualClass::MinimizedHidden,
            Transition::ClearMinimized => VisualClass::Minimized,
        }
    }

    /// Whether the class is added (true) or removed (false).
    pub fn adds_class(&self) -> bool {
        matches!(self, Transition::HideMinimized)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionHandle(u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTransition {
    pub handle: TransitionHandle,
    pub window: WindowId,
    pub transition: Transition,
    pub due_at_ms: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TransitionScheduler {
    now_ms: u64,
    next_handle: u64,
    pending: Vec<ScheduledTransition>,
}

impl TransitionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn schedule(
        &mut self,
        window: WindowId,
        transition: Transition,
        delay_ms: u64,
    ) -> TransitionHandle {
        let handle = TransitionHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(ScheduledTransition {
            handle,
            window,
            transition,
            due_at_ms: self.now_ms.saturating_add(delay_ms),
        });
        handle
    }

    /// Cancels one transition. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TransitionHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.handle != handle);
        self.pending.len() != before
    }

    /// Cancels every pending transition for a window, returning how many were dropped.
    pub fn cancel_window(&mut self, window: &WindowId) -> usize {
        let before = self.pending.len();
        self.pending.retain(|t| &t.window != window);
        before - self.pending.len()
    }

    pub fn pending_for(&self, window: &WindowId) -> Vec<&ScheduledTransition> {
        self.pending.iter().filter(|t| &t.window == window).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Moves the clock forward and returns the transitions that became due,
    /// ordered by due time and then by scheduling order.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<ScheduledTransition> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);

        let now = self.now_ms;
        let (mut due, pending): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|t| t.due_at_ms <= now);
        self.pending = pending;

        due.sort_by_key(|t| (t.due_at_ms, t.handle.0));
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(id: &str) -> WindowId {
        WindowId::new(id)
    }

    #[test]
    fn test_transition_fires_at_due_time() {
        let mut scheduler = TransitionScheduler::new();
        scheduler.schedule(window("a"), Transition::HideMinimized, 300);

        assert!(scheduler.advance(299).is_empty());
        let fired = scheduler.advance(1);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].transition, Transition::HideMinimized);
        assert_eq!(fired[0].due_at_ms, 300);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn test_cancelled_transition_never_fires() {
        let mut scheduler = TransitionScheduler::new();
        let handle = scheduler.schedule(window("a"), Transition::HideMinimized, 300);

        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        assert!(scheduler.advance(1000).is_empty());
    }

    #[test]
    fn test_cancel_window_only_touches_that_window() {
        let mut scheduler = TransitionScheduler::new();
        scheduler.schedule(window("a"), Transition::HideMinimized, 300);
        scheduler.schedule(window("b"), Transition::ClearMinimized, 10);

        assert_eq!(scheduler.cancel_window(&window("a")), 1);
        assert!(scheduler.pending_for(&window("a")).is_empty());
        assert_eq!(scheduler.pending_for(&window("b")).len(), 1);
    }

    #[test]
    fn test_fired_in_due_order() {
        let mut scheduler = TransitionScheduler::new();
        scheduler.schedule(window("late"), Transition::HideMinimized, 300);
        scheduler.schedule(window("early"), Transition::ClearMinimized, 10);

        let fired = scheduler.advance(500);
        let order: Vec<&str> = fired.iter().map(|t| t.window.as_str()).collect();
        assert_eq!(order, vec!["early", "late"]);
        assert_eq!(scheduler.now_ms(), 500);
    }

    #[test]
    fn test_delay_is_relative_to_current_clock() {
        let mut scheduler = TransitionScheduler::new();
        scheduler.advance(1000);
        scheduler.schedule(window("a"), Transition::ClearMinimized, 10);

        assert!(scheduler.advance(9).is_empty());
        assert_eq!(scheduler.advance(1)[0].due_at_ms, 1010);
    }

    #[test]
    fn test_transition_class_mapping() {
        assert_eq!(
            Transition::HideMinimized.class(),
            VisualClass::MinimizedHidden
        );
        assert!(Transition::HideMinimized.adds_class());
        assert_eq!(Transition::ClearMinimized.class(), VisualClass::Minimized);
        assert!(!Transition::ClearMinimized.adds_class());
    }
}
