use serde::{Deserialize, Serialize};

use super::types::WindowId;

/// A clickable marker for one minimized window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskbarEntry {
    pub window: WindowId,
    pub label: String,
}

/// Taskbar entries in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taskbar {
    entries: Vec<TaskbarEntry>,
}

impl Taskbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry unless one already exists for the window.
    ///
    /// Returns true if an entry was created.
    pub fn add(&mut self, window: WindowId, label: impl Into<String>) -> bool {
        if self.contains(&window) {
            return false;
        }
        self.entries.push(TaskbarEntry {
            window,
            label: label.into(),
        });
        true
    }

    /// Returns true if an entry was removed.
    pub fn remove(&mut self, window: &WindowId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| &e.window != window);
        self.entries.len() != before
    }

    pub fn contains(&self, window: &WindowId) -> bool {
        self.entries.iter().any(|e| &e.window == window)
    }

    pub fn entries(&self) -> &[TaskbarEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut taskbar = Taskbar::new();
        assert!(taskbar.add(WindowId::new("a"), "Collatz"));
        assert!(!taskbar.add(WindowId::new("a"), "Collatz again"));
        assert_eq!(taskbar.len(), 1);
        assert_eq!(taskbar.entries()[0].label, "Collatz");
    }

    #[test]
    fn test_remove() {
        let mut taskbar = Taskbar::new();
        taskbar.add(WindowId::new("a"), "A");
        taskbar.add(WindowId::new("b"), "B");

        assert!(taskbar.remove(&WindowId::new("a")));
        assert!(!taskbar.remove(&WindowId::new("a")));
        assert!(!taskbar.contains(&WindowId::new("a")));
        assert!(taskbar.contains(&WindowId::new("b")));
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut taskbar = Taskbar::new();
        taskbar.add(WindowId::new("z"), "Z");
        taskbar.add(WindowId::new("a"), "A");
        let labels: Vec<&str> = taskbar.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Z", "A"]);
    }
}
