use tracing::{info, warn};

use super::errors::HostError;
use super::types::{InstanceId, OpenWindow};
use crate::widgets::WidgetKind;
use crate::window::WindowId;

/// Open window instances in the order they were opened.
#[derive(Debug, Clone, Default)]
pub struct WindowHost {
    open: Vec<OpenWindow>,
}

impl WindowHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles an open-window signal.
    pub fn open(&mut self, key: &str) -> Result<OpenWindow, HostError> {
        let kind: WidgetKind = key.parse().map_err(|_| {
            warn!(event = "core.host.open_rejected", key = key, reason = "unknown_widget");
            HostError::UnknownWidget {
                key: key.to_string(),
            }
        })?;

        let mut instance = InstanceId::generate();
        while self.contains(&instance) {
            instance = InstanceId::generate();
        }

        let window = OpenWindow::new(kind, instance);
        self.open.push(window.clone());

        info!(
            event = "core.host.window_opened",
            widget = %kind,
            instance = %window.instance,
            window = %window.window_id
        );
        Ok(window)
    }

    /// Removes one instance; others are untouched.
    pub fn close(&mut self, instance: &InstanceId) -> Result<OpenWindow, HostError> {
        let index = self
            .open
            .iter()
            .position(|w| &w.instance == instance)
            .ok_or_else(|| HostError::InstanceNotFound {
                instance: instance.to_string(),
            })?;

        let window = self.open.remove(index);
        info!(
            event = "core.host.window_closed",
            instance = %window.instance,
            window = %window.window_id
        );
        Ok(window)
    }

    pub fn contains(&self, instance: &InstanceId) -> bool {
        self.open.iter().any(|w| &w.instance == instance)
    }

    pub fn get(&self, instance: &InstanceId) -> Option<&OpenWindow> {
        self.open.iter().find(|w| &w.instance == instance)
    }

    pub fn find_by_window(&self, window: &WindowId) -> Option<&OpenWindow> {
        self.open.iter().find(|w| &w.window_id == window)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OpenWindow> {
        self.open.iter()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_same_key_twice_gives_independent_entries() {
        let mut host = WindowHost::new();
        let first = host.open("fibonacci").unwrap();
        let second = host.open("fibonacci").unwrap();

        assert_ne!(first.instance, second.instance);
        assert_ne!(first.window_id, second.window_id);
        assert_eq!(host.len(), 2);

        host.close(&first.instance).unwrap();
        assert_eq!(host.len(), 1);
        assert!(host.get(&second.instance).is_some());
        assert!(host.find_by_window(&second.window_id).is_some());
    }

    #[test]
    fn test_open_unknown_key() {
        let mut host = WindowHost::new();
        assert_eq!(
            host.open("minesweeper"),
            Err(HostError::UnknownWidget {
                key: "minesweeper".to_string()
            })
        );
        assert!(host.is_empty());
    }

    #[test]
    fn test_close_unknown_instance() {
        let mut host = WindowHost::new();
        let result = host.close(&InstanceId::new("nope"));
        assert!(matches!(result, Err(HostError::InstanceNotFound { .. })));
    }

    #[test]
    fn test_iter_keeps_open_order() {
        let mut host = WindowHost::new();
        host.open("pascal").unwrap();
        host.open("collatz").unwrap();
        let kinds: Vec<WidgetKind> = host.iter().map(|w| w.kind).collect();
        assert_eq!(kinds, vec![WidgetKind::Pascal, WidgetKind::Collatz]);
    }
}
