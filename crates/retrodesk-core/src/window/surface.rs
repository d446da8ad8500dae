//! The node tree the window manager attaches to.
//!
//! A window is a container node with a stable id. It is only interactive if
//! it also carries a title-bar region; registration silently skips nodes
//! without one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::types::{Size, WindowId};

/// Control buttons rendered in a window's title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlSet {
    pub minimize: bool,
    pub maximize: bool,
    pub close: bool,
}

impl Default for ControlSet {
    fn default() -> Self {
        Self {
            minimize: true,
            maximize: true,
            close: true,
        }
    }
}

/// A window container as seen by the manager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowNode {
    /// Text of the title element, if the node has one.
    pub title: Option<String>,
    pub has_title_bar: bool,
    pub controls: ControlSet,
    pub size: Size,
}

/// Lookup interface over the rendered window nodes.
pub trait Surface {
    fn find_window(&self, id: &WindowId) -> Option<&WindowNode>;

    fn viewport(&self) -> Size;
}

/// In-memory surface holding mounted window nodes.
#[derive(Debug, Clone)]
pub struct DesktopSurface {
    nodes: HashMap<WindowId, WindowNode>,
    viewport: Size,
}

impl DesktopSurface {
    pub fn new(viewport: Size) -> Self {
        Self {
            nodes: HashMap::new(),
            viewport,
        }
    }

    /// Mounts (or replaces) a node.
    pub fn mount(&mut self, id: WindowId, node: WindowNode) {
        self.nodes.insert(id, node);
    }

    pub fn unmount(&mut self, id: &WindowId) -> Option<WindowNode> {
        self.nodes.remove(id)
    }

    pub fn resize(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Surface for DesktopSurface {
    fn find_window(&self, id: &WindowId) -> Option<&WindowNode> {
        self.nodes.get(id)
    }

    fn viewport(&self) -> Size {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> WindowNode {
        WindowNode {
            title: Some("Authors".to_string()),
            has_title_bar: true,
            controls: ControlSet::default(),
            size: Size::new(100.0, 100.0),
        }
    }

    #[test]
    fn test_mount_and_unmount() {
        let mut surface = DesktopSurface::new(Size::new(800.0, 600.0));
        let id = WindowId::new("authors-window");

        surface.mount(id.clone(), node());
        assert_eq!(surface.find_window(&id), Some(&node()));
        assert_eq!(surface.len(), 1);

        assert!(surface.unmount(&id).is_some());
        assert!(surface.find_window(&id).is_none());
        assert!(surface.is_empty());
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut surface = DesktopSurface::new(Size::new(800.0, 600.0));
        surface.resize(Size::new(1024.0, 768.0));
        assert_eq!(surface.viewport(), Size::new(1024.0, 768.0));
    }

    #[test]
    fn test_default_controls_are_all_present() {
        let controls = ControlSet::default();
        assert!(controls.minimize && controls.maximize && controls.close);
    }
}
