use serde::{Deserialize, Serialize};

use crate::widgets::{PanelView, WidgetKind};
use crate::window::{Size, TaskbarEntry, WindowId, WindowMode};

/// Rendered state of one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSnapshot {
    pub id: WindowId,
    pub title: String,
    pub widget: WidgetKind,
    pub mode: WindowMode,
    /// CSS classes on the container.
    pub classes: Vec<String>,
    /// CSS transform value.
    pub transform: String,
    pub z_index: Option<u32>,
    pub panel: PanelView,
}

/// Everything a renderer needs to draw the desktop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopSnapshot {
    pub now_ms: u64,
    pub viewport: Size,
    /// Bottom of the stack first.
    pub windows: Vec<WindowSnapshot>,
    pub taskbar: Vec<TaskbarEntry>,
}

impl DesktopSnapshot {
    pub fn window(&self, id: &WindowId) -> Option<&WindowSnapshot> {
        self.windows.iter().find(|w| &w.id == id)
    }
}
