use serde::{Deserialize, Serialize};

use crate::widgets::PanelAction;
use crate::window::WindowId;

/// Where a pointer press landed on a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PressTarget {
    TitleBar,
    Body,
}

/// All desktop interactions that can be dispatched through the store.
///
/// Commands use owned types so scripted sessions can be stored as JSON and
/// replayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Open-window signal carrying a widget key.
    OpenWindow { key: String },
    /// Close button on a window's title bar.
    CloseWindow { window: WindowId },
    MinimizeClicked { window: WindowId },
    MaximizeClicked { window: WindowId },
    TitleDoubleClicked { window: WindowId },
    /// Pointer pressed on a window, in viewport coordinates.
    PointerDown {
        window: WindowId,
        target: PressTarget,
        x: f64,
        y: f64,
    },
    /// Pointer moved anywhere on the page.
    PointerMove { x: f64, y: f64 },
    /// Pointer released anywhere on the page.
    PointerUp,
    TaskbarClicked { window: WindowId },
    /// Viewport resized.
    Resize { width: f64, height: f64 },
    /// Advance the logical clock, firing due transitions.
    Advance { millis: u64 },
    /// Form interaction inside a window's panel.
    WidgetAction {
        window: WindowId,
        action: PanelAction,
    },
}

impl Command {
    /// Window the command targets, if any.
    pub fn window_mut(&mut self) -> Option<&mut WindowId> {
        match self {
            Command::CloseWindow { window }
            | Command::MinimizeClicked { window }
            | Command::MaximizeClicked { window }
            | Command::TitleDoubleClicked { window }
            | Command::PointerDown { window, .. }
            | Command::TaskbarClicked { window }
            | Command::WidgetAction { window, .. } => Some(window),
            Command::OpenWindow { .. }
            | Command::PointerMove { .. }
            | Command::PointerUp
            | Command::Resize { .. }
            | Command::Advance { .. } => None,
        }
    }
}
