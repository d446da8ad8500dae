use serde::{Deserialize, Serialize};

use crate::host::InstanceId;
use crate::widgets::WidgetKind;
use crate::window::{Transition, WindowId};

/// Desktop state changes resulting from a dispatched command.
///
/// Each variant describes what happened. Failures use the `Result` error
/// channel, never the event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A widget window was mounted and registered.
    WindowOpened {
        window: WindowId,
        widget: WidgetKind,
        instance: InstanceId,
    },
    /// A window was hidden, unmounted and unregistered.
    WindowClosed { window: WindowId },
    /// A window received a new z-index.
    WindowRaised { window: WindowId, z_index: u32 },
    DragStarted { window: WindowId },
    /// A dragged window was translated to a (possibly snapped) position.
    WindowMoved {
        window: WindowId,
        x: f64,
        y: f64,
        snapped: bool,
    },
    DragEnded { window: WindowId },
    WindowMinimized { window: WindowId },
    WindowRestored { window: WindowId },
    MaximizeToggled { window: WindowId, maximized: bool },
    /// A scheduled class change landed.
    TransitionApplied {
        window: WindowId,
        transition: Transition,
    },
    ViewportResized { width: f64, height: f64 },
    ClockAdvanced { now_ms: u64 },
    /// A panel accepted a form interaction.
    PanelUpdated { window: WindowId, changed: bool },
}

impl Event {
    /// Window the event concerns, if any.
    pub fn window(&self) -> Option<&WindowId> {
        match self {
            Event::WindowOpened { window, .. }
            | Event::WindowClosed { window }
            | Event::WindowRaised { window, .. }
            | Event::DragStarted { window }
            | Event::WindowMoved { window, .. }
            | Event::DragEnded { window }
            | Event::WindowMinimized { window }
            | Event::WindowRestored { window }
            | Event::MaximizeToggled { window, .. }
            | Event::TransitionApplied { window, .. }
            | Event::PanelUpdated { window, .. } => Some(window),
            Event::ViewportResized { .. } | Event::ClockAdvanced { .. } => None,
        }
    }
}
