//! Desktop window management.
//!
//! [`WindowManager`] owns per-window state keyed by [`WindowId`] and applies
//! drag, snap, stacking, minimize/maximize and taskbar behavior to windows
//! registered from a [`Surface`].

pub mod manager;
pub mod scheduler;
pub mod snap;
pub mod surface;
pub mod taskbar;
pub mod types;

pub use manager::{AppliedTransition, DragMove, MinimizeOutcome, WindowManager};
pub use scheduler::{ScheduledTransition, Transition, TransitionHandle, TransitionScheduler};
pub use snap::{SnapConfig, SnapEdges};
pub use surface::{ControlSet, DesktopSurface, Surface, WindowNode};
pub use taskbar::{Taskbar, TaskbarEntry};
pub use types::{Point, Size, Transform, VisualClass, WindowId, WindowMode, WindowState};
