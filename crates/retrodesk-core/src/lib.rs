//! retrodesk-core: Core library for the retro desktop window system
//!
//! Draggable, snappable, stackable windows with minimize/maximize and a
//! taskbar, hosting small number-theory widgets. Used by the `retrodesk` CLI.
//!
//! # Main Entry Points
//!
//! - [`state`] - The [`Desktop`] store and its commands, events and snapshots
//! - [`window`] - Window manager: drag, snap, stacking, minimize/maximize
//! - [`widgets`] - Widget panels and their pure algorithms
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod host;
pub mod logging;
pub mod shell;
pub mod state;
pub mod widgets;
pub mod window;

// Re-export commonly used types at crate root for convenience
pub use config::DeskConfig;
pub use errors::{DeskError, DeskResult};
pub use host::{HostError, InstanceId, OpenWindow, WindowHost};
pub use shell::{ShellControl, ShellNotice, ShellProps, WindowShell};
pub use state::{
    Command, Desktop, DesktopSnapshot, DispatchError, Event, PressTarget, Store, WindowSnapshot,
};
pub use widgets::{PanelAction, PanelView, WidgetError, WidgetKind, WidgetPanel};
pub use window::{WindowId, WindowManager};

// Re-export logging initialization
pub use logging::init_logging;
