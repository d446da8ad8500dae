//! Window chrome: a titled frame with optional minimize/maximize/close
//! controls wired to the [`WindowManager`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::window::{
    ControlSet, DesktopSurface, MinimizeOutcome, Size, WindowId, WindowManager, WindowNode,
    WindowState,
};

/// Construction-time description of a shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellProps {
    pub title: String,
    pub id: WindowId,
    /// Label shown on the taskbar; the title is used when absent.
    pub taskbar_label: Option<String>,
    pub controls: ControlSet,
}

impl ShellProps {
    pub fn new(title: impl Into<String>, id: WindowId) -> Self {
        Self {
            title: title.into(),
            id,
            taskbar_label: None,
            controls: ControlSet::default(),
        }
    }

    pub fn with_taskbar_label(mut self, label: impl Into<String>) -> Self {
        self.taskbar_label = Some(label.into());
        self
    }

    pub fn with_controls(mut self, controls: ControlSet) -> Self {
        self.controls = controls;
        self
    }

    /// Label handed to the manager at registration.
    pub fn label(&self) -> &str {
        self.taskbar_label.as_deref().unwrap_or(&self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellControl {
    Minimize,
    Maximize,
    Close,
}

/// What a shell reports to its owner after a control interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "notice", content = "maximized")]
pub enum ShellNotice {
    Minimized,
    Restored,
    MaximizeToggled(bool),
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowShell {
    props: ShellProps,
}

impl WindowShell {
    pub fn new(props: ShellProps) -> Self {
        Self { props }
    }

    pub fn props(&self) -> &ShellProps {
        &self.props
    }

    pub fn id(&self) -> &WindowId {
        &self.props.id
    }

    /// The frame node this shell renders.
    pub fn frame(&self, size: Size) -> WindowNode {
        WindowNode {
            title: Some(self.props.title.clone()),
            has_title_bar: true,
            controls: self.props.controls,
            size,
        }
    }

    /// Renders the frame and registers it with the manager.
    pub fn mount(
        &self,
        surface: &mut DesktopSurface,
        manager: &mut WindowManager,
        size: Size,
    ) -> bool {
        surface.mount(self.props.id.clone(), self.frame(size));
        manager.register(&*surface, &self.props.id, Some(self.props.label()))
    }

    /// Handles a control button. Controls disabled in the props do nothing.
    pub fn click(&self, control: ShellControl, manager: &mut WindowManager) -> Option<ShellNotice> {
        let controls = self.props.controls;
        let id = &self.props.id;

        let notice = match control {
            ShellControl::Minimize if controls.minimize => {
                match manager.toggle_minimize(id)? {
                    MinimizeOutcome::Minimized => ShellNotice::Minimized,
                    MinimizeOutcome::Restored => ShellNotice::Restored,
                }
            }
            ShellControl::Maximize if controls.maximize => {
                ShellNotice::MaximizeToggled(manager.toggle_maximize(id)?)
            }
            ShellControl::Close if controls.close => {
                if !manager.hide(id) {
                    return None;
                }
                ShellNotice::Closed
            }
            _ => {
                debug!(event = "core.shell.control_disabled", window = %id, control = ?control);
                return None;
            }
        };

        Some(notice)
    }

    pub fn double_click_title(&self, manager: &mut WindowManager) -> Option<ShellNotice> {
        manager
            .double_click_title(&self.props.id)
            .map(ShellNotice::MaximizeToggled)
    }

    /// Removes the frame and unregisters the window.
    pub fn unmount(
        &self,
        surface: &mut DesktopSurface,
        manager: &mut WindowManager,
    ) -> Option<WindowState> {
        surface.unmount(&self.props.id);
        manager.unregister(&self.props.id)
    }
}
