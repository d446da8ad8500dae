use std::collections::HashMap;

use tracing::{debug, error, info, warn};

use crate::config::DeskConfig;
use crate::host::{OpenWindow, WindowHost};
use crate::shell::{ShellControl, ShellNotice, WindowShell};
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::snapshot::{DesktopSnapshot, WindowSnapshot};
use crate::state::store::Store;
use crate::state::types::{Command, PressTarget};
use crate::widgets::WidgetPanel;
use crate::window::{DesktopSurface, Point, Size, Surface, WindowId, WindowManager};

/// The desktop root: owns the window manager, the surface, the host and
/// every open window's shell and panel.
pub struct Desktop {
    config: DeskConfig,
    manager: WindowManager,
    surface: DesktopSurface,
    host: WindowHost,
    shells: HashMap<WindowId, WindowShell>,
    panels: HashMap<WindowId, WidgetPanel>,
}

impl Desktop {
    pub fn new(config: DeskConfig) -> Self {
        let viewport = Size::new(config.viewport.width(), config.viewport.height());
        Self {
            manager: WindowManager::from_config(&config),
            surface: DesktopSurface::new(viewport),
            host: WindowHost::new(),
            shells: HashMap::new(),
            panels: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &DeskConfig {
        &self.config
    }

    pub fn manager(&self) -> &WindowManager {
        &self.manager
    }

    pub fn host(&self) -> &WindowHost {
        &self.host
    }

    pub fn panel(&self, window: &WindowId) -> Option<&WidgetPanel> {
        self.panels.get(window)
    }

    pub fn snapshot(&self) -> DesktopSnapshot {
        let windows = self
            .manager
            .windows()
            .into_iter()
            .filter_map(|state| {
                let panel = self.panels.get(&state.id)?;
                Some(WindowSnapshot {
                    id: state.id.clone(),
                    title: state.title.clone(),
                    widget: panel.kind(),
                    mode: state.mode(),
                    classes: state.class_names().into_iter().map(String::from).collect(),
                    transform: state.transform.css(),
                    z_index: state.z_index,
                    panel: panel.view(),
                })
            })
            .collect();

        DesktopSnapshot {
            now_ms: self.manager.now_ms(),
            viewport: self.surface.viewport(),
            windows,
            taskbar: self.manager.taskbar().to_vec(),
        }
    }

    fn shell(&self, window: &WindowId) -> Result<&WindowShell, DispatchError> {
        self.shells
            .get(window)
            .ok_or_else(|| DispatchError::WindowNotFound {
                window: window.to_string(),
            })
    }

    /// Runs a control click, rejecting controls the shell does not render.
    fn click(
        &mut self,
        window: &WindowId,
        control: ShellControl,
    ) -> Result<Option<ShellNotice>, DispatchError> {
        let shell = self
            .shells
            .get(window)
            .ok_or_else(|| DispatchError::WindowNotFound {
                window: window.to_string(),
            })?;

        let controls = shell.props().controls;
        let enabled = match control {
            ShellControl::Minimize => controls.minimize,
            ShellControl::Maximize => controls.maximize,
            ShellControl::Close => controls.close,
        };
        if !enabled {
            return Err(DispatchError::ControlDisabled {
                window: window.to_string(),
                control,
            });
        }

        Ok(shell.click(control, &mut self.manager))
    }

    fn open_window(&mut self, key: &str) -> Result<Vec<Event>, DispatchError> {
        let opened = self.host.open(key)?;
        self.mount_window(opened)
    }

    /// Mounts and registers a host entry. Shell and panel are only kept
    /// once the manager holds state for the window.
    fn mount_window(&mut self, opened: OpenWindow) -> Result<Vec<Event>, DispatchError> {
        let shell = WindowShell::new(opened.kind.shell_props(opened.window_id.clone()));
        let size = Size::new(
            self.config.window.default_width(),
            self.config.window.default_height(),
        );

        if !shell.mount(&mut self.surface, &mut self.manager, size) {
            warn!(
                event = "core.state.registration_skipped",
                window = %opened.window_id,
                instance = %opened.instance
            );
            if self.host.contains(&opened.instance) {
                self.host.close(&opened.instance)?;
            }
            return Err(DispatchError::RegistrationSkipped {
                window: opened.window_id.to_string(),
            });
        }

        self.panels
            .insert(opened.window_id.clone(), WidgetPanel::new(opened.kind));
        self.shells.insert(opened.window_id.clone(), shell);

        Ok(vec![Event::WindowOpened {
            window: opened.window_id,
            widget: opened.kind,
            instance: opened.instance,
        }])
    }

    fn close_window(&mut self, window: WindowId) -> Result<Vec<Event>, DispatchError> {
        self.click(&window, ShellControl::Close)?;

        if let Some(shell) = self.shells.remove(&window) {
            shell.unmount(&mut self.surface, &mut self.manager);
        }
        self.panels.remove(&window);

        let instance = self.host.find_by_window(&window).map(|w| w.instance.clone());
        if let Some(instance) = instance {
            self.host.close(&instance)?;
        }

        Ok(vec![Event::WindowClosed { window }])
    }

    fn pointer_down(
        &mut self,
        window: WindowId,
        target: PressTarget,
        pointer: Point,
    ) -> Result<Vec<Event>, DispatchError> {
        self.shell(&window)?;

        let mut events = Vec::new();
        match target {
            PressTarget::TitleBar => {
                if self.manager.begin_drag(&window, pointer) {
                    events.push(Event::DragStarted {
                        window: window.clone(),
                    });
                    if let Some(z_index) = self.manager.window(&window).and_then(|w| w.z_index) {
                        events.push(Event::WindowRaised { window, z_index });
                    }
                }
            }
            PressTarget::Body => {
                if let Some(z_index) = self.manager.press(&window) {
                    events.push(Event::WindowRaised { window, z_index });
                }
            }
        }
        Ok(events)
    }

    fn notice_events(window: WindowId, notice: Option<ShellNotice>) -> Vec<Event> {
        match notice {
            Some(ShellNotice::Minimized) => vec![Event::WindowMinimized { window }],
            Some(ShellNotice::Restored) => vec![Event::WindowRestored { window }],
            Some(ShellNotice::MaximizeToggled(maximized)) => {
                vec![Event::MaximizeToggled { window, maximized }]
            }
            Some(ShellNotice::Closed) => vec![Event::WindowClosed { window }],
            None => Vec::new(),
        }
    }
}

impl Store for Desktop {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let result = match cmd {
            Command::OpenWindow { key } => self.open_window(&key),
            Command::CloseWindow { window } => self.close_window(window),
            Command::MinimizeClicked { window } => self
                .click(&window, ShellControl::Minimize)
                .map(|notice| Self::notice_events(window, notice)),
            Command::MaximizeClicked { window } => self
                .click(&window, ShellControl::Maximize)
                .map(|notice| Self::notice_events(window, notice)),
            Command::TitleDoubleClicked { window } => match self.shells.get(&window) {
                Some(shell) => {
                    let notice = shell.double_click_title(&mut self.manager);
                    Ok(Self::notice_events(window, notice))
                }
                None => Err(DispatchError::WindowNotFound {
                    window: window.to_string(),
                }),
            },
            Command::PointerDown { window, target, x, y } => {
                self.pointer_down(window, target, Point::new(x, y))
            }
            Command::PointerMove { x, y } => Ok(self
                .manager
                .continue_drag(Point::new(x, y))
                .into_iter()
                .map(|moved| Event::WindowMoved {
                    window: moved.window,
                    x: moved.position.x,
                    y: moved.position.y,
                    snapped: moved.snapped,
                })
                .collect()),
            Command::PointerUp => Ok(self
                .manager
                .end_drag()
                .into_iter()
                .map(|window| Event::DragEnded { window })
                .collect()),
            Command::TaskbarClicked { window } => {
                self.shell(&window)?;
                Ok(match self.manager.activate_taskbar_entry(&window) {
                    Some(_) => vec![Event::WindowRestored { window }],
                    None => Vec::new(),
                })
            }
            Command::Resize { width, height } => {
                let viewport = Size::new(width, height);
                self.surface.resize(viewport);
                self.manager.update_snap_points(viewport);
                Ok(vec![Event::ViewportResized { width, height }])
            }
            Command::Advance { millis } => {
                let mut events: Vec<Event> = self
                    .manager
                    .advance(millis)
                    .into_iter()
                    .map(|applied| Event::TransitionApplied {
                        window: applied.window,
                        transition: applied.transition,
                    })
                    .collect();
                events.push(Event::ClockAdvanced {
                    now_ms: self.manager.now_ms(),
                });
                Ok(events)
            }
            Command::WidgetAction { window, action } => match self.panels.get_mut(&window) {
                Some(panel) => panel
                    .apply(action)
                    .map(|changed| vec![Event::PanelUpdated { window, changed }])
                    .map_err(DispatchError::from),
                None => Err(DispatchError::WindowNotFound {
                    window: window.to_string(),
                }),
            },
        };

        match &result {
            Ok(events) => info!(
                event = "core.state.dispatch_completed",
                event_count = events.len()
            ),
            Err(e) => error!(event = "core.state.dispatch_failed", error = %e),
        }

        result
    }
}
