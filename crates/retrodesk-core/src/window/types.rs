use std::collections::BTreeSet;
use std::fmt;
use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// Identifier of a window's container node on the surface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A position in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// CSS transform applied to a window container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Transform {
    /// Layout position, no translation (`none`).
    #[default]
    None,
    Translate { x: f64, y: f64 },
}

impl Transform {
    pub fn translate(point: Point) -> Self {
        Transform::Translate {
            x: point.x,
            y: point.y,
        }
    }

    /// Renders the transform as a CSS value.
    pub fn css(&self) -> String {
        match self {
            Transform::None => "none".to_string(),
            Transform::Translate { x, y } => format!("translate({}px, {}px)", x, y),
        }
    }
}

/// Visual states toggled as CSS classes on a window container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualClass {
    Dragging,
    Maximized,
    Minimized,
    MinimizedHidden,
    Hidden,
}

impl VisualClass {
    pub fn css_name(&self) -> &'static str {
        match self {
            VisualClass::Dragging => "dragging",
            VisualClass::Maximized => "maximized",
            VisualClass::Minimized => "minimized",
            VisualClass::MinimizedHidden => "minimized-hidden",
            VisualClass::Hidden => "hidden",
        }
    }
}

impl fmt::Display for VisualClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// Coarse interaction state derived from a window's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    Normal,
    Dragging,
    Maximized,
    Minimized,
}

impl fmt::Display for WindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WindowMode::Normal => "normal",
            WindowMode::Dragging => "dragging",
            WindowMode::Maximized => "maximized",
            WindowMode::Minimized => "minimized",
        };
        f.write_str(name)
    }
}

/// Per-window state owned by the window manager.
///
/// The `maximized` class is the source of truth for maximization; the
/// `minimized` flag flips immediately while the `minimized`/`minimized-hidden`
/// classes follow the scheduled transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub id: WindowId,
    pub title: String,
    pub size: Size,
    pub dragging: bool,
    /// Latest drag candidate before snapping.
    pub current: Point,
    /// Pointer position minus the offset at drag start.
    pub initial: Point,
    /// Accumulated translation.
    pub offset: Point,
    pub minimized: bool,
    pub was_maximized: bool,
    /// Transform captured when the window was last minimized.
    pub saved_transform: Transform,
    pub transform: Transform,
    /// None until the window is first brought to front.
    pub z_index: Option<u32>,
    pub classes: BTreeSet<VisualClass>,
    pub can_maximize: bool,
}

impl WindowState {
    pub fn new(id: WindowId, title: String, size: Size, can_maximize: bool) -> Self {
        Self {
            id,
            title,
            size,
            dragging: false,
            current: Point::ORIGIN,
            initial: Point::ORIGIN,
            offset: Point::ORIGIN,
            minimized: false,
            was_maximized: false,
            saved_transform: Transform::None,
            transform: Transform::None,
            z_index: None,
            classes: BTreeSet::new(),
            can_maximize,
        }
    }

    pub fn is_maximized(&self) -> bool {
        self.has_class(VisualClass::Maximized)
    }

    pub fn has_class(&self, class: VisualClass) -> bool {
        self.classes.contains(&class)
    }

    pub fn add_class(&mut self, class: VisualClass) {
        self.classes.insert(class);
    }

    pub fn remove_class(&mut self, class: VisualClass) {
        self.classes.remove(&class);
    }

    /// CSS class names in a stable order.
    pub fn class_names(&self) -> Vec<&'static str> {
        self.classes.iter().map(VisualClass::css_name).collect()
    }

    pub fn mode(&self) -> WindowMode {
        if self.minimized {
            WindowMode::Minimized
        } else if self.is_maximized() {
            WindowMode::Maximized
        } else if self.dragging {
            WindowMode::Dragging
        } else {
            WindowMode::Normal
        }
    }
}
