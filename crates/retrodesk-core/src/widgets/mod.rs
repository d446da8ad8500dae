//! Widget panels hosted inside desktop windows.
//!
//! Each widget is a pure function plus a small form. [`WidgetKind`] is the
//! closed set of keys the host can open; [`WidgetPanel`] holds the form
//! state of one open instance.

pub mod bernoulli;
pub mod cards;
pub mod collatz;
pub mod errors;
pub mod euclidean;
pub mod input;
pub mod panel;
pub mod pascal;
pub mod sequences;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shell::ShellProps;
use crate::window::{ControlSet, WindowId};

pub use errors::WidgetError;
pub use panel::{PanelAction, PanelView, WidgetPanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Fibonacci,
    Tribonacci,
    Collatz,
    Bernoulli,
    Pascal,
    Euclidean,
    Title,
    Authors,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 8] = [
        WidgetKind::Fibonacci,
        WidgetKind::Tribonacci,
        WidgetKind::Collatz,
        WidgetKind::Bernoulli,
        WidgetKind::Pascal,
        WidgetKind::Euclidean,
        WidgetKind::Title,
        WidgetKind::Authors,
    ];

    /// Key carried by open-window signals.
    pub fn key(&self) -> &'static str {
        match self {
            WidgetKind::Fibonacci => "fibonacci",
            WidgetKind::Tribonacci => "tribonacci",
            WidgetKind::Collatz => "collatz",
            WidgetKind::Bernoulli => "bernoulli",
            WidgetKind::Pascal => "pascal",
            WidgetKind::Euclidean => "euclidean",
            WidgetKind::Title => "title",
            WidgetKind::Authors => "authors",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WidgetKind::Fibonacci => "Fibonacci Calculator",
            WidgetKind::Tribonacci => "Tribonacci Sequence Generator",
            WidgetKind::Collatz => "Collatz Sequence Generator",
            WidgetKind::Bernoulli => "Bernoulli Numbers Generator",
            WidgetKind::Pascal => "Pascal Triangle Generator",
            WidgetKind::Euclidean => "Euclidean Algorithm",
            WidgetKind::Title => "Case Study Compilation",
            WidgetKind::Authors => "Authors",
        }
    }

    pub fn taskbar_label(&self) -> Option<&'static str> {
        match self {
            WidgetKind::Collatz => Some("Collatz"),
            WidgetKind::Pascal => Some("Pascal"),
            WidgetKind::Euclidean => Some("Euclidean"),
            WidgetKind::Title => Some("Case Study"),
            WidgetKind::Fibonacci
            | WidgetKind::Tribonacci
            | WidgetKind::Bernoulli
            | WidgetKind::Authors => None,
        }
    }

    /// Cards can only be closed.
    pub fn controls(&self) -> ControlSet {
        match self {
            WidgetKind::Title | WidgetKind::Authors => ControlSet {
                minimize: false,
                maximize: false,
                close: true,
            },
            _ => ControlSet::default(),
        }
    }

    pub fn shell_props(&self, id: WindowId) -> ShellProps {
        let props = ShellProps::new(self.title(), id).with_controls(self.controls());
        match self.taskbar_label() {
            Some(label) => props.with_taskbar_label(label),
            None => props,
        }
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for WidgetKind {
    type Err = WidgetError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        WidgetKind::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| WidgetError::UnknownWidget {
                key: key.to_string(),
            })
    }
}
