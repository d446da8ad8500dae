//! Screen-edge snapping for dragged windows.

use serde::{Deserialize, Serialize};

use super::types::{Point, Size};

/// Viewport edge coordinates a window can snap to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapEdges {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl SnapEdges {
    pub fn for_viewport(viewport: Size) -> Self {
        Self {
            top: 0.0,
            bottom: viewport.height,
            left: 0.0,
            right: viewport.width,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapConfig {
    pub threshold: f64,
    pub edges: SnapEdges,
}

impl SnapConfig {
    pub fn new(threshold: f64, viewport: Size) -> Self {
        Self {
            threshold,
            edges: SnapEdges::for_viewport(viewport),
        }
    }

    /// Replaces the edges after a viewport resize.
    pub fn update_viewport(&mut self, viewport: Size) {
        self.edges = SnapEdges::for_viewport(viewport);
    }

    /// Snaps a candidate top-left position for a window of the given size.
    ///
    /// Each axis is checked independently. The near edge wins over the far
    /// edge when both are within the threshold. Far edges align the
    /// window's far side, so the result is `edge - extent`.
    pub fn snap(&self, candidate: Point, window: Size) -> Point {
        let SnapEdges {
            top,
            bottom,
            left,
            right,
        } = self.edges;

        let y = if (candidate.y - top).abs() < self.threshold {
            top
        } else if (bottom - (candidate.y + window.height)).abs() < self.threshold {
            bottom - window.height
        } else {
            candidate.y
        };

        let x = if (candidate.x - left).abs() < self.threshold {
            left
        } else if (right - (candidate.x + window.width)).abs() < self.threshold {
            right - window.width
        } else {
            candidate.x
        };

        Point::new(x, y)
    }
}
