//! Window manager: drag, snap, stacking, minimize/maximize and taskbar.
//!
//! One manager is owned by the desktop root. Windows register against a
//! [`Surface`] and are then driven by explicit calls; every call mutates the
//! per-window [`WindowState`] synchronously and reports what changed.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::DeskConfig;

use super::scheduler::{Transition, TransitionScheduler};
use super::snap::SnapConfig;
use super::surface::Surface;
use super::taskbar::{Taskbar, TaskbarEntry};
use super::types::{Point, Size, Transform, VisualClass, WindowId, WindowState};

/// Delays used to sequence the minimize/restore animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimings {
    pub hide_delay_ms: u64,
    pub reflow_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinimizeOutcome {
    Minimized,
    Restored,
}

/// Position applied to a dragged window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragMove {
    pub window: WindowId,
    pub position: Point,
    pub snapped: bool,
}

/// A scheduled class change that has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedTransition {
    pub window: WindowId,
    pub transition: Transition,
}

#[derive(Debug, Clone)]
pub struct WindowManager {
    windows: HashMap<WindowId, WindowState>,
    base_z_index: u32,
    /// Highest z-index handed out to a normal window. Always below
    /// `maximized_z_index`; the stack is renumbered from the base when the
    /// counter reaches the pinned value.
    max_z_index: u32,
    maximized_z_index: u32,
    snap: SnapConfig,
    minimized: BTreeSet<WindowId>,
    taskbar: Taskbar,
    scheduler: TransitionScheduler,
    timings: AnimationTimings,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::from_config(&DeskConfig::default())
    }
}

impl WindowManager {
    pub fn from_config(config: &DeskConfig) -> Self {
        let viewport = Size::new(config.viewport.width(), config.viewport.height());
        Self {
            windows: HashMap::new(),
            base_z_index: config.stacking.base_z_index(),
            max_z_index: config.stacking.base_z_index(),
            maximized_z_index: config.stacking.maximized_z_index(),
            snap: SnapConfig::new(config.snap.threshold_px(), viewport),
            minimized: BTreeSet::new(),
            taskbar: Taskbar::new(),
            scheduler: TransitionScheduler::new(),
            timings: AnimationTimings {
                hide_delay_ms: config.animation.minimize_hide_delay_ms(),
                reflow_delay_ms: config.animation.restore_reflow_delay_ms(),
            },
        }
    }

    /// Makes a mounted window interactive.
    ///
    /// Silently does nothing if the node or its title bar is missing, or if
    /// the id is already registered. Returns true if state was allocated.
    pub fn register<S: Surface + ?Sized>(
        &mut self,
        surface: &S,
        id: &WindowId,
        label: Option<&str>,
    ) -> bool {
        if self.windows.contains_key(id) {
            debug!(event = "core.window.register_skipped", window = %id, reason = "already_registered");
            return false;
        }

        let Some(node) = surface.find_window(id) else {
            debug!(event = "core.window.register_skipped", window = %id, reason = "node_missing");
            return false;
        };
        if !node.has_title_bar {
            debug!(event = "core.window.register_skipped", window = %id, reason = "title_bar_missing");
            return false;
        }

        let title = label
            .map(str::to_string)
            .or_else(|| node.title.clone())
            .unwrap_or_else(|| id.to_string());

        self.windows.insert(
            id.clone(),
            WindowState::new(id.clone(), title, node.size, node.controls.maximize),
        );

        debug!(event = "core.window.registered", window = %id);
        true
    }

    /// Drops a window's state, its minimized-set and taskbar entries, and any
    /// pending transitions. Returns the removed state.
    pub fn unregister(&mut self, id: &WindowId) -> Option<WindowState> {
        let removed = self.windows.remove(id)?;
        self.minimized.remove(id);
        self.taskbar.remove(id);
        let cancelled = self.scheduler.cancel_window(id);

        debug!(
            event = "core.window.unregistered",
            window = %id,
            was_minimized = removed.minimized,
            cancelled_transitions = cancelled
        );
        Some(removed)
    }

    /// Title-bar press. Returns true if a drag started.
    pub fn begin_drag(&mut self, id: &WindowId, pointer: Point) -> bool {
        let Some(window) = self.windows.get_mut(id) else {
            return false;
        };
        if window.is_maximized() || window.minimized {
            return false;
        }

        window.add_class(VisualClass::Dragging);
        window.initial = pointer - window.offset;
        window.dragging = true;
        self.bring_to_front(id);
        true
    }

    /// Pointer move. Moves every dragging window that is neither maximized
    /// nor minimized, snapping it to nearby viewport edges.
    pub fn continue_drag(&mut self, pointer: Point) -> Vec<DragMove> {
        let snap = self.snap;
        let mut moves = Vec::new();

        for window in self.windows.values_mut() {
            if !window.dragging || window.is_maximized() || window.minimized {
                continue;
            }

            window.current = pointer - window.initial;
            let position = snap.snap(window.current, window.size);
            window.transform = Transform::translate(position);
            window.offset = position;

            moves.push(DragMove {
                window: window.id.clone(),
                position,
                snapped: position != window.current,
            });
        }

        moves.sort_by(|a, b| a.window.cmp(&b.window));
        moves
    }

    /// Pointer release. Returns the windows that stopped dragging.
    pub fn end_drag(&mut self) -> Vec<WindowId> {
        let mut ended: Vec<WindowId> = self
            .windows
            .values_mut()
            .filter(|w| w.dragging)
            .map(|window| {
                window.dragging = false;
                window.remove_class(VisualClass::Dragging);
                window.id.clone()
            })
            .collect();
        ended.sort();
        ended
    }

    /// Press anywhere on a window. Raises it unless maximized or minimized.
    pub fn press(&mut self, id: &WindowId) -> Option<u32> {
        let window = self.windows.get(id)?;
        if window.is_maximized() || window.minimized {
            return None;
        }
        self.bring_to_front(id)
    }

    /// Assigns the next z-index. Maximized windows keep their pinned value.
    ///
    /// Returns None when no z-index below the pinned value is left, even
    /// after renumbering.
    pub fn bring_to_front(&mut self, id: &WindowId) -> Option<u32> {
        if self.windows.get(id)?.is_maximized() {
            return None;
        }

        let Some(next) = self.next_z_index() else {
            warn!(
                event = "core.window.z_index_exhausted",
                window = %id,
                max_z_index = self.max_z_index,
                maximized_z_index = self.maximized_z_index
            );
            return None;
        };

        let window = self.windows.get_mut(id)?;
        window.z_index = Some(next);
        self.max_z_index = next;
        Some(next)
    }

    fn next_z_index(&mut self) -> Option<u32> {
        let pinned = self.maximized_z_index;
        if let Some(next) = self.max_z_index.checked_add(1).filter(|z| *z < pinned) {
            return Some(next);
        }

        self.compact_z_order();
        self.max_z_index.checked_add(1).filter(|z| *z < pinned)
    }

    /// Renumbers normal windows from the base z-index, keeping their order.
    fn compact_z_order(&mut self) {
        let mut stacked: Vec<(u32, WindowId)> = self
            .windows
            .values()
            .filter(|w| !w.is_maximized())
            .filter_map(|w| w.z_index.map(|z| (z, w.id.clone())))
            .collect();
        stacked.sort();

        let mut z = self.base_z_index;
        for (_, id) in &stacked {
            let Some(next) = z.checked_add(1).filter(|n| *n < self.maximized_z_index) else {
                break;
            };
            z = next;
            if let Some(window) = self.windows.get_mut(id) {
                window.z_index = Some(z);
            }
        }
        self.max_z_index = z;

        debug!(
            event = "core.window.z_order_compacted",
            window_count = stacked.len(),
            max_z_index = z
        );
    }

    /// Flips the maximized class. Returns the new maximized flag, or None if
    /// the window is unknown or minimized.
    pub fn toggle_maximize(&mut self, id: &WindowId) -> Option<bool> {
        let window = self.windows.get_mut(id)?;
        if window.minimized {
            return None;
        }

        if window.is_maximized() {
            window.remove_class(VisualClass::Maximized);
            self.bring_to_front(id);
            Some(false)
        } else {
            window.add_class(VisualClass::Maximized);
            window.z_index = Some(self.maximized_z_index);
            Some(true)
        }
    }

    /// Title-bar double click; only windows with a maximize control react.
    pub fn double_click_title(&mut self, id: &WindowId) -> Option<bool> {
        if !self.windows.get(id)?.can_maximize {
            return None;
        }
        self.toggle_maximize(id)
    }

    /// Minimizes a visible window or restores a minimized one.
    pub fn toggle_minimize(&mut self, id: &WindowId) -> Option<MinimizeOutcome> {
        let window = self.windows.get_mut(id)?;
        self.scheduler.cancel_window(id);

        if !window.minimized {
            window.saved_transform = window.transform;
            window.was_maximized = window.is_maximized();

            if window.was_maximized {
                window.remove_class(VisualClass::Maximized);
                window.transform = Transform::translate(window.offset);
            }

            window.add_class(VisualClass::Minimized);
            window.minimized = true;
            let label = window.title.clone();

            self.scheduler.schedule(
                id.clone(),
                Transition::HideMinimized,
                self.timings.hide_delay_ms,
            );
            self.minimized.insert(id.clone());
            self.taskbar.add(id.clone(), label);

            info!(event = "core.window.minimized", window = %id);
            Some(MinimizeOutcome::Minimized)
        } else {
            window.remove_class(VisualClass::MinimizedHidden);
            window.minimized = false;

            if window.was_maximized {
                window.add_class(VisualClass::Maximized);
                window.transform = Transform::None;
            }

            self.scheduler.schedule(
                id.clone(),
                Transition::ClearMinimized,
                self.timings.reflow_delay_ms,
            );
            self.minimized.remove(id);
            self.taskbar.remove(id);
            self.bring_to_front(id);

            info!(event = "core.window.restored", window = %id);
            Some(MinimizeOutcome::Restored)
        }
    }

    /// Taskbar entry click. Only minimized windows have entries.
    pub fn activate_taskbar_entry(&mut self, id: &WindowId) -> Option<MinimizeOutcome> {
        if !self.minimized.contains(id) {
            return None;
        }
        self.toggle_minimize(id)
    }

    /// Adds the `hidden` class, as done by a shell's close button.
    pub fn hide(&mut self, id: &WindowId) -> bool {
        match self.windows.get_mut(id) {
            Some(window) => {
                window.add_class(VisualClass::Hidden);
                true
            }
            None => false,
        }
    }

    pub fn update_snap_points(&mut self, viewport: Size) {
        self.snap.update_viewport(viewport);
        debug!(
            event = "core.window.snap_points_updated",
            width = viewport.width,
            height = viewport.height
        );
    }

    /// Advances the logical clock and applies the transitions that became due.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<AppliedTransition> {
        let mut applied = Vec::new();

        for scheduled in self.scheduler.advance(elapsed_ms) {
            let Some(window) = self.windows.get_mut(&scheduled.window) else {
                continue;
            };

            let class = scheduled.transition.class();
            if scheduled.transition.adds_class() {
                window.add_class(class);
            } else {
                window.remove_class(class);
            }

            applied.push(AppliedTransition {
                window: scheduled.window,
                transition: scheduled.transition,
            });
        }

        applied
    }

    /// Snaps a candidate position with the current snap configuration.
    pub fn snap(&self, candidate: Point, window: Size) -> Point {
        self.snap.snap(candidate, window)
    }

    pub fn snap_config(&self) -> &SnapConfig {
        &self.snap
    }

    pub fn window(&self, id: &WindowId) -> Option<&WindowState> {
        self.windows.get(id)
    }

    pub fn is_registered(&self, id: &WindowId) -> bool {
        self.windows.contains_key(id)
    }

    /// Registered windows, bottom of the stack first.
    ///
    /// Windows never brought to front sort below everything else; ties break
    /// on id so the order is stable.
    pub fn windows(&self) -> Vec<&WindowState> {
        let mut windows: Vec<&WindowState> = self.windows.values().collect();
        windows.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        windows
    }

    pub fn minimized_windows(&self) -> impl Iterator<Item = &WindowId> {
        self.minimized.iter()
    }

    pub fn taskbar(&self) -> &[TaskbarEntry] {
        self.taskbar.entries()
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    pub fn pending_transitions(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Highest z-index handed out to a non-maximized window so far.
    pub fn max_z_index(&self) -> u32 {
        self.max_z_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::surface::{ControlSet, DesktopSurface, WindowNode};

    fn surface_with(ids: &[&str]) -> DesktopSurface {
        let mut surface = DesktopSurface::new(Size::new(1000.0, 800.0));
        for id in ids {
            surface.mount(
                WindowId::new(*id),
                WindowNode {
                    title: Some(format!("{} title", id)),
                    has_title_bar: true,
                    controls: ControlSet::default(),
                    size: Size::new(200.0, 100.0),
                },
            );
        }
        surface
    }

    fn manager_with(ids: &[&str]) -> (WindowManager, Vec<WindowId>) {
        let surface = surface_with(ids);
        let mut manager = WindowManager::default();
        let ids: Vec<WindowId> = ids.iter().map(|id| WindowId::new(*id)).collect();
        for id in &ids {
            assert!(manager.register(&surface, id, None));
        }
        (manager, ids)
    }

    #[test]
    fn test_register_missing_node_is_noop() {
        let surface = surface_with(&[]);
        let mut manager = WindowManager::default();
        assert!(!manager.register(&surface, &WindowId::new("ghost"), None));
        assert!(manager.windows().is_empty());
    }

    #[test]
    fn test_register_without_title_bar_is_noop() {
        let mut surface = surface_with(&[]);
        surface.mount(
            WindowId::new("bare"),
            WindowNode {
                title: None,
                has_title_bar: false,
                controls: ControlSet::default(),
                size: Size::new(10.0, 10.0),
            },
        );
        let mut manager = WindowManager::default();
        assert!(!manager.register(&surface, &WindowId::new("bare"), None));
    }

    #[test]
    fn test_register_title_resolution() {
        let mut surface = surface_with(&["labelled", "titled"]);
        surface.mount(
            WindowId::new("untitled"),
            WindowNode {
                title: None,
                has_title_bar: true,
                controls: ControlSet::default(),
                size: Size::new(10.0, 10.0),
            },
        );
        let mut manager = WindowManager::default();
        manager.register(&surface, &WindowId::new("labelled"), Some("Collatz"));
        manager.register(&surface, &WindowId::new("titled"), None);
        manager.register(&surface, &WindowId::new("untitled"), None);

        let title = |id: &str| manager.window(&WindowId::new(id)).unwrap().title.clone();
        assert_eq!(title("labelled"), "Collatz");
        assert_eq!(title("titled"), "titled title");
        assert_eq!(title("untitled"), "untitled");
    }

    #[test]
    fn test_register_twice_keeps_first_state() {
        let surface = surface_with(&["a"]);
        let mut manager = WindowManager::default();
        let id = WindowId::new("a");
        assert!(manager.register(&surface, &id, None));
        manager.bring_to_front(&id);
        assert!(!manager.register(&surface, &id, Some("other")));
        assert_eq!(manager.window(&id).unwrap().z_index, Some(101));
    }

    #[test]
    fn test_drag_moves_by_pointer_delta() {
        let (mut manager, ids) = manager_with(&["a"]);
        let a = &ids[0];

        assert!(manager.begin_drag(a, Point::new(300.0, 300.0)));
        assert!(manager.window(a).unwrap().has_class(VisualClass::Dragging));

        let moves = manager.continue_drag(Point::new(400.0, 350.0));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].position, Point::new(100.0, 50.0));
        assert!(!moves[0].snapped);

        let window = manager.window(a).unwrap();
        assert_eq!(window.transform.css(), "translate(100px, 50px)");
        assert_eq!(window.offset, Point::new(100.0, 50.0));

        assert_eq!(manager.end_drag(), vec![a.clone()]);
        assert!(!manager.window(a).unwrap().has_class(VisualClass::Dragging));

        // A second drag continues from the stored offset
        manager.begin_drag(a, Point::new(500.0, 500.0));
        manager.continue_drag(Point::new(550.0, 600.0));
        assert_eq!(manager.window(a).unwrap().offset, Point::new(150.0, 150.0));
    }

    #[test]
    fn test_drag_snaps_to_edges() {
        let (mut manager, ids) = manager_with(&["a"]);
        let a = &ids[0];

        manager.begin_drag(a, Point::new(0.0, 0.0));
        let moves = manager.continue_drag(Point::new(12.0, 690.0));
        assert_eq!(moves[0].position, Point::new(0.0, 700.0));
        assert!(moves[0].snapped);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let (mut manager, _) = manager_with(&["a"]);
        assert!(manager.continue_drag(Point::new(50.0, 50.0)).is_empty());
        assert!(manager.end_drag().is_empty());
    }

    #[test]
    fn test_drag_ignored_while_maximized_or_minimized() {
        let (mut manager, ids) = manager_with(&["a", "b"]);

        manager.toggle_maximize(&ids[0]);
        assert!(!manager.begin_drag(&ids[0], Point::ORIGIN));

        manager.toggle_minimize(&ids[1]);
        assert!(!manager.begin_drag(&ids[1], Point::ORIGIN));
    }

    #[test]
    fn test_bring_to_front_is_strictly_increasing() {
        let (mut manager, ids) = manager_with(&["a", "b", "c"]);
        let mut last = 0;
        for id in ids.iter().chain(ids.iter().rev()) {
            let z = manager.bring_to_front(id).unwrap();
            assert!(z > last);
            last = z;
        }
        assert_eq!(manager.max_z_index(), 106);
    }

    #[test]
    fn test_press_raises_normal_windows_only() {
        let (mut manager, ids) = manager_with(&["a", "b"]);
        assert_eq!(manager.press(&ids[0]), Some(101));

        manager.toggle_maximize(&ids[1]);
        assert_eq!(manager.press(&ids[1]), None);
        assert_eq!(manager.window(&ids[1]).unwrap().z_index, Some(9999));
    }

    #[test]
    fn test_toggle_maximize_twice_returns_to_normal_sequence() {
        let (mut manager, ids) = manager_with(&["a"]);
        let a = &ids[0];
        manager.bring_to_front(a);

        assert_eq!(manager.toggle_maximize(a), Some(true));
        assert_eq!(manager.window(a).unwrap().z_index, Some(9999));
        assert_eq!(manager.bring_to_front(a), None);

        assert_eq!(manager.toggle_maximize(a), Some(false));
        let window = manager.window(a).unwrap();
        assert!(!window.is_maximized());
        assert_eq!(window.z_index, Some(102));
    }

    #[test]
    fn test_double_click_requires_maximize_control() {
        let mut surface = surface_with(&["a"]);
        surface.mount(
            WindowId::new("card"),
            WindowNode {
                title: Some("Authors".to_string()),
                has_title_bar: true,
                controls: ControlSet {
                    minimize: false,
                    maximize: false,
                    close: true,
                },
                size: Size::new(10.0, 10.0),
            },
        );
        let mut manager = WindowManager::default();
        manager.register(&surface, &WindowId::new("a"), None);
        manager.register(&surface, &WindowId::new("card"), None);

        assert_eq!(manager.double_click_title(&WindowId::new("a")), Some(true));
        assert_eq!(manager.double_click_title(&WindowId::new("card")), None);
    }

    #[test]
    fn test_minimize_then_hide_after_delay() {
        let (mut manager, ids) = manager_with(&["a"]);
        let a = &ids[0];

        assert_eq!(manager.toggle_minimize(a), Some(MinimizeOutcome::Minimized));
        let window = manager.window(a).unwrap();
        assert!(window.minimized);
        assert_eq!(window.class_names(), vec!["minimized"]);
        assert_eq!(manager.taskbar().len(), 1);
        assert_eq!(manager.taskbar()[0].label, "a title");
        assert_eq!(manager.minimized_windows().count(), 1);

        assert!(manager.advance(299).is_empty());
        let applied = manager.advance(1);
        assert_eq!(applied[0].transition, Transition::HideMinimized);
        assert_eq!(
            manager.window(a).unwrap().class_names(),
            vec!["minimized", "minimized-hidden"]
        );
    }

    #[test]
    fn test_restore_reverses_minimize() {
        let (mut manager, ids) = manager_with(&["a"]);
        let a = &ids[0];
        manager.toggle_minimize(a);
        manager.advance(300);

        assert_eq!(
            manager.activate_taskbar_entry(a),
            Some(MinimizeOutcome::Restored)
        );
        let window = manager.window(a).unwrap();
        assert!(!window.minimized);
        assert_eq!(window.class_names(), vec!["minimized"]);
        assert_eq!(window.z_index, Some(101));
        assert!(manager.taskbar().is_empty());
        assert_eq!(manager.minimized_windows().count(), 0);

        manager.advance(10);
        assert!(manager.window(a).unwrap().classes.is_empty());
    }

    #[test]
    fn test_minimize_maximized_then_restore_reapplies_maximized() {
        let (mut manager, ids) = manager_with(&["a"]);
        let a = &ids[0];

        manager.begin_drag(a, Point::ORIGIN);
        manager.continue_drag(Point::new(100.0, 100.0));
        manager.end_drag();
        manager.toggle_maximize(a);

        manager.toggle_minimize(a);
        let window = manager.window(a).unwrap();
        assert!(window.was_maximized);
        assert!(!window.is_maximized());
        assert_eq!(window.transform.css(), "translate(100px, 100px)");

        manager.advance(300);
        manager.toggle_minimize(a);
        let window = manager.window(a).unwrap();
        assert!(window.is_maximized());
        assert_eq!(window.transform, Transform::None);
        assert_eq!(window.z_index, Some(9999));
    }

    #[test]
    fn test_restore_before_hide_fires_stays_visible() {
        let (mut manager, ids) = manager_with(&["a"]);
        let a = &ids[0];

        manager.toggle_minimize(a);
        manager.advance(100);
        manager.toggle_minimize(a);
        manager.advance(1000);

        let window = manager.window(a).unwrap();
        assert!(!window.minimized);
        assert!(!window.has_class(VisualClass::MinimizedHidden));
        assert!(!window.has_class(VisualClass::Minimized));
        assert_eq!(manager.pending_transitions(), 0);
    }

    #[test]
    fn test_minimize_before_reflow_fires_stays_minimized() {
        let (mut manager, ids) = manager_with(&["a"]);
        let a = &ids[0];

        manager.toggle_minimize(a);
        manager.advance(300);
        manager.toggle_minimize(a);
        manager.advance(5);
        manager.toggle_minimize(a);
        manager.advance(1000);

        let window = manager.window(a).unwrap();
        assert!(window.minimized);
        assert_eq!(window.class_names(), vec!["minimized", "minimized-hidden"]);
    }

    #[test]
    fn test_minimized_suppresses_maximize() {
        let (mut manager, ids) = manager_with(&["a"]);
        manager.toggle_minimize(&ids[0]);
        assert_eq!(manager.toggle_maximize(&ids[0]), None);
        assert_eq!(manager.double_click_title(&ids[0]), None);
    }

    #[test]
    fn test_taskbar_click_on_visible_window_is_noop() {
        let (mut manager, ids) = manager_with(&["a"]);
        assert_eq!(manager.activate_taskbar_entry(&ids[0]), None);
    }

    #[test]
    fn test_unregister_minimized_window_cleans_taskbar_and_timers() {
        let (mut manager, ids) = manager_with(&["a", "b"]);
        manager.toggle_minimize(&ids[0]);
        manager.toggle_minimize(&ids[1]);

        assert!(manager.unregister(&ids[0]).is_some());
        assert!(manager.window(&ids[0]).is_none());
        assert_eq!(manager.taskbar().len(), 1);
        assert_eq!(manager.taskbar()[0].window, ids[1]);
        assert_eq!(manager.minimized_windows().collect::<Vec<_>>(), vec![&ids[1]]);
        assert_eq!(manager.pending_transitions(), 1);
        assert!(manager.unregister(&ids[0]).is_none());
    }

    #[test]
    fn test_update_snap_points_uses_new_viewport() {
        let (mut manager, _) = manager_with(&[]);
        manager.update_snap_points(Size::new(500.0, 400.0));
        let snapped = manager.snap(Point::new(290.0, 290.0), Size::new(200.0, 100.0));
        assert_eq!(snapped, Point::new(300.0, 300.0));
    }

    #[test]
    fn test_windows_sorted_by_stack_order() {
        let (mut manager, ids) = manager_with(&["a", "b", "c"]);
        manager.bring_to_front(&ids[2]);
        manager.bring_to_front(&ids[0]);

        let order: Vec<&str> = manager.windows().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_hide_adds_hidden_class() {
        let (mut manager, ids) = manager_with(&["a"]);
        assert!(manager.hide(&ids[0]));
        assert!(manager.window(&ids[0]).unwrap().has_class(VisualClass::Hidden));
        assert!(!manager.hide(&WindowId::new("missing")));
    }

    fn manager_with_stacking(ids: &[&str], base: u32, pinned: u32) -> (WindowManager, Vec<WindowId>) {
        let surface = surface_with(ids);
        let mut config = DeskConfig::default();
        config.stacking.base_z_index = Some(base);
        config.stacking.maximized_z_index = Some(pinned);
        let mut manager = WindowManager::from_config(&config);
        let ids: Vec<WindowId> = ids.iter().map(|id| WindowId::new(*id)).collect();
        for id in &ids {
            assert!(manager.register(&surface, id, None));
        }
        (manager, ids)
    }

    #[test]
    fn test_raise_at_top_of_u32_range_does_not_overflow() {
        let (mut manager, ids) = manager_with_stacking(&["a", "b", "c"], u32::MAX - 2, u32::MAX);

        assert_eq!(manager.bring_to_front(&ids[0]), Some(u32::MAX - 1));
        assert_eq!(manager.bring_to_front(&ids[1]), None);
        assert_eq!(manager.bring_to_front(&ids[2]), None);
        assert_eq!(manager.window(&ids[0]).unwrap().z_index, Some(u32::MAX - 1));
        assert_eq!(manager.max_z_index(), u32::MAX - 1);
    }

    #[test]
    fn test_normal_windows_stay_below_maximized_pin() {
        let (mut manager, ids) = manager_with(&["max", "a", "b"]);
        assert_eq!(manager.toggle_maximize(&ids[0]), Some(true));

        for i in 0..10_000 {
            let id = &ids[1 + i % 2];
            let z = manager.press(id).unwrap();
            assert!(z < 9999, "press {} gave z={}", i, z);
        }

        assert_eq!(manager.window(&ids[0]).unwrap().z_index, Some(9999));
        let a = manager.window(&ids[1]).unwrap().z_index.unwrap();
        let b = manager.window(&ids[2]).unwrap().z_index.unwrap();
        assert!(b > a, "last pressed window must be on top: a={} b={}", a, b);
    }

    #[test]
    fn test_compaction_keeps_stack_order() {
        let (mut manager, ids) = manager_with_stacking(&["a", "b"], 100, 104);

        assert_eq!(manager.bring_to_front(&ids[0]), Some(101));
        assert_eq!(manager.bring_to_front(&ids[1]), Some(102));
        assert_eq!(manager.bring_to_front(&ids[0]), Some(103));
        // Counter is full: b and a renumber to 101 and 102, then b takes 103.
        assert_eq!(manager.bring_to_front(&ids[1]), Some(103));

        assert_eq!(manager.window(&ids[0]).unwrap().z_index, Some(102));
        let order: Vec<&str> = manager.windows().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn test_full_range_refuses_raise() {
        let (mut manager, ids) = manager_with_stacking(&["a", "b", "c"], 100, 103);

        assert_eq!(manager.bring_to_front(&ids[0]), Some(101));
        assert_eq!(manager.bring_to_front(&ids[1]), Some(102));
        assert_eq!(manager.bring_to_front(&ids[2]), None);
        assert_eq!(manager.window(&ids[2]).unwrap().z_index, None);
    }
}
