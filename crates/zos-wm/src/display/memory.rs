//! In-memory window system for testing.
//!
//! Keeps a map of windows and a stacking list, and records the side
//! effects the core produces so tests can assert on them.

use std::collections::{BTreeMap, VecDeque};

use super::{NotificationKind, WindowAttributes, WindowSystem};
use crate::math::{Point, Rect, Size};
use crate::types::WindowId;

/// Geometry given to icon windows; real placement belongs to the icon bar.
const ICON_GEOMETRY: Rect = Rect::new(0, 0, 75, 20);

/// A window known to the [`MemoryDisplay`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryWindow {
    pub geometry: Rect,
    pub mapped: bool,
    pub override_redirect: bool,
    pub input_only: bool,
    /// Whether focus requests are honoured
    pub accepts_focus: bool,
    pub transient_for: Option<WindowId>,
    pub class: Option<String>,
    pub border_width: u32,
    pub border_color: Option<u32>,
    pub buttons_grabbed: bool,
    pub structure_events: bool,
    /// Set for icon windows: the client they stand in for
    pub icon_for: Option<WindowId>,
    pub placeholder: bool,
}

impl MemoryWindow {
    /// A mapped, focusable client window
    pub fn new(geometry: Rect) -> Self {
        Self {
            geometry,
            mapped: true,
            accepts_focus: true,
            ..Default::default()
        }
    }

    /// Mark as override-redirect (popup menus, tooltips)
    pub fn override_redirect(mut self) -> Self {
        self.override_redirect = true;
        self
    }

    /// Mark as input-only
    pub fn input_only(mut self) -> Self {
        self.input_only = true;
        self
    }

    /// Ignore focus requests
    pub fn refuse_focus(mut self) -> Self {
        self.accepts_focus = false;
        self
    }

    /// Start unmapped
    pub fn unmapped(mut self) -> Self {
        self.mapped = false;
        self
    }

    /// Mark as a dialog of `parent`
    pub fn transient_for(mut self, parent: WindowId) -> Self {
        self.transient_for = Some(parent);
        self
    }

    /// Set the window class
    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    fn viewable(&self) -> bool {
        self.mapped && !self.input_only
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    Configure(WindowId),
    Motion(Point),
}

impl Pending {
    fn kind(&self) -> NotificationKind {
        match self {
            Pending::Configure(_) => NotificationKind::Configure,
            Pending::Motion(_) => NotificationKind::Motion,
        }
    }
}

/// In-memory [`WindowSystem`] for testing.
#[derive(Debug)]
pub struct MemoryDisplay {
    windows: BTreeMap<WindowId, MemoryWindow>,
    /// Back-to-front
    stacking: Vec<WindowId>,
    next_id: WindowId,
    focus: Option<WindowId>,
    pointer: Point,
    pointer_grab: Option<WindowId>,
    pending: VecDeque<Pending>,
    close_requests: Vec<WindowId>,
    restacks: usize,
    requests: usize,
}

impl Default for MemoryDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDisplay {
    /// Create an empty display.
    pub fn new() -> Self {
        Self {
            windows: BTreeMap::new(),
            stacking: Vec::new(),
            next_id: 1,
            focus: None,
            pointer: Point::ORIGIN,
            pointer_grab: None,
            pending: VecDeque::new(),
            close_requests: Vec::new(),
            restacks: 0,
            requests: 0,
        }
    }

    /// Add a window as a client application would and return its id.
    pub fn add_window(&mut self, window: MemoryWindow) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;
        self.windows.insert(id, window);
        self.stacking.push(id);
        id
    }

    /// Drop a window as if its owner destroyed it.
    pub fn remove_window(&mut self, window: WindowId) {
        self.forget(window);
    }

    /// Look up a window.
    pub fn window(&self, window: WindowId) -> Option<&MemoryWindow> {
        self.windows.get(&window)
    }

    /// Mutable access, for tests that poke at window state directly.
    pub fn window_mut(&mut self, window: WindowId) -> Option<&mut MemoryWindow> {
        self.windows.get_mut(&window)
    }

    /// Number of windows the display knows about
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Current stacking order, back to front
    pub fn stacking_order(&self) -> &[WindowId] {
        &self.stacking
    }

    /// Queue a pointer motion notification and move the pointer there.
    pub fn push_motion(&mut self, position: Point) {
        self.pointer = position;
        self.pending.push_back(Pending::Motion(position));
    }

    /// Move the pointer without queueing a notification.
    pub fn set_pointer(&mut self, position: Point) {
        self.pointer = position;
    }

    /// Count pending notifications of one kind.
    pub fn pending(&self, kind: NotificationKind) -> usize {
        self.pending.iter().filter(|p| p.kind() == kind).count()
    }

    /// Windows that were asked to close, in order
    pub fn close_requests(&self) -> &[WindowId] {
        &self.close_requests
    }

    /// Number of restack requests received
    pub fn restack_count(&self) -> usize {
        self.restacks
    }

    /// Number of mutating requests received of any kind
    pub fn request_count(&self) -> usize {
        self.requests
    }

    /// Window holding the pointer grab
    pub fn pointer_grab(&self) -> Option<WindowId> {
        self.pointer_grab
    }

    fn allocate(&mut self, window: MemoryWindow) -> WindowId {
        self.requests += 1;
        self.add_window(window)
    }

    fn configured(&mut self, window: WindowId) {
        self.pending.push_back(Pending::Configure(window));
    }

    fn forget(&mut self, window: WindowId) {
        self.windows.remove(&window);
        self.stacking.retain(|&w| w != window);
        if self.focus == Some(window) {
            self.focus = None;
        }
        if self.pointer_grab == Some(window) {
            self.pointer_grab = None;
        }
    }

    fn update(&mut self, window: WindowId, f: impl FnOnce(&mut MemoryWindow)) -> bool {
        self.requests += 1;
        match self.windows.get_mut(&window) {
            Some(w) => {
                f(w);
                true
            }
            None => false,
        }
    }
}

impl WindowSystem for MemoryDisplay {
    fn attributes(&self, window: WindowId) -> Option<WindowAttributes> {
        self.windows.get(&window).map(|w| WindowAttributes {
            geometry: w.geometry,
            override_redirect: w.override_redirect,
            input_only: w.input_only,
            viewable: w.viewable(),
        })
    }

    fn transient_for(&self, window: WindowId) -> Option<WindowId> {
        self.windows.get(&window).and_then(|w| w.transient_for)
    }

    fn class_name(&self, window: WindowId) -> Option<String> {
        self.windows.get(&window).and_then(|w| w.class.clone())
    }

    fn input_focus(&self) -> Option<WindowId> {
        self.focus
    }

    fn pointer_position(&self) -> Point {
        self.pointer
    }

    fn select_structure_events(&mut self, window: WindowId) {
        self.update(window, |w| w.structure_events = true);
    }

    fn set_border_width(&mut self, window: WindowId, width: u32) {
        if self.update(window, |w| w.border_width = width) {
            self.configured(window);
        }
    }

    fn set_border_color(&mut self, window: WindowId, color: u32) {
        self.update(window, |w| w.border_color = Some(color));
    }

    fn map(&mut self, window: WindowId) {
        self.update(window, |w| w.mapped = true);
    }

    fn unmap(&mut self, window: WindowId) {
        self.update(window, |w| w.mapped = false);
        if self.focus == Some(window) {
            self.focus = None;
        }
    }

    fn move_window(&mut self, window: WindowId, position: Point) {
        if self.update(window, |w| {
            w.geometry = Rect::from_pos_size(position, w.geometry.size())
        }) {
            self.configured(window);
        }
    }

    fn resize_window(&mut self, window: WindowId, size: Size) {
        if self.update(window, |w| {
            w.geometry = Rect::from_pos_size(w.geometry.position(), size)
        }) {
            self.configured(window);
        }
    }

    fn move_resize(&mut self, window: WindowId, geometry: Rect) {
        if self.update(window, |w| w.geometry = geometry) {
            self.configured(window);
        }
    }

    fn restack(&mut self, order: &[WindowId]) {
        self.requests += 1;
        self.restacks += 1;

        let known: Vec<WindowId> = order
            .iter()
            .copied()
            .filter(|w| self.windows.contains_key(w))
            .collect();
        self.stacking.retain(|w| !known.contains(w));
        self.stacking.extend_from_slice(&known);
        for window in known {
            self.configured(window);
        }
    }

    fn grab_buttons(&mut self, window: WindowId) {
        self.update(window, |w| w.buttons_grabbed = true);
    }

    fn ungrab_buttons(&mut self, window: WindowId) {
        self.update(window, |w| w.buttons_grabbed = false);
    }

    fn set_input_focus(&mut self, window: WindowId) {
        self.requests += 1;
        let honoured = self
            .windows
            .get(&window)
            .is_some_and(|w| w.viewable() && w.accepts_focus);
        if honoured {
            self.focus = Some(window);
        }
    }

    fn grab_pointer(&mut self, window: WindowId) {
        self.requests += 1;
        self.pointer_grab = Some(window);
    }

    fn ungrab_pointer(&mut self) {
        self.requests += 1;
        self.pointer_grab = None;
    }

    fn send_close_request(&mut self, window: WindowId) {
        self.requests += 1;
        self.close_requests.push(window);
    }

    fn create_icon_window(&mut self, client: WindowId) -> WindowId {
        self.allocate(MemoryWindow {
            geometry: ICON_GEOMETRY,
            icon_for: Some(client),
            ..Default::default()
        })
    }

    fn create_placeholder(&mut self, geometry: Rect) -> WindowId {
        self.allocate(MemoryWindow {
            geometry,
            placeholder: true,
            ..Default::default()
        })
    }

    fn destroy_window(&mut self, window: WindowId) {
        self.requests += 1;
        self.forget(window);
    }

    fn drain_notifications(&mut self, kind: NotificationKind) -> usize {
        let before = self.pending.len();
        self.pending.retain(|p| p.kind() != kind);
        before - self.pending.len()
    }

    fn latest_motion(&mut self) -> Option<Point> {
        let latest = self.pending.iter().rev().find_map(|p| match p {
            Pending::Motion(position) => Some(*position),
            Pending::Configure(_) => None,
        });
        self.drain_notifications(NotificationKind::Motion);
        latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn display_with_window() -> (MemoryDisplay, WindowId) {
        let mut display = MemoryDisplay::new();
        let id = display.add_window(MemoryWindow::new(Rect::new(0, 0, 100, 100)));
        (display, id)
    }

    #[test]
    fn test_focus_requires_viewable_window() {
        let (mut display, id) = display_with_window();

        display.unmap(id);
        display.set_input_focus(id);
        assert_eq!(display.input_focus(), None);

        display.map(id);
        display.set_input_focus(id);
        assert_eq!(display.input_focus(), Some(id));
    }

    #[test]
    fn test_refusing_window_keeps_old_focus() {
        let (mut display, first) = display_with_window();
        let stubborn = display.add_window(MemoryWindow::new(Rect::default()).refuse_focus());

        display.set_input_focus(first);
        display.set_input_focus(stubborn);
        assert_eq!(display.input_focus(), Some(first));
    }

    #[test]
    fn test_restack_moves_listed_windows_to_front() {
        let mut display = MemoryDisplay::new();
        let a = display.add_window(MemoryWindow::default());
        let b = display.add_window(MemoryWindow::default());
        let c = display.add_window(MemoryWindow::default());

        display.restack(&[c, a]);
        assert_eq!(display.stacking_order(), &[b, c, a]);
        assert_eq!(display.pending(NotificationKind::Configure), 2);
        assert_eq!(display.restack_count(), 1);
    }

    #[test]
    fn test_drain_only_touches_requested_kind() {
        let (mut display, id) = display_with_window();
        display.move_window(id, Point::new(5, 5));
        display.push_motion(Point::new(1, 1));

        assert_eq!(display.drain_notifications(NotificationKind::Configure), 1);
        assert_eq!(display.pending(NotificationKind::Configure), 0);
        assert_eq!(display.pending(NotificationKind::Motion), 1);
    }

    #[test]
    fn test_latest_motion_coalesces() {
        let mut display = MemoryDisplay::new();
        assert_eq!(display.latest_motion(), None);

        display.push_motion(Point::new(1, 1));
        display.push_motion(Point::new(2, 2));
        display.push_motion(Point::new(3, 3));

        assert_eq!(display.latest_motion(), Some(Point::new(3, 3)));
        assert_eq!(display.pending(NotificationKind::Motion), 0);
    }

    #[test]
    fn test_destroy_window_clears_focus_and_stacking() {
        let (mut display, id) = display_with_window();
        display.set_input_focus(id);
        display.destroy_window(id);

        assert!(display.window(id).is_none());
        assert_eq!(display.input_focus(), None);
        assert!(display.stacking_order().is_empty());
    }
}
