use std::collections::BTreeMap;

use super::{DesktopId, DesktopTracker};
use crate::types::WindowId;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Membership {
    desktop: DesktopId,
    sticky: bool,
}

/// Fixed set of numbered desktops with one current desktop
#[derive(Clone, Debug)]
pub struct DesktopManager {
    count: DesktopId,
    current: DesktopId,
    members: BTreeMap<WindowId, Membership>,
}

impl DesktopManager {
    /// Create `count` desktops (at least one), starting on desktop 1.
    pub fn new(count: DesktopId) -> Self {
        Self {
            count: count.max(1),
            current: 1,
            members: BTreeMap::new(),
        }
    }

    /// Number of desktops
    pub fn count(&self) -> DesktopId {
        self.count
    }

    /// The desktop being shown
    pub fn current(&self) -> DesktopId {
        self.current
    }

    /// Desktop a window lives on
    pub fn desktop_of(&self, window: WindowId) -> Option<DesktopId> {
        self.members.get(&window).map(|m| m.desktop)
    }

    /// Whether a window is shown on every desktop
    pub fn is_sticky(&self, window: WindowId) -> bool {
        self.members.get(&window).is_some_and(|m| m.sticky)
    }

    /// Whether a window is tracked
    pub fn contains(&self, window: WindowId) -> bool {
        self.members.contains_key(&window)
    }

    /// Number of tracked windows
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when no windows are tracked
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Tracked windows in id order
    pub fn windows(&self) -> impl Iterator<Item = WindowId> + '_ {
        self.members.keys().copied()
    }

    /// Show a different desktop. Returns false if `desktop` does not exist
    /// or is already current.
    pub fn switch_to(&mut self, desktop: DesktopId) -> bool {
        if desktop == 0 || desktop > self.count || desktop == self.current {
            return false;
        }
        self.current = desktop;
        true
    }

    /// Show the next desktop, wrapping around.
    pub fn next(&mut self) {
        self.current = wrap_next(self.current, self.count);
    }

    /// Show the previous desktop, wrapping around.
    pub fn prev(&mut self) {
        self.current = wrap_prev(self.current, self.count);
    }

    /// Move a window to the next desktop. Sticky windows stay put.
    pub fn move_next(&mut self, window: WindowId) -> bool {
        let count = self.count;
        self.move_window(window, |d| wrap_next(d, count))
    }

    /// Move a window to the previous desktop. Sticky windows stay put.
    pub fn move_prev(&mut self, window: WindowId) -> bool {
        let count = self.count;
        self.move_window(window, |d| wrap_prev(d, count))
    }

    fn move_window(&mut self, window: WindowId, f: impl FnOnce(DesktopId) -> DesktopId) -> bool {
        match self.members.get_mut(&window) {
            Some(m) if !m.sticky => {
                m.desktop = f(m.desktop);
                true
            }
            _ => false,
        }
    }
}

fn wrap_next(desktop: DesktopId, count: DesktopId) -> DesktopId {
    if desktop >= count {
        1
    } else {
        desktop + 1
    }
}

fn wrap_prev(desktop: DesktopId, count: DesktopId) -> DesktopId {
    if desktop <= 1 {
        count
    } else {
        desktop - 1
    }
}

impl DesktopTracker for DesktopManager {
    fn add_desktop(&mut self, window: WindowId) {
        self.members.entry(window).or_insert(Membership {
            desktop: self.current,
            sticky: false,
        });
    }

    fn delete_desktop(&mut self, window: WindowId) {
        self.members.remove(&window);
    }

    fn reset_desktop(&mut self, window: WindowId) {
        let current = self.current;
        if let Some(m) = self.members.get_mut(&window) {
            m.desktop = current;
        }
    }

    fn flip_sticky(&mut self, window: WindowId) {
        if let Some(m) = self.members.get_mut(&window) {
            m.sticky = !m.sticky;
        }
    }

    fn is_visible(&self, window: WindowId) -> bool {
        self.members
            .get(&window)
            .is_some_and(|m| m.sticky || m.desktop == self.current)
    }
}
