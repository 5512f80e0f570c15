//! Window-system service boundary
//!
//! The core never talks to a display server directly. Everything it needs
//! from one is expressed by [`WindowSystem`]; an X11 connection, a nested
//! compositor, or the in-memory [`MemoryDisplay`] used by tests can sit
//! behind it.
//!
//! All calls are treated as succeeding. The one outcome the core checks
//! is input focus, which it reads back after requesting it.

mod memory;

pub use memory::{MemoryDisplay, MemoryWindow};

use crate::math::{Point, Rect, Size};
use crate::types::WindowId;

/// Attributes the core reads before managing or focusing a window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowAttributes {
    /// Current geometry, border excluded
    pub geometry: Rect,
    /// The window asked not to be managed
    pub override_redirect: bool,
    /// The window only receives input and cannot be drawn or focused
    pub input_only: bool,
    /// The window and all its ancestors are mapped
    pub viewable: bool,
}

/// Kinds of pending notification the core drains from the event queue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// A window's geometry or stacking position changed
    Configure,
    /// The pointer moved
    Motion,
}

/// Window-system operations used by the client state machine and layer manager
pub trait WindowSystem {
    // ========== Queries ==========

    /// Attributes of a window, or `None` if the window system does not know it.
    fn attributes(&self, window: WindowId) -> Option<WindowAttributes>;

    /// The window this one is a transient (dialog) for.
    fn transient_for(&self, window: WindowId) -> Option<WindowId>;

    /// The class half of the window's class hint.
    fn class_name(&self, window: WindowId) -> Option<String>;

    /// The window currently holding input focus.
    fn input_focus(&self) -> Option<WindowId>;

    /// Current pointer location in root coordinates.
    fn pointer_position(&self) -> Point;

    // ========== Window Configuration ==========

    /// Subscribe to structure (geometry and lifecycle) notifications.
    fn select_structure_events(&mut self, window: WindowId);

    /// Set the border width.
    fn set_border_width(&mut self, window: WindowId, width: u32);

    /// Set the border colour.
    fn set_border_color(&mut self, window: WindowId, color: u32);

    /// Show a window.
    fn map(&mut self, window: WindowId);

    /// Hide a window.
    fn unmap(&mut self, window: WindowId);

    /// Move a window without resizing it.
    fn move_window(&mut self, window: WindowId, position: Point);

    /// Resize a window without moving it.
    fn resize_window(&mut self, window: WindowId, size: Size);

    /// Move and resize a window in one request.
    fn move_resize(&mut self, window: WindowId, geometry: Rect);

    /// Restack windows so that `order[0]` is at the back and the last entry
    /// is at the front.
    fn restack(&mut self, order: &[WindowId]);

    // ========== Input ==========

    /// Intercept button presses on a window (click-to-focus).
    fn grab_buttons(&mut self, window: WindowId);

    /// Stop intercepting button presses on a window.
    fn ungrab_buttons(&mut self, window: WindowId);

    /// Ask for input focus to move to a window. The request may be ignored.
    fn set_input_focus(&mut self, window: WindowId);

    /// Route all pointer events to a window.
    fn grab_pointer(&mut self, window: WindowId);

    /// Release a pointer grab.
    fn ungrab_pointer(&mut self);

    // ========== Manager-Owned Windows ==========

    /// Ask a client to close itself (WM_DELETE_WINDOW).
    fn send_close_request(&mut self, window: WindowId);

    /// Create the icon window standing in for an iconified client.
    fn create_icon_window(&mut self, client: WindowId) -> WindowId;

    /// Create an outline window used as a proxy during move/resize.
    fn create_placeholder(&mut self, geometry: Rect) -> WindowId;

    /// Destroy a window created by the manager.
    fn destroy_window(&mut self, window: WindowId);

    // ========== Event Queue ==========

    /// Discard every pending notification of `kind`, returning how many were dropped.
    fn drain_notifications(&mut self, kind: NotificationKind) -> usize;

    /// Discard pending pointer motion and return the most recent location, if any.
    fn latest_motion(&mut self) -> Option<Point>;
}
