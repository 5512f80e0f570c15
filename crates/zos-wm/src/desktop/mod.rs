//! Desktop membership
//!
//! The client state machine only needs to ask which desktop bookkeeping
//! says a window should be on screen; [`DesktopTracker`] is that seam.
//! [`DesktopManager`] is the stock implementation.

mod manager;

pub use manager::DesktopManager;

use crate::types::WindowId;

/// Desktop identifier (1-based)
pub type DesktopId = u32;

/// Desktop bookkeeping consulted by the client state machine
pub trait DesktopTracker {
    /// Put a new client on the current desktop.
    fn add_desktop(&mut self, window: WindowId);

    /// Forget a client.
    fn delete_desktop(&mut self, window: WindowId);

    /// Move a client back onto the current desktop (used when it is restored from an icon).
    fn reset_desktop(&mut self, window: WindowId);

    /// Toggle whether a client appears on every desktop.
    fn flip_sticky(&mut self, window: WindowId);

    /// Whether a client belongs on screen given the current desktop.
    fn is_visible(&self, window: WindowId) -> bool;
}
