//! Client lifecycle
//!
//! Provides the client registry, the transition table between client
//! states, icons, the move/resize session, and [`ClientManager`], which
//! ties them to the window system and the layer table.

mod icon;
mod manager;
mod session;
mod state;
mod transition;

pub use icon::Icon;
pub use manager::ClientManager;
pub use session::{MoveResizeSession, SessionKind};
pub use state::{Client, ClientState, Target};
