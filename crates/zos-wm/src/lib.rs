//! Window Manager Core for Zero OS
//!
//! This crate decides, for every managed window, which semantic state it is
//! in and in which order windows are stacked:
//! - Client lifecycle (create, destroy, close)
//! - Focus with a single focused client at any time
//! - Iconify/restore and interactive move/resize through a placeholder
//! - Layer-based restacking with icons and the placeholder on top
//! - Desktop visibility and per-class actions
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     ClientManager                        │
//! │  ┌──────────────┐ ┌────────────┐ ┌────────────────────┐  │
//! │  │   registry   │ │ LayerTable │ │ icons / session    │  │
//! │  │ (id → state) │ │(id → layer)│ │ (owned by client)  │  │
//! │  └──────────────┘ └────────────┘ └────────────────────┘  │
//! └──────────────┬───────────────────────────┬───────────────┘
//!                │                           │
//!        ┌───────▼───────┐           ┌───────▼────────┐
//!        │ WindowSystem  │           │ DesktopTracker │
//!        │ (X11, memory) │           │ (membership)   │
//!        └───────────────┘           └────────────────┘
//! ```
//!
//! The crate is organized into focused modules:
//!
//! - [`client`]: client states, the transition table and [`ClientManager`]
//! - [`layer`]: the layer table and stacking-order computation
//! - [`display`]: the window-system boundary and an in-memory implementation
//! - [`desktop`]: desktop membership
//! - [`config`]: configuration and per-class actions
//! - [`placement`]: maximize and snap geometry
//!
//! ## Example
//!
//! ```rust
//! use zos_wm::{ClientManager, ClientState, MemoryDisplay, MemoryWindow, Rect, WmConfig};
//!
//! let mut display = MemoryDisplay::new();
//! let a = display.add_window(MemoryWindow::new(Rect::new(0, 0, 400, 300)));
//! let b = display.add_window(MemoryWindow::new(Rect::new(50, 50, 400, 300)));
//!
//! let mut wm = ClientManager::new(display, WmConfig::default());
//! wm.create(a);
//! wm.create(b);
//!
//! // The newest client takes focus from the previous one
//! assert_eq!(wm.state(a), Some(ClientState::Visible));
//! assert_eq!(wm.state(b), Some(ClientState::Active));
//! ```
//!
//! ## Design Principles
//!
//! 1. **Single owner**: every table lives in `ClientManager` and changes only through its methods
//! 2. **Table-driven**: legal transitions are data, illegal ones are a lookup miss
//! 3. **No error channel**: misbehaving windows are absorbed, never escalated
//! 4. **Testable without a display**: the window system sits behind a trait

pub mod client;
pub mod config;
pub mod desktop;
pub mod display;
pub mod error;
pub mod layer;
pub mod math;
pub mod placement;
pub mod policy;
pub mod types;

// Re-export core types for convenience
pub use client::{Client, ClientManager, ClientState, Icon, MoveResizeSession, SessionKind, Target};
pub use config::WmConfig;
pub use desktop::{DesktopId, DesktopManager, DesktopTracker};
pub use display::{MemoryDisplay, MemoryWindow, NotificationKind, WindowAttributes, WindowSystem};
pub use error::{WmError, WmResult};
pub use layer::LayerTable;
pub use math::{Point, Rect, Size};
pub use placement::SnapDir;
pub use policy::ClassActions;
pub use types::{Layer, WindowId, DEFAULT_LAYER, DIALOG_LAYER, MAX_LAYER, MIN_LAYER};
