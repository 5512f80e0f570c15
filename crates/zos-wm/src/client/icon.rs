use crate::types::WindowId;

/// Stand-in for an iconified client
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Icon {
    /// The client this icon restores
    pub client: WindowId,
    /// The icon's own window
    pub window: WindowId,
}
