//! Per-class action bundles
//!
//! A bundle is looked up by the window's class name when a client is
//! created and each flag that is present is applied in turn.

use serde::{Deserialize, Serialize};

use crate::placement::SnapDir;
use crate::types::Layer;

/// Actions applied to every new client of a given window class
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassActions {
    /// Flip the sticky flag so the client shows on every desktop
    pub stick: bool,
    /// Maximize the client below the icon bar
    pub maximize: bool,
    /// Put the client on this layer instead of its default
    pub layer: Option<Layer>,
    /// Snap the client against a screen edge
    pub snap: Option<SnapDir>,
}

impl ClassActions {
    /// True when the bundle does nothing
    pub fn is_empty(&self) -> bool {
        !self.stick && !self.maximize && self.layer.is_none() && self.snap.is_none()
    }
}
