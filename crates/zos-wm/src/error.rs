//! Error types for the window manager core
//!
//! Runtime operations on clients never fail: untracked windows, illegal
//! transitions and rejected focus requests are absorbed where they happen.
//! The only fallible surface is loading configuration.

use crate::types::Layer;

/// Result type alias for configuration operations
pub type WmResult<T> = Result<T, WmError>;

/// Errors raised while loading or validating configuration
#[derive(Debug, thiserror::Error)]
pub enum WmError {
    /// The configuration document could not be parsed
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A class action names a layer outside the allowed range
    #[error("layer {layer} for class '{class}' is outside {min}..={max}")]
    LayerOutOfRange {
        class: String,
        layer: Layer,
        min: Layer,
        max: Layer,
    },

    /// A numeric setting has an unusable value
    #[error("invalid value for '{setting}': {reason}")]
    InvalidSetting {
        setting: &'static str,
        reason: &'static str,
    },
}

impl WmError {
    /// Create an invalid setting error.
    pub fn invalid_setting(setting: &'static str, reason: &'static str) -> Self {
        Self::InvalidSetting { setting, reason }
    }
}
