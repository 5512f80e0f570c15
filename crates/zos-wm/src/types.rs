//! Core type definitions for the window manager core
//!
//! This module centralizes type aliases and layer bounds used throughout
//! the crate for consistency and discoverability.

/// Opaque window identifier
///
/// Identifiers are handed out by the window system and stay stable for the
/// lifetime of the window they name.
pub type WindowId = u64;

/// Stacking priority of a client. Higher layers are stacked closer to the front.
pub type Layer = u8;

/// Lowest layer a client can occupy
pub const MIN_LAYER: Layer = 1;

/// Highest layer a client can occupy
pub const MAX_LAYER: Layer = 9;

/// Layer given to ordinary clients when they are created
pub const DEFAULT_LAYER: Layer = 5;

/// Layer given to transient (dialog) clients when they are created
pub const DIALOG_LAYER: Layer = 6;

/// Clamp an arbitrary layer value into `[MIN_LAYER, MAX_LAYER]`.
#[inline]
pub fn clamp_layer(layer: Layer) -> Layer {
    layer.clamp(MIN_LAYER, MAX_LAYER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_constants_ordered() {
        assert!(MIN_LAYER < DEFAULT_LAYER);
        assert!(DEFAULT_LAYER < DIALOG_LAYER);
        assert!(DIALOG_LAYER <= MAX_LAYER);
    }

    #[test]
    fn test_clamp_layer() {
        assert_eq!(clamp_layer(0), MIN_LAYER);
        assert_eq!(clamp_layer(5), 5);
        assert_eq!(clamp_layer(200), MAX_LAYER);
    }
}
