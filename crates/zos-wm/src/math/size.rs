use serde::{Deserialize, Serialize};

/// Width and height of a window, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a new size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Grow (or shrink, for negative deltas) each dimension, never going below 1.
    pub fn grown_by(self, dw: i32, dh: i32) -> Size {
        Size::new(grow(self.width, dw), grow(self.height, dh))
    }
}

fn grow(extent: u32, delta: i32) -> u32 {
    let grown = i64::from(extent) + i64::from(delta);
    grown.clamp(1, i64::from(u32::MAX)) as u32
}
