use serde::{Deserialize, Serialize};

use super::{Point, Size};

/// Axis-aligned window geometry
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create from position and size
    pub fn from_pos_size(pos: Point, size: Size) -> Self {
        Self::new(pos.x, pos.y, size.width, size.height)
    }

    /// Get position (top-left)
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Get size
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The same rectangle moved by `delta`
    pub fn translated(&self, delta: Point) -> Rect {
        Rect::from_pos_size(self.position() + delta, self.size())
    }

    /// The same rectangle with its size grown by `delta` (clamped to 1x1)
    pub fn resized_by(&self, delta: Point) -> Rect {
        Rect::from_pos_size(self.position(), self.size().grown_by(delta.x, delta.y))
    }
}
