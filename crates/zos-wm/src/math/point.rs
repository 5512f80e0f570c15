use serde::{Deserialize, Serialize};

/// A position or offset in root-window coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin of the root window
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Create a new point
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

// Coordinates saturate at the edges of the i32 range
impl std::ops::Add for Point {
    type Output = Point;
    fn add(self, other: Point) -> Point {
        Point::new(self.x.saturating_add(other.x), self.y.saturating_add(other.y))
    }
}

impl std::ops::Sub for Point {
    type Output = Point;
    fn sub(self, other: Point) -> Point {
        Point::new(self.x.saturating_sub(other.x), self.y.saturating_sub(other.y))
    }
}
