//! Integer geometry types
//!
//! Window-system coordinates are whole pixels: positions are signed
//! (windows may hang off the left/top edge) while sizes are unsigned.

mod point;
mod rect;
mod size;

pub use point::Point;
pub use rect::Rect;
pub use size::Size;
