//! Maximize and snap geometry
//!
//! The icon bar runs along the top of the screen, so every placement starts
//! below it and shares the remaining height.

use serde::{Deserialize, Serialize};

use crate::math::{Rect, Size};

/// Screen edge a window can be snapped against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapDir {
    Top,
    Bottom,
    Left,
    Right,
}

/// Screen extents past `i32::MAX` pin to the far edge
fn coord(extent: u32) -> i32 {
    i32::try_from(extent).unwrap_or(i32::MAX)
}

/// Area available to clients: the whole screen minus the icon bar
fn work_area(screen: Size, icon_height: u32) -> Rect {
    Rect::new(
        0,
        coord(icon_height),
        screen.width,
        screen.height.saturating_sub(icon_height),
    )
}

/// Geometry of a maximized window
pub fn maximized(screen: Size, icon_height: u32) -> Rect {
    work_area(screen, icon_height)
}

/// Geometry of a window snapped against `side`
pub fn snapped(screen: Size, icon_height: u32, side: SnapDir) -> Rect {
    let area = work_area(screen, icon_height);
    let half_w = area.width / 2;
    let half_h = area.height / 2;

    match side {
        SnapDir::Top => Rect::new(area.x, area.y, area.width, half_h),
        SnapDir::Bottom => Rect::new(
            area.x,
            area.y.saturating_add(coord(half_h)),
            area.width,
            half_h,
        ),
        SnapDir::Left => Rect::new(area.x, area.y, half_w, area.height),
        SnapDir::Right => Rect::new(
            area.x.saturating_add(coord(half_w)),
            area.y,
            half_w,
            area.height,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Size = Size::new(1920, 1100);
    const ICON_HEIGHT: u32 = 20;

    #[test]
    fn test_maximized_leaves_icon_bar() {
        assert_eq!(
            maximized(SCREEN, ICON_HEIGHT),
            Rect::new(0, 20, 1920, 1080)
        );
    }

    #[test]
    fn test_snapped_halves() {
        assert_eq!(
            snapped(SCREEN, ICON_HEIGHT, SnapDir::Top),
            Rect::new(0, 20, 1920, 540)
        );
        assert_eq!(
            snapped(SCREEN, ICON_HEIGHT, SnapDir::Bottom),
            Rect::new(0, 560, 1920, 540)
        );
        assert_eq!(
            snapped(SCREEN, ICON_HEIGHT, SnapDir::Left),
            Rect::new(0, 20, 960, 1080)
        );
        assert_eq!(
            snapped(SCREEN, ICON_HEIGHT, SnapDir::Right),
            Rect::new(960, 20, 960, 1080)
        );
    }

    #[test]
    fn test_icon_bar_taller_than_screen() {
        let rect = maximized(Size::new(100, 10), 20);
        assert_eq!(rect.height, 0);
    }

    #[test]
    fn test_huge_screen_saturates() {
        let screen = Size::new(u32::MAX, u32::MAX);

        let bottom = snapped(screen, ICON_HEIGHT, SnapDir::Bottom);
        assert_eq!(bottom.y, i32::MAX);

        let right = snapped(screen, ICON_HEIGHT, SnapDir::Right);
        assert_eq!(right.x, i32::MAX);

        assert_eq!(maximized(screen, u32::MAX).y, i32::MAX);
    }
}
