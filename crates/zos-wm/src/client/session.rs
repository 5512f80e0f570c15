use crate::math::Point;
use crate::types::WindowId;

use super::ClientState;

/// What a move/resize session does with pointer motion
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionKind {
    Move,
    Resize,
}

impl SessionKind {
    /// Client state while the session runs
    pub fn state(self) -> ClientState {
        match self {
            SessionKind::Move => ClientState::Moving,
            SessionKind::Resize => ClientState::Resizing,
        }
    }
}

/// Interactive move or resize of one client
///
/// The client stays unmapped while the placeholder follows the pointer.
/// The placeholder's final geometry is copied back when the session ends
/// normally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveResizeSession {
    pub client: WindowId,
    pub placeholder: WindowId,
    pub kind: SessionKind,
    /// Pointer location at the last processed motion
    pub pointer: Point,
}

impl MoveResizeSession {
    /// Record a new pointer location and return the delta from the previous one.
    pub fn advance(&mut self, pointer: Point) -> Point {
        let delta = pointer - self.pointer;
        self.pointer = pointer;
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_returns_delta() {
        let mut session = MoveResizeSession {
            client: 1,
            placeholder: 2,
            kind: SessionKind::Move,
            pointer: Point::new(100, 100),
        };

        assert_eq!(session.advance(Point::new(110, 95)), Point::new(10, -5));
        assert_eq!(session.pointer, Point::new(110, 95));
        assert_eq!(session.advance(Point::new(110, 95)), Point::ORIGIN);
    }

    #[test]
    fn test_kind_state() {
        assert_eq!(SessionKind::Move.state(), ClientState::Moving);
        assert_eq!(SessionKind::Resize.state(), ClientState::Resizing);
    }
}
