//! Touch records

use glam::Vec2;

use crate::input::TouchId;

/// State of one touch that is currently down.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchPoint {
    /// Backend identifier.
    pub id: TouchId,
    /// Where the touch first went down.
    pub origin: Vec2,
    /// Latest reported position.
    pub current: Vec2,
    /// Latest reported press duration.
    pub duration: u32,
    pub(crate) pinched: bool,
    pub(crate) panned: bool,
}

impl TouchPoint {
    pub(crate) fn new(id: TouchId, position: Vec2) -> Self {
        Self {
            id,
            origin: position,
            current: position,
            duration: 0,
            pinched: false,
            panned: false,
        }
    }

    /// Straight-line distance from the origin to the current position.
    pub fn displacement(&self) -> f32 {
        self.origin.distance(self.current)
    }

    /// Whether this touch has taken part in a pinch.
    pub fn was_pinch(&self) -> bool {
        self.pinched
    }

    /// Whether this touch has started a pan.
    pub fn was_pan(&self) -> bool {
        self.panned
    }

    /// Whether this touch belongs to a gesture and can no longer be a tap.
    pub fn is_classified(&self) -> bool {
        self.pinched || self.panned
    }
}

/// A completed tap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tap {
    /// Where the touch lifted off.
    pub position: Vec2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_touch_is_unclassified() {
        let touch = TouchPoint::new(TouchId(7), Vec2::new(1.0, 2.0));
        assert_eq!(touch.origin, touch.current);
        assert_eq!(touch.duration, 0);
        assert!(!touch.is_classified());
        assert_eq!(touch.displacement(), 0.0);
    }

    #[test]
    fn test_displacement() {
        let mut touch = TouchPoint::new(TouchId(1), Vec2::ZERO);
        touch.current = Vec2::new(3.0, 4.0);
        assert!((touch.displacement() - 5.0).abs() < 1e-6);
    }
}
