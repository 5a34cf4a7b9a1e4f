//! Pinch gesture
//!
//! A two-touch gesture measuring the change in separation between the touches.
//! Values are negated so that touches moving apart give a negative delta and
//! touches moving together a positive one.

use glam::Vec2;

use crate::input::TouchId;

/// Tracker-owned record of the active pinch.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PinchGesture {
    pub(crate) touches: [TouchId; 2],
    pub(crate) origin_distance: f32,
    pub(crate) previous_distance: f32,
}

impl PinchGesture {
    pub(crate) fn new(touches: [TouchId; 2], origin_distance: f32) -> Self {
        Self {
            touches,
            origin_distance,
            previous_distance: origin_distance,
        }
    }

    pub(crate) fn involves(&self, id: TouchId) -> bool {
        self.touches.contains(&id)
    }
}

/// Read-only view of the active pinch.
#[derive(Debug, Clone, Copy)]
pub struct Pinch<'a> {
    gesture: &'a PinchGesture,
    current_distance: f32,
}

impl<'a> Pinch<'a> {
    pub(crate) fn new(gesture: &'a PinchGesture, a: Vec2, b: Vec2) -> Self {
        Self {
            gesture,
            current_distance: a.distance(b),
        }
    }

    /// The two touches forming this pinch.
    pub fn touch_ids(&self) -> [TouchId; 2] {
        self.gesture.touches
    }

    /// Separation of the two touch origins when the pinch started.
    pub fn origin_distance(&self) -> f32 {
        self.gesture.origin_distance
    }

    /// Current separation of the two touches.
    pub fn current_distance(&self) -> f32 {
        self.current_distance
    }

    /// Negated change in separation since the pinch started.
    pub fn total(&self) -> f32 {
        -(self.current_distance - self.gesture.origin_distance)
    }
}

/// Mutable view of the active pinch, needed to consume incremental change.
#[derive(Debug)]
pub struct PinchMut<'a> {
    gesture: &'a mut PinchGesture,
    current_distance: f32,
}

impl<'a> PinchMut<'a> {
    pub(crate) fn new(gesture: &'a mut PinchGesture, a: Vec2, b: Vec2) -> Self {
        Self {
            gesture,
            current_distance: a.distance(b),
        }
    }

    /// Read-only view of the same pinch.
    pub fn as_pinch(&self) -> Pinch<'_> {
        Pinch {
            gesture: &*self.gesture,
            current_distance: self.current_distance,
        }
    }

    /// The two touches forming this pinch.
    pub fn touch_ids(&self) -> [TouchId; 2] {
        self.as_pinch().touch_ids()
    }

    /// Separation of the two touch origins when the pinch started.
    pub fn origin_distance(&self) -> f32 {
        self.as_pinch().origin_distance()
    }

    /// Current separation of the two touches.
    pub fn current_distance(&self) -> f32 {
        self.current_distance
    }

    /// Negated change in separation since the pinch started.
    pub fn total(&self) -> f32 {
        self.as_pinch().total()
    }

    /// Negated change in separation since the previous call.
    ///
    /// The baseline moves to the current separation, so calling this twice in
    /// one frame returns zero the second time.
    pub fn incremental(&mut self) -> f32 {
        let delta = self.current_distance - self.gesture.previous_distance;
        self.gesture.previous_distance = self.current_distance;
        -delta
    }
}
