//! Pan gesture
//!
//! A single-touch drag, active from detection until its touch lifts.

use glam::Vec2;

use crate::input::TouchId;

/// Tracker-owned record of the active pan.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PanGesture {
    pub(crate) touch: TouchId,
    pub(crate) origin: Vec2,
    pub(crate) previous: Vec2,
}

impl PanGesture {
    pub(crate) fn new(touch: TouchId, origin: Vec2) -> Self {
        Self {
            touch,
            origin,
            previous: origin,
        }
    }
}

/// Read-only view of the active pan.
#[derive(Debug, Clone, Copy)]
pub struct Pan<'a> {
    gesture: &'a PanGesture,
    current: Vec2,
}

impl<'a> Pan<'a> {
    pub(crate) fn new(gesture: &'a PanGesture, current: Vec2) -> Self {
        Self { gesture, current }
    }

    /// The touch driving this pan.
    pub fn touch_id(&self) -> TouchId {
        self.gesture.touch
    }

    /// Where the pan started.
    pub fn origin(&self) -> Vec2 {
        self.gesture.origin
    }

    /// Latest position of the panning touch.
    pub fn current(&self) -> Vec2 {
        self.current
    }

    /// Displacement since the pan started.
    pub fn total(&self) -> Vec2 {
        self.current - self.gesture.origin
    }
}

/// Mutable view of the active pan, needed to consume incremental movement.
#[derive(Debug)]
pub struct PanMut<'a> {
    gesture: &'a mut PanGesture,
    current: Vec2,
}

impl<'a> PanMut<'a> {
    pub(crate) fn new(gesture: &'a mut PanGesture, current: Vec2) -> Self {
        Self { gesture, current }
    }

    /// Read-only view of the same pan.
    pub fn as_pan(&self) -> Pan<'_> {
        Pan::new(&*self.gesture, self.current)
    }

    /// The touch driving this pan.
    pub fn touch_id(&self) -> TouchId {
        self.as_pan().touch_id()
    }

    /// Where the pan started.
    pub fn origin(&self) -> Vec2 {
        self.as_pan().origin()
    }

    /// Latest position of the panning touch.
    pub fn current(&self) -> Vec2 {
        self.current
    }

    /// Displacement since the pan started.
    pub fn total(&self) -> Vec2 {
        self.as_pan().total()
    }

    /// Movement since the previous call.
    ///
    /// Consumes the movement: the baseline moves to the current position, so a
    /// second call in the same frame returns zero.
    pub fn incremental(&mut self) -> Vec2 {
        let delta = self.current - self.gesture.previous;
        self.gesture.previous = self.current;
        delta
    }
}
