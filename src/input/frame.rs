//! Frame input types
//!
//! A per-frame snapshot of the touch backend, handed to the gesture tracker.

use glam::Vec2;

/// Backend-assigned touch identifier.
///
/// Unique among concurrently active touches. A backend may reuse an id once
/// the touch carrying it has been released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TouchId(pub u64);

impl From<u64> for TouchId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Position and press duration of one touch as reported for a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    /// The touch this sample belongs to.
    pub id: TouchId,
    /// Screen position.
    pub position: Vec2,
    /// How long the touch has been held, in backend time units.
    pub duration: u32,
}

impl TouchSample {
    /// Create a new sample.
    pub fn new(id: TouchId, position: Vec2, duration: u32) -> Self {
        Self {
            id,
            position,
            duration,
        }
    }
}

/// Everything the backend reports for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Touches that went down this frame. Their positions are looked up in `active`.
    pub pressed: Vec<TouchId>,
    /// Touches that lifted this frame, with their lift-off sample.
    pub released: Vec<TouchSample>,
    /// Touches the platform cancelled this frame. They end like a release but never tap.
    pub cancelled: Vec<TouchId>,
    /// Every touch that is down at the end of this frame.
    pub active: Vec<TouchSample>,
}

impl FrameInput {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a touch going down at `position`.
    ///
    /// The touch is also added to `active` with a zero duration.
    pub fn press(mut self, id: u64, position: Vec2) -> Self {
        let id = TouchId(id);
        self.pressed.push(id);
        self.active.push(TouchSample::new(id, position, 0));
        self
    }

    /// Report a touch that is still held.
    pub fn hold(mut self, id: u64, position: Vec2, duration: u32) -> Self {
        self.active.push(TouchSample::new(TouchId(id), position, duration));
        self
    }

    /// Report a touch lifting off at `position`.
    pub fn release(mut self, id: u64, position: Vec2, duration: u32) -> Self {
        self.released.push(TouchSample::new(TouchId(id), position, duration));
        self
    }

    /// Report a touch cancelled by the platform.
    pub fn cancel(mut self, id: u64) -> Self {
        self.cancelled.push(TouchId(id));
        self
    }

    /// Look up the active sample for `id`.
    pub fn sample(&self, id: TouchId) -> Option<&TouchSample> {
        self.active.iter().find(|sample| sample.id == id)
    }

    /// Whether nothing at all was reported.
    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
            && self.released.is_empty()
            && self.cancelled.is_empty()
            && self.active.is_empty()
    }
}
