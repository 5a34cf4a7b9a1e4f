//! Touch backends
//!
//! The seam between a platform's touch reporting and the gesture tracker.

use super::frame::FrameInput;

/// Something that can report the touch state of the current frame.
///
/// `poll` is called exactly once per frame. The returned snapshot must not
/// change while the tracker processes it.
pub trait TouchSource {
    /// Report this frame's touches.
    fn poll(&mut self) -> anyhow::Result<FrameInput>;
}

impl TouchSource for FrameInput {
    fn poll(&mut self) -> anyhow::Result<FrameInput> {
        Ok(self.clone())
    }
}
