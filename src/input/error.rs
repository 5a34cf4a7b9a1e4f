//! Error types

use thiserror::Error;

/// Errors surfaced by [`GestureTracker::update`](crate::GestureTracker::update).
#[derive(Debug, Error)]
pub enum GestureError {
    /// The touch backend could not report this frame.
    #[error("touch backend failed to report the frame")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl From<anyhow::Error> for GestureError {
    fn from(err: anyhow::Error) -> Self {
        Self::Backend(err.into())
    }
}

/// Result alias used by the tracker.
pub type Result<T, E = GestureError> = std::result::Result<T, E>;
