//! Input module
//!
//! Per-frame touch snapshots, the backend trait that produces them, and errors.

pub mod error;
pub mod frame;
pub mod source;

pub use error::{GestureError, Result};
pub use frame::{FrameInput, TouchId, TouchSample};
pub use source::TouchSource;
