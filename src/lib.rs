//! touch-nav
//!
//! Per-frame multi-touch gesture recognition: taps, pans and pinches.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **input** - Frame snapshots, the `TouchSource` backend trait, errors
//! 2. **gesture** - The `GestureTracker` state machine and gesture handles
//! 3. **window** - winit touch event collection (feature = "window")
//!
//! # Usage
//!
//! ```
//! use touch_nav::{FrameInput, GestureTracker};
//! use touch_nav::glam::Vec2;
//!
//! let mut tracker = GestureTracker::new();
//! tracker.apply(&FrameInput::new().press(1, Vec2::new(10.0, 10.0)));
//! tracker.apply(&FrameInput::new().release(1, Vec2::new(11.0, 11.0), 50));
//!
//! assert_eq!(tracker.taps().len(), 1);
//! if let Some(mut pan) = tracker.pan_mut() {
//!     let _delta = pan.incremental();
//! }
//! ```

pub mod gesture;
pub mod input;

#[cfg(feature = "window")]
pub mod window;

pub use gesture::{
    GestureConfig, GestureTracker, Pan, PanMut, Pinch, PinchMut, Tap, TouchPoint,
};
pub use input::{FrameInput, GestureError, Result, TouchId, TouchSample, TouchSource};

#[cfg(feature = "window")]
pub use window::TouchCollector;

// Re-export glam for convenience
pub use glam;
