//! Gesture classification
//!
//! # Frame update
//!
//! [`GestureTracker::apply`] runs once per frame, in this order:
//!
//! 1. Clear the previous frame's taps
//! 2. Finalize released and cancelled touches (end gestures, emit taps)
//! 3. Track newly pressed touches
//! 4. Refresh positions and durations of held touches
//! 5. With no active gesture and exactly two touches, try to start a pinch
//! 6. With no active gesture and exactly one touch, try to start a pan
//!
//! A gesture that ends because its touch lifted drops the movement of that
//! final frame.

pub mod config;
pub mod pan;
pub mod pinch;
pub mod touch;

pub use config::GestureConfig;
pub use pan::{Pan, PanMut};
pub use pinch::{Pinch, PinchMut};
pub use touch::{Tap, TouchPoint};

use std::collections::BTreeMap;

use crate::input::{FrameInput, GestureError, Result, TouchId, TouchSource};

use self::pan::PanGesture;
use self::pinch::PinchGesture;

/// The single gesture that may be active at a time.
#[derive(Debug, Clone, PartialEq)]
enum ActiveGesture {
    Pan(PanGesture),
    Pinch(PinchGesture),
}

/// Turns per-frame touch snapshots into taps, pans and pinches.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    config: GestureConfig,
    touches: BTreeMap<TouchId, TouchPoint>,
    gesture: Option<ActiveGesture>,
    taps: Vec<Tap>,
}

impl GestureTracker {
    /// Create a tracker with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker with the given thresholds.
    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// The thresholds in use.
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Poll `source` for this frame and apply it.
    ///
    /// If the source fails, its error is returned and the tracker is left
    /// exactly as it was.
    pub fn update<S: TouchSource + ?Sized>(&mut self, source: &mut S) -> Result<()> {
        let frame = source.poll().map_err(GestureError::from)?;
        self.apply(&frame);
        Ok(())
    }

    /// Advance the tracker by one frame.
    pub fn apply(&mut self, frame: &FrameInput) {
        self.taps.clear();

        self.process_releases(frame);
        self.process_presses(frame);
        self.refresh(frame);

        if self.gesture.is_none() {
            match self.touches.len() {
                2 => self.detect_pinch(),
                1 => self.detect_pan(),
                _ => {}
            }
        }

        tracing::trace!(
            touches = self.touches.len(),
            taps = self.taps.len(),
            panning = self.pan().is_some(),
            pinching = self.pinch().is_some(),
            "gesture frame"
        );
    }

    fn process_releases(&mut self, frame: &FrameInput) {
        for sample in &frame.released {
            let Some(mut touch) = self.touches.remove(&sample.id) else {
                continue;
            };
            touch.current = sample.position;
            touch.duration = sample.duration;

            if !self.end_gesture(touch.id) && self.is_tap(&touch) {
                tracing::debug!(x = touch.current.x, y = touch.current.y, "tap");
                self.taps.push(Tap {
                    position: touch.current,
                });
            }
        }

        for id in &frame.cancelled {
            if self.touches.remove(id).is_some() {
                tracing::debug!(touch = id.0, "touch cancelled");
                self.end_gesture(*id);
            }
        }
    }

    /// End the active gesture if `id` takes part in it.
    fn end_gesture(&mut self, id: TouchId) -> bool {
        match &self.gesture {
            Some(ActiveGesture::Pinch(pinch)) if pinch.involves(id) => {
                tracing::debug!(touch = id.0, "pinch ended");
            }
            Some(ActiveGesture::Pan(pan)) if pan.touch == id => {
                tracing::debug!(touch = id.0, "pan ended");
            }
            _ => return false,
        }
        self.gesture = None;
        true
    }

    fn is_tap(&self, touch: &TouchPoint) -> bool {
        !touch.is_classified()
            && (touch.duration <= self.config.tap_duration
                || touch.displacement() < self.config.tap_distance)
    }

    fn process_presses(&mut self, frame: &FrameInput) {
        for &id in &frame.pressed {
            if self.touches.contains_key(&id) {
                continue;
            }
            let Some(sample) = frame.sample(id) else {
                tracing::warn!(touch = id.0, "pressed touch has no position this frame");
                continue;
            };
            self.touches.insert(id, TouchPoint::new(id, sample.position));
        }
    }

    fn refresh(&mut self, frame: &FrameInput) {
        for sample in &frame.active {
            match self.touches.get_mut(&sample.id) {
                Some(touch) => {
                    touch.current = sample.position;
                    touch.duration = sample.duration;
                }
                None => tracing::debug!(touch = sample.id.0, "ignoring untracked touch"),
            }
        }
    }

    fn detect_pinch(&mut self) {
        let mut touches = self.touches.values_mut();
        let (Some(a), Some(b)) = (touches.next(), touches.next()) else {
            return;
        };

        let origin_distance = a.origin.distance(b.origin);
        let current_distance = a.current.distance(b.current);
        if (origin_distance - current_distance).abs() > self.config.pinch_start {
            a.pinched = true;
            b.pinched = true;
            tracing::debug!(a = a.id.0, b = b.id.0, origin_distance, "pinch started");
            self.gesture = Some(ActiveGesture::Pinch(PinchGesture::new(
                [a.id, b.id],
                origin_distance,
            )));
        }
    }

    fn detect_pan(&mut self) {
        let Some(touch) = self.touches.values_mut().next() else {
            return;
        };
        if touch.pinched {
            return;
        }

        if touch.displacement() > self.config.pan_start {
            touch.panned = true;
            tracing::debug!(touch = touch.id.0, "pan started");
            self.gesture = Some(ActiveGesture::Pan(PanGesture::new(touch.id, touch.origin)));
        }
    }

    /// The active pan, if any.
    pub fn pan(&self) -> Option<Pan<'_>> {
        match &self.gesture {
            Some(ActiveGesture::Pan(pan)) => {
                let current = self.touches.get(&pan.touch)?.current;
                Some(Pan::new(pan, current))
            }
            _ => None,
        }
    }

    /// The active pan, with access to [`PanMut::incremental`].
    pub fn pan_mut(&mut self) -> Option<PanMut<'_>> {
        match &mut self.gesture {
            Some(ActiveGesture::Pan(pan)) => {
                let current = self.touches.get(&pan.touch)?.current;
                Some(PanMut::new(pan, current))
            }
            _ => None,
        }
    }

    /// The active pinch, if any.
    pub fn pinch(&self) -> Option<Pinch<'_>> {
        match &self.gesture {
            Some(ActiveGesture::Pinch(pinch)) => {
                let [a, b] = pinch.touches;
                let a = self.touches.get(&a)?.current;
                let b = self.touches.get(&b)?.current;
                Some(Pinch::new(pinch, a, b))
            }
            _ => None,
        }
    }

    /// The active pinch, with access to [`PinchMut::incremental`].
    pub fn pinch_mut(&mut self) -> Option<PinchMut<'_>> {
        match &mut self.gesture {
            Some(ActiveGesture::Pinch(pinch)) => {
                let [a, b] = pinch.touches;
                let a = self.touches.get(&a)?.current;
                let b = self.touches.get(&b)?.current;
                Some(PinchMut::new(pinch, a, b))
            }
            _ => None,
        }
    }

    /// Taps completed during the last frame, in release order.
    pub fn taps(&self) -> &[Tap] {
        &self.taps
    }

    /// Look up a held touch.
    pub fn touch(&self, id: TouchId) -> Option<&TouchPoint> {
        self.touches.get(&id)
    }

    /// All held touches, ordered by id.
    pub fn touches(&self) -> impl Iterator<Item = &TouchPoint> {
        self.touches.values()
    }

    /// Number of held touches.
    pub fn active_count(&self) -> usize {
        self.touches.len()
    }

    /// Forget every touch, gesture and tap.
    pub fn reset(&mut self) {
        self.touches.clear();
        self.gesture = None;
        self.taps.clear();
    }
}
