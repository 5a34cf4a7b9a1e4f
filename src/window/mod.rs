//! Window module
//!
//! Collects winit touch events into per-frame [`FrameInput`] snapshots.
//!
//! Feed every `WindowEvent` to [`TouchCollector::handle_event`], then hand the
//! collector to [`GestureTracker::update`](crate::GestureTracker::update) once
//! per redraw. Durations are counted in frames.
//!
//! A touch that starts and ends between two polls is reported pressed in one
//! frame and lifted in the next. `TouchPhase::Cancelled` is reported through
//! [`FrameInput::cancelled`], so an aborted contact ends its gesture but never
//! counts as a tap.

use std::collections::BTreeMap;

use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{TouchPhase, WindowEvent};

use crate::input::{FrameInput, TouchId, TouchSample, TouchSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lift {
    Ended,
    Cancelled,
}

#[derive(Debug, Clone)]
struct HeldTouch {
    position: Vec2,
    duration: u32,
    fresh: bool,
    lift: Option<Lift>,
    /// A new finger reusing this id before the lift was reported.
    repress: Option<Vec2>,
}

impl HeldTouch {
    fn new(position: Vec2) -> Self {
        Self {
            position,
            duration: 0,
            fresh: true,
            lift: None,
            repress: None,
        }
    }
}

/// Accumulates winit touch events between frames.
#[derive(Debug, Default)]
pub struct TouchCollector {
    held: BTreeMap<TouchId, HeldTouch>,
    pressed: Vec<TouchId>,
    released: Vec<TouchSample>,
    cancelled: Vec<TouchId>,
}

impl TouchCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a window event. Returns `true` if it was a touch event.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::Touch(touch) => {
                self.handle_touch(touch.id, touch.phase, touch.location);
                true
            }
            _ => false,
        }
    }

    /// Record one touch phase change.
    pub fn handle_touch(&mut self, id: u64, phase: TouchPhase, location: PhysicalPosition<f64>) {
        let id = TouchId(id);
        let position = Vec2::new(location.x as f32, location.y as f32);

        match phase {
            TouchPhase::Started => {
                if let Some(touch) = self.held.get_mut(&id) {
                    if touch.lift.is_some() {
                        touch.repress = Some(position);
                    } else {
                        touch.position = position;
                    }
                    return;
                }
                self.held.insert(id, HeldTouch::new(position));
                self.pressed.push(id);
            }
            TouchPhase::Moved => {
                if let Some(touch) = self.held.get_mut(&id) {
                    if let Some(repress) = touch.repress.as_mut() {
                        *repress = position;
                    } else if touch.lift.is_none() {
                        touch.position = position;
                    }
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => {
                let lift = if phase == TouchPhase::Ended {
                    Lift::Ended
                } else {
                    Lift::Cancelled
                };
                let Some(touch) = self.held.get_mut(&id) else {
                    return;
                };
                if touch.repress.is_some() {
                    // Two contacts on one id inside a single frame: keep the first.
                    touch.repress = None;
                    return;
                }
                touch.position = position;
                if touch.fresh {
                    // Report the press first; the lift goes out next frame.
                    touch.lift = Some(lift);
                } else if let Some(touch) = self.held.remove(&id) {
                    self.queue_lift(id, &touch, lift);
                }
            }
        }
    }

    fn queue_lift(&mut self, id: TouchId, touch: &HeldTouch, lift: Lift) {
        match lift {
            Lift::Ended => self
                .released
                .push(TouchSample::new(id, touch.position, touch.duration)),
            Lift::Cancelled => self.cancelled.push(id),
        }
    }

    /// Number of touches currently down.
    pub fn held_count(&self) -> usize {
        self.held.len()
    }
}

impl TouchSource for TouchCollector {
    fn poll(&mut self) -> anyhow::Result<FrameInput> {
        let frame = FrameInput {
            pressed: std::mem::take(&mut self.pressed),
            released: std::mem::take(&mut self.released),
            cancelled: std::mem::take(&mut self.cancelled),
            active: self
                .held
                .iter()
                .map(|(&id, touch)| TouchSample::new(id, touch.position, touch.duration))
                .collect(),
        };

        for touch in self.held.values_mut() {
            touch.duration = touch.duration.saturating_add(1);
            touch.fresh = false;
        }

        let lifted: Vec<TouchId> = self
            .held
            .iter()
            .filter(|(_, touch)| touch.lift.is_some())
            .map(|(&id, _)| id)
            .collect();
        for id in lifted {
            let Some(touch) = self.held.remove(&id) else {
                continue;
            };
            if let Some(lift) = touch.lift {
                self.queue_lift(id, &touch, lift);
            }
            if let Some(position) = touch.repress {
                self.held.insert(id, HeldTouch::new(position));
                self.pressed.push(id);
            }
        }

        Ok(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GestureTracker;

    fn at(x: f64, y: f64) -> PhysicalPosition<f64> {
        PhysicalPosition::new(x, y)
    }

    #[test]
    fn test_press_move_release() {
        let mut collector = TouchCollector::new();

        collector.handle_touch(3, TouchPhase::Started, at(10.0, 20.0));
        let frame = collector.poll().unwrap();
        assert_eq!(frame.pressed, vec![TouchId(3)]);
        assert_eq!(frame.sample(TouchId(3)).unwrap().duration, 0);

        collector.handle_touch(3, TouchPhase::Moved, at(12.0, 20.0));
        let frame = collector.poll().unwrap();
        assert!(frame.pressed.is_empty());
        let sample = frame.sample(TouchId(3)).unwrap();
        assert_eq!(sample.position, Vec2::new(12.0, 20.0));
        assert_eq!(sample.duration, 1);

        collector.handle_touch(3, TouchPhase::Ended, at(13.0, 21.0));
        let frame = collector.poll().unwrap();
        assert!(frame.active.is_empty());
        assert_eq!(
            frame.released,
            vec![TouchSample::new(TouchId(3), Vec2::new(13.0, 21.0), 2)]
        );
        assert_eq!(collector.held_count(), 0);
    }

    #[test]
    fn test_press_and_release_between_polls() {
        let mut collector = TouchCollector::new();

        collector.handle_touch(1, TouchPhase::Started, at(5.0, 5.0));
        collector.handle_touch(1, TouchPhase::Ended, at(6.0, 5.0));

        let frame = collector.poll().unwrap();
        assert_eq!(frame.pressed, vec![TouchId(1)]);
        assert!(frame.released.is_empty());

        let frame = collector.poll().unwrap();
        assert!(frame.active.is_empty());
        assert_eq!(frame.released.len(), 1);
        assert_eq!(frame.released[0].position, Vec2::new(6.0, 5.0));
    }

    #[test]
    fn test_unknown_touch_events_are_ignored() {
        let mut collector = TouchCollector::new();

        collector.handle_touch(8, TouchPhase::Moved, at(1.0, 1.0));
        collector.handle_touch(8, TouchPhase::Cancelled, at(1.0, 1.0));

        assert!(collector.poll().unwrap().is_empty());
    }

    #[test]
    fn test_collector_drives_tracker() {
        let mut collector = TouchCollector::new();
        let mut tracker = GestureTracker::new();

        collector.handle_touch(1, TouchPhase::Started, at(100.0, 100.0));
        collector.handle_touch(1, TouchPhase::Ended, at(101.0, 100.0));

        tracker.update(&mut collector).unwrap();
        assert_eq!(tracker.active_count(), 1);
        assert!(tracker.taps().is_empty());

        tracker.update(&mut collector).unwrap();
        assert_eq!(tracker.taps().len(), 1);
        assert_eq!(tracker.taps()[0].position, Vec2::new(101.0, 100.0));
    }

    #[test]
    fn test_id_reused_between_polls() {
        let mut collector = TouchCollector::new();
        let mut tracker = GestureTracker::new();

        collector.handle_touch(1, TouchPhase::Started, at(10.0, 10.0));
        collector.handle_touch(1, TouchPhase::Ended, at(10.0, 10.0));
        collector.handle_touch(1, TouchPhase::Started, at(40.0, 40.0));

        tracker.update(&mut collector).unwrap();
        assert_eq!(tracker.active_count(), 1);

        let frame = collector.poll().unwrap();
        assert_eq!(frame.released.len(), 1);
        assert_eq!(frame.released[0].position, Vec2::new(10.0, 10.0));
        assert_eq!(frame.pressed, vec![TouchId(1)]);
        assert_eq!(frame.sample(TouchId(1)).unwrap().position, Vec2::new(40.0, 40.0));
        tracker.apply(&frame);
        assert_eq!(tracker.taps().len(), 1);
        assert_eq!(tracker.touch(TouchId(1)).unwrap().origin, Vec2::new(40.0, 40.0));

        collector.handle_touch(1, TouchPhase::Moved, at(80.0, 40.0));
        tracker.update(&mut collector).unwrap();
        assert_eq!(collector.held_count(), 1);
        assert!(tracker.pan().is_some());
    }

    #[test]
    fn test_cancel_is_not_a_release() {
        let mut collector = TouchCollector::new();
        let mut tracker = GestureTracker::new();

        collector.handle_touch(2, TouchPhase::Started, at(5.0, 5.0));
        tracker.update(&mut collector).unwrap();

        collector.handle_touch(2, TouchPhase::Cancelled, at(5.0, 5.0));
        let frame = collector.poll().unwrap();
        assert!(frame.released.is_empty());
        assert_eq!(frame.cancelled, vec![TouchId(2)]);

        tracker.apply(&frame);
        assert!(tracker.taps().is_empty());
        assert_eq!(tracker.active_count(), 0);
    }

    #[test]
    fn test_cancel_between_polls() {
        let mut collector = TouchCollector::new();

        collector.handle_touch(4, TouchPhase::Started, at(1.0, 1.0));
        collector.handle_touch(4, TouchPhase::Cancelled, at(1.0, 1.0));

        assert_eq!(collector.poll().unwrap().pressed, vec![TouchId(4)]);
        let frame = collector.poll().unwrap();
        assert!(frame.released.is_empty());
        assert_eq!(frame.cancelled, vec![TouchId(4)]);
    }
}
