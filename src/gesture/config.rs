//! Gesture thresholds
//!
//! Tunables that decide when touches become taps, pans or pinches.

/// Thresholds used by the [`GestureTracker`](super::GestureTracker).
#[derive(Debug, Clone, PartialEq)]
pub struct GestureConfig {
    /// A touch held at most this long is a tap when released. Default: 75.
    /// Same time unit as the backend's press duration.
    pub tap_duration: u32,
    /// A touch that moved less than this from its origin is a tap when released. Default: 5.
    pub tap_distance: f32,
    /// Change in two-touch separation needed to start a pinch. Default: 3.
    pub pinch_start: f32,
    /// Distance a lone touch must move to start a pan. Default: 0.25.
    pub pan_start: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            tap_duration: 75,
            tap_distance: 5.0,
            pinch_start: 3.0,
            pan_start: 0.25,
        }
    }
}

impl GestureConfig {
    /// Create a config with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum press duration of a tap.
    pub fn tap_duration(mut self, tap_duration: u32) -> Self {
        self.tap_duration = tap_duration;
        self
    }

    /// Set the displacement below which a release is a tap.
    pub fn tap_distance(mut self, tap_distance: f32) -> Self {
        self.tap_distance = tap_distance;
        self
    }

    /// Set the separation change that starts a pinch.
    pub fn pinch_start(mut self, pinch_start: f32) -> Self {
        self.pinch_start = pinch_start;
        self
    }

    /// Set the movement that starts a pan.
    pub fn pan_start(mut self, pan_start: f32) -> Self {
        self.pan_start = pan_start;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = GestureConfig::default();
        assert_eq!(config.tap_duration, 75);
        assert_eq!(config.tap_distance, 5.0);
        assert_eq!(config.pinch_start, 3.0);
        assert_eq!(config.pan_start, 0.25);
    }

    #[test]
    fn test_builder_overrides() {
        let config = GestureConfig::new()
            .tap_duration(10)
            .tap_distance(2.0)
            .pinch_start(8.0)
            .pan_start(1.0);
        assert_eq!(config.tap_duration, 10);
        assert_eq!(config.tap_distance, 2.0);
        assert_eq!(config.pinch_start, 8.0);
        assert_eq!(config.pan_start, 1.0);
    }
}
