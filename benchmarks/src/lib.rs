//! Shared frame scripts for touch-nav benchmarks.
//!
//! ## Running
//!
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench gestures
//!
//! Filter by group:
//!   cargo bench --manifest-path benchmarks/Cargo.toml --bench gestures -- pinch

use glam::Vec2;
use touch_nav::FrameInput;

/// `n` touches, each pressed and released in consecutive frames.
pub fn tap_storm(n: usize) -> Vec<FrameInput> {
    let mut frames = Vec::with_capacity(n * 2);
    for i in 0..n {
        let id = i as u64;
        let position = Vec2::new((i % 64) as f32 * 8.0, (i / 64) as f32 * 8.0);
        frames.push(FrameInput::new().press(id, position));
        frames.push(FrameInput::new().release(id, position + Vec2::ONE, 4));
    }
    frames
}

/// One touch dragged diagonally for `n` frames, then released.
pub fn long_pan(n: usize) -> Vec<FrameInput> {
    let mut frames = Vec::with_capacity(n + 2);
    frames.push(FrameInput::new().press(0, Vec2::ZERO));
    for i in 1..=n {
        let position = Vec2::splat(i as f32 * 0.5);
        frames.push(FrameInput::new().hold(0, position, i as u32));
    }
    frames.push(FrameInput::new().release(0, Vec2::splat(n as f32 * 0.5), n as u32 + 1));
    frames
}

/// Two touches spreading apart for `n` frames, then both released.
pub fn long_pinch(n: usize) -> Vec<FrameInput> {
    let mut frames = Vec::with_capacity(n + 2);
    frames.push(
        FrameInput::new()
            .press(0, Vec2::new(-10.0, 0.0))
            .press(1, Vec2::new(10.0, 0.0)),
    );
    for i in 1..=n {
        let spread = 10.0 + i as f32;
        frames.push(
            FrameInput::new()
                .hold(0, Vec2::new(-spread, 0.0), i as u32)
                .hold(1, Vec2::new(spread, 0.0), i as u32),
        );
    }
    let spread = 10.0 + n as f32;
    frames.push(
        FrameInput::new()
            .release(0, Vec2::new(-spread, 0.0), n as u32 + 1)
            .release(1, Vec2::new(spread, 0.0), n as u32 + 1),
    );
    frames
}
