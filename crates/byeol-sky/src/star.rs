//! Twinkling star field (immutable after creation).

use std::f64::consts::TAU;

use byeol_core::{Rgb, Viewport};
use rand::Rng;

/// Star population on a regular viewport.
const WIDE_STAR_COUNT: usize = 200;

/// Star population on a narrow viewport.
const NARROW_STAR_COUNT: usize = 100;

/// A single star. Position and attributes are fixed for the session; only
/// the twinkle opacity varies, and that is a pure function of time.
#[derive(Debug, Clone)]
pub struct Star {
    /// X position in surface pixels.
    pub x: f64,
    /// Y position in surface pixels.
    pub y: f64,
    /// Radius in pixels, below 1.5.
    pub radius: f64,
    /// Base color, sampled once at creation.
    pub color: Rgb,
    /// Angular speed of the twinkle oscillation, in radians per millisecond.
    pub twinkle_speed: f64,
    /// Phase offset of the twinkle oscillation.
    pub twinkle_phase: f64,
}

impl Star {
    /// Time-varying alpha in 0.0-1.0 simulating brightness oscillation.
    pub fn twinkle_opacity(&self, timestamp_ms: f64) -> f64 {
        (timestamp_ms * self.twinkle_speed + self.twinkle_phase).sin().abs()
    }
}

/// Star population for the given viewport. Narrow viewports get half the
/// stars to keep per-frame cost down on constrained displays.
pub fn star_count(viewport: Viewport) -> usize {
    if viewport.is_narrow() {
        NARROW_STAR_COUNT
    } else {
        WIDE_STAR_COUNT
    }
}

/// Populate a fresh star field scattered across the viewport.
pub fn init_stars(viewport: Viewport, count: usize, rng: &mut impl Rng) -> Vec<Star> {
    if viewport.is_empty() {
        return Vec::new();
    }

    (0..count)
        .map(|_| Star {
            x: rng.gen_range(0.0..viewport.width),
            y: rng.gen_range(0.0..viewport.height),
            radius: rng.gen_range(0.0..1.5),
            // Near-white, slightly tinted per channel
            color: Rgb::new(
                rng.gen_range(200..=255),
                rng.gen_range(200..=255),
                rng.gen_range(200..=255),
            ),
            twinkle_speed: rng.gen_range(0.003..0.010),
            twinkle_phase: rng.gen_range(0.0..TAU),
        })
        .collect()
}
