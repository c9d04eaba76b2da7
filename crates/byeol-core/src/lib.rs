//! Core types shared across the byeol crates.

use serde::{Deserialize, Serialize};

/// Surface width (in pixels) below which the sky is populated more sparsely.
pub const NARROW_WIDTH: f64 = 640.0;

/// Default minimum interval between meteor spawn events.
pub const METEOR_INTERVAL_MS: u64 = 10_000;

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale all channels by a factor in 0.0-1.0.
    pub fn scale(self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            r: (self.r as f64 * factor) as u8,
            g: (self.g as f64 * factor) as u8,
            b: (self.b as f64 * factor) as u8,
        }
    }

    /// Source-over composite of `self` onto `dst` with the given alpha.
    pub fn over(self, dst: Rgb, alpha: f64) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |s: u8, d: u8| (s as f64 * alpha + d as f64 * (1.0 - alpha)).round() as u8;
        Self {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
        }
    }
}

/// Viewport dimensions in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a viewport from pixel dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether this viewport is too narrow for the full star population.
    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_WIDTH
    }

    /// Whether there is no drawable area at all.
    pub fn is_empty(&self) -> bool {
        self.width < 1.0 || self.height < 1.0
    }
}

/// Target frame rate for the animation loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameRate {
    Low,
    #[default]
    Medium,
    High,
}

impl FrameRate {
    /// Milliseconds between scheduled ticks.
    pub fn tick_interval_ms(self) -> u64 {
        match self {
            FrameRate::Low => 66,
            FrameRate::Medium => 33,
            FrameRate::High => 16,
        }
    }

    /// Cycle to the next frame rate.
    pub fn next(self) -> Self {
        match self {
            FrameRate::Low => FrameRate::Medium,
            FrameRate::Medium => FrameRate::High,
            FrameRate::High => FrameRate::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_scale_clamps() {
        let c = Rgb::new(200, 100, 50);
        assert_eq!(c.scale(1.5), c);
        assert_eq!(c.scale(0.0), Rgb::BLACK);
        assert_eq!(c.scale(0.5), Rgb::new(100, 50, 25));
    }

    #[test]
    fn test_rgb_over() {
        let white = Rgb::WHITE;
        assert_eq!(white.over(Rgb::BLACK, 1.0), white);
        assert_eq!(white.over(Rgb::BLACK, 0.0), Rgb::BLACK);
        let half = white.over(Rgb::BLACK, 0.5);
        assert!(half.r >= 127 && half.r <= 128);
    }

    #[test]
    fn test_viewport_narrow() {
        assert!(Viewport::new(639.0, 480.0).is_narrow());
        assert!(!Viewport::new(640.0, 480.0).is_narrow());
        assert!(Viewport::new(0.0, 480.0).is_empty());
        assert!(!Viewport::new(800.0, 600.0).is_empty());
    }

    #[test]
    fn test_frame_rate_cycle() {
        assert_eq!(FrameRate::Low.next(), FrameRate::Medium);
        assert_eq!(FrameRate::High.next(), FrameRate::Low);
        assert!(FrameRate::High.tick_interval_ms() < FrameRate::Low.tick_interval_ms());
    }
}
