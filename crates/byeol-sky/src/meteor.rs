//! Meteor lifecycle: timed spawning, per-frame advance, pruning.

use byeol_core::Viewport;
use rand::Rng;

/// Opacity lost per frame. A fresh meteor lives at most 100 frames.
pub const OPACITY_DECAY: f64 = 0.01;

/// Stroke width of the meteor trail in pixels.
pub const STROKE_WIDTH: f64 = 2.0;

/// Trail length range on a narrow viewport.
const NARROW_LENGTH: (f64, f64) = (50.0, 150.0);

/// Trail length range on a regular viewport.
const WIDE_LENGTH: (f64, f64) = (100.0, 250.0);

/// Diagonal speed range in pixels per frame.
const SPEED: (f64, f64) = (5.0, 15.0);

/// A transient meteor streaking down-right at 45 degrees.
#[derive(Debug, Clone)]
pub struct Meteor {
    /// X position of the trail head in surface pixels.
    pub x: f64,
    /// Y position of the trail head in surface pixels.
    pub y: f64,
    /// Trail length in pixels.
    pub length: f64,
    /// Pixels advanced per frame on each axis.
    pub speed: f64,
    /// Current alpha, decaying from 1.0 to zero.
    pub opacity: f64,
}

impl Meteor {
    /// Spawn a meteor at a random position along the top edge.
    pub fn spawn(viewport: Viewport, rng: &mut impl Rng) -> Self {
        let (min_len, max_len) = if viewport.is_narrow() {
            NARROW_LENGTH
        } else {
            WIDE_LENGTH
        };
        Self {
            x: rng.gen_range(0.0..viewport.width),
            y: 0.0,
            length: rng.gen_range(min_len..max_len),
            speed: rng.gen_range(SPEED.0..SPEED.1),
            opacity: 1.0,
        }
    }

    /// Advance one frame along the diagonal and fade.
    pub fn advance(&mut self) {
        self.x += self.speed;
        self.y += self.speed;
        self.opacity -= OPACITY_DECAY;
    }

    /// Whether this meteor should be removed from the sky.
    pub fn is_expired(&self, surface_height: f64) -> bool {
        self.opacity <= 0.0 || self.y > surface_height
    }
}

/// Spawn one burst of 1 or 2 meteors, uniformly chosen.
pub fn spawn_burst(viewport: Viewport, rng: &mut impl Rng) -> Vec<Meteor> {
    let count = rng.gen_range(1..=2);
    (0..count).map(|_| Meteor::spawn(viewport, rng)).collect()
}
