//! Sky simulation state and the per-frame tick pipeline.

use byeol_core::{METEOR_INTERVAL_MS, Rgb, Viewport};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::meteor::{self, Meteor};
use crate::star::{self, Star};
use crate::surface::Surface;

/// The animated sky: star field, meteor list, and the surface they are
/// drawn onto. All mutation happens inside [`SkyState::tick`] and
/// [`SkyState::resize`]; the host only schedules calls and presents the
/// surface.
#[derive(Debug)]
pub struct SkyState {
    /// Fixed star population, never mutated after creation.
    stars: Vec<Star>,
    /// Active meteors, spawned and pruned over time.
    meteors: Vec<Meteor>,
    /// Raster surface sized to the viewport.
    surface: Surface,
    /// Current viewport dimensions.
    viewport: Viewport,
    /// Timestamp of the last meteor spawn event.
    last_spawn_ms: u64,
    /// Minimum interval between spawn events.
    spawn_interval_ms: u64,
    /// Randomness source for spawning and population.
    rng: StdRng,
}

impl SkyState {
    /// Create a sky for the given viewport with an OS-seeded RNG.
    pub fn new(viewport: Viewport) -> Self {
        Self::with_rng(viewport, StdRng::from_entropy())
    }

    /// Create a sky with an explicit RNG, for deterministic construction.
    pub fn with_rng(viewport: Viewport, mut rng: StdRng) -> Self {
        let stars = star::init_stars(viewport, star::star_count(viewport), &mut rng);
        Self {
            stars,
            meteors: Vec::new(),
            surface: Surface::new(viewport),
            viewport,
            last_spawn_ms: 0,
            spawn_interval_ms: METEOR_INTERVAL_MS,
            rng,
        }
    }

    /// Override the meteor spawn cadence.
    pub fn set_spawn_interval(&mut self, interval_ms: u64) {
        self.spawn_interval_ms = interval_ms;
    }

    /// Replace the star field with a fresh one of the given size.
    pub fn repopulate(&mut self, count: usize) {
        self.stars = star::init_stars(self.viewport, count, &mut self.rng);
    }

    /// Replace the star field with a fresh one at the default density.
    pub fn regenerate(&mut self) {
        self.repopulate(star::star_count(self.viewport));
    }

    /// Adopt new viewport dimensions. Only the surface is reallocated;
    /// existing stars keep their coordinates even if now out of bounds, and
    /// in-flight meteors are unaffected.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.surface = Surface::new(viewport);
    }

    /// Run one simulation and draw step for the given monotonic timestamp.
    pub fn tick(&mut self, timestamp_ms: u64) {
        if self.viewport.is_empty() {
            return;
        }

        self.surface.clear();

        // Stars twinkle as a pure function of time
        let t = timestamp_ms as f64;
        for s in &self.stars {
            self.surface
                .fill_circle(s.x, s.y, s.radius, s.color, s.twinkle_opacity(t));
        }

        // Spawn a burst once the cadence interval has elapsed
        if timestamp_ms.saturating_sub(self.last_spawn_ms) > self.spawn_interval_ms {
            let burst = meteor::spawn_burst(self.viewport, &mut self.rng);
            self.meteors.extend(burst);
            self.last_spawn_ms = timestamp_ms;
        }

        // Draw trails at their current opacity
        for m in &self.meteors {
            self.surface.stroke_line(
                m.x,
                m.y,
                m.x + m.length,
                m.y + m.length,
                meteor::STROKE_WIDTH,
                Rgb::WHITE,
                m.opacity,
            );
        }

        // Advance, then prune in a single stable pass
        for m in &mut self.meteors {
            m.advance();
        }
        let height = self.viewport.height;
        self.meteors.retain(|m| !m.is_expired(height));
    }

    /// The fixed star population.
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// The currently active meteors.
    pub fn meteors(&self) -> &[Meteor] {
        &self.meteors
    }

    /// The raster surface drawn during the last tick.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sky(width: f64, height: f64, seed: u64) -> SkyState {
        SkyState::with_rng(Viewport::new(width, height), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_initialization_scenario() {
        let mut sky = sky(800.0, 600.0, 1);
        assert_eq!(sky.stars().len(), 200);
        assert!(sky.meteors().is_empty());

        // First tick: no cadence elapsed, nothing spawns
        sky.tick(0);
        assert!(sky.meteors().is_empty());
        assert_eq!(sky.surface().width(), 800);
        assert_eq!(sky.surface().height(), 600);
    }

    #[test]
    fn test_spawn_cadence_is_strict() {
        let mut sky = sky(800.0, 600.0, 2);
        sky.tick(10_000);
        assert!(sky.meteors().is_empty());

        sky.tick(10_001);
        let spawned = sky.meteors().len();
        assert!(spawned == 1 || spawned == 2);

        // Within the next window nothing else spawns
        sky.tick(10_034);
        sky.tick(15_000);
        sky.tick(20_001);
        assert!(sky.meteors().len() <= spawned);

        // Past the window a new burst arrives
        sky.tick(20_002);
        assert!(!sky.meteors().is_empty());
    }

    #[test]
    fn test_spawned_meteors_advance_from_top() {
        let mut sky = sky(800.0, 600.0, 3);
        sky.tick(10_001);

        // Spawned at y = 0, then advanced once within the same tick
        for m in sky.meteors() {
            assert_eq!(m.y, m.speed);
            assert!(m.y >= 5.0 && m.y < 15.0);
            assert!((m.opacity - 0.99).abs() < 1e-9);
        }
    }

    #[test]
    fn test_meteors_fade_out_within_lifetime() {
        let mut sky = sky(800.0, 1601.0, 4);
        sky.tick(10_001);
        assert!(!sky.meteors().is_empty());

        // 101 further frames is enough for any meteor to fade; the surface
        // is tall enough that none leaves through the bottom first
        for k in 1..=101u64 {
            sky.tick(10_001 + k);
            for m in sky.meteors() {
                assert!(m.opacity > 0.0, "expired meteor survived pruning");
            }
        }
        assert!(sky.meteors().is_empty());
    }

    #[test]
    fn test_meteor_pruned_on_bottom_edge() {
        // Shallow surface: meteors leave through the bottom well before
        // their opacity runs out
        let mut sky = sky(800.0, 50.0, 5);
        sky.tick(10_001);
        assert!(!sky.meteors().is_empty());

        for k in 1..=11u64 {
            sky.tick(10_001 + k);
        }
        assert!(sky.meteors().is_empty());
    }

    #[test]
    fn test_resize_keeps_population() {
        let mut sky = sky(800.0, 600.0, 6);
        let first = (sky.stars()[0].x, sky.stars()[0].y);

        sky.resize(Viewport::new(400.0, 300.0));
        assert_eq!(sky.stars().len(), 200);
        assert_eq!((sky.stars()[0].x, sky.stars()[0].y), first);
        assert_eq!(sky.surface().width(), 400);
        assert_eq!(sky.surface().height(), 300);

        // Same dimensions again: observable state is unchanged
        sky.resize(Viewport::new(400.0, 300.0));
        assert_eq!(sky.stars().len(), 200);
        assert_eq!(sky.surface().width(), 400);
        assert_eq!(sky.surface().height(), 300);
    }

    #[test]
    fn test_empty_viewport_is_a_no_op() {
        let mut sky = sky(0.0, 0.0, 7);
        assert!(sky.stars().is_empty());
        sky.tick(0);
        sky.tick(60_000);
        assert!(sky.meteors().is_empty());
    }

    #[test]
    fn test_custom_spawn_interval() {
        let mut sky = sky(800.0, 600.0, 8);
        sky.set_spawn_interval(1_000);
        sky.tick(1_001);
        assert!(!sky.meteors().is_empty());
    }

    #[test]
    fn test_narrow_viewport_population() {
        let sky = sky(480.0, 600.0, 9);
        assert_eq!(sky.stars().len(), 100);
    }

    #[test]
    fn test_repopulate_override() {
        let mut sky = sky(800.0, 600.0, 10);
        sky.repopulate(42);
        assert_eq!(sky.stars().len(), 42);
        sky.regenerate();
        assert_eq!(sky.stars().len(), 200);
    }
}
