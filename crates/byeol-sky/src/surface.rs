//! Raster surface the sky is drawn onto.
//!
//! A plain RGB pixel buffer with just the two primitives the sky needs:
//! filled circles for stars and thick round-capped line segments for meteor
//! trails. Both composite source-over with a per-call alpha and clip
//! silently at the edges.

use byeol_core::{Rgb, Viewport};

/// Background color the surface clears to.
const BACKGROUND: Rgb = Rgb::BLACK;

/// An owned RGB pixel raster sized to the viewport.
#[derive(Debug, Clone)]
pub struct Surface {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Surface {
    /// Allocate a surface matching the viewport, cleared to the background.
    pub fn new(viewport: Viewport) -> Self {
        let width = viewport.width.max(0.0) as usize;
        let height = viewport.height.max(0.0) as usize;
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width * height],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at the given coordinates, or `None` outside the surface.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Reset every pixel to the background color.
    pub fn clear(&mut self) {
        self.pixels.fill(BACKGROUND);
    }

    /// Composite a single pixel, clipping out-of-bounds coordinates.
    fn plot(&mut self, x: i64, y: i64, color: Rgb, coverage: f64) {
        if coverage <= 0.0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y * self.width + x;
        self.pixels[idx] = color.over(self.pixels[idx], coverage);
    }

    /// Draw a filled circle with a soft one-pixel edge.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb, alpha: f64) {
        let x0 = (cx - radius - 1.0).floor() as i64;
        let x1 = (cx + radius + 1.0).ceil() as i64;
        let y0 = (cy - radius - 1.0).floor() as i64;
        let y1 = (cy + radius + 1.0).ceil() as i64;

        for py in y0..=y1 {
            for px in x0..=x1 {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                let dist = (dx * dx + dy * dy).sqrt();
                let coverage = (radius - dist + 0.5).clamp(0.0, 1.0);
                self.plot(px, py, color, coverage * alpha);
            }
        }
    }

    /// Stroke a line segment of the given width. Coverage falls off with
    /// distance from the segment, so the caps come out round.
    pub fn stroke_line(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        width: f64,
        color: Rgb,
        alpha: f64,
    ) {
        let half = width / 2.0;
        let min_x = (x0.min(x1) - half - 1.0).floor() as i64;
        let max_x = (x0.max(x1) + half + 1.0).ceil() as i64;
        let min_y = (y0.min(y1) - half - 1.0).floor() as i64;
        let max_y = (y0.max(y1) + half + 1.0).ceil() as i64;

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let dist =
                    segment_distance(px as f64 + 0.5, py as f64 + 0.5, x0, y0, x1, y1);
                let coverage = (half - dist + 0.5).clamp(0.0, 1.0);
                self.plot(px, py, color, coverage * alpha);
            }
        }
    }
}

/// Distance from a point to the closest point on a segment.
fn segment_distance(px: f64, py: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    let (dx, dy) = (x1 - x0, y1 - y0);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((px - x0) * dx + (py - y0) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (x0 + t * dx, y0 + t * dy);
    ((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_fills_background() {
        let mut surface = Surface::new(Viewport::new(8.0, 4.0));
        surface.fill_circle(4.0, 2.0, 1.5, Rgb::WHITE, 1.0);
        surface.clear();
        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(surface.pixel(x, y), Some(BACKGROUND));
            }
        }
    }

    #[test]
    fn test_circle_lights_center_pixel() {
        let mut surface = Surface::new(Viewport::new(16.0, 16.0));
        surface.fill_circle(8.5, 8.5, 1.4, Rgb::WHITE, 1.0);
        let center = surface.pixel(8, 8).unwrap();
        assert!(center.r > 200);
        // Far corner untouched
        assert_eq!(surface.pixel(0, 0), Some(BACKGROUND));
    }

    #[test]
    fn test_zero_alpha_draws_nothing() {
        let mut surface = Surface::new(Viewport::new(16.0, 16.0));
        surface.fill_circle(8.0, 8.0, 1.4, Rgb::WHITE, 0.0);
        surface.stroke_line(0.0, 0.0, 15.0, 15.0, 2.0, Rgb::WHITE, 0.0);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(surface.pixel(x, y), Some(BACKGROUND));
            }
        }
    }

    #[test]
    fn test_line_covers_diagonal() {
        let mut surface = Surface::new(Viewport::new(32.0, 32.0));
        surface.stroke_line(2.0, 2.0, 28.0, 28.0, 2.0, Rgb::WHITE, 1.0);
        // Pixels on the diagonal are lit, the opposite corners stay dark
        let mid = surface.pixel(15, 15).unwrap();
        assert!(mid.r > 200);
        assert_eq!(surface.pixel(28, 2), Some(BACKGROUND));
        assert_eq!(surface.pixel(2, 28), Some(BACKGROUND));
    }

    #[test]
    fn test_out_of_bounds_drawing_is_clipped() {
        let mut surface = Surface::new(Viewport::new(8.0, 8.0));
        // Entirely outside, partially outside: neither may panic
        surface.fill_circle(-10.0, -10.0, 1.4, Rgb::WHITE, 1.0);
        surface.fill_circle(7.9, 7.9, 1.4, Rgb::WHITE, 1.0);
        surface.stroke_line(-5.0, -5.0, 20.0, 20.0, 2.0, Rgb::WHITE, 0.8);
        assert_eq!(surface.width(), 8);
        assert_eq!(surface.height(), 8);
    }

    #[test]
    fn test_zero_area_surface() {
        let mut surface = Surface::new(Viewport::new(0.0, 0.0));
        surface.clear();
        surface.fill_circle(0.0, 0.0, 1.0, Rgb::WHITE, 1.0);
        assert_eq!(surface.pixel(0, 0), None);
    }
}
