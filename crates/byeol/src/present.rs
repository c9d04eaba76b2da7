//! Half-block presentation of the sky surface.
//!
//! Each terminal cell shows two vertically stacked surface pixels using the
//! upper half block: foreground is the upper pixel, background the lower.

use byeol_core::Rgb;
use byeol_sky::Surface;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const UPPER_HALF_BLOCK: &str = "▀";

/// Build a widget rendering the surface at two pixels per cell row.
pub fn sky_widget(surface: &Surface) -> Paragraph<'static> {
    let rows = surface.height() / 2;
    let lines: Vec<Line> = (0..rows)
        .map(|row| {
            let spans: Vec<Span> = (0..surface.width())
                .map(|x| {
                    let upper = surface.pixel(x, row * 2).unwrap_or(Rgb::BLACK);
                    let lower = surface.pixel(x, row * 2 + 1).unwrap_or(Rgb::BLACK);
                    Span::styled(
                        UPPER_HALF_BLOCK,
                        Style::new().fg(to_color(upper)).bg(to_color(lower)),
                    )
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    Paragraph::new(lines)
}

fn to_color(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}
