//! Night-sky simulation engine for the byeol renderer.
//!
//! This crate owns the animated sky: a fixed population of twinkling stars,
//! a transient population of meteors spawned on a timed cadence, and the
//! raster surface both are drawn onto once per tick. The host supplies
//! viewport dimensions and a monotonic timestamp per frame; everything else
//! lives here.

mod meteor;
mod star;
mod state;
mod surface;

pub use meteor::Meteor;
pub use star::Star;
pub use state::SkyState;
pub use surface::Surface;
