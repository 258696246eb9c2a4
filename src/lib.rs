#![doc = include_str!("../README.md")]

// Core estimator modules (stable-ish surface)
pub mod error;
pub mod frame;
pub mod grid;
pub mod profile;
pub mod ring;
pub mod sample;

// Glue for configs, segment catalogs, and JSON output.
pub mod config;
pub mod records;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{Error, Result};
pub use crate::frame::{build_frame, OrthonormalFrame};
pub use crate::grid::VelocityGrid;
pub use crate::profile::{segment_profile, ProfileEntry, RadialProfile, Segment};
pub use crate::ring::ring_mean_azimuthal;
pub use crate::sample::sample_velocity;

/// Small prelude for quick experiments.
pub mod prelude {
    pub use crate::grid::VelocityGrid;
    pub use crate::profile::{segment_profile, RadialProfile, Segment};
    pub use crate::ring::ring_mean_azimuthal;
    pub use crate::sample::sample_velocity;
}
