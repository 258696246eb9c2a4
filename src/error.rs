//! Crate-wide error type.
//!
//! Structural problems (degenerate axis, missing grid metadata, malformed
//! component arrays) are hard errors. Out-of-bounds samples are *not* errors:
//! the sampler reports them as `None` and ring averaging skips them.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Zero-length axis vector passed to frame construction.
    #[error("zero-length axis vector")]
    DegenerateAxis,

    /// Grid lacks origin or spacing metadata required for sampling.
    #[error("grid missing {0} metadata required for sampling")]
    MissingMetadata(&'static str),

    /// Grid spacing must be positive and finite.
    #[error("grid spacing must be positive and finite, got {0}")]
    InvalidSpacing(f64),

    /// Velocity component arrays do not share a single shape.
    #[error("velocity component shapes differ: vx {vx:?}, vy {vy:?}, vz {vz:?}")]
    ShapeMismatch {
        vx: Vec<usize>,
        vy: Vec<usize>,
        vz: Vec<usize>,
    },

    /// Packed velocity array is not shaped (nx, ny, nz, 3).
    #[error("packed velocity grid must have shape (nx, ny, nz, 3); got {0:?}")]
    PackedShape(Vec<usize>),
}

pub type Result<T> = std::result::Result<T, Error>;
