//! Velocity grid storage and construction.
//!
//! A [`VelocityGrid`] owns three equal-shape `Array3<f64>` components plus
//! optional origin/spacing metadata mapping lattice index to physical
//! position (`position = origin + index * dx`, isotropic spacing, Mpc).
//!
//! Loaders normalize their on-disk layout here: packed `(nx, ny, nz, 3)`
//! arrays are split into components at construction, so sampling code never
//! branches on input layout. The grid is immutable once built and is only
//! ever borrowed read-only by the estimators.
use nalgebra::Vector3;
use ndarray::{Array3, Array4, Axis};

use crate::error::{Error, Result};

#[derive(Clone, Debug)]
pub struct VelocityGrid {
    vx: Array3<f64>,
    vy: Array3<f64>,
    vz: Array3<f64>,
    origin: Option<Vector3<f64>>,
    dx: Option<f64>,
}

/// Resolved index-to-position mapping, available once both origin and
/// spacing metadata are set.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GridMapping {
    pub origin: Vector3<f64>,
    pub dx: f64,
}

impl VelocityGrid {
    /// Build from three per-component arrays, which must share one shape.
    pub fn from_components(
        vx: Array3<f64>,
        vy: Array3<f64>,
        vz: Array3<f64>,
    ) -> Result<Self> {
        if vx.dim() != vy.dim() || vx.dim() != vz.dim() {
            return Err(Error::ShapeMismatch {
                vx: vx.shape().to_vec(),
                vy: vy.shape().to_vec(),
                vz: vz.shape().to_vec(),
            });
        }
        Ok(Self {
            vx,
            vy,
            vz,
            origin: None,
            dx: None,
        })
    }

    /// Build from a packed `(nx, ny, nz, 3)` array-of-vectors layout,
    /// splitting it into the three component arrays.
    pub fn from_packed(packed: Array4<f64>) -> Result<Self> {
        if packed.shape()[3] != 3 {
            return Err(Error::PackedShape(packed.shape().to_vec()));
        }
        let component = |c: usize| packed.index_axis(Axis(3), c).to_owned();
        Self::from_components(component(0), component(1), component(2))
    }

    /// Attach origin and spacing metadata, consuming and returning the grid.
    /// Fails with [`Error::InvalidSpacing`] unless `dx` is positive and
    /// finite; a zero or non-finite spacing would poison every lattice
    /// mapping downstream.
    pub fn with_metadata(mut self, origin: Vector3<f64>, dx: f64) -> Result<Self> {
        if !(dx.is_finite() && dx > 0.0) {
            return Err(Error::InvalidSpacing(dx));
        }
        self.origin = Some(origin);
        self.dx = Some(dx);
        Ok(self)
    }

    /// Grid dimensions `(nx, ny, nz)`.
    pub fn dims(&self) -> (usize, usize, usize) {
        self.vx.dim()
    }

    /// Physical origin of lattice index (0, 0, 0), if set.
    pub fn origin(&self) -> Option<Vector3<f64>> {
        self.origin
    }

    /// Uniform grid spacing, if set.
    pub fn dx(&self) -> Option<f64> {
        self.dx
    }

    #[inline]
    pub fn vx(&self) -> &Array3<f64> {
        &self.vx
    }

    #[inline]
    pub fn vy(&self) -> &Array3<f64> {
        &self.vy
    }

    #[inline]
    pub fn vz(&self) -> &Array3<f64> {
        &self.vz
    }

    /// Resolve the index-to-position mapping, failing when either origin
    /// or spacing metadata is absent.
    pub(crate) fn mapping(&self) -> Result<GridMapping> {
        let origin = self.origin.ok_or(Error::MissingMetadata("origin"))?;
        let dx = self.dx.ok_or(Error::MissingMetadata("dx"))?;
        Ok(GridMapping { origin, dx })
    }
}
