//! Per-segment radial rotation profiles.
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::VelocityGrid;
use crate::ring::ring_mean_azimuthal;

/// One filament segment: two axis endpoints plus an independent center
/// position (not necessarily the midpoint).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Segment {
    pub p0: Vector3<f64>,
    pub p1: Vector3<f64>,
    pub center: Vector3<f64>,
}

impl Segment {
    /// Axis vector `p1 - p0`. Not normalized; may be zero for degenerate
    /// input, which the estimators reject.
    pub fn axis(&self) -> Vector3<f64> {
        self.p1 - self.p0
    }
}

/// One radius of a radial profile. `mean_vphi` is `None` when every ring
/// sample at this radius fell outside the grid.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct ProfileEntry {
    pub radius: f64,
    pub mean_vphi: Option<f64>,
}

/// Radial rotation profile of one segment: mean azimuthal velocity per
/// radius, in the order the radii were requested.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RadialProfile {
    entries: Vec<ProfileEntry>,
}

impl RadialProfile {
    pub fn iter(&self) -> impl Iterator<Item = &ProfileEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for an exact input radius value. Numeric equality
    /// first (so `0.0` and `-0.0` match either way), bit-pattern equality
    /// as a fallback for NaN keys.
    pub fn get(&self, radius: f64) -> Option<&ProfileEntry> {
        self.entries
            .iter()
            .find(|e| e.radius == radius || e.radius.to_bits() == radius.to_bits())
    }
}

/// Compute `<v_phi>(R)` for one segment over an ordered list of radii.
///
/// Each radius is estimated independently via [`ring_mean_azimuthal`];
/// radii whose rings have no in-bounds samples appear as `None` entries
/// rather than failing the whole profile.
pub fn segment_profile(
    segment: &Segment,
    radii: &[f64],
    nphi: usize,
    grid: &VelocityGrid,
) -> Result<RadialProfile> {
    let axis = segment.axis();
    let mut entries = Vec::with_capacity(radii.len());
    for &radius in radii {
        let mean_vphi = ring_mean_azimuthal(&segment.center, &axis, radius, nphi, grid)?;
        entries.push(ProfileEntry { radius, mean_vphi });
    }
    Ok(RadialProfile { entries })
}
