//! Ring-sampled mean azimuthal velocity.
use log::debug;
use nalgebra::Vector3;

use crate::error::Result;
use crate::frame::build_frame;
use crate::grid::VelocityGrid;
use crate::sample::sample_velocity;

/// Mean azimuthal velocity `<v_phi>` on a ring of radius `radius` around
/// `axis` at `center`, from `nphi` evenly spaced samples.
///
/// Angles span `[0, 2π)` with step `2π/nphi`, the first sample at exactly
/// phi = 0. Each ring point is `center + R(cosφ e1 + sinφ e2)` and its
/// azimuthal direction `-sinφ e1 + cosφ e2`, right-handed with the axis.
/// Out-of-bounds samples are skipped; `Ok(None)` means no sample landed
/// inside the grid. Partial ring coverage near grid boundaries is expected
/// and tolerated.
///
/// `radius = 0` collapses every ring point onto `center`; the samples still
/// differ in projection direction, so the mean remains a (noisy) estimate.
pub fn ring_mean_azimuthal(
    center: &Vector3<f64>,
    axis: &Vector3<f64>,
    radius: f64,
    nphi: usize,
    grid: &VelocityGrid,
) -> Result<Option<f64>> {
    let frame = build_frame(axis)?;
    let step = std::f64::consts::TAU / nphi as f64;

    let mut sum = 0.0;
    let mut count = 0usize;
    for n in 0..nphi {
        let phi = step * n as f64;
        let (sin_phi, cos_phi) = phi.sin_cos();
        let point = center + radius * (cos_phi * frame.e1 + sin_phi * frame.e2);
        let Some(v) = sample_velocity(grid, &point)? else {
            continue;
        };
        let e_phi = -sin_phi * frame.e1 + cos_phi * frame.e2;
        sum += v.dot(&e_phi);
        count += 1;
    }

    if count == 0 {
        debug!("ring R={radius}: all {nphi} samples out of bounds");
        return Ok(None);
    }
    if count < nphi {
        debug!("ring R={radius}: {count}/{nphi} samples in bounds");
    }
    Ok(Some(sum / count as f64))
}
