//! Trilinear velocity sampling at continuous positions.
use nalgebra::Vector3;
use ndarray::Array3;

use crate::error::Result;
use crate::grid::VelocityGrid;

#[inline(always)]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Sample the velocity field at a physical position via trilinear
/// interpolation over the 8 enclosing lattice corners.
///
/// Returns `Ok(None)` when the position falls outside the interpolatable
/// interior of the grid (any corner index out of range) — expected behavior
/// near grid boundaries, not an error. Fails with
/// [`Error::MissingMetadata`](crate::Error::MissingMetadata) when the grid
/// carries no origin/spacing metadata.
pub fn sample_velocity(grid: &VelocityGrid, pos: &Vector3<f64>) -> Result<Option<Vector3<f64>>> {
    let mapping = grid.mapping()?;
    let f = (pos - mapping.origin) / mapping.dx;

    let fx = f.x.floor();
    let fy = f.y.floor();
    let fz = f.z.floor();

    // Bounds check in floating point before any cast; this keeps far-off
    // and non-finite coordinates on the undefined path instead of
    // saturating the integer conversion.
    let (nx, ny, nz) = grid.dims();
    let in_bounds = fx >= 0.0
        && fy >= 0.0
        && fz >= 0.0
        && fx + 1.0 < nx as f64
        && fy + 1.0 < ny as f64
        && fz + 1.0 < nz as f64;
    if !in_bounds {
        return Ok(None);
    }
    let (i, j, k) = (fx as usize, fy as usize, fz as usize);
    let tx = f.x - fx;
    let ty = f.y - fy;
    let tz = f.z - fz;

    // Collapse the 8 corners along x, then y, then z. Done per component so
    // the three interpolations stay independent.
    let corner_blend = |a: &Array3<f64>| -> f64 {
        let c00 = lerp(a[[i, j, k]], a[[i + 1, j, k]], tx);
        let c10 = lerp(a[[i, j + 1, k]], a[[i + 1, j + 1, k]], tx);
        let c01 = lerp(a[[i, j, k + 1]], a[[i + 1, j, k + 1]], tx);
        let c11 = lerp(a[[i, j + 1, k + 1]], a[[i + 1, j + 1, k + 1]], tx);
        let c0 = lerp(c00, c10, ty);
        let c1 = lerp(c01, c11, ty);
        lerp(c0, c1, tz)
    };

    Ok(Some(Vector3::new(
        corner_blend(grid.vx()),
        corner_blend(grid.vy()),
        corner_blend(grid.vz()),
    )))
}
