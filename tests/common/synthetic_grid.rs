use nalgebra::Vector3;
use ndarray::Array3;

use filament_rotation::VelocityGrid;

/// Solid-body rotation about the z axis, v = (-w*y, w*x, 0), on an n^3 grid
/// with unit spacing centered on the physical origin.
pub fn solid_body_grid(n: usize, omega: f64) -> VelocityGrid {
    let half = n as f64 / 2.0;
    let mut vx = Array3::zeros((n, n, n));
    let mut vy = Array3::zeros((n, n, n));
    let vz = Array3::zeros((n, n, n));
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                let x = i as f64 - half;
                let y = j as f64 - half;
                vx[[i, j, k]] = -omega * y;
                vy[[i, j, k]] = omega * x;
            }
        }
    }
    VelocityGrid::from_components(vx, vy, vz)
        .expect("equal component shapes")
        .with_metadata(Vector3::new(-half, -half, -half), 1.0)
        .expect("positive spacing")
}

/// Zero field except a single vx spike, unit spacing, origin at zero.
pub fn spike_grid(n: usize, spike: (usize, usize, usize), value: f64) -> VelocityGrid {
    let mut vx = Array3::zeros((n, n, n));
    vx[[spike.0, spike.1, spike.2]] = value;
    VelocityGrid::from_components(vx, Array3::zeros((n, n, n)), Array3::zeros((n, n, n)))
        .expect("equal component shapes")
        .with_metadata(Vector3::zeros(), 1.0)
        .expect("positive spacing")
}
