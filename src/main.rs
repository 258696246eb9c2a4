use filament_rotation::prelude::*;
use nalgebra::Vector3;
use ndarray::Array3;

fn main() {
    // Demo stub: builds a synthetic solid-body rotation field and profiles
    // one segment through its center.
    let n = 32usize;
    let half = n as f64 / 2.0;
    let omega = 0.1;
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
    let grid = VelocityGrid::from_components(vx, vy, vz)
        .expect("components share one shape")
        .with_metadata(Vector3::new(-half, -half, -half), 1.0)
        .expect("positive spacing");

    let segment = Segment {
        p0: Vector3::new(0.0, 0.0, -10.0),
        p1: Vector3::new(0.0, 0.0, 10.0),
        center: Vector3::zeros(),
    };
    let radii = [0.5, 1.0, 2.0, 4.0, 8.0];
    let profile =
        segment_profile(&segment, &radii, 32, &grid).expect("axis and metadata are valid");
    for entry in profile.iter() {
        match entry.mean_vphi {
            Some(vphi) => println!("R={:.1} Mpc  <v_phi>={vphi:.4}", entry.radius),
            None => println!("R={:.1} Mpc  <v_phi>=undefined", entry.radius),
        }
    }
}
