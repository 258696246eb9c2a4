//! Orthonormal frame construction around a filament axis.
use nalgebra::Vector3;

use crate::error::{Error, Result};

/// Local orthonormal basis around an axis: `e_par` parallel to the axis,
/// `e1` and `e2` spanning the perpendicular plane, right-handed via
/// `e2 = e_par × e1`.
///
/// The frame is deterministic for a given axis but not unique: any rotation
/// of `e1, e2` about `e_par` would serve equally. Recomputed on demand,
/// never cached.
#[derive(Clone, Copy, Debug)]
pub struct OrthonormalFrame {
    pub e_par: Vector3<f64>,
    pub e1: Vector3<f64>,
    pub e2: Vector3<f64>,
}

/// Build the orthonormal frame for an axis vector.
///
/// The axis does not need to be normalized. Fails with
/// [`Error::DegenerateAxis`] on a zero-length input.
pub fn build_frame(axis: &Vector3<f64>) -> Result<OrthonormalFrame> {
    let norm = axis.norm();
    if norm == 0.0 {
        return Err(Error::DegenerateAxis);
    }
    let e_par = axis / norm;

    // Helper vector not parallel to the axis; switch to Y when the axis is
    // close to X so the cross product stays well-conditioned.
    let mut helper = Vector3::x();
    if helper.dot(&e_par).abs() > 0.9 {
        helper = Vector3::y();
    }

    let e1 = e_par.cross(&helper).normalize();
    let e2 = e_par.cross(&e1).normalize();
    Ok(OrthonormalFrame { e_par, e1, e2 })
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn assert_orthonormal(frame: &OrthonormalFrame) {
        assert!((frame.e_par.norm() - 1.0).abs() < TOL, "e_par not unit");
        assert!((frame.e1.norm() - 1.0).abs() < TOL, "e1 not unit");
        assert!((frame.e2.norm() - 1.0).abs() < TOL, "e2 not unit");
        assert!(frame.e_par.dot(&frame.e1).abs() < TOL, "e_par not ⟂ e1");
        assert!(frame.e_par.dot(&frame.e2).abs() < TOL, "e_par not ⟂ e2");
        assert!(frame.e1.dot(&frame.e2).abs() < TOL, "e1 not ⟂ e2");
    }

    #[test]
    fn frame_is_orthonormal_for_generic_axes() {
        for axis in [
            Vector3::new(0.3, -1.2, 2.5),
            Vector3::new(0.0, 0.0, 1.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(-4.0, 0.1, 0.1),
            Vector3::new(1e-8, 1e-8, 1e-8),
        ] {
            let frame = build_frame(&axis).expect("non-zero axis");
            assert_orthonormal(&frame);
            let aligned = frame.e_par.dot(&axis.normalize());
            assert!(
                (aligned - 1.0).abs() < TOL,
                "e_par not parallel to axis, dot={aligned}"
            );
        }
    }

    #[test]
    fn frame_survives_axis_aligned_with_x() {
        // The helper vector must switch to Y here or e1 collapses.
        let frame = build_frame(&Vector3::x()).expect("unit x axis");
        assert_orthonormal(&frame);
        assert!((frame.e1.norm() - 1.0).abs() < TOL);
    }

    #[test]
    fn frame_is_right_handed() {
        let frame = build_frame(&Vector3::new(0.0, 0.0, 2.0)).unwrap();
        let cross = frame.e_par.cross(&frame.e1);
        assert!((cross - frame.e2).norm() < TOL, "e2 != e_par × e1");
    }

    #[test]
    fn frame_is_deterministic() {
        let axis = Vector3::new(1.5, -0.5, 0.25);
        let a = build_frame(&axis).unwrap();
        let b = build_frame(&axis).unwrap();
        assert_eq!(a.e1, b.e1);
        assert_eq!(a.e2, b.e2);
    }

    #[test]
    fn zero_axis_is_rejected() {
        assert!(matches!(
            build_frame(&Vector3::zeros()),
            Err(Error::DegenerateAxis)
        ));
    }
}
