//! Scale-and-translate maps for ball and sphere reference domains.
//!
//! The reference domain is the unit ball (or its boundary sphere) centered at
//! the origin; a concrete instance is `center + radius * x`. The measure
//! scaling factor is `radius^dim` for interior (volume) domains and
//! `radius^(dim-1)` for boundary (surface) domains.

use ndarray::{Array2, ArrayView1, ArrayView2};
use std::f64::consts::PI;

/// Map reference points through `x ↦ center + radius * x`.
pub fn transform_radial(
    xi: ArrayView2<'_, f64>,
    center: ArrayView1<'_, f64>,
    radius: f64,
) -> Array2<f64> {
    let mut out = xi.to_owned() * radius;
    out += &center;
    out
}

/// Measure scaling factor for an interior (ball) instance.
pub fn ball_scale(radius: f64, dim: usize) -> f64 {
    radius.abs().powi(dim as i32)
}

/// Measure scaling factor for a boundary (sphere) instance.
pub fn sphere_scale(radius: f64, dim: usize) -> f64 {
    radius.abs().powi(dim as i32 - 1)
}

/// Volume of the unit ball in `dim` dimensions.
///
/// Uses the recurrence `V_n = 2π/n · V_{n-2}` with `V_0 = 1`, `V_1 = 2`.
pub fn unit_ball_volume(dim: usize) -> f64 {
    match dim {
        0 => 1.0,
        1 => 2.0,
        n => 2.0 * PI / n as f64 * unit_ball_volume(n - 2),
    }
}

/// Surface area of the unit sphere bounding the unit ball in `dim`
/// dimensions: `A_n = n · V_n`.
pub fn unit_sphere_area(dim: usize) -> f64 {
    dim as f64 * unit_ball_volume(dim)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr1, arr2};

    #[test]
    fn test_transform_radial() {
        let xi = arr2(&[[1.0, 0.0], [0.0, -1.0]]);
        let center = arr1(&[10.0, 20.0]);
        let x = transform_radial(xi.view(), center.view(), 2.0);
        assert_eq!(x.row(0).to_vec(), vec![12.0, 20.0]);
        assert_eq!(x.row(1).to_vec(), vec![10.0, 18.0]);
    }

    #[test]
    fn test_identity_radial_transform() {
        let xi = arr2(&[[0.3, -0.4, 0.5]]);
        let center = arr1(&[0.0, 0.0, 0.0]);
        let x = transform_radial(xi.view(), center.view(), 1.0);
        for (a, b) in x.iter().zip(xi.iter()) {
            assert!((a - b).abs() < 1e-15);
        }
        assert_eq!(ball_scale(1.0, 3), 1.0);
        assert_eq!(sphere_scale(1.0, 3), 1.0);
    }

    #[test]
    fn test_unit_ball_volumes() {
        assert!((unit_ball_volume(1) - 2.0).abs() < 1e-14);
        assert!((unit_ball_volume(2) - PI).abs() < 1e-14);
        assert!((unit_ball_volume(3) - 4.0 * PI / 3.0).abs() < 1e-14);
        assert!((unit_ball_volume(4) - PI * PI / 2.0).abs() < 1e-14);
    }

    #[test]
    fn test_unit_sphere_areas() {
        assert!((unit_sphere_area(2) - 2.0 * PI).abs() < 1e-14);
        assert!((unit_sphere_area(3) - 4.0 * PI).abs() < 1e-13);
    }

    #[test]
    fn test_scale_exponents() {
        assert!((ball_scale(2.0, 3) - 8.0).abs() < 1e-14);
        assert!((sphere_scale(2.0, 3) - 4.0).abs() < 1e-14);
        // Zero radius propagates a zero factor rather than an error.
        assert_eq!(ball_scale(0.0, 2), 0.0);
    }
}
