//! Reference domains and their concrete realizations.
//!
//! A [`DomainKind`] tags a scheme with the reference domain its points live
//! on; a [`DomainInstance`] is a caller-supplied concrete realization of that
//! domain (corner coordinates for polytopes, center and radius for radial
//! domains). Instances are not owned by schemes: one scheme integrates over
//! arbitrarily many instances.

pub mod polytope;
pub mod radial;

use ndarray::{Array1, Array2, ArrayView2};

use crate::error::{CubatureError, Result};

pub use polytope::cuboid;
pub use radial::{unit_ball_volume, unit_sphere_area};

/// The reference domain a scheme's points are defined against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainKind {
    /// The ±1 hyper-cube; instances are multilinear corner blends.
    Cube { dim: usize },
    /// The unit simplex; instances are affine vertex blends.
    Simplex { dim: usize },
    /// The 3-D pyramid with square ±1 base at ζ = −1 and apex at ζ = +1;
    /// scheme points are cube reference coordinates and the instance
    /// Jacobian supplies the pyramid measure.
    Pyramid,
    /// The unit ball; instances are scale-and-translate images.
    Ball { dim: usize },
    /// The unit sphere bounding the unit ball in `dim`-dimensional space.
    Sphere { dim: usize },
}

impl DomainKind {
    /// Ambient space dimension of the reference domain.
    pub fn dimension(&self) -> usize {
        match *self {
            DomainKind::Cube { dim }
            | DomainKind::Simplex { dim }
            | DomainKind::Ball { dim }
            | DomainKind::Sphere { dim } => dim,
            DomainKind::Pyramid => 3,
        }
    }

    /// Measure (length/area/volume) of the reference domain itself.
    pub fn reference_measure(&self) -> f64 {
        match *self {
            DomainKind::Cube { dim } => (1u64 << dim) as f64,
            DomainKind::Simplex { dim } => 1.0 / factorial(dim),
            DomainKind::Pyramid => 8.0 / 3.0,
            DomainKind::Ball { dim } => radial::unit_ball_volume(dim),
            DomainKind::Sphere { dim } => radial::unit_sphere_area(dim),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DomainKind::Cube { .. } => "cube",
            DomainKind::Simplex { .. } => "simplex",
            DomainKind::Pyramid => "pyramid",
            DomainKind::Ball { .. } => "ball",
            DomainKind::Sphere { .. } => "sphere",
        }
    }
}

fn factorial(n: usize) -> f64 {
    (1..=n as u64).product::<u64>() as f64
}

/// A concrete realization of a reference domain.
#[derive(Debug, Clone)]
pub enum DomainInstance {
    /// `2^dim` corner rows in the binary order documented in
    /// [`polytope`]; see [`cuboid`] for axis-aligned boxes.
    Cube(Array2<f64>),
    /// `dim + 1` vertex rows; the first vertex is the image of the origin.
    Simplex(Array2<f64>),
    /// Four base corner rows in cyclic order, then the apex.
    Pyramid(Array2<f64>),
    /// Ball with the given center and radius.
    Ball { center: Array1<f64>, radius: f64 },
    /// Sphere with the given center and radius.
    Sphere { center: Array1<f64>, radius: f64 },
}

impl DomainInstance {
    /// The identity realization of a reference domain: the ±1 cube, the unit
    /// simplex, the standard pyramid, or the unit ball/sphere at the origin.
    pub fn reference(kind: DomainKind) -> Self {
        match kind {
            DomainKind::Cube { dim } => {
                DomainInstance::Cube(cuboid(&vec![(-1.0, 1.0); dim]))
            }
            DomainKind::Simplex { dim } => {
                let mut vertices = Array2::zeros((dim + 1, dim));
                for k in 0..dim {
                    vertices[(k + 1, k)] = 1.0;
                }
                DomainInstance::Simplex(vertices)
            }
            DomainKind::Pyramid => DomainInstance::Pyramid(ndarray::arr2(&[
                [-1.0, -1.0, -1.0],
                [1.0, -1.0, -1.0],
                [1.0, 1.0, -1.0],
                [-1.0, 1.0, -1.0],
                [0.0, 0.0, 1.0],
            ])),
            DomainKind::Ball { dim } => DomainInstance::Ball {
                center: Array1::zeros(dim),
                radius: 1.0,
            },
            DomainKind::Sphere { dim } => DomainInstance::Sphere {
                center: Array1::zeros(dim),
                radius: 1.0,
            },
        }
    }

    fn label(&self) -> &'static str {
        match self {
            DomainInstance::Cube(_) => "cube",
            DomainInstance::Simplex(_) => "simplex",
            DomainInstance::Pyramid(_) => "pyramid",
            DomainInstance::Ball { .. } => "ball",
            DomainInstance::Sphere { .. } => "sphere",
        }
    }

    /// Optional degeneracy detection: zero/NaN radius, vanishing Jacobian at
    /// the domain center. Integration itself never performs this check; a
    /// degenerate instance simply propagates the numeric result.
    pub fn validate(&self, kind: DomainKind) -> Result<()> {
        check_shapes(kind, self)?;
        match self {
            DomainInstance::Ball { radius, .. } | DomainInstance::Sphere { radius, .. } => {
                if !radius.is_finite() || *radius <= 0.0 {
                    return Err(CubatureError::DegenerateDomainInstance {
                        reason: format!("radius {}", radius),
                    });
                }
            }
            DomainInstance::Simplex(vertices) => {
                let d = polytope::simplex_detj(vertices.view());
                if !d.is_finite() || d == 0.0 {
                    return Err(CubatureError::DegenerateDomainInstance {
                        reason: format!("simplex Jacobian determinant {}", d),
                    });
                }
            }
            DomainInstance::Cube(corners) => {
                let center = Array2::zeros((1, kind.dimension()));
                let d = polytope::cube_detj(center.view(), corners.view())[0];
                if !d.is_finite() || d == 0.0 {
                    return Err(CubatureError::DegenerateDomainInstance {
                        reason: format!("Jacobian determinant {} at the cube center", d),
                    });
                }
            }
            DomainInstance::Pyramid(vertices) => {
                let center = Array2::zeros((1, 3));
                let d = polytope::pyramid_detj(center.view(), vertices.view())[0];
                if !d.is_finite() || d == 0.0 {
                    return Err(CubatureError::DegenerateDomainInstance {
                        reason: format!("Jacobian determinant {} at the pyramid center", d),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Check that an instance structurally matches a domain kind; returns the
/// ambient dimension.
fn check_shapes(kind: DomainKind, instance: &DomainInstance) -> Result<usize> {
    let dim = kind.dimension();
    let expect = |expected: String, got: String| -> CubatureError {
        CubatureError::shape("domain instance", expected, got)
    };
    match (kind, instance) {
        (DomainKind::Cube { .. }, DomainInstance::Cube(corners)) => {
            if corners.nrows() != 1 << dim || corners.ncols() != dim {
                return Err(expect(
                    format!("{} corners of width {}", 1usize << dim, dim),
                    format!("{} corners of width {}", corners.nrows(), corners.ncols()),
                ));
            }
        }
        (DomainKind::Simplex { .. }, DomainInstance::Simplex(vertices)) => {
            if vertices.nrows() != dim + 1 || vertices.ncols() != dim {
                return Err(expect(
                    format!("{} vertices of width {}", dim + 1, dim),
                    format!("{} vertices of width {}", vertices.nrows(), vertices.ncols()),
                ));
            }
        }
        (DomainKind::Pyramid, DomainInstance::Pyramid(vertices)) => {
            if vertices.dim() != (5, 3) {
                return Err(expect(
                    "5 vertices of width 3".into(),
                    format!("{} vertices of width {}", vertices.nrows(), vertices.ncols()),
                ));
            }
        }
        (DomainKind::Ball { .. }, DomainInstance::Ball { center, .. })
        | (DomainKind::Sphere { .. }, DomainInstance::Sphere { center, .. }) => {
            if center.len() != dim {
                return Err(expect(
                    format!("center of length {}", dim),
                    format!("center of length {}", center.len()),
                ));
            }
        }
        _ => {
            return Err(expect(
                format!("{} instance", kind.label()),
                format!("{} instance", instance.label()),
            ));
        }
    }
    Ok(dim)
}

/// Transform a batch of reference points onto a concrete instance, returning
/// the transformed points and the per-point measure scaling factor.
///
/// The scaling factor is the absolute Jacobian determinant for polytope
/// kinds and the radius power for radial kinds; a quadrature weight always
/// scales by a nonnegative measure factor regardless of map orientation.
pub(crate) fn transform_batch(
    kind: DomainKind,
    instance: &DomainInstance,
    xi: ArrayView2<'_, f64>,
) -> Result<(Array2<f64>, Array1<f64>)> {
    check_shapes(kind, instance)?;
    let npts = xi.nrows();
    match instance {
        DomainInstance::Cube(corners) => {
            let x = polytope::transform_cube(xi, corners.view());
            let scale = polytope::cube_detj(xi, corners.view()).mapv(f64::abs);
            Ok((x, scale))
        }
        DomainInstance::Simplex(vertices) => {
            let x = polytope::transform_simplex(xi, vertices.view());
            let d = polytope::simplex_detj(vertices.view()).abs();
            Ok((x, Array1::from_elem(npts, d)))
        }
        DomainInstance::Pyramid(vertices) => {
            let x = polytope::transform_pyramid(xi, vertices.view());
            let scale = polytope::pyramid_detj(xi, vertices.view()).mapv(f64::abs);
            Ok((x, scale))
        }
        DomainInstance::Ball { center, radius } => {
            let x = radial::transform_radial(xi, center.view(), *radius);
            let s = radial::ball_scale(*radius, kind.dimension());
            Ok((x, Array1::from_elem(npts, s)))
        }
        DomainInstance::Sphere { center, radius } => {
            let x = radial::transform_radial(xi, center.view(), *radius);
            let s = radial::sphere_scale(*radius, kind.dimension());
            Ok((x, Array1::from_elem(npts, s)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_reference_measures() {
        assert_eq!(DomainKind::Cube { dim: 3 }.reference_measure(), 8.0);
        assert!((DomainKind::Simplex { dim: 3 }.reference_measure() - 1.0 / 6.0).abs() < 1e-15);
        assert!((DomainKind::Pyramid.reference_measure() - 8.0 / 3.0).abs() < 1e-15);
    }

    #[test]
    fn test_identity_instances_leave_points_unchanged() {
        for kind in [
            DomainKind::Cube { dim: 2 },
            DomainKind::Simplex { dim: 2 },
            DomainKind::Ball { dim: 2 },
            DomainKind::Sphere { dim: 2 },
        ] {
            let instance = DomainInstance::reference(kind);
            let xi = arr2(&[[0.25, 0.125], [0.0, 0.5]]);
            let (x, scale) = transform_batch(kind, &instance, xi.view()).unwrap();
            for (a, b) in x.iter().zip(xi.iter()) {
                assert!((a - b).abs() < 1e-14, "{:?}", kind);
            }
            for &s in scale.iter() {
                assert!((s - 1.0).abs() < 1e-14, "{:?}", kind);
            }
        }
    }

    #[test]
    fn test_kind_mismatch_is_shape_error() {
        let kind = DomainKind::Cube { dim: 2 };
        let instance = DomainInstance::reference(DomainKind::Ball { dim: 2 });
        let xi = arr2(&[[0.0, 0.0]]);
        let err = transform_batch(kind, &instance, xi.view()).unwrap_err();
        assert!(err.is_structural());
    }

    #[test]
    fn test_wrong_corner_count_is_shape_error() {
        let kind = DomainKind::Cube { dim: 3 };
        let instance = DomainInstance::Cube(arr2(&[[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]]));
        let xi = arr2(&[[0.0, 0.0, 0.0]]);
        assert!(transform_batch(kind, &instance, xi.view()).is_err());
    }

    #[test]
    fn test_validate_flags_zero_radius() {
        let kind = DomainKind::Ball { dim: 2 };
        let instance = DomainInstance::Ball {
            center: Array1::zeros(2),
            radius: 0.0,
        };
        let err = instance.validate(kind).unwrap_err();
        assert!(matches!(err, CubatureError::DegenerateDomainInstance { .. }));
        // But integration-path transforms still propagate the collapse.
        let xi = arr2(&[[1.0, 0.0]]);
        let (_, scale) = transform_batch(kind, &instance, xi.view()).unwrap();
        assert_eq!(scale[0], 0.0);
    }

    #[test]
    fn test_validate_flags_flat_simplex() {
        let kind = DomainKind::Simplex { dim: 2 };
        let instance = DomainInstance::Simplex(arr2(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]));
        assert!(instance.validate(kind).is_err());
    }
}
