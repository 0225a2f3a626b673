//! Cubature over the unit simplex.
//!
//! The reference simplex has vertices at the origin and the unit vectors, so
//! its measure is `1 / dim!` and weights sum to that value.

use ndarray::{arr2, Array2};

use crate::domain::DomainKind;
use crate::exact::Exact;
use crate::scheme::Scheme;
use crate::Result;

/// The centroid rule: one point, degree 1, any dimension.
pub fn centroid(dim: usize) -> Result<Scheme> {
    assert!(dim >= 1);
    let d = dim as i64;
    let volume = Exact::ratio(1, (1..=d).product());
    let point = Array2::from_elem((1, dim), Exact::ratio(1, d + 1));
    Scheme::from_exact_orbits(
        format!("Centroid ({})", dim),
        DomainKind::Simplex { dim },
        1,
        &[(volume, point)],
    )
}

/// Hammer-Marlowe-Stroud 3-point rule on the triangle, degree 2.
pub fn triangle_3point() -> Result<Scheme> {
    let a = Exact::ratio(1, 6);
    let b = Exact::ratio(2, 3);
    let w = Exact::ratio(1, 6);
    let points = arr2(&[[a, a], [b, a], [a, b]]);
    Scheme::from_exact_orbits(
        "Hammer-Marlowe-Stroud (triangle)",
        DomainKind::Simplex { dim: 2 },
        2,
        &[(w, points)],
    )
}

/// Hammer-Marlowe-Stroud 4-point rule on the tetrahedron, degree 2.
///
/// The barycentric positions `(5 ∓ √5)/20` mix a rational and a surd, so the
/// rule is floating-point only.
pub fn tetrahedron_4point() -> Result<Scheme> {
    let sqrt5 = 5.0f64.sqrt();
    let a = (5.0 - sqrt5) / 20.0;
    let b = (5.0 + 3.0 * sqrt5) / 20.0;
    let w = 1.0 / 24.0;
    let points = arr2(&[[a, a, a], [b, a, a], [a, b, a], [a, a, b]]);
    Scheme::from_orbits(
        "Hammer-Marlowe-Stroud (tetrahedron, 4 points)",
        DomainKind::Simplex { dim: 3 },
        2,
        &[(w, points)],
    )
}

/// 5-point rule on the tetrahedron, degree 3, with a negative center weight.
pub fn tetrahedron_5point() -> Result<Scheme> {
    let q = Exact::ratio(1, 4);
    let a = Exact::ratio(1, 6);
    let b = Exact::ratio(1, 2);
    let center = Array2::from_elem((1, 3), q);
    let satellites = arr2(&[[a, a, a], [b, a, a], [a, b, a], [a, a, b]]);
    Scheme::from_exact_orbits(
        "Tetrahedron 5-point",
        DomainKind::Simplex { dim: 3 },
        3,
        &[
            (Exact::ratio(-2, 15), center),
            (Exact::ratio(3, 40), satellites),
        ],
    )
}
