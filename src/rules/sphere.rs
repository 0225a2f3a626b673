//! Cubature on the surface of the unit sphere in three dimensions.
//!
//! Weights carry the unit-sphere area factor `4π`, so they sum to the
//! reference surface area; all sphere schemes are floating-point only.

use std::f64::consts::PI;

use crate::domain::DomainKind;
use crate::orbits::{fsd, pm, pm_array, pm_array0};
use crate::scheme::Scheme;
use crate::Result;

const DOMAIN: DomainKind = DomainKind::Sphere { dim: 3 };
const AREA: f64 = 4.0 * PI;

/// Albrecht-Collatz formula 1: 12 points on icosahedral axes, degree 5.
pub fn albrecht_collatz_1() -> Result<Scheme> {
    let r = ((5.0 + 5.0f64.sqrt()) / 10.0).sqrt();
    let s = ((5.0 - 5.0f64.sqrt()) / 10.0).sqrt();
    let w = AREA / 12.0;
    Scheme::from_orbits(
        "Albrecht-Collatz 1",
        DOMAIN,
        5,
        &[
            (w, pm_array0(3, &[r, s], &[0, 1])?),
            (w, pm_array0(3, &[r, s], &[1, 2])?),
            (w, pm_array0(3, &[r, s], &[2, 0])?),
        ],
    )
}

/// Albrecht-Collatz formula 2: octahedron vertices and cube corners,
/// 14 points, degree 5.
pub fn albrecht_collatz_2() -> Result<Scheme> {
    let s = (1.0f64 / 3.0).sqrt();
    Scheme::from_orbits(
        "Albrecht-Collatz 2",
        DOMAIN,
        5,
        &[
            (AREA * 8.0 / 120.0, fsd(3, &[(1.0, 1)])?),
            (AREA * 9.0 / 120.0, pm(3, s)),
        ],
    )
}

/// Albrecht-Collatz formula 3: octahedron vertices and edge midpoints,
/// 18 points, degree 5.
pub fn albrecht_collatz_3() -> Result<Scheme> {
    let s = (1.0f64 / 2.0).sqrt();
    Scheme::from_orbits(
        "Albrecht-Collatz 3",
        DOMAIN,
        5,
        &[
            (AREA / 30.0, fsd(3, &[(1.0, 1)])?),
            (AREA * 2.0 / 30.0, fsd(3, &[(s, 2)])?),
        ],
    )
}

/// Albrecht-Collatz formula 4: 20 points of equal weight, degree 5.
pub fn albrecht_collatz_4() -> Result<Scheme> {
    let r = ((3.0 + 5.0f64.sqrt()) / 6.0).sqrt();
    let s = ((3.0 - 5.0f64.sqrt()) / 6.0).sqrt();
    let t = (1.0f64 / 3.0).sqrt();
    let w = AREA / 20.0;
    Scheme::from_orbits(
        "Albrecht-Collatz 4",
        DOMAIN,
        5,
        &[
            (w, pm_array0(3, &[r, s], &[0, 1])?),
            (w, pm_array0(3, &[r, s], &[1, 2])?),
            (w, pm_array0(3, &[r, s], &[2, 0])?),
            (w, pm(3, t)),
        ],
    )
}

/// Albrecht-Collatz formula 5: vertices, edge midpoints and corners of the
/// octahedron/cube pair, 26 points, degree 7.
pub fn albrecht_collatz_5() -> Result<Scheme> {
    let s = (1.0f64 / 2.0).sqrt();
    let t = (1.0f64 / 3.0).sqrt();
    Scheme::from_orbits(
        "Albrecht-Collatz 5",
        DOMAIN,
        7,
        &[
            (AREA * 40.0 / 840.0, fsd(3, &[(1.0, 1)])?),
            (AREA * 32.0 / 840.0, fsd(3, &[(s, 2)])?),
            (AREA * 27.0 / 840.0, pm(3, t)),
        ],
    )
}

/// McLaren's second formula: icosahedral arrangement of 30 equal-weight
/// points, degree 5.
pub fn mclaren_02() -> Result<Scheme> {
    let r = 0.5;
    let s = (5.0f64.sqrt() + 1.0) / 4.0;
    let t = (5.0f64.sqrt() - 1.0) / 4.0;
    let w = AREA / 30.0;
    Scheme::from_orbits(
        "McLaren 2",
        DOMAIN,
        5,
        &[
            (w, fsd(3, &[(1.0, 1)])?),
            (w, pm_array(&[r, s, t])),
            (w, pm_array(&[t, r, s])),
            (w, pm_array(&[s, t, r])),
        ],
    )
}
