//! Quadrature on the reference segment [-1, 1].

use num_traits::One;

use crate::domain::DomainKind;
use crate::exact::Exact;
use crate::orbits::{pm, z};
use crate::scheme::Scheme;
use crate::Result;

const DOMAIN: DomainKind = DomainKind::Cube { dim: 1 };

/// The midpoint rule: one point, degree 1.
pub fn midpoint() -> Result<Scheme> {
    Scheme::from_exact_orbits("midpoint", DOMAIN, 1, &[(Exact::from(2), z(1))])
}

/// The trapezoidal rule: both endpoints, degree 1.
pub fn trapezoidal() -> Result<Scheme> {
    Scheme::from_exact_orbits(
        "trapezoidal",
        DOMAIN,
        1,
        &[(Exact::one(), pm(1, Exact::one()))],
    )
}

/// Gauss-Legendre quadrature with `n` points, exact to degree `2n - 1`.
///
/// Closed forms are tabulated for `n <= 5`; orders 1 through 3 carry exact
/// coefficients, orders 4 and 5 have nested radicals and are floating-point
/// only.
///
/// Panics for `n == 0` or `n > 5`.
pub fn gauss_legendre(n: usize) -> Result<Scheme> {
    let name = format!("Gauss-Legendre {}", n);
    let degree = 2 * n as u32 - 1;
    match n {
        1 => Scheme::from_exact_orbits(name, DOMAIN, degree, &[(Exact::from(2), z(1))]),
        2 => Scheme::from_exact_orbits(
            name,
            DOMAIN,
            degree,
            &[(Exact::one(), pm(1, Exact::sqrt_ratio(1, 3)))],
        ),
        3 => Scheme::from_exact_orbits(
            name,
            DOMAIN,
            degree,
            &[
                (Exact::ratio(8, 9), z(1)),
                (Exact::ratio(5, 9), pm(1, Exact::sqrt_ratio(3, 5))),
            ],
        ),
        4 => {
            let inner = ((3.0 - 2.0 * (6.0f64 / 5.0).sqrt()) / 7.0).sqrt();
            let outer = ((3.0 + 2.0 * (6.0f64 / 5.0).sqrt()) / 7.0).sqrt();
            let w_inner = (18.0 + 30.0f64.sqrt()) / 36.0;
            let w_outer = (18.0 - 30.0f64.sqrt()) / 36.0;
            Scheme::from_orbits(
                name,
                DOMAIN,
                degree,
                &[(w_inner, pm(1, inner)), (w_outer, pm(1, outer))],
            )
        }
        5 => {
            let inner = (5.0 - 2.0 * (10.0f64 / 7.0).sqrt()).sqrt() / 3.0;
            let outer = (5.0 + 2.0 * (10.0f64 / 7.0).sqrt()).sqrt() / 3.0;
            let w_inner = (322.0 + 13.0 * 70.0f64.sqrt()) / 900.0;
            let w_outer = (322.0 - 13.0 * 70.0f64.sqrt()) / 900.0;
            Scheme::from_orbits(
                name,
                DOMAIN,
                degree,
                &[
                    (128.0 / 225.0, z(1)),
                    (w_inner, pm(1, inner)),
                    (w_outer, pm(1, outer)),
                ],
            )
        }
        _ => panic!("unsupported Gauss-Legendre order {}", n),
    }
}

/// Simpson's rule: endpoints and midpoint, degree 3.
pub fn simpson() -> Result<Scheme> {
    Scheme::from_exact_orbits(
        "Simpson",
        DOMAIN,
        3,
        &[
            (Exact::ratio(1, 3), pm(1, Exact::one())),
            (Exact::ratio(4, 3), z(1)),
        ],
    )
}
