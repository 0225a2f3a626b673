//! Cubature over the n-dimensional unit ball.
//!
//! Weights carry the unit-ball volume factor, so they sum to `V_n`. The
//! factor is transcendental, which makes these schemes floating-point only.

use crate::domain::{unit_ball_volume, DomainKind};
use crate::orbits::{fsd, z};
use crate::scheme::Scheme;
use crate::Result;

/// Hammer-Stroud formula 11-n: `2n` points on a single radius, degree 3.
pub fn hammer_stroud_11n(n: usize) -> Result<Scheme> {
    assert!(n >= 2);
    let nf = n as f64;
    let r = (nf / (nf + 2.0)).sqrt();
    let w = unit_ball_volume(n) / (2.0 * nf);
    Scheme::from_orbits(
        format!("Hammer-Stroud 11-{}", n),
        DomainKind::Ball { dim: n },
        3,
        &[(w, fsd(n, &[(r, 1)])?)],
    )
}

/// Hammer-Stroud formula 12-n: `2n^2 + 1` points, degree 5.
pub fn hammer_stroud_12n(n: usize) -> Result<Scheme> {
    assert!(n >= 2);
    let nf = n as f64;
    let r = (3.0 / (nf + 4.0)).sqrt();
    let b1 = (4.0 - nf) * (nf + 4.0) / (18.0 * (nf + 2.0));
    let b2 = (nf + 4.0) / (36.0 * (nf + 2.0));
    let b0 = 1.0 - 2.0 * nf * b1 - 2.0 * nf * (nf - 1.0) * b2;
    let volume = unit_ball_volume(n);
    Scheme::from_orbits(
        format!("Hammer-Stroud 12-{}", n),
        DomainKind::Ball { dim: n },
        5,
        &[
            (b0 * volume, z(n)),
            (b1 * volume, fsd(n, &[(r, 1)])?),
            (b2 * volume, fsd(n, &[(r, 2)])?),
        ],
    )
}
