//! Cubature over the reference square [-1, 1]^2.
//!
//! The general n-cube formulas in [`super::ncube`] apply here as well; this
//! module holds formulas published specifically for the square.

use crate::domain::DomainKind;
use crate::exact::Exact;
use crate::orbits::{fsd, pm};
use crate::scheme::Scheme;
use crate::Result;

const DOMAIN: DomainKind = DomainKind::Cube { dim: 2 };

/// Burnside's 8-point formula, degree 5.
pub fn burnside() -> Result<Scheme> {
    let r = Exact::sqrt_ratio(7, 15);
    let s = Exact::sqrt_ratio(7, 9);
    Scheme::from_exact_orbits(
        "Burnside",
        DOMAIN,
        5,
        &[
            (Exact::ratio(40, 49), fsd(2, &[(r, 1)])?),
            (Exact::ratio(9, 49), pm(2, s)),
        ],
    )
}
