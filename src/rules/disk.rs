//! Cubature over the unit disk.
//!
//! These are the `n = 2` members of the Hammer-Stroud ball families. The
//! original article misprints the 11-2 radius as `1/2`; the correct value is
//! `sqrt(1/2)` and that is what the general formula produces.

use crate::scheme::Scheme;
use crate::Result;

use super::ball;

/// Hammer-Stroud formula 11-2: 4 points at radius `sqrt(1/2)`, degree 3.
pub fn hammer_stroud_11_2() -> Result<Scheme> {
    ball::hammer_stroud_11n(2)
}

/// Hammer-Stroud formula 12-2: 9 points, degree 5.
pub fn hammer_stroud_12_2() -> Result<Scheme> {
    ball::hammer_stroud_12n(2)
}
