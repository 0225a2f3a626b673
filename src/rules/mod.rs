//! Published cubature formulas, grouped by reference domain.
//!
//! Each constructor returns an immutable [`Scheme`](crate::Scheme) carrying
//! the formula's literature name and exactness degree. Formulas whose
//! coefficients are rationals or single square roots are built exactly and
//! expose their exact data; formulas with nested radicals or transcendental
//! normalization factors (π) are built in floating point only.

pub mod ball;
pub mod disk;
pub mod hexahedron;
pub mod ncube;
pub mod pyramid;
pub mod quadrilateral;
pub mod segment;
pub mod simplex;
pub mod sphere;
