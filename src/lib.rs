//! Numerical cubature over standard reference domains.
//!
//! The crate builds immutable [`Scheme`] objects — named point/weight sets of
//! a stated polynomial degree — from symmetry-orbit generators, and evaluates
//! them over concrete realizations of their reference domain (arbitrary
//! hexahedra, simplices, pyramids, balls and spheres).
//!
//! # Example
//!
//! ```
//! use ndarray::Array1;
//! use math_cubature::{rules, DomainInstance, DomainKind};
//!
//! let scheme = rules::ncube::hammer_stroud_2n(2).unwrap();
//! let square = DomainInstance::reference(DomainKind::Cube { dim: 2 });
//! // Integrate x^2 over the reference square: 4/3.
//! let v = scheme
//!     .integrate(|x| x.column(0).mapv(|t| t * t), &square)
//!     .unwrap();
//! assert!((v - 4.0 / 3.0).abs() < 1e-13);
//! ```

pub mod assemble;
pub mod domain;
pub mod error;
pub mod exact;
pub mod orbits;
pub mod rules;
pub mod scheme;

pub use domain::{DomainInstance, DomainKind};
pub use error::{CubatureError, Result};
pub use exact::Exact;
pub use scheme::Scheme;

/// Returns the version of the crate.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
