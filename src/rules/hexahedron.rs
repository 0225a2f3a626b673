//! Cubature over the reference hexahedron [-1, 1]^3.

use ndarray::Array2;
use num_traits::Zero;

use crate::domain::DomainKind;
use crate::exact::Exact;
use crate::scheme::Scheme;
use crate::Result;

use super::segment;

const DOMAIN: DomainKind = DomainKind::Cube { dim: 3 };

/// Tensor product of the `n`-point Gauss-Legendre segment rule: `n^3` points,
/// degree `2n - 1`.
///
/// Carries exact coefficients whenever the underlying segment rule does.
pub fn product_gauss_legendre(n: usize) -> Result<Scheme> {
    let line = segment::gauss_legendre(n)?;
    let name = format!("Product Gauss-Legendre {}", n);
    let degree = line.degree();

    if line.has_exact() {
        let pts = line.exact_points()?;
        let wts = line.exact_weights()?;
        let mut data: Vec<(Exact, Array2<Exact>)> = Vec::with_capacity(n * n * n);
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let mut row = Array2::from_elem((1, 3), Exact::zero());
                    row[(0, 0)] = pts[(i, 0)];
                    row[(0, 1)] = pts[(j, 0)];
                    row[(0, 2)] = pts[(k, 0)];
                    data.push((wts[i] * wts[j] * wts[k], row));
                }
            }
        }
        return Scheme::from_exact_orbits(name, DOMAIN, degree, &data);
    }

    let pts = line.points();
    let wts = line.weights();
    let mut data: Vec<(f64, Array2<f64>)> = Vec::with_capacity(n * n * n);
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                let row = ndarray::arr2(&[[pts[(i, 0)], pts[(j, 0)], pts[(k, 0)]]]);
                data.push((wts[i] * wts[j] * wts[k], row));
            }
        }
    }
    Scheme::from_orbits(name, DOMAIN, degree, &data)
}
