//! Multilinear and affine maps from polytope reference domains.
//!
//! The reference n-cube is the ±1 hyper-cube; a concrete instance is given
//! by its `2^dim` corner coordinates. Corners are ordered by the binary
//! expansion of the row index with axis 0 as the most significant bit, so
//! for `dim = 2` the rows are `(--), (-+), (+-), (++)`. [`cuboid`] builds
//! corner arrays in this order from per-axis limits.
//!
//! The reference simplex is the unit simplex spanned by the origin and the
//! canonical basis vectors; instances are affine images given by `dim + 1`
//! vertex rows. The reference pyramid has the square base ±1 at ζ = −1 and
//! the apex at ζ = +1; instances are the degenerate trilinear blend of four
//! base corners (in cyclic order) and the apex.

use ndarray::{Array1, Array2, ArrayView2};

/// Corner array of an axis-aligned box from per-axis `(lo, hi)` limits.
pub fn cuboid(limits: &[(f64, f64)]) -> Array2<f64> {
    let dim = limits.len();
    let n = 1usize << dim;
    let mut corners = Array2::zeros((n, dim));
    for r in 0..n {
        for (k, &(lo, hi)) in limits.iter().enumerate() {
            let high = (r >> (dim - 1 - k)) & 1 == 1;
            corners[(r, k)] = if high { hi } else { lo };
        }
    }
    corners
}

/// Per-axis multilinear basis factor for corner `r`, axis `m`.
#[inline]
fn cube_basis(r: usize, dim: usize, m: usize, xi_m: f64) -> f64 {
    if (r >> (dim - 1 - m)) & 1 == 1 {
        0.5 * (1.0 + xi_m)
    } else {
        0.5 * (1.0 - xi_m)
    }
}

/// Map reference points through the multilinear corner blend.
pub fn transform_cube(xi: ArrayView2<'_, f64>, corners: ArrayView2<'_, f64>) -> Array2<f64> {
    let (npts, dim) = xi.dim();
    let mut out = Array2::zeros((npts, dim));
    for p in 0..npts {
        for r in 0..corners.nrows() {
            let mut factor = 1.0;
            for m in 0..dim {
                factor *= cube_basis(r, dim, m, xi[(p, m)]);
            }
            for i in 0..dim {
                out[(p, i)] += factor * corners[(r, i)];
            }
        }
    }
    out
}

/// Jacobian determinant of the multilinear map, one value per reference
/// point. For non-affine instances (a general hexahedron) this varies
/// pointwise.
pub fn cube_detj(xi: ArrayView2<'_, f64>, corners: ArrayView2<'_, f64>) -> Array1<f64> {
    let (npts, dim) = xi.dim();
    let mut out = Array1::zeros(npts);
    for p in 0..npts {
        let mut jac = Array2::<f64>::zeros((dim, dim));
        for r in 0..corners.nrows() {
            for k in 0..dim {
                // Differentiate the k-th basis factor: d/dξ_k (1±ξ_k)/2 = ±1/2.
                let mut factor = 1.0;
                for m in 0..dim {
                    if m == k {
                        factor *= if (r >> (dim - 1 - m)) & 1 == 1 { 0.5 } else { -0.5 };
                    } else {
                        factor *= cube_basis(r, dim, m, xi[(p, m)]);
                    }
                }
                for i in 0..dim {
                    jac[(i, k)] += factor * corners[(r, i)];
                }
            }
        }
        out[p] = det_in_place(&mut jac);
    }
    out
}

/// Map reference points through the affine simplex blend
/// `x = v0 + Σ ξ_k (v_{k+1} - v0)`.
pub fn transform_simplex(xi: ArrayView2<'_, f64>, vertices: ArrayView2<'_, f64>) -> Array2<f64> {
    let (npts, dim) = xi.dim();
    let mut out = Array2::zeros((npts, dim));
    for p in 0..npts {
        for i in 0..dim {
            let mut x = vertices[(0, i)];
            for k in 0..dim {
                x += xi[(p, k)] * (vertices[(k + 1, i)] - vertices[(0, i)]);
            }
            out[(p, i)] = x;
        }
    }
    out
}

/// Constant Jacobian determinant of the affine simplex map.
pub fn simplex_detj(vertices: ArrayView2<'_, f64>) -> f64 {
    let dim = vertices.ncols();
    let mut jac = Array2::<f64>::zeros((dim, dim));
    for k in 0..dim {
        for i in 0..dim {
            jac[(i, k)] = vertices[(k + 1, i)] - vertices[(0, i)];
        }
    }
    det_in_place(&mut jac)
}

/// Shape functions of the degenerate trilinear pyramid blend: four base
/// corners in cyclic order, then the apex.
#[inline]
fn pyramid_basis(xi: f64, eta: f64, zeta: f64) -> [f64; 5] {
    [
        0.125 * (1.0 - xi) * (1.0 - eta) * (1.0 - zeta),
        0.125 * (1.0 + xi) * (1.0 - eta) * (1.0 - zeta),
        0.125 * (1.0 + xi) * (1.0 + eta) * (1.0 - zeta),
        0.125 * (1.0 - xi) * (1.0 + eta) * (1.0 - zeta),
        0.5 * (1.0 + zeta),
    ]
}

/// Map reference points through the pyramid blend.
pub fn transform_pyramid(xi: ArrayView2<'_, f64>, vertices: ArrayView2<'_, f64>) -> Array2<f64> {
    let npts = xi.nrows();
    let mut out = Array2::zeros((npts, 3));
    for p in 0..npts {
        let n = pyramid_basis(xi[(p, 0)], xi[(p, 1)], xi[(p, 2)]);
        for i in 0..3 {
            out[(p, i)] = (0..5).map(|c| n[c] * vertices[(c, i)]).sum();
        }
    }
    out
}

/// Jacobian determinant of the pyramid blend, one value per reference point.
pub fn pyramid_detj(xi: ArrayView2<'_, f64>, vertices: ArrayView2<'_, f64>) -> Array1<f64> {
    let npts = xi.nrows();
    let mut out = Array1::zeros(npts);
    for p in 0..npts {
        let (x, e, z) = (xi[(p, 0)], xi[(p, 1)], xi[(p, 2)]);
        let dxi = [
            -0.125 * (1.0 - e) * (1.0 - z),
            0.125 * (1.0 - e) * (1.0 - z),
            0.125 * (1.0 + e) * (1.0 - z),
            -0.125 * (1.0 + e) * (1.0 - z),
            0.0,
        ];
        let deta = [
            -0.125 * (1.0 - x) * (1.0 - z),
            -0.125 * (1.0 + x) * (1.0 - z),
            0.125 * (1.0 + x) * (1.0 - z),
            0.125 * (1.0 - x) * (1.0 - z),
            0.0,
        ];
        let dzeta = [
            -0.125 * (1.0 - x) * (1.0 - e),
            -0.125 * (1.0 + x) * (1.0 - e),
            -0.125 * (1.0 + x) * (1.0 + e),
            -0.125 * (1.0 - x) * (1.0 + e),
            0.5,
        ];

        let mut jac = [[0.0f64; 3]; 3];
        for c in 0..5 {
            for i in 0..3 {
                jac[i][0] += dxi[c] * vertices[(c, i)];
                jac[i][1] += deta[c] * vertices[(c, i)];
                jac[i][2] += dzeta[c] * vertices[(c, i)];
            }
        }
        out[p] = det3(&jac);
    }
    out
}

#[inline]
fn det3(j: &[[f64; 3]; 3]) -> f64 {
    j[0][0] * (j[1][1] * j[2][2] - j[1][2] * j[2][1])
        - j[0][1] * (j[1][0] * j[2][2] - j[1][2] * j[2][0])
        + j[0][2] * (j[1][0] * j[2][1] - j[1][1] * j[2][0])
}

/// Determinant by partial-pivot elimination; destroys the input matrix.
/// Sizes 1..3 use the elementary formulas.
pub(crate) fn det_in_place(a: &mut Array2<f64>) -> f64 {
    let n = a.nrows();
    match n {
        0 => 1.0,
        1 => a[(0, 0)],
        2 => a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)],
        3 => {
            let j = [
                [a[(0, 0)], a[(0, 1)], a[(0, 2)]],
                [a[(1, 0)], a[(1, 1)], a[(1, 2)]],
                [a[(2, 0)], a[(2, 1)], a[(2, 2)]],
            ];
            det3(&j)
        }
        _ => {
            let mut det = 1.0;
            for col in 0..n {
                let mut pivot = col;
                for r in col + 1..n {
                    if a[(r, col)].abs() > a[(pivot, col)].abs() {
                        pivot = r;
                    }
                }
                if a[(pivot, col)] == 0.0 {
                    return 0.0;
                }
                if pivot != col {
                    for c in 0..n {
                        let tmp = a[(col, c)];
                        a[(col, c)] = a[(pivot, c)];
                        a[(pivot, c)] = tmp;
                    }
                    det = -det;
                }
                det *= a[(col, col)];
                for r in col + 1..n {
                    let m = a[(r, col)] / a[(col, col)];
                    for c in col..n {
                        a[(r, c)] -= m * a[(col, c)];
                    }
                }
            }
            det
        }
    }
}
