//! Cubature over the n-dimensional cube [-1, 1]^n.
//!
//! Weights are stated on the reference cube, so they sum to its volume `2^n`.

use ndarray::Array2;
use num_traits::One;

use crate::domain::DomainKind;
use crate::exact::Exact;
use crate::orbits::{diag, fs11, fsd, pm, z};
use crate::scheme::Scheme;
use crate::Result;

fn cube(n: usize) -> DomainKind {
    DomainKind::Cube { dim: n }
}

fn two_pow(n: usize) -> i64 {
    1i64 << n
}

/// Hammer-Stroud formula 1-n: `2n` points, degree 3.
pub fn hammer_stroud_1n(n: usize) -> Result<Scheme> {
    assert!(n >= 1);
    let r = Exact::sqrt_ratio(n as i64, 3);
    let w = Exact::ratio(two_pow(n), 2 * n as i64);
    Scheme::from_exact_orbits(
        format!("Hammer-Stroud 1-{}", n),
        cube(n),
        3,
        &[(w, fsd(n, &[(r, 1)])?)],
    )
}

/// Hammer-Stroud formula 2-n: `2n^2 + 1` points, degree 5.
pub fn hammer_stroud_2n(n: usize) -> Result<Scheme> {
    assert!(n >= 2);
    let n_i = n as i64;
    let vol = two_pow(n);
    let r = Exact::sqrt_ratio(3, 5);
    let w0 = Exact::ratio(vol * (25 * n_i * n_i - 115 * n_i + 162), 162);
    let w1 = Exact::ratio(vol * (70 - 25 * n_i), 162);
    let w2 = Exact::ratio(vol * 25, 324);
    Scheme::from_exact_orbits(
        format!("Hammer-Stroud 2-{}", n),
        cube(n),
        5,
        &[
            (w0, z(n)),
            (w1, fsd(n, &[(r, 1)])?),
            (w2, fsd(n, &[(r, 2)])?),
        ],
    )
}

/// Stroud's 1966 formula a: `2n + 2^n` points, degree 5.
pub fn stroud_1966_a(n: usize) -> Result<Scheme> {
    assert!(n >= 2);
    let n_i = n as i64;
    let r = Exact::sqrt_ratio(5 * n_i + 4, 30);
    let s = Exact::sqrt_ratio(5 * n_i + 4, 15 * n_i - 12);
    let w1 = Exact::ratio(two_pow(n) * 40, (5 * n_i + 4) * (5 * n_i + 4));
    let w2 = Exact::ratio((5 * n_i - 4) * (5 * n_i - 4), (5 * n_i + 4) * (5 * n_i + 4));
    Scheme::from_exact_orbits(
        format!("Stroud 1966a ({})", n),
        cube(n),
        5,
        &[(w1, fsd(n, &[(r, 1)])?), (w2, pm(n, s))],
    )
}

/// Stroud's 1966 formula c: `n 2^n + 1` points, degree 5.
///
/// The radii contain nested radicals, so this formula has no exact form.
pub fn stroud_1966_c(n: usize) -> Result<Scheme> {
    assert!(n >= 2);
    let nf = n as f64;
    let root = (5.0 * nf + 4.0).sqrt();
    let r = ((5.0 * nf + 4.0 + 2.0 * (nf - 1.0) * root) / (15.0 * nf)).sqrt();
    let s = ((5.0 * nf + 4.0 - 2.0 * root) / (15.0 * nf)).sqrt();
    let w0 = two_pow(n) as f64 * 4.0 / (5.0 * nf + 4.0);
    let w1 = 5.0 / (5.0 * nf + 4.0);
    Scheme::from_orbits(
        format!("Stroud 1966c ({})", n),
        cube(n),
        5,
        &[(w0, z(n)), (w1, fs11(n, r, s))],
    )
}

/// Stroud's 1966 formula d: `(n + 1) 2^n` points of equal weight, degree 5.
///
/// Defined for `n >= 3`; the inner radius is imaginary for `n = 2`.
pub fn stroud_1966_d(n: usize) -> Result<Scheme> {
    assert!(n >= 3);
    let nf = n as f64;
    let sqrt5 = 5.0f64.sqrt();
    let root = (5.0 * nf + 5.0).sqrt();
    let r = ((5.0 * nf - 2.0 * sqrt5 + 2.0 * (nf - 1.0) * root) / (15.0 * nf)).sqrt();
    let s = ((5.0 * nf - 2.0 * sqrt5 - 2.0 * root) / (15.0 * nf)).sqrt();
    let t = ((5.0 + 2.0 * sqrt5) / 15.0).sqrt();
    let w = 1.0 / (nf + 1.0);
    Scheme::from_orbits(
        format!("Stroud 1966d ({})", n),
        cube(n),
        5,
        &[(w, fs11(n, r, s)), (w, pm(n, t))],
    )
}

/// Thacher's composite formula: `2n + 1` points, degree 2.
///
/// The off-center points carry signed weights `±(sqrt(3)/6) 2^n`.
pub fn thacher(n: usize) -> Result<Scheme> {
    assert!(n >= 1);
    let r = Exact::sqrt_ratio(1, 12);
    let vol = Exact::from(two_pow(n));
    let two_r = r + r;
    let center = Array2::from_elem((1, n), two_r);
    Scheme::from_exact_orbits(
        format!("Thacher ({})", n),
        cube(n),
        2,
        &[
            (vol, center),
            (vol * r, diag(n, -Exact::one(), r)),
            (-(vol * r), diag(n, Exact::one(), r)),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainInstance;
    use ndarray::ArrayView2;

    fn monomial(x: ArrayView2<'_, f64>, exponents: &[u32]) -> ndarray::Array1<f64> {
        x.outer_iter()
            .map(|row| {
                row.iter()
                    .zip(exponents)
                    .map(|(&v, &e)| v.powi(e as i32))
                    .product()
            })
            .collect()
    }

    /// Integral of a monomial over [-1, 1]^n.
    fn reference_integral(exponents: &[u32]) -> f64 {
        exponents
            .iter()
            .map(|&e| if e % 2 == 0 { 2.0 / (e + 1) as f64 } else { 0.0 })
            .product()
    }

    fn exponent_tuples(dim: usize, max_total: u32) -> Vec<Vec<u32>> {
        let mut out = vec![vec![]];
        for _ in 0..dim {
            let mut next = Vec::new();
            for t in &out {
                let used: u32 = t.iter().sum();
                for e in 0..=(max_total - used) {
                    let mut t2 = t.clone();
                    t2.push(e);
                    next.push(t2);
                }
            }
            out = next;
        }
        out
    }

    fn assert_degree(scheme: &Scheme, dim: usize) {
        let instance = DomainInstance::reference(scheme.domain());
        for exponents in exponent_tuples(dim, scheme.degree()) {
            let got = scheme
                .integrate(|x| monomial(x, &exponents), &instance)
                .unwrap();
            let want = reference_integral(&exponents);
            assert!(
                (got - want).abs() < 1e-12,
                "{} on x^{:?}: {} vs {}",
                scheme.name(),
                exponents,
                got,
                want
            );
        }
    }

    #[test]
    fn test_hammer_stroud_1n() {
        for n in 1..=4 {
            let scheme = hammer_stroud_1n(n).unwrap();
            assert_eq!(scheme.len(), 2 * n);
            assert!(scheme.has_exact());
            assert_degree(&scheme, n);
        }
    }

    #[test]
    fn test_hammer_stroud_2n() {
        for n in 2..=4 {
            let scheme = hammer_stroud_2n(n).unwrap();
            assert_eq!(scheme.len(), 2 * n * n + 1);
            assert_degree(&scheme, n);
        }
    }

    #[test]
    fn test_stroud_1966_a() {
        for n in 2..=4 {
            let scheme = stroud_1966_a(n).unwrap();
            assert_eq!(scheme.len(), 2 * n + (1 << n));
            assert_degree(&scheme, n);
        }
    }

    #[test]
    fn test_stroud_1966_c() {
        for n in 2..=4 {
            let scheme = stroud_1966_c(n).unwrap();
            assert_eq!(scheme.len(), n * (1 << n) + 1);
            assert!(!scheme.has_exact());
            assert_degree(&scheme, n);
        }
    }

    #[test]
    fn test_stroud_1966_d() {
        for n in 3..=4 {
            let scheme = stroud_1966_d(n).unwrap();
            assert_eq!(scheme.len(), (n + 1) * (1 << n));
            assert_degree(&scheme, n);
        }
    }

    #[test]
    fn test_thacher() {
        for n in 1..=4 {
            let scheme = thacher(n).unwrap();
            assert_eq!(scheme.len(), 2 * n + 1);
            assert!(scheme.has_exact());
            assert_degree(&scheme, n);
        }
    }

    #[test]
    fn test_thacher_has_negative_weights() {
        let scheme = thacher(3).unwrap();
        assert!(scheme.weights().iter().any(|&w| w < 0.0));
        let total: f64 = scheme.weights().sum();
        assert!((total - 8.0).abs() < 1e-13);
    }

    #[test]
    fn test_weights_sum_to_volume() {
        for scheme in [
            hammer_stroud_2n(3).unwrap(),
            stroud_1966_a(3).unwrap(),
            stroud_1966_c(3).unwrap(),
            stroud_1966_d(3).unwrap(),
        ] {
            let total: f64 = scheme.weights().sum();
            assert!((total - 8.0).abs() < 1e-12, "{}", scheme.name());
        }
    }
}
