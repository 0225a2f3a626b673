//! Symmetry-orbit point generators.
//!
//! Each generator expands a handful of scalar parameters into the full set of
//! points obtainable under a named symmetry group (sign flips, axis
//! placements, cyclic rotations). Generators are purely combinatorial: they
//! clone and negate coefficients but never perform arithmetic on them, so
//! exact inputs stay exact. Output order is deterministic: placements are
//! enumerated lexicographically and sign patterns in counting order with the
//! last placed coordinate varying fastest.
//!
//! The generator names (`z`, `fsd`, `pm`, ...) are the ones established in
//! the cubature literature tooling and are kept for recognizability.

use ndarray::Array2;
use num_traits::Zero;

use crate::error::{CubatureError, Result};

/// Scalar bound shared by all generators: f64 or [`crate::exact::Exact`].
pub trait OrbitScalar: Clone + Zero + std::ops::Neg<Output = Self> + PartialEq {}

impl<C> OrbitScalar for C where C: Clone + Zero + std::ops::Neg<Output = C> + PartialEq {}

/// The origin orbit: a single zero vector.
pub fn z<C: OrbitScalar>(dim: usize) -> Array2<C> {
    Array2::from_elem((1, dim), C::zero())
}

/// Fully symmetric orbit: every assignment of the given magnitudes to
/// distinct axis subsets, remaining axes zero, with all sign flips of the
/// nonzero placed coordinates.
///
/// `groups` is a list of `(value, multiplicity)` pairs; each value is placed
/// on `multiplicity` axes. Axis subsets are chosen as combinations, not
/// permutations, and placements that coincide because magnitudes repeat are
/// collapsed, so `fsd(n, [(r, 1), (r, 1)])` equals `fsd(n, [(r, 2)])`.
///
/// With all magnitudes distinct and `k` placed axes in total, the orbit has
/// `C(dim, m_1) * C(dim - m_1, m_2) * ... * 2^k` rows.
pub fn fsd<C: OrbitScalar>(dim: usize, groups: &[(C, usize)]) -> Result<Array2<C>> {
    let placed: usize = groups.iter().map(|(_, m)| m).sum();
    if placed > dim {
        return Err(CubatureError::InvalidMultiplicity { placed, dim });
    }

    let mut placements: Vec<Vec<C>> = Vec::new();
    let free: Vec<usize> = (0..dim).collect();
    place_groups(groups, &free, &vec![C::zero(); dim], &mut placements);

    let mut rows = Vec::new();
    for base in &placements {
        let flip: Vec<usize> = (0..dim).filter(|&j| !base[j].is_zero()).collect();
        rows.extend(sign_expand(base, &flip));
    }
    Ok(rows_to_array(dim, rows))
}

/// All `2^dim` sign combinations of the constant vector `[value; dim]`.
pub fn pm<C: OrbitScalar>(dim: usize, value: C) -> Array2<C> {
    pm_array(&vec![value; dim])
}

/// All sign combinations of a fixed vector; `2^len` rows.
pub fn pm_array<C: OrbitScalar>(values: &[C]) -> Array2<C> {
    let flip: Vec<usize> = (0..values.len()).collect();
    rows_to_array(values.len(), sign_expand(values, &flip))
}

/// Values placed at explicit axis positions, remaining axes zero, with sign
/// flips over the placed values only; `2^len` rows.
pub fn pm_array0<C: OrbitScalar>(
    dim: usize,
    values: &[C],
    positions: &[usize],
) -> Result<Array2<C>> {
    if values.len() != positions.len() {
        return Err(CubatureError::shape(
            "pm_array0",
            format!("{} positions", values.len()),
            format!("{} positions", positions.len()),
        ));
    }
    let mut seen = vec![false; dim];
    for &p in positions {
        if p >= dim || seen[p] {
            return Err(CubatureError::InvalidMultiplicity {
                placed: positions.len(),
                dim,
            });
        }
        seen[p] = true;
    }

    let mut base = vec![C::zero(); dim];
    for (v, &p) in values.iter().zip(positions) {
        base[p] = v.clone();
    }
    Ok(rows_to_array(dim, sign_expand(&base, positions)))
}

/// All cyclic placements of `values` across the axes combined with all sign
/// flips of the placed values; `dim * 2^len` rows. Used by 3-D formulas with
/// two distinct radii.
pub fn pm_roll<C: OrbitScalar>(dim: usize, values: &[C]) -> Result<Array2<C>> {
    let k = values.len();
    if k == 0 || k > dim {
        return Err(CubatureError::InvalidMultiplicity { placed: k, dim });
    }

    let mut rows = Vec::new();
    for shift in 0..dim {
        let mut base = vec![C::zero(); dim];
        let mut flip = Vec::with_capacity(k);
        for (j, v) in values.iter().enumerate() {
            let axis = (j + shift) % dim;
            base[axis] = v.clone();
            flip.push(axis);
        }
        rows.extend(sign_expand(&base, &flip));
    }
    Ok(rows_to_array(dim, rows))
}

/// `r` roving over each axis in turn, `s` on all other axes, with all sign
/// combinations; `dim * 2^dim` rows.
pub fn fs11<C: OrbitScalar>(dim: usize, r: C, s: C) -> Array2<C> {
    let flip: Vec<usize> = (0..dim).collect();
    let mut rows = Vec::new();
    for i in 0..dim {
        let mut base = vec![s.clone(); dim];
        base[i] = r.clone();
        rows.extend(sign_expand(&base, &flip));
    }
    rows_to_array(dim, rows)
}

/// `a` roving over the diagonal, `b` on all other axes, no sign flips;
/// `dim` rows.
pub fn diag<C: OrbitScalar>(dim: usize, a: C, b: C) -> Array2<C> {
    let mut rows = Vec::with_capacity(dim);
    for i in 0..dim {
        let mut row = vec![b.clone(); dim];
        row[i] = a.clone();
        rows.push(row);
    }
    rows_to_array(dim, rows)
}

/// Recursively assign each group's value to a combination of the free axes,
/// collapsing duplicate placements.
fn place_groups<C: OrbitScalar>(
    groups: &[(C, usize)],
    free: &[usize],
    current: &[C],
    out: &mut Vec<Vec<C>>,
) {
    if groups.is_empty() {
        let row = current.to_vec();
        if !out.contains(&row) {
            out.push(row);
        }
        return;
    }
    let (value, mult) = &groups[0];
    let rest = &groups[1..];
    for combo in combinations(free, *mult) {
        let mut next = current.to_vec();
        for &axis in &combo {
            next[axis] = value.clone();
        }
        let remaining: Vec<usize> = free.iter().copied().filter(|a| !combo.contains(a)).collect();
        place_groups(rest, &remaining, &next, out);
    }
}

/// All k-element combinations of `pool`, in lexicographic order.
fn combinations(pool: &[usize], k: usize) -> Vec<Vec<usize>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if pool.len() < k {
        return Vec::new();
    }
    let head = pool[0];
    let mut out = Vec::new();
    for mut tail in combinations(&pool[1..], k - 1) {
        let mut combo = Vec::with_capacity(k);
        combo.push(head);
        combo.append(&mut tail);
        out.push(combo);
    }
    out.extend(combinations(&pool[1..], k));
    out
}

/// Expand one base row into all sign patterns over the coordinates listed in
/// `flip`. The last listed coordinate varies fastest.
fn sign_expand<C: OrbitScalar>(base: &[C], flip: &[usize]) -> Vec<Vec<C>> {
    let k = flip.len();
    let mut rows = Vec::with_capacity(1 << k);
    for mask in 0..(1usize << k) {
        let mut row = base.to_vec();
        for (j, &axis) in flip.iter().enumerate() {
            if (mask >> (k - 1 - j)) & 1 == 1 {
                row[axis] = -row[axis].clone();
            }
        }
        rows.push(row);
    }
    rows
}

fn rows_to_array<C: OrbitScalar>(dim: usize, rows: Vec<Vec<C>>) -> Array2<C> {
    let mut out = Array2::from_elem((rows.len(), dim), C::zero());
    for (i, row) in rows.into_iter().enumerate() {
        for (j, v) in row.into_iter().enumerate() {
            out[(i, j)] = v;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::Exact;

    #[test]
    fn test_z_is_single_origin() {
        let pts: Array2<f64> = z(4);
        assert_eq!(pts.dim(), (1, 4));
        assert!(pts.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_fsd_single_axis_count() {
        // One nonzero coordinate in 3-D: 3 placements x 2 signs = 6 points.
        let pts = fsd(3, &[(2.0, 1)]).unwrap();
        assert_eq!(pts.nrows(), 6);
        for row in pts.outer_iter() {
            let nonzero = row.iter().filter(|&&v| v != 0.0).count();
            assert_eq!(nonzero, 1);
        }
    }

    #[test]
    fn test_fsd_pair_count() {
        // Two placed axes in 3-D: C(3,2) * 2^2 = 12 points.
        let pts = fsd(3, &[(0.5, 2)]).unwrap();
        assert_eq!(pts.nrows(), 12);
    }

    #[test]
    fn test_fsd_mixed_groups_count() {
        // C(4,1) * C(3,2) * 2^3 = 96 points.
        let pts = fsd(4, &[(1.0, 1), (2.0, 2)]).unwrap();
        assert_eq!(pts.nrows(), 96);
    }

    #[test]
    fn test_fsd_equal_values_collapse() {
        let split = fsd(3, &[(0.5, 1), (0.5, 1)]).unwrap();
        let merged = fsd(3, &[(0.5, 2)]).unwrap();
        assert_eq!(split, merged);
    }

    #[test]
    fn test_fsd_rejects_overfull_placement() {
        let err = fsd(2, &[(1.0, 3)]).unwrap_err();
        assert!(matches!(
            err,
            CubatureError::InvalidMultiplicity { placed: 3, dim: 2 }
        ));
    }

    #[test]
    fn test_pm_count_and_first_row() {
        let pts = pm(3, 1.5);
        assert_eq!(pts.nrows(), 8);
        // First row is the all-plus pattern.
        assert_eq!(pts.row(0).to_vec(), vec![1.5, 1.5, 1.5]);
        // Last row is the all-minus pattern.
        assert_eq!(pts.row(7).to_vec(), vec![-1.5, -1.5, -1.5]);
    }

    #[test]
    fn test_pm_array0_places_and_flips() {
        let pts = pm_array0(3, &[1.0, 2.0], &[0, 2]).unwrap();
        assert_eq!(pts.nrows(), 4);
        assert_eq!(pts.row(0).to_vec(), vec![1.0, 0.0, 2.0]);
        assert_eq!(pts.row(1).to_vec(), vec![1.0, 0.0, -2.0]);
        assert_eq!(pts.row(3).to_vec(), vec![-1.0, 0.0, -2.0]);
    }

    #[test]
    fn test_pm_array0_rejects_bad_positions() {
        assert!(pm_array0(3, &[1.0], &[3]).is_err());
        assert!(pm_array0(3, &[1.0, 2.0], &[1, 1]).is_err());
        assert!(pm_array0(3, &[1.0, 2.0], &[0]).is_err());
    }

    #[test]
    fn test_pm_roll_count() {
        // 3 cyclic placements x 4 sign combinations.
        let pts = pm_roll(3, &[1.0, 2.0]).unwrap();
        assert_eq!(pts.nrows(), 12);
        assert_eq!(pts.row(0).to_vec(), vec![1.0, 2.0, 0.0]);
        // Second placement shifts both values by one axis.
        assert_eq!(pts.row(4).to_vec(), vec![0.0, 1.0, 2.0]);
        assert_eq!(pts.row(8).to_vec(), vec![2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_pm_roll_rejects_too_many_values() {
        assert!(pm_roll(2, &[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_fs11_count() {
        let pts = fs11(3, 2.0, 1.0);
        assert_eq!(pts.nrows(), 3 * 8);
        assert_eq!(pts.row(0).to_vec(), vec![2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_diag() {
        let pts = diag(3, -1.0, 0.5);
        assert_eq!(pts.nrows(), 3);
        assert_eq!(pts.row(1).to_vec(), vec![0.5, -1.0, 0.5]);
    }

    #[test]
    fn test_generators_are_deterministic() {
        let a = fsd(4, &[(1.0, 1), (2.0, 2)]).unwrap();
        let b = fsd(4, &[(1.0, 1), (2.0, 2)]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_exact_inputs_stay_exact() {
        let r = Exact::sqrt_ratio(3, 5);
        let pts = fsd(2, &[(r, 1)]).unwrap();
        assert_eq!(pts.nrows(), 4);
        assert_eq!(pts[(0, 0)], r);
        assert_eq!(pts[(1, 0)], -r);
    }
}
