//! Scheme assembly: flattening orbit lists into parallel point/weight arrays.

use ndarray::{Array1, Array2};
use num_traits::Zero;

use crate::error::{CubatureError, Result};

/// Flatten an ordered list of `(weight, point-array)` orbit pairs into flat
/// parallel `(points, weights)` arrays.
///
/// Points are the row-wise concatenation of all orbit arrays in input order;
/// each orbit's scalar weight is repeated once per row of its orbit. This is
/// a pure structural reshape: no deduplication, no sorting, no validation of
/// physical correctness. Orbit arrays with differing column counts, or an
/// empty list, are a [`CubatureError::ShapeMismatch`].
pub fn untangle<C>(data: &[(C, Array2<C>)]) -> Result<(Array2<C>, Array1<C>)>
where
    C: Clone + Zero,
{
    let Some((_, first)) = data.first() else {
        return Err(CubatureError::shape(
            "untangle",
            "at least one orbit",
            "empty orbit list",
        ));
    };
    let dim = first.ncols();
    for (i, (_, pts)) in data.iter().enumerate() {
        if pts.ncols() != dim {
            return Err(CubatureError::shape(
                format!("untangle orbit {}", i),
                format!("{} columns", dim),
                format!("{} columns", pts.ncols()),
            ));
        }
    }

    let total: usize = data.iter().map(|(_, pts)| pts.nrows()).sum();
    let mut points = Array2::from_elem((total, dim), C::zero());
    let mut weights = Vec::with_capacity(total);
    let mut row = 0;
    for (w, pts) in data {
        for orbit_row in pts.outer_iter() {
            for (j, v) in orbit_row.iter().enumerate() {
                points[(row, j)] = v.clone();
            }
            weights.push(w.clone());
            row += 1;
        }
    }
    Ok((points, Array1::from_vec(weights)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbits::{fsd, pm, z};

    #[test]
    fn test_untangle_shape_invariant() {
        let data = vec![
            (0.25, z::<f64>(2)),
            (0.5, fsd(2, &[(1.0, 1)]).unwrap()),
            (0.125, pm(2, 0.5)),
        ];
        let sizes = [1usize, 4, 4];
        let (points, weights) = untangle(&data).unwrap();
        assert_eq!(points.nrows(), sizes.iter().sum::<usize>());
        assert_eq!(points.nrows(), weights.len());

        // Each block of weights equals its orbit's scalar weight.
        let mut offset = 0;
        for (i, n) in sizes.iter().enumerate() {
            for k in offset..offset + n {
                assert_eq!(weights[k], data[i].0, "weight block {} row {}", i, k);
            }
            offset += n;
        }
    }

    #[test]
    fn test_untangle_preserves_row_order() {
        let data = vec![(1.0, pm(1, 2.0)), (3.0, z::<f64>(1))];
        let (points, weights) = untangle(&data).unwrap();
        assert_eq!(points.column(0).to_vec(), vec![2.0, -2.0, 0.0]);
        assert_eq!(weights.to_vec(), vec![1.0, 1.0, 3.0]);
    }

    #[test]
    fn test_untangle_rejects_empty_list() {
        let data: Vec<(f64, Array2<f64>)> = Vec::new();
        assert!(untangle(&data).is_err());
    }

    #[test]
    fn test_untangle_rejects_mismatched_columns() {
        let data = vec![(1.0, z::<f64>(2)), (1.0, z::<f64>(3))];
        let err = untangle(&data).unwrap_err();
        assert!(err.is_structural());
    }
}
