//! Cubature over the reference pyramid.
//!
//! Pyramid scheme points are cube reference coordinates; the degenerate
//! corner blend of the instance supplies the pyramid measure, so weights are
//! stated on the cube and `sum(w * |detJ|)` recovers the volume `8/3`.

use ndarray::arr2;
use num_traits::Zero;

use crate::domain::DomainKind;
use crate::exact::Exact;
use crate::scheme::Scheme;
use crate::Result;

/// Felippa's one-point rule at the volume centroid, degree 1.
pub fn felippa_1() -> Result<Scheme> {
    let point = arr2(&[[Exact::zero(), Exact::zero(), Exact::ratio(-1, 2)]]);
    Scheme::from_exact_orbits(
        "Felippa 1",
        DomainKind::Pyramid,
        1,
        &[(Exact::ratio(128, 27), point)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainInstance;
    use ndarray::Array1;

    #[test]
    fn test_reference_volume() {
        let scheme = felippa_1().unwrap();
        let pyramid = DomainInstance::reference(DomainKind::Pyramid);
        let v = scheme
            .integrate(|x| Array1::from_elem(x.nrows(), 1.0), &pyramid)
            .unwrap();
        assert!((v - 8.0 / 3.0).abs() < 1e-14);
    }

    #[test]
    fn test_linear_exactness() {
        // integral of z over the reference pyramid is -4/3.
        let scheme = felippa_1().unwrap();
        let pyramid = DomainInstance::reference(DomainKind::Pyramid);
        let v = scheme
            .integrate(|x| x.column(2).to_owned(), &pyramid)
            .unwrap();
        assert!((v + 4.0 / 3.0).abs() < 1e-14);
    }

    #[test]
    fn test_shifted_pyramid_volume() {
        // Unit-base pyramid of height 1: volume 1/3.
        let scheme = felippa_1().unwrap();
        let pyramid = DomainInstance::Pyramid(arr2(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.5, 0.5, 1.0],
        ]));
        let v = scheme
            .integrate(|x| Array1::from_elem(x.nrows(), 1.0), &pyramid)
            .unwrap();
        assert!((v - 1.0 / 3.0).abs() < 1e-14);
    }
}
