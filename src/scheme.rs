//! Immutable cubature schemes and their integration drivers.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use crate::assemble::untangle;
use crate::domain::{transform_batch, DomainInstance, DomainKind};
use crate::error::{CubatureError, Result};
use crate::exact::Exact;

/// Exact counterpart of a scheme's floating-point data, kept when every
/// coefficient of the formula is representable as [`Exact`].
#[derive(Debug, Clone)]
struct ExactData {
    points: Array2<Exact>,
    weights: Array1<Exact>,
}

/// An immutable cubature scheme: a named, degree-tagged point/weight set on a
/// reference domain.
///
/// Weights are normalized so that integrating the constant function `1` over
/// an instance returns the instance's measure. For cube, simplex, ball and
/// sphere schemes the weights themselves sum to the reference measure;
/// pyramid weights are stated on the cube blend and reach the pyramid volume
/// through the instance Jacobian.
#[derive(Debug, Clone)]
pub struct Scheme {
    name: String,
    domain: DomainKind,
    degree: u32,
    points: Array2<f64>,
    weights: Array1<f64>,
    exact: Option<ExactData>,
}

impl Scheme {
    /// Build a scheme directly from flat point and weight arrays.
    pub fn from_arrays(
        name: impl Into<String>,
        domain: DomainKind,
        degree: u32,
        points: Array2<f64>,
        weights: Array1<f64>,
    ) -> Result<Self> {
        let name = name.into();
        check_arrays(&name, domain, points.dim(), weights.len())?;
        log::debug!(
            "scheme '{}': degree {}, {} points on {:?}",
            name,
            degree,
            points.nrows(),
            domain
        );
        Ok(Scheme {
            name,
            domain,
            degree,
            points,
            weights,
            exact: None,
        })
    }

    /// Build a scheme from floating-point `(weight, orbit)` pairs.
    pub fn from_orbits(
        name: impl Into<String>,
        domain: DomainKind,
        degree: u32,
        data: &[(f64, Array2<f64>)],
    ) -> Result<Self> {
        let (points, weights) = untangle(data)?;
        Self::from_arrays(name, domain, degree, points, weights)
    }

    /// Build a scheme from exact `(weight, orbit)` pairs; the floating-point
    /// data is the deterministic cast of the exact data.
    pub fn from_exact_orbits(
        name: impl Into<String>,
        domain: DomainKind,
        degree: u32,
        data: &[(Exact, Array2<Exact>)],
    ) -> Result<Self> {
        let (exact_points, exact_weights) = untangle(data)?;
        let points = exact_points.mapv(|v| v.to_f64());
        let weights = exact_weights.mapv(|v| v.to_f64());
        let mut scheme = Self::from_arrays(name, domain, degree, points, weights)?;
        scheme.exact = Some(ExactData {
            points: exact_points,
            weights: exact_weights,
        });
        Ok(scheme)
    }

    /// Scheme name, as printed in the source literature.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reference domain the points live on.
    pub fn domain(&self) -> DomainKind {
        self.domain
    }

    /// Highest polynomial degree the scheme integrates exactly.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Number of cubature nodes.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the scheme has no nodes. Always `false` for schemes built
    /// through the public constructors.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Reference-domain node coordinates, one node per row.
    pub fn points(&self) -> ArrayView2<'_, f64> {
        self.points.view()
    }

    /// Reference-domain weights, parallel to [`points`](Self::points).
    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    /// Exact node coordinates, if the scheme was constructed exactly.
    pub fn exact_points(&self) -> Result<ArrayView2<'_, Exact>> {
        match &self.exact {
            Some(exact) => Ok(exact.points.view()),
            None => Err(CubatureError::UnsupportedPrecisionCast {
                name: self.name.clone(),
            }),
        }
    }

    /// Exact weights, if the scheme was constructed exactly.
    pub fn exact_weights(&self) -> Result<ArrayView1<'_, Exact>> {
        match &self.exact {
            Some(exact) => Ok(exact.weights.view()),
            None => Err(CubatureError::UnsupportedPrecisionCast {
                name: self.name.clone(),
            }),
        }
    }

    /// Whether exact coefficients are available.
    pub fn has_exact(&self) -> bool {
        self.exact.is_some()
    }

    /// Node coordinates transformed onto a concrete domain instance.
    pub fn points_on(&self, instance: &DomainInstance) -> Result<Array2<f64>> {
        let (x, _) = transform_batch(self.domain, instance, self.points.view())?;
        Ok(x)
    }

    /// Integrate a batch integrand over a concrete domain instance.
    ///
    /// The integrand receives all transformed nodes at once (one node per
    /// row) and must return one value per node; a result of any other length
    /// is a [`CubatureError::ShapeMismatch`].
    pub fn integrate<F>(&self, f: F, instance: &DomainInstance) -> Result<f64>
    where
        F: FnOnce(ArrayView2<'_, f64>) -> Array1<f64>,
    {
        let (x, scale) = transform_batch(self.domain, instance, self.points.view())?;
        let values = f(x.view());
        if values.len() != self.len() {
            return Err(CubatureError::shape(
                format!("integrand for scheme '{}'", self.name),
                format!("{} values", self.len()),
                format!("{} values", values.len()),
            ));
        }
        Ok(self
            .weights
            .iter()
            .zip(values.iter())
            .zip(scale.iter())
            .map(|((w, v), s)| w * v * s)
            .sum())
    }

    /// Integrate from precomputed nodal values, bypassing the integrand
    /// callback. The values must correspond to this scheme's nodes on the
    /// given instance, in node order.
    pub fn integrate_discrete(
        &self,
        values: ArrayView1<'_, f64>,
        instance: &DomainInstance,
    ) -> Result<f64> {
        if values.len() != self.len() {
            return Err(CubatureError::shape(
                format!("nodal values for scheme '{}'", self.name),
                format!("{} values", self.len()),
                format!("{} values", values.len()),
            ));
        }
        let (_, scale) = transform_batch(self.domain, instance, self.points.view())?;
        Ok(self
            .weights
            .iter()
            .zip(values.iter())
            .zip(scale.iter())
            .map(|((w, v), s)| w * v * s)
            .sum())
    }

    /// Integrate a vector-valued batch integrand: `f` returns one row per
    /// component, each of node length, and the result is one integral per
    /// component.
    pub fn integrate_multi<F>(&self, f: F, instance: &DomainInstance) -> Result<Array1<f64>>
    where
        F: FnOnce(ArrayView2<'_, f64>) -> Array2<f64>,
    {
        let (x, scale) = transform_batch(self.domain, instance, self.points.view())?;
        let values = f(x.view());
        if values.ncols() != self.len() {
            return Err(CubatureError::shape(
                format!("integrand for scheme '{}'", self.name),
                format!("{} columns", self.len()),
                format!("{} columns", values.ncols()),
            ));
        }
        let out = values
            .outer_iter()
            .map(|row| {
                self.weights
                    .iter()
                    .zip(row.iter())
                    .zip(scale.iter())
                    .map(|((w, v), s)| w * v * s)
                    .sum()
            })
            .collect();
        Ok(out)
    }
}

fn check_arrays(
    name: &str,
    domain: DomainKind,
    points_dim: (usize, usize),
    n_weights: usize,
) -> Result<()> {
    let (npts, width) = points_dim;
    if width != domain.dimension() {
        return Err(CubatureError::shape(
            format!("scheme '{}'", name),
            format!("points of width {}", domain.dimension()),
            format!("points of width {}", width),
        ));
    }
    if npts != n_weights {
        return Err(CubatureError::shape(
            format!("scheme '{}'", name),
            format!("{} weights", npts),
            format!("{} weights", n_weights),
        ));
    }
    if npts == 0 {
        return Err(CubatureError::shape(
            format!("scheme '{}'", name),
            "at least one node".to_string(),
            "no nodes".to_string(),
        ));
    }
    Ok(())
}
