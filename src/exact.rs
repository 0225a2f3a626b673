//! Exact coefficient scalar for cubature formulas.
//!
//! Literature cubature coefficients are overwhelmingly rational numbers or
//! rational multiples of a single square root, e.g. `1/24` or `sqrt(3/5)`.
//! [`Exact`] stores such values losslessly as `coef * sqrt(radicand)` with a
//! squarefree integer radicand, so the floating-point points and weights of a
//! scheme are always a deterministic cast of the exact data and never diverge
//! from it.
//!
//! Values with nested radicals (e.g. `sqrt(5 + sqrt(5))`) are not
//! representable; formulas with such coefficients are constructed in floating
//! point only.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_rational::Rational64;
use num_traits::{One, Zero};

/// An exact scalar of the form `coef * sqrt(radicand)`.
///
/// Invariants: `radicand >= 1` and squarefree; a zero value has
/// `radicand == 1`. Rational values are exactly those with `radicand == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exact {
    coef: Rational64,
    radicand: i64,
}

impl Exact {
    /// The rational `num / den`.
    pub fn ratio(num: i64, den: i64) -> Self {
        Self::new(Rational64::new(num, den), 1)
    }

    /// The square root of the nonnegative rational `num / den`.
    ///
    /// Panics if `num / den` is negative.
    pub fn sqrt_ratio(num: i64, den: i64) -> Self {
        let r = Rational64::new(num, den);
        assert!(
            r >= Rational64::zero(),
            "square root of negative rational {}/{}",
            num,
            den
        );
        // sqrt(p/q) = sqrt(p*q) / q with p/q already reduced.
        let (p, q) = (*r.numer(), *r.denom());
        Self::new(Rational64::new(1, q), p * q)
    }

    /// The square root of `self`. Only defined for nonnegative rational
    /// values; panics on surds and negative values.
    pub fn sqrt(self) -> Self {
        assert_eq!(self.radicand, 1, "square root of a non-rational value");
        Self::sqrt_ratio(*self.coef.numer(), *self.coef.denom())
    }

    /// Whether the value is rational (no surd part).
    pub fn is_rational(&self) -> bool {
        self.radicand == 1
    }

    /// Deterministic floating-point cast.
    pub fn to_f64(&self) -> f64 {
        let c = *self.coef.numer() as f64 / *self.coef.denom() as f64;
        if self.radicand == 1 {
            c
        } else {
            c * (self.radicand as f64).sqrt()
        }
    }

    fn new(coef: Rational64, radicand: i64) -> Self {
        let (coef, radicand) = normalize(coef, radicand);
        Exact { coef, radicand }
    }
}

/// Extract square factors from the radicand into the rational coefficient,
/// leaving the radicand squarefree.
fn normalize(mut coef: Rational64, mut radicand: i64) -> (Rational64, i64) {
    assert!(radicand >= 0, "negative radicand {}", radicand);
    if radicand == 0 || coef.is_zero() {
        return (Rational64::zero(), 1);
    }
    let mut f = 2i64;
    while f * f <= radicand {
        while radicand % (f * f) == 0 {
            radicand /= f * f;
            coef *= Rational64::from_integer(f);
        }
        f += 1;
    }
    (coef, radicand)
}

impl From<i64> for Exact {
    fn from(n: i64) -> Self {
        Exact {
            coef: Rational64::from_integer(n),
            radicand: 1,
        }
    }
}

impl From<Rational64> for Exact {
    fn from(r: Rational64) -> Self {
        Exact {
            coef: r,
            radicand: 1,
        }
    }
}

impl Neg for Exact {
    type Output = Exact;

    fn neg(self) -> Exact {
        Exact {
            coef: -self.coef,
            radicand: self.radicand,
        }
    }
}

impl Add for Exact {
    type Output = Exact;

    /// Panics when both operands are nonzero surds with different radicands;
    /// such sums leave the representable set. Formula code combines rationals
    /// before taking square roots, so this does not arise in practice.
    fn add(self, rhs: Exact) -> Exact {
        if self.is_zero() {
            return rhs;
        }
        if rhs.is_zero() {
            return self;
        }
        assert_eq!(
            self.radicand, rhs.radicand,
            "cannot add surds with different radicands"
        );
        let coef = self.coef + rhs.coef;
        if coef.is_zero() {
            Exact::zero()
        } else {
            Exact {
                coef,
                radicand: self.radicand,
            }
        }
    }
}

impl Sub for Exact {
    type Output = Exact;

    fn sub(self, rhs: Exact) -> Exact {
        self + (-rhs)
    }
}

impl Mul for Exact {
    type Output = Exact;

    fn mul(self, rhs: Exact) -> Exact {
        Exact::new(self.coef * rhs.coef, self.radicand * rhs.radicand)
    }
}

impl Div for Exact {
    type Output = Exact;

    fn div(self, rhs: Exact) -> Exact {
        assert!(!rhs.is_zero(), "division by zero");
        // 1 / (c * sqrt(r)) = sqrt(r) / (c * r)
        let recip = Exact {
            coef: (self.coef / rhs.coef) / Rational64::from_integer(rhs.radicand),
            radicand: self.radicand * rhs.radicand,
        };
        Exact::new(recip.coef, recip.radicand)
    }
}

impl Zero for Exact {
    fn zero() -> Self {
        Exact {
            coef: Rational64::zero(),
            radicand: 1,
        }
    }

    fn is_zero(&self) -> bool {
        self.coef.is_zero()
    }
}

impl One for Exact {
    fn one() -> Self {
        Exact {
            coef: Rational64::one(),
            radicand: 1,
        }
    }
}

impl fmt::Display for Exact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.radicand == 1 {
            write!(f, "{}", self.coef)
        } else {
            write!(f, "{}*sqrt({})", self.coef, self.radicand)
        }
    }
}
