//! Exact rational polynomial arithmetic.
//!
//! `RationalPoly` is a dense univariate polynomial over `Rational64`,
//! coefficients stored lowest degree first. Expanding a product of linear
//! factors is the simplification step for the basis-function generator;
//! differentiation and evaluation at rational points are exact.

use num_rational::Rational64;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RationalPoly {
    /// Lowest degree first. Trailing zeros are trimmed; the zero polynomial
    /// is the empty vector.
    coeffs: Vec<Rational64>,
}

impl RationalPoly {
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn one() -> Self {
        Self::constant(Rational64::one())
    }

    pub fn constant(c: Rational64) -> Self {
        Self::from_coeffs(vec![c])
    }

    /// The monomial x.
    pub fn x() -> Self {
        Self {
            coeffs: vec![Rational64::zero(), Rational64::one()],
        }
    }

    /// Build from coefficients, lowest degree first.
    pub fn from_coeffs(mut coeffs: Vec<Rational64>) -> Self {
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        Self { coeffs }
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of the polynomial; 0 for the zero polynomial.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Coefficient of x^k, zero beyond the degree.
    pub fn coeff(&self, k: usize) -> Rational64 {
        self.coeffs.get(k).copied().unwrap_or_else(Rational64::zero)
    }

    /// Coefficient of x^k converted to f64.
    pub fn coeff_f64(&self, k: usize) -> f64 {
        ratio_to_f64(self.coeff(k))
    }

    /// Multiply every coefficient by a rational constant.
    pub fn scale(&self, c: Rational64) -> Self {
        if c.is_zero() {
            return Self::zero();
        }
        Self {
            coeffs: self.coeffs.iter().map(|a| a * c).collect(),
        }
    }

    /// Exact first derivative.
    pub fn derivative(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, c)| c * Rational64::from_integer(k as i64))
            .collect();
        Self::from_coeffs(coeffs)
    }

    /// Exact evaluation by Horner's rule.
    pub fn eval(&self, x: Rational64) -> Rational64 {
        self.coeffs
            .iter()
            .rev()
            .fold(Rational64::zero(), |acc, c| acc * x + c)
    }

    /// Floating-point evaluation by Horner's rule.
    pub fn eval_f64(&self, x: f64) -> f64 {
        self.coeffs
            .iter()
            .rev()
            .fold(0.0, |acc, c| acc * x + ratio_to_f64(*c))
    }
}

fn ratio_to_f64(r: Rational64) -> f64 {
    *r.numer() as f64 / *r.denom() as f64
}

impl Add for &RationalPoly {
    type Output = RationalPoly;

    fn add(self, rhs: &RationalPoly) -> RationalPoly {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        RationalPoly::from_coeffs((0..len).map(|k| self.coeff(k) + rhs.coeff(k)).collect())
    }
}

impl Sub for &RationalPoly {
    type Output = RationalPoly;

    fn sub(self, rhs: &RationalPoly) -> RationalPoly {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        RationalPoly::from_coeffs((0..len).map(|k| self.coeff(k) - rhs.coeff(k)).collect())
    }
}

impl Mul for &RationalPoly {
    type Output = RationalPoly;

    fn mul(self, rhs: &RationalPoly) -> RationalPoly {
        if self.is_zero() || rhs.is_zero() {
            return RationalPoly::zero();
        }
        let mut coeffs = vec![Rational64::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        RationalPoly::from_coeffs(coeffs)
    }
}

/// Write one term with a positive coefficient: `x`, `x**3`, `3*x/2`, `x/2`.
fn write_term(f: &mut fmt::Formatter<'_>, c: Rational64, k: usize) -> fmt::Result {
    if k == 0 {
        return write!(f, "{c}");
    }
    let numer = *c.numer();
    let denom = *c.denom();
    if numer != 1 {
        write!(f, "{numer}*")?;
    }
    if k == 1 {
        write!(f, "x")?;
    } else {
        write!(f, "x**{k}")?;
    }
    if denom != 1 {
        write!(f, "/{denom}")?;
    }
    Ok(())
}

impl fmt::Display for RationalPoly {
    /// Descending powers with sign-aware term joining:
    /// `-9*x**3/2 + 9*x**2 - 11*x/2 + 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for k in (0..self.coeffs.len()).rev() {
            let c = self.coeffs[k];
            if c.is_zero() {
                continue;
            }
            if first {
                if c.is_negative() {
                    write!(f, "-")?;
                }
                first = false;
            } else if c.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            write_term(f, c.abs(), k)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(n: i64, d: i64) -> Rational64 {
        Rational64::new(n, d)
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        let poly = RationalPoly::from_coeffs(vec![r(1, 1), r(0, 1), r(0, 1)]);
        assert_eq!(poly.degree(), 0);
        assert_eq!(poly, RationalPoly::one());
    }

    #[test]
    fn product_expands_exactly() {
        // (x - 1)(x + 1) = x^2 - 1
        let a = RationalPoly::from_coeffs(vec![r(-1, 1), r(1, 1)]);
        let b = RationalPoly::from_coeffs(vec![r(1, 1), r(1, 1)]);
        let product = &a * &b;
        assert_eq!(product.coeff(0), r(-1, 1));
        assert_eq!(product.coeff(1), r(0, 1));
        assert_eq!(product.coeff(2), r(1, 1));
        assert_eq!(product.to_string(), "x**2 - 1");
    }

    #[test]
    fn derivative_is_exact() {
        // d/dx (3/2 x^2 - 1/2) = 3x
        let poly = RationalPoly::from_coeffs(vec![r(-1, 2), r(0, 1), r(3, 2)]);
        let slope = poly.derivative();
        assert_eq!(slope, RationalPoly::from_coeffs(vec![r(0, 1), r(3, 1)]));
        assert_eq!(slope.to_string(), "3*x");
    }

    #[test]
    fn rational_evaluation_is_exact() {
        // p(x) = 2x^2 - 3x + 1 at x = 1/2 gives exactly 0
        let poly = RationalPoly::from_coeffs(vec![r(1, 1), r(-3, 1), r(2, 1)]);
        assert_eq!(poly.eval(r(1, 2)), r(0, 1));
        assert_eq!(poly.eval(r(0, 1)), r(1, 1));
        assert!((poly.eval_f64(0.5)).abs() < 1e-15);
    }

    #[test]
    fn display_covers_coefficient_shapes() {
        assert_eq!(RationalPoly::zero().to_string(), "0");
        assert_eq!(RationalPoly::x().to_string(), "x");
        let linear = RationalPoly::from_coeffs(vec![r(1, 1), r(-1, 1)]);
        assert_eq!(linear.to_string(), "-x + 1");
        let halves = RationalPoly::from_coeffs(vec![r(-1, 2), r(0, 1), r(3, 2)]);
        assert_eq!(halves.to_string(), "3*x**2/2 - 1/2");
        let unit_frac = RationalPoly::from_coeffs(vec![r(0, 1), r(1, 2)]);
        assert_eq!(unit_frac.to_string(), "x/2");
        let doubled = RationalPoly::from_coeffs(vec![r(0, 1), r(2, 1)]);
        assert_eq!(doubled.to_string(), "2*x");
    }
}
