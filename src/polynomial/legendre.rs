//! Legendre polynomial evaluation.
//!
//! P_n is orthogonal on [-1, 1]: ∫ P_m P_n dx = 2/(2n+1) δ_{mn}.
//! Everything here runs off the three-term recurrence
//! (n+1) P_{n+1}(x) = (2n+1) x P_n(x) - n P_{n-1}(x),
//! either in f64 for table evaluation or over rational polynomials for the
//! exact coefficient table.

use super::exact::RationalPoly;
use num_rational::Rational64;

const ENDPOINT_EPS: f64 = 1e-14;

/// Evaluate P_n(x).
pub fn legendre(n: usize, x: f64) -> f64 {
    legendre_pair(n, x).0
}

/// Run the recurrence once, returning (P_n, P_{n-1}).
/// P_{-1} is reported as 0 for n = 0.
fn legendre_pair(n: usize, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }
    let mut prev = 1.0;
    let mut curr = x;
    for k in 1..n {
        let next = ((2 * k + 1) as f64 * x * curr - k as f64 * prev) / (k + 1) as f64;
        prev = curr;
        curr = next;
    }
    (curr, prev)
}

/// Evaluate P_n(x) and P'_n(x) from a single recurrence pass.
///
/// The derivative uses P'_n(x) = n (x P_n - P_{n-1}) / (x^2 - 1), which is
/// singular at the interval ends; there the closed forms
/// P'_n(±1) = (±1)^{n+1} n(n+1)/2 apply.
pub fn legendre_with_derivative(n: usize, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }
    let (p, p_prev) = legendre_pair(n, x);
    let dp = if (x.abs() - 1.0).abs() < ENDPOINT_EPS {
        let magnitude = (n * (n + 1)) as f64 / 2.0;
        if x > 0.0 || n % 2 == 1 {
            magnitude
        } else {
            -magnitude
        }
    } else {
        n as f64 * (x * p - p_prev) / (x * x - 1.0)
    };
    (p, dp)
}

/// Evaluate P_0(x) ..= P_max_degree(x) in one pass, lowest degree first.
pub fn legendre_row(max_degree: usize, x: f64) -> Vec<f64> {
    let mut row = Vec::with_capacity(max_degree + 1);
    row.push(1.0);
    if max_degree == 0 {
        return row;
    }
    row.push(x);
    for k in 1..max_degree {
        let next = ((2 * k + 1) as f64 * x * row[k] - k as f64 * row[k - 1]) / (k + 1) as f64;
        row.push(next);
    }
    row
}

/// Exact coefficients of P_n, built by the same recurrence over rational
/// polynomials.
pub fn legendre_poly(n: usize) -> RationalPoly {
    if n == 0 {
        return RationalPoly::one();
    }
    let x = RationalPoly::x();
    let mut prev = RationalPoly::one();
    let mut curr = x.clone();
    for k in 1..n {
        let k_i = k as i64;
        let weighted = (&x * &curr).scale(Rational64::from_integer(2 * k_i + 1));
        let next = (&weighted - &prev.scale(Rational64::from_integer(k_i)))
            .scale(Rational64::new(1, k_i + 1));
        prev = curr;
        curr = next;
    }
    curr
}
