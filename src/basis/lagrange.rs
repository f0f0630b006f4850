//! Lagrange interpolation basis on equispaced unit-interval nodes.

use crate::polynomial::RationalPoly;
use num_rational::Rational64;

/// Basis polynomial L_i for interpolation order p on the nodes {0, 1/p, ..., 1}.
///
/// L_i(x) = Π_{j≠i} (x - j/p) / (i/p - j/p)
///
/// is 1 at its own node i/p and 0 at every other node. The product is expanded
/// over exact rational arithmetic, so the returned polynomial is already in
/// simplified (monomial) form.
pub fn lagrange_basis(p: usize, i: usize) -> RationalPoly {
    assert!(p >= 1, "interpolation order must be at least 1");
    assert!(i <= p, "node index {i} out of range for order {p}");

    let xi = Rational64::new(i as i64, p as i64);
    let mut basis = RationalPoly::one();
    for j in 0..=p {
        if j == i {
            continue;
        }
        let xj = Rational64::new(j as i64, p as i64);
        let factor = RationalPoly::from_coeffs(vec![-xj, Rational64::from_integer(1)]);
        basis = (&basis * &factor).scale((xi - xj).recip());
    }
    basis
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{One, Zero};

    #[test]
    fn cardinal_property_is_exact() {
        for p in 1..=3 {
            for i in 0..=p {
                let basis = lagrange_basis(p, i);
                for j in 0..=p {
                    let value = basis.eval(Rational64::new(j as i64, p as i64));
                    let expected = if i == j {
                        Rational64::one()
                    } else {
                        Rational64::zero()
                    };
                    assert_eq!(value, expected, "L_{i} at node {j}, order {p}");
                }
            }
        }
    }

    #[test]
    fn partition_of_unity_is_exact() {
        for p in 1..=3 {
            let total = (0..=p)
                .map(|i| lagrange_basis(p, i))
                .fold(RationalPoly::zero(), |acc, basis| &acc + &basis);
            assert_eq!(total, RationalPoly::one(), "order {p}");
        }
    }

    #[test]
    fn linear_basis_closed_form() {
        // L_0 = 1 - x, L_1 = x
        let left = lagrange_basis(1, 0);
        assert_eq!(left.coeff(0), Rational64::one());
        assert_eq!(left.coeff(1), -Rational64::one());
        assert_eq!(left.to_string(), "-x + 1");
        assert_eq!(left.derivative().to_string(), "-1");

        let right = lagrange_basis(1, 1);
        assert_eq!(right.to_string(), "x");
        assert_eq!(right.derivative().to_string(), "1");
    }

    #[test]
    fn basis_degree_equals_order() {
        for p in 1..=3 {
            for i in 0..=p {
                assert_eq!(lagrange_basis(p, i).degree(), p);
            }
        }
    }

    #[test]
    #[should_panic(expected = "at least 1")]
    fn order_zero_is_rejected() {
        lagrange_basis(0, 0);
    }
}
