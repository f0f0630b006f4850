//! Gauss-Lobatto quadrature rules.
//!
//! An n-point Lobatto rule fixes both endpoints at ±1 and places the n-2
//! interior nodes at the roots of P'_{n-1}, i.e. the nodes are the roots of
//! (1 - x²) P'_{n-1}(x). The rule integrates polynomials up to degree 2n-3
//! exactly.

use crate::polynomial::{legendre, legendre_with_derivative};
use std::f64::consts::PI;

const NEWTON_MAX_ITER: usize = 100;
const NEWTON_TOL: f64 = 1e-15;

/// Nodes and weights of an n-point Gauss-Lobatto rule on [-1, 1].
#[derive(Debug, Clone)]
pub struct GaussLobatto {
    /// Nodes in ascending order; first is -1, last is +1.
    pub nodes: Vec<f64>,
    /// Weights w_i = 2 / (n (n-1) P_{n-1}(x_i)²).
    pub weights: Vec<f64>,
}

impl GaussLobatto {
    /// Build the rule for `n_points` nodes (at least 2).
    ///
    /// Interior nodes start from Chebyshev-Lobatto guesses and are refined by
    /// Newton iteration on (1 - x²) P'_deg, whose derivative collapses to
    /// -deg (deg+1) P_deg.
    pub fn new(n_points: usize) -> Self {
        assert!(n_points >= 2, "Lobatto rule needs at least 2 points");
        let deg = n_points - 1;

        let mut nodes = vec![0.0; n_points];
        nodes[0] = -1.0;
        nodes[n_points - 1] = 1.0;

        for j in 1..deg {
            let mut x = -(PI * j as f64 / deg as f64).cos();
            for _ in 0..NEWTON_MAX_ITER {
                let (p, dp) = legendre_with_derivative(deg, x);
                let step = (1.0 - x * x) * dp / (deg as f64 * (deg + 1) as f64 * p);
                x += step;
                if step.abs() < NEWTON_TOL {
                    break;
                }
            }
            nodes[j] = x;
        }

        // The rule is symmetric about the origin: average mirrored pairs and
        // pin the centre node of odd rules to exactly zero.
        for j in 1..n_points / 2 {
            let half = 0.5 * (nodes[j] - nodes[n_points - 1 - j]);
            nodes[j] = half;
            nodes[n_points - 1 - j] = -half;
        }
        if n_points % 2 == 1 {
            nodes[n_points / 2] = 0.0;
        }

        let scale = (n_points * (n_points - 1)) as f64;
        let weights = nodes
            .iter()
            .map(|&x| {
                let p = legendre(deg, x);
                2.0 / (scale * p * p)
            })
            .collect();

        Self { nodes, weights }
    }

    /// Number of quadrature points.
    pub fn n_points(&self) -> usize {
        self.nodes.len()
    }

    /// Highest polynomial degree representable at this point count:
    /// floor((2n - 3) / 2).
    pub fn max_degree(&self) -> usize {
        (2 * self.n_points() - 3) / 2
    }

    /// Integrate a function over [-1, 1] with this rule.
    pub fn integrate<F: Fn(f64) -> f64>(&self, f: F) -> f64 {
        self.nodes
            .iter()
            .zip(&self.weights)
            .map(|(&x, &w)| w * f(x))
            .sum()
    }
}
