//! Polynomial evaluation and exact polynomial arithmetic.
//!
//! This module provides:
//! - f64 Legendre evaluation via the three-term recurrence
//! - exact rational polynomials, used for basis-function construction and the
//!   Legendre coefficient table

mod exact;
mod legendre;

pub use exact::RationalPoly;
pub use legendre::{legendre, legendre_poly, legendre_row, legendre_with_derivative};
