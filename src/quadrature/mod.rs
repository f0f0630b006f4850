//! Numerical quadrature on the reference interval [-1, 1].

mod lobatto;

pub use lobatto::GaussLobatto;
