//! # dg-tables
//!
//! Precomputed numeric tables for a discontinuous-Galerkin renderer.
//!
//! This crate generates the static data the renderer embeds:
//! - 1D Lagrange basis functions and their derivatives, derived over exact
//!   rational arithmetic
//! - Color lookup tables sampled from bundled palette ramps
//! - Gauss-Lobatto quadrature rules and Legendre polynomial tables
//!
//! Each table set has a one-shot generator binary (`gen_basisfunc`,
//! `gen_colormap`, `gen_legendre`) that prints to stdout for copy-paste into
//! downstream source.

pub mod basis;
pub mod colormap;
pub mod polynomial;
pub mod quadrature;
pub mod tables;

// Re-export main types for convenience
pub use basis::lagrange_basis;
pub use colormap::{ColormapError, Palette, PALETTES};
pub use polynomial::{legendre, legendre_poly, legendre_row, legendre_with_derivative, RationalPoly};
pub use quadrature::GaussLobatto;
pub use tables::{
    write_basis_tables, write_colormap_tables, write_quadrature_tables, TableError, BASIS_ORDERS,
    COLORMAP_NAMES, COLORMAP_SAMPLES, LOBATTO_POINT_COUNTS,
};
