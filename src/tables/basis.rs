//! Lagrange basis-function table.

use super::{TableError, BASIS_ORDERS};
use crate::basis::lagrange_basis;
use std::io::Write;

/// Write every basis polynomial and its derivative, in simplified form, for
/// each interpolation order.
pub fn write_basis_tables<W: Write>(out: &mut W) -> Result<(), TableError> {
    for &p in &BASIS_ORDERS {
        writeln!(out, "p: {p}")?;
        for i in 0..=p {
            let basis = lagrange_basis(p, i);
            let slope = basis.derivative();
            writeln!(out, "  func: {i}")?;
            writeln!(out, "    {basis}")?;
            writeln!(out, "    {slope}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}
