//! Gauss-Lobatto quadrature tables.

use super::{sci8, TableError, LOBATTO_POINT_COUNTS};
use crate::polynomial::{legendre_poly, legendre_row};
use crate::quadrature::GaussLobatto;
use std::io::Write;

/// Width of the row-label column for a given maximum degree.
fn label_width(max_degree: usize) -> usize {
    max_degree.to_string().len()
}

fn write_row<W: Write>(
    out: &mut W,
    label: &str,
    width: usize,
    values: impl Iterator<Item = f64>,
) -> Result<(), TableError> {
    write!(out, "{label:<width$}")?;
    for value in values {
        write!(out, " {}", sci8(value))?;
    }
    writeln!(out)?;
    Ok(())
}

/// Write, for each point count, the rule's nodes and weights and the Legendre
/// polynomial values at the nodes up to the representable degree; then a final
/// table of the exact Legendre coefficients, lowest degree first.
pub fn write_quadrature_tables<W: Write>(out: &mut W) -> Result<(), TableError> {
    writeln!(out)?;
    writeln!(out, "Legendre polynomials evaluated at Gauss Lobatto quad points")?;
    writeln!(out)?;

    let mut width = 1;
    let mut last_max_degree = 0;
    for &n in &LOBATTO_POINT_COUNTS {
        let rule = GaussLobatto::new(n);
        let max_degree = rule.max_degree();
        width = label_width(max_degree);
        last_max_degree = max_degree;

        writeln!(out, "{n} point rule")?;
        write_row(out, "x", width, rule.nodes.iter().copied())?;
        write_row(out, "w", width, rule.weights.iter().copied())?;

        writeln!(
            out,
            "evaluated polynomials up to the degree to which we can fit a function"
        )?;
        let columns: Vec<Vec<f64>> = rule
            .nodes
            .iter()
            .map(|&x| legendre_row(max_degree, x))
            .collect();
        for deg in 0..=max_degree {
            write_row(
                out,
                &deg.to_string(),
                width,
                columns.iter().map(|column| column[deg]),
            )?;
        }
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "polynomial coefficients (lowest degree coefficient first)")?;
    for deg in 0..=last_max_degree {
        let poly = legendre_poly(deg);
        write_row(
            out,
            &deg.to_string(),
            width,
            (0..=deg).map(|k| poly.coeff_f64(k)),
        )?;
    }
    Ok(())
}
