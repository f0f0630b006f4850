//! Table generation and text formatting.
//!
//! Each writer emits one complete table set on any `io::Write` sink; the
//! `gen_*` binaries wire them to stdout. The printed text is meant to be
//! pasted into the renderer as static data, so the formats are fixed here
//! rather than configurable.

mod basis;
mod colormap;
mod quadrature;

pub use basis::write_basis_tables;
pub use colormap::write_colormap_tables;
pub use quadrature::write_quadrature_tables;

use crate::colormap::ColormapError;
use thiserror::Error;

/// Interpolation orders for the basis-function table.
pub const BASIS_ORDERS: [usize; 3] = [1, 2, 3];

/// Palette names for the colormap table, in output order.
pub const COLORMAP_NAMES: [&str; 5] = ["cividis", "jet", "coolwarm", "viridis", "plasma"];

/// Samples per palette, covering [0, 1] inclusive.
pub const COLORMAP_SAMPLES: usize = 256;

/// Point counts for the Gauss-Lobatto tables.
pub const LOBATTO_POINT_COUNTS: [usize; 4] = [3, 5, 7, 9];

/// Error type for table generation.
#[derive(Debug, Error)]
pub enum TableError {
    /// Write to the output sink failed.
    #[error("table I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Palette lookup failed.
    #[error(transparent)]
    Colormap(#[from] ColormapError),
}

/// Signed scientific notation with 8 fractional digits and a two-digit signed
/// exponent: `-6.54653671e-01`.
pub(crate) fn sci8(value: f64) -> String {
    let formatted = format!("{value:+.8e}");
    // std leaves the exponent unpadded and sign-free when positive
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(rest) => ('-', rest),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::sci8;

    #[test]
    fn sci8_pads_exponents_to_two_digits() {
        assert_eq!(sci8(0.0), "+0.00000000e+00");
        assert_eq!(sci8(1.0), "+1.00000000e+00");
        assert_eq!(sci8(-0.5), "-5.00000000e-01");
        assert_eq!(sci8(4.0 / 3.0), "+1.33333333e+00");
        assert_eq!(sci8(1.0e-10), "+1.00000000e-10");
        assert_eq!(sci8(-0.654653670707977), "-6.54653671e-01");
    }
}
