//! Colormap sample tables.

use super::{TableError, COLORMAP_NAMES, COLORMAP_SAMPLES};
use crate::colormap::Palette;
use std::io::Write;

/// Write every palette as a flat RGB array literal: 256 samples covering
/// [0, 1] inclusive, one sample per line, opacity dropped.
pub fn write_colormap_tables<W: Write>(out: &mut W) -> Result<(), TableError> {
    for name in COLORMAP_NAMES {
        let palette = Palette::by_name(name)?;
        writeln!(out, "{COLORMAP_SAMPLES}")?;
        writeln!(out, "{name}")?;
        writeln!(out, "[")?;
        for k in 0..COLORMAP_SAMPLES {
            let t = k as f64 / (COLORMAP_SAMPLES - 1) as f64;
            let [r, g, b, _] = palette.sample(t);
            writeln!(out, "{r:.8}, {g:.8}, {b:.8},")?;
        }
        writeln!(out, "]")?;
        writeln!(out)?;
    }
    Ok(())
}
