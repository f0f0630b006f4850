//! Prints the colormap sample tables to stdout.

use dg_tables::write_colormap_tables;
use std::io;

fn main() {
    let stdout = io::stdout();
    write_colormap_tables(&mut stdout.lock()).expect("colormap table generation failed");
}
