//! Prints the Gauss-Lobatto quadrature tables to stdout.

use dg_tables::write_quadrature_tables;
use std::io;

fn main() {
    let stdout = io::stdout();
    write_quadrature_tables(&mut stdout.lock()).expect("quadrature table generation failed");
}
