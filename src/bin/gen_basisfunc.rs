//! Prints the Lagrange basis-function table to stdout.

use dg_tables::write_basis_tables;
use std::io;

fn main() {
    let stdout = io::stdout();
    write_basis_tables(&mut stdout.lock()).expect("basis table generation failed");
}
