//! Pyraminx demo runner (default binary).
//!
//! Builds the solved cube, prints its four faces in the triangular layout,
//! and reports the validation verdict. A validation failure is a report, not
//! a crash: the error message is printed and the process still exits cleanly.

use anyhow::Result;

use pyraminx::core::{validate, Cube};
use pyraminx::term::print_cube;

fn main() -> Result<()> {
    let cube = Cube::solved();

    print_cube(&cube)?;

    match validate(&cube) {
        Ok(()) => println!("Cube is valid"),
        Err(err) => println!("{err}"),
    }

    Ok(())
}
