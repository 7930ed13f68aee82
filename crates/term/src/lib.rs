//! Terminal view module.
//!
//! Splits presentation into a pure text layer and a thin I/O layer:
//!
//! - [`view`] maps faces and cubes to the triangular text layout (no I/O,
//!   unit-testable)
//! - [`printer`] writes that layout to stdout with per-color styling

pub mod printer;
pub mod view;

pub use pyraminx_core as core;
pub use pyraminx_types as types;

pub use printer::{print_cube, tile_color};
pub use view::{render_cube, render_face};
