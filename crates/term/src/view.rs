//! View: maps faces and cubes into triangular text.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Each face renders as three centered rows:
//!
//! ```text
//!     R
//!   R R R
//! R R R R R
//! ```

use pyraminx_core::cube::{Cube, Face};
use pyraminx_types::FaceId;

/// Tile position span of each rendered row: `(start, end)` into the face.
pub const ROW_SPANS: [(usize, usize); 3] = [(0, 1), (1, 4), (4, 9)];

/// Leading spaces before each rendered row.
pub const ROW_INDENTS: [usize; 3] = [4, 2, 0];

/// Placeholder for a tile slot a malformed face does not hold.
const MISSING_TILE: char = '?';

/// Render one face into the triangular layout, one letter per tile,
/// newline-terminated.
pub fn render_face(face: &Face) -> String {
    let mut out = String::new();
    for (row, &(start, end)) in ROW_SPANS.iter().enumerate() {
        for _ in 0..ROW_INDENTS[row] {
            out.push(' ');
        }
        for pos in start..end {
            if pos > start {
                out.push(' ');
            }
            out.push(face.tile(pos).map(|c| c.as_char()).unwrap_or(MISSING_TILE));
        }
        out.push('\n');
    }
    out
}

/// Render all four faces in canonical order, each under its face name.
pub fn render_cube(cube: &Cube) -> String {
    let mut out = String::new();
    for id in FaceId::ALL {
        out.push_str(id.as_str());
        out.push_str(":\n");
        out.push_str(&render_face(cube.face(id)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyraminx_types::Color;

    #[test]
    fn face_renders_as_triangle() {
        let face = Face::solid(Color::Red);
        assert_eq!(render_face(&face), "    R\n  R R R\nR R R R R\n");
    }

    #[test]
    fn face_renders_each_color_letter() {
        let face = Face::from_tiles(vec![
            Color::Red,
            Color::Blue,
            Color::Green,
            Color::Yellow,
            Color::Red,
            Color::Blue,
            Color::Green,
            Color::Yellow,
            Color::Red,
        ]);
        assert_eq!(render_face(&face), "    R\n  B G Y\nR B G Y R\n");
    }

    #[test]
    fn short_face_renders_placeholders() {
        let face = Face::from_tiles(vec![Color::Blue; 2]);
        assert_eq!(render_face(&face), "    B\n  B ? ?\n? ? ? ? ?\n");
    }
}
