//! Printer: writes the triangular layout to a real terminal.
//!
//! This is the only I/O in the term crate. It reuses the pure [`crate::view`]
//! row geometry and adds per-color foreground styling.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    style::{Color as TermColor, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use pyraminx_core::cube::Cube;
use pyraminx_types::{Color, FaceId};

use crate::view::{ROW_INDENTS, ROW_SPANS};

/// Terminal foreground color for a tile color.
pub fn tile_color(color: Color) -> TermColor {
    match color {
        Color::Red => TermColor::Red,
        Color::Blue => TermColor::Blue,
        Color::Green => TermColor::Green,
        Color::Yellow => TermColor::Yellow,
    }
}

/// Print all four faces to stdout in canonical order, tile letters colored.
pub fn print_cube(cube: &Cube) -> Result<()> {
    let mut stdout = io::stdout();

    for id in FaceId::ALL {
        stdout.queue(Print(id.as_str()))?.queue(Print(":\n"))?;

        let face = cube.face(id);
        for (row, &(start, end)) in ROW_SPANS.iter().enumerate() {
            stdout.queue(Print(" ".repeat(ROW_INDENTS[row])))?;
            for pos in start..end {
                if pos > start {
                    stdout.queue(Print(" "))?;
                }
                match face.tile(pos) {
                    Some(color) => {
                        stdout
                            .queue(SetForegroundColor(tile_color(color)))?
                            .queue(Print(color.as_char()))?
                            .queue(ResetColor)?;
                    }
                    None => {
                        stdout.queue(Print("?"))?;
                    }
                }
            }
            stdout.queue(Print("\n"))?;
        }
    }

    stdout.flush()?;
    Ok(())
}
