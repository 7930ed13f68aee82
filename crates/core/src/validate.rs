//! Validation module - structural and color-balance checks
//!
//! Two checks run in sequence. The structural check confirms every face holds
//! exactly 9 tiles; the balance check then tallies all 36 tiles and requires
//! each color to appear exactly 9 times. Balance is necessary for any legal
//! state, solved or scrambled; it is not sufficient for solvedness, which
//! [`crate::cube::Cube::is_solved`] checks separately.

use std::fmt;

use pyraminx_types::{Color, FaceId, FACE_TILES};

use crate::cube::Cube;

/// Per-color tile tally across the whole cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCounts {
    counts: [usize; 4],
}

impl ColorCounts {
    /// Tally every tile of every face.
    pub fn tally(cube: &Cube) -> Self {
        let mut counts = [0usize; 4];
        for id in FaceId::ALL {
            for &tile in cube.face(id).tiles() {
                counts[tile.index()] += 1;
            }
        }
        Self { counts }
    }

    /// Observed count for one color.
    pub fn count(&self, color: Color) -> usize {
        self.counts[color.index()]
    }

    /// Total tiles observed across all faces.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Whether every color appears exactly [`FACE_TILES`] times.
    pub fn is_balanced(&self) -> bool {
        self.counts.iter().all(|&n| n == FACE_TILES)
    }
}

impl fmt::Display for ColorCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for color in Color::ALL {
            if !first {
                write!(f, ", ")?;
            }
            first = false;
            write!(f, "{} {}", self.count(color), color.as_str())?;
        }
        Ok(())
    }
}

/// Why a cube layout is not a legal puzzle state.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A face does not hold exactly 9 tiles.
    #[error("face {face} is malformed: expected 9 tiles, found {found}")]
    MalformedFace { face: FaceId, found: usize },
    /// Some color does not appear exactly 9 times. Carries the full
    /// observed tally so callers can diagnose the discrepancy.
    #[error("expected 9 of each color, but found {counts}")]
    ColorImbalance { counts: ColorCounts },
}

/// Check that `cube` is a legal puzzle state.
///
/// Faces are checked in canonical order and the first malformed face is
/// reported; the color tally only runs once the structure is sound.
pub fn validate(cube: &Cube) -> Result<(), ValidationError> {
    for id in FaceId::ALL {
        let found = cube.face(id).len();
        if found != FACE_TILES {
            return Err(ValidationError::MalformedFace { face: id, found });
        }
    }

    let counts = ColorCounts::tally(cube);
    if !counts.is_balanced() {
        return Err(ValidationError::ColorImbalance { counts });
    }

    Ok(())
}
