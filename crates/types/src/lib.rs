//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core model, validation, terminal rendering).
//!
//! # Face layout
//!
//! Each of the four triangular faces holds 9 tiles, indexed 0-8 in this
//! triangular pattern:
//!
//! ```text
//!       0
//!     1 2 3
//! 4 5 6 7 8
//! ```
//!
//! Tile positions fall into three fixed classes:
//!
//! | Class | Positions |
//! |---------|-----------|
//! | Tips | 0, 4, 8 |
//! | Edges | 1, 3, 6 |
//! | Centers | 2, 5, 7 |
//!
//! # Solved configuration
//!
//! | Face | Color |
//! |-------|--------|
//! | Front | Red |
//! | Right | Blue |
//! | Left | Green |
//! | Base | Yellow |

/// Number of tiles on a single face.
pub const FACE_TILES: usize = 9;

/// Number of faces on the puzzle.
pub const FACE_COUNT: usize = 4;

/// Total tile slots across the whole puzzle.
pub const TILE_COUNT: usize = FACE_TILES * FACE_COUNT;

/// Tile positions that form a face's edge pieces.
pub const EDGE_POSITIONS: [usize; 3] = [1, 3, 6];

/// Tile positions that form a face's tip (corner) pieces.
pub const TIP_POSITIONS: [usize; 3] = [0, 4, 8];

/// Tile positions that form a face's center pieces.
pub const CENTER_POSITIONS: [usize; 3] = [2, 5, 7];

/// Tile colors
///
/// The set is closed: every tile holds exactly one of these four values,
/// so color matches are exhaustive with no unknown branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    /// All colors in canonical order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Blue, Color::Green, Color::Yellow];

    /// Parse a color from its single-letter code (case-insensitive).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Color::Red),
            'B' => Some(Color::Blue),
            'G' => Some(Color::Green),
            'Y' => Some(Color::Yellow),
            _ => None,
        }
    }

    /// Single-letter code used in the triangular text layout.
    pub fn as_char(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
            Color::Yellow => 'Y',
        }
    }

    /// Lowercase color name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
        }
    }

    /// Dense index into per-color tables (tally arrays and the like).
    pub fn index(&self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
            Color::Green => 2,
            Color::Yellow => 3,
        }
    }
}

/// Face identifiers
///
/// Closed set of the four faces. `ALL` fixes the canonical iteration and
/// display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceId {
    Front,
    Right,
    Left,
    Base,
}

impl FaceId {
    /// All faces in canonical order: Front, Right, Left, Base.
    pub const ALL: [FaceId; 4] = [FaceId::Front, FaceId::Right, FaceId::Left, FaceId::Base];

    /// Parse a face id from its name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "front" => Some(FaceId::Front),
            "right" => Some(FaceId::Right),
            "left" => Some(FaceId::Left),
            "base" => Some(FaceId::Base),
            _ => None,
        }
    }

    /// Face name for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            FaceId::Front => "Front",
            FaceId::Right => "Right",
            FaceId::Left => "Left",
            FaceId::Base => "Base",
        }
    }

    /// Dense index into per-face storage.
    pub fn index(&self) -> usize {
        match self {
            FaceId::Front => 0,
            FaceId::Right => 1,
            FaceId::Left => 2,
            FaceId::Base => 3,
        }
    }

    /// The color this face carries in the solved configuration.
    pub fn solved_color(&self) -> Color {
        match self {
            FaceId::Front => Color::Red,
            FaceId::Right => Color::Blue,
            FaceId::Left => Color::Green,
            FaceId::Base => Color::Yellow,
        }
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
