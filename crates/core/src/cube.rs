//! Cube module - owns the four faces and their tiles
//!
//! Storage is an array of four faces indexed by [`FaceId`], so every face is
//! always present by construction and face lookup cannot fail. Tile positions
//! use the triangular indexing documented in `pyraminx_types`:
//!
//! ```text
//!       0
//!     1 2 3
//! 4 5 6 7 8
//! ```

use pyraminx_types::{Color, FaceId, FACE_COUNT, FACE_TILES};

/// One triangular face: an ordered run of tiles.
///
/// A well-formed face holds exactly [`FACE_TILES`] tiles. The normal
/// constructors only build well-formed faces; [`Face::from_tiles`] accepts any
/// length so that malformed layouts can be represented and then rejected by
/// the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    tiles: Vec<Color>,
}

impl Face {
    /// Create a monochrome face.
    pub fn solid(color: Color) -> Self {
        Self {
            tiles: vec![color; FACE_TILES],
        }
    }

    /// Create a face from an explicit tile vector.
    ///
    /// The length is not checked here; [`crate::validate::validate`] is the
    /// arbiter of well-formedness.
    pub fn from_tiles(tiles: Vec<Color>) -> Self {
        Self { tiles }
    }

    /// Number of tiles on this face.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the face holds no tiles at all.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in position order.
    pub fn tiles(&self) -> &[Color] {
        &self.tiles
    }

    /// Tile at `pos`, or `None` if `pos` is past the end of the face.
    pub fn tile(&self, pos: usize) -> Option<Color> {
        self.tiles.get(pos).copied()
    }

    /// Whether every tile matches `color`.
    pub fn is_solid(&self, color: Color) -> bool {
        self.tiles.len() == FACE_TILES && self.tiles.iter().all(|&t| t == color)
    }
}

/// The full puzzle state: one face per [`FaceId`].
///
/// The faces array is indexed by `FaceId::index()`, which makes the store
/// total over the face set - there is no missing-face case to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cube {
    faces: [Face; FACE_COUNT],
}

impl Cube {
    /// Create the solved configuration: every face monochrome in its
    /// assigned color (Front=Red, Right=Blue, Left=Green, Base=Yellow).
    pub fn solved() -> Self {
        Self {
            faces: FaceId::ALL.map(|id| Face::solid(id.solved_color())),
        }
    }

    /// Assemble a cube from explicit faces, in canonical face order.
    pub fn from_faces(faces: [Face; FACE_COUNT]) -> Self {
        Self { faces }
    }

    /// The face with the given id.
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    /// Tile at `pos` on face `id`, or `None` if `pos` is out of range.
    pub fn tile(&self, id: FaceId, pos: usize) -> Option<Color> {
        self.face(id).tile(pos)
    }

    /// Overwrite one tile.
    ///
    /// Returns `false` if `pos` is out of range for the face. This is a
    /// low-level write for building specific layouts; there is no
    /// move/rotation engine on top of it.
    pub fn set_tile(&mut self, id: FaceId, pos: usize, color: Color) -> bool {
        match self.faces[id.index()].tiles.get_mut(pos) {
            Some(tile) => {
                *tile = color;
                true
            }
            None => false,
        }
    }

    /// Whether every face is monochrome in its assigned solved color.
    pub fn is_solved(&self) -> bool {
        FaceId::ALL
            .iter()
            .all(|&id| self.face(id).is_solid(id.solved_color()))
    }
}

impl Default for Cube {
    fn default() -> Self {
        Self::solved()
    }
}
