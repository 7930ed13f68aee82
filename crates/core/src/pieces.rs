//! Pieces module - edge, tip, and center projections
//!
//! A piece group is the ordered triple of tile colors a face shows for one
//! position class. Groups are derived on demand from the cube; nothing is
//! cached, so a group always reflects the cube it was read from.
//!
//! All three projections go through one generic reader keyed by the requested
//! face id, so a group tagged "for face F" can only ever contain face F's
//! tiles.

use pyraminx_types::{Color, FaceId, CENTER_POSITIONS, EDGE_POSITIONS, TIP_POSITIONS};

use crate::cube::Cube;

/// Three tiles of one position class, tagged with the face they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceGroup {
    /// The face the colors were read from.
    pub face: FaceId,
    /// Colors in ascending position order.
    pub colors: [Color; 3],
}

/// Read one position class from one face.
///
/// Returns `None` only when the face is too short to hold a requested
/// position, which is a layout the validator rejects.
fn group_at(cube: &Cube, id: FaceId, positions: [usize; 3]) -> Option<PieceGroup> {
    let face = cube.face(id);
    let colors = [
        face.tile(positions[0])?,
        face.tile(positions[1])?,
        face.tile(positions[2])?,
    ];
    Some(PieceGroup { face: id, colors })
}

/// The edge pieces of a face: tiles 1, 3, and 6.
pub fn edges_of(cube: &Cube, id: FaceId) -> Option<PieceGroup> {
    group_at(cube, id, EDGE_POSITIONS)
}

/// The tip pieces of a face: tiles 0, 4, and 8.
pub fn tips_of(cube: &Cube, id: FaceId) -> Option<PieceGroup> {
    group_at(cube, id, TIP_POSITIONS)
}

/// The center pieces of a face: tiles 2, 5, and 7.
pub fn centers_of(cube: &Cube, id: FaceId) -> Option<PieceGroup> {
    group_at(cube, id, CENTER_POSITIONS)
}
