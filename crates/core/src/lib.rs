//! Core puzzle model - pure, deterministic, and testable
//!
//! This module holds the cube state, the derived piece projections, and the
//! state validator. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: construction and validation are pure functions
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Portable**: usable from a terminal frontend or headless
//!
//! # Module Structure
//!
//! - [`cube`]: the four-face tile store with the solved constructor
//! - [`pieces`]: edge/tip/center projections derived from a face's tiles
//! - [`validate`]: structural and color-balance validation
//!
//! # Example
//!
//! ```
//! use pyraminx_core::{validate, Cube};
//! use pyraminx_types::{Color, FaceId};
//!
//! let cube = Cube::solved();
//! assert_eq!(cube.tile(FaceId::Front, 0), Some(Color::Red));
//! assert!(validate(&cube).is_ok());
//! ```

pub mod cube;
pub mod pieces;
pub mod validate;

pub use pyraminx_types as types;

// Re-export commonly used types for convenience
pub use cube::{Cube, Face};
pub use pieces::{centers_of, edges_of, tips_of, PieceGroup};
pub use validate::{validate, ColorCounts, ValidationError};
