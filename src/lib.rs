//! Pyraminx (workspace facade crate).
//!
//! This package keeps a stable `pyraminx::{core,term,types}` public API while
//! the implementation lives in dedicated crates under `crates/`.

pub use pyraminx_core as core;
pub use pyraminx_term as term;
pub use pyraminx_types as types;
