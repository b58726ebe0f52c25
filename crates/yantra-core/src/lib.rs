//! **yantra-core** — grid model for the yantra collection puzzle.
//!
//! This crate provides the foundational types shared by the search engine
//! and the goal controller: geometry primitives, tagged cell symbols, and an
//! immutable square grid with its precomputed yantra registry.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellError};
pub use geom::{Position, Range};
pub use grid::{Grid, GridError, YantraRegistry};
