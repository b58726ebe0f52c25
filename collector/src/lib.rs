//! Yantra collector — visits numbered yantras in order, then the exit.
//!
//! A [`Puzzle`] owns an immutable [`Grid`](yantra_core::Grid) and the
//! mutable [`Progress`] of a single run. [`Puzzle::solve`] chains one search
//! per leg (start → Y1 → Y2 → … → exit), each yantra's location becoming
//! the goal only once the previous one has been collected.

pub mod config;
pub mod puzzle;
pub mod solution;

pub use config::{Config, ConfigError, GridSource, DEMO_GRID};
pub use puzzle::{Goal, Progress, Puzzle};
pub use solution::Solution;
