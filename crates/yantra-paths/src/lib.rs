//! Uninformed search over the puzzle grid.
//!
//! Two strategies are provided, kept deliberately separate because their
//! frontier discipline and duplicate handling differ and both show up in the
//! reported statistics:
//!
//! - **Breadth-first** search ([`bfs`]) — FIFO frontier, shortest paths.
//! - **Depth-first** search ([`dfs`]) — LIFO frontier, north-first descent.
//!
//! Both return a [`SearchOutcome`] carrying the path (if any) together with
//! the final frontier size and the number of explored positions.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | [`bfs`], [`dfs`], [`Strategy::search`] |

mod bfs;
mod dfs;
mod search;
mod strategy;
mod traits;

pub use bfs::bfs;
pub use dfs::dfs;
pub use search::SearchOutcome;
pub use strategy::{Strategy, StrategyError};
pub use traits::Pather;
