//! Search strategy selection.

use std::fmt;
use std::str::FromStr;

use yantra_core::Position;

use crate::search::SearchOutcome;
use crate::traits::Pather;
use crate::{bfs, dfs};

/// One of the two supported search strategies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first search.
    #[default]
    Bfs,
    /// Depth-first search.
    Dfs,
}

impl Strategy {
    /// Every recognised strategy.
    pub const ALL: [Strategy; 2] = [Strategy::Bfs, Strategy::Dfs];

    /// Short name. [`FromStr`] accepts exactly this spelling.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }

    /// Run this strategy from `start` to `goal`.
    pub fn search<P: Pather + ?Sized>(self, pather: &P, start: Position, goal: Position) -> SearchOutcome {
        let outcome = match self {
            Self::Bfs => bfs(pather, start, goal),
            Self::Dfs => dfs(pather, start, goal),
        };
        log::debug!(
            "{} {start} -> {goal}: {}, frontier {}, explored {}",
            self,
            if outcome.is_found() { "found" } else { "unreachable" },
            outcome.frontier,
            outcome.explored
        );
        outcome
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = StrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|st| st.name() == s)
            .ok_or_else(|| StrategyError::Unknown(s.to_string()))
    }
}

/// A strategy name outside the recognised set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    Unknown(String),
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(s) => write!(f, "unknown search strategy \u{201c}{s}\u{201d}, expected BFS or DFS"),
        }
    }
}

impl std::error::Error for StrategyError {}
