//! Result of a full multi-leg solve.

use std::fmt;

use serde::{Deserialize, Serialize};
use yantra_core::Position;

/// The stitched path from the start to the final goal plus search totals.
///
/// When some leg could not be completed `path` is `None` and the totals
/// cover only the legs that succeeded before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub path: Option<Vec<Position>>,
    pub frontier_total: usize,
    pub explored_total: usize,
}

impl Solution {
    /// Whether every leg was completed.
    pub fn is_solved(&self) -> bool {
        self.path.is_some()
    }

    /// Number of moves along the path.
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(path) = &self.path else {
            return writeln!(f, "No solution found.");
        };
        f.write_str("Solution Path: [")?;
        for (i, p) in path.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        writeln!(f, "]")?;
        writeln!(f, "Total Frontier kids: {}", self.frontier_total)?;
        writeln!(f, "Total Explored kids: {}", self.explored_total)
    }
}
