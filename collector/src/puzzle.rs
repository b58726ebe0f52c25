//! The sequential goal controller.

use std::fmt;

use log::{debug, info, warn};
use yantra_core::{Cell, Grid, Position, YantraRegistry};
use yantra_paths::{Strategy, StrategyError};

use crate::solution::Solution;

/// The currently revealed target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Goal {
    Yantra { index: u32, pos: Position },
    Exit(Position),
}

impl Goal {
    /// Where the goal is.
    pub fn pos(self) -> Position {
        match self {
            Self::Yantra { pos, .. } | Self::Exit(pos) => pos,
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yantra { index, pos } => write!(f, "Y{index} at {pos}"),
            Self::Exit(pos) => write!(f, "exit at {pos}"),
        }
    }
}

/// Mutable state of one run through the puzzle.
///
/// Only [`Puzzle`] changes it, and only between legs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    /// Where the player stands. `None` when the grid has no start cell.
    pub position: Option<Position>,
    /// The revealed goal, or `None` once there is nothing left to reach.
    pub goal: Option<Goal>,
    /// Yantras collected so far.
    pub collected: u32,
    pub frontier_total: usize,
    pub explored_total: usize,
}

/// A yantra collection puzzle: the grid, its registry and the run progress.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid,
    start: Option<Position>,
    yantras: YantraRegistry,
    progress: Progress,
}

impl Puzzle {
    /// Prepare a puzzle on `grid`, revealing yantra 1 as the first goal.
    ///
    /// Malformed grids are accepted; a missing start or exit only shows up
    /// later as an unsolvable or shortened run. Use
    /// [`Grid::validate`] beforehand to reject them outright.
    pub fn new(grid: Grid) -> Self {
        let start = grid.find_position(Cell::Start);
        let yantras = grid.find_all_yantras();
        if start.is_none() {
            warn!("grid has no start cell");
        }
        if yantras.exit().is_none() {
            warn!("grid has no exit cell");
        }
        let goal = grid.find_position(Cell::Yantra(1)).map(|pos| Goal::Yantra { index: 1, pos });
        Self {
            grid,
            start,
            yantras,
            progress: Progress {
                position: start,
                goal,
                ..Progress::default()
            },
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Option<Position> {
        self.start
    }

    pub fn yantras(&self) -> &YantraRegistry {
        &self.yantras
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Whether `p` is the currently revealed goal.
    pub fn goal_test(&self, p: Position) -> bool {
        self.progress.goal.is_some_and(|g| g.pos() == p)
    }

    /// Advance past the goal just reached.
    ///
    /// After yantra `k` the next goal is yantra `k + 1`; after the last
    /// yantra it is the exit; after the exit there is none. A hole in the
    /// numbering also leaves no goal, which ends the run early.
    pub fn reveal_next_yantra_or_exit(&mut self) {
        let p = &mut self.progress;
        p.goal = match p.goal {
            Some(Goal::Yantra { .. }) => {
                p.collected += 1;
                let next = p.collected + 1;
                if let Some(pos) = self.yantras.get(next) {
                    Some(Goal::Yantra { index: next, pos })
                } else if p.collected as usize == self.yantras.len() {
                    if self.yantras.exit().is_none() {
                        warn!("all {} yantras collected but there is no exit", p.collected);
                    }
                    self.yantras.exit().map(Goal::Exit)
                } else {
                    warn!("yantra Y{next} is missing, stopping after {} collected", p.collected);
                    None
                }
            }
            Some(Goal::Exit(_)) | None => None,
        };
    }

    /// Solve with the strategy named `strategy` (`"BFS"` or `"DFS"`).
    ///
    /// An unrecognised name is rejected before any search runs.
    pub fn solve(&mut self, strategy: &str) -> Result<Solution, StrategyError> {
        let strategy: Strategy = strategy.parse()?;
        Ok(self.solve_with(strategy))
    }

    /// Run one search per leg until no goal remains or a leg fails.
    ///
    /// Each leg's path is appended without its first position, which is the
    /// previous leg's last. A failed leg ends the run with `path: None`, and
    /// its own counts are left out of the totals.
    pub fn solve_with(&mut self, strategy: Strategy) -> Solution {
        let Some(mut current) = self.progress.position else {
            warn!("cannot solve without a start position");
            return self.solution(None);
        };
        let mut path = vec![current];

        while let Some(goal) = self.progress.goal {
            let leg = strategy.search(&self.grid, current, goal.pos());
            let Some(leg_path) = leg.path else {
                info!(
                    "{strategy}: no path from {current} to {goal} (frontier {}, explored {})",
                    leg.frontier, leg.explored
                );
                return self.solution(None);
            };
            debug!(
                "{strategy}: reached {goal} in {} steps (frontier {}, explored {})",
                leg_path.len().saturating_sub(1),
                leg.frontier,
                leg.explored
            );

            path.extend(leg_path.into_iter().skip(1));
            self.progress.frontier_total += leg.frontier;
            self.progress.explored_total += leg.explored;
            current = goal.pos();
            self.progress.position = Some(current);
            self.reveal_next_yantra_or_exit();
        }

        info!(
            "{strategy}: solved in {} steps (frontier {}, explored {})",
            path.len().saturating_sub(1),
            self.progress.frontier_total,
            self.progress.explored_total
        );
        self.solution(Some(path))
    }

    fn solution(&self, path: Option<Vec<Position>>) -> Solution {
        Solution {
            path,
            frontier_total: self.progress.frontier_total,
            explored_total: self.progress.explored_total,
        }
    }
}
