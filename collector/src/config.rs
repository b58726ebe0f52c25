//! Command-line configuration.

use std::fmt;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use yantra_core::{Grid, GridError};
use yantra_paths::{Strategy, StrategyError};

/// The puzzle solved when no grid file is given.
pub const DEMO_GRID: &str = "\
P . . # Y2
# T . # .
. . Y1 . .
# . . T .
. . . . E";

/// Raw command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "yantra", version, about = "Collect every yantra in order, then reach the exit")]
pub struct Cli {
    /// Search strategy: BFS or DFS.
    #[arg(short, long, default_value = "BFS")]
    pub strategy: String,

    /// Reject grids without exactly one start and exit, or whose yantras
    /// are not numbered 1..=M.
    #[arg(long)]
    pub strict: bool,

    /// Print the solution as JSON.
    #[arg(long)]
    pub json: bool,

    /// Grid file, one row per line, symbols separated by spaces.
    /// The built-in demo puzzle is used when omitted.
    pub grid: Option<PathBuf>,
}

/// Where the grid comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GridSource {
    #[default]
    Demo,
    File(PathBuf),
}

/// Validated run configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub strategy: Strategy,
    pub grid: GridSource,
    pub strict: bool,
    pub json: bool,
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        Ok(Self {
            strategy: cli.strategy.parse()?,
            grid: cli.grid.map_or(GridSource::Demo, GridSource::File),
            strict: cli.strict,
            json: cli.json,
        })
    }
}

impl Config {
    /// Read and parse the configured grid, validating it in strict mode.
    pub fn load_grid(&self) -> Result<Grid, ConfigError> {
        let grid = match &self.grid {
            GridSource::Demo => Grid::parse(DEMO_GRID)?,
            GridSource::File(path) => {
                let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                Grid::parse(&text)?
            }
        };
        if self.strict {
            grid.validate()?;
        }
        Ok(grid)
    }
}

/// Errors raised before any search runs.
#[derive(Debug)]
pub enum ConfigError {
    Strategy(StrategyError),
    Io { path: PathBuf, source: io::Error },
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strategy(e) => write!(f, "{e}"),
            Self::Io { path, source } => write!(f, "cannot read {}: {source}", path.display()),
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Strategy(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<StrategyError> for ConfigError {
    fn from(e: StrategyError) -> Self {
        Self::Strategy(e)
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
