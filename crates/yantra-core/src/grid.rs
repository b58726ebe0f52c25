//! The immutable puzzle grid and its yantra registry.
//!
//! A [`Grid`] is a square matrix of [`Cell`]s built once from symbol text
//! and never mutated afterwards. [`Grid::find_all_yantras`] produces the
//! [`YantraRegistry`] the goal controller walks through.

use std::collections::BTreeMap;
use std::fmt;

use crate::cell::Cell;
use crate::geom::{Position, Range};

/// A square grid of puzzle cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    bounds: Range,
}

impl Grid {
    /// Build a grid from rows of cells.
    ///
    /// The grid must be non-empty and square: every row must be as long as
    /// there are rows.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let n = rows.len();
        if n == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(n * n);
        for (row, line) in rows.into_iter().enumerate() {
            if line.len() != n {
                return Err(GridError::NotSquare {
                    row,
                    len: line.len(),
                    expected: n,
                });
            }
            cells.extend(line);
        }
        Ok(Self {
            cells,
            bounds: Range::square(n as i32),
        })
    }

    /// Build a grid from rows of symbol strings such as `"P"`, `"#"` or
    /// `"Y2"`.
    pub fn from_symbols<R: AsRef<[S]>, S: AsRef<str>>(rows: &[R]) -> Result<Self, GridError> {
        let mut parsed = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            let mut line = Vec::with_capacity(row.as_ref().len());
            for (c, sym) in row.as_ref().iter().enumerate() {
                let sym = sym.as_ref();
                let cell = sym.parse::<Cell>().map_err(|_| GridError::InvalidSymbol {
                    symbol: sym.to_string(),
                    pos: Position::new(r as i32, c as i32),
                })?;
                line.push(cell);
            }
            parsed.push(line);
        }
        Self::new(parsed)
    }

    /// Parse a grid from text: one row per line, symbols separated by
    /// whitespace. Blank lines and surrounding whitespace are ignored.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let rows: Vec<Vec<&str>> = s
            .trim()
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| l.split_whitespace().collect())
            .collect();
        Self::from_symbols(&rows)
    }

    /// Side length of the grid.
    pub fn size(&self) -> i32 {
        self.bounds.rows()
    }

    /// The bounding range of the grid.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether the grid contains the given position.
    pub fn contains(&self, p: Position) -> bool {
        self.bounds.contains(p)
    }

    /// Get the cell at a position, or `None` if out of bounds.
    pub fn at(&self, p: Position) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        Some(self.cells[self.index(p)])
    }

    /// Iterate over `(Position, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Position of the first cell equal to `cell`, scanning row-major.
    ///
    /// Only meaningful for cells expected to be unique, like [`Cell::Start`].
    pub fn find_position(&self, cell: Cell) -> Option<Position> {
        self.iter().find(|&(_, c)| c == cell).map(|(p, _)| p)
    }

    /// Scan the grid once, recording every yantra and the exit.
    ///
    /// A later cell overwrites an earlier one with the same yantra index,
    /// and the last exit in row-major order is the one kept. A grid without
    /// an exit yields a registry whose [`exit`](YantraRegistry::exit) is
    /// `None`.
    pub fn find_all_yantras(&self) -> YantraRegistry {
        let mut reg = YantraRegistry::default();
        for (p, c) in self.iter() {
            if let Some(k) = c.yantra_index() {
                reg.yantras.insert(k, p);
            } else if c == Cell::Exit {
                reg.exit = Some(p);
            }
        }
        reg
    }

    /// Passable 4-connected neighbours of `p`, in the order north, east,
    /// south, west.
    pub fn passable_neighbors(&self, p: Position) -> impl Iterator<Item = Position> + '_ {
        p.neighbors_4()
            .into_iter()
            .filter(|&n| self.at(n).is_some_and(Cell::is_passable))
    }

    /// Collected form of [`passable_neighbors`](Self::passable_neighbors).
    pub fn get_neighbors(&self, p: Position) -> Vec<Position> {
        self.passable_neighbors(p).collect()
    }

    /// Check the structural invariants a well-formed puzzle satisfies:
    /// exactly one start, exactly one exit, and yantra indices that are
    /// unique and run `1..=M` without gaps.
    ///
    /// Construction never calls this; callers that skip it get the lenient
    /// behaviour of the registry and the controller instead.
    pub fn validate(&self) -> Result<(), GridError> {
        let mut starts = 0;
        let mut exits = 0;
        let mut seen: BTreeMap<u32, usize> = BTreeMap::new();
        for (_, c) in self.iter() {
            match c {
                Cell::Start => starts += 1,
                Cell::Exit => exits += 1,
                Cell::Yantra(k) => *seen.entry(k).or_default() += 1,
                _ => {}
            }
        }
        match starts {
            0 => return Err(GridError::MissingStart),
            1 => {}
            _ => return Err(GridError::DuplicateStart),
        }
        match exits {
            0 => return Err(GridError::MissingExit),
            1 => {}
            _ => return Err(GridError::DuplicateExit),
        }
        if let Some((&index, _)) = seen.iter().find(|&(_, &n)| n > 1) {
            return Err(GridError::DuplicateYantra { index });
        }
        let m = seen.len() as u32;
        if let Some(missing) = (1..=m).find(|k| !seen.contains_key(k)) {
            return Err(GridError::YantraGap { missing });
        }
        Ok(())
    }

    #[inline]
    fn index(&self, p: Position) -> usize {
        let n = self.bounds.cols();
        ((p.row - self.bounds.min.row) * n + (p.col - self.bounds.min.col)) as usize
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size() as usize;
        for (i, c) in self.cells.iter().enumerate() {
            write!(f, "{c}")?;
            if (i + 1) % n == 0 {
                writeln!(f)?;
            } else {
                f.write_str(" ")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// YantraRegistry
// ---------------------------------------------------------------------------

/// Yantra index → position, plus the exit found during the same scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YantraRegistry {
    yantras: BTreeMap<u32, Position>,
    exit: Option<Position>,
}

impl YantraRegistry {
    /// Position of yantra `index`.
    pub fn get(&self, index: u32) -> Option<Position> {
        self.yantras.get(&index).copied()
    }

    /// Whether yantra `index` exists.
    pub fn contains(&self, index: u32) -> bool {
        self.yantras.contains_key(&index)
    }

    /// Number of distinct yantra indices.
    pub fn len(&self) -> usize {
        self.yantras.len()
    }

    pub fn is_empty(&self) -> bool {
        self.yantras.is_empty()
    }

    /// The exit position, if the grid had one.
    pub fn exit(&self) -> Option<Position> {
        self.exit
    }

    /// Iterate over `(index, position)` in increasing index order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Position)> + '_ {
        self.yantras.iter().map(|(&k, &p)| (k, p))
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when building or validating a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid has no rows.
    Empty,
    /// A row's length differs from the number of rows.
    NotSquare { row: usize, len: usize, expected: usize },
    /// A symbol could not be parsed as a cell.
    InvalidSymbol { symbol: String, pos: Position },
    MissingStart,
    DuplicateStart,
    MissingExit,
    DuplicateExit,
    /// The same yantra index appears more than once.
    DuplicateYantra { index: u32 },
    /// Yantra indices do not run contiguously from 1.
    YantraGap { missing: u32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid: no rows"),
            Self::NotSquare { row, len, expected } => {
                write!(f, "grid: row {row} has {len} cells, expected {expected}")
            }
            Self::InvalidSymbol { symbol, pos } => {
                write!(f, "grid contains invalid symbol \u{201c}{symbol}\u{201d} at {pos}")
            }
            Self::MissingStart => write!(f, "grid: no start cell (P)"),
            Self::DuplicateStart => write!(f, "grid: more than one start cell (P)"),
            Self::MissingExit => write!(f, "grid: no exit cell (E)"),
            Self::DuplicateExit => write!(f, "grid: more than one exit cell (E)"),
            Self::DuplicateYantra { index } => write!(f, "grid: yantra Y{index} appears more than once"),
            Self::YantraGap { missing } => write!(f, "grid: yantra Y{missing} is missing from the sequence"),
        }
    }
}

impl std::error::Error for GridError {}
