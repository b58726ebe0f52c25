//! Geometry primitives: [`Position`] and [`Range`].
//!
//! Positions are `(row, col)` pairs, 0-indexed, with rows growing downwards.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A grid coordinate. `row` grows down, `col` grows right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Cardinal step deltas in neighbour evaluation order: north, east,
    /// south, west.
    pub const CARDINAL: [Position; 4] = [
        Position::new(-1, 0),
        Position::new(0, 1),
        Position::new(1, 0),
        Position::new(0, -1),
    ];

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The four cardinal neighbours, in the order north, east, south, west.
    ///
    /// Depth-first search relies on this order for tie-breaking, so it must
    /// not change.
    #[inline]
    pub fn neighbors_4(self) -> [Position; 4] {
        Self::CARDINAL.map(|d| self + d)
    }

    /// Whether `other` is exactly one cardinal step away.
    #[inline]
    pub fn is_adjacent(self, other: Position) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

// --- trait impls for Position ---

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Add for Position {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Position,
    pub max: Position,
}

impl Range {
    /// Create a new range from two corners and auto-canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(r0: i32, c0: i32, r1: i32, c1: i32) -> Self {
        Self {
            min: Position::new(r0.min(r1), c0.min(c1)),
            max: Position::new(r0.max(r1), c0.max(c1)),
        }
    }

    /// The `n`×`n` range anchored at the origin.
    #[inline]
    pub fn square(n: i32) -> Self {
        Self::new(0, 0, n, n)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(self) -> i32 {
        self.max.row - self.min.row
    }

    /// Number of columns.
    #[inline]
    pub fn cols(self) -> i32 {
        self.max.col - self.min.col
    }

    /// Number of positions in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.rows() as usize * self.cols() as usize
        }
    }

    /// Whether the range contains no positions.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows() <= 0 || self.cols() <= 0
    }

    /// Whether `p` lies inside the range.
    #[inline]
    pub fn contains(self, p: Position) -> bool {
        p.row >= self.min.row && p.row < self.max.row && p.col >= self.min.col && p.col < self.max.col
    }

    /// Iterate over every position in row-major order.
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: self.min,
        }
    }
}

impl IntoIterator for Range {
    type Item = Position;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

/// Row-major iterator over a [`Range`].
pub struct RangeIter {
    range: Range,
    next: Position,
}

impl Iterator for RangeIter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.range.is_empty() || self.next.row >= self.range.max.row {
            return None;
        }
        let p = self.next;
        self.next.col += 1;
        if self.next.col >= self.range.max.col {
            self.next.col = self.range.min.col;
            self.next.row += 1;
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.range.is_empty() || self.next.row >= self.range.max.row {
            return (0, Some(0));
        }
        let full_rows = (self.range.max.row - self.next.row - 1) as usize;
        let rest = (self.range.max.col - self.next.col) as usize;
        let n = full_rows * self.range.cols() as usize + rest;
        (n, Some(n))
    }
}

impl ExactSizeIterator for RangeIter {}
