//! The [`Cell`] type: a single puzzle symbol, parsed once at load time.

use std::fmt;
use std::str::FromStr;

/// A grid cell.
///
/// Symbols are parsed into this tagged form when a grid is built, so search
/// code never has to re-inspect strings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// `.`
    #[default]
    Free,
    /// `#`
    Wall,
    /// `T`
    Trap,
    /// `P`, the player's starting cell.
    Start,
    /// `E`
    Exit,
    /// `Y<k>`, yantra number `k`.
    Yantra(u32),
}

impl Cell {
    /// Whether a path may pass through this cell. Walls and traps block.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall | Self::Trap)
    }

    /// The yantra index, if this cell holds one.
    #[inline]
    pub const fn yantra_index(self) -> Option<u32> {
        match self {
            Self::Yantra(k) => Some(k),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Free => f.write_str("."),
            Self::Wall => f.write_str("#"),
            Self::Trap => f.write_str("T"),
            Self::Start => f.write_str("P"),
            Self::Exit => f.write_str("E"),
            Self::Yantra(k) => write!(f, "Y{k}"),
        }
    }
}

impl FromStr for Cell {
    type Err = CellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "." => Ok(Self::Free),
            "#" => Ok(Self::Wall),
            "T" => Ok(Self::Trap),
            "P" => Ok(Self::Start),
            "E" => Ok(Self::Exit),
            _ => match s.strip_prefix('Y') {
                Some(digits) if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) => digits
                    .parse()
                    .map(Self::Yantra)
                    .map_err(|_| CellError(s.to_string())),
                _ => Err(CellError(s.to_string())),
            },
        }
    }
}

/// An unrecognised cell symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellError(pub String);

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown cell symbol \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for CellError {}
