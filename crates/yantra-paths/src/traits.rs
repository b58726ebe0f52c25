use yantra_core::{Grid, Position, Range};

/// Minimal search interface — a bounded area plus neighbour enumeration.
pub trait Pather {
    /// The rectangle every searched position lies in.
    fn range(&self) -> Range;

    /// Append neighbours of `p` into `buf`, in the order they should be
    /// expanded. The caller clears `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);
}

impl Pather for Grid {
    fn range(&self) -> Range {
        self.bounds()
    }

    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        buf.extend(self.passable_neighbors(p));
    }
}
