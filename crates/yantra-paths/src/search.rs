use yantra_core::{Position, Range};

/// Result of a single search call.
///
/// `frontier` and `explored` are reported whether or not the goal was
/// found; on failure they describe the exhausted search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// Start-to-goal path including both endpoints, or `None` if the goal
    /// was unreachable.
    pub path: Option<Vec<Position>>,
    /// Frontier size when the search stopped.
    pub frontier: usize,
    /// Number of positions expanded.
    pub explored: usize,
}

impl SearchOutcome {
    pub(crate) fn unreachable(frontier: usize, explored: usize) -> Self {
        Self {
            path: None,
            frontier,
            explored,
        }
    }

    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of steps (edges) in the path, if one was found.
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }
}

// ---------------------------------------------------------------------------
// Per-call search state
// ---------------------------------------------------------------------------

const NO_PARENT: usize = usize::MAX;

/// Bookkeeping for one search invocation: explored flags, frontier
/// membership and parent links, all indexed by flat position index.
///
/// Built fresh by every call and dropped when it returns.
pub(crate) struct SearchState {
    rng: Range,
    width: usize,
    visited: Vec<bool>,
    explored: usize,
    // Number of copies of each position currently in the frontier.
    queued: Vec<u32>,
    parent: Vec<usize>,
    linked: Vec<bool>,
}

impl SearchState {
    pub(crate) fn new(rng: Range) -> Self {
        let len = rng.len();
        Self {
            rng,
            width: rng.cols().max(0) as usize,
            visited: vec![false; len],
            explored: 0,
            queued: vec![0; len],
            parent: vec![NO_PARENT; len],
            linked: vec![false; len],
        }
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Position` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Position) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let c = (p.col - self.rng.min.col) as usize;
        let r = (p.row - self.rng.min.row) as usize;
        Some(r * self.width + c)
    }

    /// Convert a flat index back to a `Position`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Position {
        let c = (idx % self.width) as i32 + self.rng.min.col;
        let r = (idx / self.width) as i32 + self.rng.min.row;
        Position::new(r, c)
    }

    // -----------------------------------------------------------------------
    // Explored set
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn is_visited(&self, i: usize) -> bool {
        self.visited[i]
    }

    #[inline]
    pub(crate) fn mark_visited(&mut self, i: usize) {
        if !self.visited[i] {
            self.visited[i] = true;
            self.explored += 1;
        }
    }

    #[inline]
    pub(crate) fn explored(&self) -> usize {
        self.explored
    }

    // -----------------------------------------------------------------------
    // Frontier membership
    // -----------------------------------------------------------------------

    #[inline]
    pub(crate) fn is_queued(&self, i: usize) -> bool {
        self.queued[i] > 0
    }

    #[inline]
    pub(crate) fn enqueued(&mut self, i: usize) {
        self.queued[i] += 1;
    }

    #[inline]
    pub(crate) fn dequeued(&mut self, i: usize) {
        self.queued[i] = self.queued[i].saturating_sub(1);
    }

    // -----------------------------------------------------------------------
    // Parent links
    // -----------------------------------------------------------------------

    /// Record the search root. It never receives a parent.
    #[inline]
    pub(crate) fn root(&mut self, i: usize) {
        self.linked[i] = true;
    }

    /// Record that `child` was discovered from `parent`. The first link
    /// recorded for a position is the one kept.
    #[inline]
    pub(crate) fn link(&mut self, child: usize, parent: usize) {
        if !self.linked[child] {
            self.linked[child] = true;
            self.parent[child] = parent;
        }
    }

    /// Walk parent links from `goal` back to the root, yielding positions
    /// goal first.
    pub(crate) fn backtrack(&self, goal: usize) -> impl Iterator<Item = Position> + '_ {
        std::iter::successors(Some(goal), |&i| match self.parent[i] {
            NO_PARENT => None,
            p => Some(p),
        })
        .map(|i| self.point(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idx_point_round_trip() {
        let st = SearchState::new(Range::square(4));
        for p in Range::square(4) {
            let i = st.idx(p).unwrap();
            assert_eq!(st.point(i), p);
        }
        assert_eq!(st.idx(Position::new(4, 0)), None);
        assert_eq!(st.idx(Position::new(0, -1)), None);
    }

    #[test]
    fn first_link_wins() {
        let mut st = SearchState::new(Range::square(3));
        st.root(0);
        st.link(1, 0);
        st.link(4, 1);
        st.link(4, 3);
        let back: Vec<_> = st.backtrack(4).collect();
        assert_eq!(back, vec![Position::new(1, 1), Position::new(0, 1), Position::new(0, 0)]);
    }

    #[test]
    fn root_is_never_relinked() {
        let mut st = SearchState::new(Range::square(2));
        st.root(0);
        st.link(0, 1);
        assert_eq!(st.backtrack(0).count(), 1);
    }

    #[test]
    fn explored_counts_distinct_positions() {
        let mut st = SearchState::new(Range::square(2));
        st.mark_visited(0);
        st.mark_visited(0);
        st.mark_visited(3);
        assert_eq!(st.explored(), 2);
        assert!(st.is_visited(3));
        assert!(!st.is_visited(1));
    }

    #[test]
    fn frontier_membership_counts_copies() {
        let mut st = SearchState::new(Range::square(2));
        st.enqueued(2);
        st.enqueued(2);
        st.dequeued(2);
        assert!(st.is_queued(2));
        st.dequeued(2);
        assert!(!st.is_queued(2));
    }

    #[test]
    fn outcome_steps() {
        let found = SearchOutcome {
            path: Some(vec![Position::new(0, 0), Position::new(0, 1)]),
            frontier: 0,
            explored: 2,
        };
        assert!(found.is_found());
        assert_eq!(found.steps(), Some(1));
        let lost = SearchOutcome::unreachable(0, 4);
        assert!(!lost.is_found());
        assert_eq!(lost.steps(), None);
    }
}
