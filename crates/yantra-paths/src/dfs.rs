use std::collections::VecDeque;

use yantra_core::Position;

use crate::search::{SearchOutcome, SearchState};
use crate::traits::Pather;

/// Depth-first search from `start` to `goal`.
///
/// The frontier is a stack whose head is the end of the vector. Neighbours
/// are pushed in reverse of the pather's order, so the first neighbour the
/// pather reports is the first one expanded. A neighbour is pushed only if
/// it is neither explored nor currently in the frontier; anything popped
/// that has already been explored is skipped without expansion.
///
/// The path follows the first recorded parent link of every position, so it
/// is valid but not necessarily shortest.
pub fn dfs<P: Pather + ?Sized>(pather: &P, start: Position, goal: Position) -> SearchOutcome {
    let mut st = SearchState::new(pather.range());
    let (Some(si), Some(gi)) = (st.idx(start), st.idx(goal)) else {
        return SearchOutcome::unreachable(0, 0);
    };

    let mut frontier: Vec<usize> = vec![si];
    st.enqueued(si);
    st.root(si);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = frontier.pop() {
        st.dequeued(ci);
        if st.is_visited(ci) {
            continue;
        }
        st.mark_visited(ci);

        if ci == gi {
            let mut path = VecDeque::new();
            for q in st.backtrack(gi) {
                path.push_front(q);
            }
            return SearchOutcome {
                path: Some(path.into()),
                frontier: frontier.len(),
                explored: st.explored(),
            };
        }

        nbuf.clear();
        pather.neighbors(st.point(ci), &mut nbuf);

        for &np in nbuf.iter().rev() {
            let Some(ni) = st.idx(np) else {
                continue;
            };
            if st.is_visited(ni) || st.is_queued(ni) {
                continue;
            }
            frontier.push(ni);
            st.enqueued(ni);
            st.link(ni, ci);
        }
    }

    SearchOutcome::unreachable(frontier.len(), st.explored())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs;
    use yantra_core::{Cell, Grid};

    const DEMO: &str = "
P . . # Y2
# T . # .
. . Y1 . .
# . . T .
. . . . E
";

    fn p(r: i32, c: i32) -> Position {
        Position::new(r, c)
    }

    fn assert_valid(grid: &Grid, path: &[Position], start: Position, goal: Position) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} not adjacent", w[0], w[1]);
        }
        for &q in path {
            assert!(grid.at(q).is_some_and(Cell::is_passable), "{q} is blocked");
        }
    }

    #[test]
    fn demo_legs() {
        let g = Grid::parse(DEMO).unwrap();

        let out = dfs(&g, p(0, 0), p(2, 2));
        assert_eq!(
            out.path,
            Some(vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)])
        );
        assert_eq!((out.frontier, out.explored), (0, 5));

        let out = dfs(&g, p(2, 2), p(0, 4));
        assert_eq!(
            out.path,
            Some(vec![p(2, 2), p(2, 3), p(2, 4), p(1, 4), p(0, 4)])
        );
        assert_eq!((out.frontier, out.explored), (3, 9));

        let out = dfs(&g, p(0, 4), p(4, 4));
        assert_eq!(
            out.path,
            Some(vec![p(0, 4), p(1, 4), p(2, 4), p(3, 4), p(4, 4)])
        );
        assert_eq!((out.frontier, out.explored), (1, 5));
    }

    #[test]
    fn descends_north_first() {
        // North is off the grid from the corner, so east wins over south.
        let g = Grid::parse(". . .\n. . .\n. . .").unwrap();
        let out = dfs(&g, p(0, 0), p(2, 2));
        assert_eq!(
            out.path,
            Some(vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)])
        );
        assert_eq!((out.frontier, out.explored), (2, 5));
    }

    #[test]
    fn explores_more_than_bfs_but_keeps_first_parent() {
        let g = Grid::parse(". . .\n. . .\n. . .").unwrap();
        let out = dfs(&g, p(2, 0), p(2, 1));
        // (2,1) was first discovered from the start, so the path is direct
        // even though the search wandered across the whole grid.
        assert_eq!(out.path, Some(vec![p(2, 0), p(2, 1)]));
        assert_eq!((out.frontier, out.explored), (0, 9));

        let shallow = bfs(&g, p(2, 0), p(2, 1));
        assert_eq!(shallow.path, out.path);
        assert_eq!((shallow.frontier, shallow.explored), (2, 3));
    }

    #[test]
    fn start_equals_goal() {
        let g = Grid::parse(DEMO).unwrap();
        let out = dfs(&g, p(4, 4), p(4, 4));
        assert_eq!(out.path, Some(vec![p(4, 4)]));
        assert_eq!((out.frontier, out.explored), (0, 1));
    }

    #[test]
    fn agrees_with_bfs_on_reachability() {
        let g = Grid::parse(DEMO).unwrap();
        for a in g.bounds() {
            if !g.at(a).unwrap().is_passable() {
                continue;
            }
            for b in g.bounds() {
                let deep = dfs(&g, a, b);
                let wide = bfs(&g, a, b);
                assert_eq!(deep.is_found(), wide.is_found(), "{a} -> {b}");
                if let Some(path) = deep.path.as_deref() {
                    assert_valid(&g, path, a, b);
                    assert!(path.len() >= wide.path.as_ref().unwrap().len());
                }
            }
        }
    }

    #[test]
    fn walled_off_goal_exhausts_frontier() {
        let g = Grid::parse("P . # .\n. . # Y1\n# # # .\n. . . E").unwrap();
        let out = dfs(&g, p(0, 0), p(1, 3));
        assert_eq!(out.path, None);
        assert_eq!((out.frontier, out.explored), (0, 4));
    }

    #[test]
    fn out_of_range_endpoints() {
        let g = Grid::parse("P E\n. .").unwrap();
        assert_eq!(dfs(&g, p(0, 0), p(2, 0)), SearchOutcome::unreachable(0, 0));
    }
}
