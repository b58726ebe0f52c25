use std::collections::VecDeque;

use yantra_core::Position;

use crate::search::{SearchOutcome, SearchState};
use crate::traits::Pather;

/// Breadth-first search from `start` to `goal`.
///
/// The frontier is a FIFO queue. A position counts as explored when it is
/// dequeued, and a neighbour is enqueued only if it is neither explored nor
/// already waiting in the frontier. The returned path is therefore a
/// shortest one in step count.
///
/// A `start` or `goal` outside the pather's range is unreachable with zero
/// counts.
pub fn bfs<P: Pather + ?Sized>(pather: &P, start: Position, goal: Position) -> SearchOutcome {
    let mut st = SearchState::new(pather.range());
    let (Some(si), Some(gi)) = (st.idx(start), st.idx(goal)) else {
        return SearchOutcome::unreachable(0, 0);
    };

    let mut frontier: VecDeque<usize> = VecDeque::new();
    frontier.push_back(si);
    st.enqueued(si);
    st.root(si);

    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = frontier.pop_front() {
        st.dequeued(ci);
        st.mark_visited(ci);

        if ci == gi {
            let mut path: Vec<Position> = st.backtrack(gi).collect();
            path.reverse();
            return SearchOutcome {
                path: Some(path),
                frontier: frontier.len(),
                explored: st.explored(),
            };
        }

        nbuf.clear();
        pather.neighbors(st.point(ci), &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = st.idx(np) else {
                continue;
            };
            if st.is_visited(ni) || st.is_queued(ni) {
                continue;
            }
            frontier.push_back(ni);
            st.enqueued(ni);
            st.link(ni, ci);
        }
    }

    SearchOutcome::unreachable(frontier.len(), st.explored())
}

#[cfg(test)]
mod tests {
    use super::*;
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
    fn demo_first_leg() {
        let g = Grid::parse(DEMO).unwrap();
        let out = bfs(&g, p(0, 0), p(2, 2));
        assert_eq!(
            out.path,
            Some(vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)])
        );
        assert_eq!(out.frontier, 0);
        assert_eq!(out.explored, 5);
    }

    #[test]
    fn demo_second_leg() {
        let g = Grid::parse(DEMO).unwrap();
        let out = bfs(&g, p(2, 2), p(0, 4));
        assert_eq!(
            out.path,
            Some(vec![p(2, 2), p(2, 3), p(2, 4), p(1, 4), p(0, 4)])
        );
        assert_eq!(out.frontier, 2);
        assert_eq!(out.explored, 17);
    }

    #[test]
    fn demo_third_leg() {
        let g = Grid::parse(DEMO).unwrap();
        let out = bfs(&g, p(0, 4), p(4, 4));
        assert_eq!(
            out.path,
            Some(vec![p(0, 4), p(1, 4), p(2, 4), p(3, 4), p(4, 4)])
        );
        assert_eq!(out.frontier, 1);
        assert_eq!(out.explored, 6);
    }

    #[test]
    fn start_equals_goal() {
        let g = Grid::parse(DEMO).unwrap();
        let out = bfs(&g, p(2, 2), p(2, 2));
        assert_eq!(out.path, Some(vec![p(2, 2)]));
        assert_eq!(out.frontier, 0);
        assert_eq!(out.explored, 1);
    }

    #[test]
    fn open_grid_counts() {
        let g = Grid::parse(". . .\n. . .\n. . .").unwrap();
        let out = bfs(&g, p(0, 0), p(2, 2));
        assert_eq!(
            out.path,
            Some(vec![p(0, 0), p(0, 1), p(0, 2), p(1, 2), p(2, 2)])
        );
        assert_eq!(out.frontier, 0);
        assert_eq!(out.explored, 9);

        let out = bfs(&g, p(2, 0), p(2, 1));
        assert_eq!(out.path, Some(vec![p(2, 0), p(2, 1)]));
        assert_eq!(out.frontier, 2);
        assert_eq!(out.explored, 3);
    }

    #[test]
    fn shortest_paths() {
        // Known shortest step counts around obstacles.
        let cases = [
            ("P . .\n# # .\nE . .", p(0, 0), p(2, 0), 6),
            ("P # .\n. # .\n. . E", p(0, 0), p(2, 2), 4),
            ("P . . .\n. # # .\n. T . .\n. . . E", p(0, 0), p(3, 3), 6),
            ("P . . .\n# # # .\n. . . .\n. # # #\n", p(0, 0), p(2, 0), 8),
        ];
        for (text, start, goal, steps) in cases {
            let g = Grid::parse(text).unwrap();
            let out = bfs(&g, start, goal);
            assert_eq!(out.steps(), Some(steps), "{text}");
            assert_valid(&g, out.path.as_deref().unwrap(), start, goal);
        }
    }

    #[test]
    fn every_reachable_pair_is_valid() {
        let g = Grid::parse(DEMO).unwrap();
        for a in g.bounds() {
            if !g.at(a).unwrap().is_passable() {
                continue;
            }
            for b in g.bounds() {
                let out = bfs(&g, a, b);
                if let Some(path) = out.path.as_deref() {
                    assert_valid(&g, path, a, b);
                }
            }
        }
    }

    #[test]
    fn walled_off_goal_exhausts_frontier() {
        let g = Grid::parse("P . # .\n. . # Y1\n# # # .\n. . . E").unwrap();
        let out = bfs(&g, p(0, 0), p(1, 3));
        assert_eq!(out.path, None);
        assert_eq!(out.frontier, 0);
        assert_eq!(out.explored, 4);
    }

    #[test]
    fn trap_blocks_like_wall() {
        let g = Grid::parse("P T\nT E").unwrap();
        let out = bfs(&g, p(0, 0), p(1, 1));
        assert_eq!(out.path, None);
        assert_eq!(out.explored, 1);
    }

    #[test]
    fn out_of_range_endpoints() {
        let g = Grid::parse("P E\n. .").unwrap();
        assert_eq!(bfs(&g, p(0, 0), p(5, 5)), SearchOutcome::unreachable(0, 0));
        assert_eq!(bfs(&g, p(-1, 0), p(0, 1)), SearchOutcome::unreachable(0, 0));
    }
}
