use algofind_core::Point;

use crate::GridGraph;
use crate::cellmap::CellSet;
use crate::error::PathError;
use crate::order::NeighborOrder;
use crate::path::Parents;
use crate::registry::{Algorithm, Searcher};
use crate::result::SearchResult;

/// One level of the explicit depth-first stack: a cell and the neighbours
/// it had when it was entered.
struct Frame {
    pos: Point,
    neighbors: Vec<Point>,
    next: usize,
}

impl Frame {
    /// Next neighbour that has not been visited since this frame was built.
    fn next_unvisited(&mut self, visited: &CellSet) -> Option<Point> {
        while let Some(&n) = self.neighbors.get(self.next) {
            self.next += 1;
            if !visited.contains(n) {
                return Some(n);
            }
        }
        None
    }
}

impl GridGraph {
    /// Depth-first search from `start` to `end`.
    ///
    /// Always descends into the first unvisited neighbour and backtracks on
    /// dead ends, stopping the moment `end` is visited. The path found is
    /// some path, not necessarily a short one. Every visited cell counts as
    /// one explored node.
    pub fn depth_first<O: NeighborOrder + ?Sized>(
        &self,
        start: Point,
        end: Point,
        order: &mut O,
    ) -> Result<SearchResult, PathError> {
        self.check(start, "start")?;
        self.check(end, "end")?;

        let mut visited = CellSet::new(self.square());
        let mut parents = Parents::new(self.square());
        let mut trace = vec![start];
        visited.insert(start);
        parents.set_root(start);

        let mut found = start == end;
        let mut stack = Vec::new();
        if !found {
            stack.push(self.frame(start, &visited, order));
        }

        while !found {
            let Some(frame) = stack.last_mut() else {
                break;
            };
            let from = frame.pos;
            let Some(next) = frame.next_unvisited(&visited) else {
                stack.pop();
                continue;
            };

            visited.insert(next);
            trace.push(next);
            parents.link(next, from);

            if next == end {
                found = true;
            } else {
                stack.push(self.frame(next, &visited, order));
            }
        }

        let explored = trace.len();
        if !found {
            return Ok(SearchResult::exhausted(Algorithm::Dfs, trace, explored));
        }
        let path = parents.path_to(end);
        let cost = self.path_cost(&path);
        Ok(SearchResult::found(Algorithm::Dfs, path, trace, explored, cost))
    }

    fn frame<O: NeighborOrder + ?Sized>(&self, pos: Point, visited: &CellSet, order: &mut O) -> Frame {
        let mut neighbors = Vec::with_capacity(8);
        self.neighbors(pos, visited, &mut neighbors);
        order.arrange(&mut neighbors);
        Frame {
            pos,
            neighbors,
            next: 0,
        }
    }
}

/// [`Searcher`] running [`GridGraph::depth_first`].
#[derive(Debug, Default, Clone, Copy)]
pub struct DepthFirst;

impl Searcher for DepthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dfs
    }

    fn search_ordered(
        &self,
        graph: &GridGraph,
        start: Point,
        end: Point,
        order: &mut dyn NeighborOrder,
    ) -> Result<SearchResult, PathError> {
        graph.depth_first(start, end, order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{FixedOrder, ShuffledOrder};
    use algofind_core::Cell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn start_equals_end() {
        let g = GridGraph::new(3, &[], false).unwrap();
        let res = g.depth_first(Point::new(1, 1), Point::new(1, 1), &mut FixedOrder).unwrap();
        assert!(res.found);
        assert_eq!(res.path, vec![Point::new(1, 1)]);
        assert_eq!(res.visited, vec![Point::new(1, 1)]);
        assert_eq!(res.nodes_explored, 1);
    }

    #[test]
    fn follows_first_direction_eagerly() {
        // Direction order is +y first, so the search runs down column 0,
        // then along the bottom row.
        let g = GridGraph::new(3, &[], false).unwrap();
        let res = g.depth_first(Point::new(0, 0), Point::new(2, 2), &mut FixedOrder).unwrap();
        let expected = vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(0, 2),
            Point::new(1, 2),
            Point::new(2, 2),
        ];
        assert_eq!(res.path, expected);
        assert_eq!(res.visited, expected);
        assert_eq!(res.nodes_explored, 5);
        assert_eq!(res.cost, 4.0);
    }

    #[test]
    fn backtracks_out_of_dead_ends() {
        // Column 1 is blocked except at the top, so the first descent down
        // column 0 dead-ends and the search has to climb back up.
        let barriers = [Cell::new(1, 1), Cell::new(1, 2)];
        let g = GridGraph::new(3, &barriers, false).unwrap();
        let res = g.depth_first(Point::new(0, 0), Point::new(2, 2), &mut FixedOrder).unwrap();
        assert!(res.found);
        assert_eq!(
            res.visited,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(0, 2),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
        assert_eq!(
            res.path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2)
            ]
        );
        assert!(g.is_walkable(&res.path));
    }

    #[test]
    fn exhausts_reachable_region() {
        let barriers = [Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2)];
        let g = GridGraph::new(3, &barriers, false).unwrap();
        let res = g.depth_first(Point::new(0, 0), Point::new(2, 2), &mut FixedOrder).unwrap();
        assert!(!res.found);
        assert!(res.path.is_empty());
        assert_eq!(res.visited.len(), 6);
        assert_eq!(res.nodes_explored, 6);
        assert_eq!(res.cost, 0.0);
    }

    #[test]
    fn shuffled_order_still_finds_a_walkable_path() {
        let barriers = [Cell::new(2, 2), Cell::new(3, 1), Cell::new(1, 3)];
        let g = GridGraph::new(6, &barriers, true).unwrap();
        let (start, end) = (Point::new(0, 0), Point::new(5, 5));
        let run = |seed| {
            g.depth_first(start, end, &mut ShuffledOrder::new(StdRng::seed_from_u64(seed)))
                .unwrap()
        };
        let a = run(3);
        assert!(a.found);
        assert_eq!(a.path.first(), Some(&start));
        assert_eq!(a.path.last(), Some(&end));
        assert!(g.is_walkable(&a.path));
        assert_eq!(a, run(3));
    }

    #[test]
    fn rejects_out_of_bounds_points() {
        let g = GridGraph::new(3, &[], false).unwrap();
        assert!(matches!(
            g.depth_first(Point::new(3, 0), Point::new(0, 0), &mut FixedOrder),
            Err(PathError::OutOfBounds { role: "start", .. })
        ));
        assert!(matches!(
            g.depth_first(Point::new(0, 0), Point::new(0, -1), &mut FixedOrder),
            Err(PathError::OutOfBounds { role: "end", .. })
        ));
    }
}
