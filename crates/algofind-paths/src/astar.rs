use algofind_core::Point;

use crate::GridGraph;
use crate::cellmap::{CellMap, CellSet};
use crate::error::PathError;
use crate::order::NeighborOrder;
use crate::path::Parents;
use crate::queue::OpenList;
use crate::registry::{Algorithm, Searcher};
use crate::result::SearchResult;

impl GridGraph {
    /// Compute the cheapest path from `start` to `end` using A*.
    ///
    /// The open list is ordered by cost so far plus
    /// [`estimate`](Self::estimate), which never overestimates, so the path
    /// is as cheap as the one [`dijkstra`](Self::dijkstra) finds while
    /// usually closing fewer cells.
    pub fn astar(&self, start: Point, end: Point) -> Result<SearchResult, PathError> {
        self.check(start, "start")?;
        self.check(end, "end")?;

        let mut open = OpenList::new();
        let mut g = CellMap::new(self.square(), f64::INFINITY);
        let mut parents = Parents::new(self.square());
        let mut closed = CellSet::new(self.square());
        let mut trace = Vec::new();
        let mut nbuf = Vec::with_capacity(8);

        g.set(start, 0.0);
        parents.set_root(start);
        open.push(start, self.estimate(start, end));

        while let Some(current) = open.pop() {
            let cp = current.pos;
            // Skip stale entries.
            if !closed.insert(cp) {
                continue;
            }
            trace.push(cp);
            let current_g = g.get(cp).copied().unwrap_or(f64::INFINITY);
            log::trace!("A_STAR: closing {cp} g={current_g:.3} f={:.3}", current.priority);

            if cp == end {
                let path = parents.path_to(end);
                let explored = trace.len();
                return Ok(SearchResult::found(
                    Algorithm::AStar,
                    path,
                    trace,
                    explored,
                    current_g,
                ));
            }

            nbuf.clear();
            self.neighbors(cp, &closed, &mut nbuf);

            for &np in nbuf.iter() {
                let tentative_g = current_g + self.movement_cost(cp, np);
                if tentative_g >= g.get(np).copied().unwrap_or(f64::INFINITY) {
                    continue;
                }
                g.set(np, tentative_g);
                parents.link(np, cp);
                open.push(np, tentative_g + self.estimate(np, end));
            }
        }

        let explored = trace.len();
        Ok(SearchResult::exhausted(Algorithm::AStar, trace, explored))
    }
}

/// [`Searcher`] running [`GridGraph::astar`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar;

impl Searcher for AStar {
    fn algorithm(&self) -> Algorithm {
        Algorithm::AStar
    }

    fn search_ordered(
        &self,
        graph: &GridGraph,
        start: Point,
        end: Point,
        _order: &mut dyn NeighborOrder,
    ) -> Result<SearchResult, PathError> {
        graph.astar(start, end)
    }
}
