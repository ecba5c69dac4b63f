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
    /// Dijkstra's shortest path from `start` to `end`.
    ///
    /// Cells are closed in non-decreasing order of accumulated movement
    /// cost, so the returned path is cost-minimal. Equal costs are expanded
    /// in the order they were queued.
    pub fn dijkstra(&self, start: Point, end: Point) -> Result<SearchResult, PathError> {
        self.check(start, "start")?;
        self.check(end, "end")?;

        let mut open = OpenList::new();
        let mut cost = CellMap::new(self.square(), f64::INFINITY);
        let mut parents = Parents::new(self.square());
        let mut closed = CellSet::new(self.square());
        let mut trace = Vec::new();
        let mut nbuf = Vec::with_capacity(8);

        cost.set(start, 0.0);
        parents.set_root(start);
        open.push(start, 0.0);

        while let Some(current) = open.pop() {
            let cp = current.pos;
            // Stale entry for a cell closed at a lower cost.
            if !closed.insert(cp) {
                continue;
            }
            trace.push(cp);
            let current_g = current.priority;

            if cp == end {
                let path = parents.path_to(end);
                let explored = trace.len();
                return Ok(SearchResult::found(
                    Algorithm::Dijkstra,
                    path,
                    trace,
                    explored,
                    current_g,
                ));
            }

            nbuf.clear();
            self.neighbors(cp, &closed, &mut nbuf);

            for &np in nbuf.iter() {
                let candidate = current_g + self.movement_cost(cp, np);
                let known = cost.get(np).copied().unwrap_or(f64::INFINITY);
                if candidate < known {
                    cost.set(np, candidate);
                    parents.link(np, cp);
                    open.push(np, candidate);
                }
            }
        }

        let explored = trace.len();
        Ok(SearchResult::exhausted(Algorithm::Dijkstra, trace, explored))
    }
}

/// [`Searcher`] running [`GridGraph::dijkstra`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Searcher for Dijkstra {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Dijkstra
    }

    fn search_ordered(
        &self,
        graph: &GridGraph,
        start: Point,
        end: Point,
        _order: &mut dyn NeighborOrder,
    ) -> Result<SearchResult, PathError> {
        graph.dijkstra(start, end)
    }
}
