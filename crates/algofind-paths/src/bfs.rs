use std::collections::VecDeque;

use algofind_core::Point;

use crate::GridGraph;
use crate::cellmap::CellSet;
use crate::error::PathError;
use crate::order::NeighborOrder;
use crate::path::Parents;
use crate::registry::{Algorithm, Searcher};
use crate::result::SearchResult;

impl GridGraph {
    /// Breadth-first search from `start` to `end`.
    ///
    /// Cells are marked visited, linked to their parent and appended to the
    /// trace when they are enqueued, so no cell is queued twice. Explored
    /// nodes are counted as they are dequeued. The returned path has the
    /// fewest steps; movement costs are ignored when choosing it.
    pub fn breadth_first<O: NeighborOrder + ?Sized>(
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
        let mut queue = VecDeque::from([start]);
        visited.insert(start);
        parents.set_root(start);

        let mut explored = 0;
        let mut nbuf = Vec::with_capacity(8);

        while let Some(current) = queue.pop_front() {
            explored += 1;

            if current == end {
                let path = parents.path_to(end);
                let cost = self.path_cost(&path);
                return Ok(SearchResult::found(Algorithm::Bfs, path, trace, explored, cost));
            }

            nbuf.clear();
            self.neighbors(current, &visited, &mut nbuf);
            order.arrange(&mut nbuf);

            for &np in nbuf.iter() {
                visited.insert(np);
                trace.push(np);
                parents.link(np, current);
                queue.push_back(np);
            }
        }

        Ok(SearchResult::exhausted(Algorithm::Bfs, trace, explored))
    }
}

/// [`Searcher`] running [`GridGraph::breadth_first`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BreadthFirst;

impl Searcher for BreadthFirst {
    fn algorithm(&self) -> Algorithm {
        Algorithm::Bfs
    }

    fn search_ordered(
        &self,
        graph: &GridGraph,
        start: Point,
        end: Point,
        order: &mut dyn NeighborOrder,
    ) -> Result<SearchResult, PathError> {
        graph.breadth_first(start, end, order)
    }
}
