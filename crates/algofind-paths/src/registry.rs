//! Algorithm selectors and the static selector → implementation mapping.

use std::fmt;
use std::str::FromStr;

use algofind_core::Point;

use crate::astar::AStar;
use crate::bfs::BreadthFirst;
use crate::dfs::DepthFirst;
use crate::dijkstra::Dijkstra;
use crate::error::PathError;
use crate::graph::GridGraph;
use crate::order::{FixedOrder, NeighborOrder};
use crate::result::SearchResult;

/// One of the four supported search strategies.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Algorithm {
    Dfs,
    Bfs,
    Dijkstra,
    AStar,
}

impl Algorithm {
    /// Every selector, in listing order.
    pub const ALL: [Algorithm; 4] = [Self::Dfs, Self::Bfs, Self::Dijkstra, Self::AStar];

    /// Wire name of the selector.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dfs => "DFS",
            Self::Bfs => "BFS",
            Self::Dijkstra => "DIJKSTRA",
            Self::AStar => "A_STAR",
        }
    }

    /// Whether the strategy accounts for movement costs.
    pub const fn is_weighted(self) -> bool {
        matches!(self, Self::Dijkstra | Self::AStar)
    }

    /// The implementation registered for this selector.
    pub fn searcher(self) -> &'static dyn Searcher {
        match self {
            Self::Dfs => &DepthFirst,
            Self::Bfs => &BreadthFirst,
            Self::Dijkstra => &Dijkstra,
            Self::AStar => &AStar,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = PathError;

    /// Parse a selector name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PathError::UnknownAlgorithm(s.to_string()))
    }
}

/// Wire names of every registered algorithm.
pub fn available_algorithms() -> [&'static str; 4] {
    Algorithm::ALL.map(Algorithm::name)
}

/// Shared contract of the search strategies.
pub trait Searcher: Send + Sync {
    fn algorithm(&self) -> Algorithm;

    fn name(&self) -> &'static str {
        self.algorithm().name()
    }

    /// Search from `start` to `end` using the fixed neighbour order.
    fn search(&self, graph: &GridGraph, start: Point, end: Point) -> Result<SearchResult, PathError> {
        self.search_ordered(graph, start, end, &mut FixedOrder)
    }

    /// Search with an explicit neighbour ordering policy. Weighted searches
    /// ignore `order` and always break ties by insertion order.
    fn search_ordered(
        &self,
        graph: &GridGraph,
        start: Point,
        end: Point,
        order: &mut dyn NeighborOrder,
    ) -> Result<SearchResult, PathError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_selector_maps_to_its_implementation() {
        for algorithm in Algorithm::ALL {
            let searcher = algorithm.searcher();
            assert_eq!(searcher.algorithm(), algorithm);
            assert_eq!(searcher.name(), algorithm.name());
        }
    }

    #[test]
    fn parse_selector_names() {
        assert_eq!("A_STAR".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("dijkstra".parse::<Algorithm>(), Ok(Algorithm::Dijkstra));
        assert_eq!(" bfs ".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!(
            "GREEDY".parse::<Algorithm>(),
            Err(PathError::UnknownAlgorithm("GREEDY".into()))
        );
        let err = "GREEDY".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.to_string(), r#"unknown algorithm "GREEDY""#);
    }

    #[test]
    fn listing_order() {
        assert_eq!(available_algorithms(), ["DFS", "BFS", "DIJKSTRA", "A_STAR"]);
        assert!(!Algorithm::Bfs.is_weighted());
        assert!(Algorithm::AStar.is_weighted());
    }

    #[test]
    fn searcher_dispatch_runs_the_search() {
        let g = GridGraph::new(4, &[], false).unwrap();
        let res = Algorithm::Bfs
            .searcher()
            .search(&g, Point::new(0, 0), Point::new(3, 0))
            .unwrap();
        assert!(res.found);
        assert_eq!(res.algorithm, Algorithm::Bfs);
        assert_eq!(res.name(), "BFS");
        assert_eq!(res.edges(), 3);
    }
}
