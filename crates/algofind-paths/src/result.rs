use algofind_core::Point;

use crate::registry::Algorithm;

/// Outcome of a single search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub algorithm: Algorithm,
    /// Whether `end` was reached.
    pub found: bool,
    /// Cells from start to end inclusive; empty when not found.
    pub path: Vec<Point>,
    /// Cells in the order the search visited them.
    pub visited: Vec<Point>,
    pub nodes_explored: usize,
    /// Total movement cost of `path`; `0.0` when not found.
    pub cost: f64,
}

impl SearchResult {
    pub(crate) fn found(
        algorithm: Algorithm,
        path: Vec<Point>,
        visited: Vec<Point>,
        nodes_explored: usize,
        cost: f64,
    ) -> Self {
        log::debug!(
            "{algorithm}: path of {} cells (cost {cost:.3}) after exploring {nodes_explored} nodes",
            path.len()
        );
        Self {
            algorithm,
            found: true,
            path,
            visited,
            nodes_explored,
            cost,
        }
    }

    pub(crate) fn exhausted(algorithm: Algorithm, visited: Vec<Point>, nodes_explored: usize) -> Self {
        log::debug!("{algorithm}: no path after exploring {nodes_explored} nodes");
        Self {
            algorithm,
            found: false,
            path: Vec::new(),
            visited,
            nodes_explored,
            cost: 0.0,
        }
    }

    /// Selector name of the algorithm that produced this result.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Number of steps in the path.
    #[inline]
    pub fn edges(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
