use std::time::Duration;

use algofind_core::Point;
use algofind_paths::{Algorithm, SearchResult};
use serde::{Deserialize, Serialize};

/// The answer to a [`PathfindingRequest`](crate::PathfindingRequest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathfindingResponse {
    pub path: Vec<Point>,
    pub visited_path: Vec<Point>,
    pub nodes_explored: usize,
    pub execution_time_ms: u64,
    pub path_found: bool,
    pub algorithm: Algorithm,
    pub path_cost: f64,
}

impl PathfindingResponse {
    /// Wrap a search result with the time it took.
    pub fn assemble(result: SearchResult, elapsed: Duration) -> Self {
        Self {
            path: result.path,
            visited_path: result.visited,
            nodes_explored: result.nodes_explored,
            execution_time_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            path_found: result.found,
            algorithm: result.algorithm,
            path_cost: result.cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use algofind_paths::GridGraph;

    #[test]
    fn camel_case_wire_names() {
        let g = GridGraph::new(3, &[], false).unwrap();
        let result = g.breadth_first(Point::new(0, 0), Point::new(0, 2), &mut algofind_paths::FixedOrder).unwrap();
        let resp = PathfindingResponse::assemble(result, Duration::from_micros(2_500));
        assert_eq!(resp.execution_time_ms, 2);

        let json: serde_json::Value = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["algorithm"], "BFS");
        assert_eq!(json["pathFound"], true);
        assert_eq!(json["pathCost"], 2.0);
        assert_eq!(json["executionTimeMs"], 2);
        assert_eq!(json["path"][2], serde_json::json!({"x": 0, "y": 2}));
        assert!(json["visitedPath"].as_array().is_some_and(|v| !v.is_empty()));
        assert!(json["nodesExplored"].as_u64().is_some_and(|n| n >= 1));
    }
}
