use std::time::Instant;

use algofind_paths::{FixedOrder, NeighborOrder};

use crate::config::ServiceConfig;
use crate::error::RequestError;
use crate::request::PathfindingRequest;
use crate::response::PathfindingResponse;

/// Validate `request`, run the selected search and attach its timing.
pub fn find_path(
    request: &PathfindingRequest,
    config: &ServiceConfig,
) -> Result<PathfindingResponse, RequestError> {
    if let Err(e) = request.validate(config) {
        log::warn!("rejecting {} request: {e}", request.algorithm);
        return Err(e);
    }

    let started = Instant::now();
    let graph = request.graph()?;
    let searcher = request.algorithm.searcher();
    // Weighted searches break ties by insertion order and never shuffle.
    let mut order: Box<dyn NeighborOrder> = if request.algorithm.is_weighted() {
        Box::new(FixedOrder)
    } else {
        config.neighbor_order()
    };
    let result = searcher.search_ordered(&graph, request.start.pos, request.end.pos, &mut *order)?;
    let elapsed = started.elapsed();

    log::info!(
        "{} on {}x{} grid: found={} path={} explored={} in {:?}",
        searcher.name(),
        request.grid_size,
        request.grid_size,
        result.found,
        result.path.len(),
        result.nodes_explored,
        elapsed
    );
    Ok(PathfindingResponse::assemble(result, elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use algofind_core::{Cell, Point};
    use algofind_paths::Algorithm;

    fn request(algorithm: Algorithm) -> PathfindingRequest {
        PathfindingRequest {
            grid_size: 3,
            start: Cell::new(0, 0),
            end: Cell::new(2, 2),
            barriers: Some(vec![Cell::new(1, 1).with_weight(5.0)]),
            algorithm,
            allow_diagonal: true,
        }
    }

    #[test]
    fn weighted_searches_avoid_the_penalty() {
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let resp = find_path(&request(algorithm), &ServiceConfig::default()).unwrap();
            assert!(resp.path_found);
            assert_eq!(resp.algorithm, algorithm);
            assert!(!resp.path.contains(&Point::new(1, 1)));
            assert_eq!(resp.path.len(), 4);
        }
    }

    #[test]
    fn every_algorithm_answers() {
        for algorithm in Algorithm::ALL {
            let resp = find_path(&request(algorithm), &ServiceConfig::default()).unwrap();
            assert!(resp.path_found, "{algorithm}");
            assert_eq!(resp.path.first(), Some(&Point::new(0, 0)));
            assert_eq!(resp.path.last(), Some(&Point::new(2, 2)));
            assert!(resp.nodes_explored >= 1);
        }
    }

    #[test]
    fn seeded_shuffle_is_repeatable() {
        let config = ServiceConfig {
            shuffle_neighbors: true,
            seed: Some(11),
            ..ServiceConfig::default()
        };
        let mut req = request(Algorithm::Dfs);
        req.grid_size = 8;
        req.end = Cell::new(7, 7);
        let a = find_path(&req, &config).unwrap();
        let b = find_path(&req, &config).unwrap();
        assert_eq!(a.path, b.path);
        assert_eq!(a.visited_path, b.visited_path);
    }

    #[test]
    fn shuffle_setting_leaves_weighted_searches_unchanged() {
        let shuffled = ServiceConfig {
            shuffle_neighbors: true,
            seed: Some(5),
            ..ServiceConfig::default()
        };
        for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_weighted()) {
            let mut req = request(algorithm);
            req.grid_size = 8;
            req.end = Cell::new(7, 7);
            let fixed = find_path(&req, &ServiceConfig::default()).unwrap();
            let res = find_path(&req, &shuffled).unwrap();
            assert_eq!(res.path, fixed.path, "{algorithm}");
            assert_eq!(res.visited_path, fixed.visited_path, "{algorithm}");
        }
    }

    #[test]
    fn invalid_request_is_rejected() {
        let mut req = request(Algorithm::Bfs);
        req.start = Cell::new(0, 3);
        assert!(matches!(
            find_path(&req, &ServiceConfig::default()),
            Err(RequestError::Path(_))
        ));
    }
}
