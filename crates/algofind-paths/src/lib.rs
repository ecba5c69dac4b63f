//! Pathfinding on square grids with weighted barriers.
//!
//! A [`GridGraph`] describes one query's grid: its side length, whether
//! diagonal steps are allowed, and the barrier cells. Four searches run over
//! it and all return a [`SearchResult`] holding the path, the order in which
//! cells were visited and how many nodes were explored:
//!
//! - **Depth-first** ([`GridGraph::depth_first`]) finds some path, not a short one
//! - **Breadth-first** ([`GridGraph::breadth_first`]) finds the path with fewest steps
//! - **Dijkstra** ([`GridGraph::dijkstra`]) finds the cheapest path
//! - **A\*** ([`GridGraph::astar`]) finds the cheapest path, guided by
//!   [`GridGraph::estimate`]
//!
//! [`Algorithm::searcher`] maps a selector to its [`Searcher`] so callers can
//! pick a strategy at runtime.
//!
//! # Costs
//!
//! | Step | Cost |
//! |---|---|
//! | orthogonal | `1` |
//! | diagonal | `sqrt(2)` |
//! | onto a barrier with weight `w > 0` | base cost `+ w` |
//! | onto a barrier with weight `w <= 0` | not allowed |

mod astar;
mod bfs;
mod cellmap;
mod dfs;
mod dijkstra;
mod distance;
mod error;
mod graph;
mod order;
mod path;
mod queue;
mod registry;
mod result;

pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use cellmap::{CellMap, CellSet};
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use distance::{manhattan, octile};
pub use error::PathError;
pub use graph::{GridGraph, MAX_GRID_SIZE};
pub use order::{FixedOrder, NeighborOrder, ShuffledOrder};
pub use path::{Parents, reconstruct_path};
pub use registry::{Algorithm, Searcher, available_algorithms};
pub use result::SearchResult;
