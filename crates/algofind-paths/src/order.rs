//! Neighbour ordering policies for the unweighted searches.
//!
//! Depth-first and breadth-first search follow the graph's fixed direction
//! order unless handed a [`ShuffledOrder`], which permutes every neighbour
//! list with the random source it owns. A shuffled run is only reproducible
//! when that source is seeded.

use algofind_core::Point;
use rand::Rng;
use rand::seq::SliceRandom;

/// Rearranges a freshly generated neighbour list before it is expanded.
pub trait NeighborOrder {
    fn arrange(&mut self, neighbors: &mut [Point]);
}

/// Keep the graph's direction order. Deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedOrder;

impl NeighborOrder for FixedOrder {
    #[inline]
    fn arrange(&mut self, _neighbors: &mut [Point]) {}
}

/// Shuffle every neighbour list with `rng`.
#[derive(Debug, Clone)]
pub struct ShuffledOrder<R> {
    rng: R,
}

impl<R: Rng> ShuffledOrder<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> NeighborOrder for ShuffledOrder<R> {
    fn arrange(&mut self, neighbors: &mut [Point]) {
        neighbors.shuffle(&mut self.rng);
    }
}
