use std::collections::HashMap;
use std::f64::consts::SQRT_2;

use algofind_core::{Cell, Point, Square};

use crate::cellmap::CellSet;
use crate::distance::{manhattan, octile};
use crate::error::PathError;

/// Largest accepted side length. Search state is stored densely, one entry
/// per cell, so the cell count has to stay allocatable.
pub const MAX_GRID_SIZE: i32 = 1024;

/// Step directions in expansion order. The first four are orthogonal, the
/// last four are only used when diagonal movement is allowed.
const DIRECTIONS: [Point; 8] = [
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
    Point::new(1, 1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(-1, -1),
];

/// An immutable square grid graph with weighted barriers.
///
/// A barrier with weight `<= 0` removes its cell from the graph. A barrier
/// with positive weight stays passable, and entering it costs its weight on
/// top of the base step cost.
#[derive(Clone, Debug)]
pub struct GridGraph {
    square: Square,
    allow_diagonal: bool,
    barriers: HashMap<Point, Cell>,
}

impl GridGraph {
    /// Build a graph of `size x size` cells, with `size` in
    /// `1..=MAX_GRID_SIZE`.
    ///
    /// When the same coordinates appear more than once in `barriers` the
    /// last weight wins.
    pub fn new(size: i32, barriers: &[Cell], allow_diagonal: bool) -> Result<Self, PathError> {
        if !(1..=MAX_GRID_SIZE).contains(&size) {
            return Err(PathError::InvalidGridSize(size));
        }
        let barriers = barriers.iter().map(|c| (c.pos, *c)).collect();
        Ok(Self {
            square: Square::new(size),
            allow_diagonal,
            barriers,
        })
    }

    #[inline]
    pub fn size(&self) -> i32 {
        self.square.size
    }

    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub fn allow_diagonal(&self) -> bool {
        self.allow_diagonal
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.square.contains(p)
    }

    /// Weight registered for `p`, if it is a barrier.
    #[inline]
    pub fn barrier_weight(&self, p: Point) -> Option<f64> {
        self.barriers.get(&p).map(|c| c.weight)
    }

    /// Whether `p` is a barrier that cannot be entered.
    #[inline]
    pub fn is_impassable(&self, p: Point) -> bool {
        self.barriers.get(&p).is_some_and(Cell::is_impassable)
    }

    /// Append the passable, in-bounds neighbours of `p` that are not in
    /// `excluded` into `buf`. The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Point, excluded: &CellSet, buf: &mut Vec<Point>) {
        let dirs = if self.allow_diagonal {
            &DIRECTIONS[..]
        } else {
            &DIRECTIONS[..4]
        };
        for &d in dirs {
            let n = p + d;
            if self.contains(n) && !self.is_impassable(n) && !excluded.contains(n) {
                buf.push(n);
            }
        }
    }

    /// Cost of stepping from `from` onto the adjacent `to`.
    pub fn movement_cost(&self, from: Point, to: Point) -> f64 {
        let base = if from.is_diagonal_to(to) { SQRT_2 } else { 1.0 };
        match self.barrier_weight(to) {
            Some(w) if w > 0.0 => base + w,
            _ => base,
        }
    }

    /// Admissible estimate of the cost from `from` to `to`: Manhattan
    /// distance on 4-way grids, octile distance when diagonals are allowed.
    pub fn estimate(&self, from: Point, to: Point) -> f64 {
        if self.allow_diagonal {
            octile(from, to)
        } else {
            f64::from(manhattan(from, to))
        }
    }

    /// Total movement cost of walking `path` step by step.
    pub fn path_cost(&self, path: &[Point]) -> f64 {
        path.windows(2)
            .map(|step| self.movement_cost(step[0], step[1]))
            .sum()
    }

    /// Whether every consecutive pair of `path` is a legal move on this
    /// graph and no cell of it is impassable.
    pub fn is_walkable(&self, path: &[Point]) -> bool {
        let cells_ok = path
            .iter()
            .all(|&p| self.contains(p) && !self.is_impassable(p));
        let steps_ok = path.windows(2).all(|step| {
            step[0].is_adjacent(step[1]) && (self.allow_diagonal || !step[0].is_diagonal_to(step[1]))
        });
        cells_ok && steps_ok
    }

    pub(crate) fn check(&self, p: Point, role: &'static str) -> Result<(), PathError> {
        if self.contains(p) {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                role,
                pos: p,
                size: self.size(),
            })
        }
    }
}
