//! Dense per-cell storage for search state.

use algofind_core::{Point, Square};

/// A value for every cell of a square grid, stored row-major.
#[derive(Clone, Debug)]
pub struct CellMap<T> {
    square: Square,
    data: Vec<T>,
}

impl<T: Clone> CellMap<T> {
    /// Create a map holding `fill` for every cell.
    pub fn new(square: Square, fill: T) -> Self {
        Self {
            square,
            data: vec![fill; square.len()],
        }
    }
}

impl<T> CellMap<T> {
    /// The grid this map covers.
    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    /// Value at `p`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.square.idx(p).map(|i| &self.data[i])
    }

    /// Overwrite the value at `p`. Returns `false` when `p` is outside.
    #[inline]
    pub fn set(&mut self, p: Point, v: T) -> bool {
        match self.square.idx(p) {
            Some(i) => {
                self.data[i] = v;
                true
            }
            None => false,
        }
    }
}

/// A set of cells backed by a [`CellMap<bool>`].
#[derive(Clone, Debug)]
pub struct CellSet {
    marks: CellMap<bool>,
    len: usize,
}

impl CellSet {
    pub fn new(square: Square) -> Self {
        Self {
            marks: CellMap::new(square, false),
            len: 0,
        }
    }

    /// Add `p`. Returns `true` if it was not already present; points outside
    /// the grid are never added.
    pub fn insert(&mut self, p: Point) -> bool {
        if self.contains(p) || !self.marks.set(p, true) {
            return false;
        }
        self.len += 1;
        true
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.marks.get(p).copied().unwrap_or(false)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
