//! The [`Cell`] type — a grid coordinate with an optional barrier weight.

use std::hash::{Hash, Hasher};

use crate::geom::Point;

/// A grid cell as it appears in requests.
///
/// Identity is the position only: two cells at the same coordinates are
/// equal whatever their weights. The weight matters only for barriers, where
/// `<= 0` blocks the cell and `> 0` is added to the cost of entering it.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub pos: Point,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: f64,
}

impl Cell {
    /// A cell at `(x, y)` with zero weight.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self {
            pos: Point::new(x, y),
            weight: 0.0,
        }
    }

    /// Set the weight (builder).
    #[inline]
    pub const fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Whether this cell, used as a barrier, blocks movement entirely.
    #[inline]
    pub fn is_impassable(&self) -> bool {
        self.weight <= 0.0
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn identity_ignores_weight() {
        let a = Cell::new(1, 1).with_weight(5.0);
        let b = Cell::new(1, 1);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
        assert_ne!(a, Cell::new(1, 2));
    }

    #[test]
    fn impassable_threshold() {
        assert!(Cell::new(0, 0).is_impassable());
        assert!(Cell::new(0, 0).with_weight(-3.0).is_impassable());
        assert!(!Cell::new(0, 0).with_weight(0.5).is_impassable());
    }
}
