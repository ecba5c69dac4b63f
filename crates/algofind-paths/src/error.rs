use std::fmt;

use algofind_core::Point;

use crate::graph::MAX_GRID_SIZE;

/// Invalid input handed directly to the search layer.
///
/// A missing path is not an error; searches report it through
/// [`SearchResult::found`](crate::SearchResult::found).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The grid side length is not in `1..=MAX_GRID_SIZE`.
    InvalidGridSize(i32),
    /// A start or end point lies outside the grid.
    OutOfBounds {
        role: &'static str,
        pos: Point,
        size: i32,
    },
    /// No algorithm is registered under this selector.
    UnknownAlgorithm(String),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGridSize(size) => {
                write!(f, "grid size {size} is outside 1..={MAX_GRID_SIZE}")
            }
            Self::OutOfBounds { role, pos, size } => {
                write!(f, "{role} point {pos} is outside the {size}x{size} grid")
            }
            Self::UnknownAlgorithm(name) => write!(f, "unknown algorithm {name:?}"),
        }
    }
}

impl std::error::Error for PathError {}
