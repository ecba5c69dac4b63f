//! Parent links recorded during a search, and path reconstruction.

use algofind_core::{Point, Square};

use crate::cellmap::CellMap;

/// Parent pointers of a search tree rooted at the start cell.
#[derive(Clone, Debug)]
pub struct Parents {
    links: CellMap<Option<Point>>,
    root: Option<Point>,
}

impl Parents {
    pub fn new(square: Square) -> Self {
        Self {
            links: CellMap::new(square, None),
            root: None,
        }
    }

    /// Mark `p` as the root. The root has no parent.
    pub fn set_root(&mut self, p: Point) {
        self.links.set(p, None);
        self.root = Some(p);
    }

    /// Record that `child` was reached from `parent`.
    pub fn link(&mut self, child: Point, parent: Point) {
        self.links.set(child, Some(parent));
    }

    #[inline]
    pub fn root(&self) -> Option<Point> {
        self.root
    }

    #[inline]
    pub fn parent(&self, p: Point) -> Option<Point> {
        self.links.get(p).copied().flatten()
    }

    /// Shorthand for [`reconstruct_path`].
    pub fn path_to(&self, end: Point) -> Vec<Point> {
        reconstruct_path(self, end)
    }
}

/// Walk the parent links from `end` back to the root and return the cells
/// in root-to-`end` order.
///
/// Returns an empty path when `end` is not connected to the root. The walk
/// never takes more steps than the grid has cells.
pub fn reconstruct_path(parents: &Parents, end: Point) -> Vec<Point> {
    let Some(root) = parents.root() else {
        return Vec::new();
    };
    let limit = parents.links.square().len();
    let mut path = vec![end];
    let mut current = end;
    while current != root {
        match parents.parent(current) {
            Some(p) if path.len() < limit => {
                path.push(p);
                current = p;
            }
            _ => return Vec::new(),
        }
    }
    path.reverse();
    path
}
