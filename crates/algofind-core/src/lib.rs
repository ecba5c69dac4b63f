//! **algofind-core** — geometry types shared by the algofind crates.
//!
//! [`Point`] is the coordinate every search works with, [`Square`] the
//! extent of a grid, and [`Cell`] the weighted coordinate used to describe
//! start, end and barrier cells in requests.

pub mod cell;
pub mod geom;

pub use cell::Cell;
pub use geom::{Point, Square};
