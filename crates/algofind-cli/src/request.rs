use std::io::Read;

use algofind_core::{Cell, Point};
use algofind_paths::{Algorithm, GridGraph, PathError};
use serde::{Deserialize, Serialize};

use crate::config::ServiceConfig;
use crate::error::RequestError;

/// A pathfinding query as received on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathfindingRequest {
    pub grid_size: i32,
    pub start: Cell,
    pub end: Cell,
    #[serde(default)]
    pub barriers: Option<Vec<Cell>>,
    pub algorithm: Algorithm,
    #[serde(default)]
    pub allow_diagonal: bool,
}

impl PathfindingRequest {
    /// Parse a request from JSON.
    pub fn from_reader(reader: impl Read) -> Result<Self, RequestError> {
        Ok(serde_json::from_reader(reader)?)
    }

    #[inline]
    pub fn barriers(&self) -> &[Cell] {
        self.barriers.as_deref().unwrap_or_default()
    }

    /// Check the request against `config` and the grid bounds.
    pub fn validate(&self, config: &ServiceConfig) -> Result<(), RequestError> {
        let (min, max) = (config.min_grid_size, config.max_grid_size);
        if !(min..=max).contains(&self.grid_size) {
            return Err(RequestError::GridSize {
                size: self.grid_size,
                min,
                max,
            });
        }
        self.check_bounds("start", self.start.pos)?;
        self.check_bounds("end", self.end.pos)?;
        for barrier in self.barriers() {
            self.check_bounds("barrier", barrier.pos)?;
        }
        Ok(())
    }

    /// Build the search graph for this request.
    pub fn graph(&self) -> Result<GridGraph, PathError> {
        GridGraph::new(self.grid_size, self.barriers(), self.allow_diagonal)
    }

    fn check_bounds(&self, role: &'static str, pos: Point) -> Result<(), PathError> {
        let inside = (0..self.grid_size).contains(&pos.x) && (0..self.grid_size).contains(&pos.y);
        if inside {
            Ok(())
        } else {
            Err(PathError::OutOfBounds {
                role,
                pos,
                size: self.grid_size,
            })
        }
    }
}
