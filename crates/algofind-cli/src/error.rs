use std::fmt;
use std::io;

use algofind_paths::PathError;

/// Reasons a request is rejected before or while being served.
#[derive(Debug)]
pub enum RequestError {
    /// Bad command-line usage.
    Usage(String),
    /// The request could not be read.
    Io(io::Error),
    /// The request is not valid JSON or misses required fields.
    Json(serde_json::Error),
    /// The grid size is outside the configured bounds.
    GridSize { size: i32, min: i32, max: i32 },
    /// A coordinate or selector was rejected by the search layer.
    Path(PathError),
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => write!(f, "usage: {msg}"),
            Self::Io(e) => write!(f, "cannot read request: {e}"),
            Self::Json(e) => write!(f, "malformed request: {e}"),
            Self::GridSize { size, min, max } => {
                write!(f, "grid size {size} is outside the allowed range {min}..={max}")
            }
            Self::Path(e) => write!(f, "invalid request: {e}"),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Path(e) => Some(e),
            Self::Usage(_) | Self::GridSize { .. } => None,
        }
    }
}

impl From<io::Error> for RequestError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<PathError> for RequestError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}
