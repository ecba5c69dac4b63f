//! Request handling around `algofind-paths`.
//!
//! Parses and validates JSON pathfinding requests, runs the selected search
//! and assembles the timed response. The `algofind` binary wires this to
//! stdin/stdout.

pub mod cli;
pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod service;

pub use algofind_paths::available_algorithms;
pub use cli::Command;
pub use config::ServiceConfig;
pub use error::RequestError;
pub use request::PathfindingRequest;
pub use response::PathfindingResponse;
pub use service::find_path;
