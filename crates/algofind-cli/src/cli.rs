//! Command-line parsing for the `algofind` binary.

use std::path::PathBuf;

use algofind_paths::Algorithm;

use crate::error::RequestError;

pub const USAGE: &str = "\
algofind [--pretty] [--algorithm NAME] [REQUEST.json]
algofind --algorithms

Reads a pathfinding request as JSON from REQUEST.json (or stdin when
omitted) and prints the JSON response. --algorithm replaces the
request's selector (DFS, BFS, DIJKSTRA or A_STAR, any case).

Environment:
  ALGOFIND_MIN_GRID, ALGOFIND_MAX_GRID  accepted grid sizes (2..=100)
  ALGOFIND_SHUFFLE                      shuffle DFS/BFS neighbour order
  ALGOFIND_SEED                         seed for the shuffle
  RUST_LOG                              log filter (default: info)";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    ListAlgorithms,
    FindPath {
        input: Option<PathBuf>,
        pretty: bool,
        algorithm: Option<Algorithm>,
    },
}

impl Command {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, RequestError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut args = args.into_iter().map(Into::<String>::into);
        let mut input = None;
        let mut pretty = false;
        let mut algorithm = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Self::Help),
                "--algorithms" => return Ok(Self::ListAlgorithms),
                "--pretty" => pretty = true,
                "--algorithm" => {
                    let name = args
                        .next()
                        .ok_or_else(|| RequestError::Usage("--algorithm needs a name".into()))?;
                    algorithm = Some(name.parse::<Algorithm>()?);
                }
                flag if flag.starts_with('-') && flag != "-" => {
                    return Err(RequestError::Usage(format!("unknown option {flag}")));
                }
                path => {
                    if input.is_some() {
                        return Err(RequestError::Usage("only one request file may be given".into()));
                    }
                    // "-" means stdin.
                    if path != "-" {
                        input = Some(PathBuf::from(path));
                    }
                }
            }
        }
        Ok(Self::FindPath {
            input,
            pretty,
            algorithm,
        })
    }
}
