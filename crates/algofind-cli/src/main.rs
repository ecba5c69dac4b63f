//! `algofind` — answer a JSON pathfinding request.

use std::fs::File;
use std::io::{self, BufReader, Write};

use algofind_cli::{Command, PathfindingRequest, ServiceConfig, available_algorithms, find_path};
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = Command::parse(std::env::args().skip(1))?;
    let mut stdout = io::stdout().lock();

    match command {
        Command::Help => writeln!(stdout, "{}", algofind_cli::cli::USAGE)?,
        Command::ListAlgorithms => {
            serde_json::to_writer(&mut stdout, &available_algorithms())?;
            writeln!(stdout)?;
        }
        Command::FindPath {
            input,
            pretty,
            algorithm,
        } => {
            let mut request = match &input {
                Some(path) => {
                    info!("reading request from {}", path.display());
                    PathfindingRequest::from_reader(BufReader::new(File::open(path)?))?
                }
                None => PathfindingRequest::from_reader(io::stdin().lock())?,
            };
            if let Some(algorithm) = algorithm {
                info!("running {algorithm} instead of {}", request.algorithm);
                request.algorithm = algorithm;
            }
            let config = ServiceConfig::from_env();
            let response = find_path(&request, &config)?;
            if pretty {
                serde_json::to_writer_pretty(&mut stdout, &response)?;
            } else {
                serde_json::to_writer(&mut stdout, &response)?;
            }
            writeln!(stdout)?;
        }
    }
    Ok(())
}
