//! Service configuration.

use algofind_paths::{FixedOrder, NeighborOrder, ShuffledOrder};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Limits and traversal policy applied to every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Smallest accepted grid side length.
    pub min_grid_size: i32,
    /// Largest accepted grid side length.
    pub max_grid_size: i32,
    /// Shuffle neighbour order in depth-first and breadth-first searches.
    /// Results vary between runs unless `seed` is set.
    pub shuffle_neighbors: bool,
    pub seed: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            min_grid_size: 2,
            max_grid_size: 100,
            shuffle_neighbors: false,
            seed: None,
        }
    }
}

impl ServiceConfig {
    pub const MIN_GRID_VAR: &'static str = "ALGOFIND_MIN_GRID";
    pub const MAX_GRID_VAR: &'static str = "ALGOFIND_MAX_GRID";
    pub const SHUFFLE_VAR: &'static str = "ALGOFIND_SHUFFLE";
    pub const SEED_VAR: &'static str = "ALGOFIND_SEED";

    /// Defaults overridden by the `ALGOFIND_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    /// Values that do not parse are ignored.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(v) = parse_var(&lookup, Self::MIN_GRID_VAR) {
            config.min_grid_size = v;
        }
        if let Some(v) = parse_var(&lookup, Self::MAX_GRID_VAR) {
            config.max_grid_size = v;
        }
        if let Some(raw) = lookup(Self::SHUFFLE_VAR) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.shuffle_neighbors = true,
                "0" | "false" | "no" | "off" | "" => config.shuffle_neighbors = false,
                other => log::warn!("ignoring {}={other:?}: expected a boolean", Self::SHUFFLE_VAR),
            }
        }
        config.seed = parse_var(&lookup, Self::SEED_VAR);
        config
    }

    /// Neighbour ordering policy for one request.
    pub fn neighbor_order(&self) -> Box<dyn NeighborOrder> {
        if !self.shuffle_neighbors {
            return Box::new(FixedOrder);
        }
        match self.seed {
            Some(seed) => Box::new(ShuffledOrder::new(StdRng::seed_from_u64(seed))),
            None => Box::new(ShuffledOrder::new(rand::rng())),
        }
    }
}

fn parse_var<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("ignoring {key}={raw:?}: not a valid number");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(ServiceConfig::from_vars(vars(&[])), ServiceConfig::default());
    }

    #[test]
    fn variables_override_defaults() {
        let config = ServiceConfig::from_vars(vars(&[
            ("ALGOFIND_MIN_GRID", "3"),
            ("ALGOFIND_MAX_GRID", " 50 "),
            ("ALGOFIND_SHUFFLE", "TRUE"),
            ("ALGOFIND_SEED", "42"),
        ]));
        assert_eq!(config.min_grid_size, 3);
        assert_eq!(config.max_grid_size, 50);
        assert!(config.shuffle_neighbors);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn unparseable_values_are_ignored() {
        let config = ServiceConfig::from_vars(vars(&[
            ("ALGOFIND_MAX_GRID", "lots"),
            ("ALGOFIND_SHUFFLE", "maybe"),
            ("ALGOFIND_SEED", "-1"),
        ]));
        assert_eq!(config, ServiceConfig::default());
    }
}
