// src/config.rs
//! Registry tuning knobs.

use tracing::warn;

pub const DEFAULT_MAP_CAPACITY: usize = 0;
pub const DEFAULT_REGISTRY_CAPACITY: usize = 16;

const ENV_MAP_CAPACITY: &str = "SHMAP_MAP_CAPACITY";
const ENV_REGISTRY_CAPACITY: &str = "SHMAP_REGISTRY_CAPACITY";

/// Pre-allocation hints for the registry table and for each new map.
///
/// These never bound how many names or entries may be stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Initial entry capacity of every map created through the registry.
    pub map_capacity: usize,
    /// Initial capacity of the name -> map table.
    pub registry_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            map_capacity: DEFAULT_MAP_CAPACITY,
            registry_capacity: DEFAULT_REGISTRY_CAPACITY,
        }
    }
}

impl RegistryConfig {
    /// Read `SHMAP_MAP_CAPACITY` and `SHMAP_REGISTRY_CAPACITY`, keeping the
    /// defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            map_capacity: parse_capacity(&lookup, ENV_MAP_CAPACITY, defaults.map_capacity),
            registry_capacity: parse_capacity(
                &lookup,
                ENV_REGISTRY_CAPACITY,
                defaults.registry_capacity,
            ),
        }
    }

    pub fn with_map_capacity(mut self, capacity: usize) -> Self {
        self.map_capacity = capacity;
        self
    }

    pub fn with_registry_capacity(mut self, capacity: usize) -> Self {
        self.registry_capacity = capacity;
        self
    }
}

fn parse_capacity<F>(lookup: &F, key: &str, fallback: usize) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => fallback,
        Some(raw) => match raw.trim().parse::<usize>() {
            Ok(v) => v,
            Err(_) => {
                warn!(var = key, value = %raw, "ignoring invalid capacity, using default");
                fallback
            }
        },
    }
}
