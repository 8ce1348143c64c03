// src/registry.rs
//! Name Registry
//! Maps names to the shared maps that live under them. Callers always go
//! through a fresh name lookup; the registry is the only owner of a map.

use crate::config::RegistryConfig;
use crate::error::{MapError, MapResult};
use crate::map::{display_name, SharedMap};
use bytes::Bytes;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

pub struct MapRegistry {
    /// Mapping of raw map names to their single live instance.
    maps: RwLock<HashMap<Bytes, Arc<SharedMap>>>,
    config: RegistryConfig,
}

impl MapRegistry {
    /// Create a new, empty registry with default capacities.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            maps: RwLock::new(HashMap::with_capacity(config.registry_capacity)),
            config,
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Create an empty map under `name`.
    /// Returns `false` if a live map already uses that name.
    ///
    /// Names are byte strings compared exactly; `&str`, `String` and `&[u8]`
    /// all work.
    pub fn create(&self, name: impl AsRef<[u8]>) -> bool {
        let name = name.as_ref();
        // Fast path: the map usually exists already.
        if self.maps.read().contains_key(name) {
            return false;
        }

        let mut maps = self.maps.write();
        // Another creator may have won between the two guards.
        if maps.contains_key(name) {
            debug!(map = %display_name(name), "lost creation race");
            return false;
        }
        let map = SharedMap::with_capacity(name, self.config.map_capacity);
        maps.insert(Bytes::copy_from_slice(name), Arc::new(map));
        debug!(map = %display_name(name), "created map");
        true
    }

    /// Drop the map registered under `name`. Unknown names are a no-op.
    ///
    /// Operations that already resolved the map finish against the detached
    /// instance; its entries are freed once the last of them returns.
    pub fn close(&self, name: impl AsRef<[u8]>) {
        let name = name.as_ref();
        let removed = self.maps.write().remove(name);
        match removed {
            Some(map) => {
                debug!(map = %display_name(name), entries = map.size(), "closed map");
                drop(map);
            }
            None => debug!(map = %display_name(name), "close on unknown map"),
        }
    }

    pub fn contains(&self, name: impl AsRef<[u8]>) -> bool {
        self.maps.read().contains_key(name.as_ref())
    }

    /// Number of live maps.
    pub fn map_count(&self) -> usize {
        self.maps.read().len()
    }

    /// Clone the map out from under the read guard so the per-map operation
    /// runs without the registry lock held.
    fn resolve(&self, name: &[u8]) -> MapResult<Arc<SharedMap>> {
        self.maps
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| MapError::NotRegistered(display_name(name).into_owned()))
    }

    pub fn size(&self, name: impl AsRef<[u8]>) -> MapResult<usize> {
        Ok(self.resolve(name.as_ref())?.size())
    }

    pub fn set(&self, name: impl AsRef<[u8]>, key: Bytes, value: Bytes) -> MapResult<bool> {
        Ok(self.resolve(name.as_ref())?.set(key, value))
    }

    /// Insert only if `key` is absent; `Ok(false)` means the key was taken.
    pub fn add(&self, name: impl AsRef<[u8]>, key: Bytes, value: Bytes) -> MapResult<bool> {
        Ok(self.resolve(name.as_ref())?.add_if_absent(key, value))
    }

    pub fn get(&self, name: impl AsRef<[u8]>, key: &[u8]) -> MapResult<Option<Bytes>> {
        Ok(self.resolve(name.as_ref())?.get(key))
    }

    pub fn delete(&self, name: impl AsRef<[u8]>, key: &[u8]) -> MapResult<bool> {
        Ok(self.resolve(name.as_ref())?.delete(key))
    }
}

impl Default for MapRegistry {
    fn default() -> Self {
        Self::new()
    }
}
