// src/handle.rs
//! Name-bound convenience handle.

use crate::error::MapResult;
use crate::map::display_name;
use crate::registry::MapRegistry;
use bytes::Bytes;
use std::sync::Arc;

/// A map name paired with the registry that owns it.
///
/// The handle never caches the map itself: every call re-resolves the name,
/// so once the map is closed the handle reports `NotRegistered`.
#[derive(Clone)]
pub struct MapHandle {
    registry: Arc<MapRegistry>,
    name: Bytes,
}

impl MapHandle {
    /// Bind to `name`, creating the map first if nobody has yet.
    pub fn open(registry: Arc<MapRegistry>, name: impl AsRef<[u8]>) -> Self {
        let name = Bytes::copy_from_slice(name.as_ref());
        registry.create(&name);
        Self { registry, name }
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn size(&self) -> MapResult<usize> {
        self.registry.size(&self.name)
    }

    pub fn set(&self, key: impl Into<Bytes>, value: impl Into<Bytes>) -> MapResult<bool> {
        self.registry.set(&self.name, key.into(), value.into())
    }

    pub fn add(&self, key: impl Into<Bytes>, value: impl Into<Bytes>) -> MapResult<bool> {
        self.registry.add(&self.name, key.into(), value.into())
    }

    pub fn get(&self, key: &[u8]) -> MapResult<Option<Bytes>> {
        self.registry.get(&self.name, key)
    }

    pub fn delete(&self, key: &[u8]) -> MapResult<bool> {
        self.registry.delete(&self.name, key)
    }

    /// Close the underlying map for every holder of this name.
    pub fn close(&self) {
        self.registry.close(&self.name);
    }
}

impl std::fmt::Debug for MapHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapHandle").field("name", &display_name(&self.name)).finish()
    }
}
