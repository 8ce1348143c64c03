// src/surface.rs
//! Flat call surface for host bindings.
//!
//! Each function takes already-decoded byte sequences (names included) and folds
//! `NotRegistered` into the plain `false`/`None` a host expects.

use crate::registry::MapRegistry;
use bytes::Bytes;

/// `true` if a new map was created, `false` if the name was taken.
pub fn map_create(registry: &MapRegistry, name: &[u8]) -> bool {
    registry.create(name)
}

/// Entry count, or `None` if the map is not registered.
pub fn map_size(registry: &MapRegistry, name: &[u8]) -> Option<usize> {
    registry.size(name).ok()
}

/// Unconditional write; `false` only if the map is not registered.
pub fn map_set(registry: &MapRegistry, name: &[u8], key: &[u8], value: &[u8]) -> bool {
    registry
        .set(name, Bytes::copy_from_slice(key), Bytes::copy_from_slice(value))
        .unwrap_or(false)
}

/// `false` if the key is already present or the map is not registered.
pub fn map_add(registry: &MapRegistry, name: &[u8], key: &[u8], value: &[u8]) -> bool {
    registry
        .add(name, Bytes::copy_from_slice(key), Bytes::copy_from_slice(value))
        .unwrap_or(false)
}

/// `None` if the key is missing or the map is not registered.
pub fn map_get(registry: &MapRegistry, name: &[u8], key: &[u8]) -> Option<Bytes> {
    registry.get(name, key).ok().flatten()
}

pub fn map_delete(registry: &MapRegistry, name: &[u8], key: &[u8]) -> bool {
    registry.delete(name, key).unwrap_or(false)
}

pub fn map_close(registry: &MapRegistry, name: &[u8]) {
    registry.close(name)
}
