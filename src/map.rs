// src/map.rs
//! A single named key/value store guarded by its own reader-writer lock.

use bytes::Bytes;
use parking_lot::RwLock;
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::trace;

/// Render a raw map name for logs and error messages.
pub(crate) fn display_name(name: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(name)
}

/// One named map. Readers share the lock, writers hold it exclusively, so a
/// value is never observed half-written.
pub struct SharedMap {
    /// Owned copy of the registry key; never renamed. Names are raw bytes,
    /// compared exactly like keys.
    name: Bytes,
    entries: RwLock<HashMap<Bytes, Bytes>>,
}

impl SharedMap {
    pub fn new(name: impl AsRef<[u8]>) -> Self {
        Self::with_capacity(name, 0)
    }

    pub fn with_capacity(name: impl AsRef<[u8]>, capacity: usize) -> Self {
        Self {
            name: Bytes::copy_from_slice(name.as_ref()),
            entries: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }

    /// Number of entries currently stored.
    pub fn size(&self) -> usize {
        self.entries.read().len()
    }

    /// Insert or overwrite. Always succeeds.
    pub fn set(&self, key: Bytes, value: Bytes) -> bool {
        trace!(map = %display_name(&self.name), key_len = key.len(), "set");
        self.entries.write().insert(key, value);
        true
    }

    /// Insert only if `key` is not present. The check and the insert happen
    /// under one write guard; the first value stored wins.
    pub fn add_if_absent(&self, key: Bytes, value: Bytes) -> bool {
        let mut entries = self.entries.write();
        if entries.contains_key(&key) {
            return false;
        }
        trace!(map = %display_name(&self.name), key_len = key.len(), "add");
        entries.insert(key, value);
        true
    }

    /// Value stored under `key`, or `None` when absent.
    pub fn get(&self, key: &[u8]) -> Option<Bytes> {
        self.entries.read().get(key).cloned()
    }

    /// Remove `key`; reports whether anything was removed.
    pub fn delete(&self, key: &[u8]) -> bool {
        let removed = self.entries.write().remove(key).is_some();
        if removed {
            trace!(map = %display_name(&self.name), key_len = key.len(), "delete");
        }
        removed
    }
}

impl std::fmt::Debug for SharedMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedMap")
            .field("name", &display_name(&self.name))
            .field("size", &self.size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(s: &'static str) -> Bytes {
        Bytes::from_static(s.as_bytes())
    }

    #[test]
    fn set_overwrites_and_get_reads_back() {
        let map = SharedMap::new("m");
        assert!(map.set(b("k"), b("v1")));
        assert!(map.set(b("k"), b("v2")));
        assert_eq!(map.get(b"k"), Some(b("v2")));
        assert_eq!(map.size(), 1);
    }

    #[test]
    fn add_keeps_first_value() {
        let map = SharedMap::new("m");
        assert!(map.add_if_absent(b("k"), b("first")));
        assert!(!map.add_if_absent(b("k"), b("second")));
        assert_eq!(map.get(b"k"), Some(b("first")));
    }

    #[test]
    fn delete_reports_removal() {
        let map = SharedMap::new("m");
        map.set(b("k"), b("v"));
        assert!(map.delete(b"k"));
        assert!(!map.delete(b"k"));
        assert_eq!(map.get(b"k"), None);
        assert_eq!(map.size(), 0);
    }

    #[test]
    fn non_utf8_name_is_kept_verbatim() {
        let map = SharedMap::new([0xff, 0xfe, b'x']);
        assert_eq!(map.name(), &[0xff, 0xfe, b'x'][..]);
        assert_eq!(display_name(map.name()), "\u{fffd}\u{fffd}x");
    }

    #[test]
    fn keys_compare_by_exact_bytes() {
        let map = SharedMap::new("m");
        map.set(Bytes::from_static(b"a\0b"), b("nul"));
        map.set(b("A"), b("upper"));
        assert_eq!(map.get(b"a\0b"), Some(b("nul")));
        assert_eq!(map.get(b"a"), None);
        assert_eq!(map.get(b"A"), Some(b("upper")));
        assert_eq!(map.size(), 2);
    }

    #[test]
    fn empty_key_and_value_are_ordinary_entries() {
        let map = SharedMap::with_capacity("m", 8);
        assert!(map.add_if_absent(Bytes::new(), Bytes::new()));
        assert_eq!(map.get(b""), Some(Bytes::new()));
        assert_eq!(map.name(), b"m");
    }
}
