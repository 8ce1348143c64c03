// src/global.rs
//! Process-lifetime registry for host bindings.
//!
//! Built lazily on first use from `RegistryConfig::from_env()` and never torn
//! down. Library code takes a `&MapRegistry` instead of reaching for this.

use crate::config::RegistryConfig;
use crate::registry::MapRegistry;
use once_cell::sync::Lazy;
use std::sync::Arc;

static REGISTRY: Lazy<Arc<MapRegistry>> =
    Lazy::new(|| Arc::new(MapRegistry::with_config(RegistryConfig::from_env())));

pub fn registry() -> &'static Arc<MapRegistry> {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_instance_every_call() {
        assert!(Arc::ptr_eq(registry(), registry()));
        assert!(registry().create("global::same_instance_every_call"));
        assert!(registry().contains("global::same_instance_every_call"));
        registry().close("global::same_instance_every_call");
    }
}
