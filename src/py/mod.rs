// src/py/mod.rs
//! Python bindings over the process-wide registry.
#![allow(non_local_definitions)]

pub mod hashmap;
pub mod utils;
pub mod wrappers;

pub use hashmap::PySharedHashMap;
pub use wrappers::make_module;
