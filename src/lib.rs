// src/lib.rs
//! shmap: named key/value maps shared by every thread of one process.
//!
//! A [`MapRegistry`] owns one [`SharedMap`] per name. Each call resolves the
//! name under the registry's read lock, lets go of it, and then runs against
//! the map under that map's own lock, so busy maps never stall unrelated
//! create/close traffic.
//!
//! ```
//! use bytes::Bytes;
//! use shmap::MapRegistry;
//!
//! let registry = MapRegistry::new();
//! assert!(registry.create("cache"));
//! registry.set("cache", Bytes::from("a"), Bytes::from("1")).unwrap();
//! assert_eq!(registry.get("cache", b"a").unwrap(), Some(Bytes::from("1")));
//! registry.close("cache");
//! assert!(registry.size("cache").is_err());
//! ```

pub mod config;
pub mod error;
pub mod global;
pub mod handle;
pub mod map;
pub mod registry;
pub mod surface;
#[cfg(feature = "telemetry")]
pub mod telemetry;

#[cfg(feature = "pyo3")]
pub mod py;

pub use config::RegistryConfig;
pub use error::{MapError, MapResult};
pub use handle::MapHandle;
pub use map::SharedMap;
pub use registry::MapRegistry;
