// src/error.rs
//! Outcome types shared by the registry and its typed wrappers.

use thiserror::Error;

/// Logical failures of a registry call.
///
/// Absent keys and duplicate creation are not errors: they come back as
/// `None`/`false` from the per-map operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// No live map under this name (never created, or already closed).
    #[error("no map registered under `{0}`")]
    NotRegistered(String),
}

pub type MapResult<T> = Result<T, MapError>;

impl MapError {
    pub fn is_not_registered(&self) -> bool {
        matches!(self, MapError::NotRegistered(_))
    }
}
