// src/py/hashmap.rs
//! Python-facing `SharedHashMap` class.
#![allow(non_local_definitions)]

use bytes::Bytes;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::global;
use crate::handle::MapHandle;

use super::utils::{as_raw_bytes, value_to_py};

/// A named map in the process-wide registry. Constructing one creates the map
/// if it does not exist yet; every method looks the name up again, so after
/// `close()` reads return `None` and writes return `False`.
#[pyclass(name = "SharedHashMap")]
pub struct PySharedHashMap {
    inner: MapHandle,
}

#[pymethods]
impl PySharedHashMap {
    #[new]
    fn new(name: &PyAny) -> PyResult<Self> {
        let name = as_raw_bytes(name)?;
        Ok(Self {
            inner: MapHandle::open(global::registry().clone(), name),
        })
    }

    /// The name as `str` when it is valid UTF-8, otherwise as `bytes`.
    fn get_name(&self, py: Python) -> PyObject {
        match std::str::from_utf8(self.inner.name()) {
            Ok(s) => s.into_py(py),
            Err(_) => PyBytes::new(py, self.inner.name()).into_py(py),
        }
    }

    fn size(&self) -> Option<usize> {
        self.inner.size().ok()
    }

    fn set(&self, py: Python, key: &PyAny, value: &PyAny) -> PyResult<bool> {
        let (key, value) = (as_raw_bytes(key)?, as_raw_bytes(value)?);
        Ok(py.allow_threads(|| {
            self.inner
                .set(Bytes::copy_from_slice(key), Bytes::copy_from_slice(value))
                .unwrap_or(false)
        }))
    }

    fn add(&self, py: Python, key: &PyAny, value: &PyAny) -> PyResult<bool> {
        let (key, value) = (as_raw_bytes(key)?, as_raw_bytes(value)?);
        Ok(py.allow_threads(|| {
            self.inner
                .add(Bytes::copy_from_slice(key), Bytes::copy_from_slice(value))
                .unwrap_or(false)
        }))
    }

    fn get(&self, py: Python, key: &PyAny) -> PyResult<Option<PyObject>> {
        let key = as_raw_bytes(key)?;
        let found = py.allow_threads(|| self.inner.get(key).ok().flatten());
        Ok(found.map(|v| value_to_py(py, v)))
    }

    fn delete(&self, py: Python, key: &PyAny) -> PyResult<bool> {
        let key = as_raw_bytes(key)?;
        Ok(py.allow_threads(|| self.inner.delete(key).unwrap_or(false)))
    }

    fn close(&self, py: Python) {
        py.allow_threads(|| self.inner.close())
    }

    fn __repr__(&self) -> String {
        format!(
            "SharedHashMap(name={:?})",
            String::from_utf8_lossy(self.inner.name())
        )
    }
}
