// src/py/wrappers.rs
//! Python-facing helper functions and module initialization.
#![allow(non_local_definitions)]

use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::global;
use crate::surface;

use super::hashmap::PySharedHashMap;
use super::utils::{as_raw_bytes, value_to_py};

#[pyfunction]
fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Create a map. Returns False if the name is already registered.
/// Names, keys and values may be `str` (UTF-8) or `bytes`.
#[pyfunction]
fn map_create(py: Python, name: &PyAny) -> PyResult<bool> {
    let name = as_raw_bytes(name)?;
    Ok(py.allow_threads(|| surface::map_create(global::registry(), name)))
}

/// Entry count, or None if the map is not registered.
#[pyfunction]
fn map_size(py: Python, name: &PyAny) -> PyResult<Option<usize>> {
    let name = as_raw_bytes(name)?;
    Ok(py.allow_threads(|| surface::map_size(global::registry(), name)))
}

#[pyfunction]
fn map_set(py: Python, name: &PyAny, key: &PyAny, value: &PyAny) -> PyResult<bool> {
    let (name, key, value) = (as_raw_bytes(name)?, as_raw_bytes(key)?, as_raw_bytes(value)?);
    Ok(py.allow_threads(|| surface::map_set(global::registry(), name, key, value)))
}

/// Insert only if the key is absent; the first value wins.
#[pyfunction]
fn map_add(py: Python, name: &PyAny, key: &PyAny, value: &PyAny) -> PyResult<bool> {
    let (name, key, value) = (as_raw_bytes(name)?, as_raw_bytes(key)?, as_raw_bytes(value)?);
    Ok(py.allow_threads(|| surface::map_add(global::registry(), name, key, value)))
}

#[pyfunction]
fn map_get(py: Python, name: &PyAny, key: &PyAny) -> PyResult<Option<PyObject>> {
    let (name, key) = (as_raw_bytes(name)?, as_raw_bytes(key)?);
    let found = py.allow_threads(|| surface::map_get(global::registry(), name, key));
    Ok(found.map(|v| value_to_py(py, v)))
}

#[pyfunction]
fn map_delete(py: Python, name: &PyAny, key: &PyAny) -> PyResult<bool> {
    let (name, key) = (as_raw_bytes(name)?, as_raw_bytes(key)?);
    Ok(py.allow_threads(|| surface::map_delete(global::registry(), name, key)))
}

#[pyfunction]
fn map_close(py: Python, name: &PyAny) -> PyResult<()> {
    let name = as_raw_bytes(name)?;
    py.allow_threads(|| surface::map_close(global::registry(), name));
    Ok(())
}

fn populate_module(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(version, m)?)?;
    m.add_function(wrap_pyfunction!(map_create, m)?)?;
    m.add_function(wrap_pyfunction!(map_size, m)?)?;
    m.add_function(wrap_pyfunction!(map_set, m)?)?;
    m.add_function(wrap_pyfunction!(map_add, m)?)?;
    m.add_function(wrap_pyfunction!(map_get, m)?)?;
    m.add_function(wrap_pyfunction!(map_delete, m)?)?;
    m.add_function(wrap_pyfunction!(map_close, m)?)?;
    m.add_class::<PySharedHashMap>()?;
    Ok(())
}

#[pymodule]
fn shmap(_py: Python, m: &PyModule) -> PyResult<()> {
    populate_module(m)
}

/// Build the module object without going through an import, for embedding
/// and tests.
pub fn make_module(py: Python) -> PyResult<Py<PyModule>> {
    let m = PyModule::new(py, "shmap")?;
    populate_module(m)?;
    Ok(m.into())
}
