// src/py/utils.rs
//! Conversions between Python objects and the raw bytes the core stores.
#![allow(non_local_definitions)]

use bytes::Bytes;
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyString};

/// Borrow the bytes behind a `str` (UTF-8) or `bytes` argument. Used for
/// names as well as keys and values.
pub(crate) fn as_raw_bytes(obj: &PyAny) -> PyResult<&[u8]> {
    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(s.to_str()?.as_bytes());
    }
    if let Ok(b) = obj.downcast::<PyBytes>() {
        return Ok(b.as_bytes());
    }
    Err(PyTypeError::new_err(format!(
        "expected str or bytes, got {}",
        obj.get_type().name()?
    )))
}

/// Hand a stored value back to Python as `bytes`.
pub(crate) fn value_to_py(py: Python, value: Bytes) -> PyObject {
    PyBytes::new(py, &value).into_py(py)
}
