//! Python bindings for cortexview
//!
//! This module provides PyO3 bindings for view resolution and camera path
//! planning. Rendering stays on the Python side.

// Suppress false positive warnings from PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;

mod camera;
mod enums;
mod errors;
#[macro_use]
mod macros;
mod utils;

pub use camera::*;
pub use enums::*;
pub use errors::*;

/// Python module definition
#[pymodule]
fn _cortexview(py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Register exception classes
    m.add(
        "CortexviewError",
        py.get_type_bound::<errors::PyCortexviewError>(),
    )?;
    m.add("ViewError", py.get_type_bound::<errors::PyViewError>())?;
    m.add(
        "ImageFormatError",
        py.get_type_bound::<errors::PyImageFormatError>(),
    )?;
    m.add("CaptureError", py.get_type_bound::<errors::PyCaptureError>())?;
    m.add(
        "InvalidValueError",
        py.get_type_bound::<errors::PyInvalidValueError>(),
    )?;

    // Register classes
    m.add_class::<PyHemisphere>()?;
    m.add_class::<PyViewName>()?;
    m.add_class::<PyCameraOrientation>()?;

    // Register functions
    m.add_function(wrap_pyfunction!(py_resolve_view, m)?)?;
    m.add_function(wrap_pyfunction!(py_resolve_name, m)?)?;
    m.add_function(wrap_pyfunction!(py_shortest_angular_delta, m)?)?;
    m.add_function(wrap_pyfunction!(py_interpolate, m)?)?;
    m.add_function(wrap_pyfunction!(py_plan_path, m)?)?;

    // Add version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
