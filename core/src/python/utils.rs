//! Utility functions for Python bindings conversions

use pyo3::prelude::*;

use super::enums::{PyCameraOrientation, PyHemisphere};
use super::errors::convert_error;
use crate::types::{CameraOrientation, Hemisphere, ViewSpec};

/// Accepts a `Hemisphere` or one of its string forms
pub fn hemisphere_from_py(obj: &Bound<'_, PyAny>) -> PyResult<Hemisphere> {
    if let Ok(h) = obj.extract::<PyHemisphere>() {
        return Ok(h.core());
    }
    let s: String = obj.extract()?;
    Hemisphere::parse(&s).map_err(convert_error)
}

/// Accepts a `CameraOrientation` or an `(azimuth, elevation)` tuple
pub fn orientation_from_py(obj: &Bound<'_, PyAny>) -> PyResult<CameraOrientation> {
    if let Ok(o) = obj.extract::<PyCameraOrientation>() {
        return Ok(o.core());
    }
    if let Ok(pair) = obj.extract::<(f64, f64)>() {
        return Ok(pair.into());
    }
    Err(pyo3::exceptions::PyTypeError::new_err(
        "Orientation must be a CameraOrientation or an (azimuth, elevation) tuple",
    ))
}

/// Accepts a view name (str) or anything [`orientation_from_py`] accepts
pub fn view_from_py(obj: &Bound<'_, PyAny>) -> PyResult<ViewSpec> {
    if let Ok(name) = obj.extract::<String>() {
        return Ok(ViewSpec::Named(name));
    }
    orientation_from_py(obj)
        .map(ViewSpec::Literal)
        .map_err(|_| {
            pyo3::exceptions::PyTypeError::new_err(
                "View must be a name, a CameraOrientation or an (azimuth, elevation) tuple",
            )
        })
}
