//! Python wrappers for view resolution and camera paths

use pyo3::prelude::*;

use super::enums::{PyCameraOrientation, PyViewName};
use super::errors::convert_error;
use super::utils::{hemisphere_from_py, orientation_from_py, view_from_py};
use crate::types::DEFAULT_STEPS;

/// Resolve a view to a camera orientation
///
/// Args:
///     hemisphere: Hemisphere or "lh"/"rh"
///     view: Preset name, unique abbreviation ("lat", "d"), CameraOrientation
///         or (azimuth, elevation) tuple
///
/// Returns:
///     CameraOrientation: The resolved orientation
///
/// Raises:
///     ViewError: If the name matches no preset or several presets
///
/// Example:
///     >>> from cortexview import resolve_view
///     >>> resolve_view("lh", "ven").as_tuple()
///     (-90.0, 180.0)
#[pyfunction]
#[pyo3(name = "resolve_view")]
pub fn py_resolve_view(
    hemisphere: &Bound<'_, PyAny>,
    view: &Bound<'_, PyAny>,
) -> PyResult<PyCameraOrientation> {
    let hemisphere = hemisphere_from_py(hemisphere)?;
    let view = view_from_py(view)?;
    crate::resolve::resolve(hemisphere, &view)
        .map(Into::into)
        .map_err(convert_error)
}

/// Resolve a possibly abbreviated name to its preset view
#[pyfunction]
#[pyo3(name = "resolve_name")]
pub fn py_resolve_name(hemisphere: &Bound<'_, PyAny>, name: &str) -> PyResult<PyViewName> {
    let hemisphere = hemisphere_from_py(hemisphere)?;
    crate::resolve::resolve_name(hemisphere, name)
        .map(Into::into)
        .map_err(convert_error)
}

/// Shortest per-component rotation from `start` to `end`, each in (-180, 180]
#[pyfunction]
#[pyo3(name = "shortest_angular_delta")]
pub fn py_shortest_angular_delta(
    start: &Bound<'_, PyAny>,
    end: &Bound<'_, PyAny>,
) -> PyResult<PyCameraOrientation> {
    let start = orientation_from_py(start)?;
    let end = orientation_from_py(end)?;
    Ok(crate::camera::shortest_angular_delta(start, end).into())
}

/// Interpolate `steps` orientations from `start` toward `end`
///
/// The end orientation itself is not included.
#[pyfunction]
#[pyo3(name = "interpolate", signature = (start, end, steps = DEFAULT_STEPS))]
pub fn py_interpolate(
    start: &Bound<'_, PyAny>,
    end: &Bound<'_, PyAny>,
    steps: usize,
) -> PyResult<Vec<PyCameraOrientation>> {
    let start = orientation_from_py(start)?;
    let end = orientation_from_py(end)?;
    let path = crate::camera::interpolate(start, end, steps).map_err(convert_error)?;
    Ok(path.map(Into::into).collect())
}

/// Plan the camera path through a list of views
///
/// Returns:
///     tuple: (list of CameraOrientation, list of diagnostic messages for
///     skipped views)
#[pyfunction]
#[pyo3(name = "plan_path", signature = (hemisphere, views, steps = DEFAULT_STEPS))]
pub fn py_plan_path(
    hemisphere: &Bound<'_, PyAny>,
    views: Vec<Bound<'_, PyAny>>,
    steps: usize,
) -> PyResult<(Vec<PyCameraOrientation>, Vec<String>)> {
    let hemisphere = hemisphere_from_py(hemisphere)?;
    let views = views
        .iter()
        .map(view_from_py)
        .collect::<PyResult<Vec<_>>>()?;

    let path = crate::camera::plan_path(hemisphere, &views, steps).map_err(convert_error)?;
    let orientations = path.orientations().map(Into::into).collect();
    let diagnostics = path.diagnostics.iter().map(ToString::to_string).collect();
    Ok((orientations, diagnostics))
}
