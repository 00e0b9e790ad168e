//! Python wrappers for cortexview enums and data structures

use pyo3::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::errors::convert_error;
use super::macros::wrap_core_values;
use crate::types::{CameraOrientation, Hemisphere, ViewName};

// ============================================================================
// Hemisphere
// ============================================================================

#[pyclass(name = "Hemisphere", module = "cortexview")]
#[derive(Clone, Debug)]
pub struct PyHemisphere {
    pub(crate) inner: Hemisphere,
}

#[pymethods]
impl PyHemisphere {
    #[classattr]
    const LH: Self = Self {
        inner: Hemisphere::Lh,
    };
    #[classattr]
    const RH: Self = Self {
        inner: Hemisphere::Rh,
    };

    /// Parse "lh", "rh", "left" or "right"
    #[staticmethod]
    fn from_str(s: &str) -> PyResult<Self> {
        Hemisphere::parse(s).map(Self::from).map_err(convert_error)
    }

    fn opposite(&self) -> Self {
        self.inner.opposite().into()
    }

    /// Orientation of a preset view, by full name
    fn view(&self, name: &PyViewName) -> PyCameraOrientation {
        self.inner.orientation(name.core()).into()
    }

    pub fn simple_name(&self) -> &'static str {
        self.inner.simple_name()
    }

    fn __str__(&self) -> String {
        self.inner.short_str().to_string()
    }

    fn __repr__(&self) -> String {
        format!("Hemisphere.{}", self.inner.short_str().to_uppercase())
    }

    fn __eq__(&self, other: &PyHemisphere) -> bool {
        self.inner == other.inner
    }

    fn __hash__(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.inner.hash(&mut hasher);
        hasher.finish()
    }

    #[getter]
    fn value(&self) -> &str {
        self.inner.short_str()
    }
}

// ============================================================================
// ViewName
// ============================================================================

#[pyclass(name = "ViewName", module = "cortexview")]
#[derive(Clone, Debug)]
pub struct PyViewName {
    pub(crate) inner: ViewName,
}

#[pymethods]
impl PyViewName {
    #[classattr]
    const LATERAL: Self = Self {
        inner: ViewName::Lateral,
    };
    #[classattr]
    const MEDIAL: Self = Self {
        inner: ViewName::Medial,
    };
    #[classattr]
    const ANTERIOR: Self = Self {
        inner: ViewName::Anterior,
    };
    #[classattr]
    const POSTERIOR: Self = Self {
        inner: ViewName::Posterior,
    };
    #[classattr]
    const DORSAL: Self = Self {
        inner: ViewName::Dorsal,
    };
    #[classattr]
    const VENTRAL: Self = Self {
        inner: ViewName::Ventral,
    };

    fn __str__(&self) -> String {
        self.inner.key().to_string()
    }

    fn __repr__(&self) -> String {
        format!("ViewName.{}", self.inner.key().to_uppercase())
    }

    fn __eq__(&self, other: &PyViewName) -> bool {
        self.inner == other.inner
    }

    fn __hash__(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.inner.hash(&mut hasher);
        hasher.finish()
    }

    fn __lt__(&self, other: &PyViewName) -> bool {
        self.inner < other.inner
    }

    #[getter]
    fn value(&self) -> &str {
        self.inner.key()
    }
}

// ============================================================================
// CameraOrientation
// ============================================================================

/// Camera azimuth and elevation in degrees
#[pyclass(name = "CameraOrientation", module = "cortexview")]
#[derive(Clone, Debug)]
pub struct PyCameraOrientation {
    pub(crate) inner: CameraOrientation,
}

#[pymethods]
impl PyCameraOrientation {
    #[new]
    fn new(azimuth: f64, elevation: f64) -> Self {
        CameraOrientation::new(azimuth, elevation).into()
    }

    /// Parse "180,90", "(180, 90)" or "180 90"
    #[staticmethod]
    fn parse(s: &str) -> PyResult<Self> {
        CameraOrientation::parse(s)
            .map(Self::from)
            .map_err(convert_error)
    }

    #[getter]
    fn azimuth(&self) -> f64 {
        self.inner.azimuth
    }

    #[getter]
    fn elevation(&self) -> f64 {
        self.inner.elevation
    }

    fn as_tuple(&self) -> (f64, f64) {
        self.inner.as_tuple()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "CameraOrientation(azimuth={}, elevation={})",
            self.inner.azimuth, self.inner.elevation
        )
    }

    fn __eq__(&self, other: &PyCameraOrientation) -> bool {
        self.inner == other.inner
    }
}

wrap_core_values!(
    PyHemisphere => Hemisphere,
    PyViewName => ViewName,
    PyCameraOrientation => CameraOrientation,
);
