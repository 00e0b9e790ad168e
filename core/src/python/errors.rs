//! Python exception types for cortexview
//!
//! This module defines Python exception classes that map to Rust error types.

// Suppress warnings from PyO3's create_exception! macro about gil-refs feature
#![allow(unexpected_cfgs)]

use pyo3::{create_exception, exceptions::PyException, prelude::*};

use crate::error::CortexviewError;

// Base exception
create_exception!(
    cortexview,
    PyCortexviewError,
    PyException,
    "Base exception for all cortexview errors"
);

create_exception!(
    cortexview,
    PyViewError,
    PyCortexviewError,
    "View name is unknown or ambiguous, or a view sequence was expected"
);

create_exception!(
    cortexview,
    PyImageFormatError,
    PyCortexviewError,
    "Image file extension is not supported"
);

create_exception!(
    cortexview,
    PyCaptureError,
    PyCortexviewError,
    "Image could not be captured, decoded or written"
);

create_exception!(
    cortexview,
    PyInvalidValueError,
    PyCortexviewError,
    "Invalid hemisphere, layout, orientation or step count"
);

/// Convert Rust CortexviewError to appropriate Python exception
pub fn convert_error(err: CortexviewError) -> PyErr {
    let message = err.to_string();
    match err {
        CortexviewError::AmbiguousOrUnknownView { .. } | CortexviewError::InvalidViewSequence(_) => {
            PyViewError::new_err(message)
        }
        CortexviewError::UnsupportedImageFormat(_) => PyImageFormatError::new_err(message),
        CortexviewError::CaptureFailure { .. }
        | CortexviewError::CompositionWriteFailure { .. }
        | CortexviewError::DecodeFailure { .. }
        | CortexviewError::IoError(_)
        | CortexviewError::ImageError(_) => PyCaptureError::new_err(message),
        CortexviewError::InvalidHemisphere(_)
        | CortexviewError::InvalidLayout(_)
        | CortexviewError::InvalidOrientation(_)
        | CortexviewError::InvalidStepCount => PyInvalidValueError::new_err(message),
    }
}
