//! Core type definitions for cortical surface views
//!
//! This module provides the fundamental types used throughout the cortexview library:
//! - [`Hemisphere`]: Left or right cortical hemisphere
//! - [`ViewName`]: Preset views (lateral, medial, ...)
//! - [`CameraOrientation`]: Azimuth/elevation pair in degrees
//! - [`ViewSpec`]: Named or literal view request
//! - [`ViewSelection`]: Single view vs. ordered sequence of views
//! - [`ImageFormat`]: Allow-listed output image types
//! - [`MontageLayout`]: Tiling axis of a montage
//! - [`MontageConfig`] / [`FrameConfig`]: Configuration for batch output

mod config;
mod enums;
mod orientation;
mod view;

pub use config::{FrameConfig, MontageConfig, DEFAULT_STEPS, MONTAGE_TEMP_PREFIX};
pub use enums::{Hemisphere, ImageFormat, MontageLayout, ViewName};
pub use orientation::CameraOrientation;
pub use view::{ViewSelection, ViewSpec, LH_VIEWS, RH_VIEWS};
