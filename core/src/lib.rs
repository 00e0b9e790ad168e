//! Camera control, image export and montage composition for cortical
//! surface viewers.
//!
//! Views are resolved per hemisphere from preset names (abbreviations
//! allowed) or literal orientations:
//!
//! ```
//! use cortexview_core::{resolve, shortest_angular_delta, CameraOrientation, Hemisphere, ViewSpec};
//!
//! let lateral = resolve(Hemisphere::Lh, &ViewSpec::named("lat")).unwrap();
//! assert_eq!(lateral, CameraOrientation::new(180.0, 90.0));
//!
//! let delta = shortest_angular_delta(lateral, CameraOrientation::new(-170.0, 90.0));
//! assert_eq!(delta, CameraOrientation::new(10.0, 0.0));
//! ```
//!
//! Montage and frame export settings are plain builders:
//!
//! ```
//! use cortexview_core::{FrameConfig, ImageFormat, MontageConfig, MontageLayout};
//!
//! let montage = MontageConfig::default().with_layout(MontageLayout::Vertical);
//! let frames = FrameConfig::default().with_steps(30).with_format(ImageFormat::Jpg);
//! assert_eq!(montage.temp_format, ImageFormat::Png);
//! assert_eq!(frames.steps, 30);
//! ```

pub mod api;
pub mod camera;
pub mod cli;
pub mod error;
pub mod export;
pub mod montage;
pub mod render;
pub mod resolve;
pub mod types;

#[cfg(feature = "python")]
mod python;

pub use api::SurfaceViewer;
pub use camera::{
    animate, interpolate, plan_path, shortest_angular_delta, AnimationPath, AnimationReport,
    CameraPath,
};
pub use cli::report::TextReport;
pub use error::{CortexviewError, Diagnostic, DiagnosticKind, Result};
pub use export::{export_views, save_image, save_rotation_frames, ExportReport, ImageRecord};
pub use montage::{compose_grid, compose_montage, MontageReport};
pub use render::{PreviewRenderer, Renderer};
pub use resolve::{resolve, resolve_name};
pub use types::*;
