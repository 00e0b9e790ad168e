//! Rendering surface capability
//!
//! The 3D toolkit that draws the cortical mesh lives outside this crate. All
//! it has to offer here is camera placement and frame capture, captured by
//! the [`Renderer`] trait. Operations take `&mut R`, so a rendering surface
//! is only ever driven by one caller at a time.

mod preview;

pub use preview::PreviewRenderer;

use crate::error::Result;
use crate::types::{CameraOrientation, ImageFormat};
use std::path::Path;

/// A rendering surface with a single camera
pub trait Renderer {
    /// Moves the camera to `orientation`
    fn set_view(&mut self, orientation: CameraOrientation);

    /// Writes the current frame to `path`
    ///
    /// Implementations report failures as `CortexviewError::CaptureFailure`.
    fn capture_frame(&mut self, path: &Path) -> Result<()>;

    /// Formats this surface can write
    fn supported_formats(&self) -> Vec<ImageFormat> {
        ImageFormat::ALL.to_vec()
    }

    /// Returns whether `format` can be written by this surface
    fn supports(&self, format: ImageFormat) -> bool {
        self.supported_formats().contains(&format)
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn set_view(&mut self, orientation: CameraOrientation) {
        (**self).set_view(orientation)
    }

    fn capture_frame(&mut self, path: &Path) -> Result<()> {
        (**self).capture_frame(path)
    }

    fn supported_formats(&self) -> Vec<ImageFormat> {
        (**self).supported_formats()
    }
}
