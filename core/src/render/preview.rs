use super::Renderer;
use crate::error::{CortexviewError, Result};
use crate::types::{CameraOrientation, ImageFormat};
use std::path::Path;

/// Flat-shaded stand-in for a 3D rendering surface
///
/// Each captured frame is a solid `width × height` RGB image whose color
/// encodes the camera orientation: red from azimuth, green from elevation
/// (both wrapped into [0, 360) and scaled to 0..=255). Useful for laying out
/// montages and frame sequences without a mesh renderer.
#[derive(Debug, Clone)]
pub struct PreviewRenderer {
    width: u32,
    height: u32,
    current: CameraOrientation,
    views_set: usize,
    frames_captured: usize,
}

impl PreviewRenderer {
    /// Creates a preview surface of the given frame size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            current: CameraOrientation::default(),
            views_set: 0,
            frames_captured: 0,
        }
    }

    /// Frame size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Current camera orientation
    pub fn current_view(&self) -> CameraOrientation {
        self.current
    }

    /// Number of `set_view` calls so far
    pub fn views_set(&self) -> usize {
        self.views_set
    }

    /// Number of frames written so far
    pub fn frames_captured(&self) -> usize {
        self.frames_captured
    }

    /// Pixel color for an orientation
    pub fn color_for(orientation: CameraOrientation) -> [u8; 3] {
        let channel = |angle: f64| (angle.rem_euclid(360.0) / 360.0 * 255.0).round() as u8;
        [channel(orientation.azimuth), channel(orientation.elevation), 0]
    }

    fn render(&self) -> image::RgbImage {
        image::RgbImage::from_pixel(self.width, self.height, image::Rgb(Self::color_for(self.current)))
    }
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new(800, 800)
    }
}

impl Renderer for PreviewRenderer {
    fn set_view(&mut self, orientation: CameraOrientation) {
        log::debug!("Preview camera -> {}", orientation);
        self.current = orientation;
        self.views_set += 1;
    }

    fn capture_frame(&mut self, path: &Path) -> Result<()> {
        let failure = |reason: String| CortexviewError::CaptureFailure {
            path: path.to_path_buf(),
            reason,
        };

        let format = ImageFormat::from_path(path).map_err(|e| failure(e.to_string()))?;
        if !format.is_raster() {
            return Err(failure(format!("preview surface cannot write {} files", format)));
        }

        self.render()
            .save(path)
            .map_err(|e| failure(e.to_string()))?;
        self.frames_captured += 1;
        Ok(())
    }

    fn supported_formats(&self) -> Vec<ImageFormat> {
        ImageFormat::ALL
            .iter()
            .copied()
            .filter(ImageFormat::is_raster)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_color_for_orientation() {
        assert_eq!(
            PreviewRenderer::color_for(CameraOrientation::new(0.0, 0.0)),
            [0, 0, 0]
        );
        assert_eq!(
            PreviewRenderer::color_for(CameraOrientation::new(180.0, 90.0)),
            [128, 64, 0]
        );
        // -90 wraps to 270
        assert_eq!(
            PreviewRenderer::color_for(CameraOrientation::new(-90.0, 360.0)),
            [191, 0, 0]
        );
    }

    #[test]
    fn test_capture_writes_frame() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("frame.png");

        let mut renderer = PreviewRenderer::new(12, 7);
        renderer.set_view(CameraOrientation::new(180.0, 90.0));
        renderer.capture_frame(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (12, 7));
        assert_eq!(img.get_pixel(3, 3).0, [128, 64, 0]);
        assert_eq!(renderer.views_set(), 1);
        assert_eq!(renderer.frames_captured(), 1);
    }

    #[test]
    fn test_capture_rejects_vector_formats() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("frame.eps");

        let mut renderer = PreviewRenderer::new(4, 4);
        let err = renderer.capture_frame(&path).unwrap_err();
        assert!(matches!(err, CortexviewError::CaptureFailure { .. }));
        assert!(!path.exists());
        assert!(!renderer.supports(ImageFormat::Eps));
        assert!(renderer.supports(ImageFormat::Tiff));
    }
}
