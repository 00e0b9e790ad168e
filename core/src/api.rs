use crate::camera::{self, AnimationReport};
use crate::error::Result;
use crate::export::{self, ExportReport};
use crate::montage::{self, MontageReport};
use crate::render::Renderer;
use crate::resolve::resolve;
use crate::types::{
    CameraOrientation, FrameConfig, Hemisphere, ImageFormat, MontageConfig, ViewName, ViewSelection,
    ViewSpec,
};
use log::debug;
use std::path::Path;

/// Camera control over one hemisphere's rendering surface
///
/// Owns the renderer, so every operation that moves the camera takes
/// `&mut self`. The viewer remembers the last orientation it applied.
///
/// # Example
///
/// ```
/// use cortexview_core::{CameraOrientation, Hemisphere, PreviewRenderer, SurfaceViewer};
///
/// let mut viewer = SurfaceViewer::new(Hemisphere::Lh, PreviewRenderer::new(32, 32));
/// assert_eq!(viewer.current_view(), CameraOrientation::new(180.0, 90.0));
///
/// let orientation = viewer.show_view("ven").unwrap();
/// assert_eq!(orientation, CameraOrientation::new(-90.0, 180.0));
/// assert!(viewer.show_view("s").is_err());
/// ```
#[derive(Debug)]
pub struct SurfaceViewer<R: Renderer> {
    hemisphere: Hemisphere,
    renderer: R,
    current: CameraOrientation,
}

impl<R: Renderer> SurfaceViewer<R> {
    /// Wraps `renderer` and shows the lateral view
    pub fn new(hemisphere: Hemisphere, mut renderer: R) -> Self {
        let current = hemisphere.orientation(ViewName::Lateral);
        renderer.set_view(current);
        Self {
            hemisphere,
            renderer,
            current,
        }
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Last orientation applied to the renderer
    pub fn current_view(&self) -> CameraOrientation {
        self.current
    }

    /// Resolves `view` and moves the camera to it
    ///
    /// # Errors
    ///
    /// `AmbiguousOrUnknownView` if a named view does not resolve. The camera
    /// is left where it was.
    pub fn show_view(&mut self, view: impl Into<ViewSpec>) -> Result<CameraOrientation> {
        let view = view.into();
        let orientation = resolve(self.hemisphere, &view)?;
        debug!("Showing {} at {}", view, orientation);
        self.renderer.set_view(orientation);
        self.current = orientation;
        Ok(orientation)
    }

    /// Saves the current frame to `path`
    pub fn save_image(&mut self, path: impl AsRef<Path>) -> Result<()> {
        export::save_image(&mut self.renderer, path.as_ref())
    }

    /// Saves one image per view as `{prefix}_{label}.{ext}`
    pub fn save_imageset(
        &mut self,
        prefix: impl AsRef<Path>,
        views: impl Into<ViewSelection>,
        format: ImageFormat,
    ) -> Result<ExportReport> {
        let hemisphere = self.hemisphere;
        self.tracked(|renderer| {
            export::export_views(renderer, hemisphere, prefix.as_ref(), views, format)
        })
    }

    /// Saves a single-row or single-column montage of `views`
    pub fn save_montage(
        &mut self,
        output: impl AsRef<Path>,
        views: impl Into<ViewSelection>,
        config: &MontageConfig,
    ) -> Result<MontageReport> {
        let hemisphere = self.hemisphere;
        self.tracked(|renderer| {
            montage::compose_montage(renderer, hemisphere, output.as_ref(), views, config)
        })
    }

    /// Saves a montage with one row per entry of `rows`
    pub fn save_grid_montage(
        &mut self,
        output: impl AsRef<Path>,
        rows: &[Vec<ViewSpec>],
        config: &MontageConfig,
    ) -> Result<MontageReport> {
        let hemisphere = self.hemisphere;
        self.tracked(|renderer| {
            montage::compose_grid(renderer, hemisphere, output.as_ref(), rows, config)
        })
    }

    /// Rotates the camera through `views`, `steps` frames per pair
    pub fn animate(&mut self, views: &[ViewSpec], steps: usize) -> Result<AnimationReport> {
        let hemisphere = self.hemisphere;
        self.tracked(|renderer| camera::animate(renderer, hemisphere, views, steps))
    }

    /// Captures every frame of a rotation through `views`
    pub fn save_rotation_frames(
        &mut self,
        prefix: impl AsRef<Path>,
        views: &[ViewSpec],
        config: &FrameConfig,
    ) -> Result<ExportReport> {
        let hemisphere = self.hemisphere;
        self.tracked(|renderer| {
            export::save_rotation_frames(renderer, hemisphere, prefix.as_ref(), views, config)
        })
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Runs `op` on the renderer and records the last orientation it set
    fn tracked<T>(&mut self, op: impl FnOnce(&mut Tracking<'_, R>) -> Result<T>) -> Result<T> {
        let mut tracking = Tracking {
            inner: &mut self.renderer,
            last: None,
        };
        let result = op(&mut tracking);
        if let Some(last) = tracking.last {
            self.current = last;
        }
        result
    }
}

/// Renderer adapter that remembers the last `set_view`
struct Tracking<'a, R: Renderer> {
    inner: &'a mut R,
    last: Option<CameraOrientation>,
}

impl<R: Renderer> Renderer for Tracking<'_, R> {
    fn set_view(&mut self, orientation: CameraOrientation) {
        self.last = Some(orientation);
        self.inner.set_view(orientation)
    }

    fn capture_frame(&mut self, path: &Path) -> Result<()> {
        self.inner.capture_frame(path)
    }

    fn supported_formats(&self) -> Vec<ImageFormat> {
        self.inner.supported_formats()
    }
}
