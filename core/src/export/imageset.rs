use crate::error::{CortexviewError, Diagnostic, Result};
use crate::render::Renderer;
use crate::resolve::resolve;
use crate::types::{CameraOrientation, Hemisphere, ImageFormat, ViewSelection, ViewSpec};
use log::{debug, info, warn};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// An image written by the exporter
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ImageRecord {
    /// Path of the written file
    pub path: PathBuf,

    /// View requested for this image
    pub view: ViewSpec,

    /// Orientation the camera was set to
    pub orientation: CameraOrientation,
}

/// Outcome of a batch capture
///
/// `images` lists the files actually written, in input order. Skipped views
/// appear only in `diagnostics`.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ExportReport {
    pub images: Vec<ImageRecord>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ExportReport {
    /// Paths of the written images
    pub fn paths(&self) -> Vec<PathBuf> {
        self.images.iter().map(|record| record.path.clone()).collect()
    }

    /// Every path this batch may have touched, written or not
    pub fn touched_paths(&self) -> Vec<PathBuf> {
        self.images
            .iter()
            .map(|record| record.path.clone())
            .chain(self.diagnostics.iter().filter_map(|d| d.path.clone()))
            .collect()
    }
}

/// Builds `{prefix}_{label}.{ext}`
pub fn image_path(prefix: &Path, label: &str, format: ImageFormat) -> PathBuf {
    let mut name = OsString::from(prefix.as_os_str());
    name.push(format!("_{}.{}", label, format.extension()));
    PathBuf::from(name)
}

/// Checks that `format` is allow-listed and writable by `renderer`
pub fn check_format<R: Renderer>(renderer: &R, format: ImageFormat) -> Result<()> {
    if renderer.supports(format) {
        Ok(())
    } else {
        Err(CortexviewError::UnsupportedImageFormat(format.extension().to_string()))
    }
}

/// Saves the renderer's current frame to `path`
///
/// # Errors
///
/// - `UnsupportedImageFormat` if the extension is not allow-listed or not
///   writable by the renderer
/// - `CaptureFailure` if the renderer fails to write the frame
pub fn save_image<R: Renderer>(renderer: &mut R, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path)?;
    check_format(&*renderer, format)?;
    renderer.capture_frame(path)?;
    debug!("Saved {}", path.display());
    Ok(())
}

/// Renders and saves one image per view
///
/// Files are named `{prefix}_{label}.{ext}`, where the label is the view as
/// given (`lat`, `az90_el0`, ...).
///
/// # Errors
///
/// - `InvalidViewSequence` if `views` is a single view rather than a sequence
/// - `UnsupportedImageFormat` if `format` cannot be written by the renderer
///
/// Unresolvable views and failed captures are skipped and reported in the
/// returned [`ExportReport`].
pub fn export_views<R: Renderer>(
    renderer: &mut R,
    hemisphere: Hemisphere,
    prefix: &Path,
    views: impl Into<ViewSelection>,
    format: ImageFormat,
) -> Result<ExportReport> {
    let views = views.into().into_sequence()?;
    check_format(&*renderer, format)?;

    let mut report = ExportReport::default();
    for view in views {
        let label = view.label();

        let orientation = match resolve(hemisphere, &view) {
            Ok(orientation) => orientation,
            Err(e) => {
                report.diagnostics.push(Diagnostic::from_error(label, &e));
                continue;
            }
        };

        let path = image_path(prefix, &label, format);
        renderer.set_view(orientation);
        if let Err(e) = renderer.capture_frame(&path) {
            discard_partial(&path);
            report.diagnostics.push(Diagnostic::from_error(label, &e));
            continue;
        }

        report.images.push(ImageRecord {
            path,
            view,
            orientation,
        });
    }

    info!(
        "Wrote {} images ({} skipped)",
        report.images.len(),
        report.diagnostics.len()
    );
    Ok(report)
}

/// Removes whatever a failed capture may have left behind
pub(crate) fn discard_partial(path: &Path) {
    if path.exists() {
        if let Err(e) = std::fs::remove_file(path) {
            warn!("Failed to remove partial file {}: {}", path.display(), e);
        }
    }
}
