use super::imageset::{check_format, discard_partial, ExportReport, ImageRecord};
use crate::camera::plan_path;
use crate::error::{Diagnostic, Result};
use crate::render::Renderer;
use crate::types::{FrameConfig, Hemisphere, ViewSpec};
use log::info;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Builds `{prefix}_{index:05}.{ext}`
fn frame_path(prefix: &Path, index: usize, extension: &str) -> PathBuf {
    let mut name = OsString::from(prefix.as_os_str());
    name.push(format!("_{:05}.{}", index, extension));
    PathBuf::from(name)
}

/// Captures every frame of a rotation through `views`
///
/// Frames are numbered by their position along the planned path, so a frame
/// that fails to capture leaves a gap in the numbering rather than shifting
/// later frames. Each record's `view` is the literal orientation of its frame.
///
/// # Errors
///
/// `UnsupportedImageFormat` or `InvalidStepCount` before anything is
/// rendered. Unresolvable views and failed captures are reported in the
/// returned [`ExportReport`].
pub fn save_rotation_frames<R: Renderer>(
    renderer: &mut R,
    hemisphere: Hemisphere,
    prefix: &Path,
    views: &[ViewSpec],
    config: &FrameConfig,
) -> Result<ExportReport> {
    check_format(&*renderer, config.format)?;
    let path = plan_path(hemisphere, views, config.steps)?;

    let mut report = ExportReport {
        images: Vec::with_capacity(path.len()),
        diagnostics: path.diagnostics.clone(),
    };

    for (index, orientation) in path.orientations().enumerate() {
        let frame = frame_path(prefix, index, config.format.extension());
        renderer.set_view(orientation);
        if let Err(e) = renderer.capture_frame(&frame) {
            discard_partial(&frame);
            report
                .diagnostics
                .push(Diagnostic::from_error(format!("frame {}", index), &e));
            continue;
        }
        report.images.push(ImageRecord {
            path: frame,
            view: ViewSpec::Literal(orientation),
            orientation,
        });
    }

    info!(
        "Wrote {} rotation frames to {}_*.{}",
        report.images.len(),
        prefix.display(),
        config.format
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CortexviewError, DiagnosticKind};
    use crate::render::PreviewRenderer;
    use crate::types::{CameraOrientation, ImageFormat};
    use tempfile::TempDir;

    #[test]
    fn test_frame_path() {
        assert_eq!(
            frame_path(Path::new("movie/lh"), 42, "png"),
            PathBuf::from("movie/lh_00042.png")
        );
    }

    #[test]
    fn test_rotation_frames_written() {
        let temp_dir = TempDir::new().unwrap();
        let prefix = temp_dir.path().join("rot");
        let mut renderer = PreviewRenderer::new(4, 4);
        let views = vec![ViewSpec::named("lat"), ViewSpec::named("med")];
        let config = FrameConfig::default().with_steps(3);

        let report =
            save_rotation_frames(&mut renderer, Hemisphere::Lh, &prefix, &views, &config).unwrap();

        assert_eq!(report.images.len(), 3);
        assert!(report.diagnostics.is_empty());
        assert!(temp_dir.path().join("rot_00000.png").exists());
        assert!(temp_dir.path().join("rot_00002.png").exists());
        assert_eq!(report.images[0].orientation, CameraOrientation::new(180.0, 90.0));
        assert_eq!(report.images[1].orientation, CameraOrientation::new(240.0, 90.0));
    }

    #[test]
    fn test_rotation_frames_report_bad_views() {
        let temp_dir = TempDir::new().unwrap();
        let prefix = temp_dir.path().join("rot");
        let mut renderer = PreviewRenderer::new(4, 4);
        let views = vec![ViewSpec::named("lat"), ViewSpec::named("nowhere")];
        let config = FrameConfig::default().with_steps(3);

        let report =
            save_rotation_frames(&mut renderer, Hemisphere::Rh, &prefix, &views, &config).unwrap();

        assert!(report.images.is_empty());
        assert_eq!(report.diagnostics.len(), 1);
        assert_eq!(report.diagnostics[0].kind, DiagnosticKind::UnknownView);
    }

    #[test]
    fn test_rotation_frames_reject_format() {
        let temp_dir = TempDir::new().unwrap();
        let mut renderer = PreviewRenderer::new(4, 4);
        let views = vec![ViewSpec::named("lat"), ViewSpec::named("med")];
        let config = FrameConfig::default().with_format(ImageFormat::Rib);

        let err = save_rotation_frames(
            &mut renderer,
            Hemisphere::Lh,
            &temp_dir.path().join("rot"),
            &views,
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, CortexviewError::UnsupportedImageFormat(_)));
        assert_eq!(renderer.views_set(), 0);
    }
}
