use super::scratch::ScratchImages;
use crate::error::{CortexviewError, Diagnostic, DiagnosticKind, Result};
use crate::export::{export_views, ImageRecord};
use crate::render::Renderer;
use crate::types::{Hemisphere, ImageFormat, MontageConfig, MontageLayout, ViewSelection, ViewSpec};
use image::{DynamicImage, RgbaImage};
use log::{error, info};
use std::path::{Path, PathBuf};

/// Outcome of a montage call
#[derive(Debug, Clone)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct MontageReport {
    /// Requested output path
    pub output: PathBuf,

    /// Whether the composite was written
    pub written: bool,

    /// Composite size in pixels (width, height), if one was built
    pub size: Option<(u32, u32)>,

    /// Component images used, in tiling order (already deleted)
    pub components: Vec<ImageRecord>,

    pub diagnostics: Vec<Diagnostic>,
}

/// Canvas size for tiling images of the given sizes
///
/// Horizontal: (sum of widths, max height). Vertical: (max width, sum of heights).
pub fn composite_size(dims: &[(u32, u32)], layout: MontageLayout) -> (u32, u32) {
    let along = |d: &(u32, u32)| match layout {
        MontageLayout::Horizontal => d.0,
        MontageLayout::Vertical => d.1,
    };
    let across = |d: &(u32, u32)| match layout {
        MontageLayout::Horizontal => d.1,
        MontageLayout::Vertical => d.0,
    };

    let total: u32 = dims.iter().map(along).sum();
    let extent = dims.iter().map(across).max().unwrap_or(0);

    match layout {
        MontageLayout::Horizontal => (total, extent),
        MontageLayout::Vertical => (extent, total),
    }
}

/// Tiles images along `layout`
///
/// Each image is pasted at the running offset along the layout axis and at
/// offset 0 on the cross axis. Uncovered canvas stays transparent.
pub fn tile_images(images: &[RgbaImage], layout: MontageLayout) -> RgbaImage {
    let dims: Vec<_> = images.iter().map(RgbaImage::dimensions).collect();
    let (width, height) = composite_size(&dims, layout);

    let mut canvas = RgbaImage::new(width, height);
    let mut offset: i64 = 0;
    for img in images {
        match layout {
            MontageLayout::Horizontal => {
                image::imageops::replace(&mut canvas, img, offset, 0);
                offset += i64::from(img.width());
            }
            MontageLayout::Vertical => {
                image::imageops::replace(&mut canvas, img, 0, offset);
                offset += i64::from(img.height());
            }
        }
    }
    canvas
}

/// Writes a composite image, picking a pixel layout the encoder accepts
pub fn save_composite(canvas: RgbaImage, output: &Path) -> Result<()> {
    let failure = |reason: String| CortexviewError::CompositionWriteFailure {
        path: output.to_path_buf(),
        reason,
    };

    let format = ImageFormat::from_path(output)?;
    let saved = match format {
        ImageFormat::Jpg => DynamicImage::ImageRgba8(canvas).to_rgb8().save(output),
        f if f.is_raster() => canvas.save(output),
        f => return Err(failure(format!("composites cannot be encoded as {}", f))),
    };

    saved.map_err(|e| failure(e.to_string()))
}

/// Captures `views` to scratch files and decodes them
///
/// Every file the export touched is handed to `scratch`, so it is deleted
/// with the guard.
pub(crate) fn capture_rasters<R: Renderer>(
    renderer: &mut R,
    hemisphere: Hemisphere,
    prefix: &Path,
    views: Vec<ViewSpec>,
    format: ImageFormat,
    scratch: &mut ScratchImages,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<(ImageRecord, RgbaImage)>> {
    let export = export_views(renderer, hemisphere, prefix, views, format)?;
    scratch.track(export.touched_paths());
    diagnostics.extend(export.diagnostics);

    let mut decoded = Vec::with_capacity(export.images.len());
    for record in export.images {
        match image::open(&record.path) {
            Ok(img) => decoded.push((record, img.to_rgba8())),
            Err(e) => {
                let err = CortexviewError::DecodeFailure {
                    path: record.path.clone(),
                    reason: e.to_string(),
                };
                diagnostics.push(Diagnostic::from_error(record.view.label(), &err));
            }
        }
    }
    Ok(decoded)
}

/// Checks the montage preconditions that must fail before any file exists
pub(crate) fn check_montage_formats(output: &Path, config: &MontageConfig) -> Result<()> {
    ImageFormat::from_path(output)?;
    if !config.temp_format.is_raster() {
        return Err(CortexviewError::UnsupportedImageFormat(
            config.temp_format.extension().to_string(),
        ));
    }
    Ok(())
}

/// Writes `canvas` to `output`, reporting instead of failing
///
/// Returns whether the file was written. A failed raster encode leaves no
/// partial file behind. Outputs that are rejected before encoding are never
/// opened, so an existing file at `output` survives.
pub(crate) fn write_or_report(canvas: RgbaImage, output: &Path, diagnostics: &mut Vec<Diagnostic>) -> bool {
    match save_composite(canvas, output) {
        Ok(()) => true,
        Err(e) => {
            error!("{}", e);
            let encoded = ImageFormat::from_path(output)
                .map(|format| format.is_raster())
                .unwrap_or(false);
            if encoded {
                crate::export::imageset::discard_partial(output);
            }
            diagnostics.push(Diagnostic::from_error(output.display().to_string(), &e));
            false
        }
    }
}

/// Renders `views` and stitches them into one image
///
/// Components are captured to `{work_dir}/{temp_prefix}_{label}.{ext}`,
/// decoded, tiled along `config.layout` and written to `output`. The
/// component files are always deleted before returning.
///
/// # Errors
///
/// - `InvalidViewSequence` if `views` is a single view
/// - `UnsupportedImageFormat` if `output` has an unlisted extension or the
///   temporary format cannot be decoded
///
/// A failed write of the composite is reported in the returned
/// [`MontageReport`], not raised.
pub fn compose_montage<R: Renderer>(
    renderer: &mut R,
    hemisphere: Hemisphere,
    output: &Path,
    views: impl Into<ViewSelection>,
    config: &MontageConfig,
) -> Result<MontageReport> {
    let views = views.into().into_sequence()?;
    check_montage_formats(output, config)?;

    let mut scratch = ScratchImages::new(&config.work_dir, config.temp_prefix.clone());
    scratch.protect(output);
    let mut diagnostics = Vec::new();

    let decoded = capture_rasters(
        renderer,
        hemisphere,
        &config.temp_path_prefix(),
        views,
        config.temp_format,
        &mut scratch,
        &mut diagnostics,
    )?;
    let (components, rasters): (Vec<_>, Vec<_>) = decoded.into_iter().unzip();

    let mut report = MontageReport {
        output: output.to_path_buf(),
        written: false,
        size: None,
        components,
        diagnostics: Vec::new(),
    };

    if rasters.is_empty() {
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::EmptyMontage,
            output.display().to_string(),
            "no component images to compose",
        ));
    } else {
        let canvas = tile_images(&rasters, config.layout);
        report.size = Some(canvas.dimensions());
        report.written = write_or_report(canvas, output, &mut diagnostics);
    }

    drop(scratch);
    report.diagnostics = diagnostics;

    if report.written {
        info!(
            "Saved {} montage of {} views to {}",
            config.layout,
            report.components.len(),
            output.display()
        );
    }
    Ok(report)
}
