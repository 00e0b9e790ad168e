use super::compose::{capture_rasters, check_montage_formats, tile_images, write_or_report, MontageReport};
use super::scratch::ScratchImages;
use crate::error::{CortexviewError, Diagnostic, DiagnosticKind, Result};
use crate::render::Renderer;
use crate::types::{Hemisphere, MontageConfig, MontageLayout, ViewSpec};
use log::info;
use std::path::Path;

/// Renders a grid of views and stitches it into one image
///
/// Each row is tiled horizontally, then the rows are tiled vertically.
/// Rows are left-aligned; a short row leaves the right side empty.
/// `config.layout` is ignored. Rows whose views all fail are skipped with an
/// `EmptyMontage` diagnostic.
///
/// # Errors
///
/// - `InvalidViewSequence` if `rows` is empty
/// - `UnsupportedImageFormat` as for [`compose_montage`](super::compose_montage)
pub fn compose_grid<R: Renderer>(
    renderer: &mut R,
    hemisphere: Hemisphere,
    output: &Path,
    rows: &[Vec<ViewSpec>],
    config: &MontageConfig,
) -> Result<MontageReport> {
    if rows.is_empty() {
        return Err(CortexviewError::InvalidViewSequence("[]".to_string()));
    }
    check_montage_formats(output, config)?;

    let mut scratch = ScratchImages::new(&config.work_dir, config.temp_prefix.clone());
    scratch.protect(output);
    let mut diagnostics = Vec::new();
    let mut components = Vec::new();
    let mut row_images = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        // Row number in the prefix keeps a view repeated across rows distinct
        let prefix = config.work_dir.join(format!("{}_r{}", config.temp_prefix, index));
        let decoded = capture_rasters(
            renderer,
            hemisphere,
            &prefix,
            row.clone(),
            config.temp_format,
            &mut scratch,
            &mut diagnostics,
        )?;

        if decoded.is_empty() {
            diagnostics.push(Diagnostic::new(
                DiagnosticKind::EmptyMontage,
                format!("row {}", index),
                "no images in row",
            ));
            continue;
        }

        let (records, rasters): (Vec<_>, Vec<_>) = decoded.into_iter().unzip();
        components.extend(records);
        row_images.push(tile_images(&rasters, MontageLayout::Horizontal));
    }

    let mut report = MontageReport {
        output: output.to_path_buf(),
        written: false,
        size: None,
        components,
        diagnostics: Vec::new(),
    };

    if row_images.is_empty() {
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::EmptyMontage,
            output.display().to_string(),
            "no rows to compose",
        ));
    } else {
        let canvas = tile_images(&row_images, MontageLayout::Vertical);
        report.size = Some(canvas.dimensions());
        report.written = write_or_report(canvas, output, &mut diagnostics);
    }

    drop(scratch);
    report.diagnostics = diagnostics;

    if report.written {
        info!(
            "Saved {}-row grid montage to {}",
            row_images.len(),
            output.display()
        );
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PreviewRenderer;
    use crate::types::CameraOrientation;
    use tempfile::TempDir;

    fn row(names: &[&str]) -> Vec<ViewSpec> {
        names.iter().map(|n| ViewSpec::named(*n)).collect()
    }

    #[test]
    fn test_grid_two_by_two() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("grid.png");
        let config = MontageConfig::default().with_work_dir(temp_dir.path());
        let mut renderer = PreviewRenderer::new(6, 4);

        let rows = vec![row(&["lat", "med"]), row(&["dor", "ven"])];
        let report = compose_grid(&mut renderer, Hemisphere::Lh, &output, &rows, &config).unwrap();

        assert!(report.written);
        assert_eq!(report.size, Some((12, 8)));
        assert_eq!(report.components.len(), 4);

        let img = image::open(&output).unwrap().to_rgba8();
        let ventral = PreviewRenderer::color_for(CameraOrientation::new(-90.0, 180.0));
        assert_eq!(&img.get_pixel(11, 7).0[..3], &ventral);

        let entries: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().flatten().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_grid_output_sharing_temp_prefix_is_kept() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("tmp_grid.png");
        let config = MontageConfig::default()
            .with_work_dir(temp_dir.path())
            .with_temp_prefix("tmp");
        let mut renderer = PreviewRenderer::new(4, 4);

        let rows = vec![row(&["lat"]), row(&["med"])];
        let report = compose_grid(&mut renderer, Hemisphere::Rh, &output, &rows, &config).unwrap();

        assert!(report.written);
        assert!(output.exists());
        let entries: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().flatten().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_grid_uneven_rows_and_repeats() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("grid.png");
        let config = MontageConfig::default().with_work_dir(temp_dir.path());
        let mut renderer = PreviewRenderer::new(5, 5);

        let rows = vec![row(&["lat"]), row(&["lat", "med", "ant"])];
        let report = compose_grid(&mut renderer, Hemisphere::Rh, &output, &rows, &config).unwrap();

        assert_eq!(report.size, Some((15, 10)));
        let img = image::open(&output).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(10, 0).0[3], 0);
        assert_eq!(img.get_pixel(10, 5).0[3], 255);
    }

    #[test]
    fn test_grid_skips_empty_rows() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("grid.png");
        let config = MontageConfig::default().with_work_dir(temp_dir.path());
        let mut renderer = PreviewRenderer::new(5, 5);

        let rows = vec![row(&["nope"]), row(&["med"])];
        let report = compose_grid(&mut renderer, Hemisphere::Lh, &output, &rows, &config).unwrap();

        assert!(report.written);
        assert_eq!(report.size, Some((5, 5)));
        let kinds: Vec<_> = report.diagnostics.iter().map(|d| d.kind).collect();
        assert_eq!(
            kinds,
            vec![DiagnosticKind::UnknownView, DiagnosticKind::EmptyMontage]
        );
    }

    #[test]
    fn test_grid_requires_rows() {
        let temp_dir = TempDir::new().unwrap();
        let config = MontageConfig::default().with_work_dir(temp_dir.path());
        let mut renderer = PreviewRenderer::new(5, 5);

        let err = compose_grid(
            &mut renderer,
            Hemisphere::Lh,
            &temp_dir.path().join("grid.png"),
            &[],
            &config,
        )
        .unwrap_err();
        assert!(matches!(err, CortexviewError::InvalidViewSequence(_)));
    }
}
