use crate::camera::AnimationPath;
use crate::error::{Diagnostic, Result};
use crate::export::ExportReport;
use crate::montage::MontageReport;
use crate::resolve::{resolve, resolve_name};
use crate::types::{CameraOrientation, Hemisphere, ViewName, ViewSpec};
use std::fmt;

/// One resolved command-line view
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ResolvedView {
    pub input: String,

    /// Preset the input resolved to, `None` for literal orientations
    pub view: Option<ViewName>,

    pub orientation: CameraOrientation,
}

/// Outcome of resolving a list of views
#[derive(Debug, Clone)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ResolveReport {
    pub hemisphere: Hemisphere,
    pub views: Vec<ResolvedView>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ResolveReport {
    /// Resolves every view, collecting failures
    pub fn build(hemisphere: Hemisphere, views: &[ViewSpec]) -> Self {
        let mut report = Self {
            hemisphere,
            views: Vec::with_capacity(views.len()),
            diagnostics: Vec::new(),
        };
        for spec in views {
            match resolve_one(hemisphere, spec) {
                Ok(resolved) => report.views.push(resolved),
                Err(e) => report
                    .diagnostics
                    .push(Diagnostic::from_error(spec.label(), &e)),
            }
        }
        report
    }
}

fn resolve_one(hemisphere: Hemisphere, spec: &ViewSpec) -> Result<ResolvedView> {
    let view = match spec {
        ViewSpec::Named(name) => Some(resolve_name(hemisphere, name)?),
        ViewSpec::Literal(_) => None,
    };
    Ok(ResolvedView {
        input: spec.to_string(),
        view,
        orientation: resolve(hemisphere, spec)?,
    })
}

/// One interpolated segment of a planned path
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SegmentSummary {
    pub start: CameraOrientation,
    pub increment: CameraOrientation,
    pub steps: usize,
}

/// Serializable summary of an [`AnimationPath`]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct PathSummary {
    pub hemisphere: Hemisphere,
    pub frames: usize,
    pub segments: Vec<SegmentSummary>,

    /// Every orientation, only when requested
    pub orientations: Option<Vec<CameraOrientation>>,

    pub diagnostics: Vec<Diagnostic>,
}

impl PathSummary {
    pub fn new(hemisphere: Hemisphere, path: &AnimationPath, with_orientations: bool) -> Self {
        Self {
            hemisphere,
            frames: path.len(),
            segments: path
                .segments
                .iter()
                .map(|segment| SegmentSummary {
                    start: segment.start(),
                    increment: segment.increment(),
                    steps: segment.steps(),
                })
                .collect(),
            orientations: with_orientations.then(|| path.orientations().collect()),
            diagnostics: path.diagnostics.clone(),
        }
    }
}

/// Text report formatter for command results
pub struct TextReport<'a, T> {
    report: &'a T,
}

impl<'a, T> TextReport<'a, T> {
    /// Creates a new text report
    pub fn new(report: &'a T) -> Self {
        Self { report }
    }
}

fn write_diagnostics(f: &mut fmt::Formatter<'_>, diagnostics: &[Diagnostic]) -> fmt::Result {
    if diagnostics.is_empty() {
        return Ok(());
    }
    writeln!(f)?;
    writeln!(f, "Diagnostics")?;
    writeln!(f, "-----------")?;
    for diagnostic in diagnostics {
        writeln!(f, "{}", diagnostic)?;
    }
    Ok(())
}

impl fmt::Display for TextReport<'_, ResolveReport> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resolved Views ({})", self.report.hemisphere.simple_name())?;
        writeln!(f, "==============")?;
        for resolved in &self.report.views {
            let name = resolved.view.map(|v| v.key()).unwrap_or("literal");
            writeln!(
                f,
                "{:<12} {:<10} {}",
                resolved.input, name, resolved.orientation
            )?;
        }
        write_diagnostics(f, &self.report.diagnostics)
    }
}

impl fmt::Display for TextReport<'_, PathSummary> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = self.report;
        writeln!(f, "Camera Path ({})", summary.hemisphere.simple_name())?;
        writeln!(f, "===========")?;
        writeln!(f, "Frames:   {}", summary.frames)?;
        writeln!(f, "Segments: {}", summary.segments.len())?;
        for segment in &summary.segments {
            writeln!(
                f,
                "  from {} by {} x {}",
                segment.start, segment.increment, segment.steps
            )?;
        }
        if let Some(orientations) = &summary.orientations {
            writeln!(f)?;
            for (index, orientation) in orientations.iter().enumerate() {
                writeln!(f, "{:>6} {}", index, orientation)?;
            }
        }
        write_diagnostics(f, &summary.diagnostics)
    }
}

impl fmt::Display for TextReport<'_, ExportReport> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved Images")?;
        writeln!(f, "============")?;
        for record in &self.report.images {
            writeln!(
                f,
                "{:<12} {:<16} {}",
                record.view.label(),
                record.orientation.to_string(),
                record.path.display()
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Written: {}  Skipped: {}",
            self.report.images.len(),
            self.report.diagnostics.len()
        )?;
        write_diagnostics(f, &self.report.diagnostics)
    }
}

impl fmt::Display for TextReport<'_, MontageReport> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.report;
        writeln!(f, "Montage")?;
        writeln!(f, "=======")?;
        writeln!(f, "Output:     {}", report.output.display())?;
        writeln!(f, "Written:    {}", report.written)?;
        match report.size {
            Some((width, height)) => writeln!(f, "Size:       {}x{}", width, height)?,
            None => writeln!(f, "Size:       none")?,
        }
        let views: Vec<_> = report.components.iter().map(|c| c.view.label()).collect();
        writeln!(f, "Components: {}", views.join(", "))?;
        write_diagnostics(f, &report.diagnostics)
    }
}
