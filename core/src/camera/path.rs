use super::interpolate::{interpolate, CameraPath};
use crate::error::{CortexviewError, Diagnostic, DiagnosticKind, Result};
use crate::render::Renderer;
use crate::resolve::resolve;
use crate::types::{CameraOrientation, Hemisphere, ViewSpec};
use log::{debug, info};

/// Camera path through a sequence of views
///
/// One [`CameraPath`] segment per consecutive pair of views. Pairs that could
/// not be resolved are left out and reported in `diagnostics`.
#[derive(Debug, Clone)]
pub struct AnimationPath {
    pub segments: Vec<CameraPath>,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnimationPath {
    /// Iterates over every orientation of every segment, in order
    pub fn orientations(&self) -> impl Iterator<Item = CameraOrientation> + '_ {
        self.segments.iter().flat_map(CameraPath::restart)
    }

    /// Total number of orientations
    pub fn len(&self) -> usize {
        self.segments.iter().map(CameraPath::steps).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Plans the camera path through `views`
///
/// Consecutive pairs are resolved and interpolated with `steps` orientations
/// each. The final view only ends the last pair; it is never a pair start.
///
/// # Errors
///
/// `InvalidStepCount` when `steps` is zero. Unresolvable views are not
/// errors: every pair touching one is skipped with a diagnostic, and fewer
/// than two views yield an empty path with a `PathTooShort` diagnostic.
pub fn plan_path(hemisphere: Hemisphere, views: &[ViewSpec], steps: usize) -> Result<AnimationPath> {
    if steps == 0 {
        return Err(CortexviewError::InvalidStepCount);
    }

    let mut segments = Vec::new();
    let mut diagnostics = Vec::new();

    if views.len() < 2 {
        let subject = views.first().map(ViewSpec::label).unwrap_or_default();
        diagnostics.push(Diagnostic::new(
            DiagnosticKind::PathTooShort,
            subject,
            format!("an animation path needs at least 2 views, got {}", views.len()),
        ));
        return Ok(AnimationPath { segments, diagnostics });
    }

    for pair in views.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        let subject = format!("{} -> {}", from.label(), to.label());

        let endpoints = resolve(hemisphere, from).and_then(|b| Ok((b, resolve(hemisphere, to)?)));
        match endpoints {
            Ok((begin, end)) => {
                debug!("Segment {}: {} -> {}", subject, begin, end);
                segments.push(interpolate(begin, end, steps)?);
            }
            Err(e) => diagnostics.push(Diagnostic::from_error(subject, &e)),
        }
    }

    Ok(AnimationPath { segments, diagnostics })
}

/// Outcome of driving a renderer along an animation path
#[derive(Debug, Clone)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct AnimationReport {
    /// Number of orientations applied to the renderer
    pub frames_shown: usize,

    /// Last orientation applied, if any
    pub final_view: Option<CameraOrientation>,

    pub diagnostics: Vec<Diagnostic>,
}

/// Rotates the renderer's camera through `views`
///
/// Every orientation of the planned path is applied with `set_view`, in
/// order. Unresolvable pairs are skipped and reported.
pub fn animate<R: Renderer>(
    renderer: &mut R,
    hemisphere: Hemisphere,
    views: &[ViewSpec],
    steps: usize,
) -> Result<AnimationReport> {
    let path = plan_path(hemisphere, views, steps)?;

    let mut frames_shown = 0;
    let mut final_view = None;
    for orientation in path.orientations() {
        renderer.set_view(orientation);
        final_view = Some(orientation);
        frames_shown += 1;
    }

    info!(
        "Animated {} frames across {} segments ({} skipped)",
        frames_shown,
        path.segments.len(),
        path.diagnostics.len()
    );

    Ok(AnimationReport {
        frames_shown,
        final_view,
        diagnostics: path.diagnostics,
    })
}
