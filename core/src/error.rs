use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for cortexview operations
pub type Result<T> = std::result::Result<T, CortexviewError>;

/// Error types for cortexview operations
#[derive(Error, Debug)]
pub enum CortexviewError {
    /// View name matched zero or several keys of the hemisphere's view table
    #[error("Cannot resolve view '{input}': {matches} preset views match (must be a preset view name or a unique leading substring)")]
    AmbiguousOrUnknownView { input: String, matches: usize },

    /// A single view was passed where a sequence of views is required
    #[error("Views must be a sequence, got single view '{0}' (use show_view and save_image for one view)")]
    InvalidViewSequence(String),

    /// File extension outside the image allow-list
    #[error("Unsupported image type '{0}'; supported types are png jpg bmp tiff ps eps pdf rib oogl iv vrml obj")]
    UnsupportedImageFormat(String),

    /// Renderer failed to write a frame
    #[error("Failed to capture frame to {}: {reason}", path.display())]
    CaptureFailure { path: PathBuf, reason: String },

    /// Composite image could not be written
    #[error("Error saving {}: {reason}", path.display())]
    CompositionWriteFailure { path: PathBuf, reason: String },

    /// Captured component image could not be decoded
    #[error("Failed to decode {}: {reason}", path.display())]
    DecodeFailure { path: PathBuf, reason: String },

    /// Hemisphere identifier other than lh/rh
    #[error("Invalid hemisphere '{0}' (expected 'lh' or 'rh')")]
    InvalidHemisphere(String),

    /// Montage layout other than horizontal/vertical
    #[error("Invalid montage layout '{0}' (expected 'h' or 'v')")]
    InvalidLayout(String),

    /// Literal camera orientation could not be parsed
    #[error("Invalid camera orientation: {0}")]
    InvalidOrientation(String),

    /// Interpolation requested with zero steps
    #[error("Step count must be positive")]
    InvalidStepCount,

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Image codec error
    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),
}

/// Category of a skipped item in a batch operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "kebab-case"))]
pub enum DiagnosticKind {
    UnknownView,
    CaptureFailure,
    DecodeFailure,
    CompositionWriteFailure,
    EmptyMontage,
    PathTooShort,
    Other,
}

impl DiagnosticKind {
    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            DiagnosticKind::UnknownView => "unknown-view",
            DiagnosticKind::CaptureFailure => "capture-failure",
            DiagnosticKind::DecodeFailure => "decode-failure",
            DiagnosticKind::CompositionWriteFailure => "write-failure",
            DiagnosticKind::EmptyMontage => "empty-montage",
            DiagnosticKind::PathTooShort => "path-too-short",
            DiagnosticKind::Other => "other",
        }
    }
}

/// Non-fatal problem collected while running a batch operation
///
/// Batch operations (image sets, montages, animation paths) never abort on a
/// single bad item. Each skipped item becomes a `Diagnostic` in the returned
/// report and is logged at warn level.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,

    /// View label or file the problem refers to
    pub subject: String,

    /// File involved, when one was attempted
    pub path: Option<PathBuf>,

    pub message: String,
}

impl Diagnostic {
    /// Creates a diagnostic and logs it
    pub fn new(kind: DiagnosticKind, subject: impl Into<String>, message: impl Into<String>) -> Self {
        let diagnostic = Self {
            kind,
            subject: subject.into(),
            path: None,
            message: message.into(),
        };
        log::warn!("Skipping {}: {}", diagnostic.subject, diagnostic.message);
        diagnostic
    }

    /// Creates a diagnostic from an error, classifying it by variant
    pub fn from_error(subject: impl Into<String>, err: &CortexviewError) -> Self {
        let kind = match err {
            CortexviewError::AmbiguousOrUnknownView { .. } => DiagnosticKind::UnknownView,
            CortexviewError::CaptureFailure { .. } => DiagnosticKind::CaptureFailure,
            CortexviewError::DecodeFailure { .. } | CortexviewError::ImageError(_) => {
                DiagnosticKind::DecodeFailure
            }
            CortexviewError::CompositionWriteFailure { .. } => {
                DiagnosticKind::CompositionWriteFailure
            }
            _ => DiagnosticKind::Other,
        };
        let path = match err {
            CortexviewError::CaptureFailure { path, .. }
            | CortexviewError::CompositionWriteFailure { path, .. }
            | CortexviewError::DecodeFailure { path, .. } => Some(path.clone()),
            _ => None,
        };
        Self::new(kind, subject, err.to_string()).with_path(path)
    }

    fn with_path(mut self, path: Option<PathBuf>) -> Self {
        self.path = path;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.kind.simple_name(),
            self.subject,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_from_unknown_view() {
        let err = CortexviewError::AmbiguousOrUnknownView {
            input: "xyz".to_string(),
            matches: 0,
        };
        let diagnostic = Diagnostic::from_error("xyz", &err);
        assert_eq!(diagnostic.kind, DiagnosticKind::UnknownView);
        assert_eq!(diagnostic.subject, "xyz");
        assert!(diagnostic.path.is_none());
        assert!(diagnostic.message.contains("'xyz'"));
    }

    #[test]
    fn test_diagnostic_keeps_capture_path() {
        let err = CortexviewError::CaptureFailure {
            path: PathBuf::from("brain_lat.png"),
            reason: "disk full".to_string(),
        };
        let diagnostic = Diagnostic::from_error("lat", &err);
        assert_eq!(diagnostic.kind, DiagnosticKind::CaptureFailure);
        assert_eq!(diagnostic.path, Some(PathBuf::from("brain_lat.png")));
        assert_eq!(
            diagnostic.to_string(),
            "[capture-failure] lat: Failed to capture frame to brain_lat.png: disk full"
        );
    }
}
