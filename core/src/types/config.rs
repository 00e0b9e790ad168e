use crate::types::{ImageFormat, MontageLayout};
use std::path::PathBuf;

/// Default prefix for temporary montage component files
pub const MONTAGE_TEMP_PREFIX: &str = "cortexview_montage_tmp";

/// Default number of interpolation steps between two views
pub const DEFAULT_STEPS: usize = 180;

/// Configuration for montage composition
///
/// # Example
///
/// ```
/// use cortexview_core::{ImageFormat, MontageConfig, MontageLayout};
///
/// let config = MontageConfig::default()
///     .with_layout(MontageLayout::Vertical)
///     .with_work_dir("/tmp");
///
/// assert_eq!(config.layout, MontageLayout::Vertical);
/// assert_eq!(config.temp_format, ImageFormat::Png);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct MontageConfig {
    /// Tiling axis
    pub layout: MontageLayout,

    /// Directory receiving the temporary component images
    pub work_dir: PathBuf,

    /// File name prefix of the temporary component images
    pub temp_prefix: String,

    /// Format of the temporary component images (must be decodable)
    pub temp_format: ImageFormat,
}

impl Default for MontageConfig {
    fn default() -> Self {
        Self {
            layout: MontageLayout::Horizontal,
            work_dir: PathBuf::from("."),
            temp_prefix: MONTAGE_TEMP_PREFIX.to_string(),
            temp_format: ImageFormat::Png,
        }
    }
}

impl MontageConfig {
    /// Builder: Set tiling axis
    pub fn with_layout(mut self, layout: MontageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Builder: Set directory for temporary component images
    pub fn with_work_dir(mut self, work_dir: impl Into<PathBuf>) -> Self {
        self.work_dir = work_dir.into();
        self
    }

    /// Builder: Set temporary file prefix
    pub fn with_temp_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.temp_prefix = prefix.into();
        self
    }

    /// Builder: Set temporary image format
    pub fn with_temp_format(mut self, format: ImageFormat) -> Self {
        self.temp_format = format;
        self
    }

    /// Path prefix of temporary component images (`work_dir/temp_prefix`)
    pub fn temp_path_prefix(&self) -> PathBuf {
        self.work_dir.join(&self.temp_prefix)
    }
}

/// Configuration for rotation frame sequences
///
/// # Example
///
/// ```
/// use cortexview_core::{FrameConfig, ImageFormat};
///
/// let config = FrameConfig::default().with_steps(36).with_format(ImageFormat::Bmp);
/// assert_eq!(config.steps, 36);
/// assert_eq!(config.format.extension(), "bmp");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameConfig {
    /// Interpolation steps between consecutive views
    pub steps: usize,

    /// Frame image format
    pub format: ImageFormat,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            format: ImageFormat::Png,
        }
    }
}

impl FrameConfig {
    /// Builder: Set interpolation steps
    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Builder: Set frame image format
    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_montage_config() {
        let config = MontageConfig::default();
        assert_eq!(config.layout, MontageLayout::Horizontal);
        assert_eq!(config.work_dir, PathBuf::from("."));
        assert_eq!(config.temp_prefix, MONTAGE_TEMP_PREFIX);
        assert_eq!(config.temp_format, ImageFormat::Png);
    }

    #[test]
    fn test_montage_builder_chain() {
        let config = MontageConfig::default()
            .with_layout(MontageLayout::Vertical)
            .with_work_dir("scratch")
            .with_temp_prefix("tmp")
            .with_temp_format(ImageFormat::Bmp);

        assert_eq!(config.layout, MontageLayout::Vertical);
        assert_eq!(config.temp_path_prefix(), PathBuf::from("scratch").join("tmp"));
        assert_eq!(config.temp_format, ImageFormat::Bmp);
    }

    #[test]
    fn test_default_frame_config() {
        let config = FrameConfig::default();
        assert_eq!(config.steps, DEFAULT_STEPS);
        assert_eq!(config.format, ImageFormat::Png);
    }
}
