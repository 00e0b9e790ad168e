use crate::error::{CortexviewError, Result};
use std::fmt;
use std::path::Path;

/// Cortical hemisphere (left/right)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum Hemisphere {
    Lh,
    Rh,
}

impl Hemisphere {
    /// Returns short string representation
    pub fn short_str(&self) -> &'static str {
        match self {
            Hemisphere::Lh => "lh",
            Hemisphere::Rh => "rh",
        }
    }

    /// Returns simple name for display
    pub fn simple_name(&self) -> &'static str {
        match self {
            Hemisphere::Lh => "left",
            Hemisphere::Rh => "right",
        }
    }

    /// Returns the opposite hemisphere
    pub fn opposite(&self) -> Self {
        match self {
            Hemisphere::Lh => Hemisphere::Rh,
            Hemisphere::Rh => Hemisphere::Lh,
        }
    }

    /// Parses hemisphere from string
    ///
    /// Accepts `lh`/`rh` and `left`/`right`, case-insensitive.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "lh" | "left" => Ok(Hemisphere::Lh),
            "rh" | "right" => Ok(Hemisphere::Rh),
            _ => Err(CortexviewError::InvalidHemisphere(s.to_string())),
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_str())
    }
}

/// Preset camera views of a cortical surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum ViewName {
    Lateral,
    Medial,
    Anterior,
    Posterior,
    Dorsal,
    Ventral,
}

impl ViewName {
    /// All preset views, in table order
    pub const ALL: [ViewName; 6] = [
        ViewName::Lateral,
        ViewName::Medial,
        ViewName::Anterior,
        ViewName::Posterior,
        ViewName::Dorsal,
        ViewName::Ventral,
    ];

    /// Position in [`ViewName::ALL`] and in the hemisphere view tables
    pub fn index(&self) -> usize {
        match self {
            ViewName::Lateral => 0,
            ViewName::Medial => 1,
            ViewName::Anterior => 2,
            ViewName::Posterior => 3,
            ViewName::Dorsal => 4,
            ViewName::Ventral => 5,
        }
    }

    /// Returns the key used for name lookup
    pub fn key(&self) -> &'static str {
        match self {
            ViewName::Lateral => "lateral",
            ViewName::Medial => "medial",
            ViewName::Anterior => "anterior",
            ViewName::Posterior => "posterior",
            ViewName::Dorsal => "dorsal",
            ViewName::Ventral => "ventral",
        }
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Axis along which montage components are tiled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum MontageLayout {
    #[default]
    Horizontal,
    Vertical,
}

impl MontageLayout {
    /// Returns short string representation
    pub fn short_str(&self) -> &'static str {
        match self {
            MontageLayout::Horizontal => "h",
            MontageLayout::Vertical => "v",
        }
    }

    /// Parses layout from `h`/`v` or `horizontal`/`vertical`
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "h" | "horizontal" => Ok(MontageLayout::Horizontal),
            "v" | "vertical" => Ok(MontageLayout::Vertical),
            _ => Err(CortexviewError::InvalidLayout(s.to_string())),
        }
    }
}

impl fmt::Display for MontageLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MontageLayout::Horizontal => "horizontal",
            MontageLayout::Vertical => "vertical",
        };
        write!(f, "{}", name)
    }
}

/// Image file types a rendering surface may be asked to write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum ImageFormat {
    #[default]
    Png,
    Jpg,
    Bmp,
    Tiff,
    Ps,
    Eps,
    Pdf,
    Rib,
    Oogl,
    Iv,
    Vrml,
    Obj,
}

impl ImageFormat {
    /// The allow-list of writable formats
    pub const ALL: [ImageFormat; 12] = [
        ImageFormat::Png,
        ImageFormat::Jpg,
        ImageFormat::Bmp,
        ImageFormat::Tiff,
        ImageFormat::Ps,
        ImageFormat::Eps,
        ImageFormat::Pdf,
        ImageFormat::Rib,
        ImageFormat::Oogl,
        ImageFormat::Iv,
        ImageFormat::Vrml,
        ImageFormat::Obj,
    ];

    /// Returns the file extension (without dot)
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Tiff => "tiff",
            ImageFormat::Ps => "ps",
            ImageFormat::Eps => "eps",
            ImageFormat::Pdf => "pdf",
            ImageFormat::Rib => "rib",
            ImageFormat::Oogl => "oogl",
            ImageFormat::Iv => "iv",
            ImageFormat::Vrml => "vrml",
            ImageFormat::Obj => "obj",
        }
    }

    /// Returns whether this format is a raster image the `image` crate can encode
    pub fn is_raster(&self) -> bool {
        matches!(
            self,
            ImageFormat::Png | ImageFormat::Jpg | ImageFormat::Bmp | ImageFormat::Tiff
        )
    }

    /// Looks up a format by extension, case-insensitive
    pub fn from_extension(ext: &str) -> Result<Self> {
        let ext_lower = ext.trim_start_matches('.').to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|format| format.extension() == ext_lower)
            .ok_or_else(|| CortexviewError::UnsupportedImageFormat(ext.to_string()))
    }

    /// Determines the format from a path's extension
    ///
    /// A path without extension is rejected like any other unsupported type.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        Self::from_extension(ext)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}
