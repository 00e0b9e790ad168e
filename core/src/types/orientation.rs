use crate::error::{CortexviewError, Result};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Camera orientation in degrees
///
/// A point on the viewing sphere given as (azimuth, elevation). No range is
/// enforced; values outside [-180, 180] are passed to the renderer as-is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraOrientation {
    pub azimuth: f64,
    pub elevation: f64,
}

impl CameraOrientation {
    /// Creates a new CameraOrientation
    pub const fn new(azimuth: f64, elevation: f64) -> Self {
        Self { azimuth, elevation }
    }

    /// Returns `self + delta * factor`, component-wise
    pub fn offset(&self, delta: CameraOrientation, factor: f64) -> Self {
        Self {
            azimuth: self.azimuth + delta.azimuth * factor,
            elevation: self.elevation + delta.elevation * factor,
        }
    }

    /// Returns the orientation as an (azimuth, elevation) tuple
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.azimuth, self.elevation)
    }

    /// Parses an orientation literal
    ///
    /// Accepts formats like:
    /// - "180,90"
    /// - "(180, 90)"
    /// - "-90 180"
    /// - Exponential notation: "1.8e2 9e1"
    ///
    /// # Errors
    ///
    /// Returns an error unless the string holds exactly two numbers
    pub fn parse(s: &str) -> Result<Self> {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"^\s*\(?\s*([-+]?\d*\.?\d+(?:[eE][-+]?\d+)?)\s*[,\s]\s*([-+]?\d*\.?\d+(?:[eE][-+]?\d+)?)\s*\)?\s*$")
                .expect("Failed to compile regex")
        });

        let caps = re.captures(s).ok_or_else(|| {
            CortexviewError::InvalidOrientation(format!("expected 'azimuth,elevation', got '{}'", s))
        })?;

        let azimuth: f64 = caps[1]
            .parse()
            .map_err(|e| CortexviewError::InvalidOrientation(format!("azimuth: {}", e)))?;
        let elevation: f64 = caps[2]
            .parse()
            .map_err(|e| CortexviewError::InvalidOrientation(format!("elevation: {}", e)))?;

        Ok(Self::new(azimuth, elevation))
    }

    /// Returns whether the string looks like an orientation literal
    pub fn is_literal(s: &str) -> bool {
        Self::parse(s).is_ok()
    }
}

impl From<(f64, f64)> for CameraOrientation {
    fn from((azimuth, elevation): (f64, f64)) -> Self {
        Self::new(azimuth, elevation)
    }
}

impl fmt::Display for CameraOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.azimuth, self.elevation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma() {
        let o = CameraOrientation::parse("180,90").unwrap();
        assert_eq!(o, CameraOrientation::new(180.0, 90.0));
    }

    #[test]
    fn test_parse_tuple_syntax() {
        let o = CameraOrientation::parse("(-90, 180)").unwrap();
        assert_eq!(o, CameraOrientation::new(-90.0, 180.0));
    }

    #[test]
    fn test_parse_space_and_exponent() {
        let o = CameraOrientation::parse("1.5e2 -4.5").unwrap();
        assert_eq!(o, CameraOrientation::new(150.0, -4.5));
    }

    #[test]
    fn test_parse_rejects_names() {
        assert!(CameraOrientation::parse("lateral").is_err());
        assert!(CameraOrientation::parse("90").is_err());
        assert!(CameraOrientation::parse("1,2,3").is_err());
        assert!(!CameraOrientation::is_literal("lat"));
    }

    #[test]
    fn test_offset() {
        let start = CameraOrientation::new(10.0, 20.0);
        let delta = CameraOrientation::new(2.0, -4.0);
        assert_eq!(start.offset(delta, 3.0), CameraOrientation::new(16.0, 8.0));
        assert_eq!(start.offset(delta, 0.0), start);
    }

    #[test]
    fn test_display() {
        assert_eq!(CameraOrientation::new(180.0, 90.0).to_string(), "(180, 90)");
        assert_eq!(CameraOrientation::new(-22.5, 0.0).to_string(), "(-22.5, 0)");
    }
}
