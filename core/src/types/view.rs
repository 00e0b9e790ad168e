use super::{CameraOrientation, Hemisphere, ViewName};
use crate::error::{CortexviewError, Result};
use std::fmt;

/// Preset orientations for the left hemisphere
pub const LH_VIEWS: [(ViewName, CameraOrientation); 6] = [
    (ViewName::Lateral, CameraOrientation::new(180.0, 90.0)),
    (ViewName::Medial, CameraOrientation::new(0.0, 90.0)),
    (ViewName::Anterior, CameraOrientation::new(90.0, 90.0)),
    (ViewName::Posterior, CameraOrientation::new(-90.0, 90.0)),
    (ViewName::Dorsal, CameraOrientation::new(90.0, 0.0)),
    (ViewName::Ventral, CameraOrientation::new(-90.0, 180.0)),
];

/// Preset orientations for the right hemisphere
///
/// Not a mirror of [`LH_VIEWS`]; the two tables are independent.
pub const RH_VIEWS: [(ViewName, CameraOrientation); 6] = [
    (ViewName::Lateral, CameraOrientation::new(0.0, 90.0)),
    (ViewName::Medial, CameraOrientation::new(0.0, -90.0)),
    (ViewName::Anterior, CameraOrientation::new(90.0, 90.0)),
    (ViewName::Posterior, CameraOrientation::new(-90.0, -90.0)),
    (ViewName::Dorsal, CameraOrientation::new(-90.0, 0.0)),
    (ViewName::Ventral, CameraOrientation::new(90.0, 0.0)),
];

impl Hemisphere {
    /// Returns this hemisphere's preset view table
    pub fn view_table(&self) -> &'static [(ViewName, CameraOrientation); 6] {
        match self {
            Hemisphere::Lh => &LH_VIEWS,
            Hemisphere::Rh => &RH_VIEWS,
        }
    }

    /// Returns the preset orientation of a view for this hemisphere
    pub fn orientation(&self, view: ViewName) -> CameraOrientation {
        self.view_table()[view.index()].1
    }
}

/// A requested view: preset name (possibly abbreviated) or literal orientation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(untagged))]
pub enum ViewSpec {
    Named(String),
    Literal(CameraOrientation),
}

impl ViewSpec {
    /// Creates a named view spec
    pub fn named(name: impl Into<String>) -> Self {
        ViewSpec::Named(name.into())
    }

    /// Parses a command-line view argument
    ///
    /// Two numbers ("180,90") make a literal orientation, anything else is
    /// kept as a view name for later resolution.
    pub fn parse(s: &str) -> Self {
        match CameraOrientation::parse(s) {
            Ok(orientation) => ViewSpec::Literal(orientation),
            Err(_) => ViewSpec::Named(s.to_string()),
        }
    }

    /// Returns the label used in generated file names
    pub fn label(&self) -> String {
        match self {
            ViewSpec::Named(name) => name.clone(),
            ViewSpec::Literal(o) => format!("az{}_el{}", o.azimuth, o.elevation),
        }
    }
}

impl fmt::Display for ViewSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewSpec::Named(name) => write!(f, "{}", name),
            ViewSpec::Literal(o) => write!(f, "{}", o),
        }
    }
}

impl From<&str> for ViewSpec {
    fn from(name: &str) -> Self {
        ViewSpec::Named(name.to_string())
    }
}

impl From<String> for ViewSpec {
    fn from(name: String) -> Self {
        ViewSpec::Named(name)
    }
}

impl From<ViewName> for ViewSpec {
    fn from(view: ViewName) -> Self {
        ViewSpec::Named(view.key().to_string())
    }
}

impl From<CameraOrientation> for ViewSpec {
    fn from(orientation: CameraOrientation) -> Self {
        ViewSpec::Literal(orientation)
    }
}

impl From<(f64, f64)> for ViewSpec {
    fn from(pair: (f64, f64)) -> Self {
        ViewSpec::Literal(pair.into())
    }
}

/// Views handed to a batch operation
///
/// Batch operations need an ordered sequence. A bare string converts into
/// [`ViewSelection::Single`] rather than being split into characters, and is
/// rejected by [`ViewSelection::into_sequence`].
#[derive(Debug, Clone, PartialEq)]
pub enum ViewSelection {
    Single(ViewSpec),
    Sequence(Vec<ViewSpec>),
}

impl ViewSelection {
    /// Returns the ordered views, or `InvalidViewSequence` for a single view
    pub fn into_sequence(self) -> Result<Vec<ViewSpec>> {
        match self {
            ViewSelection::Sequence(views) => Ok(views),
            ViewSelection::Single(view) => Err(CortexviewError::InvalidViewSequence(view.label())),
        }
    }
}

impl From<&str> for ViewSelection {
    fn from(view: &str) -> Self {
        ViewSelection::Single(view.into())
    }
}

impl From<String> for ViewSelection {
    fn from(view: String) -> Self {
        ViewSelection::Single(view.into())
    }
}

impl From<ViewSpec> for ViewSelection {
    fn from(view: ViewSpec) -> Self {
        ViewSelection::Single(view)
    }
}

impl<T: Into<ViewSpec>> From<Vec<T>> for ViewSelection {
    fn from(views: Vec<T>) -> Self {
        ViewSelection::Sequence(views.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ViewSpec> + Clone> From<&[T]> for ViewSelection {
    fn from(views: &[T]) -> Self {
        ViewSelection::Sequence(views.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<ViewSpec>, const N: usize> From<[T; N]> for ViewSelection {
    fn from(views: [T; N]) -> Self {
        ViewSelection::Sequence(views.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_differ_between_hemispheres() {
        assert_ne!(LH_VIEWS, RH_VIEWS);
        assert_eq!(
            Hemisphere::Lh.orientation(ViewName::Lateral),
            CameraOrientation::new(180.0, 90.0)
        );
        assert_eq!(
            Hemisphere::Rh.orientation(ViewName::Lateral),
            CameraOrientation::new(0.0, 90.0)
        );
        // Anterior is the only view shared by both tables
        assert_eq!(
            Hemisphere::Lh.orientation(ViewName::Anterior),
            Hemisphere::Rh.orientation(ViewName::Anterior)
        );
    }

    #[test]
    fn test_tables_follow_view_order() {
        for (position, view) in ViewName::ALL.into_iter().enumerate() {
            assert_eq!(view.index(), position);
            assert_eq!(LH_VIEWS[position].0, view);
            assert_eq!(RH_VIEWS[position].0, view);
        }
    }

    #[test]
    fn test_orientation_reads_matching_row() {
        for hemisphere in [Hemisphere::Lh, Hemisphere::Rh] {
            for (view, orientation) in hemisphere.view_table() {
                assert_eq!(hemisphere.orientation(*view), *orientation);
            }
        }
        assert_eq!(
            Hemisphere::Rh.orientation(ViewName::Ventral),
            CameraOrientation::new(90.0, 0.0)
        );
    }

    #[test]
    fn test_view_spec_parse() {
        assert_eq!(ViewSpec::parse("lat"), ViewSpec::named("lat"));
        assert_eq!(
            ViewSpec::parse("45,30"),
            ViewSpec::Literal(CameraOrientation::new(45.0, 30.0))
        );
    }

    #[test]
    fn test_view_spec_label() {
        assert_eq!(ViewSpec::named("med").label(), "med");
        assert_eq!(ViewSpec::from((-90.0, 180.0)).label(), "az-90_el180");
        assert_eq!(ViewSpec::from(ViewName::Dorsal).label(), "dorsal");
    }

    #[test]
    fn test_selection_rejects_bare_string() {
        let err = ViewSelection::from("lat").into_sequence().unwrap_err();
        assert!(matches!(err, CortexviewError::InvalidViewSequence(ref v) if v == "lat"));
    }

    #[test]
    fn test_selection_accepts_sequences() {
        let views = ViewSelection::from(vec!["lat", "med"]).into_sequence().unwrap();
        assert_eq!(views, vec![ViewSpec::named("lat"), ViewSpec::named("med")]);

        let views = ViewSelection::from(["ven"]).into_sequence().unwrap();
        assert_eq!(views.len(), 1);

        let mixed = vec![ViewSpec::named("lat"), ViewSpec::from((10.0, 20.0))];
        let views = ViewSelection::from(mixed.as_slice()).into_sequence().unwrap();
        assert_eq!(views, mixed);
    }
}
