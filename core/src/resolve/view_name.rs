use crate::error::{CortexviewError, Result};
use crate::types::{CameraOrientation, Hemisphere, ViewName, ViewSpec};

/// Resolves a view spec to a camera orientation
///
/// # Algorithm
///
/// 1. Literal orientations pass through unchanged
/// 2. Exact key match in the hemisphere's view table
/// 3. Otherwise the input must be a leading substring of exactly one key
///
/// # Errors
///
/// `AmbiguousOrUnknownView` when the name matches zero or several keys.
/// The empty string matches every key and is therefore ambiguous.
pub fn resolve(hemisphere: Hemisphere, view: &ViewSpec) -> Result<CameraOrientation> {
    match view {
        ViewSpec::Literal(orientation) => Ok(*orientation),
        ViewSpec::Named(name) => {
            let view_name = resolve_name(hemisphere, name)?;
            Ok(hemisphere.orientation(view_name))
        }
    }
}

/// Normalizes a possibly abbreviated view name to a preset view
pub fn resolve_name(hemisphere: Hemisphere, input: &str) -> Result<ViewName> {
    let table = hemisphere.view_table();

    if let Some((name, _)) = table.iter().find(|(name, _)| name.key() == input) {
        return Ok(*name);
    }

    let candidates = prefix_matches(hemisphere, input);
    match candidates.as_slice() {
        [single] => Ok(*single),
        _ => Err(CortexviewError::AmbiguousOrUnknownView {
            input: input.to_string(),
            matches: candidates.len(),
        }),
    }
}

/// Returns every preset view whose key starts with `input`
///
/// Matching is case-sensitive.
pub fn prefix_matches(hemisphere: Hemisphere, input: &str) -> Vec<ViewName> {
    hemisphere
        .view_table()
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| name.key().starts_with(input))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LH_VIEWS, RH_VIEWS};
    use rstest::rstest;

    #[test]
    fn test_full_names_resolve_to_table() {
        for (hemisphere, table) in [(Hemisphere::Lh, &LH_VIEWS), (Hemisphere::Rh, &RH_VIEWS)] {
            for (name, orientation) in table.iter() {
                let spec = ViewSpec::named(name.key());
                assert_eq!(resolve(hemisphere, &spec).unwrap(), *orientation);
            }
        }
    }

    #[test]
    fn test_every_unique_prefix_resolves_like_its_key() {
        for hemisphere in [Hemisphere::Lh, Hemisphere::Rh] {
            for view in ViewName::ALL {
                let key = view.key();
                let expected = resolve(hemisphere, &ViewSpec::named(key)).unwrap();
                for len in 1..=key.len() {
                    let prefix = &key[..len];
                    if prefix_matches(hemisphere, prefix).len() == 1 {
                        let spec = ViewSpec::named(prefix);
                        assert_eq!(resolve(hemisphere, &spec).unwrap(), expected);
                    }
                }
            }
        }
    }

    #[rstest]
    #[case(Hemisphere::Lh, "lat", 180.0, 90.0)]
    #[case(Hemisphere::Lh, "lateral", 180.0, 90.0)]
    #[case(Hemisphere::Lh, "l", 180.0, 90.0)]
    #[case(Hemisphere::Lh, "ven", -90.0, 180.0)]
    #[case(Hemisphere::Rh, "med", 0.0, -90.0)]
    #[case(Hemisphere::Rh, "d", -90.0, 0.0)]
    #[case(Hemisphere::Rh, "post", -90.0, -90.0)]
    fn test_resolve_abbreviations(
        #[case] hemisphere: Hemisphere,
        #[case] input: &str,
        #[case] azimuth: f64,
        #[case] elevation: f64,
    ) {
        let orientation = resolve(hemisphere, &ViewSpec::named(input)).unwrap();
        assert_eq!(orientation, CameraOrientation::new(azimuth, elevation));
    }

    #[rstest]
    #[case("", 6)]
    #[case("x", 0)]
    #[case("lateralx", 0)]
    #[case("Lat", 0)]
    #[case("superior", 0)]
    fn test_unresolvable_names(#[case] input: &str, #[case] expected_matches: usize) {
        let err = resolve(Hemisphere::Lh, &ViewSpec::named(input)).unwrap_err();
        match err {
            CortexviewError::AmbiguousOrUnknownView { input: got, matches } => {
                assert_eq!(got, input);
                assert_eq!(matches, expected_matches);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_literal_passes_through() {
        let literal = CameraOrientation::new(1234.5, -720.0);
        let spec = ViewSpec::Literal(literal);
        assert_eq!(resolve(Hemisphere::Rh, &spec).unwrap(), literal);
    }

    #[test]
    fn test_resolve_name() {
        assert_eq!(resolve_name(Hemisphere::Lh, "ant").unwrap(), ViewName::Anterior);
        assert_eq!(resolve_name(Hemisphere::Rh, "p").unwrap(), ViewName::Posterior);
        assert!(resolve_name(Hemisphere::Rh, "").is_err());
    }
}
