use crate::error::{CortexviewError, Result};
use crate::types::CameraOrientation;

/// Wraps an angle difference into (-180, 180]
fn wrap_delta(raw: f64) -> f64 {
    let wrapped = raw.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Shortest rotation from `start` to `end`
///
/// Azimuth and elevation are wrapped independently into (-180, 180], so each
/// axis turns along its shorter arc. This is not a great-circle path.
///
/// # Example
///
/// ```
/// use cortexview_core::{shortest_angular_delta, CameraOrientation};
///
/// let delta = shortest_angular_delta(
///     CameraOrientation::new(170.0, 0.0),
///     CameraOrientation::new(-170.0, 90.0),
/// );
/// assert_eq!(delta, CameraOrientation::new(20.0, 90.0));
/// ```
pub fn shortest_angular_delta(start: CameraOrientation, end: CameraOrientation) -> CameraOrientation {
    CameraOrientation::new(
        wrap_delta(end.azimuth - start.azimuth),
        wrap_delta(end.elevation - start.elevation),
    )
}

/// Interpolated camera orientations between two views
///
/// Yields `steps` orientations `start + i * increment` for `i` in `0..steps`.
/// The end orientation itself is not part of the path. Cloning a path
/// restarts it from the beginning.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraPath {
    start: CameraOrientation,
    increment: CameraOrientation,
    steps: usize,
    index: usize,
}

impl CameraPath {
    /// First orientation of the path
    pub fn start(&self) -> CameraOrientation {
        self.start
    }

    /// Per-step change in orientation
    pub fn increment(&self) -> CameraOrientation {
        self.increment
    }

    /// Total number of orientations in the path
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns a fresh copy of this path positioned at its first orientation
    pub fn restart(&self) -> Self {
        Self {
            index: 0,
            ..self.clone()
        }
    }
}

impl Iterator for CameraPath {
    type Item = CameraOrientation;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.steps {
            return None;
        }
        let orientation = self.start.offset(self.increment, self.index as f64);
        self.index += 1;
        Some(orientation)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CameraPath {}

/// Interpolates the shortest camera path from `start` to `end`
///
/// # Errors
///
/// `InvalidStepCount` when `steps` is zero
pub fn interpolate(start: CameraOrientation, end: CameraOrientation, steps: usize) -> Result<CameraPath> {
    if steps == 0 {
        return Err(CortexviewError::InvalidStepCount);
    }

    let delta = shortest_angular_delta(start, end);
    let increment = CameraOrientation::new(delta.azimuth / steps as f64, delta.elevation / steps as f64);

    Ok(CameraPath {
        start,
        increment,
        steps,
        index: 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 90.0, 90.0)]
    #[case(0.0, 180.0, 180.0)]
    #[case(0.0, -180.0, 180.0)]
    #[case(180.0, -90.0, 90.0)]
    #[case(-90.0, 180.0, -90.0)]
    #[case(10.0, 350.0, -20.0)]
    #[case(350.0, 10.0, 20.0)]
    #[case(0.0, 540.0, 180.0)]
    #[case(0.0, 900.5, -179.5)]
    fn test_wrap(#[case] start: f64, #[case] end: f64, #[case] expected: f64) {
        let delta = shortest_angular_delta(
            CameraOrientation::new(start, 0.0),
            CameraOrientation::new(end, 0.0),
        );
        assert_eq!(delta.azimuth, expected);
        assert_eq!(delta.elevation, 0.0);
    }

    #[test]
    fn test_delta_range_over_grid() {
        let angles: Vec<f64> = (-8..=8).map(|i| i as f64 * 67.5).collect();
        for &a in &angles {
            for &b in &angles {
                let delta = shortest_angular_delta(
                    CameraOrientation::new(a, b),
                    CameraOrientation::new(b, a),
                );
                for component in [delta.azimuth, delta.elevation] {
                    assert!(component > -180.0 && component <= 180.0, "{a} -> {b}: {component}");
                }
            }
        }
    }

    #[test]
    fn test_components_are_independent() {
        let delta = shortest_angular_delta(
            CameraOrientation::new(180.0, 90.0),
            CameraOrientation::new(-90.0, 180.0),
        );
        assert_eq!(delta, CameraOrientation::new(90.0, 90.0));
    }

    #[test]
    fn test_zero_length_path() {
        let a = CameraOrientation::new(45.0, -30.0);
        let path: Vec<_> = interpolate(a, a, 7).unwrap().collect();
        assert_eq!(path, vec![a; 7]);
    }

    #[test]
    fn test_path_steps_and_increment() {
        let start = CameraOrientation::new(180.0, 90.0);
        let end = CameraOrientation::new(0.0, 90.0);
        let path = interpolate(start, end, 4).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.increment(), CameraOrientation::new(45.0, 0.0));

        let orientations: Vec<_> = path.collect();
        assert_eq!(
            orientations,
            vec![
                CameraOrientation::new(180.0, 90.0),
                CameraOrientation::new(225.0, 90.0),
                CameraOrientation::new(270.0, 90.0),
                CameraOrientation::new(315.0, 90.0),
            ]
        );
    }

    #[test]
    fn test_path_takes_short_arc() {
        let path = interpolate(
            CameraOrientation::new(170.0, 0.0),
            CameraOrientation::new(-170.0, 0.0),
            2,
        )
        .unwrap();
        let azimuths: Vec<f64> = path.map(|o| o.azimuth).collect();
        assert_eq!(azimuths, vec![170.0, 180.0]);
    }

    #[test]
    fn test_path_is_restartable() {
        let mut path = interpolate(
            CameraOrientation::new(0.0, 0.0),
            CameraOrientation::new(90.0, 0.0),
            3,
        )
        .unwrap();
        let fresh = path.clone();
        path.next();
        assert_eq!(path.len(), 2);
        assert_eq!(path.restart().collect::<Vec<_>>(), fresh.collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_steps_rejected() {
        let a = CameraOrientation::default();
        assert!(matches!(interpolate(a, a, 0), Err(CortexviewError::InvalidStepCount)));
    }
}
