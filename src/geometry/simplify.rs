use geo::{LineString, Simplify};

use crate::domain::GeoPoint;

/// Thin a dense GPS trace with Douglas-Peucker
///
/// `epsilon` is in degrees. Short traces and non-positive epsilons are
/// returned unchanged, and the first and last points always survive.
pub fn simplify_track(points: &[GeoPoint], epsilon: f64) -> Vec<GeoPoint> {
    if epsilon <= 0.0 || points.len() < 4 {
        return points.to_vec();
    }

    let line: LineString<f64> = points
        .iter()
        .map(|p| geo::coord! { x: p.lon, y: p.lat })
        .collect();

    let simplified = line.simplify(&epsilon);

    log::debug!(
        "Simplified track from {} to {} points (epsilon {})",
        points.len(),
        simplified.0.len(),
        epsilon
    );

    simplified
        .0
        .into_iter()
        .map(|c| GeoPoint::new(c.y, c.x))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplify_short_track() {
        let points = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(1.0, 1.0),
            GeoPoint::new(2.0, 2.0),
        ];
        assert_eq!(simplify_track(&points, 1.0).len(), 3);
    }

    #[test]
    fn test_simplify_disabled() {
        let points: Vec<GeoPoint> = (0..10).map(|i| GeoPoint::new(0.0, i as f64)).collect();
        assert_eq!(simplify_track(&points, 0.0), points);
    }

    #[test]
    fn test_simplify_reduces_jitter() {
        let points: Vec<GeoPoint> = (0..100)
            .map(|i| {
                let lat = if i % 2 == 0 { 0.0 } else { 0.0001 };
                GeoPoint::new(lat, i as f64 * 0.001)
            })
            .collect();

        let result = simplify_track(&points, 0.001);
        assert!(result.len() < points.len());
        assert_eq!(result.first(), points.first());
        assert_eq!(result.last(), points.last());
    }
}
