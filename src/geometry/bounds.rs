use geo::{BoundingRect, LineString, coord};

use crate::domain::GeoPoint;

/// Minimal lat/lon rectangle enclosing a track
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl GeoBounds {
    /// Create bounds from a set of points in a single pass
    pub fn from_points(points: &[GeoPoint]) -> Option<Self> {
        let line: LineString<f64> = points
            .iter()
            .map(|p| coord! { x: p.lon, y: p.lat })
            .collect();

        let rect = line.bounding_rect()?;

        Some(Self {
            min_lat: rect.min().y,
            max_lat: rect.max().y,
            min_lon: rect.min().x,
            max_lon: rect.max().x,
        })
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// True when every point shares a latitude or a longitude
    pub fn is_degenerate(&self) -> bool {
        self.lat_span() == 0.0 || self.lon_span() == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_points() {
        let points = vec![
            GeoPoint::new(30.13, -97.64),
            GeoPoint::new(30.14, -97.63),
            GeoPoint::new(30.12, -97.62),
        ];
        let bounds = GeoBounds::from_points(&points).unwrap();

        assert_eq!(bounds.min_lat, 30.12);
        assert_eq!(bounds.max_lat, 30.14);
        assert_eq!(bounds.min_lon, -97.64);
        assert_eq!(bounds.max_lon, -97.62);
        assert!(!bounds.is_degenerate());
    }

    #[test]
    fn test_bounds_empty() {
        assert!(GeoBounds::from_points(&[]).is_none());
    }

    #[test]
    fn test_bounds_single_point_is_degenerate() {
        let bounds = GeoBounds::from_points(&[GeoPoint::new(1.0, 2.0)]).unwrap();
        assert_eq!(bounds.lat_span(), 0.0);
        assert!(bounds.is_degenerate());
    }
}
