use serde::{Deserialize, Serialize};

/// A WGS84 position in degrees, as read from a track document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// A point in drawing-surface space (x right, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &ProjectedPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Point at fraction `t` of the way from `self` to `other`
    pub fn lerp(&self, other: &ProjectedPoint, t: f64) -> ProjectedPoint {
        ProjectedPoint {
            x: self.x + t * (other.x - self.x),
            y: self.y + t * (other.y - self.y),
        }
    }
}

impl From<(f64, f64)> for ProjectedPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to() {
        let a = ProjectedPoint::new(0.0, 0.0);
        let b = ProjectedPoint::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_lerp_midpoint() {
        let a = ProjectedPoint::new(0.0, 10.0);
        let b = ProjectedPoint::new(10.0, 0.0);
        assert_eq!(a.lerp(&b, 0.5), ProjectedPoint::new(5.0, 5.0));
        assert_eq!(a.lerp(&b, 0.0), a);
    }
}
