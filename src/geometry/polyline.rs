use serde::Serialize;

use super::{CumulativeDistanceTable, ViewBox};
use crate::domain::ProjectedPoint;

/// A track centerline in drawing-surface space, in traversal order
///
/// Keeps the viewbox it was projected into so queries against an empty
/// polyline can fall back to the viewbox center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    points: Vec<ProjectedPoint>,
    view_box: ViewBox,
}

impl Polyline {
    pub fn new(points: Vec<ProjectedPoint>, view_box: ViewBox) -> Self {
        Self { points, view_box }
    }

    /// The "no track available" polyline
    pub fn empty(view_box: ViewBox) -> Self {
        Self::new(Vec::new(), view_box)
    }

    pub fn points(&self) -> &[ProjectedPoint] {
        &self.points
    }

    pub fn view_box(&self) -> &ViewBox {
        &self.view_box
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Where queries land when there is nothing to resolve against
    pub fn fallback_point(&self) -> ProjectedPoint {
        self.view_box.center()
    }

    pub fn distances(&self) -> CumulativeDistanceTable {
        CumulativeDistanceTable::new(&self.points)
    }

    pub fn total_length(&self) -> f64 {
        self.distances().total()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_polyline_fallback() {
        let polyline = Polyline::empty(ViewBox::default());
        assert!(polyline.is_empty());
        assert_eq!(polyline.fallback_point(), ProjectedPoint::new(200.0, 120.0));
        assert_eq!(polyline.total_length(), 0.0);
    }

    #[test]
    fn test_total_length() {
        let polyline = Polyline::new(
            vec![ProjectedPoint::new(0.0, 0.0), ProjectedPoint::new(30.0, 40.0)],
            ViewBox::default(),
        );
        assert_eq!(polyline.len(), 2);
        assert!((polyline.total_length() - 50.0).abs() < 1e-12);
    }
}
