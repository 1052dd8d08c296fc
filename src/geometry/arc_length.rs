use crate::domain::ProjectedPoint;

/// Running arc length at every vertex of a polyline
///
/// Entry `i` is the summed segment length from vertex 0 to vertex `i`, so the
/// table is non-decreasing and starts at 0 whenever it is non-empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CumulativeDistanceTable {
    distances: Vec<f64>,
}

impl CumulativeDistanceTable {
    pub fn new(points: &[ProjectedPoint]) -> Self {
        let mut distances = Vec::with_capacity(points.len());
        let mut total = 0.0;

        for (i, point) in points.iter().enumerate() {
            if i > 0 {
                total += points[i - 1].distance_to(point);
            }
            distances.push(total);
        }

        Self { distances }
    }

    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance along the path at vertex `index`
    pub fn at(&self, index: usize) -> f64 {
        self.distances[index]
    }

    /// Total path length (0 for empty or single-point paths)
    pub fn total(&self) -> f64 {
        self.distances.last().copied().unwrap_or(0.0)
    }
}
