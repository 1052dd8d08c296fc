//! Mapping between normalized lap positions and points on a track polyline
//!
//! `pos` is the fraction of total arc length travelled from the first vertex.
//! Both directions accept anything a UI can throw at them: positions are
//! clamped, and empty or single-point polylines resolve to a fixed point
//! instead of failing.

use serde::Serialize;

use super::{CumulativeDistanceTable, Polyline};
use crate::domain::ProjectedPoint;

/// A resolved spot on the track
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrackPosition {
    pub pos: f64,
    pub point: ProjectedPoint,
}

/// Polyline together with its arc-length table
///
/// Build once per track and reuse for every query; the free functions below
/// recompute the table on each call.
#[derive(Debug, Clone)]
pub struct TrackIndex {
    polyline: Polyline,
    table: CumulativeDistanceTable,
}

impl TrackIndex {
    pub fn new(polyline: Polyline) -> Self {
        let table = polyline.distances();
        Self { polyline, table }
    }

    pub fn polyline(&self) -> &Polyline {
        &self.polyline
    }

    pub fn table(&self) -> &CumulativeDistanceTable {
        &self.table
    }

    pub fn total_length(&self) -> f64 {
        self.table.total()
    }

    /// Point at normalized position `pos` (clamped to 0..=1)
    pub fn point_for_pos(&self, pos: f64) -> ProjectedPoint {
        resolve_point(&self.polyline, &self.table, pos)
    }

    /// Closest point on the track to `click`, with its normalized position
    pub fn nearest_point(&self, click: ProjectedPoint) -> TrackPosition {
        resolve_nearest(&self.polyline, &self.table, click)
    }
}

/// Point at normalized position `pos` along `polyline`
pub fn point_for_pos(pos: f64, polyline: &Polyline) -> ProjectedPoint {
    resolve_point(polyline, &polyline.distances(), pos)
}

/// Nearest point on `polyline` to `click` and its normalized position
pub fn nearest_point_on_polyline(click: ProjectedPoint, polyline: &Polyline) -> TrackPosition {
    resolve_nearest(polyline, &polyline.distances(), click)
}

fn clamp_pos(pos: f64) -> f64 {
    if pos.is_nan() { 0.0 } else { pos.clamp(0.0, 1.0) }
}

fn resolve_point(polyline: &Polyline, table: &CumulativeDistanceTable, pos: f64) -> ProjectedPoint {
    let points = polyline.points();
    match points {
        [] => return polyline.fallback_point(),
        [only] => return *only,
        _ => {}
    }

    let target = clamp_pos(pos) * table.total();

    for i in 1..points.len() {
        if target <= table.at(i) {
            let start = table.at(i - 1);
            let segment_length = table.at(i) - start;

            if segment_length == 0.0 {
                return points[i - 1];
            }

            let t = (target - start) / segment_length;
            return points[i - 1].lerp(&points[i], t);
        }
    }

    points[points.len() - 1]
}

fn resolve_nearest(
    polyline: &Polyline,
    table: &CumulativeDistanceTable,
    click: ProjectedPoint,
) -> TrackPosition {
    let points = polyline.points();
    match points {
        [] => {
            return TrackPosition {
                pos: 0.0,
                point: polyline.fallback_point(),
            };
        }
        [only] => {
            return TrackPosition {
                pos: 0.0,
                point: *only,
            };
        }
        _ => {}
    }

    let total = table.total();
    let along_to_pos = |along: f64| if total > 0.0 { along / total } else { 0.0 };

    let mut min_dist = f64::INFINITY;
    let mut best = TrackPosition {
        pos: 0.0,
        point: points[0],
    };

    // Strict `<` keeps the earliest segment on ties
    for (i, pair) in points.windows(2).enumerate() {
        let (p1, p2) = (pair[0], pair[1]);
        let dx = p2.x - p1.x;
        let dy = p2.y - p1.y;
        let length_sq = dx * dx + dy * dy;

        if length_sq == 0.0 {
            let dist = click.distance_to(&p1);
            if dist < min_dist {
                min_dist = dist;
                best = TrackPosition {
                    pos: along_to_pos(table.at(i)),
                    point: p1,
                };
            }
            continue;
        }

        let t = (((click.x - p1.x) * dx + (click.y - p1.y) * dy) / length_sq).clamp(0.0, 1.0);
        let nearest = p1.lerp(&p2, t);
        let dist = click.distance_to(&nearest);

        if dist < min_dist {
            min_dist = dist;
            best = TrackPosition {
                pos: along_to_pos(table.at(i) + t * length_sq.sqrt()),
                point: nearest,
            };
        }
    }

    best.pos = clamp_pos(best.pos);
    best
}
