use std::f64::consts::TAU;

use crate::domain::ProjectedPoint;
use crate::geometry::{Polyline, ViewBox};

/// Segments used to approximate the default oval
pub const OVAL_SEGMENTS: usize = 128;

/// Stand-in track for sessions without a published centerline
///
/// An ellipse around the viewbox center, 110x70 on the stock 400x240 box,
/// starting at the rightmost point and running clockwise on screen. The
/// polyline is closed: the last vertex repeats the first.
pub fn oval_track(view_box: ViewBox) -> Polyline {
    let center = view_box.center();
    let rx = view_box.width * (110.0 / 400.0);
    let ry = view_box.height * (70.0 / 240.0);

    let mut points: Vec<ProjectedPoint> = (0..OVAL_SEGMENTS)
        .map(|i| {
            let theta = i as f64 / OVAL_SEGMENTS as f64 * TAU;
            ProjectedPoint::new(center.x + rx * theta.cos(), center.y + ry * theta.sin())
        })
        .collect();
    points.push(points[0]);

    Polyline::new(points, view_box)
}
