use crate::domain::GeoPoint;
use crate::error::MalformedTrackData;
use crate::geometry::{GeoBounds, Polyline, Projector, ViewBox, simplify_track};

use super::parse_track;

/// Settings for turning a track document into a polyline
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    pub view_box: ViewBox,
    /// Douglas-Peucker tolerance in degrees, 0 disables
    pub simplify: f64,
}

/// Project centerline points into `view_box`, fitting them to their own bounds
pub fn project_track(points: &[GeoPoint], view_box: ViewBox) -> Polyline {
    let bounds = match GeoBounds::from_points(points) {
        Some(b) => b,
        None => return Polyline::empty(view_box),
    };

    let projector = Projector::new(bounds, view_box);
    Polyline::new(projector.project_points(points), view_box)
}

/// Build a polyline from a GeoJSON document, reporting why it failed
pub fn try_build_polyline(
    document: &str,
    options: &BuildOptions,
) -> Result<Polyline, MalformedTrackData> {
    let points = parse_track(document)?;
    let points = simplify_track(&points, options.simplify);
    Ok(project_track(&points, options.view_box))
}

/// Build a polyline from a GeoJSON document
///
/// Malformed documents are logged and produce an empty polyline, which
/// callers treat as "no track available".
pub fn build_polyline(document: &str, options: &BuildOptions) -> Polyline {
    match try_build_polyline(document, options) {
        Ok(polyline) => polyline,
        Err(e) => {
            log::error!("Malformed track data: {}", e);
            Polyline::empty(options.view_box)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectedPoint;

    const TRACK: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "properties": {"name": "test loop"},
            "geometry": {
                "type": "LineString",
                "coordinates": [[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]
            }
        }]
    }"#;

    #[test]
    fn test_build_polyline_fills_padded_viewbox() {
        let polyline = build_polyline(TRACK, &BuildOptions::default());
        let points = polyline.points();

        assert_eq!(points.len(), 4);
        // lon 0 / lat 0 is the south-west corner: left, bottom
        assert_eq!(points[0], ProjectedPoint::new(20.0, 220.0));
        assert_eq!(points[1], ProjectedPoint::new(380.0, 220.0));
        assert_eq!(points[2], ProjectedPoint::new(380.0, 20.0));
        assert_eq!(points[3], ProjectedPoint::new(20.0, 20.0));
    }

    #[test]
    fn test_build_polyline_malformed_is_empty() {
        let options = BuildOptions::default();
        let polyline = build_polyline(r#"{"type":"FeatureCollection","features":[]}"#, &options);
        assert!(polyline.is_empty());
        assert_eq!(polyline.view_box(), &options.view_box);
        assert!(try_build_polyline("{}", &options).is_err());
    }

    #[test]
    fn test_project_single_point_is_centered() {
        let view_box = ViewBox::new(100.0, 60.0, 0.0);
        let polyline = project_track(&[GeoPoint::new(30.0, -97.0)], view_box);
        assert_eq!(polyline.points(), &[ProjectedPoint::new(50.0, 30.0)]);
    }

    #[test]
    fn test_project_empty() {
        assert!(project_track(&[], ViewBox::default()).is_empty());
    }
}
