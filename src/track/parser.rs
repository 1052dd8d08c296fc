use geojson::{GeoJson, Value};

use crate::domain::GeoPoint;
use crate::error::MalformedTrackData;

/// Parse a track document into centerline points
///
/// # Format
/// A FeatureCollection whose first feature is a LineString. Positions are
/// `[lon, lat, ...]`; values after the second (altitude, measure) are ignored.
pub fn parse_track(document: &str) -> Result<Vec<GeoPoint>, MalformedTrackData> {
    let geojson: GeoJson = document.parse()?;
    parse_track_geojson(&geojson)
}

/// Same as [`parse_track`] for an already-decoded document
pub fn parse_track_geojson(geojson: &GeoJson) -> Result<Vec<GeoPoint>, MalformedTrackData> {
    let collection = match geojson {
        GeoJson::FeatureCollection(fc) => fc,
        _ => return Err(MalformedTrackData::NotFeatureCollection),
    };

    let feature = collection
        .features
        .first()
        .ok_or(MalformedTrackData::NoFeatures)?;

    let geometry = feature
        .geometry
        .as_ref()
        .ok_or(MalformedTrackData::MissingGeometry)?;

    let positions = match &geometry.value {
        Value::LineString(positions) => positions,
        other => {
            return Err(MalformedTrackData::NotLineString {
                found: geometry_type(other).to_string(),
            });
        }
    };

    if positions.is_empty() {
        return Err(MalformedTrackData::EmptyCoordinates);
    }

    let mut extra_dims = 0usize;
    let mut points = Vec::with_capacity(positions.len());

    for (index, position) in positions.iter().enumerate() {
        let (lon, lat) = match position.as_slice() {
            [lon, lat] => (*lon, *lat),
            [lon, lat, ..] => {
                extra_dims += 1;
                (*lon, *lat)
            }
            _ => return Err(MalformedTrackData::ShortCoordinate { index }),
        };

        if !lon.is_finite() || !lat.is_finite() {
            return Err(MalformedTrackData::NonFiniteCoordinate { index });
        }

        points.push(GeoPoint::new(lat, lon));
    }

    if extra_dims > 0 {
        log::debug!(
            "Ignored extra dimensions on {} of {} track coordinates",
            extra_dims,
            positions.len()
        );
    }

    Ok(points)
}

fn geometry_type(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feature_collection(geometry: &str) -> String {
        format!(
            r#"{{"type":"FeatureCollection","features":[{{"type":"Feature","properties":{{}},"geometry":{}}}]}}"#,
            geometry
        )
    }

    #[test]
    fn test_parse_line_string_lon_lat_order() {
        let doc = feature_collection(
            r#"{"type":"LineString","coordinates":[[-97.63,30.13],[-97.62,30.14]]}"#,
        );
        let points = parse_track(&doc).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0], GeoPoint::new(30.13, -97.63));
        assert_eq!(points[1], GeoPoint::new(30.14, -97.62));
    }

    #[test]
    fn test_parse_ignores_altitude() {
        let doc = feature_collection(
            r#"{"type":"LineString","coordinates":[[1.0,2.0,150.0],[3.0,4.0,151.5]]}"#,
        );
        let points = parse_track(&doc).unwrap();
        assert_eq!(points[1], GeoPoint::new(4.0, 3.0));
    }

    #[test]
    fn test_parse_rejects_wrong_geometry() {
        let doc = feature_collection(r#"{"type":"Point","coordinates":[1.0,2.0]}"#);
        match parse_track(&doc) {
            Err(MalformedTrackData::NotLineString { found }) => assert_eq!(found, "Point"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_empty_inputs() {
        assert!(matches!(
            parse_track(r#"{"type":"FeatureCollection","features":[]}"#),
            Err(MalformedTrackData::NoFeatures)
        ));

        let doc = feature_collection(r#"{"type":"LineString","coordinates":[]}"#);
        assert!(matches!(
            parse_track(&doc),
            Err(MalformedTrackData::EmptyCoordinates)
        ));

        let doc = feature_collection("null");
        assert!(matches!(
            parse_track(&doc),
            Err(MalformedTrackData::MissingGeometry)
        ));
    }

    #[test]
    fn test_parse_rejects_short_coordinate() {
        let doc = feature_collection(r#"{"type":"LineString","coordinates":[[1.0,2.0],[3.0]]}"#);
        // newer geojson releases reject short positions while decoding
        assert!(matches!(
            parse_track(&doc),
            Err(MalformedTrackData::ShortCoordinate { index: 1 })
                | Err(MalformedTrackData::InvalidDocument(_))
        ));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_track("not json"),
            Err(MalformedTrackData::InvalidDocument(_))
        ));
        assert!(matches!(
            parse_track(r#"{"type":"Point","coordinates":[1.0,2.0]}"#),
            Err(MalformedTrackData::NotFeatureCollection)
        ));
    }
}
