use thiserror::Error;

/// Why a track document could not be turned into a centerline
///
/// Callers treat this as "no track available" and degrade, so it is reported
/// rather than propagated by the non-`try_` builders.
#[derive(Debug, Error)]
pub enum MalformedTrackData {
    #[error("invalid GeoJSON document: {0}")]
    InvalidDocument(#[from] geojson::Error),

    #[error("expected a FeatureCollection")]
    NotFeatureCollection,

    #[error("feature collection has no features")]
    NoFeatures,

    #[error("first feature has no geometry")]
    MissingGeometry,

    #[error("expected LineString geometry, found {found}")]
    NotLineString { found: String },

    #[error("no coordinates found in LineString")]
    EmptyCoordinates,

    #[error("coordinate {index} has fewer than two values")]
    ShortCoordinate { index: usize },

    #[error("coordinate {index} is not finite")]
    NonFiniteCoordinate { index: usize },
}
