//! trackmap - Project track centerlines to drawing space and pin session notes along the lap

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod notes;
pub mod track;

pub use domain::{Annotation, GeoPoint, NoteDraft, ProjectedPoint, Severity};
pub use error::MalformedTrackData;
pub use geometry::{
    CumulativeDistanceTable, GeoBounds, Polyline, Projector, TrackIndex, TrackPosition, ViewBox,
    nearest_point_on_polyline, point_for_pos,
};
pub use track::{BuildOptions, build_polyline, oval_track, try_build_polyline};
