pub mod builder;
pub mod oval;
pub mod parser;

pub use builder::{BuildOptions, build_polyline, project_track, try_build_polyline};
pub use oval::oval_track;
pub use parser::{parse_track, parse_track_geojson};
