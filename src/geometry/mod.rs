pub mod arc_length;
pub mod bounds;
pub mod polyline;
pub mod projection;
pub mod resolver;
pub mod simplify;

pub use arc_length::CumulativeDistanceTable;
pub use bounds::GeoBounds;
pub use polyline::Polyline;
pub use projection::{Projector, ViewBox};
pub use resolver::{TrackIndex, TrackPosition, nearest_point_on_polyline, point_for_pos};
pub use simplify::simplify_track;
