pub mod annotation;
pub mod point;

pub use annotation::{Annotation, NoteDraft, Severity};
pub use point::{GeoPoint, ProjectedPoint};
