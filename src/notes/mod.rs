pub mod book;
pub mod export;
pub mod store;
pub mod timeline;

pub use book::NoteBook;
pub use export::{DEFAULT_SESSION, SessionExport};
pub use store::NoteStore;
pub use timeline::{format_time, progress, scrub_fraction, time_for_pos};
