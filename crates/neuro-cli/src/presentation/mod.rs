//! Everything that turns platform records into terminal text.
//!
//! Formatters are pure: they take records plus [`FormatOptions`] and return
//! lines. Writing, flushing and cursor control stay in `ui`.

pub mod config;
pub mod files;
pub mod formatters;
pub mod images;
pub mod jobs;
pub mod painter;

pub use files::{FilesFormatter, FilesSorter};
pub use formatters::FormatOptions;
pub use images::{ImageOperation, ImageProgress};
pub use painter::{ColorEnv, Painter};
