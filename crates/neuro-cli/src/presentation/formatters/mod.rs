pub mod options;
pub mod size;
pub mod text;
pub mod time;

pub use options::FormatOptions;
pub use size::format_human_size;
pub use text::truncate;
pub use time::RelativeTime;
