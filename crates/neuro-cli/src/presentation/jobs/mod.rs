pub mod columns;
pub mod progress;
pub mod resources;
pub mod status;
pub mod summary;
pub mod tabular;
pub mod telemetry;

pub use columns::{ColumnSpecError, JobColumn, JobColumnInfo, parse_columns};
pub use progress::JobStartProgress;
pub use resources::format_resources;
pub use status::{format_job_details, format_job_status};
pub use summary::{JobFormatter, format_job_ids};
pub use tabular::{TabularJobRow, TabularJobsFormatter};
pub use telemetry::{format_telemetry, telemetry_header};
