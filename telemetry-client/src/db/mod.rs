pub mod daily_summary_queries;
pub mod telemetry_queries;

pub use daily_summary_queries::daily_summaries;
pub use telemetry_queries::{equipment_series, table_columns};
