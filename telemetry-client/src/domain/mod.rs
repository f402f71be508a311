pub mod daily_summary;
pub mod date_range;
pub mod raw_sample;

pub use daily_summary::{DailySummaryRecord, DailySummaryRow};
pub use date_range::{DateRange, InvalidDateRange};
pub use raw_sample::{Channel, RawSample};
