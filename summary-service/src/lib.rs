pub mod config;
pub mod observability;
pub mod output;
pub mod pipeline;
pub mod sinks;
pub mod sources;
pub mod transform;

pub use pipeline::{DailySummaryPipeline, SeriesReader, SummaryError, SummaryWriter};
