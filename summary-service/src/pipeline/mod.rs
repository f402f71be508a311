use telemetry_client::domain::{Channel, DailySummaryRecord, DateRange, InvalidDateRange, RawSample};

use crate::transform::{self, Thresholds};

#[derive(thiserror::Error, Debug)]
pub enum SummaryError {
    #[error("{0}")]
    InvalidDateRange(#[from] InvalidDateRange),
    #[error("required channel '{0}' is missing from the series")]
    MissingRequiredChannel(Channel),
    #[error("read error: {0}")]
    ReadFailure(String),
    #[error("write error: {0}")]
    WriteFailure(String),
}

/// Read side of the time-series store.
#[async_trait::async_trait]
pub trait SeriesReader: Send + Sync {
    /// Raw samples for one piece of equipment, ordered by timestamp.
    async fn raw_series(&self, equipment_id: &str, range: &DateRange) -> Result<Vec<RawSample>, SummaryError>;

    /// Previously persisted daily summaries, ordered by date.
    async fn daily_summaries(
        &self,
        equipment_id: &str,
        range: &DateRange,
    ) -> Result<Vec<DailySummaryRecord>, SummaryError>;
}

/// Write side of the daily-summary store.
///
/// Implementations replace any stored record with the same (equipment id, date)
/// and do not retry.
#[async_trait::async_trait]
pub trait SummaryWriter: Send + Sync {
    async fn write_summaries(&self, equipment_id: &str, records: &[DailySummaryRecord]) -> Result<(), SummaryError>;
}

/// Bad date input means "no data" at this boundary, not failure.
fn empty_on_invalid_range<T>(result: Result<Vec<T>, SummaryError>) -> Result<Vec<T>, SummaryError> {
    match result {
        Err(SummaryError::InvalidDateRange(e)) => {
            tracing::warn!(error = %e, "ignoring request with invalid date range");
            Ok(Vec::new())
        }
        other => other,
    }
}

/// Raw series for `equipment_id` over the inclusive day range. Unparseable dates
/// yield an empty series.
pub async fn fetch_equipment_series<R>(
    reader: &R,
    equipment_id: &str,
    start: &str,
    end: Option<&str>,
) -> Result<Vec<RawSample>, SummaryError>
where
    R: SeriesReader + ?Sized,
{
    let result = match DateRange::parse(start, end) {
        Ok(range) => reader.raw_series(equipment_id, &range).await,
        Err(e) => Err(e.into()),
    };
    empty_on_invalid_range(result)
}

/// Persisted summaries for `equipment_id` over the inclusive day range, without
/// recomputation. Unparseable dates yield an empty set.
pub async fn get_daily_summaries<R>(
    reader: &R,
    equipment_id: &str,
    start: &str,
    end: Option<&str>,
) -> Result<Vec<DailySummaryRecord>, SummaryError>
where
    R: SeriesReader + ?Sized,
{
    let result = match DateRange::parse(start, end) {
        Ok(range) => reader.daily_summaries(equipment_id, &range).await,
        Err(e) => Err(e.into()),
    };
    let records = empty_on_invalid_range(result)?;

    tracing::info!(equipment_id, days = records.len(), "fetched daily summaries");
    Ok(records)
}

/// Read -> summarize -> (optionally) write, for one piece of equipment.
pub struct DailySummaryPipeline<R, W> {
    pub reader: R,
    pub writer: W,
    pub thresholds: Thresholds,
}

impl<R, W> DailySummaryPipeline<R, W>
where
    R: SeriesReader,
    W: SummaryWriter,
{
    pub async fn create_daily_summaries(
        &self,
        equipment_id: &str,
        start: &str,
        end: Option<&str>,
        dry_run: bool,
    ) -> Result<Vec<DailySummaryRecord>, SummaryError> {
        let samples = fetch_equipment_series(&self.reader, equipment_id, start, end).await?;
        let records = transform::summarize(&samples, &self.thresholds)?;

        tracing::info!(
            equipment_id,
            samples = samples.len(),
            days = records.len(),
            dry_run,
            "computed daily summaries"
        );

        if !dry_run {
            self.writer.write_summaries(equipment_id, &records).await?;
        }

        Ok(records)
    }
}
