use sqlx::{Connection, PgConnection};
use telemetry_client::{
    db,
    domain::{DailySummaryRecord, DateRange, RawSample},
};

use crate::pipeline::{SeriesReader, SummaryError};

/// Reads raw telemetry and stored summaries from QuestDB over pgwire.
///
/// Each call opens its own connection and closes it before returning.
pub struct QuestDbSeriesReader {
    uri: String,
    telemetry_table: String,
    summary_table: String,
}

impl QuestDbSeriesReader {
    pub fn new(uri: impl Into<String>, telemetry_table: impl Into<String>, summary_table: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            telemetry_table: telemetry_table.into(),
            summary_table: summary_table.into(),
        }
    }

    async fn connect(&self) -> Result<PgConnection, SummaryError> {
        PgConnection::connect(&self.uri)
            .await
            .map_err(|e| SummaryError::ReadFailure(format!("failed to connect to QuestDB: {e}")))
    }

    async fn query_series(
        &self,
        conn: &mut PgConnection,
        equipment_id: &str,
        range: &DateRange,
    ) -> anyhow::Result<Vec<RawSample>> {
        let available = db::table_columns(conn, &self.telemetry_table).await?;
        db::equipment_series(
            conn,
            &self.telemetry_table,
            &available,
            equipment_id,
            range.start_ts(),
            range.end_ts_exclusive(),
        )
        .await
    }
}

#[async_trait::async_trait]
impl SeriesReader for QuestDbSeriesReader {
    async fn raw_series(&self, equipment_id: &str, range: &DateRange) -> Result<Vec<RawSample>, SummaryError> {
        let mut conn = self.connect().await?;
        let result = self.query_series(&mut conn, equipment_id, range).await;
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "failed to close QuestDB connection");
        }

        let samples = result.map_err(|e| {
            tracing::error!(error = %e, equipment_id, "telemetry query failed");
            SummaryError::ReadFailure(e.to_string())
        })?;

        tracing::info!(
            equipment_id,
            start = %range.start,
            end = %range.end,
            samples = samples.len(),
            "read equipment series"
        );
        Ok(samples)
    }

    async fn daily_summaries(
        &self,
        equipment_id: &str,
        range: &DateRange,
    ) -> Result<Vec<DailySummaryRecord>, SummaryError> {
        let mut conn = self.connect().await?;
        let result = db::daily_summaries(
            &mut conn,
            &self.summary_table,
            equipment_id,
            range.start_ts(),
            range.end_ts_exclusive(),
        )
        .await;
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "failed to close QuestDB connection");
        }

        result.map_err(|e| {
            tracing::error!(error = %e, equipment_id, "daily summary query failed");
            SummaryError::ReadFailure(e.to_string())
        })
    }
}
