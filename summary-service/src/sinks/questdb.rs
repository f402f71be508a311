use sqlx::{Connection, PgConnection, Postgres, QueryBuilder};
use telemetry_client::domain::DailySummaryRecord;

use crate::pipeline::{SummaryError, SummaryWriter};

/// Key columns preceding the record columns in every insert.
const KEY_COLUMNS: [&str; 2] = ["ts", "equipment_id"];

/// Multi-row `INSERT` for one batch. Columns are the key followed by
/// [`DailySummaryRecord::COLUMNS`], and each row binds its values in that order.
fn insert_statement<'a>(
    table: &str,
    equipment_id: &'a str,
    batch: &'a [DailySummaryRecord],
) -> QueryBuilder<'a, Postgres> {
    let columns = KEY_COLUMNS
        .iter()
        .chain(DailySummaryRecord::COLUMNS.iter())
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    let mut builder = QueryBuilder::<Postgres>::new(format!("INSERT INTO \"{table}\" ({columns}) "));

    builder.push_values(batch, |mut b, r| {
        b.push_bind(r.timestamp()).push_bind(equipment_id);
        for column in DailySummaryRecord::COLUMNS {
            match column {
                "date" => b.push_bind(r.date.to_string()),
                "sample_count" => b.push_bind(r.sample_count),
                _ => b.push_bind(r.value(column)),
            };
        }
    });

    builder
}

/// Writes daily summaries with batched pgwire `INSERT`s.
///
/// The target table is expected to be declared with `DEDUP UPSERT KEYS(ts, equipment_id)`
/// (see `sql/schema/02_daily_summaries.sql`), which turns each insert into a full-row
/// replace of any existing record for the same day.
pub struct QuestDbSummaryWriter {
    uri: String,
    table: String,
    batch_size: usize,
}

impl QuestDbSummaryWriter {
    pub fn new(uri: impl Into<String>, table: impl Into<String>, batch_size: usize) -> Self {
        Self {
            uri: uri.into(),
            table: table.into(),
            batch_size: batch_size.max(1),
        }
    }

    async fn insert_batch(
        &self,
        conn: &mut PgConnection,
        equipment_id: &str,
        batch: &[DailySummaryRecord],
    ) -> Result<(), sqlx::Error> {
        insert_statement(&self.table, equipment_id, batch)
            .build()
            .execute(&mut *conn)
            .await
            .map(|_| ())
    }

    async fn insert_all(
        &self,
        conn: &mut PgConnection,
        equipment_id: &str,
        records: &[DailySummaryRecord],
    ) -> Result<(), sqlx::Error> {
        for batch in records.chunks(self.batch_size) {
            self.insert_batch(conn, equipment_id, batch).await?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl SummaryWriter for QuestDbSummaryWriter {
    async fn write_summaries(&self, equipment_id: &str, records: &[DailySummaryRecord]) -> Result<(), SummaryError> {
        if records.is_empty() {
            return Ok(());
        }

        let mut conn = PgConnection::connect(&self.uri)
            .await
            .map_err(|e| SummaryError::WriteFailure(format!("failed to connect to QuestDB: {e}")))?;

        let result = self.insert_all(&mut conn, equipment_id, records).await;
        if let Err(e) = conn.close().await {
            tracing::warn!(error = %e, "failed to close QuestDB connection");
        }

        match result {
            Ok(()) => {
                metrics::counter!("daily_summaries_written_total").increment(records.len() as u64);
                tracing::info!(equipment_id, days = records.len(), "wrote daily summaries");
                Ok(())
            }
            Err(e) => {
                metrics::counter!("daily_summary_write_errors_total").increment(1);
                tracing::error!(error = %e, equipment_id, "daily summary insert failed");
                Err(SummaryError::WriteFailure(e.to_string()))
            }
        }
    }
}
