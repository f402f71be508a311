use anyhow::{bail, Result};
use std::{io, net::SocketAddr};
use summary_service::{
    config::{AppConfig, SinkKind},
    observability, output,
    pipeline::{DailySummaryPipeline, SummaryError, SummaryWriter},
    sinks::{QuestDbIlpSummaryWriter, QuestDbSummaryWriter},
    sources::QuestDbSeriesReader,
};
use telemetry_client::domain::DailySummaryRecord;

enum SummarySink {
    Ilp(QuestDbIlpSummaryWriter),
    Pgwire(QuestDbSummaryWriter),
}

#[async_trait::async_trait]
impl SummaryWriter for SummarySink {
    async fn write_summaries(&self, equipment_id: &str, records: &[DailySummaryRecord]) -> Result<(), SummaryError> {
        match self {
            Self::Ilp(s) => s.write_summaries(equipment_id, records).await,
            Self::Pgwire(s) => s.write_summaries(equipment_id, records).await,
        }
    }
}

/// Compute daily summaries for one piece of equipment and store them.
///
/// Usage:
///   create_daily_summaries <equipment-id> <start-date> <end-date> [--dry-run] [--json]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    observability::init_tracing();

    let mut dry_run = false;
    let mut json = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--dry-run" => dry_run = true,
            "--json" => json = true,
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            _ => positional.push(arg),
        }
    }
    let [equipment_id, start_date, end_date] = positional.as_slice() else {
        bail!("usage: create_daily_summaries <equipment-id> <start-date> <end-date> [--dry-run] [--json]");
    };

    // SUMMARY_CONFIG can point to an alternate config file.
    let cfg = AppConfig::load()?;

    let reader = QuestDbSeriesReader::new(&cfg.questdb.uri, &cfg.tables.telemetry, &cfg.tables.daily_summaries);
    let writer = match cfg.sink.kind {
        SinkKind::Ilp => {
            let addr: SocketAddr = cfg
                .questdb
                .ilp_tcp_addr
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid questdb.ilp_tcp_addr: {e}"))?;
            tracing::warn!(%addr, "ILP sink does not report rejected lines; use kind = \"pgwire\" to surface write errors");
            SummarySink::Ilp(QuestDbIlpSummaryWriter::new(addr, &cfg.tables.daily_summaries))
        }
        SinkKind::Pgwire => SummarySink::Pgwire(QuestDbSummaryWriter::new(
            &cfg.questdb.uri,
            &cfg.tables.daily_summaries,
            cfg.sink.batch_size,
        )),
    };

    let pipeline = DailySummaryPipeline {
        reader,
        writer,
        thresholds: cfg.thresholds(),
    };

    let records = pipeline
        .create_daily_summaries(equipment_id, start_date, Some(end_date.as_str()), dry_run)
        .await?;

    let stdout = io::stdout().lock();
    if json {
        output::write_json_lines(&records, stdout)?;
    } else {
        output::write_csv(&records, stdout)?;
    }

    Ok(())
}
