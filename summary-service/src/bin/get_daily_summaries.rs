use anyhow::{bail, Result};
use std::io;
use summary_service::{config::AppConfig, observability, output, pipeline, sources::QuestDbSeriesReader};

/// Print previously stored daily summaries without recomputing them.
///
/// Usage:
///   get_daily_summaries <equipment-id> <start-date> [end-date] [--json]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    observability::init_tracing();

    let mut json = false;
    let mut positional = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            flag if flag.starts_with("--") => bail!("unknown flag {flag}"),
            _ => positional.push(arg),
        }
    }
    let (equipment_id, start_date, end_date) = match positional.as_slice() {
        [id, start] => (id, start, None),
        [id, start, end] => (id, start, Some(end.as_str())),
        _ => bail!("usage: get_daily_summaries <equipment-id> <start-date> [end-date] [--json]"),
    };

    let cfg = AppConfig::load()?;
    let reader = QuestDbSeriesReader::new(&cfg.questdb.uri, &cfg.tables.telemetry, &cfg.tables.daily_summaries);

    let records = pipeline::get_daily_summaries(&reader, equipment_id, start_date, end_date).await?;

    let stdout = io::stdout().lock();
    if json {
        output::write_json_lines(&records, stdout)?;
    } else {
        output::write_csv(&records, stdout)?;
    }

    Ok(())
}
