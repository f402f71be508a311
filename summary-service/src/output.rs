use std::io::Write;

use telemetry_client::domain::DailySummaryRecord;

/// Columns present in at least one record, in display order.
fn present_columns(records: &[DailySummaryRecord]) -> Vec<&'static str> {
    DailySummaryRecord::COLUMNS
        .into_iter()
        .filter(|c| records.iter().any(|r| r.columns().contains(c)))
        .collect()
}

fn cell(r: &DailySummaryRecord, column: &str) -> String {
    match column {
        "date" => r.date.to_string(),
        "sample_count" => r.sample_count.to_string(),
        _ => r.value(column).map(|v| v.to_string()).unwrap_or_default(),
    }
}

/// Write records as CSV with a header row. Columns whose channel was absent for
/// every record are left out.
pub fn write_csv<W: Write>(records: &[DailySummaryRecord], out: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    if records.is_empty() {
        wtr.flush()?;
        return Ok(());
    }

    let columns = present_columns(records);
    wtr.write_record(&columns)?;
    for r in records {
        wtr.write_record(columns.iter().map(|c| cell(r, c)))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write records as newline-delimited JSON.
pub fn write_json_lines<W: Write>(records: &[DailySummaryRecord], mut out: W) -> anyhow::Result<()> {
    for r in records {
        serde_json::to_writer(&mut out, r)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
