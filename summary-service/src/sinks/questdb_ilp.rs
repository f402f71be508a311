use std::net::SocketAddr;

use telemetry_client::domain::DailySummaryRecord;
use time::OffsetDateTime;
use tokio::{io::AsyncWriteExt, net::TcpStream};

use crate::pipeline::{SummaryError, SummaryWriter};

/// Escape measurement/tag keys/tag values/field keys for ILP.
///
/// ILP requires escaping commas, spaces and equals with a backslash.
fn ilp_escape_ident(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            ',' | ' ' | '=' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
}

fn push_tag(out: &mut String, key: &str, value: &str) {
    out.push(',');
    ilp_escape_ident(key, out);
    out.push('=');
    ilp_escape_ident(value, out);
}

fn push_field_key(out: &mut String, first: &mut bool, key: &str) {
    if *first {
        *first = false;
    } else {
        out.push(',');
    }

    ilp_escape_ident(key, out);
    out.push('=');
}

fn push_field_f64(out: &mut String, first: &mut bool, key: &str, value: f64) {
    push_field_key(out, first, key);
    out.push_str(&value.to_string());
}

fn push_field_i64(out: &mut String, first: &mut bool, key: &str, value: i64) {
    push_field_key(out, first, key);
    out.push_str(&value.to_string());
    out.push('i');
}

fn push_field_str(out: &mut String, first: &mut bool, key: &str, value: &str) {
    push_field_key(out, first, key);
    out.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
}

fn ts_to_unix_nanos(ts: OffsetDateTime) -> i128 {
    ts.unix_timestamp_nanos()
}

/// One ILP line for a daily summary. Absent optional values are left out of the
/// line so they land as NULL.
fn write_summary_line(out: &mut String, table: &str, equipment_id: &str, r: &DailySummaryRecord) {
    ilp_escape_ident(table, out);
    push_tag(out, "equipment_id", equipment_id);

    out.push(' ');
    let mut first = true;
    push_field_str(out, &mut first, "date", &r.date.to_string());
    push_field_f64(out, &mut first, "runtime_hours", r.runtime_hours);
    push_field_f64(out, &mut first, "heatpump_energy_kwh", r.heatpump_energy_kwh);
    if let Some(v) = r.auxiliary_energy_kwh {
        push_field_f64(out, &mut first, "auxiliary_energy_kwh", v);
    }
    if let Some(v) = r.pump_energy_kwh {
        push_field_f64(out, &mut first, "pump_energy_kwh", v);
    }
    if let Some(v) = r.total_energy_kwh {
        push_field_f64(out, &mut first, "total_energy_kwh", v);
    }
    push_field_f64(out, &mut first, "cooling_degree_days", r.cooling_degree_days);
    push_field_f64(out, &mut first, "heating_degree_days", r.heating_degree_days);
    push_field_f64(out, &mut first, "heat_exchanged_kbtu", r.heat_exchanged_kbtu);
    push_field_f64(out, &mut first, "heat_exchanged_heating_kbtu", r.heat_exchanged_heating_kbtu);
    push_field_f64(out, &mut first, "heat_exchanged_cooling_kbtu", r.heat_exchanged_cooling_kbtu);
    if let Some(v) = r.entering_water_temp_min_f {
        push_field_f64(out, &mut first, "entering_water_temp_min_f", v);
    }
    if let Some(v) = r.entering_water_temp_max_f {
        push_field_f64(out, &mut first, "entering_water_temp_max_f", v);
    }
    if let Some(v) = r.outdoor_air_temp_avg_f {
        push_field_f64(out, &mut first, "outdoor_air_temp_avg_f", v);
    }
    push_field_i64(out, &mut first, "sample_count", r.sample_count);

    // Midnight UTC, so always on a whole hour.
    out.push(' ');
    out.push_str(&ts_to_unix_nanos(r.timestamp()).to_string());
}

/// Writes daily summaries to QuestDB as InfluxDB line protocol over TCP.
///
/// Fire-and-forget: ILP over TCP has no acknowledgement, so only connect and
/// socket errors surface as `WriteFailure`. Lines the server rejects, or a
/// server that drops the connection after accepting it, still return `Ok`.
/// Replace semantics hold only when the table was created from
/// `sql/schema/02_daily_summaries.sql`; a table auto-created by ILP has no
/// dedup keys. Use [`super::QuestDbSummaryWriter`] where failures must surface.
pub struct QuestDbIlpSummaryWriter {
    addr: SocketAddr,
    table: String,
}

impl QuestDbIlpSummaryWriter {
    pub fn new(addr: SocketAddr, table: impl Into<String>) -> Self {
        Self {
            addr,
            table: table.into(),
        }
    }

    fn encode(&self, equipment_id: &str, records: &[DailySummaryRecord]) -> Vec<u8> {
        // Heuristic capacity: ~480 bytes per line.
        let mut s = String::with_capacity(records.len().saturating_mul(480));
        for r in records {
            write_summary_line(&mut s, &self.table, equipment_id, r);
            s.push('\n');
        }
        s.into_bytes()
    }

    async fn connect(&self) -> Result<TcpStream, SummaryError> {
        let stream = TcpStream::connect(self.addr)
            .await
            .map_err(|e| SummaryError::WriteFailure(format!("failed to connect to QuestDB ILP: {e}")))?;
        let _ = stream.set_nodelay(true);
        Ok(stream)
    }

    async fn send(stream: &mut TcpStream, payload: &[u8]) -> std::io::Result<()> {
        stream.write_all(payload).await?;
        stream.flush().await?;
        stream.shutdown().await
    }
}

#[async_trait::async_trait]
impl SummaryWriter for QuestDbIlpSummaryWriter {
    async fn write_summaries(&self, equipment_id: &str, records: &[DailySummaryRecord]) -> Result<(), SummaryError> {
        if records.is_empty() {
            return Ok(());
        }

        let payload = self.encode(equipment_id, records);
        let mut stream = self.connect().await?;

        match Self::send(&mut stream, &payload).await {
            Ok(()) => {
                metrics::counter!("daily_summaries_written_total").increment(records.len() as u64);
                metrics::counter!("questdb_ilp_bytes_total").increment(payload.len() as u64);
                tracing::info!(
                    equipment_id,
                    days = records.len(),
                    bytes = payload.len(),
                    "wrote daily summaries over ILP"
                );
                Ok(())
            }
            Err(e) => {
                metrics::counter!("daily_summary_write_errors_total").increment(1);
                tracing::error!(error = %e, equipment_id, "QuestDB ILP write failed");
                Err(SummaryError::WriteFailure(format!("ilp write failed: {e}")))
            }
        }
    }
}
