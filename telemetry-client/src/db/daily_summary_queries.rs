use anyhow::Result;
use sqlx::PgConnection;
use time::OffsetDateTime;

use crate::domain::{DailySummaryRecord, DailySummaryRow};

/// Fetch previously computed daily summaries for one piece of equipment.
pub async fn daily_summaries(
    conn: &mut PgConnection,
    table: &str,
    equipment_id: &str,
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> Result<Vec<DailySummaryRecord>> {
    let sql = format!(
        r#"
        SELECT
            ts,
            equipment_id,
            runtime_hours,
            heatpump_energy_kwh,
            auxiliary_energy_kwh,
            pump_energy_kwh,
            total_energy_kwh,
            cooling_degree_days,
            heating_degree_days,
            heat_exchanged_kbtu,
            heat_exchanged_heating_kbtu,
            heat_exchanged_cooling_kbtu,
            entering_water_temp_min_f,
            entering_water_temp_max_f,
            outdoor_air_temp_avg_f,
            sample_count
        FROM "{table}"
        WHERE equipment_id = $1
          AND ts >= $2
          AND ts <  $3
        ORDER BY ts
        "#
    );

    let rows = sqlx::query_as::<_, DailySummaryRow>(&sql)
        .bind(equipment_id)
        .bind(start)
        .bind(end)
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows.into_iter().map(DailySummaryRecord::from).collect())
}
