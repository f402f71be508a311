use std::collections::HashSet;

use anyhow::Result;
use sqlx::PgConnection;
use time::OffsetDateTime;

use crate::domain::{Channel, RawSample};

/// List the column names of a QuestDB table.
pub async fn table_columns(conn: &mut PgConnection, table: &str) -> Result<HashSet<String>> {
    let sql = format!(
        r#"SELECT "column" FROM table_columns('{}')"#,
        table.replace('\'', "''")
    );

    let names: Vec<(String,)> = sqlx::query_as(&sql).fetch_all(&mut *conn).await?;
    Ok(names.into_iter().map(|(n,)| n).collect())
}

/// Select list for the telemetry table. Channels without a column are selected as
/// NULL so the row still maps onto [`RawSample`].
fn select_list(available: &HashSet<String>) -> String {
    let mut cols = vec!["ts".to_string(), "equipment_id".to_string()];
    for channel in Channel::ALL {
        let name = channel.column();
        if available.contains(name) {
            cols.push(name.to_string());
        } else {
            cols.push(format!("CAST(NULL AS DOUBLE) AS {name}"));
        }
    }
    cols.join(", ")
}

/// Fetch the time-ordered raw series for a single piece of equipment.
pub async fn equipment_series(
    conn: &mut PgConnection,
    table: &str,
    available: &HashSet<String>,
    equipment_id: &str,
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> Result<Vec<RawSample>> {
    let sql = format!(
        r#"
        SELECT {}
        FROM "{table}"
        WHERE equipment_id = $1
          AND ts >= $2
          AND ts <  $3
        ORDER BY ts
        "#,
        select_list(available)
    );

    let rows = sqlx::query_as::<_, RawSample>(&sql)
        .bind(equipment_id)
        .bind(start)
        .bind(end)
        .fetch_all(&mut *conn)
        .await?;

    Ok(rows)
}
