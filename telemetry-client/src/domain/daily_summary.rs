use time::{Date, OffsetDateTime};

/// Columns that exist only when the backing optional channel exists.
const CHANNEL_COLUMNS: [&str; 3] = ["auxiliary_energy_kwh", "pump_energy_kwh", "total_energy_kwh"];

/// Per-day performance summary for one piece of equipment.
///
/// Fields that depend on an optional sensor channel are `None` when the channel
/// was absent from the source series; they are never defaulted to zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailySummaryRecord {
    pub date: Date,
    pub runtime_hours: f64,
    pub heatpump_energy_kwh: f64,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub auxiliary_energy_kwh: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub pump_energy_kwh: Option<f64>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub total_energy_kwh: Option<f64>,
    pub cooling_degree_days: f64,
    pub heating_degree_days: f64,
    pub heat_exchanged_kbtu: f64,
    pub heat_exchanged_heating_kbtu: f64,
    pub heat_exchanged_cooling_kbtu: f64,
    pub entering_water_temp_min_f: Option<f64>,
    pub entering_water_temp_max_f: Option<f64>,
    pub outdoor_air_temp_avg_f: Option<f64>,
    pub sample_count: i64,
}

impl DailySummaryRecord {
    /// Designated timestamp of the stored row: midnight UTC of `date`.
    pub fn timestamp(&self) -> OffsetDateTime {
        self.date.midnight().assume_utc()
    }

    /// Every column a record can carry, in display order.
    pub const COLUMNS: [&'static str; 15] = [
        "date",
        "runtime_hours",
        "heatpump_energy_kwh",
        "auxiliary_energy_kwh",
        "pump_energy_kwh",
        "total_energy_kwh",
        "cooling_degree_days",
        "heating_degree_days",
        "heat_exchanged_kbtu",
        "heat_exchanged_heating_kbtu",
        "heat_exchanged_cooling_kbtu",
        "entering_water_temp_min_f",
        "entering_water_temp_max_f",
        "outdoor_air_temp_avg_f",
        "sample_count",
    ];

    /// Output columns of this record, in display order.
    ///
    /// Channel-dependent columns appear only when their channel was present, so
    /// a series with fewer channels always yields a subset of these names.
    pub fn columns(&self) -> Vec<&'static str> {
        Self::COLUMNS
            .into_iter()
            .filter(|c| !CHANNEL_COLUMNS.contains(c) || self.value(c).is_some())
            .collect()
    }

    /// Numeric value of a column returned by [`Self::columns`]; `date` and unknown
    /// names yield `None`.
    pub fn value(&self, column: &str) -> Option<f64> {
        match column {
            "runtime_hours" => Some(self.runtime_hours),
            "heatpump_energy_kwh" => Some(self.heatpump_energy_kwh),
            "auxiliary_energy_kwh" => self.auxiliary_energy_kwh,
            "pump_energy_kwh" => self.pump_energy_kwh,
            "total_energy_kwh" => self.total_energy_kwh,
            "cooling_degree_days" => Some(self.cooling_degree_days),
            "heating_degree_days" => Some(self.heating_degree_days),
            "heat_exchanged_kbtu" => Some(self.heat_exchanged_kbtu),
            "heat_exchanged_heating_kbtu" => Some(self.heat_exchanged_heating_kbtu),
            "heat_exchanged_cooling_kbtu" => Some(self.heat_exchanged_cooling_kbtu),
            "entering_water_temp_min_f" => self.entering_water_temp_min_f,
            "entering_water_temp_max_f" => self.entering_water_temp_max_f,
            "outdoor_air_temp_avg_f" => self.outdoor_air_temp_avg_f,
            "sample_count" => Some(self.sample_count as f64),
            _ => None,
        }
    }
}

/// Row shape of the `daily_summaries` table as read back over pgwire.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DailySummaryRow {
    pub ts: OffsetDateTime,
    pub equipment_id: String,
    pub runtime_hours: f64,
    pub heatpump_energy_kwh: f64,
    pub auxiliary_energy_kwh: Option<f64>,
    pub pump_energy_kwh: Option<f64>,
    pub total_energy_kwh: Option<f64>,
    pub cooling_degree_days: f64,
    pub heating_degree_days: f64,
    pub heat_exchanged_kbtu: f64,
    pub heat_exchanged_heating_kbtu: f64,
    pub heat_exchanged_cooling_kbtu: f64,
    pub entering_water_temp_min_f: Option<f64>,
    pub entering_water_temp_max_f: Option<f64>,
    pub outdoor_air_temp_avg_f: Option<f64>,
    pub sample_count: i64,
}

impl From<DailySummaryRow> for DailySummaryRecord {
    fn from(r: DailySummaryRow) -> Self {
        DailySummaryRecord {
            date: r.ts.to_offset(time::UtcOffset::UTC).date(),
            runtime_hours: r.runtime_hours,
            heatpump_energy_kwh: r.heatpump_energy_kwh,
            auxiliary_energy_kwh: r.auxiliary_energy_kwh,
            pump_energy_kwh: r.pump_energy_kwh,
            total_energy_kwh: r.total_energy_kwh,
            cooling_degree_days: r.cooling_degree_days,
            heating_degree_days: r.heating_degree_days,
            heat_exchanged_kbtu: r.heat_exchanged_kbtu,
            heat_exchanged_heating_kbtu: r.heat_exchanged_heating_kbtu,
            heat_exchanged_cooling_kbtu: r.heat_exchanged_cooling_kbtu,
            entering_water_temp_min_f: r.entering_water_temp_min_f,
            entering_water_temp_max_f: r.entering_water_temp_max_f,
            outdoor_air_temp_avg_f: r.outdoor_air_temp_avg_f,
            sample_count: r.sample_count,
        }
    }
}
