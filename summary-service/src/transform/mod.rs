use std::{collections::BTreeMap, time::Duration};

use telemetry_client::domain::{Channel, DailySummaryRecord, RawSample};
use time::{Date, OffsetDateTime, UtcOffset};

use crate::pipeline::SummaryError;

/// Electrical-to-thermal conversion.
pub const BTU_PER_KWH: f64 = 3412.14;

/// Channels without which no meaningful summary exists.
pub const REQUIRED_CHANNELS: [Channel; 5] = [
    Channel::OutdoorAirTemperature,
    Channel::HeatpumpPower,
    Channel::SourceSupplyTemperature,
    Channel::SourceReturnTemperature,
    Channel::SourceFluidFlowRate,
];

/// Fixed thresholds applied to every sample of a series.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    /// Compressor is on strictly above this draw (W).
    pub duty_threshold_watts: f64,
    /// Degree-day balance point (°F).
    pub balance_point_f: f64,
    /// Intervals at or above this length are treated as a data gap.
    pub sampling_guard: Duration,
    /// BTU per (gal/min · °F · hr) for the source fluid.
    pub source_fluid_btu_factor: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            duty_threshold_watts: 500.0,
            balance_point_f: 65.0,
            sampling_guard: Duration::from_secs(5 * 60),
            source_fluid_btu_factor: 900.0,
        }
    }
}

/// Which channels carry at least one value anywhere in a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelSet {
    present: [bool; Channel::ALL.len()],
}

impl ChannelSet {
    pub fn of<'a, I>(samples: I) -> Self
    where
        I: IntoIterator<Item = &'a RawSample>,
    {
        let mut set = Self::default();
        for s in samples {
            for channel in Channel::ALL {
                if s.channel(channel).is_some() {
                    set.present[channel as usize] = true;
                }
            }
        }
        set
    }

    pub fn contains(&self, channel: Channel) -> bool {
        self.present[channel as usize]
    }

    /// First required channel with no values, if any.
    pub fn missing_required(&self) -> Option<Channel> {
        REQUIRED_CHANNELS.into_iter().find(|c| !self.contains(*c))
    }
}

pub fn celsius_to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Derived values for one raw sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleMetrics {
    pub ts: OffsetDateTime,
    pub time_elapsed_hours: f64,
    pub oat_f: Option<f64>,
    pub cooling_degrees: f64,
    pub heating_degrees: f64,
    pub heatpump_on: bool,
    /// Source supply temperature (°C) while the compressor runs.
    pub ewt_on: Option<f64>,
    pub runtime_hours: f64,
    pub compressor_kwh: f64,
    pub auxiliary_kwh: Option<f64>,
    pub pump_kwh: Option<f64>,
    pub delta_t: f64,
    pub btus_exchanged: f64,
    pub btu_heating: f64,
    pub btu_cooling: f64,
}

/// Per-sample metrics for a timestamp-ordered series.
///
/// Rules:
/// - the first sample's interval is zero, every other is the gap to its predecessor;
/// - electrical energy accumulates whenever the interval is shorter than the
///   sampling guard;
/// - runtime and heat exchange additionally require the compressor to be on;
/// - optional-channel metrics are `Some` exactly when `channels` has the channel.
pub fn derive_metrics<'a, I>(samples: I, channels: &ChannelSet, thresholds: &Thresholds) -> Vec<SampleMetrics>
where
    I: IntoIterator<Item = &'a RawSample>,
{
    let guard_hours = thresholds.sampling_guard.as_secs_f64() / 3600.0;
    let direct_heat_flow = channels.contains(Channel::HeatFlowRate);

    let mut prev_ts: Option<OffsetDateTime> = None;
    let mut out = Vec::new();

    for s in samples {
        let elapsed = match prev_ts {
            Some(prev) => ((s.ts - prev).as_seconds_f64() / 3600.0).max(0.0),
            None => 0.0,
        };
        prev_ts = Some(s.ts);

        let oat_f = s.outdoor_air_temperature.map(celsius_to_fahrenheit);
        let (cooling_degrees, heating_degrees) = match oat_f {
            Some(f) if f > thresholds.balance_point_f => ((f - thresholds.balance_point_f) * elapsed / 24.0, 0.0),
            Some(f) if f < thresholds.balance_point_f => (0.0, (thresholds.balance_point_f - f) * elapsed / 24.0),
            _ => (0.0, 0.0),
        };

        let heatpump_on = s.heatpump_power.is_some_and(|w| w > thresholds.duty_threshold_watts);
        let within_guard = elapsed < guard_hours;
        let metered = heatpump_on && within_guard;

        // Electrical energy ignores duty state; only the guard applies.
        let kwh = |watts: Option<f64>| match (within_guard, watts) {
            (true, Some(w)) => w * elapsed / 1000.0,
            _ => 0.0,
        };
        let compressor_kwh = kwh(s.heatpump_power);
        let auxiliary_kwh = channels
            .contains(Channel::HeatpumpAuxPower)
            .then(|| kwh(s.heatpump_aux_power));
        let pump_kwh = channels
            .contains(Channel::SourceFluidPumpPower)
            .then(|| kwh(s.source_fluid_pump_power));

        let delta_t = match (heatpump_on, s.source_supply_temperature, s.source_return_temperature) {
            (true, Some(supply), Some(ret)) => supply - ret,
            _ => 0.0,
        };

        let btus_exchanged = if !metered {
            0.0
        } else if direct_heat_flow {
            s.heat_flow_rate.map_or(0.0, |q| q * elapsed)
        } else {
            s.source_fluid_flow_rate
                .map_or(0.0, |gpm| thresholds.source_fluid_btu_factor * gpm * delta_t * elapsed)
        };

        // Split follows the sign of compressor-implied BTUs, not of the exchange itself.
        let compressor_btu = BTU_PER_KWH * compressor_kwh;
        let (btu_heating, btu_cooling) = match heatpump_on {
            true if compressor_btu > 0.0 => (btus_exchanged, 0.0),
            true if compressor_btu < 0.0 => (0.0, btus_exchanged),
            _ => (0.0, 0.0),
        };

        out.push(SampleMetrics {
            ts: s.ts,
            time_elapsed_hours: elapsed,
            oat_f,
            cooling_degrees,
            heating_degrees,
            heatpump_on,
            ewt_on: if heatpump_on { s.source_supply_temperature } else { None },
            runtime_hours: if metered { elapsed } else { 0.0 },
            compressor_kwh,
            auxiliary_kwh,
            pump_kwh,
            delta_t,
            btus_exchanged,
            btu_heating,
            btu_cooling,
        });
    }

    out
}

#[derive(Debug, Default)]
struct DayTotals {
    runtime_hours: f64,
    compressor_kwh: f64,
    auxiliary_kwh: Option<f64>,
    pump_kwh: Option<f64>,
    cooling_degrees: f64,
    heating_degrees: f64,
    btus_exchanged: f64,
    btu_heating: f64,
    btu_cooling: f64,
    ewt_min: Option<f64>,
    ewt_max: Option<f64>,
    oat_sum: f64,
    oat_count: i64,
}

fn add_opt(acc: &mut Option<f64>, v: Option<f64>) {
    if let Some(v) = v {
        *acc.get_or_insert(0.0) += v;
    }
}

impl DayTotals {
    fn fold(&mut self, m: &SampleMetrics) {
        self.runtime_hours += m.runtime_hours;
        self.compressor_kwh += m.compressor_kwh;
        add_opt(&mut self.auxiliary_kwh, m.auxiliary_kwh);
        add_opt(&mut self.pump_kwh, m.pump_kwh);
        self.cooling_degrees += m.cooling_degrees;
        self.heating_degrees += m.heating_degrees;
        self.btus_exchanged += m.btus_exchanged;
        self.btu_heating += m.btu_heating;
        self.btu_cooling += m.btu_cooling;

        if let Some(ewt) = m.ewt_on {
            self.ewt_min = Some(self.ewt_min.map_or(ewt, |v| v.min(ewt)));
            self.ewt_max = Some(self.ewt_max.map_or(ewt, |v| v.max(ewt)));
        }
        if let Some(oat) = m.oat_f {
            self.oat_sum += oat;
            self.oat_count += 1;
        }
    }

    fn finish(self, date: Date) -> DailySummaryRecord {
        DailySummaryRecord {
            date,
            runtime_hours: self.runtime_hours,
            heatpump_energy_kwh: self.compressor_kwh,
            auxiliary_energy_kwh: self.auxiliary_kwh,
            pump_energy_kwh: self.pump_kwh,
            // Pump energy is tracked separately and not part of the total.
            total_energy_kwh: self.auxiliary_kwh.map(|aux| self.compressor_kwh + aux),
            cooling_degree_days: self.cooling_degrees,
            heating_degree_days: self.heating_degrees,
            heat_exchanged_kbtu: self.btus_exchanged / 1000.0,
            heat_exchanged_heating_kbtu: self.btu_heating / 1000.0,
            heat_exchanged_cooling_kbtu: self.btu_cooling / 1000.0,
            entering_water_temp_min_f: self.ewt_min.map(celsius_to_fahrenheit),
            entering_water_temp_max_f: self.ewt_max.map(celsius_to_fahrenheit),
            outdoor_air_temp_avg_f: (self.oat_count > 0).then(|| self.oat_sum / self.oat_count as f64),
            sample_count: self.oat_count,
        }
    }
}

/// Fold per-sample metrics into one record per UTC calendar day, ordered by date.
pub fn resample_daily(metrics: &[SampleMetrics]) -> Vec<DailySummaryRecord> {
    let mut days: BTreeMap<Date, DayTotals> = BTreeMap::new();
    for m in metrics {
        let day = m.ts.to_offset(UtcOffset::UTC).date();
        days.entry(day).or_default().fold(m);
    }

    days.into_iter().map(|(date, totals)| totals.finish(date)).collect()
}

/// Raw series for one piece of equipment to daily summaries.
///
/// An empty series yields no records. A series missing a required channel fails as
/// a whole; no partial days are returned.
pub fn summarize(samples: &[RawSample], thresholds: &Thresholds) -> Result<Vec<DailySummaryRecord>, SummaryError> {
    if samples.is_empty() {
        return Ok(Vec::new());
    }

    let channels = ChannelSet::of(samples);
    if let Some(channel) = channels.missing_required() {
        return Err(SummaryError::MissingRequiredChannel(channel));
    }

    let mut ordered: Vec<&RawSample> = samples.iter().collect();
    ordered.sort_by_key(|s| s.ts);

    let metrics = derive_metrics(ordered, &channels, thresholds);
    let records = resample_daily(&metrics);

    tracing::debug!(
        samples = samples.len(),
        days = records.len(),
        auxiliary = channels.contains(Channel::HeatpumpAuxPower),
        pump = channels.contains(Channel::SourceFluidPumpPower),
        direct_heat_flow = channels.contains(Channel::HeatFlowRate),
        "derived daily summaries"
    );

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    const EPS: f64 = 1e-9;

    fn sample(ts: OffsetDateTime) -> RawSample {
        RawSample {
            ts,
            equipment_id: "hp-1".to_string(),
            outdoor_air_temperature: Some(10.0),
            heatpump_power: Some(0.0),
            heatpump_aux_power: None,
            source_fluid_pump_power: None,
            source_supply_temperature: Some(5.0),
            source_return_temperature: Some(2.0),
            source_fluid_flow_rate: Some(3.0),
            heat_flow_rate: None,
        }
    }

    fn series(start: OffsetDateTime, count: i64, step: time::Duration, f: impl Fn(RawSample) -> RawSample) -> Vec<RawSample> {
        (0..count).map(|i| f(sample(start + step * i as i32))).collect()
    }

    fn running(mut s: RawSample) -> RawSample {
        s.heatpump_power = Some(3000.0);
        s
    }

    fn fahrenheit_to_celsius(f: f64) -> f64 {
        (f - 32.0) * 5.0 / 9.0
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < EPS, "expected {expected}, got {actual}");
    }

    #[test]
    fn empty_series_yields_no_records() {
        let out = summarize(&[], &Thresholds::default()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn missing_required_channel_fails_whole_range() {
        let samples = series(datetime!(2024-01-01 00:00 UTC), 10, time::Duration::minutes(1), |mut s| {
            s.source_fluid_flow_rate = None;
            s
        });

        let err = summarize(&samples, &Thresholds::default()).unwrap_err();
        assert!(matches!(err, SummaryError::MissingRequiredChannel(Channel::SourceFluidFlowRate)));
        assert!(err.to_string().contains("source_fluid_flow_rate"));
    }

    #[test]
    fn exactly_duty_threshold_is_off() {
        let samples = series(datetime!(2024-01-01 00:00 UTC), 30, time::Duration::minutes(1), |mut s| {
            s.heatpump_power = Some(500.0);
            s
        });
        let t = Thresholds::default();

        let metrics = derive_metrics(&samples, &ChannelSet::of(&samples), &t);
        assert!(metrics.iter().all(|m| !m.heatpump_on));

        let day = &summarize(&samples, &t).unwrap()[0];
        assert_eq!(day.runtime_hours, 0.0);
        assert_eq!(day.heat_exchanged_kbtu, 0.0);
        // Standby draw is still metered: 500 W over 29 minutes.
        assert_close(day.heatpump_energy_kwh, 0.5 * 29.0 / 60.0);
        assert_eq!(day.entering_water_temp_min_f, None);
        assert_eq!(day.entering_water_temp_max_f, None);
    }

    #[test]
    fn constant_80f_day_is_15_cooling_degree_days() {
        // One sample closes out the previous day so the target day sees a full 24 h of intervals.
        let samples = series(datetime!(2024-07-01 23:55 UTC), 289, time::Duration::minutes(5), |mut s| {
            s.outdoor_air_temperature = Some(fahrenheit_to_celsius(80.0));
            s
        });

        let out = summarize(&samples, &Thresholds::default()).unwrap();
        assert_eq!(out.len(), 2);

        let day = &out[1];
        assert_eq!(day.date, date!(2024 - 07 - 02));
        assert_close(day.cooling_degree_days, 15.0);
        assert_eq!(day.heating_degree_days, 0.0);
        assert_eq!(day.sample_count, 288);
        assert_close(day.outdoor_air_temp_avg_f.unwrap(), 80.0);
    }

    #[test]
    fn constant_50f_day_is_15_heating_degree_days() {
        let samples = series(datetime!(2024-01-01 23:55 UTC), 289, time::Duration::minutes(5), |mut s| {
            s.outdoor_air_temperature = Some(fahrenheit_to_celsius(50.0));
            s
        });

        let out = summarize(&samples, &Thresholds::default()).unwrap();
        let day = &out[1];
        assert_close(day.heating_degree_days, 15.0);
        assert_eq!(day.cooling_degree_days, 0.0);
    }

    #[test]
    fn balance_point_temperature_accrues_no_degree_days() {
        let samples = series(datetime!(2024-01-01 00:00 UTC), 12, time::Duration::minutes(5), |mut s| {
            s.outdoor_air_temperature = Some(fahrenheit_to_celsius(65.0));
            s
        });

        let day = &summarize(&samples, &Thresholds::default()).unwrap()[0];
        assert_close(day.cooling_degree_days, 0.0);
        assert_close(day.heating_degree_days, 0.0);
    }

    #[test]
    fn gap_longer_than_guard_contributes_no_energy() {
        let samples = vec![
            running(sample(datetime!(2024-01-01 08:00 UTC))),
            running(sample(datetime!(2024-01-01 10:00 UTC))),
        ];

        let t = Thresholds::default();
        let metrics = derive_metrics(&samples, &ChannelSet::of(&samples), &t);
        assert_close(metrics[1].time_elapsed_hours, 2.0);
        assert_eq!(metrics[1].compressor_kwh, 0.0);

        let day = &summarize(&samples, &t).unwrap()[0];
        assert_eq!(day.heatpump_energy_kwh, 0.0);
        assert_eq!(day.runtime_hours, 0.0);
        assert_eq!(day.heat_exchanged_kbtu, 0.0);
        // Degree-days are not subject to the guard.
        assert!(day.heating_degree_days > 0.0);
    }

    #[test]
    fn guard_is_strict() {
        let samples = vec![
            running(sample(datetime!(2024-01-01 08:00 UTC))),
            running(sample(datetime!(2024-01-01 08:05 UTC))),
        ];

        let day = &summarize(&samples, &Thresholds::default()).unwrap()[0];
        assert_eq!(day.heatpump_energy_kwh, 0.0);
    }

    #[test]
    fn energy_and_runtime_accumulate_within_guard() {
        let samples = series(datetime!(2024-01-01 06:00 UTC), 61, time::Duration::minutes(1), running);

        let day = &summarize(&samples, &Thresholds::default()).unwrap()[0];
        assert_close(day.runtime_hours, 1.0);
        assert_close(day.heatpump_energy_kwh, 3.0);
    }

    #[test]
    fn flow_and_delta_t_estimate_heat_exchange() {
        // 900 * 3 gpm * ΔT 3 * 1 h = 8100 BTU
        let samples = series(datetime!(2024-01-01 06:00 UTC), 61, time::Duration::minutes(1), running);

        let day = &summarize(&samples, &Thresholds::default()).unwrap()[0];
        assert_close(day.heat_exchanged_kbtu, 8.1);
    }

    #[test]
    fn direct_heat_flow_channel_supersedes_estimate() {
        let samples = series(datetime!(2024-01-01 06:00 UTC), 61, time::Duration::minutes(1), |s| {
            let mut s = running(s);
            s.heat_flow_rate = Some(12_000.0);
            s
        });

        let day = &summarize(&samples, &Thresholds::default()).unwrap()[0];
        assert_close(day.heat_exchanged_kbtu, 12.0);
    }

    #[test]
    fn heating_attribution_follows_compressor_energy_sign() {
        // Negative ΔT would suggest heat rejection, yet positive compressor energy
        // still attributes the exchange to heating.
        let samples = series(datetime!(2024-01-01 06:00 UTC), 61, time::Duration::minutes(1), |s| {
            let mut s = running(s);
            s.source_supply_temperature = Some(20.0);
            s.source_return_temperature = Some(25.0);
            s
        });

        let day = &summarize(&samples, &Thresholds::default()).unwrap()[0];
        assert!(day.heat_exchanged_kbtu < 0.0);
        assert_close(day.heat_exchanged_heating_kbtu, day.heat_exchanged_kbtu);
        assert_eq!(day.heat_exchanged_cooling_kbtu, 0.0);
    }

    #[test]
    fn entering_water_temperature_only_while_running() {
        let mut samples = series(datetime!(2024-01-01 06:00 UTC), 3, time::Duration::minutes(1), running);
        samples[0].source_supply_temperature = Some(5.0);
        samples[1].source_supply_temperature = Some(7.0);
        samples[2].heatpump_power = Some(100.0);
        samples[2].source_supply_temperature = Some(20.0);

        let day = &summarize(&samples, &Thresholds::default()).unwrap()[0];
        assert_close(day.entering_water_temp_min_f.unwrap(), 41.0);
        assert_close(day.entering_water_temp_max_f.unwrap(), 44.6);
    }

    #[test]
    fn optional_channels_only_add_columns() {
        let bare = series(datetime!(2024-01-01 06:00 UTC), 10, time::Duration::minutes(1), running);
        let full: Vec<RawSample> = bare
            .iter()
            .cloned()
            .map(|mut s| {
                s.heatpump_aux_power = Some(0.0);
                s.source_fluid_pump_power = Some(80.0);
                s.heat_flow_rate = Some(9000.0);
                s
            })
            .collect();

        let t = Thresholds::default();
        let bare_day = &summarize(&bare, &t).unwrap()[0];
        let full_day = &summarize(&full, &t).unwrap()[0];

        let bare_cols = bare_day.columns();
        let full_cols = full_day.columns();
        assert!(bare_cols.iter().all(|c| full_cols.contains(c)));
        assert!(full_cols.len() > bare_cols.len());

        assert_eq!(bare_day.auxiliary_energy_kwh, None);
        assert_eq!(bare_day.pump_energy_kwh, None);
        assert_eq!(bare_day.total_energy_kwh, None);
        assert_eq!(full_day.auxiliary_energy_kwh, Some(0.0));
    }

    #[test]
    fn total_energy_excludes_pump_energy() {
        let samples = series(datetime!(2024-01-01 06:00 UTC), 61, time::Duration::minutes(1), |s| {
            let mut s = running(s);
            s.heatpump_aux_power = Some(1000.0);
            s.source_fluid_pump_power = Some(200.0);
            s
        });

        let day = &summarize(&samples, &Thresholds::default()).unwrap()[0];
        assert_close(day.auxiliary_energy_kwh.unwrap(), 1.0);
        assert_close(day.pump_energy_kwh.unwrap(), 0.2);
        assert_close(day.total_energy_kwh.unwrap(), 4.0);
    }

    #[test]
    fn auxiliary_and_pump_energy_metered_while_compressor_off() {
        let samples = series(datetime!(2024-01-01 06:00 UTC), 61, time::Duration::minutes(1), |mut s| {
            s.heatpump_power = Some(0.0);
            s.heatpump_aux_power = Some(5000.0);
            s.source_fluid_pump_power = Some(200.0);
            s
        });

        let day = &summarize(&samples, &Thresholds::default()).unwrap()[0];
        assert_close(day.auxiliary_energy_kwh.unwrap(), 5.0);
        assert_close(day.pump_energy_kwh.unwrap(), 0.2);
        assert_close(day.total_energy_kwh.unwrap(), 5.0);
        assert_eq!(day.runtime_hours, 0.0);
        assert_eq!(day.heat_exchanged_kbtu, 0.0);
    }

    #[test]
    fn compressor_draw_below_duty_threshold_is_metered() {
        let samples = series(datetime!(2024-01-01 06:00 UTC), 61, time::Duration::minutes(1), |mut s| {
            s.heatpump_power = Some(400.0);
            s
        });

        let day = &summarize(&samples, &Thresholds::default()).unwrap()[0];
        assert_close(day.heatpump_energy_kwh, 0.4);
        assert_eq!(day.runtime_hours, 0.0);
    }

    #[test]
    fn records_split_on_utc_midnight() {
        let samples = series(datetime!(2024-01-01 23:58 UTC), 4, time::Duration::minutes(1), running);

        let out = summarize(&samples, &Thresholds::default()).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].date, date!(2024 - 01 - 01));
        assert_eq!(out[0].sample_count, 2);
        assert_eq!(out[1].date, date!(2024 - 01 - 02));
        assert_eq!(out[1].sample_count, 2);
        // The 23:59 -> 00:00 interval belongs to the day of the later sample.
        assert_close(out[1].runtime_hours, 2.0 / 60.0);
    }

    #[test]
    fn duplicate_timestamps_do_not_break_accumulation() {
        let ts = datetime!(2024-01-01 06:00 UTC);
        let samples = vec![running(sample(ts)), running(sample(ts)), running(sample(ts + time::Duration::minutes(1)))];

        let day = &summarize(&samples, &Thresholds::default()).unwrap()[0];
        assert_eq!(day.sample_count, 3);
        assert_close(day.runtime_hours, 1.0 / 60.0);
    }

    #[test]
    fn out_of_order_input_is_sorted_first() {
        let mut samples = series(datetime!(2024-01-01 06:00 UTC), 61, time::Duration::minutes(1), running);
        samples.reverse();

        let day = &summarize(&samples, &Thresholds::default()).unwrap()[0];
        assert_close(day.heatpump_energy_kwh, 3.0);
    }

    #[test]
    fn null_readings_inside_present_channel_are_skipped() {
        let mut samples = series(datetime!(2024-01-01 06:00 UTC), 4, time::Duration::minutes(1), running);
        samples[2].outdoor_air_temperature = None;

        let day = &summarize(&samples, &Thresholds::default()).unwrap()[0];
        assert_eq!(day.sample_count, 3);
        assert_close(day.outdoor_air_temp_avg_f.unwrap(), 50.0);
    }

    #[test]
    fn thresholds_are_configurable() {
        let samples = series(datetime!(2024-01-01 06:00 UTC), 61, time::Duration::minutes(1), |mut s| {
            s.heatpump_power = Some(400.0);
            s
        });
        let t = Thresholds {
            duty_threshold_watts: 300.0,
            ..Thresholds::default()
        };

        let day = &summarize(&samples, &t).unwrap()[0];
        assert_close(day.runtime_hours, 1.0);
        assert_close(day.heatpump_energy_kwh, 0.4);
    }
}
