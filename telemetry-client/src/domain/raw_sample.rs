use std::fmt;

use time::OffsetDateTime;

/// One row of the `heatpump_telemetry` table.
///
/// Every channel is nullable: a point written without a given field reads back
/// as NULL, and a channel whose column was never created is selected as NULL.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSample {
    pub ts: OffsetDateTime,
    pub equipment_id: String,
    /// °C
    pub outdoor_air_temperature: Option<f64>,
    /// W
    pub heatpump_power: Option<f64>,
    /// W
    pub heatpump_aux_power: Option<f64>,
    /// W
    pub source_fluid_pump_power: Option<f64>,
    /// °C
    pub source_supply_temperature: Option<f64>,
    /// °C
    pub source_return_temperature: Option<f64>,
    /// gal/min
    pub source_fluid_flow_rate: Option<f64>,
    /// BTU/hr
    pub heat_flow_rate: Option<f64>,
}

/// Sensor channels carried by a [`RawSample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    OutdoorAirTemperature,
    HeatpumpPower,
    HeatpumpAuxPower,
    SourceFluidPumpPower,
    SourceSupplyTemperature,
    SourceReturnTemperature,
    SourceFluidFlowRate,
    HeatFlowRate,
}

impl Channel {
    pub const ALL: [Channel; 8] = [
        Channel::OutdoorAirTemperature,
        Channel::HeatpumpPower,
        Channel::HeatpumpAuxPower,
        Channel::SourceFluidPumpPower,
        Channel::SourceSupplyTemperature,
        Channel::SourceReturnTemperature,
        Channel::SourceFluidFlowRate,
        Channel::HeatFlowRate,
    ];

    /// Column name in the telemetry table.
    pub fn column(self) -> &'static str {
        match self {
            Channel::OutdoorAirTemperature => "outdoor_air_temperature",
            Channel::HeatpumpPower => "heatpump_power",
            Channel::HeatpumpAuxPower => "heatpump_aux_power",
            Channel::SourceFluidPumpPower => "source_fluid_pump_power",
            Channel::SourceSupplyTemperature => "source_supply_temperature",
            Channel::SourceReturnTemperature => "source_return_temperature",
            Channel::SourceFluidFlowRate => "source_fluid_flow_rate",
            Channel::HeatFlowRate => "heat_flow_rate",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl RawSample {
    pub fn channel(&self, channel: Channel) -> Option<f64> {
        match channel {
            Channel::OutdoorAirTemperature => self.outdoor_air_temperature,
            Channel::HeatpumpPower => self.heatpump_power,
            Channel::HeatpumpAuxPower => self.heatpump_aux_power,
            Channel::SourceFluidPumpPower => self.source_fluid_pump_power,
            Channel::SourceSupplyTemperature => self.source_supply_temperature,
            Channel::SourceReturnTemperature => self.source_return_temperature,
            Channel::SourceFluidFlowRate => self.source_fluid_flow_rate,
            Channel::HeatFlowRate => self.heat_flow_rate,
        }
    }
}
