//! Turbopump design point and shaft power balance.
//!
//! A [`TurbopumpConfig`] is plain data that can be loaded from any serde
//! format, with every quantity in SI base units.
//! Converting it into a [`DesignPoint`] validates each parameter once,
//! and [`DesignPoint::evaluate`] then runs the pump and turbine formulas to
//! find the turbine flow that drives the pump on a common shaft.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use turbopump_core::{
    constraint::{
        Constrained, Constraint, ConstraintError, NonNegative, StrictlyPositive,
        UnitIntervalLeftOpen,
    },
    units::{HeatCapacityRatio, SpecificEnthalpy},
};
use uom::si::{
    f64::{
        Length, MassDensity, MassRate, Power, Pressure, Ratio, SpecificHeatCapacity,
        ThermodynamicTemperature, Velocity,
    },
    length::meter,
    mass_rate::kilogram_per_second,
    power::watt,
    velocity::meter_per_second,
};

use crate::turbomachinery::{
    pump::{pump_head, pump_power},
    turbine::{ExpansionError, spout_velocity, turbine_enthalpy, turbine_mass_flow},
};

/// Pump operating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PumpConfig {
    /// Pressure rise across the pump, Pa.
    pub pressure_rise: Pressure,
    /// Pumped mass flow, kg/s.
    pub mass_flow: MassRate,
    /// Density of the pumped liquid, kg/m³.
    pub density: MassDensity,
    /// Pump efficiency, in `(0, 1]`.
    pub efficiency: Ratio,
}

/// Turbine operating point and working gas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TurbineConfig {
    /// Inlet stagnation pressure, Pa.
    pub inlet_pressure: Pressure,
    /// Exit pressure, Pa.
    pub outlet_pressure: Pressure,
    /// Inlet stagnation temperature, K.
    pub inlet_temperature: ThermodynamicTemperature,
    /// Working gas ratio of specific heats.
    pub gamma: Ratio,
    /// Working gas specific heat at constant pressure, J/(kg·K).
    pub cp: SpecificHeatCapacity,
    /// Turbine efficiency relative to the isentropic expansion, in `(0, 1]`.
    pub efficiency: Ratio,
}

/// A pump and the turbine driving it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TurbopumpConfig {
    pub pump: PumpConfig,
    pub turbine: TurbineConfig,
}

/// Errors that may occur when building or evaluating a [`DesignPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum DesignError {
    /// A configuration parameter violates its physical constraint.
    #[error("invalid `{field}`: {source}")]
    InvalidParameter {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// The pump power evaluated to NaN, e.g. from infinite pressure rise at zero flow.
    #[error("pump power is non-physical (power={power:?})")]
    NonPhysicalPumpPower { power: Power },

    /// The turbine expansion failed.
    #[error("turbine expansion failed: {0}")]
    Expansion(#[from] ExpansionError),
}

/// A validated turbopump design point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignPoint {
    pressure_rise: Constrained<Pressure, NonNegative>,
    pump_mass_flow: Constrained<MassRate, NonNegative>,
    density: Constrained<MassDensity, StrictlyPositive>,
    pump_efficiency: Constrained<Ratio, UnitIntervalLeftOpen>,
    inlet_pressure: Pressure,
    outlet_pressure: Pressure,
    inlet_temperature: ThermodynamicTemperature,
    gamma: HeatCapacityRatio,
    cp: Constrained<SpecificHeatCapacity, StrictlyPositive>,
    turbine_efficiency: Constrained<Ratio, UnitIntervalLeftOpen>,
}

/// Results of evaluating a [`DesignPoint`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerBalance {
    /// Shaft power required by the pump.
    pub pump_power: Power,
    /// Head rise of the pump.
    pub pump_head: Length,
    /// Isentropic specific enthalpy drop across the turbine.
    pub enthalpy_drop: SpecificEnthalpy,
    /// Theoretical spouting velocity of the turbine.
    pub spout_velocity: Velocity,
    /// Turbine mass flow whose shaft power equals the pump power.
    pub turbine_mass_flow: MassRate,
}

impl TryFrom<TurbopumpConfig> for DesignPoint {
    type Error = DesignError;

    fn try_from(config: TurbopumpConfig) -> Result<Self, Self::Error> {
        let TurbopumpConfig { pump, turbine } = config;

        Ok(Self {
            pressure_rise: constrain("pump.pressure_rise", pump.pressure_rise)?,
            pump_mass_flow: constrain("pump.mass_flow", pump.mass_flow)?,
            density: constrain("pump.density", pump.density)?,
            pump_efficiency: constrain("pump.efficiency", pump.efficiency)?,
            inlet_pressure: turbine.inlet_pressure,
            outlet_pressure: turbine.outlet_pressure,
            inlet_temperature: turbine.inlet_temperature,
            gamma: HeatCapacityRatio::new(turbine.gamma).map_err(|source| {
                DesignError::InvalidParameter {
                    field: "turbine.gamma",
                    source,
                }
            })?,
            cp: constrain("turbine.cp", turbine.cp)?,
            turbine_efficiency: constrain("turbine.efficiency", turbine.efficiency)?,
        })
    }
}

impl DesignPoint {
    /// Evaluates the pump and turbine at this design point.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::Expansion`] if the turbine expansion is invalid,
    /// including an expansion that yields no work, or
    /// [`DesignError::NonPhysicalPumpPower`] if the pump power is NaN.
    pub fn evaluate(&self) -> Result<PowerBalance, DesignError> {
        let pump_power = pump_power(
            self.pressure_rise,
            self.pump_mass_flow,
            self.density,
            self.pump_efficiency,
        );
        let pump_head = pump_head(self.pressure_rise, self.density);

        let work = turbine_enthalpy(
            self.inlet_pressure,
            self.outlet_pressure,
            self.inlet_temperature,
            self.gamma,
            self.cp,
        )
        .inspect_err(|error| warn!(%error, "turbine expansion failed"))?;

        let required_power = NonNegative::new(pump_power)
            .map_err(|_| DesignError::NonPhysicalPumpPower { power: pump_power })?;

        let turbine_mass_flow = turbine_mass_flow(required_power, work, self.turbine_efficiency)
            .inspect_err(|error| warn!(%error, "turbine cannot drive the pump"))?;

        let balance = PowerBalance {
            pump_power,
            pump_head,
            enthalpy_drop: work.quantity(),
            spout_velocity: spout_velocity(work),
            turbine_mass_flow,
        };

        debug!(
            pump_power_w = balance.pump_power.get::<watt>(),
            pump_head_m = balance.pump_head.get::<meter>(),
            enthalpy_drop_j_per_kg = balance.enthalpy_drop.value,
            spout_velocity_m_per_s = balance.spout_velocity.get::<meter_per_second>(),
            turbine_mass_flow_kg_per_s = balance.turbine_mass_flow.get::<kilogram_per_second>(),
            "evaluated turbopump power balance"
        );

        Ok(balance)
    }
}

fn constrain<T, C: Constraint<T>>(
    field: &'static str,
    value: T,
) -> Result<Constrained<T, C>, DesignError> {
    Constrained::new(value).map_err(|source| DesignError::InvalidParameter { field, source })
}
