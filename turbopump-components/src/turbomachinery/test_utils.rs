//! Shared fixtures for turbomachinery unit tests.
//!
//! Every helper takes a plain SI value and panics on invalid input, which
//! keeps the inline `#[cfg(test)]` modules focused on the formulas.

use turbopump_core::{
    constraint::{Constrained, NonNegative, StrictlyPositive, UnitIntervalLeftOpen},
    units::{HeatCapacityRatio, SpecificEnthalpy},
};
use uom::si::{
    energy::joule,
    f64::{
        Energy, Mass, MassDensity, MassRate, Pressure, Ratio, SpecificHeatCapacity,
        ThermodynamicTemperature,
    },
    mass::kilogram,
    mass_density::kilogram_per_cubic_meter,
    mass_rate::kilogram_per_second,
    pressure::pascal,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::kelvin,
};

/// Constructs a specific enthalpy in SI units (J/kg).
pub(crate) fn enth_si(value: f64) -> SpecificEnthalpy {
    Energy::new::<joule>(value) / Mass::new::<kilogram>(1.0)
}

/// Constructs a pressure in pascals.
pub(crate) fn pa(value: f64) -> Pressure {
    Pressure::new::<pascal>(value)
}

/// Constructs a non-negative pressure rise in pascals.
pub(crate) fn dp_si(value: f64) -> Constrained<Pressure, NonNegative> {
    NonNegative::new(pa(value)).expect("pressure rise must be non-negative")
}

/// Constructs a non-negative mass flow rate in kg/s.
pub(crate) fn m_dot_si(value: f64) -> Constrained<MassRate, NonNegative> {
    NonNegative::new(MassRate::new::<kilogram_per_second>(value))
        .expect("mass flow must be non-negative")
}

/// Constructs a strictly positive density in kg/m³.
pub(crate) fn rho_si(value: f64) -> Constrained<MassDensity, StrictlyPositive> {
    StrictlyPositive::new(MassDensity::new::<kilogram_per_cubic_meter>(value))
        .expect("density must be positive")
}

/// Constructs an efficiency in `(0, 1]`.
pub(crate) fn eta(value: f64) -> Constrained<Ratio, UnitIntervalLeftOpen> {
    UnitIntervalLeftOpen::new(Ratio::new::<ratio>(value)).expect("efficiency must be in (0, 1]")
}

/// Constructs a temperature in kelvin.
pub(crate) fn kelvin_si(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<kelvin>(value)
}

/// Constructs a ratio of specific heats.
pub(crate) fn gamma(value: f64) -> HeatCapacityRatio {
    HeatCapacityRatio::new(Ratio::new::<ratio>(value)).expect("gamma must be greater than one")
}

/// Constructs a strictly positive specific heat capacity in J/(kg·K).
pub(crate) fn cp_si(value: f64) -> Constrained<SpecificHeatCapacity, StrictlyPositive> {
    StrictlyPositive::new(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(value))
        .expect("cp must be positive")
}
