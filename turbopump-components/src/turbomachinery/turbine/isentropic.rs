//! Isentropic turbine expansion.
//!
//! Given the inlet stagnation state of a calorically perfect working gas and
//! an exit pressure, the model:
//! 1. evaluates the isentropic temperature ratio `(p_e/p_o)^((gamma - 1)/gamma)`,
//! 2. reports the ideal enthalpy drop `Δh = cp*T_o*(1 - (p_e/p_o)^((gamma - 1)/gamma))`,
//! 3. converts it to the theoretical spouting velocity `c_o = sqrt(2*Δh)`.

use std::cmp::Ordering;

use turbopump_core::{
    constraint::{Constrained, StrictlyPositive},
    units::{HeatCapacityRatio, SpecificEnthalpy},
};
use uom::{
    ConstZero,
    si::{
        f64::{Pressure, SpecificHeatCapacity, ThermodynamicTemperature, Velocity},
        ratio::ratio,
        thermodynamic_temperature::kelvin,
        velocity::meter_per_second,
    },
};

use crate::turbomachinery::{ExpansionWork, turbine::ExpansionError};

/// Computes the specific enthalpy drop of an isentropic turbine expansion.
///
/// `p_o` and `t_o` are the inlet stagnation pressure and temperature,
/// `p_e` is the exit pressure, `gamma` and `c_p` describe the working gas.
///
/// # Errors
///
/// Returns [`ExpansionError`] if `p_e` is not positive, `p_e > p_o`,
/// `t_o` is not positive, or the resulting work is non-physical.
pub fn turbine_enthalpy(
    p_o: Pressure,
    p_e: Pressure,
    t_o: ThermodynamicTemperature,
    gamma: HeatCapacityRatio,
    c_p: Constrained<SpecificHeatCapacity, StrictlyPositive>,
) -> Result<ExpansionWork, ExpansionError> {
    if p_e.partial_cmp(&Pressure::ZERO) != Some(Ordering::Greater) {
        return Err(ExpansionError::NonPositiveOutletPressure { p_out: p_e });
    }

    if p_e > p_o {
        return Err(ExpansionError::OutletPressureGreaterThanInlet {
            p_in: p_o,
            p_out: p_e,
        });
    }

    if t_o.get::<kelvin>().partial_cmp(&0.0) != Some(Ordering::Greater) {
        return Err(ExpansionError::NonPositiveInletTemperature { t_in: t_o });
    }

    let pressure_ratio = (p_e / p_o).get::<ratio>();
    let temperature_ratio = pressure_ratio.powf(gamma.isentropic_exponent());
    let raw_work: SpecificEnthalpy = c_p.into_inner() * t_o * (1.0 - temperature_ratio);

    ExpansionWork::new(raw_work).map_err(|_| ExpansionError::NonPhysicalWork { raw_work })
}

/// Computes the theoretical spouting velocity of an isentropic turbine expansion.
///
/// This is the loss-free jet velocity obtained by converting the whole
/// enthalpy drop from [`turbine_enthalpy`] into kinetic energy.
///
/// # Errors
///
/// Returns the same [`ExpansionError`]s as [`turbine_enthalpy`].
pub fn turbine_spout_velocity(
    p_o: Pressure,
    p_e: Pressure,
    t_o: ThermodynamicTemperature,
    gamma: HeatCapacityRatio,
    c_p: Constrained<SpecificHeatCapacity, StrictlyPositive>,
) -> Result<Velocity, ExpansionError> {
    turbine_enthalpy(p_o, p_e, t_o, gamma, c_p).map(spout_velocity)
}

/// Converts a specific enthalpy drop into a spouting velocity, `sqrt(2*Δh)`.
#[must_use]
pub fn spout_velocity(work: ExpansionWork) -> Velocity {
    Velocity::new::<meter_per_second>((2.0 * work.quantity().value).sqrt())
}
