//! Turbine shaft power.

use turbopump_core::constraint::{Constrained, NonNegative, UnitIntervalLeftOpen};
use uom::si::f64::{MassRate, Power, Ratio};

use crate::turbomachinery::{ExpansionWork, turbine::ExpansionError};

/// Computes the shaft power delivered by a turbine, `m_dot * eta * Δh`.
///
/// `work` is the ideal enthalpy drop and `eta` the turbine efficiency
/// relative to that ideal expansion.
#[must_use]
pub fn turbine_power(
    m_dot: Constrained<MassRate, NonNegative>,
    work: ExpansionWork,
    eta: Constrained<Ratio, UnitIntervalLeftOpen>,
) -> Power {
    m_dot.into_inner() * work.quantity() * eta.into_inner()
}

/// Computes the turbine mass flow needed to deliver `power`, `P / (eta * Δh)`.
///
/// This is the inverse of [`turbine_power`], used to size turbine flow
/// against the pump power on a shared shaft.
///
/// # Errors
///
/// Returns [`ExpansionError::NoAvailableWork`] if `work` is zero.
pub fn turbine_mass_flow(
    power: Constrained<Power, NonNegative>,
    work: ExpansionWork,
    eta: Constrained<Ratio, UnitIntervalLeftOpen>,
) -> Result<MassRate, ExpansionError> {
    if work.is_zero() {
        return Err(ExpansionError::NoAvailableWork);
    }

    Ok(power.into_inner() / (work.quantity() * eta.into_inner()))
}
