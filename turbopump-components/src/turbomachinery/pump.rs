//! Pump drive power and head.
//!
//! Both formulas treat the pumped liquid as incompressible, so the ideal
//! hydraulic work per unit mass is `dp / rho`.

use turbopump_core::constraint::{Constrained, NonNegative, StrictlyPositive, UnitIntervalLeftOpen};
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Length, MassDensity, MassRate, Power, Pressure, Ratio},
};

/// Standard gravitational acceleration `g0`, m/s².
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Computes the shaft power required to drive a pump.
///
/// ```text
/// P = dp * m_dot / (rho * eta)
/// ```
///
/// `eta` is the pump efficiency in `(0, 1]`; inefficiency appears as
/// additional shaft power, so `eta == 1` yields exactly `dp * m_dot / rho`.
///
/// # Example
///
/// ```
/// use turbopump_components::turbomachinery::pump::pump_power;
/// use turbopump_core::constraint::{NonNegative, StrictlyPositive, UnitIntervalLeftOpen};
/// use uom::si::{
///     f64::{MassDensity, MassRate, Pressure, Ratio},
///     mass_density::kilogram_per_cubic_meter,
///     mass_rate::kilogram_per_second,
///     power::watt,
///     pressure::megapascal,
///     ratio::ratio,
/// };
///
/// let power = pump_power(
///     NonNegative::new(Pressure::new::<megapascal>(1.0)).unwrap(),
///     NonNegative::new(MassRate::new::<kilogram_per_second>(10.0)).unwrap(),
///     StrictlyPositive::new(MassDensity::new::<kilogram_per_cubic_meter>(1000.0)).unwrap(),
///     UnitIntervalLeftOpen::new(Ratio::new::<ratio>(0.7)).unwrap(),
/// );
///
/// assert!((power.get::<watt>() - 14_285.714_285_714_286).abs() < 1e-6);
/// ```
#[must_use]
pub fn pump_power(
    dp: Constrained<Pressure, NonNegative>,
    m_dot: Constrained<MassRate, NonNegative>,
    rho: Constrained<MassDensity, StrictlyPositive>,
    eta: Constrained<Ratio, UnitIntervalLeftOpen>,
) -> Power {
    dp.into_inner() * m_dot.into_inner() / (rho.into_inner() * eta.into_inner())
}

/// Computes the head rise of a pump, `dp / (rho * g0)`.
#[must_use]
pub fn pump_head(
    dp: Constrained<Pressure, NonNegative>,
    rho: Constrained<MassDensity, StrictlyPositive>,
) -> Length {
    let g0 = Acceleration::new::<meter_per_second_squared>(STANDARD_GRAVITY);
    dp.into_inner() / (rho.into_inner() * g0)
}
