use thiserror::Error;
use turbopump_core::units::SpecificEnthalpy;
use uom::si::f64::{Pressure, ThermodynamicTemperature};

/// Errors that may occur when calling a turbine model.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum ExpansionError {
    /// The requested outlet pressure is zero, negative, or NaN.
    #[error("outlet pressure must be positive (p_out={p_out:?})")]
    NonPositiveOutletPressure { p_out: Pressure },

    /// The requested outlet pressure is greater than the inlet pressure.
    ///
    /// Expanding to a higher pressure would produce negative work.
    #[error("outlet pressure must not be greater than inlet (p_in={p_in:?}, p_out={p_out:?})")]
    OutletPressureGreaterThanInlet { p_in: Pressure, p_out: Pressure },

    /// The inlet stagnation temperature is at or below absolute zero, or NaN.
    #[error("inlet temperature must be positive (t_in={t_in:?})")]
    NonPositiveInletTemperature { t_in: ThermodynamicTemperature },

    /// The computed enthalpy drop is negative or NaN.
    ///
    /// Only reachable through non-finite inputs, such as a NaN inlet pressure.
    #[error("computed expansion work is non-physical (raw_work={raw_work:?})")]
    NonPhysicalWork { raw_work: SpecificEnthalpy },

    /// The expansion produces no work, so no finite flow can deliver shaft power.
    #[error("expansion work is zero, no flow rate can deliver the requested power")]
    NoAvailableWork,
}
