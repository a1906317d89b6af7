use uom::{
    si::{Quantity, ISQ, SI, f64::Ratio, ratio::ratio},
    typenum::{N2, P2, Z0},
};

use crate::constraint::ConstraintError;

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Ratio of specific heats `gamma = cp / cv` of a working gas.
///
/// Guaranteed to be finite and strictly greater than one, which keeps the
/// isentropic exponent `(gamma - 1) / gamma` inside `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HeatCapacityRatio(Ratio);

impl HeatCapacityRatio {
    /// Constructs a [`HeatCapacityRatio`] if `1 < gamma < ∞`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::NotANumber`] if `gamma` is NaN.
    /// - [`ConstraintError::BelowMinimum`] if `gamma <= 1`.
    /// - [`ConstraintError::AboveMaximum`] if `gamma` is infinite.
    pub fn new(gamma: Ratio) -> Result<Self, ConstraintError> {
        let value = gamma.get::<ratio>();
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value <= 1.0 {
            Err(ConstraintError::BelowMinimum)
        } else if value.is_infinite() {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(Self(gamma))
        }
    }

    /// Returns the underlying dimensionless quantity.
    #[must_use]
    pub fn quantity(&self) -> Ratio {
        self.0
    }

    /// Returns the isentropic temperature-pressure exponent `(gamma - 1) / gamma`.
    #[must_use]
    pub fn isentropic_exponent(&self) -> f64 {
        let gamma = self.0.get::<ratio>();
        (gamma - 1.0) / gamma
    }
}
