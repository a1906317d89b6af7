//! Work types for turbomachinery models.
//!
//! A turbine always reports its specific work as a non-negative quantity.
//! Expansions that would produce negative work are rejected before an
//! [`ExpansionWork`] is ever constructed.

use turbopump_core::{
    constraint::{Constrained, ConstraintError, NonNegative},
    units::SpecificEnthalpy,
};
use uom::ConstZero;

/// Specific shaft work for expansion, the turbine specific enthalpy drop.
///
/// The inner value is a [`SpecificEnthalpy`] that is guaranteed to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ExpansionWork(SpecificEnthalpy);

impl ExpansionWork {
    /// Returns zero expansion work.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_constrained(NonNegative::zero())
    }

    /// Constructs an [`ExpansionWork`] if `work >= 0`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `work` is negative or not comparable (e.g., NaN).
    pub fn new(work: SpecificEnthalpy) -> Result<Self, ConstraintError> {
        let work = NonNegative::new(work)?;
        Ok(Self::from_constrained(work))
    }

    /// Creates a new [`ExpansionWork`] from a pre-validated non-negative work value.
    #[must_use]
    pub fn from_constrained(work: Constrained<SpecificEnthalpy, NonNegative>) -> Self {
        Self(work.into_inner())
    }

    /// Returns the underlying specific work quantity.
    #[must_use]
    pub fn quantity(&self) -> SpecificEnthalpy {
        self.0
    }

    /// Returns `true` if no work is available.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 <= SpecificEnthalpy::ZERO
    }
}
