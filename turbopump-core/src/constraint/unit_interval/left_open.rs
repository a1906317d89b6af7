use std::{cmp::Ordering, marker::PhantomData};

use crate::constraint::{Constrained, Constraint, ConstraintError};

use super::UnitBounds;

/// Marker type enforcing that a value lies in the left-open unit interval: `0 < x ≤ 1`.
///
/// This is the valid range for a machine efficiency: an efficiency of zero
/// would require infinite input power, and one is the ideal, loss-free case.
///
/// # Examples
///
/// ```
/// use turbopump_core::constraint::{Constrained, UnitIntervalLeftOpen};
/// use uom::si::{f64::Ratio, ratio::{percent, ratio}};
///
/// let eta = UnitIntervalLeftOpen::new(Ratio::new::<percent>(72.0)).unwrap();
/// assert!((eta.as_ref().get::<ratio>() - 0.72).abs() < 1e-15);
///
/// let ideal = UnitIntervalLeftOpen::one::<f64>();
/// assert_eq!(ideal.into_inner(), 1.0);
///
/// assert!(Constrained::<f64, UnitIntervalLeftOpen>::new(0.0).is_err());
/// assert!(UnitIntervalLeftOpen::new(1.01).is_err());
/// assert!(UnitIntervalLeftOpen::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLeftOpen;

impl UnitIntervalLeftOpen {
    /// Constructs `Constrained<T, UnitIntervalLeftOpen>` if 0 < value ≤ 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalLeftOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalLeftOpen>::new(value)
    }

    /// Returns the upper bound (one) as a constrained value.
    #[must_use]
    pub fn one<T: UnitBounds>() -> Constrained<T, UnitIntervalLeftOpen> {
        Constrained::<T, UnitIntervalLeftOpen> {
            value: T::one(),
            _marker: PhantomData,
        }
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalLeftOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
