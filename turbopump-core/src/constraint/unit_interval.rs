mod left_open;

use uom::si::{f64::Ratio, ratio::ratio};

pub use left_open::UnitIntervalLeftOpen;

/// Provides the endpoints of the unit interval for a numeric type.
///
/// Implemented for `f64` and `uom::si::f64::Ratio`, the two representations
/// used for dimensionless efficiencies.
pub trait UnitBounds: PartialOrd + Sized {
    /// Returns the lower endpoint, zero.
    fn zero() -> Self;

    /// Returns the upper endpoint, one.
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }

    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }

    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}
