//! Closed-form pump and turbine formulas for rocket turbopump analysis.
//!
//! The [`turbomachinery`] module holds the individual formulas.
//! The [`design`] module ties them together into a pump/turbine power balance
//! evaluated from a serde-friendly configuration.

pub mod design;
pub mod turbomachinery;
