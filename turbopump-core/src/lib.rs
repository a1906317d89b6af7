//! Numeric constraints and unit types shared by the turbopump crates.

pub mod constraint;
pub mod units;
