//! Pump and turbine models.

pub mod pump;
pub mod turbine;
mod work;

#[cfg(test)]
pub(crate) mod test_utils;

pub use work::ExpansionWork;
