//! Turbine models.

mod error;
mod isentropic;
mod shaft;

pub use error::ExpansionError;
pub use isentropic::{spout_velocity, turbine_enthalpy, turbine_spout_velocity};
pub use shaft::{turbine_mass_flow, turbine_power};
