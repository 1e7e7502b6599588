//! Thermophysical property data for hybrid motor propellants.
//!
//! Properties here are tabulated or constant-parameter models that are built
//! once and then queried many times during a burn:
//!
//! - [`fluid::NitrousOxide`]: saturated vapor pressure and liquid density of
//!   the oxidizer as functions of tank temperature.
//! - [`CombustionTemperature`]: adiabatic flame temperature of the
//!   nitrous/paraffin propellant pair as a function of mixture ratio.
//! - [`CombustionGas`]: heat capacity ratio and gas constant of the exhaust.
//!
//! Tabulated properties clamp queries to their tabulated domain.

mod combustion;
mod gas;

pub mod fluid;

pub use combustion::CombustionTemperature;
pub use gas::{CombustionGas, CombustionGasError};
