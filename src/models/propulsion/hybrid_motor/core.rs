//! Fixed-step burn simulation of a nitrous/paraffin hybrid motor.
//!
//! Each step evaluates the motor at the current port radius and then
//! regresses the grain:
//!
//! 1. oxidizer flux through the port sets the regression rate,
//! 2. regression over the burning surface sets the fuel flow and mixture ratio,
//! 3. the mixture ratio sets the combustion temperature,
//! 4. the selected [`SimulationMode`] turns total flow into chamber pressure
//!    and thrust.
//!
//! A burn stops at the first [`TerminationReason`] that applies, with
//! oxidizer depletion taking precedence over grain burnout.

mod burn;
mod config;
mod error;
mod metrics;
mod results;
mod structure;
mod tables;
mod tank;

pub mod chamber;
pub mod nozzle;
pub mod performance;
pub mod regression;

#[cfg(test)]
mod test_support;

pub use burn::{BurnLoop, BurnState};
pub use config::{
    AMBIENT_PRESSURE, BurnConfig, ChokedFlowConfig, DEFAULT_THROAT_DIAMETER,
    LEGACY_CHAMBER_PRESSURE, LEGACY_EXHAUST_VELOCITY, LOW_PRESSURE_THRESHOLD, MotorInput,
    OXIDIZER_DEPLETION_FRACTION, OxidizerSupply, PropellantConfig, SimulationMode,
};
pub use error::ConfigError;
pub use metrics::{BurnSummary, Extent};
pub use nozzle::{NozzleError, NozzleExit};
pub use regression::RegressionLaw;
pub use results::{BurnSample, SimulationResult, TerminationReason};
pub use structure::{
    Material, MaterialError, StructuralConfig, StructuralReport, StructuralWarning,
};
pub use tables::PropertyTables;
pub use tank::{TankConfig, USABLE_FRACTION};

/// Runs a burn to termination.
#[must_use]
pub fn simulate(
    input: &MotorInput,
    config: BurnConfig,
    tables: &PropertyTables,
) -> SimulationResult {
    BurnLoop::new(input, config, tables).run()
}
