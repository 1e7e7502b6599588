//! Hybrid rocket motor burn model.
//!
//! [`HybridMotor`] is a [`twine_core::Model`] that runs a complete burn for a
//! [`MotorInput`] and returns its [`SimulationResult`].
//! The computational core is in the internal `core` module; use [`BurnLoop`]
//! directly to observe a burn step by step.
//!
//! # Example
//!
//! ```
//! use hybrid_motor_models::models::propulsion::hybrid_motor::{
//!     BurnConfig, ChokedFlowConfig, HybridMotor, MotorInput, OxidizerSupply,
//!     PropellantConfig, PropertyTables, SimulationMode,
//! };
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{Length, MassDensity, MassRate},
//!     length::centimeter,
//!     mass_density::kilogram_per_cubic_meter,
//!     mass_rate::gram_per_second,
//! };
//!
//! let tables = PropertyTables::nitrous_paraffin()?;
//! let motor = HybridMotor::new(&tables, BurnConfig::default());
//!
//! let propellant = PropellantConfig::new(
//!     Length::new::<centimeter>(0.7),
//!     Length::new::<centimeter>(1.9),
//!     Length::new::<centimeter>(6.0),
//!     MassRate::new::<gram_per_second>(47.0),
//!     MassDensity::new::<kilogram_per_cubic_meter>(930.0),
//! )?;
//! let input = MotorInput {
//!     propellant,
//!     mode: SimulationMode::ChokedFlow(ChokedFlowConfig::default()),
//!     supply: OxidizerSupply::Unbounded,
//! };
//!
//! let result = motor.call(&input)?;
//! assert!(result.peak_thrust().value > 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub(crate) mod core;

use std::convert::Infallible;

use twine_core::Model;

pub use self::core::{
    AMBIENT_PRESSURE, BurnConfig, BurnLoop, BurnSample, BurnState, BurnSummary,
    ChokedFlowConfig, ConfigError, DEFAULT_THROAT_DIAMETER, Extent, LEGACY_CHAMBER_PRESSURE,
    LEGACY_EXHAUST_VELOCITY, LOW_PRESSURE_THRESHOLD, Material, MaterialError, MotorInput,
    NozzleError, NozzleExit, OXIDIZER_DEPLETION_FRACTION, OxidizerSupply, PropellantConfig,
    PropertyTables, RegressionLaw, SimulationMode, SimulationResult, StructuralConfig,
    StructuralReport, StructuralWarning, TankConfig, TerminationReason, USABLE_FRACTION,
    chamber, nozzle, performance, regression, simulate,
};

/// Runs hybrid motor burns against shared property tables.
#[derive(Debug, Clone, Copy)]
pub struct HybridMotor<'a> {
    tables: &'a PropertyTables,
    config: BurnConfig,
}

impl<'a> HybridMotor<'a> {
    #[must_use]
    pub fn new(tables: &'a PropertyTables, config: BurnConfig) -> Self {
        Self { tables, config }
    }

    #[must_use]
    pub fn config(&self) -> BurnConfig {
        self.config
    }
}

impl Model for HybridMotor<'_> {
    type Input = MotorInput;
    type Output = SimulationResult;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(simulate(input, self.config, self.tables))
    }
}
