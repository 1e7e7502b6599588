//! Exhaust gas parameters for nozzle flow calculations.
//!
//! The combustion products are treated as a calorically perfect gas with a
//! fixed heat capacity ratio `γ` and specific gas constant `R = R_u / M`.

use thiserror::Error;
use uom::si::{
    f64::{MolarMass, Ratio},
    molar_mass::kilogram_per_mole,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::SpecificGasConstant,
};

/// Universal gas constant, J/mol·K.
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.314;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CombustionGasError {
    #[error("heat capacity ratio must be finite and at least 1: gamma={gamma:?}")]
    HeatCapacityRatio { gamma: Ratio },
    #[error("invalid gas constant R: {r:?}")]
    GasConstant { r: SpecificGasConstant },
    #[error("invalid molar mass: {molar_mass:?}")]
    MolarMass { molar_mass: MolarMass },
}

/// Constant properties of the combustion products.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustionGas {
    gamma: f64,
    gas_constant: SpecificGasConstant,
}

impl CombustionGas {
    /// Creates exhaust gas parameters from `γ` and `R`.
    ///
    /// A ratio of exactly 1 is accepted; flow relations that divide by
    /// `γ − 1` fall back to their degenerate values for it.
    ///
    /// # Errors
    ///
    /// Returns [`CombustionGasError`] if `γ` is below 1 or not finite,
    /// or if `R` is not strictly positive.
    pub fn new(
        gamma: Ratio,
        gas_constant: SpecificGasConstant,
    ) -> Result<Self, CombustionGasError> {
        let g = gamma.get::<ratio>();
        if !g.is_finite() || g < 1.0 {
            return Err(CombustionGasError::HeatCapacityRatio { gamma });
        }

        if StrictlyPositive::check(&gas_constant.get::<joule_per_kilogram_kelvin>()).is_err() {
            return Err(CombustionGasError::GasConstant { r: gas_constant });
        }

        Ok(Self {
            gamma: g,
            gas_constant,
        })
    }

    /// Creates exhaust gas parameters from `γ` and the mean molar mass.
    ///
    /// # Errors
    ///
    /// Returns [`CombustionGasError`] if `γ` is invalid or the molar mass is
    /// not strictly positive.
    pub fn from_molar_mass(
        gamma: Ratio,
        molar_mass: MolarMass,
    ) -> Result<Self, CombustionGasError> {
        let m = molar_mass.get::<kilogram_per_mole>();
        if StrictlyPositive::check(&m).is_err() {
            return Err(CombustionGasError::MolarMass { molar_mass });
        }

        let r = SpecificGasConstant::new::<joule_per_kilogram_kelvin>(UNIVERSAL_GAS_CONSTANT / m);
        Self::new(gamma, r)
    }

    /// Nitrous oxide / paraffin exhaust: `γ = 1.33`, `M = 28.97 g/mol`.
    #[must_use]
    pub fn nitrous_paraffin() -> Self {
        Self {
            gamma: 1.33,
            gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(
                UNIVERSAL_GAS_CONSTANT / 0.028_97,
            ),
        }
    }

    /// Returns the heat capacity ratio `γ = cp / cv`.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the specific gas constant.
    #[must_use]
    pub fn gas_constant(&self) -> SpecificGasConstant {
        self.gas_constant
    }
}

impl Default for CombustionGas {
    fn default() -> Self {
        Self::nitrous_paraffin()
    }
}
