use crate::support::{
    interpolate::TableError,
    thermo::{CombustionTemperature, fluid::NitrousOxide},
};

/// Property interpolants shared by every burn.
///
/// Build once before any run starts and pass by reference; the tables are
/// never mutated and can be shared across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTables {
    oxidizer: NitrousOxide,
    combustion: CombustionTemperature,
}

impl PropertyTables {
    /// Bundles custom oxidizer and combustion tables.
    #[must_use]
    pub fn new(oxidizer: NitrousOxide, combustion: CombustionTemperature) -> Self {
        Self {
            oxidizer,
            combustion,
        }
    }

    /// Builds the nitrous oxide / paraffin tables.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if a tabulation cannot define a spline.
    pub fn nitrous_paraffin() -> Result<Self, TableError> {
        Ok(Self::new(
            NitrousOxide::new()?,
            CombustionTemperature::nitrous_paraffin()?,
        ))
    }

    /// Saturated oxidizer properties.
    #[must_use]
    pub fn oxidizer(&self) -> &NitrousOxide {
        &self.oxidizer
    }

    /// Combustion temperature versus mixture ratio.
    #[must_use]
    pub fn combustion_temperature(&self) -> &CombustionTemperature {
        &self.combustion
    }
}
