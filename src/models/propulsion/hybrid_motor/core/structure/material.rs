use std::{fmt, str::FromStr};

use thiserror::Error;
use uom::si::{
    f64::{MassDensity, Pressure},
    mass_density::kilogram_per_cubic_meter,
    pressure::megapascal,
};

/// Error returned when a material name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown material: {name:?}")]
pub struct MaterialError {
    /// The name that failed to match.
    pub name: String,
}

/// Structural materials for the casing, closures, and tank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Material {
    #[default]
    Ss304,
    Aluminum,
    TitaniumGrade5,
    CarbonSteel,
}

impl Material {
    /// Every available material.
    pub const ALL: [Self; 4] = [
        Self::Ss304,
        Self::Aluminum,
        Self::TitaniumGrade5,
        Self::CarbonSteel,
    ];

    /// Display name, also accepted by [`str::parse`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Ss304 => "SS304",
            Self::Aluminum => "Aluminum",
            Self::TitaniumGrade5 => "Titanium Grade 5",
            Self::CarbonSteel => "Carbon Steel",
        }
    }

    #[must_use]
    pub fn density(self) -> MassDensity {
        let rho = match self {
            Self::Ss304 => 8000.0,
            Self::Aluminum => 2700.0,
            Self::TitaniumGrade5 => 4430.0,
            Self::CarbonSteel => 7850.0,
        };
        MassDensity::new::<kilogram_per_cubic_meter>(rho)
    }

    /// Tensile yield strength.
    #[must_use]
    pub fn yield_strength(self) -> Pressure {
        let sigma_y = match self {
            Self::Ss304 => 205.0,
            Self::Aluminum => 276.0,
            Self::TitaniumGrade5 => 828.0,
            Self::CarbonSteel => 250.0,
        };
        Pressure::new::<megapascal>(sigma_y)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Material {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| MaterialError { name: s.to_owned() })
    }
}
