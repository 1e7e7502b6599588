//! Fuel regression and mixture ratio.
//!
//! The fuel surface recedes according to a power law of the oxidizer mass
//! flux through the port, `ṙ = a·Gₒₓⁿ`. All functions here are closed-form
//! and map degenerate inputs to defined fallback values instead of errors.

use std::f64::consts::PI;

use uom::{
    ConstZero,
    si::{
        f64::{Area, Length, Mass, MassDensity, MassRate, Ratio, Velocity},
        mass_rate::kilogram_per_second,
        ratio::ratio,
        velocity::meter_per_second,
    },
};

use crate::support::units::MassFlux;

use super::ConfigError;

/// Mixture ratio reported when fuel flow is negligible.
pub const OF_RATIO_CAP: f64 = 10.0;

/// Fuel mass rate at or below which fuel flow is treated as negligible, kg/s.
pub const FUEL_FLOW_FLOOR: f64 = 1e-9;

/// Power-law regression rate `ṙ = a·Gₒₓⁿ`, with `ṙ` in m/s and `G` in kg/m²·s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionLaw {
    coefficient: f64,
    exponent: f64,
}

impl RegressionLaw {
    /// Creates a regression law from its SI coefficient and exponent.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if either value is not strictly positive.
    pub fn new(coefficient: f64, exponent: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            coefficient: ConfigError::strictly_positive("regression coefficient", coefficient)?,
            exponent: ConfigError::strictly_positive("regression exponent", exponent)?,
        })
    }

    /// Regression law for paraffin burning with nitrous oxide.
    #[must_use]
    pub fn paraffin() -> Self {
        Self {
            coefficient: 0.1561e-3,
            exponent: 0.5,
        }
    }

    #[must_use]
    pub fn coefficient(&self) -> f64 {
        self.coefficient
    }

    #[must_use]
    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Returns the regression rate for oxidizer flux `flux`.
    ///
    /// Zero, negative, and non-numeric fluxes regress at zero speed.
    #[must_use]
    pub fn rate(&self, flux: MassFlux) -> Velocity {
        let g = flux.value;
        if g.is_nan() || g <= 0.0 {
            return Velocity::ZERO;
        }
        Velocity::new::<meter_per_second>(self.coefficient * g.powf(self.exponent))
    }
}

impl Default for RegressionLaw {
    fn default() -> Self {
        Self::paraffin()
    }
}

/// Cross-sectional flow area of a circular port.
#[must_use]
pub fn port_area(radius: Length) -> Area {
    PI * radius * radius
}

/// Lateral burning surface of a port of `radius` along `length`.
#[must_use]
pub fn burning_area(radius: Length, length: Length) -> Area {
    2.0 * PI * radius * length
}

/// Oxidizer mass flux through the port, zero for a degenerate port.
#[must_use]
pub fn oxidizer_flux(m_dot_ox: MassRate, port_area: Area) -> MassFlux {
    if port_area <= Area::ZERO {
        return MassFlux::ZERO;
    }
    m_dot_ox / port_area
}

/// Fuel mass rate released by regression speed `r_dot` over the port wall.
#[must_use]
pub fn fuel_mass_rate(
    r_dot: Velocity,
    fuel_density: MassDensity,
    radius: Length,
    length: Length,
) -> MassRate {
    burning_area(radius, length) * fuel_density * r_dot
}

/// Oxidizer-to-fuel mass ratio.
///
/// Returns [`OF_RATIO_CAP`] when fuel flow is at or below [`FUEL_FLOW_FLOOR`].
#[must_use]
pub fn of_ratio(m_dot_ox: MassRate, m_dot_fuel: MassRate) -> Ratio {
    if m_dot_fuel.get::<kilogram_per_second>() <= FUEL_FLOW_FLOOR {
        return Ratio::new::<ratio>(OF_RATIO_CAP);
    }
    m_dot_ox / m_dot_fuel
}

/// Fuel mass contained in an annular grain between two port radii.
#[must_use]
pub fn grain_mass(
    inner_radius: Length,
    outer_radius: Length,
    length: Length,
    density: MassDensity,
) -> Mass {
    let annulus = port_area(outer_radius) - port_area(inner_radius);
    annulus * length * density
}
