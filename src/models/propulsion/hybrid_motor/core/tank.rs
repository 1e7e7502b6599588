use std::f64::consts::PI;

use uom::si::{
    f64::{Length, Mass, MassDensity, Pressure, ThermodynamicTemperature, Volume},
    thermodynamic_temperature::kelvin,
};

use super::{ConfigError, OxidizerSupply, PropertyTables};

/// Fraction of the tank volume loaded with liquid oxidizer.
pub const USABLE_FRACTION: f64 = 0.8;

/// Cylindrical oxidizer tank holding saturated nitrous oxide.
///
/// The tank only sets the oxidizer budget of a burn; it has no effect on
/// per-step physics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TankConfig {
    outer_diameter: Length,
    wall_thickness: Length,
    length: Length,
    temperature: ThermodynamicTemperature,
}

impl TankConfig {
    /// Creates a tank configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a dimension is not strictly positive,
    /// if the wall leaves no inner diameter, or if the temperature is not a
    /// finite absolute temperature.
    pub fn new(
        outer_diameter: Length,
        wall_thickness: Length,
        length: Length,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, ConfigError> {
        let outer_diameter = ConfigError::strictly_positive("tank outer diameter", outer_diameter)?;
        let wall_thickness = ConfigError::strictly_positive("tank wall thickness", wall_thickness)?;
        let length = ConfigError::strictly_positive("tank length", length)?;

        let t_k = temperature.get::<kelvin>();
        if !(t_k.is_finite() && t_k > 0.0) {
            return Err(ConfigError::TankTemperature { temperature });
        }

        if 2.0 * wall_thickness >= outer_diameter {
            return Err(ConfigError::TankWall {
                outer: outer_diameter,
                wall: wall_thickness,
            });
        }

        Ok(Self {
            outer_diameter,
            wall_thickness,
            length,
            temperature,
        })
    }

    #[must_use]
    pub fn outer_diameter(&self) -> Length {
        self.outer_diameter
    }

    #[must_use]
    pub fn wall_thickness(&self) -> Length {
        self.wall_thickness
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    #[must_use]
    pub fn inner_diameter(&self) -> Length {
        self.outer_diameter - 2.0 * self.wall_thickness
    }

    /// Internal volume of the cylindrical shell.
    #[must_use]
    pub fn inner_volume(&self) -> Volume {
        let r = self.inner_diameter() / 2.0;
        PI * r * r * self.length
    }

    /// Saturated vapor pressure at the tank temperature.
    #[must_use]
    pub fn vapor_pressure(&self, tables: &PropertyTables) -> Pressure {
        tables.oxidizer().vapor_pressure(self.temperature)
    }

    /// Saturated liquid density at the tank temperature.
    #[must_use]
    pub fn liquid_density(&self, tables: &PropertyTables) -> MassDensity {
        tables.oxidizer().liquid_density(self.temperature)
    }

    /// Liquid oxidizer loaded into the usable fraction of the tank.
    #[must_use]
    pub fn oxidizer_mass(&self, tables: &PropertyTables) -> Mass {
        USABLE_FRACTION * self.inner_volume() * self.liquid_density(tables)
    }

    /// Oxidizer budget for a burn fed from this tank.
    #[must_use]
    pub fn oxidizer_supply(&self, tables: &PropertyTables) -> OxidizerSupply {
        OxidizerSupply::Limited(self.oxidizer_mass(tables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::{centimeter, millimeter},
        mass::kilogram,
        mass_density::kilogram_per_cubic_meter,
        pressure::bar,
        thermodynamic_temperature::degree_celsius,
        volume::cubic_meter,
    };

    use crate::models::propulsion::hybrid_motor::core::test_support;

    #[test]
    fn default_tank_geometry() {
        let tank = test_support::tank();

        assert_relative_eq!(tank.inner_diameter().get::<millimeter>(), 93.0, max_relative = 1e-12);
        assert_relative_eq!(
            tank.inner_volume().get::<cubic_meter>(),
            PI * 0.0465 * 0.0465 * 0.3,
            max_relative = 1e-12
        );
    }

    #[test]
    fn loads_usable_fraction_at_liquid_density() {
        let tables = PropertyTables::nitrous_paraffin().unwrap();
        let tank = test_support::tank();

        let rho = tank.liquid_density(&tables).get::<kilogram_per_cubic_meter>();
        let expected = 0.8 * tank.inner_volume().get::<cubic_meter>() * rho;

        assert_relative_eq!(
            tank.oxidizer_mass(&tables).get::<kilogram>(),
            expected,
            max_relative = 1e-12
        );
        assert_eq!(
            tank.oxidizer_supply(&tables),
            OxidizerSupply::Limited(tank.oxidizer_mass(&tables))
        );

        // About 1.2 kg of liquid nitrous oxide at room temperature.
        let m = tank.oxidizer_mass(&tables).get::<kilogram>();
        assert!(m > 1.1 && m < 1.3, "m = {m} kg");
    }

    #[test]
    fn vapor_pressure_follows_tank_temperature() {
        let tables = PropertyTables::nitrous_paraffin().unwrap();
        let warm = test_support::tank();
        let cold = TankConfig::new(
            warm.outer_diameter(),
            warm.wall_thickness(),
            warm.length(),
            ThermodynamicTemperature::new::<degree_celsius>(0.0),
        )
        .unwrap();

        assert!(cold.vapor_pressure(&tables) < warm.vapor_pressure(&tables));
        assert!(warm.vapor_pressure(&tables).get::<bar>() > 50.0);
    }

    #[test]
    fn rejects_non_physical_temperature() {
        let tank = test_support::tank();
        let build = |temperature| {
            TankConfig::new(
                tank.outer_diameter(),
                tank.wall_thickness(),
                tank.length(),
                temperature,
            )
        };

        for t in [f64::NAN, f64::INFINITY, 0.0, -10.0] {
            assert!(
                matches!(
                    build(ThermodynamicTemperature::new::<kelvin>(t)),
                    Err(ConfigError::TankTemperature { .. })
                ),
                "accepted {t} K"
            );
        }
        assert!(build(ThermodynamicTemperature::new::<kelvin>(298.0)).is_ok());
    }

    #[test]
    fn rejects_wall_thicker_than_radius() {
        let t = ThermodynamicTemperature::new::<degree_celsius>(25.0);

        assert!(matches!(
            TankConfig::new(
                Length::new::<centimeter>(10.0),
                Length::new::<centimeter>(5.0),
                Length::new::<centimeter>(30.0),
                t,
            ),
            Err(ConfigError::TankWall { .. })
        ));
        assert!(matches!(
            TankConfig::new(
                Length::new::<centimeter>(10.0),
                Length::new::<centimeter>(0.0),
                Length::new::<centimeter>(30.0),
                t,
            ),
            Err(ConfigError::InvalidParameter {
                name: "tank wall thickness",
                ..
            })
        ));
    }
}
