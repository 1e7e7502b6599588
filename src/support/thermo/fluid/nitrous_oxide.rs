use uom::si::{
    f64::{MassDensity, Pressure, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::{bar, pascal},
    thermodynamic_temperature::kelvin,
};

use crate::support::interpolate::{CubicSpline, TableError};

/// Saturation temperatures of the tabulation, in kelvin.
const TEMPERATURE_K: [f64; 17] = [
    249.0, 259.0, 269.0, 279.0, 289.0, 299.0, 301.0, 303.0, 305.0, 307.0, 308.0, 308.2, 308.4,
    308.6, 308.8, 309.0, 309.4,
];

/// Saturated vapor pressure at each tabulated temperature, in bar.
const VAPOR_PRESSURE_BAR: [f64; 17] = [
    15.847, 21.308, 28.025, 36.168, 45.936, 57.591, 60.181, 62.870, 65.663, 68.573, 70.078,
    70.384, 70.691, 71.000, 71.311, 71.623, 72.255,
];

/// Saturated liquid density at each tabulated temperature, in kg/m³.
const LIQUID_DENSITY: [f64; 17] = [
    1014.9, 973.32, 927.62, 876.03, 815.00, 734.79, 713.98, 690.07, 661.16, 622.45, 594.69,
    587.72, 579.98, 571.22, 561.02, 548.57, 505.57,
];

/// Saturated nitrous oxide properties along the liquid-vapor dome.
///
/// Both properties are not-a-knot cubic splines over tank temperature,
/// from 249 K up to just below the critical point (about 309.5 K).
/// Temperatures outside that range are clamped to the nearest bound.
#[derive(Debug, Clone, PartialEq)]
pub struct NitrousOxide {
    vapor_pressure: CubicSpline,
    liquid_density: CubicSpline,
}

impl NitrousOxide {
    /// Builds the saturated property interpolants.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the tabulated data cannot define a spline.
    pub fn new() -> Result<Self, TableError> {
        let temperature = TEMPERATURE_K.to_vec();
        let pressure = VAPOR_PRESSURE_BAR
            .iter()
            .map(|&p| Pressure::new::<bar>(p).get::<pascal>())
            .collect();

        Ok(Self {
            vapor_pressure: CubicSpline::new(temperature.clone(), pressure)?,
            liquid_density: CubicSpline::new(temperature, LIQUID_DENSITY.to_vec())?,
        })
    }

    /// Returns the saturated vapor pressure at `temperature`.
    #[must_use]
    pub fn vapor_pressure(&self, temperature: ThermodynamicTemperature) -> Pressure {
        Pressure::new::<pascal>(self.vapor_pressure.eval(temperature.get::<kelvin>()))
    }

    /// Returns the saturated liquid density at `temperature`.
    #[must_use]
    pub fn liquid_density(&self, temperature: ThermodynamicTemperature) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(
            self.liquid_density.eval(temperature.get::<kelvin>()),
        )
    }

    /// Returns the tabulated temperature range.
    #[must_use]
    pub fn temperature_domain(&self) -> (ThermodynamicTemperature, ThermodynamicTemperature) {
        let (lo, hi) = self.liquid_density.domain();
        (
            ThermodynamicTemperature::new::<kelvin>(lo),
            ThermodynamicTemperature::new::<kelvin>(hi),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::degree_celsius;

    #[test]
    fn matches_tabulated_points() {
        let n2o = NitrousOxide::new().unwrap();

        let t = ThermodynamicTemperature::new::<kelvin>(279.0);
        assert_relative_eq!(n2o.vapor_pressure(t).get::<bar>(), 36.168, max_relative = 1e-10);
        assert_relative_eq!(
            n2o.liquid_density(t).get::<kilogram_per_cubic_meter>(),
            876.03,
            max_relative = 1e-10
        );
    }

    #[test]
    fn room_temperature_properties_are_plausible() {
        let n2o = NitrousOxide::new().unwrap();
        let t = ThermodynamicTemperature::new::<degree_celsius>(25.0);

        let p = n2o.vapor_pressure(t).get::<bar>();
        let rho = n2o.liquid_density(t).get::<kilogram_per_cubic_meter>();

        assert!(p > 55.0 && p < 58.0, "p = {p} bar");
        assert!(rho > 730.0 && rho < 760.0, "rho = {rho} kg/m³");
    }

    #[test]
    fn clamps_below_and_above_tabulated_range() {
        let n2o = NitrousOxide::new().unwrap();
        let (t_min, t_max) = n2o.temperature_domain();

        let cold = ThermodynamicTemperature::new::<degree_celsius>(-60.0);
        let hot = ThermodynamicTemperature::new::<degree_celsius>(80.0);

        assert_eq!(n2o.vapor_pressure(cold), n2o.vapor_pressure(t_min));
        assert_eq!(n2o.liquid_density(cold), n2o.liquid_density(t_min));
        assert_eq!(n2o.vapor_pressure(hot), n2o.vapor_pressure(t_max));
        assert_eq!(n2o.liquid_density(hot), n2o.liquid_density(t_max));
    }

    #[test]
    fn density_falls_as_tank_warms() {
        let n2o = NitrousOxide::new().unwrap();
        let densities: Vec<f64> = TEMPERATURE_K
            .iter()
            .map(|&k| {
                n2o.liquid_density(ThermodynamicTemperature::new::<kelvin>(k))
                    .get::<kilogram_per_cubic_meter>()
            })
            .collect();

        assert!(densities.windows(2).all(|w| w[1] < w[0]));
    }
}
