use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::interpolate::{CubicSpline, TableError};

/// Tabulated oxidizer-to-fuel mass ratios.
const OF_RATIO: [f64; 10] = [0.2, 1.0, 2.0, 3.0, 4.0, 6.0, 7.0, 8.0, 9.0, 10.0];

/// Combustion temperature at each tabulated mixture ratio, in kelvin.
const TEMPERATURE_K: [f64; 10] = [
    1000.0, 1210.0, 1500.0, 1800.0, 2400.0, 3100.0, 3200.0, 3260.0, 3250.0, 3200.0,
];

/// Combustion temperature of nitrous oxide and paraffin versus O/F ratio.
///
/// Mixture ratios below 0.2 or above 10 are clamped to the first or last
/// tabulated temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct CombustionTemperature {
    spline: CubicSpline,
}

impl CombustionTemperature {
    /// Builds the nitrous oxide / paraffin temperature table.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the tabulated data cannot define a spline.
    pub fn nitrous_paraffin() -> Result<Self, TableError> {
        Self::from_table(OF_RATIO.to_vec(), TEMPERATURE_K.to_vec())
    }

    /// Builds a temperature table from custom thermochemistry data.
    ///
    /// `of_ratio` must be strictly increasing; `temperature_k` is in kelvin.
    ///
    /// # Errors
    ///
    /// Returns a [`TableError`] if the data cannot define a spline.
    pub fn from_table(of_ratio: Vec<f64>, temperature_k: Vec<f64>) -> Result<Self, TableError> {
        Ok(Self {
            spline: CubicSpline::new(of_ratio, temperature_k)?,
        })
    }

    /// Returns the combustion temperature at mixture ratio `of`.
    #[must_use]
    pub fn at(&self, of: Ratio) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(self.spline.eval(of.get::<ratio>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn of(value: f64) -> Ratio {
        Ratio::new::<ratio>(value)
    }

    #[test]
    fn tabulated_points() {
        let table = CombustionTemperature::nitrous_paraffin().unwrap();

        for (&r, &t) in OF_RATIO.iter().zip(&TEMPERATURE_K) {
            assert_relative_eq!(table.at(of(r)).get::<kelvin>(), t, max_relative = 1e-12);
        }
    }

    #[test]
    fn clamps_to_end_temperatures() {
        let table = CombustionTemperature::nitrous_paraffin().unwrap();

        assert_relative_eq!(table.at(of(0.0)).get::<kelvin>(), 1000.0, epsilon = 1e-9);
        assert_relative_eq!(table.at(of(25.0)).get::<kelvin>(), 3200.0, epsilon = 1e-9);
        assert_eq!(table.at(of(-3.0)), table.at(of(0.2)));
        assert_eq!(table.at(of(10.5)), table.at(of(10.0)));
    }

    #[test]
    fn peak_temperature_near_stoichiometric() {
        let table = CombustionTemperature::nitrous_paraffin().unwrap();
        let t5 = table.at(of(5.0)).get::<kelvin>();
        let t8 = table.at(of(8.0)).get::<kelvin>();

        assert!(t5 > 2400.0 && t5 < 3100.0);
        assert!(t8 > table.at(of(2.0)).get::<kelvin>());
    }

    #[test]
    fn rejects_short_custom_table() {
        assert!(matches!(
            CombustionTemperature::from_table(vec![1.0, 2.0], vec![1500.0, 2000.0]),
            Err(TableError::TooFewPoints { .. })
        ));
    }
}
