//! Performance metrics for a finished burn.

use uom::si::{
    area::square_meter,
    f64::{
        Area, Force, Length, Mass, MassRate, Momentum, Pressure, Ratio, ThermodynamicTemperature,
        Time,
    },
    force::newton,
    mass_rate::kilogram_per_second,
    momentum::kilogram_meter_per_second,
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
    time::second,
};

use crate::support::units::MassFlux;

use super::{BurnSample, SimulationResult};

/// Range and mean of one sampled quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent<T> {
    pub min: T,
    pub max: T,
    pub mean: T,
}

impl Extent<f64> {
    /// Extent of `values`, or all zeros when there are none.
    ///
    /// The mean is a running mean, clamped to `[min, max]` against rounding.
    fn of(values: impl Iterator<Item = f64>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut mean = 0.0;
        let mut count = 0_usize;

        for v in values {
            count += 1;
            min = min.min(v);
            max = max.max(v);
            mean += (v - mean) / count as f64;
        }

        if count == 0 {
            return Self {
                min: 0.0,
                max: 0.0,
                mean: 0.0,
            };
        }

        Self {
            min,
            max,
            mean: mean.clamp(min, max),
        }
    }

    fn map<T>(self, f: impl Fn(f64) -> T) -> Extent<T> {
        Extent {
            min: f(self.min),
            max: f(self.max),
            mean: f(self.mean),
        }
    }
}

/// Headline figures of a burn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnSummary {
    pub burn_time: Time,

    /// Thrust integrated over the sample times by the trapezoidal rule.
    pub total_impulse: Momentum,

    pub thrust: Extent<Force>,
    pub specific_impulse: Extent<Time>,
    pub of_ratio: Extent<Ratio>,
    pub oxidizer_flux: Extent<MassFlux>,
    pub combustion_temperature: Extent<ThermodynamicTemperature>,
    pub chamber_pressure: Extent<Pressure>,

    /// Chamber pressure at the last sample.
    pub final_chamber_pressure: Pressure,

    pub initial_port_radius: Length,

    /// Port radius after the last step.
    pub final_port_radius: Length,

    pub oxidizer_consumed: Mass,
    pub fuel_consumed: Mass,
}

impl SimulationResult {
    /// Summarizes the burn history.
    #[must_use]
    pub fn summary(&self) -> BurnSummary {
        let samples = self.samples();
        let extent = |f: fn(&BurnSample) -> f64| Extent::of(samples.iter().map(f));

        let total_impulse = samples
            .windows(2)
            .map(|w| {
                let dt = (w[1].time - w[0].time).get::<second>();
                0.5 * (w[0].thrust + w[1].thrust).get::<newton>() * dt
            })
            .sum::<f64>();

        let (initial_port_radius, final_chamber_pressure) = match (samples.first(), samples.last())
        {
            (Some(first), Some(last)) => (first.port_radius, last.chamber_pressure),
            _ => (self.final_port_radius(), Pressure::new::<pascal>(0.0)),
        };

        BurnSummary {
            burn_time: self.burn_time(),
            total_impulse: Momentum::new::<kilogram_meter_per_second>(total_impulse),
            thrust: extent(|s| s.thrust.get::<newton>()).map(Force::new::<newton>),
            specific_impulse: extent(|s| s.specific_impulse.get::<second>())
                .map(Time::new::<second>),
            of_ratio: extent(|s| s.of_ratio.get::<ratio>()).map(Ratio::new::<ratio>),
            oxidizer_flux: extent(|s| s.oxidizer_flux.value).map(|g| {
                MassRate::new::<kilogram_per_second>(g) / Area::new::<square_meter>(1.0)
            }),
            combustion_temperature: extent(|s| s.combustion_temperature.get::<kelvin>())
                .map(ThermodynamicTemperature::new::<kelvin>),
            chamber_pressure: extent(|s| s.chamber_pressure.get::<pascal>())
                .map(Pressure::new::<pascal>),
            final_chamber_pressure,
            initial_port_radius,
            final_port_radius: self.final_port_radius(),
            oxidizer_consumed: self.oxidizer_consumed(),
            fuel_consumed: self.fuel_consumed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::centimeter, mass_rate::gram_per_second};

    use crate::models::propulsion::hybrid_motor::core::{
        BurnConfig, BurnLoop, OxidizerSupply, test_support,
    };

    #[test]
    fn extent_of_values() {
        let e = Extent::of([3.0, 1.0, 2.0].into_iter());
        assert_relative_eq!(e.min, 1.0);
        assert_relative_eq!(e.max, 3.0);
        assert_relative_eq!(e.mean, 2.0);

        let empty = Extent::of(std::iter::empty());
        assert_relative_eq!(empty.mean, 0.0);
    }

    #[test]
    fn mean_of_many_equal_values_stays_in_range() {
        let v = 7.021_128_070_525_734;
        let e = Extent::of(std::iter::repeat_n(v, 8_200));
        assert_eq!(e.min, v);
        assert_eq!(e.max, v);
        assert_eq!(e.mean, v);

        let nearly = [v, v + 4e-15].into_iter().cycle().take(10_001);
        let e = Extent::of(nearly);
        assert!(e.min <= e.mean && e.mean <= e.max, "{e:?}");
    }

    #[test]
    fn legacy_summary() {
        let tables = test_support::tables();
        let input = test_support::legacy_input(47.0);
        let result = BurnLoop::new(&input, BurnConfig::default(), &tables).run();
        let summary = result.summary();

        assert_eq!(summary.burn_time, result.burn_time());
        assert_eq!(summary.thrust.max, result.peak_thrust());
        assert_eq!(summary.chamber_pressure.max, result.peak_chamber_pressure());
        assert_relative_eq!(summary.initial_port_radius.get::<centimeter>(), 0.7);
        assert!(summary.final_port_radius >= input.propellant.outer_port_radius());

        // Legacy thrust is (ṁ_ox + ṁ_f)·1800 with constant fuel flow for n = 0.5.
        let m_dot_ox = MassRate::new::<gram_per_second>(47.0);
        let m_dot = m_dot_ox + result.samples()[0].fuel_mass_rate;
        assert_relative_eq!(
            summary.thrust.mean.get::<newton>(),
            m_dot.value * 1800.0,
            max_relative = 1e-9
        );

        // Impulse spans the sample times, one step short of the burn time.
        let span = summary.burn_time - result.time_step();
        assert_relative_eq!(
            summary.total_impulse.get::<kilogram_meter_per_second>(),
            summary.thrust.mean.get::<newton>() * span.get::<second>(),
            max_relative = 1e-6
        );

        assert!(summary.of_ratio.min <= summary.of_ratio.mean);
        assert!(summary.of_ratio.mean <= summary.of_ratio.max);
        assert!(summary.oxidizer_flux.max.value > summary.oxidizer_flux.min.value);
    }

    #[test]
    fn single_step_summary_has_no_impulse() {
        let tables = test_support::tables();
        let m_dot_ox = MassRate::new::<gram_per_second>(47.0);
        let dt = BurnConfig::default().time_step();
        let input = test_support::choked_input(47.0, OxidizerSupply::Limited(m_dot_ox * dt));

        let result = BurnLoop::new(&input, BurnConfig::default(), &tables).run();
        let summary = result.summary();

        assert_eq!(summary.total_impulse.value, 0.0);
        assert_eq!(summary.thrust.min, summary.thrust.max);
        assert_eq!(
            summary.final_chamber_pressure,
            result.samples()[0].chamber_pressure
        );
    }
}
