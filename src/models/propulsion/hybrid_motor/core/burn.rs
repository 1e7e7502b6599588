//! Fixed-step burn loop.
//!
//! Each step evaluates the motor at the current port radius, records a
//! [`BurnSample`], then advances the radius and the consumed propellant.
//! Termination is checked after the advance, so every run records at least
//! one sample.

use uom::{
    ConstZero,
    si::{
        f64::{Force, Length, Mass, MassRate, Pressure, ThermodynamicTemperature, Time, Velocity},
        pressure::pascal,
    },
};

use super::{
    BurnConfig, BurnSample, ChokedFlowConfig, MotorInput, PropertyTables, SimulationMode,
    SimulationResult, TerminationReason,
    chamber::{chamber_pressure, characteristic_velocity},
    config::LOW_PRESSURE_THRESHOLD,
    performance::{exhaust_velocity, specific_impulse, thrust},
    regression::{fuel_mass_rate, of_ratio, oxidizer_flux, port_area},
};

/// Whether the burn loop can take another step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BurnState {
    Running,
    Terminated(TerminationReason),
}

/// Port geometry owned by one burn.
#[derive(Debug, Clone, Copy)]
struct GeometryState {
    port_radius: Length,
}

impl GeometryState {
    /// Grows the port by `r_dot` over `dt`.
    fn advance(&mut self, r_dot: Velocity, dt: Time) {
        debug_assert!(r_dot >= Velocity::ZERO, "port radius must not shrink");
        self.port_radius += r_dot * dt;
    }
}

/// Chamber and nozzle outputs for one step.
struct NozzleFlow {
    chamber_pressure: Pressure,
    thrust: Force,
    characteristic_velocity: Velocity,
}

/// Stateful integrator for a single burn.
///
/// Use [`BurnLoop::run`] to burn to completion, or [`BurnLoop::step`] to
/// advance one step at a time.
#[derive(Debug, Clone)]
pub struct BurnLoop<'a> {
    input: &'a MotorInput,
    tables: &'a PropertyTables,
    config: BurnConfig,
    depletion_threshold: Option<Mass>,
    geometry: GeometryState,
    oxidizer_consumed: Mass,
    fuel_consumed: Mass,
    low_pressure_warning: bool,
    samples: Vec<BurnSample>,
    state: BurnState,
}

impl<'a> BurnLoop<'a> {
    /// Starts a burn at the initial port radius with nothing consumed.
    #[must_use]
    pub fn new(input: &'a MotorInput, config: BurnConfig, tables: &'a PropertyTables) -> Self {
        Self {
            input,
            tables,
            config,
            depletion_threshold: input.supply.depletion_threshold(),
            geometry: GeometryState {
                port_radius: input.propellant.initial_port_radius(),
            },
            oxidizer_consumed: Mass::ZERO,
            fuel_consumed: Mass::ZERO,
            low_pressure_warning: false,
            samples: Vec::new(),
            state: BurnState::Running,
        }
    }

    #[must_use]
    pub fn state(&self) -> BurnState {
        self.state
    }

    #[must_use]
    pub fn samples(&self) -> &[BurnSample] {
        &self.samples
    }

    #[must_use]
    pub fn port_radius(&self) -> Length {
        self.geometry.port_radius
    }

    /// Takes one step and returns the resulting state.
    ///
    /// Does nothing once the burn has terminated.
    pub fn step(&mut self) -> BurnState {
        if self.state != BurnState::Running {
            return self.state;
        }

        let propellant = &self.input.propellant;
        let dt = self.config.time_step();
        let radius = self.geometry.port_radius;

        let m_dot_ox = propellant.oxidizer_mass_rate();
        let flux = oxidizer_flux(m_dot_ox, port_area(radius));
        let r_dot = propellant.regression_law().rate(flux);
        let m_dot_fuel = fuel_mass_rate(
            r_dot,
            propellant.fuel_density(),
            radius,
            propellant.grain_length(),
        );
        let m_dot = m_dot_ox + m_dot_fuel;
        let of = of_ratio(m_dot_ox, m_dot_fuel);

        let t_c = self.tables.combustion_temperature().at(of);
        let flow = self.nozzle_flow(m_dot, t_c);

        if flow.chamber_pressure < Pressure::new::<pascal>(LOW_PRESSURE_THRESHOLD) {
            self.low_pressure_warning = true;
        }

        self.samples.push(BurnSample {
            time: dt * self.samples.len() as f64,
            port_radius: radius,
            thrust: flow.thrust,
            of_ratio: of,
            oxidizer_flux: flux,
            specific_impulse: specific_impulse(flow.thrust, m_dot),
            combustion_temperature: t_c,
            chamber_pressure: flow.chamber_pressure,
            regression_rate: r_dot,
            fuel_mass_rate: m_dot_fuel,
            characteristic_velocity: flow.characteristic_velocity,
            low_pressure_warning: self.low_pressure_warning,
        });

        self.geometry.advance(r_dot, dt);
        self.oxidizer_consumed += m_dot_ox * dt;
        self.fuel_consumed += m_dot_fuel * dt;

        if let Some(reason) = self.termination() {
            self.state = BurnState::Terminated(reason);
        }
        self.state
    }

    /// Steps until the burn terminates.
    #[must_use]
    pub fn run(mut self) -> SimulationResult {
        loop {
            if let BurnState::Terminated(reason) = self.step() {
                return SimulationResult::new(
                    self.samples,
                    self.config.time_step(),
                    self.oxidizer_consumed,
                    self.fuel_consumed,
                    self.geometry.port_radius,
                    self.low_pressure_warning,
                    reason,
                );
            }
        }
    }

    fn nozzle_flow(&self, m_dot: MassRate, t_c: ThermodynamicTemperature) -> NozzleFlow {
        match &self.input.mode {
            SimulationMode::LegacyConstant => NozzleFlow {
                chamber_pressure: SimulationMode::legacy_chamber_pressure(),
                thrust: m_dot * SimulationMode::legacy_exhaust_velocity(),
                characteristic_velocity: Velocity::ZERO,
            },
            SimulationMode::ChokedFlow(choked) => choked_nozzle_flow(choked, m_dot, t_c),
        }
    }

    /// Depletion outranks burnout, which outranks the step limit.
    fn termination(&self) -> Option<TerminationReason> {
        if self
            .depletion_threshold
            .is_some_and(|threshold| self.oxidizer_consumed >= threshold)
        {
            Some(TerminationReason::OxidizerDepletion)
        } else if self.geometry.port_radius >= self.input.propellant.outer_port_radius() {
            Some(TerminationReason::GrainBurnout)
        } else if self.samples.len() >= self.config.max_steps() {
            Some(TerminationReason::StepLimit)
        } else {
            None
        }
    }
}

fn choked_nozzle_flow(
    config: &ChokedFlowConfig,
    m_dot: MassRate,
    t_c: ThermodynamicTemperature,
) -> NozzleFlow {
    let gas = config.gas();
    let ambient = config.ambient_pressure();

    let p_c = chamber_pressure(m_dot, config.throat_area(), gas, t_c, ambient);
    let p_e = config.exit_pressure(p_c);
    let v_e = exhaust_velocity(gas, t_c, p_c, p_e);

    NozzleFlow {
        chamber_pressure: p_c,
        thrust: thrust(m_dot, v_e, config.exit_area(), p_e, ambient),
        characteristic_velocity: characteristic_velocity(p_c, config.throat_area(), m_dot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        length::{meter, millimeter},
        mass::kilogram,
        mass_rate::gram_per_second,
        time::second,
    };

    use crate::{
        models::propulsion::hybrid_motor::core::{
            OxidizerSupply, PropellantConfig, RegressionLaw, test_support,
        },
        support::thermo::CombustionGas,
    };

    fn burn(input: &MotorInput, config: BurnConfig) -> SimulationResult {
        let tables = test_support::tables();
        BurnLoop::new(input, config, &tables).run()
    }

    #[test]
    fn legacy_burn_of_default_grain() {
        let input = test_support::legacy_input(47.0);
        let result = burn(&input, BurnConfig::default());
        let samples = result.samples();
        let dt = result.time_step();

        assert_eq!(result.termination(), TerminationReason::GrainBurnout);
        assert!(!samples.is_empty());
        assert_relative_eq!(samples[0].port_radius.get::<meter>(), 0.007);

        let last = samples[samples.len() - 1];
        assert!((last.port_radius + last.regression_rate * dt).get::<meter>() >= 0.019);
        assert!(last.port_radius.get::<meter>() < 0.019);
        assert!(result.final_port_radius().get::<meter>() >= 0.019);

        assert!(samples.iter().all(|s| s.thrust > Force::ZERO));
        assert!(!result.low_pressure_warning());

        // r² grows linearly for n = 0.5: about 8.2 s to burn out.
        let t = result.burn_time().get::<second>();
        assert!(t > 8.0 && t < 8.4, "burn time = {t} s");
    }

    #[test]
    fn legacy_thrust_uses_fixed_exhaust_velocity() {
        let input = test_support::legacy_input(47.0);
        let result = burn(&input, BurnConfig::default());
        let first = result.samples()[0];

        let m_dot = MassRate::new::<gram_per_second>(47.0) + first.fuel_mass_rate;
        assert_relative_eq!(
            first.thrust.value,
            m_dot.value * 1800.0,
            max_relative = 1e-12
        );
        assert_eq!(first.chamber_pressure, SimulationMode::legacy_chamber_pressure());
        assert_eq!(first.characteristic_velocity, Velocity::ZERO);
    }

    #[test]
    fn time_and_radius_histories_are_well_ordered() {
        let input = test_support::choked_input(47.0, OxidizerSupply::Unbounded);
        let config = BurnConfig::new(Time::new::<second>(0.01), 100_000).unwrap();
        let result = burn(&input, config);
        let samples = result.samples();

        assert_eq!(samples[0].time, Time::ZERO);
        for (i, pair) in samples.windows(2).enumerate() {
            assert!(pair[1].time > pair[0].time);
            assert!(pair[1].port_radius >= pair[0].port_radius);
            assert_relative_eq!(
                pair[1].time.get::<second>(),
                (i + 1) as f64 * 0.01,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn zero_oxidizer_flow_stops_at_step_limit() {
        let input = test_support::choked_input(0.0, OxidizerSupply::Unbounded);
        let config = BurnConfig::new(Time::new::<second>(0.001), 500).unwrap();
        let result = burn(&input, config);

        assert_eq!(result.termination(), TerminationReason::StepLimit);
        assert_eq!(result.steps(), 500);
        assert_eq!(result.final_port_radius(), input.propellant.initial_port_radius());
        assert!(result.samples().iter().all(|s| {
            s.oxidizer_flux.value == 0.0
                && s.regression_rate == Velocity::ZERO
                && s.port_radius == input.propellant.initial_port_radius()
        }));
        assert!(result.low_pressure_warning());
        assert_eq!(result.oxidizer_consumed(), Mass::ZERO);
    }

    #[test]
    fn one_step_of_oxidizer_depletes_after_one_step() {
        let m_dot_ox = MassRate::new::<gram_per_second>(47.0);
        let dt = BurnConfig::default().time_step();
        let input = test_support::choked_input(47.0, OxidizerSupply::Limited(m_dot_ox * dt));

        let result = burn(&input, BurnConfig::default());

        assert_eq!(result.termination(), TerminationReason::OxidizerDepletion);
        assert_eq!(result.steps(), 1);
        assert_relative_eq!(
            result.oxidizer_consumed().get::<kilogram>(),
            0.047 * 0.001,
            max_relative = 1e-12
        );
    }

    #[test]
    fn nan_oxidizer_budget_still_terminates_by_depletion() {
        let supply = OxidizerSupply::Limited(Mass::new::<kilogram>(f64::NAN));
        let input = test_support::choked_input(1000.0, supply);

        let result = burn(&input, BurnConfig::default());

        assert_eq!(result.termination(), TerminationReason::OxidizerDepletion);
        assert_eq!(result.steps(), 1);
    }

    #[test]
    fn depletion_before_burnout_wins() {
        let tables = test_support::tables();
        let tank = test_support::tank();
        let supply = tank.oxidizer_supply(&tables);
        let input = test_support::choked_input(47.0, supply);

        let result = BurnLoop::new(&input, BurnConfig::default(), &tables).run();
        let OxidizerSupply::Limited(available) = supply else {
            unreachable!()
        };

        // About 1.2 kg at 47 g/s depletes in roughly 23 s; the grain lasts 8 s.
        assert_eq!(result.termination(), TerminationReason::GrainBurnout);
        assert!(result.oxidizer_consumed() < 0.9 * available);

        let small = OxidizerSupply::Limited(Mass::new::<kilogram>(0.1));
        let input = test_support::choked_input(47.0, small);
        let result = BurnLoop::new(&input, BurnConfig::default(), &tables).run();

        assert_eq!(result.termination(), TerminationReason::OxidizerDepletion);
        assert!(result.oxidizer_consumed() >= Mass::new::<kilogram>(0.09));
        assert!(result.final_port_radius() < input.propellant.outer_port_radius());
    }

    #[test]
    fn low_pressure_warning_latches_after_recovery() {
        // With n < 0.5 fuel flow grows with the port, so chamber pressure
        // starts just under the threshold and then climbs above it.
        let propellant = PropellantConfig::new(
            Length::new::<millimeter>(1.0),
            Length::new::<millimeter>(25.0),
            Length::new::<millimeter>(60.0),
            MassRate::new::<gram_per_second>(47.0),
            test_support::paraffin_density(),
        )
        .unwrap()
        .with_regression_law(RegressionLaw::new(3.75e-4, 0.3).unwrap());

        let choked = ChokedFlowConfig::new(
            Length::new::<millimeter>(21.7),
            CombustionGas::nitrous_paraffin(),
        )
        .unwrap();

        let input = MotorInput {
            propellant,
            mode: SimulationMode::ChokedFlow(choked),
            supply: OxidizerSupply::Unbounded,
        };
        let config = BurnConfig::new(Time::new::<second>(0.01), 100_000).unwrap();
        let result = burn(&input, config);
        let samples = result.samples();
        let threshold = Pressure::new::<pascal>(LOW_PRESSURE_THRESHOLD);

        assert!(samples[0].chamber_pressure < threshold);
        assert!(samples.iter().any(|s| s.chamber_pressure > threshold));
        assert!(samples.iter().all(|s| s.low_pressure_warning));
        assert!(result.low_pressure_warning());
        assert_eq!(result.termination(), TerminationReason::GrainBurnout);
    }

    #[test]
    fn stepping_after_termination_is_a_no_op() {
        let tables = test_support::tables();
        let m_dot_ox = MassRate::new::<gram_per_second>(47.0);
        let dt = BurnConfig::default().time_step();
        let input = test_support::choked_input(47.0, OxidizerSupply::Limited(m_dot_ox * dt));

        let mut burn = BurnLoop::new(&input, BurnConfig::default(), &tables);
        assert_eq!(burn.state(), BurnState::Running);

        let state = burn.step();
        assert_eq!(state, BurnState::Terminated(TerminationReason::OxidizerDepletion));

        let radius = burn.port_radius();
        assert_eq!(burn.step(), state);
        assert_eq!(burn.samples().len(), 1);
        assert_eq!(burn.port_radius(), radius);
    }

    #[test]
    fn choked_flow_burn_is_physical() {
        let input = test_support::choked_input(47.0, OxidizerSupply::Unbounded);
        let result = burn(&input, BurnConfig::default());

        assert_eq!(result.termination(), TerminationReason::GrainBurnout);
        assert!(!result.low_pressure_warning());

        for s in result.samples() {
            assert!(s.thrust > Force::ZERO);
            assert!(s.specific_impulse > Time::ZERO);
            assert!(s.characteristic_velocity > Velocity::ZERO);
            assert!(s.of_ratio.value > 0.0);
        }
    }

    #[test]
    fn fixed_exit_never_beats_ideal_expansion() {
        let tables = test_support::tables();
        let ideal = test_support::choked_input(47.0, OxidizerSupply::Unbounded);
        let SimulationMode::ChokedFlow(choked) = ideal.mode else {
            unreachable!()
        };

        let first_sample = |input: &MotorInput| {
            let mut burn = BurnLoop::new(input, BurnConfig::default(), &tables);
            burn.step();
            burn.samples()[0]
        };
        let reference = first_sample(&ideal);

        // 9 mm leaves the jet under-expanded; 15 mm over-expands it.
        for exit_mm in [9.0, 15.0] {
            let exit = choked
                .with_exit_diameter(Length::new::<millimeter>(exit_mm))
                .unwrap();
            let input = MotorInput {
                mode: SimulationMode::ChokedFlow(exit),
                ..ideal
            };
            let sample = first_sample(&input);

            assert_eq!(sample.chamber_pressure, reference.chamber_pressure);
            assert!(sample.thrust < reference.thrust);
            assert!(sample.thrust > 0.97 * reference.thrust);
        }
    }
}
