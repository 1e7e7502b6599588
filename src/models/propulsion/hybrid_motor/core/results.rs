//! Results types for a hybrid motor burn.

use std::fmt;

use uom::{
    ConstZero,
    si::f64::{
        Force, Length, Mass, MassRate, Pressure, Ratio, ThermodynamicTemperature, Time, Velocity,
    },
};

use crate::support::units::MassFlux;

/// Motor state at the start of one time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnSample {
    /// Elapsed burn time.
    pub time: Time,

    /// Port radius used for this step.
    pub port_radius: Length,

    pub thrust: Force,

    /// Oxidizer-to-fuel mass ratio.
    pub of_ratio: Ratio,

    /// Oxidizer mass flux through the port.
    pub oxidizer_flux: MassFlux,

    pub specific_impulse: Time,

    pub combustion_temperature: ThermodynamicTemperature,

    pub chamber_pressure: Pressure,

    pub regression_rate: Velocity,

    pub fuel_mass_rate: MassRate,

    /// Characteristic velocity, zero for the legacy model.
    pub characteristic_velocity: Velocity,

    /// Whether chamber pressure has dropped below the low-pressure threshold
    /// at this step or any earlier one.
    pub low_pressure_warning: bool,
}

/// Why a burn stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// Consumed oxidizer reached the depletion fraction of the supply.
    OxidizerDepletion,

    /// The port radius reached the outer grain radius.
    GrainBurnout,

    /// The step limit was reached first.
    StepLimit,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OxidizerDepletion => "oxidizer depletion",
            Self::GrainBurnout => "grain burnout",
            Self::StepLimit => "step limit reached",
        })
    }
}

/// Time history and totals of a finished burn.
///
/// Samples are ordered by time with a constant step and are never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    samples: Vec<BurnSample>,
    time_step: Time,
    oxidizer_consumed: Mass,
    fuel_consumed: Mass,
    final_port_radius: Length,
    low_pressure_warning: bool,
    termination: TerminationReason,
}

impl SimulationResult {
    pub(super) fn new(
        samples: Vec<BurnSample>,
        time_step: Time,
        oxidizer_consumed: Mass,
        fuel_consumed: Mass,
        final_port_radius: Length,
        low_pressure_warning: bool,
        termination: TerminationReason,
    ) -> Self {
        Self {
            samples,
            time_step,
            oxidizer_consumed,
            fuel_consumed,
            final_port_radius,
            low_pressure_warning,
            termination,
        }
    }

    #[must_use]
    pub fn samples(&self) -> &[BurnSample] {
        &self.samples
    }

    #[must_use]
    pub fn time_step(&self) -> Time {
        self.time_step
    }

    /// Number of steps taken.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.samples.len()
    }

    /// Elapsed time when the burn stopped.
    #[must_use]
    pub fn burn_time(&self) -> Time {
        self.time_step * self.samples.len() as f64
    }

    #[must_use]
    pub fn oxidizer_consumed(&self) -> Mass {
        self.oxidizer_consumed
    }

    #[must_use]
    pub fn fuel_consumed(&self) -> Mass {
        self.fuel_consumed
    }

    /// Port radius after the last step.
    #[must_use]
    pub fn final_port_radius(&self) -> Length {
        self.final_port_radius
    }

    /// Whether chamber pressure ever dropped below the low-pressure threshold.
    #[must_use]
    pub fn low_pressure_warning(&self) -> bool {
        self.low_pressure_warning
    }

    #[must_use]
    pub fn termination(&self) -> TerminationReason {
        self.termination
    }

    /// Peak thrust over the burn.
    #[must_use]
    pub fn peak_thrust(&self) -> Force {
        self.samples
            .iter()
            .map(|s| s.thrust)
            .reduce(|a, b| if b > a { b } else { a })
            .unwrap_or(Force::ZERO)
    }

    /// Peak chamber pressure over the burn.
    #[must_use]
    pub fn peak_chamber_pressure(&self) -> Pressure {
        self.samples
            .iter()
            .map(|s| s.chamber_pressure)
            .reduce(|a, b| if b > a { b } else { a })
            .unwrap_or(Pressure::ZERO)
    }
}
