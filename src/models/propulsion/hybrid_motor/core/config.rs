//! Run configuration for a hybrid motor burn.

use std::f64::consts::PI;

use uom::{
    ConstZero,
    si::{
        f64::{Area, Length, Mass, MassDensity, MassRate, Pressure, Time, Velocity},
        length::millimeter,
        pressure::{bar, pascal},
        time::millisecond,
        velocity::meter_per_second,
    },
};

use crate::support::thermo::CombustionGas;

use super::{
    ConfigError,
    nozzle::NozzleExit,
    regression::{RegressionLaw, grain_mass},
};

/// Fraction of the available oxidizer whose consumption ends the burn.
pub const OXIDIZER_DEPLETION_FRACTION: f64 = 0.90;

/// Chamber pressure below which a run is flagged, Pa.
pub const LOW_PRESSURE_THRESHOLD: f64 = 2e5;

/// Ambient pressure at the nozzle exit, Pa.
pub const AMBIENT_PRESSURE: f64 = 1e5;

/// Fixed chamber pressure of the legacy model, bar.
pub const LEGACY_CHAMBER_PRESSURE: f64 = 10.0;

/// Fixed exhaust velocity of the legacy model, m/s.
pub const LEGACY_EXHAUST_VELOCITY: f64 = 1800.0;

/// Default nozzle throat diameter, mm.
pub const DEFAULT_THROAT_DIAMETER: f64 = 6.0;

/// Fuel grain and oxidizer feed for one burn.
///
/// The oxidizer flow is held constant for the whole burn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropellantConfig {
    initial_port_radius: Length,
    outer_port_radius: Length,
    grain_length: Length,
    oxidizer_mass_rate: MassRate,
    fuel_density: MassDensity,
    regression_law: RegressionLaw,
}

impl PropellantConfig {
    /// Creates a propellant configuration with the paraffin regression law.
    ///
    /// A zero oxidizer flow is accepted; such a burn ends at the step limit.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a dimension or the fuel density is not
    /// strictly positive, if the oxidizer flow is negative, or if the outer
    /// radius does not exceed the initial radius.
    pub fn new(
        initial_port_radius: Length,
        outer_port_radius: Length,
        grain_length: Length,
        oxidizer_mass_rate: MassRate,
        fuel_density: MassDensity,
    ) -> Result<Self, ConfigError> {
        let initial_port_radius =
            ConfigError::strictly_positive("initial port radius", initial_port_radius)?;
        let outer_port_radius =
            ConfigError::strictly_positive("outer port radius", outer_port_radius)?;
        let grain_length = ConfigError::strictly_positive("grain length", grain_length)?;
        let oxidizer_mass_rate =
            ConfigError::non_negative("oxidizer mass rate", oxidizer_mass_rate)?;
        let fuel_density = ConfigError::strictly_positive("fuel density", fuel_density)?;

        if outer_port_radius <= initial_port_radius {
            return Err(ConfigError::PortRadii {
                initial: initial_port_radius,
                outer: outer_port_radius,
            });
        }

        Ok(Self {
            initial_port_radius,
            outer_port_radius,
            grain_length,
            oxidizer_mass_rate,
            fuel_density,
            regression_law: RegressionLaw::paraffin(),
        })
    }

    /// Replaces the regression law.
    #[must_use]
    pub fn with_regression_law(self, regression_law: RegressionLaw) -> Self {
        Self {
            regression_law,
            ..self
        }
    }

    #[must_use]
    pub fn initial_port_radius(&self) -> Length {
        self.initial_port_radius
    }

    #[must_use]
    pub fn outer_port_radius(&self) -> Length {
        self.outer_port_radius
    }

    #[must_use]
    pub fn grain_length(&self) -> Length {
        self.grain_length
    }

    #[must_use]
    pub fn oxidizer_mass_rate(&self) -> MassRate {
        self.oxidizer_mass_rate
    }

    #[must_use]
    pub fn fuel_density(&self) -> MassDensity {
        self.fuel_density
    }

    #[must_use]
    pub fn regression_law(&self) -> RegressionLaw {
        self.regression_law
    }

    /// Fuel mass cast between the initial and outer port radii.
    #[must_use]
    pub fn fuel_mass(&self) -> Mass {
        grain_mass(
            self.initial_port_radius,
            self.outer_port_radius,
            self.grain_length,
            self.fuel_density,
        )
    }
}

/// Time stepping of the burn loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurnConfig {
    time_step: Time,
    max_steps: usize,
}

impl BurnConfig {
    /// Creates a time-stepping configuration.
    ///
    /// `max_steps` bounds every run, including runs that would otherwise
    /// never reach depletion or burnout.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the time step or step limit is not
    /// strictly positive.
    pub fn new(time_step: Time, max_steps: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            time_step: ConfigError::strictly_positive("time step", time_step)?,
            max_steps: ConfigError::strictly_positive("step limit", max_steps)?,
        })
    }

    #[must_use]
    pub fn time_step(&self) -> Time {
        self.time_step
    }

    #[must_use]
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }
}

/// One millisecond steps with a guard of one million steps.
///
/// Every step keeps a [`BurnSample`], so a run that never depletes or burns
/// out (zero oxidizer flow, for example) holds a million samples, on the
/// order of 100 MB, before the guard fires. Pass a smaller `max_steps` to
/// [`BurnConfig::new`] for such runs.
///
/// [`BurnSample`]: super::BurnSample
impl Default for BurnConfig {
    fn default() -> Self {
        Self {
            time_step: Time::new::<millisecond>(1.0),
            max_steps: 1_000_000,
        }
    }
}

/// Oxidizer available to a burn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OxidizerSupply {
    /// No oxidizer budget; the burn ends at grain burnout.
    Unbounded,

    /// A finite oxidizer mass, usually from [`TankConfig::oxidizer_supply`].
    ///
    /// [`TankConfig::oxidizer_supply`]: super::TankConfig::oxidizer_supply
    Limited(Mass),
}

impl OxidizerSupply {
    /// Creates a finite oxidizer budget.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `mass` is negative or `NaN`.
    pub fn limited(mass: Mass) -> Result<Self, ConfigError> {
        Ok(Self::Limited(ConfigError::non_negative("oxidizer supply", mass)?))
    }

    /// Consumed oxidizer mass at which the burn ends, if any.
    ///
    /// A negative or `NaN` budget counts as no oxidizer, so the burn ends
    /// after its first step.
    #[must_use]
    pub fn depletion_threshold(&self) -> Option<Mass> {
        match self {
            Self::Unbounded => None,
            Self::Limited(mass) if *mass >= Mass::ZERO => Some(OXIDIZER_DEPLETION_FRACTION * *mass),
            Self::Limited(_) => Some(Mass::ZERO),
        }
    }
}

/// Physics used to turn mass flow into chamber pressure and thrust.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimulationMode {
    /// Fixed chamber pressure and exhaust velocity.
    LegacyConstant,

    /// Chamber pressure solved from choked flow through the throat.
    ChokedFlow(ChokedFlowConfig),
}

impl SimulationMode {
    /// Chamber pressure used by [`SimulationMode::LegacyConstant`].
    #[must_use]
    pub fn legacy_chamber_pressure() -> Pressure {
        Pressure::new::<bar>(LEGACY_CHAMBER_PRESSURE)
    }

    /// Exhaust velocity used by [`SimulationMode::LegacyConstant`].
    #[must_use]
    pub fn legacy_exhaust_velocity() -> Velocity {
        Velocity::new::<meter_per_second>(LEGACY_EXHAUST_VELOCITY)
    }
}

/// Nozzle and exhaust parameters for choked-flow burns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChokedFlowConfig {
    throat_area: Area,
    gas: CombustionGas,
    ambient_pressure: Pressure,
    nozzle_exit: Option<NozzleExit>,
}

impl ChokedFlowConfig {
    /// Creates a choked-flow configuration expanding to ambient pressure.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the throat diameter is not strictly positive.
    pub fn new(throat_diameter: Length, gas: CombustionGas) -> Result<Self, ConfigError> {
        let throat_diameter = ConfigError::strictly_positive("throat diameter", throat_diameter)?;

        Ok(Self {
            throat_area: circle_area(throat_diameter),
            gas,
            ambient_pressure: Pressure::new::<pascal>(AMBIENT_PRESSURE),
            nozzle_exit: None,
        })
    }

    /// Replaces the ambient pressure.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the pressure is not strictly positive.
    pub fn with_ambient_pressure(self, ambient_pressure: Pressure) -> Result<Self, ConfigError> {
        Ok(Self {
            ambient_pressure: ConfigError::strictly_positive("ambient pressure", ambient_pressure)?,
            ..self
        })
    }

    /// Adds a diverging section ending at `exit_diameter`.
    ///
    /// The exit pressure ratio is solved here, once per configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the exit diameter is not strictly positive
    /// or the nozzle exit cannot be solved.
    pub fn with_exit_diameter(self, exit_diameter: Length) -> Result<Self, ConfigError> {
        let exit_diameter = ConfigError::strictly_positive("exit diameter", exit_diameter)?;
        let exit = NozzleExit::new(self.throat_area, circle_area(exit_diameter), &self.gas)?;

        Ok(Self {
            nozzle_exit: Some(exit),
            ..self
        })
    }

    #[must_use]
    pub fn throat_area(&self) -> Area {
        self.throat_area
    }

    #[must_use]
    pub fn gas(&self) -> &CombustionGas {
        &self.gas
    }

    #[must_use]
    pub fn ambient_pressure(&self) -> Pressure {
        self.ambient_pressure
    }

    #[must_use]
    pub fn nozzle_exit(&self) -> Option<&NozzleExit> {
        self.nozzle_exit.as_ref()
    }

    /// Exit plane area, zero without a diverging section.
    #[must_use]
    pub fn exit_area(&self) -> Area {
        self.nozzle_exit.map_or(Area::ZERO, |exit| exit.exit_area())
    }

    /// Pressure the exhaust expands to at chamber pressure `chamber`.
    ///
    /// Without a diverging section, or when the chamber cannot push the
    /// flow past ambient, this is the ambient pressure.
    #[must_use]
    pub fn exit_pressure(&self, chamber: Pressure) -> Pressure {
        match self.nozzle_exit {
            Some(exit) if chamber > self.ambient_pressure => exit.exit_pressure(chamber),
            _ => self.ambient_pressure,
        }
    }
}

impl Default for ChokedFlowConfig {
    fn default() -> Self {
        Self {
            throat_area: circle_area(Length::new::<millimeter>(DEFAULT_THROAT_DIAMETER)),
            gas: CombustionGas::nitrous_paraffin(),
            ambient_pressure: Pressure::new::<pascal>(AMBIENT_PRESSURE),
            nozzle_exit: None,
        }
    }
}

/// Everything one burn needs besides the shared property tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorInput {
    pub propellant: PropellantConfig,
    pub mode: SimulationMode,
    pub supply: OxidizerSupply,
}

fn circle_area(diameter: Length) -> Area {
    PI * diameter * diameter / 4.0
}
