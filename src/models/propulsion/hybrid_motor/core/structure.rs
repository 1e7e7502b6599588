//! Structural sizing of the motor casing and oxidizer tank.
//!
//! Evaluated once after a burn. Casing and tank walls are sized with the
//! thin-wall allowable pressure
//! `p = σ_y/(2·SF) · t/(r_in + 0.6·t)`, and component masses are built from
//! simple cylinders and disks.

mod material;

pub use material::{Material, MaterialError};

use std::{f64::consts::PI, fmt};

use uom::{
    ConstZero,
    si::{
        acceleration::meter_per_second_squared,
        f64::{Acceleration, Force, Length, Mass, MassDensity, Pressure, Ratio},
        length::{centimeter, millimeter},
        mass_density::kilogram_per_cubic_meter,
        pressure::bar,
    },
};

use super::{
    ConfigError, PropellantConfig, PropertyTables, SimulationResult, TankConfig,
    performance::STANDARD_GRAVITY,
};

/// Peak chamber pressure above which a burn is flagged, bar.
pub const HIGH_CHAMBER_PRESSURE: f64 = 40.0;

/// Density of the graphite nozzle insert, kg/m³.
pub const GRAPHITE_DENSITY: f64 = 1800.0;

/// Geometry and materials of the motor hardware and tank closures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StructuralConfig {
    /// Liner between the grain and the casing.
    pub grain_insulation_thickness: Length,

    /// Liner of the pre- and post-combustion chambers.
    pub chamber_insulation_thickness: Length,

    pub casing_wall_thickness: Length,
    pub casing_material: Material,
    pub casing_safety_factor: f64,

    pub pre_combustion_length: Length,
    pub post_combustion_length: Length,

    pub front_cap_length: Length,
    pub front_cap_material: Material,

    pub retainer_length: Length,
    pub retainer_inner_radius: Length,
    pub retainer_material: Material,

    /// Length of the nozzle section inside the casing.
    pub nozzle_length: Length,

    pub tank_material: Material,
    pub tank_safety_factor: f64,
    pub tank_front_cap_thickness: Length,
    pub tank_front_cap_material: Material,
    pub tank_back_cap_thickness: Length,
    pub tank_back_cap_material: Material,

    /// Axial gap between the motor front cap and the tank back cap.
    pub motor_tank_gap: Length,
}

impl Default for StructuralConfig {
    fn default() -> Self {
        Self {
            grain_insulation_thickness: Length::new::<millimeter>(2.5),
            chamber_insulation_thickness: Length::new::<millimeter>(3.0),
            casing_wall_thickness: Length::new::<millimeter>(3.0),
            casing_material: Material::Ss304,
            casing_safety_factor: 2.0,
            pre_combustion_length: Length::new::<centimeter>(3.0),
            post_combustion_length: Length::new::<centimeter>(3.0),
            front_cap_length: Length::new::<millimeter>(20.0),
            front_cap_material: Material::Ss304,
            retainer_length: Length::new::<millimeter>(10.0),
            retainer_inner_radius: Length::new::<millimeter>(20.0),
            retainer_material: Material::Ss304,
            nozzle_length: Length::new::<centimeter>(5.0),
            tank_material: Material::Ss304,
            tank_safety_factor: 1.5,
            tank_front_cap_thickness: Length::new::<millimeter>(10.0),
            tank_front_cap_material: Material::Ss304,
            tank_back_cap_thickness: Length::new::<millimeter>(10.0),
            tank_back_cap_material: Material::Ss304,
            motor_tank_gap: Length::new::<millimeter>(0.0),
        }
    }
}

/// A condition a reviewer should look at before building the motor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StructuralWarning {
    /// Peak chamber pressure exceeds [`HIGH_CHAMBER_PRESSURE`].
    HighChamberPressure { peak: Pressure },

    /// Chamber pressure fell below the low-pressure threshold during the burn.
    LowChamberPressure,

    /// Peak chamber pressure exceeds the casing design pressure.
    CasingOverpressure { peak: Pressure, design: Pressure },

    /// Oxidizer vapor pressure exceeds the tank design pressure.
    TankOverpressure { vapor: Pressure, design: Pressure },
}

impl StructuralWarning {
    /// Whether the warning means a pressure vessel is under-designed.
    #[must_use]
    pub fn is_overpressure(&self) -> bool {
        matches!(
            self,
            Self::CasingOverpressure { .. } | Self::TankOverpressure { .. }
        )
    }
}

impl fmt::Display for StructuralWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HighChamberPressure { peak } => write!(
                f,
                "peak chamber pressure {:.1} bar exceeds {HIGH_CHAMBER_PRESSURE} bar",
                peak.get::<bar>()
            ),
            Self::LowChamberPressure => f.write_str("chamber pressure dropped below 2 bar"),
            Self::CasingOverpressure { peak, design } => write!(
                f,
                "peak chamber pressure {:.1} bar exceeds casing design pressure {:.1} bar",
                peak.get::<bar>(),
                design.get::<bar>()
            ),
            Self::TankOverpressure { vapor, design } => write!(
                f,
                "oxidizer vapor pressure {:.1} bar exceeds tank design pressure {:.1} bar",
                vapor.get::<bar>(),
                design.get::<bar>()
            ),
        }
    }
}

/// Thin-wall allowable internal pressure of a cylinder.
#[must_use]
pub fn design_pressure(
    material: Material,
    safety_factor: f64,
    wall_thickness: Length,
    inner_radius: Length,
) -> Pressure {
    let allowable_stress = material.yield_strength() / (2.0 * safety_factor);
    allowable_stress * (wall_thickness / (inner_radius + 0.6 * wall_thickness))
}

/// Casing, closure, and tank sizing for a finished burn.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralReport {
    pub casing_inner_diameter: Length,
    pub casing_outer_diameter: Length,
    pub casing_design_pressure: Pressure,

    pub casing_body_mass: Mass,
    pub front_cap_mass: Mass,
    pub retainer_mass: Mass,
    pub nozzle_mass: Mass,

    /// Front cap to nozzle end.
    pub motor_length: Length,

    pub tank_design_pressure: Pressure,
    pub tank_shell_mass: Mass,
    pub tank_cap_mass: Mass,

    /// Oxidizer loaded into the tank.
    pub oxidizer_mass: Mass,

    /// Fuel cast into the grain.
    pub fuel_mass: Mass,

    /// Hardware plus loaded propellant.
    pub total_mass: Mass,
    pub total_weight: Force,

    /// Peak thrust over loaded weight.
    pub thrust_to_weight: Ratio,

    pub peak_chamber_pressure: Pressure,
    pub vapor_pressure: Pressure,

    /// Length of the assembled tank and motor stack.
    pub overall_length: Length,

    pub warnings: Vec<StructuralWarning>,
}

impl StructuralReport {
    /// Sizes the hardware around a finished burn.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a safety factor is not strictly positive.
    pub fn evaluate(
        result: &SimulationResult,
        propellant: &PropellantConfig,
        tank: &TankConfig,
        config: &StructuralConfig,
        tables: &PropertyTables,
    ) -> Result<Self, ConfigError> {
        let casing_sf =
            ConfigError::strictly_positive("casing safety factor", config.casing_safety_factor)?;
        let tank_sf =
            ConfigError::strictly_positive("tank safety factor", config.tank_safety_factor)?;

        // Casing
        let r2 = propellant.outer_port_radius();
        let r_in = larger(
            r2 + config.grain_insulation_thickness,
            r2 + config.chamber_insulation_thickness,
        );
        let t = config.casing_wall_thickness;
        let r_out = r_in + t;
        let casing_design_pressure = design_pressure(config.casing_material, casing_sf, t, r_in);

        let body_length = config.pre_combustion_length
            + propellant.grain_length()
            + config.post_combustion_length
            + config.nozzle_length;
        let casing_body_mass =
            PI * (r_out * r_out - r_in * r_in) * body_length * config.casing_material.density();
        let front_cap_mass =
            PI * r_in * r_in * config.front_cap_length * config.front_cap_material.density();

        let r_ret = config.retainer_inner_radius;
        let retainer_area = PI * (r_in * r_in - r_ret * r_ret);
        let retainer_mass = larger(
            retainer_area * config.retainer_length * config.retainer_material.density(),
            Mass::ZERO,
        );

        let graphite = MassDensity::new::<kilogram_per_cubic_meter>(GRAPHITE_DENSITY);
        let nozzle_mass = 0.5 * PI * r_in * r_in * config.nozzle_length * graphite;

        let motor_length = config.front_cap_length + body_length + config.retainer_length;

        // Tank
        let tank_r_in = tank.inner_diameter() / 2.0;
        let tank_t = tank.wall_thickness();
        let tank_design_pressure =
            design_pressure(config.tank_material, tank_sf, tank_t, tank_r_in);
        let tank_shell_mass =
            PI * tank.outer_diameter() * tank.length() * tank_t * config.tank_material.density();
        let cap_area = PI * tank_r_in * tank_r_in;
        let tank_cap_mass = cap_area
            * (config.tank_front_cap_thickness * config.tank_front_cap_material.density()
                + config.tank_back_cap_thickness * config.tank_back_cap_material.density());

        let oxidizer_mass = tank.oxidizer_mass(tables);
        let fuel_mass = propellant.fuel_mass();
        let vapor_pressure = tank.vapor_pressure(tables);

        let total_mass = casing_body_mass
            + front_cap_mass
            + retainer_mass
            + nozzle_mass
            + tank_shell_mass
            + tank_cap_mass
            + oxidizer_mass
            + fuel_mass;
        let total_weight =
            total_mass * Acceleration::new::<meter_per_second_squared>(STANDARD_GRAVITY);
        let thrust_to_weight = result.peak_thrust() / total_weight;

        let overall_length = config.tank_front_cap_thickness
            + tank.length()
            + config.tank_back_cap_thickness
            + config.motor_tank_gap
            + motor_length;

        let peak_chamber_pressure = result.peak_chamber_pressure();

        let mut warnings = Vec::new();
        if peak_chamber_pressure > Pressure::new::<bar>(HIGH_CHAMBER_PRESSURE) {
            warnings.push(StructuralWarning::HighChamberPressure {
                peak: peak_chamber_pressure,
            });
        }
        if result.low_pressure_warning() {
            warnings.push(StructuralWarning::LowChamberPressure);
        }
        if peak_chamber_pressure > casing_design_pressure {
            warnings.push(StructuralWarning::CasingOverpressure {
                peak: peak_chamber_pressure,
                design: casing_design_pressure,
            });
        }
        if vapor_pressure > tank_design_pressure {
            warnings.push(StructuralWarning::TankOverpressure {
                vapor: vapor_pressure,
                design: tank_design_pressure,
            });
        }

        Ok(Self {
            casing_inner_diameter: 2.0 * r_in,
            casing_outer_diameter: 2.0 * r_out,
            casing_design_pressure,
            casing_body_mass,
            front_cap_mass,
            retainer_mass,
            nozzle_mass,
            motor_length,
            tank_design_pressure,
            tank_shell_mass,
            tank_cap_mass,
            oxidizer_mass,
            fuel_mass,
            total_mass,
            total_weight,
            thrust_to_weight,
            peak_chamber_pressure,
            vapor_pressure,
            overall_length,
            warnings,
        })
    }

    /// Motor hardware mass, excluding propellant.
    #[must_use]
    pub fn motor_structure_mass(&self) -> Mass {
        self.casing_body_mass + self.front_cap_mass + self.retainer_mass + self.nozzle_mass
    }

    /// Empty tank mass.
    #[must_use]
    pub fn tank_mass(&self) -> Mass {
        self.tank_shell_mass + self.tank_cap_mass
    }

    /// Casing design pressure over peak chamber pressure.
    #[must_use]
    pub fn casing_margin(&self) -> Ratio {
        self.casing_design_pressure / self.peak_chamber_pressure
    }

    /// Tank design pressure over oxidizer vapor pressure.
    #[must_use]
    pub fn tank_margin(&self) -> Ratio {
        self.tank_design_pressure / self.vapor_pressure
    }

    /// Whether both pressure vessels hold their operating pressure.
    #[must_use]
    pub fn passes(&self) -> bool {
        !self.warnings.iter().any(StructuralWarning::is_overpressure)
    }
}

fn larger<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}
