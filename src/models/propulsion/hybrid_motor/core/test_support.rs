use uom::si::{
    f64::{Length, MassDensity, MassRate, ThermodynamicTemperature},
    length::{centimeter, millimeter},
    mass_density::kilogram_per_cubic_meter,
    mass_rate::gram_per_second,
    thermodynamic_temperature::degree_celsius,
};

use super::{
    ChokedFlowConfig, MotorInput, OxidizerSupply, PropellantConfig, PropertyTables,
    SimulationMode, TankConfig,
};

pub(super) fn tables() -> PropertyTables {
    PropertyTables::nitrous_paraffin().unwrap()
}

/// 10 cm tank, 3.5 mm wall, 30 cm long, at 25 °C.
pub(super) fn tank() -> TankConfig {
    TankConfig::new(
        Length::new::<centimeter>(10.0),
        Length::new::<millimeter>(3.5),
        Length::new::<centimeter>(30.0),
        ThermodynamicTemperature::new::<degree_celsius>(25.0),
    )
    .unwrap()
}

pub(super) fn paraffin_density() -> MassDensity {
    MassDensity::new::<kilogram_per_cubic_meter>(930.0)
}

/// A 0.7 cm to 1.9 cm paraffin grain, 6 cm long.
pub(super) fn propellant(oxidizer_g_per_s: f64) -> PropellantConfig {
    PropellantConfig::new(
        Length::new::<centimeter>(0.7),
        Length::new::<centimeter>(1.9),
        Length::new::<centimeter>(6.0),
        MassRate::new::<gram_per_second>(oxidizer_g_per_s),
        paraffin_density(),
    )
    .unwrap()
}

pub(super) fn legacy_input(oxidizer_g_per_s: f64) -> MotorInput {
    MotorInput {
        propellant: propellant(oxidizer_g_per_s),
        mode: SimulationMode::LegacyConstant,
        supply: OxidizerSupply::Unbounded,
    }
}

pub(super) fn choked_input(oxidizer_g_per_s: f64, supply: OxidizerSupply) -> MotorInput {
    MotorInput {
        propellant: propellant(oxidizer_g_per_s),
        mode: SimulationMode::ChokedFlow(ChokedFlowConfig::default()),
        supply,
    }
}
