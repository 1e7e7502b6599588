//! Choked-flow chamber pressure.
//!
//! With the throat sonic, the mass flow through the nozzle is
//! `ṁ = p_c·A_t·Γ` where
//! `Γ = √(γ/(R·T_c))·(2/(γ+1))^((γ+1)/(2(γ−1)))`.
//! The relation is linear in `p_c` and is inverted by division.

use uom::{
    ConstZero,
    si::{
        f64::{Area, MassRate, Pressure, ThermodynamicTemperature, Velocity},
        area::square_meter,
        mass_rate::kilogram_per_second,
        pressure::pascal,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::thermo::CombustionGas;

/// Returns the choked mass flow per unit throat area and chamber pressure, s/m.
#[must_use]
pub fn choked_flow_factor(
    gas: &CombustionGas,
    chamber_temperature: ThermodynamicTemperature,
) -> f64 {
    let gamma = gas.gamma();
    let r = gas.gas_constant().get::<joule_per_kilogram_kelvin>();
    let t = chamber_temperature.get::<kelvin>();

    let exponent = (gamma + 1.0) / (2.0 * (gamma - 1.0));
    (gamma / (r * t)).sqrt() * (2.0 / (gamma + 1.0)).powf(exponent)
}

/// Solves the chamber pressure that chokes `m_dot` through `throat_area`.
///
/// Falls back to `ambient` when the flow factor is zero or not finite.
#[must_use]
pub fn chamber_pressure(
    m_dot: MassRate,
    throat_area: Area,
    gas: &CombustionGas,
    chamber_temperature: ThermodynamicTemperature,
    ambient: Pressure,
) -> Pressure {
    let factor = choked_flow_factor(gas, chamber_temperature);
    let denominator = throat_area.get::<square_meter>() * factor;

    if !denominator.is_finite() || denominator <= 0.0 {
        return ambient;
    }

    Pressure::new::<pascal>(m_dot.get::<kilogram_per_second>() / denominator)
}

/// Characteristic velocity `c* = p_c·A_t/ṁ`, zero without flow.
#[must_use]
pub fn characteristic_velocity(
    chamber_pressure: Pressure,
    throat_area: Area,
    m_dot: MassRate,
) -> Velocity {
    if m_dot <= MassRate::ZERO {
        return Velocity::ZERO;
    }
    chamber_pressure * throat_area / m_dot
}
