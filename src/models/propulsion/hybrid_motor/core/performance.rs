//! Exhaust velocity, thrust, and specific impulse.

use uom::{
    ConstZero,
    si::{
        acceleration::meter_per_second_squared,
        f64::{
            Acceleration, Area, Force, MassRate, Pressure, ThermodynamicTemperature, Time,
            Velocity,
        },
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermodynamic_temperature::kelvin,
        velocity::meter_per_second,
    },
};

use crate::support::thermo::CombustionGas;

/// Standard gravity, m/s².
pub const STANDARD_GRAVITY: f64 = 9.80665;

/// Isentropic exhaust velocity for expansion from `chamber` to `exit` pressure.
///
/// Returns zero when the chamber pressure does not exceed the exit pressure
/// or when `γ = 1`.
#[must_use]
pub fn exhaust_velocity(
    gas: &CombustionGas,
    chamber_temperature: ThermodynamicTemperature,
    chamber: Pressure,
    exit: Pressure,
) -> Velocity {
    let gamma = gas.gamma();
    if chamber <= exit || gamma - 1.0 == 0.0 {
        return Velocity::ZERO;
    }

    let r = gas.gas_constant().get::<joule_per_kilogram_kelvin>();
    let t = chamber_temperature.get::<kelvin>();
    let pressure_ratio = (exit / chamber).value;

    let expansion = 1.0 - pressure_ratio.powf((gamma - 1.0) / gamma);
    let v_squared = 2.0 * gamma / (gamma - 1.0) * r * t * expansion;

    Velocity::new::<meter_per_second>(v_squared.max(0.0).sqrt())
}

/// Momentum thrust plus the exit-plane pressure term `A_e·(p_e − p_amb)`.
///
/// A zero `exit_area` drops the pressure term.
#[must_use]
pub fn thrust(
    m_dot: MassRate,
    exhaust_velocity: Velocity,
    exit_area: Area,
    exit_pressure: Pressure,
    ambient: Pressure,
) -> Force {
    m_dot * exhaust_velocity + exit_area * (exit_pressure - ambient)
}

/// Specific impulse `F/(ṁ·g₀)`, zero without flow.
#[must_use]
pub fn specific_impulse(thrust: Force, m_dot: MassRate) -> Time {
    if m_dot <= MassRate::ZERO {
        return Time::ZERO;
    }
    let g0 = Acceleration::new::<meter_per_second_squared>(STANDARD_GRAVITY);
    thrust / (m_dot * g0)
}
