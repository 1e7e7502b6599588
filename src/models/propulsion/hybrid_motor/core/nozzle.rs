//! Nozzle exit conditions for a fixed expansion ratio.
//!
//! For isentropic flow choked at the throat, the exit-to-throat area ratio
//! fixes the exit-to-chamber pressure ratio on the supersonic branch.
//! That ratio is solved once by bisection; every step then scales it by the
//! current chamber pressure.

mod error;
mod problem;

pub use error::NozzleError;

use twine_solvers::equation::bisection;
use uom::si::f64::{Area, Pressure};

use crate::support::thermo::CombustionGas;

use problem::{AreaRatioModel, ExpansionProblem};

/// Lowest exit-to-chamber pressure ratio searched.
const MIN_PRESSURE_RATIO: f64 = 1e-9;

/// Returns the pressure ratio `p*/p_c` at a sonic throat.
#[must_use]
pub fn critical_pressure_ratio(gamma: f64) -> f64 {
    (2.0 / (gamma + 1.0)).powf(gamma / (gamma - 1.0))
}

/// Returns the isentropic area ratio `A/A*` at pressure ratio `p/p_c`.
///
/// Valid for pressure ratios in `(0, 1)` and `γ > 1`.
#[must_use]
pub fn area_ratio(pressure_ratio: f64, gamma: f64) -> f64 {
    let choked = (2.0 / (gamma + 1.0)).powf((gamma + 1.0) / (2.0 * (gamma - 1.0)));
    let flow = pressure_ratio.powf(1.0 / gamma)
        * (2.0 / (gamma - 1.0) * (1.0 - pressure_ratio.powf((gamma - 1.0) / gamma))).sqrt();
    choked / flow
}

/// Exit plane of a converging-diverging nozzle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleExit {
    exit_area: Area,
    expansion_ratio: f64,
    pressure_ratio: f64,
}

impl NozzleExit {
    /// Solves the exit pressure ratio for a nozzle expanding `throat_area`
    /// to `exit_area`.
    ///
    /// # Errors
    ///
    /// Returns a [`NozzleError`] if the exit is narrower than the throat,
    /// if the gas has `γ = 1`, or if the bisection solve fails.
    pub fn new(
        throat_area: Area,
        exit_area: Area,
        gas: &CombustionGas,
    ) -> Result<Self, NozzleError> {
        let gamma = gas.gamma();
        if gamma - 1.0 == 0.0 {
            return Err(NozzleError::DegenerateGas);
        }

        let expansion_ratio = (exit_area / throat_area).value;
        if expansion_ratio.is_nan() || expansion_ratio < 1.0 {
            return Err(NozzleError::ExpansionRatio {
                ratio: expansion_ratio,
            });
        }

        let critical = critical_pressure_ratio(gamma);
        let pressure_ratio = if expansion_ratio == 1.0 {
            critical
        } else {
            solve_pressure_ratio(expansion_ratio, gamma, critical)?
        };

        Ok(Self {
            exit_area,
            expansion_ratio,
            pressure_ratio,
        })
    }

    #[must_use]
    pub fn exit_area(&self) -> Area {
        self.exit_area
    }

    /// Exit-to-throat area ratio.
    #[must_use]
    pub fn expansion_ratio(&self) -> f64 {
        self.expansion_ratio
    }

    /// Exit-to-chamber pressure ratio.
    #[must_use]
    pub fn pressure_ratio(&self) -> f64 {
        self.pressure_ratio
    }

    /// Returns the exit pressure for chamber pressure `chamber`.
    #[must_use]
    pub fn exit_pressure(&self, chamber: Pressure) -> Pressure {
        chamber * self.pressure_ratio
    }
}

fn solve_pressure_ratio(
    expansion_ratio: f64,
    gamma: f64,
    critical: f64,
) -> Result<f64, NozzleError> {
    let model = AreaRatioModel::new(gamma);
    let problem = ExpansionProblem::new(expansion_ratio);

    let config = bisection::Config {
        max_iters: 100,
        x_abs_tol: 1e-15,
        x_rel_tol: 1e-12,
        residual_tol: 1e-12,
    };

    let solution = bisection::solve(
        &model,
        &problem,
        [MIN_PRESSURE_RATIO, critical],
        &config,
        |_event: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(NozzleError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    Ok(solution.snapshot.output.pressure_ratio)
}
