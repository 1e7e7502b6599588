//! Problem formulation for the exit pressure ratio solve.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

use super::area_ratio;

/// Exit condition evaluated at one pressure ratio.
#[derive(Debug, Clone, Copy)]
pub(super) struct Expansion {
    pub(super) pressure_ratio: f64,
    pub(super) area_ratio: f64,
}

/// Maps an exit-to-chamber pressure ratio to the isentropic area ratio.
pub(super) struct AreaRatioModel {
    gamma: f64,
}

impl AreaRatioModel {
    pub(super) fn new(gamma: f64) -> Self {
        Self { gamma }
    }
}

impl Model for AreaRatioModel {
    type Input = f64;
    type Output = Expansion;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(Expansion {
            pressure_ratio: *input,
            area_ratio: area_ratio(*input, self.gamma),
        })
    }
}

/// Residual `A/A* − target` over the pressure ratio.
pub(super) struct ExpansionProblem {
    target: f64,
}

impl ExpansionProblem {
    pub(super) fn new(target: f64) -> Self {
        Self { target }
    }
}

impl EquationProblem<1> for ExpansionProblem {
    type Input = f64;
    type Output = Expansion;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.area_ratio - self.target])
    }
}
