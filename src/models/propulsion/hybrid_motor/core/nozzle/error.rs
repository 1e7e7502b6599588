use thiserror::Error;
use twine_solvers::equation::bisection;

/// Errors that can occur while solving the nozzle exit pressure ratio.
#[derive(Debug, Error)]
pub enum NozzleError {
    /// The exit is narrower than the throat.
    #[error("expansion ratio must be at least 1: ratio={ratio}")]
    ExpansionRatio {
        /// Exit-to-throat area ratio.
        ratio: f64,
    },

    /// The exhaust gas has `γ = 1` and no isentropic expansion.
    #[error("exhaust gas with a heat capacity ratio of 1 cannot expand isentropically")]
    DegenerateGas,

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual}")]
    MaxIters {
        /// Best area ratio residual achieved.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
