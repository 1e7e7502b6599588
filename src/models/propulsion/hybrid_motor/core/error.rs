use num_traits::Zero;
use thiserror::Error;
use uom::si::f64::{Length, ThermodynamicTemperature};

use crate::support::constraint::{Constrained, ConstraintError, NonNegative, StrictlyPositive};

use super::nozzle::NozzleError;

/// Errors raised while building a motor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A named parameter is outside its physical range.
    #[error("invalid {name}: {source}")]
    InvalidParameter {
        /// Parameter name as it appears in the configuration.
        name: &'static str,

        /// The violated constraint.
        #[source]
        source: ConstraintError,
    },

    /// The outer port radius does not exceed the initial port radius.
    #[error("outer port radius {outer:?} must exceed initial port radius {initial:?}")]
    PortRadii {
        /// Initial port radius.
        initial: Length,

        /// Outer (burnout) port radius.
        outer: Length,
    },

    /// The tank wall leaves no inner volume.
    #[error("tank wall thickness {wall:?} consumes outer diameter {outer:?}")]
    TankWall {
        /// Tank outer diameter.
        outer: Length,

        /// Tank wall thickness.
        wall: Length,
    },

    /// The tank temperature is not a finite absolute temperature.
    #[error("tank temperature {temperature:?} must be finite and above absolute zero")]
    TankTemperature {
        /// The rejected temperature.
        temperature: ThermodynamicTemperature,
    },

    /// The nozzle exit condition could not be solved.
    #[error("nozzle exit solve failed")]
    Nozzle(#[from] NozzleError),
}

impl ConfigError {
    /// Validates that `value` is strictly positive.
    pub(super) fn strictly_positive<T>(name: &'static str, value: T) -> Result<T, Self>
    where
        T: PartialOrd + Zero,
    {
        StrictlyPositive::new(value)
            .map(Constrained::into_inner)
            .map_err(|source| Self::InvalidParameter { name, source })
    }

    /// Validates that `value` is zero or greater.
    pub(super) fn non_negative<T>(name: &'static str, value: T) -> Result<T, Self>
    where
        T: PartialOrd + Zero,
    {
        NonNegative::new(value)
            .map(Constrained::into_inner)
            .map_err(|source| Self::InvalidParameter { name, source })
    }
}
