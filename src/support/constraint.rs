//! Validated numeric inputs.
//!
//! Motor geometry and flow inputs are only meaningful inside certain ranges.
//! A port radius must be strictly positive, while an oxidizer flow rate may
//! be zero but never negative. [`Constrained<T, C>`] carries a value that has
//! passed the check of marker `C`, so downstream code can rely on the range
//! without re-checking it.
//!
//! Markers:
//!
//! - [`NonNegative`]: zero or greater
//! - [`StrictlyPositive`]: greater than zero
//!
//! `NaN` fails every check.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A range check applied when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] naming the violated bound.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The bound a rejected value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A value that satisfied constraint `C` when it was built.
///
/// # Example
///
/// ```
/// use hybrid_motor_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::centimeter};
///
/// let grain = Constrained::<_, StrictlyPositive>::new(Length::new::<centimeter>(6.0))?;
/// assert_eq!(grain.into_inner(), Length::new::<centimeter>(6.0));
/// # Ok::<(), hybrid_motor_models::support::constraint::ConstraintError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// # Errors
    ///
    /// Returns an error if `value` fails the check of `C`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    pub fn get(&self) -> T
    where
        T: Copy,
    {
        self.value
    }
}
