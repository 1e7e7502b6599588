use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Zero or greater.
///
/// ```
/// use hybrid_motor_models::support::constraint::NonNegative;
/// use uom::si::{f64::MassRate, mass_rate::gram_per_second};
///
/// // A shut oxidizer valve is a valid flow rate.
/// assert!(NonNegative::new(MassRate::new::<gram_per_second>(0.0)).is_ok());
/// assert!(NonNegative::new(MassRate::new::<gram_per_second>(-1.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonNegative;

impl NonNegative {
    /// # Errors
    ///
    /// Returns an error if `value` is negative or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            Some(_) => Ok(()),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::millimeter};

    #[test]
    fn insulation_thickness_may_be_zero() {
        assert!(NonNegative::new(Length::new::<millimeter>(0.0)).is_ok());
        assert!(NonNegative::new(Length::new::<millimeter>(2.5)).is_ok());
        assert_eq!(
            NonNegative::new(Length::new::<millimeter>(-0.1)),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn rejects_nan() {
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
