use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Greater than zero.
///
/// ```
/// use hybrid_motor_models::support::constraint::StrictlyPositive;
///
/// let density = StrictlyPositive::new(930.0).unwrap();
/// assert_eq!(density.into_inner(), 930.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-5.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// # Errors
    ///
    /// Returns an error if `value` is not above zero, including `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, Time},
        length::centimeter,
        time::millisecond,
    };

    #[test]
    fn port_radius() {
        let r = StrictlyPositive::new(Length::new::<centimeter>(0.7)).unwrap();
        assert_eq!(r.get(), Length::new::<centimeter>(0.7));

        assert_eq!(
            StrictlyPositive::new(Length::new::<centimeter>(0.0)),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            StrictlyPositive::new(Length::new::<centimeter>(-0.7)),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn time_step() {
        assert!(StrictlyPositive::new(Time::new::<millisecond>(1.0)).is_ok());
        assert!(StrictlyPositive::new(Time::new::<millisecond>(0.0)).is_err());
        assert!(StrictlyPositive::new(Time::new::<millisecond>(f64::NAN)).is_err());
    }
}
