//! Supporting utilities used by models.
//!
//! - [`constraint`]: Type-level numeric constraints for validated inputs.
//! - [`interpolate`]: Clamped cubic-spline interpolation of tabulated data.
//! - [`thermo`]: Propellant and exhaust property data.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod interpolate;
pub mod thermo;
pub mod units;
