//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., length, pressure, mass rate).
//! This module provides quantity aliases that motor modeling needs but [`uom`]
//! does not name directly.
//!
//! ## Mass flux
//!
//! The oxidizer mass flux through a fuel port is a mass rate per unit area.
//! It can be formed directly from [`uom`] arithmetic:
//!
//! ```
//! use std::f64::consts::PI;
//!
//! use hybrid_motor_models::support::units::MassFlux;
//! use uom::si::{
//!     f64::{Area, MassRate},
//!     area::square_meter,
//!     mass_rate::kilogram_per_second,
//! };
//!
//! let m_dot = MassRate::new::<kilogram_per_second>(0.047);
//! let port = Area::new::<square_meter>(PI * 0.007 * 0.007);
//! let flux: MassFlux = m_dot / port;
//! assert!(flux.value > 300.0);
//! ```

mod quantities;

pub use quantities::{MassFlux, SpecificGasConstant};
