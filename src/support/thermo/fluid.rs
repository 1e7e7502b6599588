//! Tabulated fluid property models.
//!
//! A fluid type owns the interpolants for its tabulated properties and exposes
//! them through [`uom`] quantities.

mod nitrous_oxide;

pub use nitrous_oxide::NitrousOxide;
