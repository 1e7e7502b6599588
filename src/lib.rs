//! # Hybrid Motor Models
//!
//! Transient burn models for hybrid rocket motors, built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! A hybrid motor feeds liquid oxidizer through the port of a solid fuel grain.
//! As the grain regresses the port opens up, so oxidizer flux, mixture ratio,
//! chamber pressure, and thrust all drift over the burn.
//! The models here march that burn forward in fixed time steps until the
//! oxidizer budget or the fuel grain is exhausted.
//!
//! ## Crate layout
//!
//! - [`models`]: the [`twine_core::Model`] adapters, grouped by domain.
//! - [`support`]: property data, interpolation, unit aliases, and input
//!   validation shared by the models.
//!
//! The `support` modules are public so callers can build their own property
//! tables, but their APIs may change between minor versions.
//! Each model keeps its computation in an internal `core` module and
//! re-exports what callers need.

pub mod models;
pub mod support;
