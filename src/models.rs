//! Burn models exposed as [`twine_core::Model`] implementations.
//!
//! Models are grouped by domain, currently just [`propulsion`].
//! Each one is a thin adapter over its own `core` module, which owns the
//! physics and is re-exported selectively.

pub mod propulsion;
