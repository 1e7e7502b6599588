//! Propulsion models.
//!
//! This module contains models for rocket propulsion systems, starting with
//! the transient burn of a hybrid rocket motor.

pub mod hybrid_motor;
