//! Separation process models.
//!
//! This module contains models for equilibrium-stage separations such as
//! flash drums.

pub mod flash;
