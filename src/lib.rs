//! # Twine Flash
//!
//! Isothermal vapor-liquid flash calculations for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a mixture, a feed composition, a temperature and a pressure, the
//! flash model computes equilibrium K-values from Antoine vapor pressures,
//! solves the Rachford-Rice equation for the vapor fraction, and reports the
//! liquid and vapor compositions along with a material balance check.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger.
//! Phase classification and solver progress are emitted at `debug` level;
//! convergence failures at `warn` level.

pub mod models;
pub mod support;
