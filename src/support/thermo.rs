//! Pure-component property correlations and mixture bookkeeping.
//!
//! - [`Antoine`]: saturation vapor pressure as a function of temperature.
//! - [`Component`] and [`Mixture`]: named components with their correlation
//!   parameters, addressed by typed [`ComponentId`] indices.
//! - [`PerComponent`]: one value per component of a mixture, in mixture order.
//! - [`Composition`]: validated mole fractions that sum to one.

mod antoine;
mod composition;
mod error;
mod mixture;
mod per_component;

pub use antoine::{Antoine, AntoineBasis};
pub use composition::Composition;
pub use error::PropertyError;
pub use mixture::{Component, ComponentId, Mixture, MixtureError};
pub use per_component::PerComponent;
