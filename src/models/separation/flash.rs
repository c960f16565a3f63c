//! Isothermal flash drum model.
//!
//! [`IsothermalFlash`] is the [`twine_core::Model`] adapter. The computation
//! lives in the internal `core` module, whose pipeline steps are re-exported
//! here for callers that want intermediate results.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_flash::models::separation::flash::{FlashInput, IsothermalFlash, PhaseRegion};
//! use twine_flash::support::thermo::{Antoine, Component, Composition, Mixture};
//! use uom::si::{
//!     f64::{Pressure, ThermodynamicTemperature},
//!     pressure::millimeter_of_mercury,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! let mixture = Mixture::new(vec![
//!     Component::new("benzene", Antoine::new(6.90565, 1211.033, 220.79).unwrap()),
//!     Component::new("toluene", Antoine::new(6.95464, 1344.8, 219.482).unwrap()),
//! ])
//! .unwrap();
//! let feed = Composition::new(&mixture, vec![0.4, 0.6]).unwrap();
//!
//! let drum = IsothermalFlash::new(mixture);
//! let result = drum
//!     .call(&FlashInput::new(
//!         ThermodynamicTemperature::new::<degree_celsius>(100.0),
//!         Pressure::new::<millimeter_of_mercury>(760.0),
//!         feed,
//!     ))
//!     .unwrap();
//!
//! assert_eq!(result.region, PhaseRegion::TwoPhase);
//! assert!((result.vapor_fraction - 0.72).abs() < 0.01);
//! ```

pub(crate) mod core;

pub use self::core::{
    CoefficientKind, DEFAULT_FEED_FLOW, DomainError, FlashConfig, FlashError, FlashInput,
    FlashResult, MaterialBalance, PhaseCompositions, PhaseCorrections, PhaseRegion, VaporFraction,
    compute_k_values, compute_k_values_with, compute_phase_compositions, compute_vapor_pressure,
    flash, rachford_rice_residual, solve_vapor_fraction, verify_material_balance,
};

use twine_core::Model;

use crate::support::thermo::Mixture;

/// A flash drum holding a fixed mixture at a chosen solver configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct IsothermalFlash {
    mixture: Mixture,
    config: FlashConfig,
}

impl IsothermalFlash {
    /// Creates a drum for `mixture` with the default solver configuration.
    #[must_use]
    pub fn new(mixture: Mixture) -> Self {
        Self::with_config(mixture, FlashConfig::default())
    }

    #[must_use]
    pub fn with_config(mixture: Mixture, config: FlashConfig) -> Self {
        Self { mixture, config }
    }

    #[must_use]
    pub fn mixture(&self) -> &Mixture {
        &self.mixture
    }

    #[must_use]
    pub fn config(&self) -> &FlashConfig {
        &self.config
    }
}

impl Model for IsothermalFlash {
    type Input = FlashInput;
    type Output = FlashResult;
    type Error = FlashError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        flash(&self.mixture, input, &self.config)
    }
}
