use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::thermo::Composition;

use super::PhaseCorrections;

/// Feed flow used when none is given, in arbitrary molar units.
pub const DEFAULT_FEED_FLOW: f64 = 100.0;

/// Conditions and feed for an isothermal flash.
#[derive(Debug, Clone, PartialEq)]
pub struct FlashInput {
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,

    /// Feed mole fractions, in mixture order.
    pub feed: Composition,

    /// Total feed flow on any consistent molar basis.
    pub feed_flow: f64,

    /// Non-ideal corrections; `None` means Raoult's law.
    pub corrections: Option<PhaseCorrections>,
}

impl FlashInput {
    /// Ideal flash of [`DEFAULT_FEED_FLOW`] units of `feed`.
    #[must_use]
    pub fn new(
        temperature: ThermodynamicTemperature,
        pressure: Pressure,
        feed: Composition,
    ) -> Self {
        Self {
            temperature,
            pressure,
            feed,
            feed_flow: DEFAULT_FEED_FLOW,
            corrections: None,
        }
    }

    #[must_use]
    pub fn with_feed_flow(self, feed_flow: f64) -> Self {
        Self { feed_flow, ..self }
    }

    #[must_use]
    pub fn with_corrections(self, corrections: PhaseCorrections) -> Self {
        Self {
            corrections: Some(corrections),
            ..self
        }
    }
}
