//! Material balance closure for a flash.

use crate::support::{
    constraint::{NonNegative, UnitInterval},
    thermo::{Composition, MixtureError, PerComponent},
};

use super::DomainError;

/// Stream flows and balance residuals for a flashed feed.
///
/// Flows share the feed flow's unit (any consistent molar basis).
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialBalance {
    /// Vapor product flow `V = ψ·F`.
    pub vapor_flow: f64,

    /// Liquid product flow `L = F − V`.
    pub liquid_flow: f64,

    /// Overall residual `|F − V − L|`.
    pub overall_error: f64,

    /// Component residuals `|F·zᵢ − V·yᵢ − L·xᵢ|`.
    pub component_errors: PerComponent<f64>,
}

impl MaterialBalance {
    /// Largest component residual.
    #[must_use]
    pub fn max_component_error(&self) -> f64 {
        self.component_errors
            .values()
            .iter()
            .copied()
            .fold(0.0, f64::max)
    }

    /// Whether every residual is within `tolerance` relative to the feed flow.
    ///
    /// A zero feed flow closes trivially.
    #[must_use]
    pub fn is_closed(&self, tolerance: f64) -> bool {
        let feed_flow = self.vapor_flow + self.liquid_flow;
        let scale = if feed_flow > 0.0 { feed_flow } else { 1.0 };
        self.overall_error.max(self.max_component_error()) <= tolerance * scale
    }
}

/// Splits `feed_flow` at `vapor_fraction` and reports how well the phase
/// compositions close the balance.
///
/// # Errors
///
/// - [`DomainError::VaporFraction`] if `vapor_fraction` is outside `[0, 1]`.
/// - [`DomainError::FeedFlow`] if `feed_flow` is negative or not finite.
/// - [`DomainError::Mixture`] if a composition has the wrong length.
pub fn verify_material_balance(
    feed: &Composition,
    vapor_fraction: f64,
    liquid: &PerComponent<f64>,
    vapor: &PerComponent<f64>,
    feed_flow: f64,
) -> Result<MaterialBalance, DomainError> {
    let psi = UnitInterval::new(vapor_fraction)
        .map_err(|source| DomainError::VaporFraction {
            value: vapor_fraction,
            source,
        })?
        .into_inner();
    let feed_flow = check_feed_flow(feed_flow)?;

    for phase in [liquid, vapor] {
        if phase.len() != feed.len() {
            return Err(MixtureError::LengthMismatch {
                expected: feed.len(),
                actual: phase.len(),
            }
            .into());
        }
    }

    let vapor_flow = psi * feed_flow;
    let liquid_flow = feed_flow - vapor_flow;

    let component_errors =
        liquid.map(|id, x| (feed_flow * feed[id] - vapor_flow * vapor[id] - liquid_flow * x).abs());

    Ok(MaterialBalance {
        vapor_flow,
        liquid_flow,
        overall_error: (feed_flow - vapor_flow - liquid_flow).abs(),
        component_errors,
    })
}

/// Validates a feed flow as non-negative and finite.
pub(super) fn check_feed_flow(flow: f64) -> Result<f64, DomainError> {
    match NonNegative::new(flow) {
        Ok(flow) if flow.as_ref().is_finite() => Ok(flow.into_inner()),
        _ => Err(DomainError::FeedFlow { flow }),
    }
}
