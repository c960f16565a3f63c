//! Isothermal vapor-liquid flash under Raoult's law.
//!
//! A flash splits a feed of known composition into saturated liquid and
//! vapor at a fixed temperature and pressure. The pipeline is:
//!
//! 1. K-values from Antoine vapor pressures, optionally corrected for
//!    non-ideality.
//! 2. The vapor fraction ψ from the Rachford-Rice equation.
//! 3. Phase compositions at ψ.
//! 4. Product flows and a material balance check.
//!
//! Each step is exposed on its own so callers can inspect intermediates.

mod balance;
mod compositions;
mod config;
mod error;
mod input;
mod k_values;
mod results;
mod vapor_fraction;

#[cfg(test)]
pub(super) mod test_support;

pub use balance::{MaterialBalance, verify_material_balance};
pub use compositions::{PhaseCompositions, compute_phase_compositions};
pub use config::FlashConfig;
pub use error::{CoefficientKind, DomainError, FlashError};
pub use input::{DEFAULT_FEED_FLOW, FlashInput};
pub use k_values::{
    PhaseCorrections, compute_k_values, compute_k_values_with, compute_vapor_pressure,
};
pub use results::FlashResult;
pub use vapor_fraction::{PhaseRegion, VaporFraction, rachford_rice_residual, solve_vapor_fraction};

use log::debug;

use crate::support::thermo::{Mixture, MixtureError};

use balance::check_feed_flow;

/// Flashes `input.feed` at the input temperature and pressure.
///
/// All inputs are validated before the vapor fraction solve starts.
///
/// # Errors
///
/// Returns [`FlashError::Domain`] for physically invalid input and
/// [`FlashError::MaxIters`] if the vapor fraction does not converge.
pub fn flash(
    mixture: &Mixture,
    input: &FlashInput,
    config: &FlashConfig,
) -> Result<FlashResult, FlashError> {
    let feed_flow = check_feed_flow(input.feed_flow)?;

    if input.feed.len() != mixture.len() {
        return Err(MixtureError::LengthMismatch {
            expected: mixture.len(),
            actual: input.feed.len(),
        }
        .into());
    }

    let k_values = match &input.corrections {
        Some(corrections) => {
            compute_k_values_with(mixture, input.temperature, input.pressure, corrections)?
        }
        None => compute_k_values(mixture, input.temperature, input.pressure)?,
    };

    let vapor_fraction = solve_vapor_fraction(&input.feed, &k_values, config)?;
    let PhaseCompositions { liquid, vapor } =
        compute_phase_compositions(&input.feed, &k_values, &vapor_fraction)?;
    let balance =
        verify_material_balance(&input.feed, vapor_fraction.value(), &liquid, &vapor, feed_flow)?;

    debug!(
        "flash: {:?}, vapor fraction {:.6}, {} iterations, max component error {:e}",
        vapor_fraction.region(),
        vapor_fraction.value(),
        vapor_fraction.iters(),
        balance.max_component_error(),
    );

    Ok(FlashResult {
        temperature: input.temperature,
        pressure: input.pressure,
        region: vapor_fraction.region(),
        vapor_fraction: vapor_fraction.value(),
        iters: vapor_fraction.iters(),
        k_values,
        liquid,
        vapor,
        balance,
    })
}
