//! Vapor fraction from the Rachford-Rice equation.
//!
//! For feed mole fractions `zᵢ` and K-values `Kᵢ`, the vapor fraction ψ solves
//!
//! ```text
//! f(ψ) = Σ zᵢ(Kᵢ − 1) / (1 + ψ(Kᵢ − 1)) = 0
//! ```
//!
//! With positive K-values every denominator is positive on `[0, 1]`, so `f`
//! is continuous and strictly decreasing there. The sign of `f` at the bounds
//! classifies the feed before any iteration:
//!
//! - `f(0) ≤ 0`: at or below the bubble point, all liquid (ψ = 0).
//! - `f(1) ≥ 0`: at or above the dew point, all vapor (ψ = 1).
//! - otherwise a single root lies inside `(0, 1)` and bisection finds it.
//!
//! A root of the unconstrained equation outside `[0, 1]` is therefore never
//! computed and clamped; the single-phase outcome is reported explicitly as a
//! [`PhaseRegion`].

mod problem;

use log::{debug, warn};
use twine_solvers::equation::bisection;

use crate::support::{
    constraint::UnitInterval,
    thermo::{Composition, MixtureError, PerComponent},
};

use super::{DomainError, FlashConfig, FlashError, k_values::check_k_values};

use problem::{RachfordRiceModel, VaporFractionProblem};

/// Phase region of a flashed feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseRegion {
    /// Single liquid phase; the feed is at or below its bubble point.
    SubcooledLiquid,
    /// Vapor and liquid coexist.
    TwoPhase,
    /// Single vapor phase; the feed is at or above its dew point.
    SuperheatedVapor,
}

/// A solved vapor fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaporFraction {
    value: f64,
    region: PhaseRegion,
    iters: usize,
}

impl VaporFraction {
    fn liquid() -> Self {
        Self {
            value: 0.0,
            region: PhaseRegion::SubcooledLiquid,
            iters: 0,
        }
    }

    fn vapor() -> Self {
        Self {
            value: 1.0,
            region: PhaseRegion::SuperheatedVapor,
            iters: 0,
        }
    }

    fn two_phase(value: f64, iters: usize) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
            region: PhaseRegion::TwoPhase,
            iters,
        }
    }

    /// Vapor fraction ψ = V/F, in `[0, 1]`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn region(&self) -> PhaseRegion {
        self.region
    }

    /// Bisection iterations spent; zero for single-phase feeds.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.iters
    }
}

/// Evaluates the Rachford-Rice residual at `vapor_fraction`.
///
/// # Errors
///
/// Returns [`DomainError::Mixture`] if `feed` and `k_values` have different lengths.
pub fn rachford_rice_residual(
    feed: &Composition,
    k_values: &PerComponent<f64>,
    vapor_fraction: f64,
) -> Result<f64, DomainError> {
    check_lengths(feed, k_values)?;
    Ok(rachford_rice(feed.values(), k_values.values(), vapor_fraction))
}

/// Solves the Rachford-Rice equation for the vapor fraction.
///
/// The returned value always lies in `[0, 1]`; see the module docs for how
/// single-phase feeds are detected.
///
/// # Errors
///
/// - [`FlashError::Domain`] for mismatched lengths, non-positive or
///   non-finite K-values, or an initial guess outside `[0, 1]`.
/// - [`FlashError::MaxIters`] if bisection hits the iteration limit.
/// - [`FlashError::Bisection`] if the solver rejects the problem.
pub fn solve_vapor_fraction(
    feed: &Composition,
    k_values: &PerComponent<f64>,
    config: &FlashConfig,
) -> Result<VaporFraction, FlashError> {
    check_lengths(feed, k_values)?;
    check_k_values(k_values)?;
    let guess = UnitInterval::new(config.initial_guess)
        .map_err(|source| DomainError::InitialGuess {
            value: config.initial_guess,
            source,
        })?
        .into_inner();

    let z = feed.values();
    let k = k_values.values();

    if rachford_rice(z, k, 0.0) <= 0.0 {
        debug!("feed is at or below its bubble point");
        return Ok(VaporFraction::liquid());
    }
    if rachford_rice(z, k, 1.0) >= 0.0 {
        debug!("feed is at or above its dew point");
        return Ok(VaporFraction::vapor());
    }

    let bracket = if guess > 0.0 && guess < 1.0 {
        let at_guess = rachford_rice(z, k, guess);
        if at_guess == 0.0 {
            return Ok(VaporFraction::two_phase(guess, 0));
        }
        // f is decreasing, so a positive residual puts the root above the guess.
        if at_guess > 0.0 { [guess, 1.0] } else { [0.0, guess] }
    } else {
        [0.0, 1.0]
    };

    let model = RachfordRiceModel::new(z, k);
    let solution = bisection::solve(
        &model,
        &VaporFractionProblem,
        bracket,
        &config.bisection(),
        |_event: &bisection::Event<'_, _, _>| None,
    )?;

    if solution.status != bisection::Status::Converged {
        warn!(
            "vapor fraction solve stopped after {} iterations with residual {:e}",
            solution.iters, solution.residual
        );
        return Err(FlashError::MaxIters {
            residual: solution.residual,
            iters: solution.iters,
        });
    }

    let psi = solution.snapshot.output.vapor_fraction;
    debug!("vapor fraction {psi} after {} iterations", solution.iters);
    Ok(VaporFraction::two_phase(psi, solution.iters))
}

/// Rachford-Rice residual over slices in mixture order.
pub(super) fn rachford_rice(feed: &[f64], k_values: &[f64], vapor_fraction: f64) -> f64 {
    feed.iter()
        .zip(k_values)
        .map(|(z, k)| z * (k - 1.0) / (1.0 + vapor_fraction * (k - 1.0)))
        .sum()
}

fn check_lengths(feed: &Composition, k_values: &PerComponent<f64>) -> Result<(), DomainError> {
    if feed.len() == k_values.len() {
        Ok(())
    } else {
        Err(MixtureError::LengthMismatch {
            expected: feed.len(),
            actual: k_values.len(),
        }
        .into())
    }
}
