use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Pressure;

use crate::support::{
    constraint::ConstraintError,
    thermo::{ComponentId, MixtureError, PropertyError},
};

/// Physically invalid flash input.
///
/// Every variant is detected before any iteration starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// System pressure is zero, negative, or not a number.
    #[error("pressure must be strictly positive: {pressure:?}")]
    Pressure {
        pressure: Pressure,
        #[source]
        source: ConstraintError,
    },

    /// System pressure is infinite.
    #[error("pressure must be finite: {pressure:?}")]
    PressureNotFinite { pressure: Pressure },

    /// The vapor-pressure correlation is undefined at the flash temperature.
    #[error("vapor pressure of {component} is undefined")]
    VaporPressure {
        component: String,
        #[source]
        source: PropertyError,
    },

    /// Feed composition or per-component data does not fit the mixture.
    #[error("invalid mixture data")]
    Mixture(#[from] MixtureError),

    /// A K-value is not strictly positive and finite.
    #[error("K-value of component {component:?} must be strictly positive and finite: {value}")]
    KValue { component: ComponentId, value: f64 },

    /// An activity or fugacity coefficient is not strictly positive and finite.
    #[error("{kind} coefficient of {component:?} must be strictly positive and finite: {value}")]
    Coefficient {
        kind: CoefficientKind,
        component: ComponentId,
        value: f64,
    },

    /// Feed flow is negative, NaN, or infinite.
    #[error("feed flow must be non-negative and finite: {flow}")]
    FeedFlow { flow: f64 },

    /// A vapor fraction handed to a diagnostic is outside `[0, 1]`.
    #[error("vapor fraction must lie in [0, 1]: {value}")]
    VaporFraction {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    /// The root-finding initial guess is outside `[0, 1]`.
    #[error("initial guess must lie in [0, 1]: {value}")]
    InitialGuess {
        value: f64,
        #[source]
        source: ConstraintError,
    },
}

/// Which non-ideality coefficient a [`DomainError::Coefficient`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoefficientKind {
    /// Liquid-phase activity coefficient.
    Activity,
    /// Vapor-phase fugacity coefficient.
    Fugacity,
}

impl std::fmt::Display for CoefficientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Activity => f.write_str("activity"),
            Self::Fugacity => f.write_str("fugacity"),
        }
    }
}

/// Errors that can occur during a flash calculation.
#[derive(Debug, Error)]
pub enum FlashError {
    /// The inputs are physically invalid.
    #[error("invalid flash input")]
    Domain(#[from] DomainError),

    /// The bisection solver rejected the problem.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The vapor fraction solve reached the iteration limit without converging.
    #[error("vapor fraction did not converge: residual={residual:e} after {iters} iterations")]
    MaxIters {
        /// Smallest Rachford-Rice residual magnitude encountered.
        residual: f64,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}

impl From<MixtureError> for FlashError {
    fn from(err: MixtureError) -> Self {
        Self::Domain(DomainError::Mixture(err))
    }
}
