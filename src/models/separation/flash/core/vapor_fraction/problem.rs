//! Problem formulation for the Rachford-Rice solve.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};

use super::rachford_rice;

/// Rachford-Rice evaluation at a candidate vapor fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct RachfordRiceEval {
    pub(super) vapor_fraction: f64,
    pub(super) residual: f64,
}

/// Model adapter exposing the Rachford-Rice residual as a function of ψ.
///
/// Holds the feed and K-values in mixture order; both have already been
/// validated, so the residual is finite anywhere in `[0, 1]`.
pub(super) struct RachfordRiceModel<'a> {
    feed: &'a [f64],
    k_values: &'a [f64],
}

impl<'a> RachfordRiceModel<'a> {
    pub(super) fn new(feed: &'a [f64], k_values: &'a [f64]) -> Self {
        Self { feed, k_values }
    }
}

impl Model for RachfordRiceModel<'_> {
    type Input = f64;
    type Output = RachfordRiceEval;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(RachfordRiceEval {
            vapor_fraction: *input,
            residual: rachford_rice(self.feed, self.k_values, *input),
        })
    }
}

/// Equation problem driving the Rachford-Rice residual to zero.
pub(super) struct VaporFractionProblem;

impl EquationProblem<1> for VaporFractionProblem {
    type Input = f64;
    type Output = RachfordRiceEval;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(x[0])
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.residual])
    }
}
