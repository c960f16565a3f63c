use twine_solvers::equation::bisection;

/// Solver configuration for the vapor fraction solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlashConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Absolute tolerance on the vapor fraction bracket width.
    pub vapor_fraction_tol: f64,

    /// Absolute tolerance on the Rachford-Rice residual.
    pub residual_tol: f64,

    /// Starting estimate of the vapor fraction, in `[0, 1]`.
    ///
    /// The residual at the guess decides which side of it the root lies on,
    /// so a good guess halves the initial bracket or better. A guess on either
    /// bound leaves the full `[0, 1]` bracket.
    pub initial_guess: f64,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            vapor_fraction_tol: 1e-12,
            residual_tol: 1e-10,
            initial_guess: 0.5,
        }
    }
}

impl FlashConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.vapor_fraction_tol,
            x_rel_tol: 0.0,
            residual_tol: self.residual_tol,
        }
    }
}
