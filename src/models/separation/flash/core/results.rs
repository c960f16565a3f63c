//! Results of an isothermal flash.

use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::support::thermo::{ComponentId, PerComponent};

use super::{MaterialBalance, PhaseRegion};

/// Solved state of an isothermal flash.
///
/// For a single-phase feed, `liquid` and `vapor` both hold the feed
/// composition and `region` says which phase actually leaves.
#[derive(Debug, Clone, PartialEq)]
pub struct FlashResult {
    /// Flash temperature.
    pub temperature: ThermodynamicTemperature,

    /// Flash pressure.
    pub pressure: Pressure,

    /// Phase region of the feed at these conditions.
    pub region: PhaseRegion,

    /// Vapor fraction ψ = V/F, in `[0, 1]`.
    pub vapor_fraction: f64,

    /// Bisection iterations spent on the vapor fraction.
    pub iters: usize,

    /// K-values used for the split, including any non-ideal corrections.
    pub k_values: PerComponent<f64>,

    /// Liquid mole fractions `xᵢ`.
    pub liquid: PerComponent<f64>,

    /// Vapor mole fractions `yᵢ`.
    pub vapor: PerComponent<f64>,

    /// Product flows and balance residuals.
    pub balance: MaterialBalance,
}

impl FlashResult {
    #[must_use]
    pub fn vapor_flow(&self) -> f64 {
        self.balance.vapor_flow
    }

    #[must_use]
    pub fn liquid_flow(&self) -> f64 {
        self.balance.liquid_flow
    }

    /// Relative volatility `αᵢⱼ = (yᵢ/xᵢ) / (yⱼ/xⱼ)` of the product streams.
    ///
    /// In the two-phase region this equals `Kᵢ / Kⱼ`; a single-phase result
    /// gives one. Returns `None` if either liquid fraction is zero or an id
    /// is out of range for this result.
    #[must_use]
    pub fn relative_volatility(&self, i: ComponentId, j: ComponentId) -> Option<f64> {
        let (x_i, x_j) = (*self.liquid.get(i)?, *self.liquid.get(j)?);
        if x_i <= 0.0 || x_j <= 0.0 {
            return None;
        }
        Some((self.vapor.get(i)? / x_i) / (self.vapor.get(j)? / x_j))
    }
}
