use crate::support::thermo::{Composition, MixtureError, PerComponent};

use super::{DomainError, PhaseRegion, VaporFraction};

/// Liquid and vapor mole fractions leaving a flash.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseCompositions {
    /// Liquid mole fractions `xᵢ`.
    pub liquid: PerComponent<f64>,

    /// Vapor mole fractions `yᵢ`.
    pub vapor: PerComponent<f64>,
}

/// Phase compositions at a solved vapor fraction.
///
/// In the two-phase region, `xᵢ = zᵢ / (1 + ψ(Kᵢ − 1))` and `yᵢ = Kᵢ·xᵢ`.
/// The fractions are not renormalized, so their sums show how well the
/// vapor fraction was converged.
///
/// A single-phase feed leaves as one phase with the feed composition, and
/// both returned compositions equal the feed.
///
/// # Errors
///
/// Returns [`DomainError::Mixture`] if `feed` and `k_values` have different lengths.
pub fn compute_phase_compositions(
    feed: &Composition,
    k_values: &PerComponent<f64>,
    vapor_fraction: &VaporFraction,
) -> Result<PhaseCompositions, DomainError> {
    if feed.len() != k_values.len() {
        return Err(MixtureError::LengthMismatch {
            expected: feed.len(),
            actual: k_values.len(),
        }
        .into());
    }

    if vapor_fraction.region() != PhaseRegion::TwoPhase {
        return Ok(PhaseCompositions {
            liquid: feed.fractions().clone(),
            vapor: feed.fractions().clone(),
        });
    }

    let psi = vapor_fraction.value();
    let liquid = k_values.map(|id, k| feed[id] / (1.0 + psi * (k - 1.0)));
    let vapor = liquid.map(|id, x| k_values[id] * x);

    Ok(PhaseCompositions { liquid, vapor })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::separation::flash::core::{
        FlashConfig, compute_k_values, solve_vapor_fraction,
        test_support::{benzene_toluene, celsius, light_hydrocarbons, mmhg},
    };

    #[test]
    fn benzene_toluene_at_100_c() {
        let mixture = benzene_toluene();
        let feed = Composition::new(&mixture, vec![0.4, 0.6]).unwrap();
        let k = compute_k_values(&mixture, celsius(100.0), mmhg(760.0)).unwrap();
        let psi = solve_vapor_fraction(&feed, &k, &FlashConfig::default()).unwrap();

        let phases = compute_phase_compositions(&feed, &k, &psi).unwrap();
        let benzene = mixture.require("benzene").unwrap();

        assert_relative_eq!(phases.liquid[benzene], 0.2565, max_relative = 1e-3);
        assert_relative_eq!(phases.vapor[benzene], 0.4557, max_relative = 1e-3);
        // The lighter component concentrates in the vapor.
        assert!(phases.vapor[benzene] > feed[benzene]);
        assert!(phases.liquid[benzene] < feed[benzene]);

        assert_relative_eq!(phases.liquid.values().iter().sum::<f64>(), 1.0, epsilon = 1e-6);
        assert_relative_eq!(phases.vapor.values().iter().sum::<f64>(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn propane_butane_pentane_at_0_c() {
        let mixture = light_hydrocarbons();
        let feed = Composition::new(&mixture, vec![0.3, 0.4, 0.3]).unwrap();
        let k = compute_k_values(&mixture, celsius(0.0), mmhg(760.0)).unwrap();
        let psi = solve_vapor_fraction(&feed, &k, &FlashConfig::default()).unwrap();

        let phases = compute_phase_compositions(&feed, &k, &psi).unwrap();

        let expected_x = [0.095_974, 0.395_928, 0.508_099];
        let expected_y = [0.474_121, 0.403_476, 0.122_403];
        for (i, (x, y)) in expected_x.iter().zip(&expected_y).enumerate() {
            assert_relative_eq!(phases.liquid.values()[i], *x, max_relative = 1e-3);
            assert_relative_eq!(phases.vapor.values()[i], *y, max_relative = 1e-3);
        }
    }

    #[test]
    fn single_phase_keeps_feed_composition() {
        let mixture = benzene_toluene();
        let feed = Composition::new(&mixture, vec![0.4, 0.6]).unwrap();

        for temperature in [60.0, 150.0] {
            let k = compute_k_values(&mixture, celsius(temperature), mmhg(760.0)).unwrap();
            let psi = solve_vapor_fraction(&feed, &k, &FlashConfig::default()).unwrap();
            assert_ne!(psi.region(), PhaseRegion::TwoPhase);

            let phases = compute_phase_compositions(&feed, &k, &psi).unwrap();
            assert_eq!(&phases.liquid, feed.fractions());
            assert_eq!(&phases.vapor, feed.fractions());
        }
    }

    #[test]
    fn rejects_mismatched_k_values() {
        let mixture = benzene_toluene();
        let feed = Composition::new(&mixture, vec![0.4, 0.6]).unwrap();
        let k = compute_k_values(&mixture, celsius(100.0), mmhg(760.0)).unwrap();
        let psi = solve_vapor_fraction(&feed, &k, &FlashConfig::default()).unwrap();

        let ternary = light_hydrocarbons();
        let wrong = PerComponent::uniform(&ternary, 1.0);
        assert!(matches!(
            compute_phase_compositions(&feed, &wrong, &psi),
            Err(DomainError::Mixture(MixtureError::LengthMismatch { .. }))
        ));
    }
}
