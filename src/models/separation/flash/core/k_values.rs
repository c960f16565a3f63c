//! Vapor pressures and equilibrium K-values.
//!
//! The ideal-solution (Raoult's law) K-value is `K = P_sat / P`.
//! [`PhaseCorrections`] extends it to `K = γ·P_sat / (φ·P)` with liquid
//! activity coefficients `γ` and vapor fugacity coefficients `φ`.

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::pascal,
};

use crate::support::{
    constraint::StrictlyPositive,
    thermo::{Component, Mixture, MixtureError, PerComponent},
};

use super::{CoefficientKind, DomainError};

/// Saturation pressure of `component` at `temperature`.
///
/// # Errors
///
/// Returns [`DomainError::VaporPressure`] if the temperature is outside the
/// correlation's domain (`C + T ≤ 0`).
pub fn compute_vapor_pressure(
    component: &Component,
    temperature: ThermodynamicTemperature,
) -> Result<Pressure, DomainError> {
    component
        .vapor_pressure(temperature)
        .map_err(|source| DomainError::VaporPressure {
            component: component.name().to_owned(),
            source,
        })
}

/// Ideal-solution K-values `Kᵢ = P_sat,ᵢ / P` for every component.
///
/// # Errors
///
/// Returns [`DomainError::Pressure`] or [`DomainError::PressureNotFinite`]
/// for an unusable pressure, and [`DomainError::VaporPressure`] if any
/// component's correlation is undefined at `temperature`.
pub fn compute_k_values(
    mixture: &Mixture,
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
) -> Result<PerComponent<f64>, DomainError> {
    let pressure = StrictlyPositive::new(pressure)
        .map_err(|source| DomainError::Pressure { pressure, source })?
        .into_inner();

    let p = pressure.get::<pascal>();
    if !p.is_finite() {
        return Err(DomainError::PressureNotFinite { pressure });
    }

    mixture.try_map(|_, component| -> Result<f64, DomainError> {
        let p_sat = compute_vapor_pressure(component, temperature)?;
        Ok(p_sat.get::<pascal>() / p)
    })
}

/// Non-ideal K-values `Kᵢ = γᵢ·P_sat,ᵢ / (φᵢ·P)`.
///
/// # Errors
///
/// Same as [`compute_k_values`].
pub fn compute_k_values_with(
    mixture: &Mixture,
    temperature: ThermodynamicTemperature,
    pressure: Pressure,
    corrections: &PhaseCorrections,
) -> Result<PerComponent<f64>, DomainError> {
    let ideal = compute_k_values(mixture, temperature, pressure)?;
    corrections.apply(&ideal)
}

/// Activity and fugacity coefficients that correct ideal K-values.
///
/// Coefficients that are not supplied default to one for every component.
///
/// # Example
///
/// ```
/// use twine_flash::models::separation::flash::PhaseCorrections;
/// use twine_flash::support::thermo::{Antoine, Component, Mixture};
///
/// let mixture = Mixture::new(vec![
///     Component::new("ethanol", Antoine::new(8.20417, 1642.89, 230.3).unwrap()),
///     Component::new("water", Antoine::new(8.07131, 1730.63, 233.426).unwrap()),
/// ])
/// .unwrap();
///
/// let corrections = PhaseCorrections::ideal(&mixture)
///     .with_activity(&mixture, vec![1.8, 1.2])
///     .unwrap();
/// assert_eq!(corrections.activity().values(), &[1.8, 1.2]);
/// assert_eq!(corrections.fugacity().values(), &[1.0, 1.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseCorrections {
    activity: PerComponent<f64>,
    fugacity: PerComponent<f64>,
}

impl PhaseCorrections {
    /// Corrections that leave K-values unchanged.
    #[must_use]
    pub fn ideal(mixture: &Mixture) -> Self {
        Self {
            activity: PerComponent::uniform(mixture, 1.0),
            fugacity: PerComponent::uniform(mixture, 1.0),
        }
    }

    /// Number of components these corrections cover.
    #[must_use]
    pub fn len(&self) -> usize {
        self.activity.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activity.is_empty()
    }

    /// Replaces the liquid activity coefficients.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Mixture`] if `mixture` has a different size than
    /// the one these corrections were built for, or for the wrong number of values, and
    /// [`DomainError::Coefficient`] for a value that is not strictly positive and finite.
    pub fn with_activity(self, mixture: &Mixture, gamma: Vec<f64>) -> Result<Self, DomainError> {
        check_len(self.len(), mixture.len())?;
        Ok(Self {
            activity: coefficients(mixture, gamma, CoefficientKind::Activity)?,
            ..self
        })
    }

    /// Replaces the vapor fugacity coefficients.
    ///
    /// # Errors
    ///
    /// Same as [`PhaseCorrections::with_activity`].
    pub fn with_fugacity(self, mixture: &Mixture, phi: Vec<f64>) -> Result<Self, DomainError> {
        check_len(self.len(), mixture.len())?;
        Ok(Self {
            fugacity: coefficients(mixture, phi, CoefficientKind::Fugacity)?,
            ..self
        })
    }

    #[must_use]
    pub fn activity(&self) -> &PerComponent<f64> {
        &self.activity
    }

    #[must_use]
    pub fn fugacity(&self) -> &PerComponent<f64> {
        &self.fugacity
    }

    /// Multiplies ideal K-values by `γ/φ`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Mixture`] if `ideal` belongs to a mixture of a
    /// different size.
    pub fn apply(&self, ideal: &PerComponent<f64>) -> Result<PerComponent<f64>, DomainError> {
        check_len(self.len(), ideal.len())?;
        Ok(ideal.map(|id, k| k * self.activity[id] / self.fugacity[id]))
    }
}

fn coefficients(
    mixture: &Mixture,
    values: Vec<f64>,
    kind: CoefficientKind,
) -> Result<PerComponent<f64>, DomainError> {
    let values = PerComponent::from_values(mixture, values)?;
    if let Some((component, &value)) = values.iter().find(|(_, v)| !is_positive_finite(**v)) {
        return Err(DomainError::Coefficient {
            kind,
            component,
            value,
        });
    }
    Ok(values)
}

fn check_len(expected: usize, actual: usize) -> Result<(), DomainError> {
    if expected == actual {
        Ok(())
    } else {
        Err(MixtureError::LengthMismatch { expected, actual }.into())
    }
}

/// Checks that every K-value is strictly positive and finite.
pub(super) fn check_k_values(k_values: &PerComponent<f64>) -> Result<(), DomainError> {
    match k_values.iter().find(|(_, k)| !is_positive_finite(**k)) {
        Some((component, &value)) => Err(DomainError::KValue { component, value }),
        None => Ok(()),
    }
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::pressure::{atmosphere, millimeter_of_mercury};

    use crate::models::separation::flash::core::test_support::{
        benzene_toluene, celsius, light_hydrocarbons, mmhg,
    };

    #[test]
    fn benzene_toluene_at_100_c_and_1_atm() {
        let mixture = benzene_toluene();
        let k = compute_k_values(&mixture, celsius(100.0), mmhg(760.0)).unwrap();

        let benzene = mixture.require("benzene").unwrap();
        let toluene = mixture.require("toluene").unwrap();

        assert_relative_eq!(k[benzene], 1.78, max_relative = 0.02);
        assert_relative_eq!(k[toluene], 0.73, max_relative = 0.02);
    }

    #[test]
    fn pressure_units_do_not_matter() {
        let mixture = benzene_toluene();
        let in_mmhg = compute_k_values(&mixture, celsius(90.0), mmhg(760.0)).unwrap();
        let in_atm =
            compute_k_values(&mixture, celsius(90.0), Pressure::new::<atmosphere>(1.0)).unwrap();

        for (id, k) in in_mmhg.iter() {
            assert_relative_eq!(*k, in_atm[id], max_relative = 1e-6);
        }
    }

    #[test]
    fn vapor_pressure_names_the_component() {
        let mixture = benzene_toluene();
        let toluene = &mixture[mixture.require("toluene").unwrap()];

        let p_sat = compute_vapor_pressure(toluene, celsius(100.0)).unwrap();
        assert_relative_eq!(
            p_sat.get::<millimeter_of_mercury>(),
            556.32,
            max_relative = 1e-4
        );

        let err = compute_vapor_pressure(toluene, celsius(-230.0)).unwrap_err();
        assert!(matches!(
            err,
            DomainError::VaporPressure { ref component, .. } if component == "toluene"
        ));
    }

    #[test]
    fn rejects_non_positive_pressure() {
        let mixture = benzene_toluene();

        assert!(matches!(
            compute_k_values(&mixture, celsius(100.0), mmhg(0.0)),
            Err(DomainError::Pressure { .. })
        ));
        assert!(matches!(
            compute_k_values(&mixture, celsius(100.0), mmhg(-760.0)),
            Err(DomainError::Pressure { .. })
        ));
        assert!(matches!(
            compute_k_values(&mixture, celsius(100.0), mmhg(f64::INFINITY)),
            Err(DomainError::PressureNotFinite { .. })
        ));
    }

    #[test]
    fn rejects_temperature_outside_correlation_domain() {
        let mixture = benzene_toluene();
        assert!(matches!(
            compute_k_values(&mixture, celsius(-221.0), mmhg(760.0)),
            Err(DomainError::VaporPressure { .. })
        ));
    }

    #[test]
    fn corrections_scale_ideal_k_values() {
        let mixture = benzene_toluene();
        let corrections = PhaseCorrections::ideal(&mixture)
            .with_activity(&mixture, vec![1.2, 1.0])
            .unwrap()
            .with_fugacity(&mixture, vec![1.0, 0.8])
            .unwrap();

        let ideal = compute_k_values(&mixture, celsius(100.0), mmhg(760.0)).unwrap();
        let corrected =
            compute_k_values_with(&mixture, celsius(100.0), mmhg(760.0), &corrections).unwrap();

        assert_relative_eq!(corrected.values()[0], ideal.values()[0] * 1.2);
        assert_relative_eq!(corrected.values()[1], ideal.values()[1] / 0.8);
    }

    #[test]
    fn ideal_corrections_are_identity() {
        let mixture = benzene_toluene();
        let ideal = compute_k_values(&mixture, celsius(95.0), mmhg(760.0)).unwrap();
        let corrected = PhaseCorrections::ideal(&mixture).apply(&ideal).unwrap();
        assert_eq!(corrected, ideal);
    }

    #[test]
    fn rejects_bad_coefficients() {
        let mixture = benzene_toluene();

        assert!(matches!(
            PhaseCorrections::ideal(&mixture).with_activity(&mixture, vec![1.0, 0.0]),
            Err(DomainError::Coefficient {
                kind: CoefficientKind::Activity,
                ..
            })
        ));
        assert!(matches!(
            PhaseCorrections::ideal(&mixture).with_fugacity(&mixture, vec![f64::NAN, 1.0]),
            Err(DomainError::Coefficient {
                kind: CoefficientKind::Fugacity,
                ..
            })
        ));
        assert!(matches!(
            PhaseCorrections::ideal(&mixture).with_activity(&mixture, vec![1.0]),
            Err(DomainError::Mixture(_))
        ));
    }

    #[test]
    fn corrections_stay_bound_to_one_mixture_size() {
        let binary = benzene_toluene();
        let ternary = light_hydrocarbons();

        let err = PhaseCorrections::ideal(&binary)
            .with_activity(&ternary, vec![1.0; 3])
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::Mixture(MixtureError::LengthMismatch {
                expected: 2,
                actual: 3
            })
        );
        assert!(matches!(
            PhaseCorrections::ideal(&binary).with_fugacity(&ternary, vec![1.0; 3]),
            Err(DomainError::Mixture(MixtureError::LengthMismatch { .. }))
        ));

        let corrections = PhaseCorrections::ideal(&binary);
        assert_eq!(corrections.len(), 2);
        assert!(matches!(
            compute_k_values_with(&ternary, celsius(0.0), mmhg(760.0), &corrections),
            Err(DomainError::Mixture(MixtureError::LengthMismatch {
                expected: 2,
                actual: 3
            }))
        ));
    }

    #[test]
    fn k_value_check() {
        let mixture = benzene_toluene();
        let good = PerComponent::from_values(&mixture, vec![1.5, 0.5]).unwrap();
        assert!(check_k_values(&good).is_ok());

        let bad = PerComponent::from_values(&mixture, vec![1.5, -0.5]).unwrap();
        let toluene = mixture.require("toluene").unwrap();
        assert_eq!(
            check_k_values(&bad),
            Err(DomainError::KValue {
                component: toluene,
                value: -0.5
            })
        );
    }
}
