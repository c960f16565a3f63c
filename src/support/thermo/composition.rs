use std::ops::Index;

use uom::si::molar_mass::gram_per_mole;

use crate::support::constraint::UnitInterval;

use super::{ComponentId, Mixture, MixtureError, PerComponent};

/// Mole fractions of a feed, one per component of a mixture.
///
/// Every fraction lies in `[0, 1]` and the fractions sum to one within a
/// tolerance ([`Composition::SUM_TOLERANCE`] unless overridden).
/// Compositions that miss the tolerance are rejected, never renormalized.
///
/// # Example
///
/// ```
/// use twine_flash::support::thermo::{Antoine, Component, Composition, Mixture};
///
/// let mixture = Mixture::new(vec![
///     Component::new("benzene", Antoine::new(6.90565, 1211.033, 220.79).unwrap()),
///     Component::new("toluene", Antoine::new(6.95464, 1344.8, 219.482).unwrap()),
/// ])
/// .unwrap();
///
/// let feed = Composition::new(&mixture, vec![0.4, 0.6]).unwrap();
/// assert_eq!(feed[mixture.id("benzene").unwrap()], 0.4);
///
/// assert!(Composition::new(&mixture, vec![0.4, 0.5]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    fractions: PerComponent<f64>,
}

impl Composition {
    /// Default allowed deviation of the fraction sum from one.
    pub const SUM_TOLERANCE: f64 = 1e-6;

    /// Validates mole fractions given in mixture order.
    ///
    /// # Errors
    ///
    /// - [`MixtureError::LengthMismatch`] if there is not one fraction per component.
    /// - [`MixtureError::Fraction`] if a fraction is outside `[0, 1]` or NaN.
    /// - [`MixtureError::SumNotUnity`] if the fractions do not sum to one.
    pub fn new(mixture: &Mixture, fractions: Vec<f64>) -> Result<Self, MixtureError> {
        Self::with_tolerance(mixture, fractions, Self::SUM_TOLERANCE)
    }

    /// Same as [`Composition::new`] with a caller-chosen sum tolerance.
    ///
    /// # Errors
    ///
    /// See [`Composition::new`].
    pub fn with_tolerance(
        mixture: &Mixture,
        fractions: Vec<f64>,
        tolerance: f64,
    ) -> Result<Self, MixtureError> {
        let fractions = PerComponent::from_values(mixture, fractions)?;

        for (id, &z) in fractions.iter() {
            UnitInterval::new(z).map_err(|source| MixtureError::Fraction {
                component: mixture[id].name().to_owned(),
                source,
            })?;
        }

        let sum: f64 = fractions.values().iter().sum();
        if (sum - 1.0).abs() > tolerance {
            return Err(MixtureError::SumNotUnity { sum, tolerance });
        }

        Ok(Self { fractions })
    }

    /// Validates mole fractions given by component name.
    ///
    /// Components that are not named get a fraction of zero.
    ///
    /// # Errors
    ///
    /// Returns [`MixtureError::UnknownComponent`] for names not in the mixture,
    /// [`MixtureError::DuplicateComponent`] for names given twice, and any
    /// error from [`Composition::new`].
    pub fn from_named(mixture: &Mixture, fractions: &[(&str, f64)]) -> Result<Self, MixtureError> {
        let mut values = vec![None; mixture.len()];
        for &(name, z) in fractions {
            let slot = &mut values[mixture.require(name)?.index()];
            if slot.replace(z).is_some() {
                return Err(MixtureError::DuplicateComponent {
                    name: name.to_owned(),
                });
            }
        }
        Self::new(mixture, values.into_iter().map(|z| z.unwrap_or(0.0)).collect())
    }

    /// Converts mass fractions to mole fractions using component molar masses.
    ///
    /// # Errors
    ///
    /// Returns [`MixtureError::MissingMolarMass`] if a component with a
    /// non-zero mass fraction has no molar mass, and validates the mass
    /// fractions the same way [`Composition::new`] validates mole fractions.
    pub fn from_mass_fractions(
        mixture: &Mixture,
        mass_fractions: Vec<f64>,
    ) -> Result<Self, MixtureError> {
        let mass = Self::new(mixture, mass_fractions)?;

        let moles = mixture.try_map(|id, component| -> Result<f64, MixtureError> {
            let w = mass[id];
            if w == 0.0 {
                return Ok(0.0);
            }
            let molar_mass = component
                .molar_mass()
                .ok_or_else(|| MixtureError::MissingMolarMass {
                    component: component.name().to_owned(),
                })?;
            Ok(w / molar_mass.get::<gram_per_mole>())
        })?;

        let total: f64 = moles.values().iter().sum();
        Self::new(mixture, moles.values().iter().map(|n| n / total).collect())
    }

    /// The mole fractions as a per-component record.
    #[must_use]
    pub fn fractions(&self) -> &PerComponent<f64> {
        &self.fractions
    }

    /// Mole fractions in mixture order.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        self.fractions.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }
}

impl Index<ComponentId> for Composition {
    type Output = f64;

    fn index(&self, id: ComponentId) -> &f64 {
        &self.fractions[id]
    }
}
