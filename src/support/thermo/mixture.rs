use std::ops::Index;

use thiserror::Error;
use uom::si::f64::{MolarMass, Pressure, ThermodynamicTemperature};

use crate::support::constraint::ConstraintError;

use super::{Antoine, PerComponent, PropertyError};

/// Errors from building mixtures and the per-component data attached to them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MixtureError {
    #[error("mixture has no components")]
    Empty,

    #[error("duplicate component name: {name}")]
    DuplicateComponent { name: String },

    #[error("unknown component: {name}")]
    UnknownComponent { name: String },

    #[error("expected one value per component ({expected}), got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("invalid fraction for {component}")]
    Fraction {
        component: String,
        #[source]
        source: ConstraintError,
    },

    #[error("fractions sum to {sum}, expected 1 within {tolerance}")]
    SumNotUnity { sum: f64, tolerance: f64 },

    #[error("component {component} has no molar mass")]
    MissingMolarMass { component: String },
}

/// Typed index of a component within its [`Mixture`].
///
/// Identifiers are only meaningful for the mixture that issued them.
/// Indexing data that belongs to a different mixture panics on an
/// out-of-range index, like slice indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(usize);

impl ComponentId {
    pub(super) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the component in mixture order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A pure component with its vapor-pressure correlation.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    name: String,
    antoine: Antoine,
    molar_mass: Option<MolarMass>,
}

impl Component {
    #[must_use]
    pub fn new(name: impl Into<String>, antoine: Antoine) -> Self {
        Self {
            name: name.into(),
            antoine,
            molar_mass: None,
        }
    }

    /// Attaches a molar mass, enabling mass-fraction input.
    #[must_use]
    pub fn with_molar_mass(self, molar_mass: MolarMass) -> Self {
        Self {
            molar_mass: Some(molar_mass),
            ..self
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn antoine(&self) -> &Antoine {
        &self.antoine
    }

    #[must_use]
    pub fn molar_mass(&self) -> Option<MolarMass> {
        self.molar_mass
    }

    /// Saturation pressure from the component's Antoine correlation.
    ///
    /// # Errors
    ///
    /// See [`Antoine::vapor_pressure`].
    pub fn vapor_pressure(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PropertyError> {
        self.antoine.vapor_pressure(temperature)
    }
}

/// An ordered, non-empty set of uniquely named components.
///
/// # Example
///
/// ```
/// use twine_flash::support::thermo::{Antoine, Component, Mixture};
///
/// let mixture = Mixture::new(vec![
///     Component::new("benzene", Antoine::new(6.90565, 1211.033, 220.79).unwrap()),
///     Component::new("toluene", Antoine::new(6.95464, 1344.8, 219.482).unwrap()),
/// ])
/// .unwrap();
///
/// let toluene = mixture.id("toluene").unwrap();
/// assert_eq!(toluene.index(), 1);
/// assert_eq!(mixture[toluene].name(), "toluene");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Mixture {
    components: Vec<Component>,
}

impl Mixture {
    /// Builds a mixture, preserving component order.
    ///
    /// # Errors
    ///
    /// Returns [`MixtureError::Empty`] for no components and
    /// [`MixtureError::DuplicateComponent`] if two components share a name.
    pub fn new(components: Vec<Component>) -> Result<Self, MixtureError> {
        if components.is_empty() {
            return Err(MixtureError::Empty);
        }

        for (i, component) in components.iter().enumerate() {
            if components[..i].iter().any(|c| c.name == component.name) {
                return Err(MixtureError::DuplicateComponent {
                    name: component.name.clone(),
                });
            }
        }

        Ok(Self { components })
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Always `false`; a mixture has at least one component.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Looks up a component by name.
    #[must_use]
    pub fn id(&self, name: &str) -> Option<ComponentId> {
        self.components
            .iter()
            .position(|c| c.name == name)
            .map(ComponentId)
    }

    /// Looks up a component by name, failing if it is not in the mixture.
    ///
    /// # Errors
    ///
    /// Returns [`MixtureError::UnknownComponent`] if no component has this name.
    pub fn require(&self, name: &str) -> Result<ComponentId, MixtureError> {
        self.id(name).ok_or_else(|| MixtureError::UnknownComponent {
            name: name.to_owned(),
        })
    }

    /// Components with their identifiers, in mixture order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, &Component)> + '_ {
        self.components
            .iter()
            .enumerate()
            .map(|(i, c)| (ComponentId(i), c))
    }

    /// Builds a per-component record by evaluating `f` for every component.
    pub fn map<T>(&self, mut f: impl FnMut(ComponentId, &Component) -> T) -> PerComponent<T> {
        PerComponent::from_vec(self.iter().map(|(id, c)| f(id, c)).collect())
    }

    /// Fallible version of [`Mixture::map`]; stops at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map<T, E>(
        &self,
        mut f: impl FnMut(ComponentId, &Component) -> Result<T, E>,
    ) -> Result<PerComponent<T>, E> {
        self.iter()
            .map(|(id, c)| f(id, c))
            .collect::<Result<Vec<_>, _>>()
            .map(PerComponent::from_vec)
    }
}

impl Index<ComponentId> for Mixture {
    type Output = Component;

    fn index(&self, id: ComponentId) -> &Component {
        &self.components[id.0]
    }
}
