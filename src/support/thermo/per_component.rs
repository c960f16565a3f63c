use std::ops::Index;

use super::{ComponentId, Mixture, MixtureError};

/// One value per component of a mixture, stored in mixture order.
///
/// K-values, phase compositions, balance residuals, and correction
/// coefficients are all carried in this record, indexed by [`ComponentId`].
///
/// # Example
///
/// ```
/// use twine_flash::support::thermo::{Antoine, Component, Mixture, PerComponent};
///
/// let mixture = Mixture::new(vec![
///     Component::new("benzene", Antoine::new(6.90565, 1211.033, 220.79).unwrap()),
///     Component::new("toluene", Antoine::new(6.95464, 1344.8, 219.482).unwrap()),
/// ])
/// .unwrap();
///
/// let gamma = PerComponent::from_values(&mixture, vec![1.05, 0.98]).unwrap();
/// assert_eq!(gamma[mixture.id("toluene").unwrap()], 0.98);
///
/// assert!(PerComponent::from_values(&mixture, vec![1.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PerComponent<T> {
    values: Vec<T>,
}

impl<T> PerComponent<T> {
    pub(crate) fn from_vec(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Wraps caller-supplied values, one per component of `mixture`.
    ///
    /// # Errors
    ///
    /// Returns [`MixtureError::LengthMismatch`] if the number of values
    /// differs from the number of components.
    pub fn from_values(mixture: &Mixture, values: Vec<T>) -> Result<Self, MixtureError> {
        if values.len() != mixture.len() {
            return Err(MixtureError::LengthMismatch {
                expected: mixture.len(),
                actual: values.len(),
            });
        }
        Ok(Self { values })
    }

    /// Creates a record with the same value for every component.
    #[must_use]
    pub fn uniform(mixture: &Mixture, value: T) -> Self
    where
        T: Clone,
    {
        mixture.map(|_, _| value.clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ComponentId) -> Option<&T> {
        self.values.get(id.index())
    }

    /// Values in mixture order.
    #[must_use]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Values with their component identifiers, in mixture order.
    pub fn iter(&self) -> impl Iterator<Item = (ComponentId, &T)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(|(i, v)| (ComponentId::new(i), v))
    }

    /// Applies `f` to every value, keeping the component association.
    #[must_use]
    pub fn map<U>(&self, mut f: impl FnMut(ComponentId, &T) -> U) -> PerComponent<U> {
        PerComponent {
            values: self.iter().map(|(id, v)| f(id, v)).collect(),
        }
    }

    /// Consumes the record and returns the values in mixture order.
    #[must_use]
    pub fn into_values(self) -> Vec<T> {
        self.values
    }
}

impl<T> Index<ComponentId> for PerComponent<T> {
    type Output = T;

    fn index(&self, id: ComponentId) -> &T {
        &self.values[id.index()]
    }
}
