//! Antoine vapor-pressure correlation.
//!
//! The correlation gives the saturation pressure of a pure component as
//!
//! ```text
//! log10(P_sat) = A − B / (C + T)
//! ```
//!
//! The numeric values of `A`, `B`, and `C` only mean something together with
//! the units `P` and `T` were fitted in, so every [`Antoine`] carries an
//! [`AntoineBasis`].
//!
//! # Domain
//!
//! The correlation is undefined where `C + T ≤ 0`; evaluating there returns
//! [`PropertyError::OutOfDomain`].

use uom::si::{
    f64::{Pressure, ThermodynamicTemperature},
    pressure::{bar, millimeter_of_mercury},
    thermodynamic_temperature::{degree_celsius, kelvin},
};

use super::PropertyError;

/// Units the Antoine coefficients were fitted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AntoineBasis {
    /// Pressure in mmHg, temperature in °C.
    ///
    /// This is the basis of the classic handbook tables.
    #[default]
    MmHgCelsius,

    /// Pressure in bar, temperature in K.
    ///
    /// This is the basis used by the NIST Chemistry WebBook.
    BarKelvin,
}

/// Antoine correlation coefficients for a single component.
///
/// # Example
///
/// ```
/// use twine_flash::support::thermo::Antoine;
/// use uom::si::{
///     f64::ThermodynamicTemperature,
///     pressure::millimeter_of_mercury,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let benzene = Antoine::new(6.90565, 1211.033, 220.79).unwrap();
/// let p_sat = benzene
///     .vapor_pressure(ThermodynamicTemperature::new::<degree_celsius>(100.0))
///     .unwrap();
/// assert!((p_sat.get::<millimeter_of_mercury>() - 1350.5).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Antoine {
    a: f64,
    b: f64,
    c: f64,
    basis: AntoineBasis,
}

impl Antoine {
    /// Creates a correlation on the default [`AntoineBasis::MmHgCelsius`] basis.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidParameters`] if any coefficient is not finite.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, PropertyError> {
        if !(a.is_finite() && b.is_finite() && c.is_finite()) {
            return Err(PropertyError::InvalidParameters {
                context: format!("Antoine coefficients must be finite: A={a}, B={b}, C={c}"),
            });
        }
        Ok(Self {
            a,
            b,
            c,
            basis: AntoineBasis::default(),
        })
    }

    /// Returns the same coefficients interpreted on a different basis.
    #[must_use]
    pub fn with_basis(self, basis: AntoineBasis) -> Self {
        Self { basis, ..self }
    }

    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    #[must_use]
    pub fn basis(&self) -> AntoineBasis {
        self.basis
    }

    /// Evaluates the saturation pressure at `temperature`.
    ///
    /// # Errors
    ///
    /// - [`PropertyError::OutOfDomain`] if the temperature is not finite or
    ///   `C + T ≤ 0` in the basis temperature unit.
    /// - [`PropertyError::Calculation`] if the pressure overflows.
    pub fn vapor_pressure(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Pressure, PropertyError> {
        let t = match self.basis {
            AntoineBasis::MmHgCelsius => temperature.get::<degree_celsius>(),
            AntoineBasis::BarKelvin => temperature.get::<kelvin>(),
        };

        if !t.is_finite() {
            return Err(PropertyError::OutOfDomain {
                context: format!("temperature is not finite: {t}"),
            });
        }

        let denominator = self.c + t;
        if denominator <= 0.0 {
            return Err(PropertyError::OutOfDomain {
                context: format!("C + T must be positive, got C={} T={t}", self.c),
            });
        }

        let p_sat = 10_f64.powf(self.a - self.b / denominator);
        if !p_sat.is_finite() {
            return Err(PropertyError::Calculation {
                context: format!("vapor pressure overflowed at T={t}"),
            });
        }

        Ok(match self.basis {
            AntoineBasis::MmHgCelsius => Pressure::new::<millimeter_of_mercury>(p_sat),
            AntoineBasis::BarKelvin => Pressure::new::<bar>(p_sat),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn celsius(t: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(t)
    }

    #[test]
    fn benzene_and_toluene_at_100_c() {
        let benzene = Antoine::new(6.90565, 1211.033, 220.79).unwrap();
        let toluene = Antoine::new(6.95464, 1344.8, 219.482).unwrap();

        let p_benzene = benzene.vapor_pressure(celsius(100.0)).unwrap();
        let p_toluene = toluene.vapor_pressure(celsius(100.0)).unwrap();

        assert_relative_eq!(
            p_benzene.get::<millimeter_of_mercury>(),
            1350.49,
            max_relative = 1e-4
        );
        assert_relative_eq!(
            p_toluene.get::<millimeter_of_mercury>(),
            556.32,
            max_relative = 1e-4
        );
    }

    #[test]
    fn bar_kelvin_basis() {
        // NIST WebBook coefficients for benzene, valid 287.7-354.07 K.
        let benzene = Antoine::new(4.01814, 1203.835, -53.226)
            .unwrap()
            .with_basis(AntoineBasis::BarKelvin);

        let p_sat = benzene
            .vapor_pressure(ThermodynamicTemperature::new::<kelvin>(353.25))
            .unwrap();

        // Normal boiling point of benzene is 80.1 °C.
        assert_relative_eq!(p_sat.get::<bar>(), 1.013_25, max_relative = 1e-2);
    }

    #[test]
    fn rejects_temperatures_outside_domain() {
        let benzene = Antoine::new(6.90565, 1211.033, 220.79).unwrap();

        assert!(matches!(
            benzene.vapor_pressure(celsius(-220.79)),
            Err(PropertyError::OutOfDomain { .. })
        ));
        assert!(matches!(
            benzene.vapor_pressure(celsius(-250.0)),
            Err(PropertyError::OutOfDomain { .. })
        ));
        assert!(matches!(
            benzene.vapor_pressure(celsius(f64::NAN)),
            Err(PropertyError::OutOfDomain { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_coefficients() {
        assert!(matches!(
            Antoine::new(f64::NAN, 1.0, 1.0),
            Err(PropertyError::InvalidParameters { .. })
        ));
        assert!(Antoine::new(1.0, f64::INFINITY, 1.0).is_err());
    }
}
