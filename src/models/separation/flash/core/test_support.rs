use uom::si::{
    f64::{MolarMass, Pressure, ThermodynamicTemperature},
    molar_mass::gram_per_mole,
    pressure::millimeter_of_mercury,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::thermo::{Antoine, Component, Mixture};

/// Benzene and toluene with mmHg/°C Antoine constants and molar masses.
pub(crate) fn benzene_toluene() -> Mixture {
    Mixture::new(vec![
        Component::new("benzene", Antoine::new(6.90565, 1211.033, 220.79).unwrap())
            .with_molar_mass(MolarMass::new::<gram_per_mole>(78.11)),
        Component::new("toluene", Antoine::new(6.95464, 1344.8, 219.482).unwrap())
            .with_molar_mass(MolarMass::new::<gram_per_mole>(92.14)),
    ])
    .unwrap()
}

/// Propane, n-butane and n-pentane with mmHg/°C Antoine constants.
pub(crate) fn light_hydrocarbons() -> Mixture {
    Mixture::new(vec![
        Component::new("propane", Antoine::new(6.82973, 803.997, 246.99).unwrap()),
        Component::new("n-butane", Antoine::new(6.83029, 945.906, 240.0).unwrap()),
        Component::new("n-pentane", Antoine::new(6.85221, 1064.84, 232.014).unwrap()),
    ])
    .unwrap()
}

/// A mixture of `n` placeholder components, for tests that supply their own K-values.
pub(crate) fn uniform_mixture(n: usize) -> Mixture {
    Mixture::new(
        (0..n)
            .map(|i| Component::new(format!("c{i}"), Antoine::new(7.0, 1300.0, 220.0).unwrap()))
            .collect(),
    )
    .unwrap()
}

pub(crate) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

pub(crate) fn mmhg(value: f64) -> Pressure {
    Pressure::new::<millimeter_of_mercury>(value)
}
