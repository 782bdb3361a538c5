//! Filterable catalog columns and their match modes
//!
//! Each [`Field`] names one filterable column of the catalog schema and
//! carries its fixed tolerance, if any. Tolerances are startup constants,
//! never user-configurable.

use crate::catalog::PlanetRecord;

/// A filterable catalog column.
///
/// `pl_name` is deliberately absent: it is the output key and is never
/// filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Stars,
    Moons,
    DiscYear,
    OrbitalPeriod,
    Radius,
    Mass,
    /// Exact match for now; likely a tolerance-band candidate once the
    /// source catalog settles on a sensible band width.
    EquilibriumTemp,
    SolarRadius,
    SolarMass,
    RotationalVelocity,
    Distance,
    GaiaMagnitude,
}

/// A row's value for one field, as seen by predicate evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
}

impl Field {
    /// Returns the column name for log and error output.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Stars => "stars",
            Field::Moons => "moons",
            Field::DiscYear => "disc_year",
            Field::OrbitalPeriod => "orbital_period",
            Field::Radius => "radius",
            Field::Mass => "mass",
            Field::EquilibriumTemp => "equilibrium_temp",
            Field::SolarRadius => "solar_radius",
            Field::SolarMass => "solar_mass",
            Field::RotationalVelocity => "rotational_velocity",
            Field::Distance => "distance",
            Field::GaiaMagnitude => "gaia_magnitude",
        }
    }

    /// Returns the fixed tolerance for band fields, or None for
    /// exact-match fields.
    pub fn tolerance(&self) -> Option<f64> {
        match self {
            Field::OrbitalPeriod => Some(20.0),
            Field::Radius => Some(1.0),
            Field::Mass => Some(500.0),
            Field::SolarRadius => Some(1.0),
            Field::SolarMass => Some(0.1),
            Field::RotationalVelocity => Some(0.5),
            Field::Distance => Some(10.0),
            Field::GaiaMagnitude => Some(0.5),
            Field::Stars | Field::Moons | Field::DiscYear | Field::EquilibriumTemp => None,
        }
    }

    /// Returns true if this field matches by exact equality.
    pub fn is_exact(&self) -> bool {
        self.tolerance().is_none()
    }

    /// Extracts this field's value from a catalog row.
    pub fn value_of(&self, record: &PlanetRecord) -> FieldValue {
        match self {
            Field::Stars => FieldValue::Int(i64::from(record.stars)),
            Field::Moons => FieldValue::Int(i64::from(record.moons)),
            Field::DiscYear => FieldValue::Int(i64::from(record.disc_year)),
            Field::OrbitalPeriod => FieldValue::Float(record.orbital_period),
            Field::Radius => FieldValue::Float(record.radius),
            Field::Mass => FieldValue::Float(record.mass),
            Field::EquilibriumTemp => FieldValue::Float(record.equilibrium_temp),
            Field::SolarRadius => FieldValue::Float(record.solar_radius),
            Field::SolarMass => FieldValue::Float(record.solar_mass),
            Field::RotationalVelocity => FieldValue::Float(record.rotational_velocity),
            Field::Distance => FieldValue::Float(record.distance),
            Field::GaiaMagnitude => FieldValue::Float(record.gaia_magnitude),
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_field_set() {
        assert!(Field::Stars.is_exact());
        assert!(Field::Moons.is_exact());
        assert!(Field::DiscYear.is_exact());
        assert!(Field::EquilibriumTemp.is_exact());

        assert!(!Field::OrbitalPeriod.is_exact());
        assert!(!Field::Mass.is_exact());
    }

    #[test]
    fn test_tolerance_constants() {
        assert_eq!(Field::OrbitalPeriod.tolerance(), Some(20.0));
        assert_eq!(Field::Radius.tolerance(), Some(1.0));
        assert_eq!(Field::Mass.tolerance(), Some(500.0));
        assert_eq!(Field::SolarRadius.tolerance(), Some(1.0));
        assert_eq!(Field::SolarMass.tolerance(), Some(0.1));
        assert_eq!(Field::RotationalVelocity.tolerance(), Some(0.5));
        assert_eq!(Field::Distance.tolerance(), Some(10.0));
        assert_eq!(Field::GaiaMagnitude.tolerance(), Some(0.5));
        assert_eq!(Field::EquilibriumTemp.tolerance(), None);
    }

    #[test]
    fn test_display_uses_column_name() {
        assert_eq!(Field::GaiaMagnitude.to_string(), "gaia_magnitude");
        assert_eq!(Field::DiscYear.to_string(), "disc_year");
    }
}
