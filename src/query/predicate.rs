//! Per-field predicates and their evaluation
//!
//! A [`Predicate`] binds one [`Field`] to one match operation: exact
//! equality or a closed tolerance band. Predicates are evaluated strictly,
//! with no type coercion; a composite filter is a plain conjunction.

use crate::catalog::PlanetRecord;

use super::field::{Field, FieldValue};

/// Match operation bound to a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchOp {
    /// Exact equality against an integer column
    EqInt(i64),
    /// Exact equality against a real column
    EqFloat(f64),
    /// Closed interval `[lo, hi]`, inclusive at both ends
    Band { lo: f64, hi: f64 },
}

/// A single predicate (field + operation)
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    /// Column being filtered
    pub field: Field,
    /// Match operation
    pub op: MatchOp,
}

impl Predicate {
    /// Create an exact-equality predicate for an integer column.
    pub fn exact_int(field: Field, value: i64) -> Self {
        Self {
            field,
            op: MatchOp::EqInt(value),
        }
    }

    /// Create an exact-equality predicate for a real column.
    pub fn exact(field: Field, value: f64) -> Self {
        Self {
            field,
            op: MatchOp::EqFloat(value),
        }
    }

    /// Create a closed tolerance-band predicate centered on `value`.
    pub fn band(field: Field, value: f64, tolerance: f64) -> Self {
        Self {
            field,
            op: MatchOp::Band {
                lo: value - tolerance,
                hi: value + tolerance,
            },
        }
    }

    /// Returns true if this is an exact-equality predicate.
    pub fn is_exact(&self) -> bool {
        matches!(self.op, MatchOp::EqInt(_) | MatchOp::EqFloat(_))
    }

    /// Checks whether a catalog row satisfies this predicate.
    pub fn matches(&self, record: &PlanetRecord) -> bool {
        match (self.op, self.field.value_of(record)) {
            (MatchOp::EqInt(expected), FieldValue::Int(actual)) => actual == expected,
            (MatchOp::EqFloat(expected), FieldValue::Float(actual)) => actual == expected,
            (MatchOp::Band { lo, hi }, FieldValue::Float(actual)) => lo <= actual && actual <= hi,
            // Operation and column type disagree; nothing can match
            _ => false,
        }
    }

    /// Checks whether a row satisfies every predicate (AND semantics).
    ///
    /// The empty slice matches every row: an all-absent criteria set is
    /// the "list everything" query, by contract rather than accident.
    pub fn matches_all(record: &PlanetRecord, predicates: &[Predicate]) -> bool {
        predicates.iter().all(|pred| pred.matches(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> PlanetRecord {
        PlanetRecord {
            pl_name: "Kepler-42 b".to_string(),
            stars: 1,
            moons: 0,
            disc_year: 2011,
            orbital_period: 50.0,
            radius: 0.78,
            mass: 0.018,
            equilibrium_temp: 720.0,
            solar_radius: 0.17,
            solar_mass: 0.13,
            rotational_velocity: 2.9,
            distance: 40.0,
            gaia_magnitude: 15.4,
        }
    }

    #[test]
    fn test_exact_int_match() {
        let record = make_record();

        assert!(Predicate::exact_int(Field::Stars, 1).matches(&record));
        assert!(!Predicate::exact_int(Field::Stars, 2).matches(&record));
        assert!(Predicate::exact_int(Field::Moons, 0).matches(&record));
        assert!(Predicate::exact_int(Field::DiscYear, 2011).matches(&record));
        assert!(!Predicate::exact_int(Field::DiscYear, 2012).matches(&record));
    }

    #[test]
    fn test_exact_float_match() {
        let record = make_record();

        assert!(Predicate::exact(Field::EquilibriumTemp, 720.0).matches(&record));
        assert!(!Predicate::exact(Field::EquilibriumTemp, 720.5).matches(&record));
    }

    #[test]
    fn test_band_is_closed_at_both_ends() {
        let record = make_record(); // orbital_period = 50.0

        // 30.0 centers a [10, 50] band: the upper endpoint is included
        assert!(Predicate::band(Field::OrbitalPeriod, 30.0, 20.0).matches(&record));
        // 70.0 centers a [50, 90] band: the lower endpoint is included
        assert!(Predicate::band(Field::OrbitalPeriod, 70.0, 20.0).matches(&record));
        // Just past the endpoint is excluded
        assert!(!Predicate::band(Field::OrbitalPeriod, 29.9, 20.0).matches(&record));
        assert!(!Predicate::band(Field::OrbitalPeriod, 70.1, 20.0).matches(&record));
    }

    #[test]
    fn test_matches_all_conjunction() {
        let record = make_record();

        let preds = vec![
            Predicate::exact_int(Field::Stars, 1),
            Predicate::band(Field::Distance, 45.0, 10.0),
        ];
        assert!(Predicate::matches_all(&record, &preds));

        let preds = vec![
            Predicate::exact_int(Field::Stars, 1),
            Predicate::exact_int(Field::Moons, 3),
        ];
        assert!(!Predicate::matches_all(&record, &preds));
    }

    #[test]
    fn test_empty_predicate_list_matches_everything() {
        let record = make_record();
        assert!(Predicate::matches_all(&record, &[]));
    }

    #[test]
    fn test_type_mismatch_never_matches() {
        let record = make_record();

        // A band over an integer column cannot be satisfied
        let pred = Predicate {
            field: Field::Stars,
            op: MatchOp::Band { lo: 0.0, hi: 5.0 },
        };
        assert!(!pred.matches(&record));
    }
}
