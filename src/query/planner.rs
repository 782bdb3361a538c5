//! Query planner
//!
//! Turns a [`Criteria`] set into an ordered list of predicates. This is
//! where the per-field activation rule lives: a field participates in
//! filtering iff it is supplied AND its value passes the field's validity
//! floor. A below-floor value is dropped silently (logged at debug), never
//! surfaced as an error; a negative mass or a pre-1990 discovery year is
//! semantically meaningless, not a reason to fail the whole query.

use super::criteria::Criteria;
use super::field::Field;
use super::predicate::Predicate;

/// Earliest discovery year a criterion may target.
pub const MIN_DISC_YEAR: i32 = 1990;

/// Builds the ordered predicate list for one criteria set.
///
/// Exact integer fields first, then the real-valued fields in schema
/// order. The empty criteria set (or one whose every value is below its
/// floor) plans to the empty list, which matches every row.
pub fn plan(criteria: &Criteria) -> Vec<Predicate> {
    let mut predicates = Vec::new();

    // Counts are unsigned, so their >= 0 floor holds by construction.
    if let Some(stars) = criteria.stars {
        predicates.push(Predicate::exact_int(Field::Stars, i64::from(stars)));
    }
    if let Some(moons) = criteria.moons {
        predicates.push(Predicate::exact_int(Field::Moons, i64::from(moons)));
    }
    if let Some(disc_year) = criteria.disc_year {
        if disc_year >= MIN_DISC_YEAR {
            predicates.push(Predicate::exact_int(Field::DiscYear, i64::from(disc_year)));
        } else {
            drop_below_floor(Field::DiscYear, f64::from(disc_year));
        }
    }

    let real_criteria = [
        (Field::OrbitalPeriod, criteria.orbital_period),
        (Field::Radius, criteria.radius),
        (Field::Mass, criteria.mass),
        (Field::EquilibriumTemp, criteria.equilibrium_temp),
        (Field::SolarRadius, criteria.solar_radius),
        (Field::SolarMass, criteria.solar_mass),
        (Field::RotationalVelocity, criteria.rotational_velocity),
        (Field::Distance, criteria.distance),
        (Field::GaiaMagnitude, criteria.gaia_magnitude),
    ];

    for (field, supplied) in real_criteria {
        let Some(value) = supplied else {
            continue;
        };
        // The comparison is deliberately negated so NaN also fails the floor
        if !(value >= 0.0) {
            drop_below_floor(field, value);
            continue;
        }
        match field.tolerance() {
            Some(tolerance) => predicates.push(Predicate::band(field, value, tolerance)),
            None => predicates.push(Predicate::exact(field, value)),
        }
    }

    predicates
}

fn drop_below_floor(field: Field, value: f64) {
    tracing::debug!(
        field = field.name(),
        value,
        "criterion below validity floor, ignored"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::predicate::MatchOp;

    #[test]
    fn test_empty_criteria_plans_to_empty_list() {
        let predicates = plan(&Criteria::new());
        assert!(predicates.is_empty());
    }

    #[test]
    fn test_supplied_fields_become_predicates() {
        let criteria = Criteria::new()
            .with_stars(1)
            .with_disc_year(2011)
            .with_orbital_period(50.0);

        let predicates = plan(&criteria);
        assert_eq!(predicates.len(), 3);
        assert_eq!(predicates[0], Predicate::exact_int(Field::Stars, 1));
        assert_eq!(predicates[1], Predicate::exact_int(Field::DiscYear, 2011));
        assert_eq!(
            predicates[2].op,
            MatchOp::Band { lo: 30.0, hi: 70.0 }
        );
    }

    #[test]
    fn test_below_floor_disc_year_dropped() {
        let criteria = Criteria::new().with_stars(1).with_disc_year(1800);

        let predicates = plan(&criteria);
        assert_eq!(predicates.len(), 1);
        assert_eq!(predicates[0].field, Field::Stars);
    }

    #[test]
    fn test_floor_year_itself_is_active() {
        let predicates = plan(&Criteria::new().with_disc_year(1990));
        assert_eq!(predicates.len(), 1);
    }

    #[test]
    fn test_negative_real_dropped() {
        let criteria = Criteria::new().with_mass(-3.0).with_radius(2.0);

        let predicates = plan(&criteria);
        assert_eq!(predicates.len(), 1);
        assert_eq!(predicates[0].field, Field::Radius);
    }

    #[test]
    fn test_nan_real_dropped() {
        let predicates = plan(&Criteria::new().with_distance(f64::NAN));
        assert!(predicates.is_empty());
    }

    #[test]
    fn test_zero_real_is_active() {
        // Zero passes the floor; absence is typed, not a sentinel
        let predicates = plan(&Criteria::new().with_orbital_period(0.0));
        assert_eq!(predicates.len(), 1);
        assert_eq!(
            predicates[0].op,
            MatchOp::Band { lo: -20.0, hi: 20.0 }
        );
    }

    #[test]
    fn test_equilibrium_temp_is_exact() {
        let predicates = plan(&Criteria::new().with_equilibrium_temp(912.0));
        assert_eq!(predicates.len(), 1);
        assert!(predicates[0].is_exact());
    }

    #[test]
    fn test_all_fields_supplied_plans_twelve() {
        let criteria = Criteria::new()
            .with_stars(1)
            .with_moons(0)
            .with_disc_year(2011)
            .with_orbital_period(0.36)
            .with_radius(0.78)
            .with_mass(0.018)
            .with_equilibrium_temp(720.0)
            .with_solar_radius(0.17)
            .with_solar_mass(0.13)
            .with_rotational_velocity(2.9)
            .with_distance(40.0)
            .with_gaia_magnitude(15.4);

        assert_eq!(plan(&criteria).len(), 12);
    }
}
