//! Catalog type definitions
//!
//! One [`PlanetRecord`] per catalog row, with the fixed planet schema:
//! the `pl_name` identifier, stellar-system counts, and physical
//! quantities. Column names in the CSV source carry spaces
//! (`"orbital period"`, `"gaia magnitude"`); the serde renames map them
//! onto the field names used everywhere else in the crate.

use serde::{Deserialize, Serialize};

/// A single catalog row.
///
/// `pl_name` is the output key of every query and is never filtered on.
/// All other fields are filterable; see the query subsystem for their
/// match modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetRecord {
    /// Planet identifier (non-null, not necessarily unique)
    pub pl_name: String,
    /// Number of stars in the host system
    pub stars: u32,
    /// Number of known moons
    pub moons: u32,
    /// Discovery year
    pub disc_year: i32,
    /// Orbital period in days
    #[serde(rename = "orbital period")]
    pub orbital_period: f64,
    /// Planetary radius in Earth radii
    pub radius: f64,
    /// Planetary mass in Earth masses
    pub mass: f64,
    /// Equilibrium temperature in Kelvin
    #[serde(rename = "equilibrium temp")]
    pub equilibrium_temp: f64,
    /// Host star radius in solar radii
    #[serde(rename = "solar radius")]
    pub solar_radius: f64,
    /// Host star mass in solar masses
    #[serde(rename = "solar mass")]
    pub solar_mass: f64,
    /// Host star rotational velocity in km/s
    #[serde(rename = "rotational velocity")]
    pub rotational_velocity: f64,
    /// Distance from Earth in parsecs
    pub distance: f64,
    /// Gaia G-band magnitude
    #[serde(rename = "gaia magnitude")]
    pub gaia_magnitude: f64,
}

/// The immutable, fully-loaded planet catalog.
///
/// Row order is source order and is the order every query result follows.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<PlanetRecord>,
}

impl Catalog {
    /// Creates a catalog from already-validated records.
    pub fn new(records: Vec<PlanetRecord>) -> Self {
        Self { records }
    }

    /// Number of rows in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog holds no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over rows in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanetRecord> {
        self.records.iter()
    }

    /// All rows, in source order.
    pub fn records(&self) -> &[PlanetRecord] {
        &self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(name: &str) -> PlanetRecord {
        PlanetRecord {
            pl_name: name.to_string(),
            stars: 1,
            moons: 0,
            disc_year: 2011,
            orbital_period: 0.36,
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
    fn test_catalog_preserves_order() {
        let catalog = Catalog::new(vec![
            make_record("b"),
            make_record("a"),
            make_record("c"),
        ]);

        let names: Vec<&str> = catalog.iter().map(|r| r.pl_name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
