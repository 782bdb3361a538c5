//! Search criteria
//!
//! One optional target value per filterable column. Absence is typed
//! (`None`), never a sentinel: a genuine `moons == 0` query is distinct
//! from "moons not supplied".

use serde::{Deserialize, Serialize};

/// The per-query set of optional target values.
///
/// `Default` is the all-absent criteria set, which matches every row.
/// Supplied values below a field's validity floor are dropped at plan
/// time, not rejected; see the planner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Criteria {
    /// Host system star count (exact)
    pub stars: Option<u32>,
    /// Known moon count (exact)
    pub moons: Option<u32>,
    /// Discovery year (exact, floor 1990)
    pub disc_year: Option<i32>,
    /// Orbital period in days (±20)
    pub orbital_period: Option<f64>,
    /// Planetary radius in Earth radii (±1)
    pub radius: Option<f64>,
    /// Planetary mass in Earth masses (±500)
    pub mass: Option<f64>,
    /// Equilibrium temperature in Kelvin (exact)
    pub equilibrium_temp: Option<f64>,
    /// Host star radius in solar radii (±1)
    pub solar_radius: Option<f64>,
    /// Host star mass in solar masses (±0.1)
    pub solar_mass: Option<f64>,
    /// Host star rotational velocity in km/s (±0.5)
    pub rotational_velocity: Option<f64>,
    /// Distance from Earth in parsecs (±10)
    pub distance: Option<f64>,
    /// Gaia G-band magnitude (±0.5)
    pub gaia_magnitude: Option<f64>,
}

impl Criteria {
    /// Creates the all-absent criteria set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the star count criterion.
    pub fn with_stars(mut self, stars: u32) -> Self {
        self.stars = Some(stars);
        self
    }

    /// Sets the moon count criterion.
    pub fn with_moons(mut self, moons: u32) -> Self {
        self.moons = Some(moons);
        self
    }

    /// Sets the discovery year criterion.
    pub fn with_disc_year(mut self, disc_year: i32) -> Self {
        self.disc_year = Some(disc_year);
        self
    }

    /// Sets the orbital period criterion.
    pub fn with_orbital_period(mut self, orbital_period: f64) -> Self {
        self.orbital_period = Some(orbital_period);
        self
    }

    /// Sets the planetary radius criterion.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    /// Sets the planetary mass criterion.
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = Some(mass);
        self
    }

    /// Sets the equilibrium temperature criterion.
    pub fn with_equilibrium_temp(mut self, equilibrium_temp: f64) -> Self {
        self.equilibrium_temp = Some(equilibrium_temp);
        self
    }

    /// Sets the solar radius criterion.
    pub fn with_solar_radius(mut self, solar_radius: f64) -> Self {
        self.solar_radius = Some(solar_radius);
        self
    }

    /// Sets the solar mass criterion.
    pub fn with_solar_mass(mut self, solar_mass: f64) -> Self {
        self.solar_mass = Some(solar_mass);
        self
    }

    /// Sets the rotational velocity criterion.
    pub fn with_rotational_velocity(mut self, rotational_velocity: f64) -> Self {
        self.rotational_velocity = Some(rotational_velocity);
        self
    }

    /// Sets the distance criterion.
    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Sets the Gaia magnitude criterion.
    pub fn with_gaia_magnitude(mut self, gaia_magnitude: f64) -> Self {
        self.gaia_magnitude = Some(gaia_magnitude);
        self
    }

    /// Returns true if no field is supplied at all.
    pub fn is_empty(&self) -> bool {
        self.supplied_count() == 0
    }

    /// Number of supplied fields, before validity-floor filtering.
    pub fn supplied_count(&self) -> usize {
        [
            self.stars.is_some(),
            self.moons.is_some(),
            self.disc_year.is_some(),
            self.orbital_period.is_some(),
            self.radius.is_some(),
            self.mass.is_some(),
            self.equilibrium_temp.is_some(),
            self.solar_radius.is_some(),
            self.solar_mass.is_some(),
            self.rotational_velocity.is_some(),
            self.distance.is_some(),
            self.gaia_magnitude.is_some(),
        ]
        .iter()
        .filter(|supplied| **supplied)
        .count()
    }
}
