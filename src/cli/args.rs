//! CLI argument definitions using clap
//!
//! Commands:
//! - exoquery search --catalog <path> [criteria flags] [--json]
//! - exoquery check --catalog <path>
//!
//! Criteria flags are all optional; an omitted flag is the "absent"
//! state, never a sentinel zero.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::query::Criteria;

/// exoquery - A strict, deterministic exoplanet catalog search engine
#[derive(Parser, Debug)]
#[command(name = "exoquery")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search the catalog with any combination of criteria
    Search {
        /// Path to the catalog CSV
        #[arg(long, default_value = "./planets.csv")]
        catalog: PathBuf,

        #[command(flatten)]
        criteria: CriteriaArgs,

        /// Print matches as a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },

    /// Load the catalog, validate it, and report its row count
    Check {
        /// Path to the catalog CSV
        #[arg(long, default_value = "./planets.csv")]
        catalog: PathBuf,
    },
}

/// One optional flag per filterable column.
#[derive(Args, Debug, Default)]
pub struct CriteriaArgs {
    /// Host system star count (exact)
    #[arg(long)]
    pub stars: Option<u32>,

    /// Known moon count (exact)
    #[arg(long)]
    pub moons: Option<u32>,

    /// Discovery year (exact)
    #[arg(long)]
    pub disc_year: Option<i32>,

    /// Orbital period in days (matched within ±20)
    #[arg(long)]
    pub orbital_period: Option<f64>,

    /// Planetary radius in Earth radii (matched within ±1)
    #[arg(long)]
    pub radius: Option<f64>,

    /// Planetary mass in Earth masses (matched within ±500)
    #[arg(long)]
    pub mass: Option<f64>,

    /// Equilibrium temperature in Kelvin (exact)
    #[arg(long)]
    pub equilibrium_temp: Option<f64>,

    /// Host star radius in solar radii (matched within ±1)
    #[arg(long)]
    pub solar_radius: Option<f64>,

    /// Host star mass in solar masses (matched within ±0.1)
    #[arg(long)]
    pub solar_mass: Option<f64>,

    /// Host star rotational velocity in km/s (matched within ±0.5)
    #[arg(long)]
    pub rotational_velocity: Option<f64>,

    /// Distance from Earth in parsecs (matched within ±10)
    #[arg(long)]
    pub distance: Option<f64>,

    /// Gaia G-band magnitude (matched within ±0.5)
    #[arg(long)]
    pub gaia_magnitude: Option<f64>,
}

impl From<CriteriaArgs> for Criteria {
    fn from(args: CriteriaArgs) -> Self {
        Criteria {
            stars: args.stars,
            moons: args.moons,
            disc_year: args.disc_year,
            orbital_period: args.orbital_period,
            radius: args.radius,
            mass: args.mass,
            equilibrium_temp: args.equilibrium_temp,
            solar_radius: args.solar_radius,
            solar_mass: args.solar_mass,
            rotational_velocity: args.rotational_velocity,
            distance: args.distance,
            gaia_magnitude: args.gaia_magnitude,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
