//! Simulation constants.
//!
//! The defaults reproduce the classic puzzle: a 10x10 grid, at most 20
//! countries, one million coins per city, and one coin per thousand passed to
//! each neighbour per day.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Side length of the square grid.
pub const GRID_SIZE: u32 = 10;
/// Upper bound on countries per case, enforced by input parsers.
pub const MAX_COUNTRIES: usize = 20;
/// Coins of its own currency each city starts with.
pub const INITIAL_CITY_BALANCE: u64 = 1_000_000;
/// A city sends `balance / REPRESENTATIVE_PORTION` of each currency to each neighbour.
pub const REPRESENTATIVE_PORTION: u64 = 1_000;
/// Ceiling on simulated days before the engine gives up.
pub const MAX_DAYS: u32 = 100_000;
/// Largest grid side a configuration may ask for.
pub const MAX_GRID_SIZE: u32 = 1_000;

/// Tunable constants for one simulation. Missing fields deserialize to the
/// classic defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffusionConfig {
    pub grid_size: u32,
    pub max_countries: usize,
    pub initial_city_balance: u64,
    pub representative_portion: u64,
    pub max_days: u32,
}

impl Default for DiffusionConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            max_countries: MAX_COUNTRIES,
            initial_city_balance: INITIAL_CITY_BALANCE,
            representative_portion: REPRESENTATIVE_PORTION,
            max_days: MAX_DAYS,
        }
    }
}

impl DiffusionConfig {
    /// Reject values that would make the grid empty or oversized, or the
    /// transfer rule divide by zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size > MAX_GRID_SIZE {
            return Err(ConfigError::TooLarge {
                field: "grid_size",
                value: self.grid_size as u64,
                max: MAX_GRID_SIZE as u64,
            });
        }
        let zero = [
            ("grid_size", self.grid_size == 0),
            ("max_countries", self.max_countries == 0),
            ("initial_city_balance", self.initial_city_balance == 0),
            ("representative_portion", self.representative_portion == 0),
            ("max_days", self.max_days == 0),
        ];
        match zero.into_iter().find(|(_, is_zero)| *is_zero) {
            Some((field, _)) => Err(ConfigError::Zero { field }),
            None => Ok(()),
        }
    }
}
