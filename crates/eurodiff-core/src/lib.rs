//! Eurodiff Core -- the currency diffusion engine.
//!
//! Countries are axis-aligned rectangles on a small bounded grid. Every unit
//! square of a country is a city holding a balance of every country's
//! currency. Each day, cities pass a representative portion of each balance to
//! their orthogonal neighbours; the simulation ends on the first day every city
//! holds at least one coin of every currency.
//!
//! # Day Pipeline
//!
//! Each call to [`engine::Engine::step`] advances the simulation by one day:
//!
//! 1. **Transfer** -- every city computes its outgoing shares from the balances
//!    it held at the start of the day and pushes them into its neighbours'
//!    pending inflow.
//! 2. **Settle** -- every city drains its pending inflow into its balance and
//!    marks itself complete once it holds every currency.
//! 3. **Completion** -- every region whose cities are all complete records the
//!    current day as its completion day.
//!
//! Transfer finishes over the whole grid before any city settles, so no city
//! ever observes another city's balance mid-day.
//!
//! # Key Types
//!
//! - [`territory::Territory`] -- a named rectangle; the input to the engine.
//! - [`lattice::Lattice`] -- padded grid of optional cells, regions, and
//!   adjacency. Rejects overlapping and disconnected layouts.
//! - [`engine::Engine`] -- runs days until every region is complete.
//! - [`ranking::Standing`] -- one row of the final result, ordered by
//!   completion day.
//! - [`config::DiffusionConfig`] -- grid size and balance constants.

pub mod cell;
pub mod config;
pub mod engine;
pub mod error;
pub mod id;
pub mod lattice;
pub mod ledger;
pub mod ranking;
pub mod region;
pub mod sim;
pub mod territory;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::DiffusionConfig;
pub use engine::{Engine, simulate};
pub use error::{ConfigError, DiffusionError, LatticeError, SimulationError};
pub use ranking::Standing;
pub use territory::{GridPosition, Territory};
