//! The simulation engine: owns the lattice and runs the day pipeline.
//!
//! # Three-Phase Day
//!
//! Each `step()` runs:
//! 1. **Transfer** -- plan every coin movement from start-of-day balances,
//!    then debit senders and credit receivers' pending inflow
//! 2. **Settle** -- drain pending inflow into balances, flag complete cities
//! 3. **Completion** -- stamp the day on regions whose cities are all complete

use tracing::{debug, trace, warn};

use crate::cell::Cell;
use crate::config::DiffusionConfig;
use crate::error::{DiffusionError, LatticeError, SimulationError};
use crate::id::{CellId, RegionId};
use crate::lattice::Lattice;
use crate::ranking::{Standing, rank};
use crate::sim::{DayReport, SimState, StateHash, Transfer};
use crate::territory::Territory;

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Runs one case from construction to the final standings.
#[derive(Debug, Clone)]
pub struct Engine {
    lattice: Lattice,
    config: DiffusionConfig,

    /// Day counter and running totals.
    pub sim_state: SimState,

    /// Scratch buffer for the transfer phase, reused across days.
    transfers: Vec<Transfer>,
}

impl Engine {
    /// Build the lattice for a case.
    ///
    /// A case with a single region has nobody to trade with, so that region
    /// completes on day 0 and the engine starts out finished.
    pub fn new(territories: &[Territory], config: DiffusionConfig) -> Result<Self, LatticeError> {
        let mut lattice = Lattice::new(territories, &config)?;

        if lattice.region_count() == 1 {
            for cell in lattice.cells_mut().values_mut() {
                cell.refresh_complete();
            }
            lattice.regions_mut()[0].mark_complete(0);
            debug!(
                region = lattice.regions()[0].name(),
                "single region completes on day 0"
            );
        }

        Ok(Self {
            lattice,
            config,
            sim_state: SimState::new(),
            transfers: Vec::new(),
        })
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn config(&self) -> &DiffusionConfig {
        &self.config
    }

    /// Last finished day.
    pub fn day(&self) -> u32 {
        self.sim_state.day
    }

    /// True once every region has a completion day.
    pub fn is_finished(&self) -> bool {
        self.lattice.all_complete()
    }

    // -----------------------------------------------------------------------
    // Running
    // -----------------------------------------------------------------------

    /// Run days until every region is complete, bounded by the configured
    /// `max_days`.
    pub fn run(&mut self) -> Result<Vec<Standing>, SimulationError> {
        self.run_with_limit(self.config.max_days)
    }

    /// Run days until every region is complete or `max_days` days have passed.
    pub fn run_with_limit(&mut self, max_days: u32) -> Result<Vec<Standing>, SimulationError> {
        while !self.is_finished() {
            if self.sim_state.day >= max_days {
                warn!(limit = max_days, "simulation hit its day limit");
                return Err(SimulationError::DayLimitExceeded { limit: max_days });
            }
            self.step();
        }
        debug!(
            days = self.sim_state.day,
            units_moved = self.sim_state.units_moved,
            "simulation finished"
        );
        Ok(self.standings())
    }

    /// Run a single day. Does nothing once the engine is finished.
    pub fn step(&mut self) -> DayReport {
        if self.is_finished() {
            return DayReport::idle(self.sim_state.day);
        }
        let day = self.sim_state.day + 1;

        // Phase 1: Transfer -- every city pushes shares to its neighbours.
        let units_moved = self.phase_transfer();

        // Phase 2: Settle -- pending inflow lands in balances.
        let completed_cells = self.phase_settle();

        // Phase 3: Completion -- regions whose cities are all complete.
        let completed_regions = self.phase_completion(day);

        self.sim_state.day = day;
        self.sim_state.units_moved += units_moved;

        trace!(
            day,
            units_moved,
            completed_cells = completed_cells.len(),
            "day finished"
        );

        DayReport {
            day,
            units_moved,
            completed_cells,
            completed_regions,
        }
    }

    /// Completed regions ordered by completion day, ties in input order.
    pub fn standings(&self) -> Vec<Standing> {
        rank(self.lattice.regions())
    }

    // -----------------------------------------------------------------------
    // Phase 1: Transfer
    // -----------------------------------------------------------------------

    /// Every share is computed before any balance changes, so the phase is
    /// lock-step across the grid. Returns the number of coins moved.
    fn phase_transfer(&mut self) -> u64 {
        let portion = self.config.representative_portion;

        self.transfers.clear();
        for (from, cell) in self.lattice.cells() {
            for (currency, amount) in cell.shares(portion) {
                for &to in cell.neighbors() {
                    self.transfers.push(Transfer {
                        from,
                        to,
                        currency,
                        amount,
                    });
                }
            }
        }

        let cells = self.lattice.cells_mut();
        let mut moved = 0;
        for t in &self.transfers {
            cells[t.from].send(t.currency, t.amount);
            cells[t.to].receive(t.currency, t.amount);
            moved += t.amount;
        }
        moved
    }

    // -----------------------------------------------------------------------
    // Phase 2: Settle
    // -----------------------------------------------------------------------

    fn phase_settle(&mut self) -> Vec<CellId> {
        self.lattice
            .cells_mut()
            .iter_mut()
            .filter_map(|(id, cell)| cell.settle().then_some(id))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Phase 3: Completion
    // -----------------------------------------------------------------------

    fn phase_completion(&mut self, day: u32) -> Vec<RegionId> {
        let newly_complete: Vec<RegionId> = self
            .lattice
            .regions()
            .iter()
            .filter(|region| !region.is_complete())
            .filter(|region| {
                region
                    .cells()
                    .iter()
                    .all(|&id| self.lattice.cell(id).is_some_and(Cell::is_complete))
            })
            .map(|region| region.id())
            .collect();

        for &id in &newly_complete {
            let region = &mut self.lattice.regions_mut()[id.index()];
            region.mark_complete(day);
            debug!(region = region.name(), day, "region complete");
        }
        newly_complete
    }

    // -----------------------------------------------------------------------
    // State hash
    // -----------------------------------------------------------------------

    /// Deterministic hash of every balance, pending amount, and completion
    /// flag, plus the day counter.
    pub fn state_hash(&self) -> u64 {
        let mut hasher = StateHash::new();
        hasher.write_u32(self.sim_state.day);

        for (_, cell) in self.lattice.cells() {
            hasher.write_u32(cell.region().0);
            hasher.write_ledger(cell.balance());
            hasher.write_ledger(cell.pending());
            hasher.write_u32(cell.is_complete() as u32);
        }
        for region in self.lattice.regions() {
            hasher.write_u32(region.completion_day().unwrap_or(u32::MAX));
        }

        hasher.finish()
    }
}

/// Build and run one case with the given configuration.
pub fn simulate(
    territories: &[Territory],
    config: &DiffusionConfig,
) -> Result<Vec<Standing>, DiffusionError> {
    let mut engine = Engine::new(territories, config.clone())?;
    Ok(engine.run()?)
}
