//! Simulation state, per-day results, and the state hash.

use crate::id::{CellId, RegionId};
use crate::ledger::Ledger;

// ---------------------------------------------------------------------------
// Simulation state
// ---------------------------------------------------------------------------

/// Mutable simulation state tracked by the engine.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct SimState {
    /// Last finished day. Zero before the first day runs.
    pub day: u32,

    /// Coins moved between cities over the whole run.
    pub units_moved: u64,
}

impl SimState {
    pub fn new() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// Day report
// ---------------------------------------------------------------------------

/// A single coin movement planned during the transfer phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transfer {
    pub from: CellId,
    pub to: CellId,
    pub currency: RegionId,
    pub amount: u64,
}

/// What happened during one call to `Engine::step()`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayReport {
    /// The day that just finished. Equal to the previous day when the engine
    /// had already finished and nothing ran.
    pub day: u32,

    /// Total coins that changed hands.
    pub units_moved: u64,

    /// Cities that became complete today.
    pub completed_cells: Vec<CellId>,

    /// Regions that became complete today, in input order.
    pub completed_regions: Vec<RegionId>,
}

impl DayReport {
    /// A report for a step that did not run.
    pub fn idle(day: u32) -> Self {
        Self {
            day,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// State hash
// ---------------------------------------------------------------------------

/// Running FNV-1a (64-bit) digest of the diffusion state.
///
/// The engine feeds it the day counter, then every city's owning region,
/// settled balances, pending inflow and completion flag, then every region's
/// completion day. Two runs of the same case must agree after every day.
/// Not cryptographic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateHash(pub u64);

impl StateHash {
    const FNV_OFFSET: u64 = 0xcbf29ce484222325;
    const FNV_PRIME: u64 = 0x100000001b3;

    pub fn new() -> Self {
        Self(Self::FNV_OFFSET)
    }

    /// Feed bytes into the hash.
    pub fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 ^= b as u64;
            self.0 = self.0.wrapping_mul(Self::FNV_PRIME);
        }
    }

    pub fn write_u64(&mut self, v: u64) {
        self.write(&v.to_le_bytes());
    }

    pub fn write_u32(&mut self, v: u32) {
        self.write(&v.to_le_bytes());
    }

    /// Feed a ledger's length, then every amount in currency order.
    pub fn write_ledger(&mut self, ledger: &Ledger) {
        self.write_u32(ledger.len() as u32);
        for (_, amount) in ledger.iter() {
            self.write_u64(amount);
        }
    }

    pub fn finish(self) -> u64 {
        self.0
    }
}

impl Default for StateHash {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_state_starts_at_day_zero() {
        let state = SimState::new();
        assert_eq!(state.day, 0);
        assert_eq!(state.units_moved, 0);
    }

    #[test]
    fn idle_report_is_empty() {
        let report = DayReport::idle(7);
        assert_eq!(report.day, 7);
        assert_eq!(report.units_moved, 0);
        assert!(report.completed_cells.is_empty());
        assert!(report.completed_regions.is_empty());
    }

    fn ledger(amounts: &[u64]) -> Ledger {
        let mut ledger = Ledger::zeroed(amounts.len());
        for (i, &amount) in amounts.iter().enumerate() {
            ledger.credit(RegionId(i as u32), amount);
        }
        ledger
    }

    fn hash_of(balance: &Ledger, pending: &Ledger, complete: bool) -> u64 {
        let mut h = StateHash::new();
        h.write_ledger(balance);
        h.write_ledger(pending);
        h.write_u32(complete as u32);
        h.finish()
    }

    #[test]
    fn equal_ledgers_hash_equal() {
        let a = hash_of(&ledger(&[999_000, 1_000]), &ledger(&[0, 0]), true);
        let b = hash_of(&ledger(&[999_000, 1_000]), &ledger(&[0, 0]), true);
        assert_eq!(a, b);
    }

    #[test]
    fn coin_in_flight_changes_hash() {
        // Same total supply, but one coin still pending instead of settled.
        let settled = hash_of(&ledger(&[999_000, 1_000]), &ledger(&[0, 0]), false);
        let in_flight = hash_of(&ledger(&[999_000, 999]), &ledger(&[0, 1]), false);
        assert_ne!(settled, in_flight);
    }

    #[test]
    fn completion_flag_changes_hash() {
        let balance = ledger(&[500, 500]);
        let pending = ledger(&[0, 0]);
        assert_ne!(
            hash_of(&balance, &pending, false),
            hash_of(&balance, &pending, true)
        );
    }

    #[test]
    fn currency_order_matters() {
        let empty = ledger(&[0, 0]);
        assert_ne!(
            hash_of(&ledger(&[1, 2]), &empty, false),
            hash_of(&ledger(&[2, 1]), &empty, false)
        );
    }
}
