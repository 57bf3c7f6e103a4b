//! A single city: one unit square of a region.

use crate::id::{CellId, RegionId};
use crate::ledger::Ledger;
use crate::territory::GridPosition;

/// One city on the lattice.
///
/// `balance` holds the coins the city owns. `pending` collects coins sent to
/// it during the transfer phase and is empty outside of a day.
#[derive(Debug, Clone)]
pub struct Cell {
    position: GridPosition,
    region: RegionId,
    balance: Ledger,
    pending: Ledger,
    neighbors: Vec<CellId>,
    complete: bool,
}

impl Cell {
    /// A city of `region` holding `initial_balance` of its own currency and
    /// nothing of the other `currencies - 1`.
    pub(crate) fn new(
        position: GridPosition,
        region: RegionId,
        currencies: usize,
        initial_balance: u64,
    ) -> Self {
        let mut balance = Ledger::zeroed(currencies);
        balance.credit(region, initial_balance);
        Self {
            position,
            region,
            balance,
            pending: Ledger::zeroed(currencies),
            neighbors: Vec::new(),
            complete: false,
        }
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }

    pub fn region(&self) -> RegionId {
        self.region
    }

    pub fn balance(&self) -> &Ledger {
        &self.balance
    }

    pub fn pending(&self) -> &Ledger {
        &self.pending
    }

    pub fn neighbors(&self) -> &[CellId] {
        &self.neighbors
    }

    /// Whether the city has held every currency at some point. Never reverts.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: Vec<CellId>) {
        self.neighbors = neighbors;
    }

    /// Per-currency amount this city sends to each neighbour today. Currencies
    /// whose share truncates to zero are skipped.
    pub fn shares(&self, portion: u64) -> impl Iterator<Item = (RegionId, u64)> + '_ {
        self.balance
            .iter()
            .map(move |(currency, amount)| (currency, amount / portion))
            .filter(|&(_, share)| share > 0)
    }

    pub(crate) fn send(&mut self, currency: RegionId, amount: u64) {
        self.balance.debit(currency, amount);
    }

    pub(crate) fn receive(&mut self, currency: RegionId, amount: u64) {
        self.pending.credit(currency, amount);
    }

    /// Drain pending inflow into the balance, then mark the city complete if
    /// it now holds every currency. Returns `true` only on the day the city
    /// first becomes complete.
    pub(crate) fn settle(&mut self) -> bool {
        self.pending.drain_into(&mut self.balance);
        self.refresh_complete()
    }

    /// Set the complete flag if every balance is positive. Returns `true` if
    /// the flag changed.
    pub(crate) fn refresh_complete(&mut self) -> bool {
        if self.complete || !self.balance.all_positive() {
            return false;
        }
        self.complete = true;
        true
    }
}
