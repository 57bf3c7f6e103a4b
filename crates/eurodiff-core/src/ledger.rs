use serde::{Deserialize, Serialize};

use crate::id::RegionId;

/// Coin counts for every currency in a case, indexed by the issuing region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    amounts: Vec<u64>,
}

impl Ledger {
    /// A ledger with every currency at zero.
    pub fn zeroed(currencies: usize) -> Self {
        Self {
            amounts: vec![0; currencies],
        }
    }

    pub fn get(&self, currency: RegionId) -> u64 {
        self.amounts.get(currency.index()).copied().unwrap_or(0)
    }

    pub fn credit(&mut self, currency: RegionId, amount: u64) {
        self.amounts[currency.index()] += amount;
    }

    /// Remove coins. Callers only debit what the ledger already holds.
    pub fn debit(&mut self, currency: RegionId, amount: u64) {
        let slot = &mut self.amounts[currency.index()];
        debug_assert!(*slot >= amount, "debit {amount} exceeds balance {slot}");
        *slot -= amount;
    }

    /// Number of currencies tracked.
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    /// Iterate over `(currency, amount)` pairs in currency order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, u64)> + '_ {
        self.amounts
            .iter()
            .enumerate()
            .map(|(i, &amount)| (RegionId(i as u32), amount))
    }

    /// True when every currency has at least one coin.
    pub fn all_positive(&self) -> bool {
        self.amounts.iter().all(|&a| a > 0)
    }

    /// Move every amount into `target`, leaving this ledger zeroed.
    /// Returns the number of coins moved.
    pub fn drain_into(&mut self, target: &mut Ledger) -> u64 {
        let mut moved = 0;
        for (dst, src) in target.amounts.iter_mut().zip(self.amounts.iter_mut()) {
            *dst += *src;
            moved += *src;
            *src = 0;
        }
        moved
    }

    /// True when every amount is zero.
    pub fn is_clear(&self) -> bool {
        self.amounts.iter().all(|&a| a == 0)
    }
}
