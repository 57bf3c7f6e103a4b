use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Identifies a city cell in the lattice's cell arena.
    pub struct CellId;
}

/// Identifies a region by its position in input order.
///
/// Every region issues exactly one currency, so the same id also keys that
/// currency in every cell's ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegionId(pub u32);

impl RegionId {
    /// Index into per-region and per-currency vectors.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
