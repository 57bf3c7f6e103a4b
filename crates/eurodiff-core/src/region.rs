use crate::id::{CellId, RegionId};
use crate::territory::Territory;

/// A country: its territory, its cities in placement order, and the day it
/// became complete.
#[derive(Debug, Clone)]
pub struct Region {
    id: RegionId,
    territory: Territory,
    cells: Vec<CellId>,
    completion_day: Option<u32>,
}

impl Region {
    pub(crate) fn new(id: RegionId, territory: Territory) -> Self {
        Self {
            id,
            cells: Vec::with_capacity(territory.cell_count()),
            territory,
            completion_day: None,
        }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    /// The region's name, which doubles as its currency's name.
    pub fn name(&self) -> &str {
        &self.territory.name
    }

    pub fn territory(&self) -> &Territory {
        &self.territory
    }

    pub fn cells(&self) -> &[CellId] {
        &self.cells
    }

    /// The day every city first held every currency, or `None` while any
    /// city is still missing one.
    pub fn completion_day(&self) -> Option<u32> {
        self.completion_day
    }

    pub fn is_complete(&self) -> bool {
        self.completion_day.is_some()
    }

    pub(crate) fn push_cell(&mut self, cell: CellId) {
        self.cells.push(cell);
    }

    /// Record the completion day. Later calls are ignored.
    pub(crate) fn mark_complete(&mut self, day: u32) {
        if self.completion_day.is_none() {
            self.completion_day = Some(day);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::territory::GridPosition;

    fn region() -> Region {
        Region::new(
            RegionId(0),
            Territory::new("France", GridPosition::new(1, 4), GridPosition::new(4, 6)),
        )
    }

    #[test]
    fn name_comes_from_territory() {
        let r = region();
        assert_eq!(r.name(), "France");
        assert_eq!(r.id(), RegionId(0));
        assert!(r.cells().is_empty());
    }

    #[test]
    fn completion_day_set_once() {
        let mut r = region();
        assert!(!r.is_complete());
        r.mark_complete(12);
        r.mark_complete(40);
        assert_eq!(r.completion_day(), Some(12));
        assert!(r.is_complete());
    }
}
