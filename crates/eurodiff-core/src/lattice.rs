//! The padded city grid: placement, adjacency, and connectivity checks.
//!
//! The grid has one empty row and column of padding on every side, so a city
//! on the border can look at all four neighbours without a bounds check.

use slotmap::SlotMap;
use tracing::debug;

use crate::cell::Cell;
use crate::config::{DiffusionConfig, MAX_GRID_SIZE};
use crate::error::{ConfigError, LatticeError};
use crate::id::{CellId, RegionId};
use crate::region::Region;
use crate::territory::{Direction, GridPosition, Territory};

// ---------------------------------------------------------------------------
// Lattice
// ---------------------------------------------------------------------------

/// Regions and their cities laid out on a fixed square grid.
#[derive(Debug, Clone)]
pub struct Lattice {
    grid_size: u32,
    /// Row-major `(grid_size + 2)^2` slots. Padding slots are always `None`.
    grid: Vec<Option<CellId>>,
    cells: SlotMap<CellId, Cell>,
    regions: Vec<Region>,
}

impl Lattice {
    /// Build the grid for one case.
    ///
    /// Territories are placed in input order. Adjacency is derived only after
    /// every city exists, then every region must touch another region unless
    /// it is the only one.
    pub fn new(territories: &[Territory], config: &DiffusionConfig) -> Result<Self, LatticeError> {
        config.validate()?;
        if territories.is_empty() {
            return Err(LatticeError::EmptyInstance);
        }

        let side = config.grid_size as usize + 2;
        let slots = side
            .checked_mul(side)
            .ok_or(ConfigError::TooLarge {
                field: "grid_size",
                value: config.grid_size as u64,
                max: MAX_GRID_SIZE as u64,
            })?;
        let mut lattice = Self {
            grid_size: config.grid_size,
            grid: vec![None; slots],
            cells: SlotMap::with_capacity_and_key(
                territories.iter().map(Territory::cell_count).sum(),
            ),
            regions: Vec::with_capacity(territories.len()),
        };

        for territory in territories {
            lattice.place(territory, territories.len(), config.initial_city_balance)?;
        }
        lattice.link_neighbors();
        lattice.validate_connectivity()?;

        debug!(
            regions = lattice.regions.len(),
            cells = lattice.cells.len(),
            "lattice built"
        );
        Ok(lattice)
    }

    // -- Construction --

    fn place(
        &mut self,
        territory: &Territory,
        currencies: usize,
        initial_balance: u64,
    ) -> Result<(), LatticeError> {
        for corner in [territory.lower_left, territory.upper_right] {
            if !corner.is_inside(self.grid_size) {
                return Err(LatticeError::OutOfBounds {
                    region: territory.name.clone(),
                    position: corner,
                    grid_size: self.grid_size,
                });
            }
        }
        if territory.cell_count() == 0 {
            return Err(LatticeError::EmptyFootprint {
                region: territory.name.clone(),
            });
        }

        let id = RegionId(self.regions.len() as u32);
        let mut region = Region::new(id, territory.clone());

        for pos in territory.positions() {
            let slot = self.slot(pos);
            if let Some(existing) = self.grid[slot] {
                let owner = self.cells[existing].region();
                return Err(LatticeError::Overlap {
                    existing: self.regions[owner.index()].name().to_string(),
                    incoming: territory.name.clone(),
                    position: pos,
                });
            }
            let cell = self
                .cells
                .insert(Cell::new(pos, id, currencies, initial_balance));
            self.grid[slot] = Some(cell);
            region.push_cell(cell);
        }

        self.regions.push(region);
        Ok(())
    }

    fn link_neighbors(&mut self) {
        let links: Vec<(CellId, Vec<CellId>)> = self
            .cells
            .iter()
            .map(|(id, cell)| {
                let pos = cell.position();
                let neighbors = Direction::all()
                    .into_iter()
                    .filter_map(|dir| self.grid[self.slot(pos.step(dir))])
                    .collect();
                (id, neighbors)
            })
            .collect();

        for (id, neighbors) in links {
            self.cells[id].set_neighbors(neighbors);
        }
    }

    fn validate_connectivity(&self) -> Result<(), LatticeError> {
        if self.regions.len() <= 1 {
            return Ok(());
        }
        match self
            .regions
            .iter()
            .find(|region| !self.has_foreign_neighbors(region.id()))
        {
            Some(region) => Err(LatticeError::DisconnectedRegion {
                region: region.name().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Grid slot for a position in `0..=grid_size + 1` on both axes.
    fn slot(&self, pos: GridPosition) -> usize {
        let side = self.grid_size as usize + 2;
        pos.y as usize * side + pos.x as usize
    }

    // -- Queries --

    /// Whether any city of `region` borders a city of another region.
    pub fn has_foreign_neighbors(&self, region: RegionId) -> bool {
        let Some(region) = self.regions.get(region.index()) else {
            return false;
        };
        region.cells().iter().any(|&id| {
            self.cells[id]
                .neighbors()
                .iter()
                .any(|&n| self.cells[n].region() != region.id())
        })
    }

    /// The city at a position, if any. Positions off the grid return `None`.
    pub fn cell_id_at(&self, pos: GridPosition) -> Option<CellId> {
        let max = self.grid_size as i32 + 1;
        if !(0..=max).contains(&pos.x) || !(0..=max).contains(&pos.y) {
            return None;
        }
        self.grid[self.slot(pos)]
    }

    pub fn cell_at(&self, pos: GridPosition) -> Option<&Cell> {
        self.cell_id_at(pos).map(|id| &self.cells[id])
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id)
    }

    pub fn cells(&self) -> impl Iterator<Item = (CellId, &Cell)> {
        self.cells.iter()
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Regions in input order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.index())
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn all_complete(&self) -> bool {
        self.regions.iter().all(Region::is_complete)
    }

    // -- Mutation (engine only) --

    pub(crate) fn cells_mut(&mut self) -> &mut SlotMap<CellId, Cell> {
        &mut self.cells
    }

    pub(crate) fn regions_mut(&mut self) -> &mut [Region] {
        &mut self.regions
    }
}
