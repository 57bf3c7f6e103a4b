use crate::territory::GridPosition;

/// Errors from building a lattice out of territories.
///
/// Every variant is fatal to the case being built and to nothing else.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LatticeError {
    /// A grid position was claimed by a second territory.
    #[error("{existing} intersects with {incoming} on {position}")]
    Overlap {
        existing: String,
        incoming: String,
        position: GridPosition,
    },

    /// A region shares no edge with any other region.
    #[error("{region} has no connection with other countries")]
    DisconnectedRegion { region: String },

    /// The case contained no territories at all.
    #[error("case contains no countries")]
    EmptyInstance,

    /// A territory corner lies outside the grid.
    #[error("{region} corner {position} lies outside the {grid_size}x{grid_size} grid")]
    OutOfBounds {
        region: String,
        position: GridPosition,
        grid_size: u32,
    },

    /// A territory's lower-left corner lies above or right of its upper-right corner.
    #[error("{region} covers no cells")]
    EmptyFootprint { region: String },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors from validating a [`DiffusionConfig`](crate::config::DiffusionConfig).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be at least 1")]
    Zero { field: &'static str },

    #[error("{field} is {value}, the largest supported value is {max}")]
    TooLarge {
        field: &'static str,
        value: u64,
        max: u64,
    },
}

/// Errors from running the day loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("simulation did not finish within {limit} days")]
    DayLimitExceeded { limit: u32 },
}

/// Anything that can stop one case from producing standings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffusionError {
    #[error(transparent)]
    Lattice(#[from] LatticeError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}
