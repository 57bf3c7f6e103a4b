//! Audit tools: coin supply accounting and determinism checking.

use crate::config::DiffusionConfig;
use crate::engine::Engine;
use crate::error::LatticeError;
use crate::lattice::Lattice;
use crate::territory::Territory;

// ---------------------------------------------------------------------------
// Supply
// ---------------------------------------------------------------------------

/// Total coins of each currency across the lattice, counting both settled
/// balances and pending inflow. Indexed by issuing region.
pub fn currency_supply(lattice: &Lattice) -> Vec<u128> {
    let mut totals = vec![0u128; lattice.region_count()];
    for (_, cell) in lattice.cells() {
        for (currency, amount) in cell.balance().iter() {
            totals[currency.index()] += amount as u128;
        }
        for (currency, amount) in cell.pending().iter() {
            totals[currency.index()] += amount as u128;
        }
    }
    totals
}

/// Supply each currency starts with: one initial balance per issuing city.
pub fn expected_supply(lattice: &Lattice, config: &DiffusionConfig) -> Vec<u128> {
    lattice
        .regions()
        .iter()
        .map(|r| r.cells().len() as u128 * config.initial_city_balance as u128)
        .collect()
}

// ---------------------------------------------------------------------------
// Determinism validation
// ---------------------------------------------------------------------------

/// Result of a determinism validation run.
#[derive(Debug)]
pub struct DeterminismResult {
    /// Whether the two runs produced identical results.
    pub is_deterministic: bool,
    /// Day at which divergence was first detected (if any).
    pub divergence_day: Option<u32>,
    /// Hash log: (day, hash_run1, hash_run2) for each day.
    pub hash_log: Vec<(u32, u64, u64)>,
}

/// Build the same case twice and step both engines side by side for up to
/// `days` days, comparing state hashes after every day.
pub fn validate_determinism(
    territories: &[Territory],
    config: &DiffusionConfig,
    days: u32,
) -> Result<DeterminismResult, LatticeError> {
    let mut engine_a = Engine::new(territories, config.clone())?;
    let mut engine_b = Engine::new(territories, config.clone())?;

    let mut hash_log = Vec::new();
    let mut divergence_day = None;

    for _ in 0..days {
        if engine_a.is_finished() && engine_b.is_finished() {
            break;
        }
        engine_a.step();
        engine_b.step();

        let hash_a = engine_a.state_hash();
        let hash_b = engine_b.state_hash();
        let day = engine_a.day();
        hash_log.push((day, hash_a, hash_b));

        if hash_a != hash_b && divergence_day.is_none() {
            divergence_day = Some(day);
        }
    }

    Ok(DeterminismResult {
        is_deterministic: divergence_day.is_none(),
        divergence_day,
        hash_log,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn supply_starts_at_expected() {
        let config = DiffusionConfig::default();
        let lattice = Lattice::new(&classic_europe(), &config).unwrap();
        let supply = currency_supply(&lattice);
        assert_eq!(supply, expected_supply(&lattice, &config));
        assert_eq!(supply[0], 12 * 1_000_000);
        assert_eq!(supply[2], 4 * 1_000_000);
    }

    #[test]
    fn supply_holds_through_full_run() {
        let config = DiffusionConfig::default();
        let mut engine = Engine::new(&three_blocks(), config.clone()).unwrap();
        let expected = expected_supply(engine.lattice(), &config);
        engine.run().unwrap();
        assert_eq!(currency_supply(engine.lattice()), expected);
    }

    #[test]
    fn determinism_holds() {
        let result =
            validate_determinism(&classic_europe(), &DiffusionConfig::default(), 50).unwrap();
        assert!(result.is_deterministic);
        assert_eq!(result.divergence_day, None);
        assert_eq!(result.hash_log.len(), 50);
        assert_eq!(result.hash_log[0].0, 1);
    }

    #[test]
    fn determinism_stops_when_finished() {
        let result = validate_determinism(&pair(), &DiffusionConfig::default(), 50).unwrap();
        assert!(result.is_deterministic);
        assert_eq!(result.hash_log.len(), 1);
    }

    #[test]
    fn determinism_propagates_lattice_errors() {
        let result = validate_determinism(&[], &DiffusionConfig::default(), 5);
        assert!(matches!(result, Err(LatticeError::EmptyInstance)));
    }
}
