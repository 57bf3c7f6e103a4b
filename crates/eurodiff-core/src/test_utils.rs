//! Shared test helpers for integration tests and benchmarks.
//!
//! Gated behind `#[cfg(any(test, feature = "test-utils"))]` so these helpers
//! are available in unit tests, integration tests, and benchmarks (via the
//! `test-utils` feature).

use crate::config::DiffusionConfig;
use crate::engine::Engine;
use crate::ranking::Standing;
use crate::territory::{GridPosition, Territory};

// ===========================================================================
// Territory constructors
// ===========================================================================

/// A territory from `(x, y)` corner tuples.
pub fn territory(name: &str, lower_left: (i32, i32), upper_right: (i32, i32)) -> Territory {
    Territory::new(
        name,
        GridPosition::new(lower_left.0, lower_left.1),
        GridPosition::new(upper_right.0, upper_right.1),
    )
}

/// A valid country name for index `i` (`Ra`, `Rb`, ..., `Rz`, `Raa`, ...).
pub fn region_name(i: usize) -> String {
    let mut name = String::from("R");
    let mut n = i;
    loop {
        name.push((b'a' + (n % 26) as u8) as char);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    name
}

// ===========================================================================
// Reference cases
// ===========================================================================

/// France, Spain, Portugal: Spain 382, Portugal 416, France 1325.
pub fn classic_europe() -> Vec<Territory> {
    vec![
        territory("France", (1, 4), (4, 6)),
        territory("Spain", (3, 1), (6, 3)),
        territory("Portugal", (1, 1), (2, 2)),
    ]
}

/// Netherlands above Belgium: both complete on day 2.
pub fn benelux() -> Vec<Territory> {
    vec![
        territory("Netherlands", (1, 3), (2, 4)),
        territory("Belgium", (1, 1), (2, 2)),
    ]
}

/// Two single-city countries side by side: both complete on day 1.
pub fn pair() -> Vec<Territory> {
    vec![territory("Aa", (1, 1), (1, 1)), territory("Bb", (2, 1), (2, 1))]
}

/// Two 3x3 blocks under a 6x3 strip: Alpha 49, Beta 49, Gamma 577.
pub fn three_blocks() -> Vec<Territory> {
    vec![
        territory("Alpha", (1, 1), (3, 3)),
        territory("Beta", (4, 1), (6, 3)),
        territory("Gamma", (1, 4), (6, 6)),
    ]
}

/// Twenty one-column countries tiling the full 10x10 grid in two rows.
pub fn twenty_strips() -> Vec<Territory> {
    (0..20)
        .map(|i| {
            let x = (i % 10) as i32 + 1;
            let (yl, yh) = if i < 10 { (1, 5) } else { (6, 10) };
            territory(&region_name(i), (x, yl), (x, yh))
        })
        .collect()
}

// ===========================================================================
// Engine helpers
// ===========================================================================

pub fn default_engine(territories: &[Territory]) -> Engine {
    Engine::new(territories, DiffusionConfig::default()).expect("test case should build")
}

/// Build and run a case with the default configuration.
pub fn run_case(territories: &[Territory]) -> Vec<Standing> {
    default_engine(territories)
        .run()
        .expect("test case should finish")
}
