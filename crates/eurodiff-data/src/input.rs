//! Text input format: a country count, one line per country, repeated until a
//! line holding `0`.
//!
//! ```text
//! 3
//! France 1 4 4 6
//! Spain 3 1 6 3
//! Portugal 1 1 2 2
//! 0
//! ```
//!
//! The same per-country rules are applied to structured scenario files through
//! [`validate_case`].

use std::collections::HashSet;
use std::fmt;

use eurodiff_core::config::DiffusionConfig;
use eurodiff_core::territory::{GridPosition, Territory};
use tracing::debug;

// ===========================================================================
// Errors
// ===========================================================================

/// Where an input problem was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// 1-based line in a text input.
    Line(usize),
    /// 1-based case and country index in a structured scenario.
    Country { case: usize, index: usize },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Line(line) => write!(f, "line {line}"),
            Location::Country { case, index } => write!(f, "case {case}, country {index}"),
        }
    }
}

/// Errors in the shape or content of an input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("error at {at} {{{text}}}: invalid number of tokens")]
    TokenCount { at: Location, text: String },

    #[error("error at {at} {{{text}}}: invalid country name")]
    InvalidName { at: Location, text: String },

    #[error("error at {at} {{{text}}}: invalid country coordinates")]
    InvalidCoordinates { at: Location, text: String },

    /// Lower-left corner lies right of or above the upper-right corner.
    #[error("error at {at} {{{text}}}: lower-left corner exceeds upper-right corner")]
    InvertedCorners { at: Location, text: String },

    #[error("error at {at} {{{text}}}: expected a country count")]
    InvalidCount { at: Location, text: String },

    #[error("error in input for case {case}: invalid amount of countries")]
    CountryAmount { case: usize },

    #[error("error in input for case {case}: country '{name}' appears more than once")]
    DuplicateName { case: usize, name: String },

    #[error("error in input for case {case}: expected {expected} countries, input ended after {found}")]
    UnexpectedEnd {
        case: usize,
        expected: usize,
        found: usize,
    },
}

// ===========================================================================
// Country rules
// ===========================================================================

/// A country name is one uppercase ASCII letter followed by 1 to 24 lowercase
/// ASCII letters.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest = chars.as_str();
    first.is_ascii_uppercase()
        && (1..=24).contains(&rest.len())
        && rest.chars().all(|c| c.is_ascii_lowercase())
}

/// Check a single territory against the naming and coordinate rules.
///
/// `text` is echoed back in any error so the caller can show the offending
/// input.
pub fn check_territory(
    territory: &Territory,
    at: Location,
    text: &str,
    config: &DiffusionConfig,
) -> Result<(), InputError> {
    if !is_valid_name(&territory.name) {
        return Err(InputError::InvalidName {
            at,
            text: text.to_string(),
        });
    }
    let (ll, ur) = (territory.lower_left, territory.upper_right);
    if !ll.is_inside(config.grid_size) || !ur.is_inside(config.grid_size) {
        return Err(InputError::InvalidCoordinates {
            at,
            text: text.to_string(),
        });
    }
    if ll.x > ur.x || ll.y > ur.y {
        return Err(InputError::InvertedCorners {
            at,
            text: text.to_string(),
        });
    }
    Ok(())
}

fn check_amount(case: usize, count: usize, config: &DiffusionConfig) -> Result<(), InputError> {
    if count == 0 || count > config.max_countries {
        return Err(InputError::CountryAmount { case });
    }
    Ok(())
}

/// Validate an already-deserialized case: its size, every territory, and name
/// uniqueness. `case` is 1-based.
pub fn validate_case(
    case: usize,
    territories: &[Territory],
    config: &DiffusionConfig,
) -> Result<(), InputError> {
    check_amount(case, territories.len(), config)?;
    let mut names = HashSet::new();
    for (i, territory) in territories.iter().enumerate() {
        let at = Location::Country { case, index: i + 1 };
        check_territory(territory, at, &describe(territory), config)?;
        if !names.insert(territory.name.as_str()) {
            return Err(InputError::DuplicateName {
                case,
                name: territory.name.clone(),
            });
        }
    }
    Ok(())
}

/// Render a territory the way it would appear in a text input.
fn describe(t: &Territory) -> String {
    format!(
        "{} {} {} {} {}",
        t.name, t.lower_left.x, t.lower_left.y, t.upper_right.x, t.upper_right.y
    )
}

// ===========================================================================
// Text parsing
// ===========================================================================

/// Parse one `Name xl yl xh yh` line.
pub fn parse_country(
    line_no: usize,
    line: &str,
    config: &DiffusionConfig,
) -> Result<Territory, InputError> {
    let at = Location::Line(line_no);
    let text = line.trim();
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let [name, xl, yl, xh, yh] = tokens[..] else {
        return Err(InputError::TokenCount {
            at,
            text: text.to_string(),
        });
    };

    if !is_valid_name(name) {
        return Err(InputError::InvalidName {
            at,
            text: text.to_string(),
        });
    }

    let coords: Result<Vec<i32>, _> = [xl, yl, xh, yh].iter().map(|t| t.parse::<i32>()).collect();
    let Ok(coords) = coords else {
        return Err(InputError::InvalidCoordinates {
            at,
            text: text.to_string(),
        });
    };

    let territory = Territory::new(
        name,
        GridPosition::new(coords[0], coords[1]),
        GridPosition::new(coords[2], coords[3]),
    );
    check_territory(&territory, at, text, config)?;
    Ok(territory)
}

/// Parse every case in a text input.
///
/// Blank lines are skipped. Reading stops at a `0` count line; running out of
/// input between cases is accepted as the end. Any error aborts the whole
/// input.
pub fn parse_cases(
    content: &str,
    config: &DiffusionConfig,
) -> Result<Vec<Vec<Territory>>, InputError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let mut cases = Vec::new();
    while let Some((line_no, line)) = lines.next() {
        let case = cases.len() + 1;
        let text = line.trim();
        let count: i64 = text.parse().map_err(|_| InputError::InvalidCount {
            at: Location::Line(line_no),
            text: text.to_string(),
        })?;
        if count == 0 {
            break;
        }
        let count = usize::try_from(count).map_err(|_| InputError::CountryAmount { case })?;
        check_amount(case, count, config)?;

        let mut territories = Vec::with_capacity(count);
        let mut names = HashSet::new();
        for _ in 0..count {
            let Some((line_no, line)) = lines.next() else {
                return Err(InputError::UnexpectedEnd {
                    case,
                    expected: count,
                    found: territories.len(),
                });
            };
            let territory = parse_country(line_no, line, config)?;
            if !names.insert(territory.name.clone()) {
                return Err(InputError::DuplicateName {
                    case,
                    name: territory.name,
                });
            }
            territories.push(territory);
        }
        debug!(case, countries = territories.len(), "parsed case");
        cases.push(territories);
    }
    Ok(cases)
}
