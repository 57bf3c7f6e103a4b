//! Serde structs for structured scenario files.
//!
//! A scenario is a list of cases, each a list of countries. The same layout is
//! read from RON, JSON, or TOML:
//!
//! ```toml
//! [[cases]]
//! [[cases.countries]]
//! name = "France"
//! ll = { x = 1, y = 4 }
//! ur = { x = 4, y = 6 }
//! ```

use eurodiff_core::config::DiffusionConfig;
use eurodiff_core::territory::Territory;
use serde::{Deserialize, Serialize};

use crate::input::{InputError, validate_case};

/// Top-level scenario file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioData {
    #[serde(default)]
    pub cases: Vec<CaseData>,
}

/// One case: the countries placed on a fresh grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseData {
    pub countries: Vec<Territory>,
}

impl ScenarioData {
    /// Validate every case and unwrap them into territory lists.
    pub fn into_cases(self, config: &DiffusionConfig) -> Result<Vec<Vec<Territory>>, InputError> {
        self.cases
            .into_iter()
            .enumerate()
            .map(|(i, case)| {
                validate_case(i + 1, &case.countries, config)?;
                Ok(case.countries)
            })
            .collect()
    }
}

impl From<Vec<Vec<Territory>>> for ScenarioData {
    fn from(cases: Vec<Vec<Territory>>) -> Self {
        Self {
            cases: cases
                .into_iter()
                .map(|countries| CaseData { countries })
                .collect(),
        }
    }
}
