//! Running cases and rendering their results.

use std::fmt::Write as _;

use eurodiff_core::config::DiffusionConfig;
use eurodiff_core::engine::simulate;
use eurodiff_core::ranking::Standing;
use eurodiff_core::territory::Territory;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Result of one case, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseReport {
    pub case: usize,
    #[serde(flatten)]
    pub outcome: CaseOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseOutcome {
    Standings(Vec<Standing>),
    /// The case could not be built or did not finish. Other cases are
    /// unaffected.
    Error(String),
}

/// Run one case and capture its outcome.
pub fn run_case(case: usize, territories: &[Territory], config: &DiffusionConfig) -> CaseReport {
    let outcome = match simulate(territories, config) {
        Ok(standings) => {
            info!(case, regions = standings.len(), "case finished");
            CaseOutcome::Standings(standings)
        }
        Err(err) => {
            warn!(case, error = %err, "case failed");
            CaseOutcome::Error(err.to_string())
        }
    };
    CaseReport { case, outcome }
}

/// Run every case in order.
pub fn run_all(cases: &[Vec<Territory>], config: &DiffusionConfig) -> Vec<CaseReport> {
    cases
        .iter()
        .enumerate()
        .map(|(i, territories)| run_case(i + 1, territories, config))
        .collect()
}

/// Plain text report: a `Case Number N` header, then one `name day` line per
/// region or the error message. Cases are separated by a blank line; the
/// report starts directly with the first header, with no leading blank line.
pub fn render_text(reports: &[CaseReport]) -> String {
    let mut out = String::new();
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        // Writing into a String cannot fail.
        let _ = writeln!(out, "Case Number {}", report.case);
        match &report.outcome {
            CaseOutcome::Standings(standings) => {
                for s in standings {
                    let _ = writeln!(out, "{} {}", s.name, s.completion_day);
                }
            }
            CaseOutcome::Error(message) => {
                let _ = writeln!(out, "{message}");
            }
        }
    }
    out
}

pub fn render_json(reports: &[CaseReport]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(reports)
}
