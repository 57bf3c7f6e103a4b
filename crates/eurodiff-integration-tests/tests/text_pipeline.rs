//! Integration test: text input to rendered report.
//!
//! Feeds whole text inputs through the parser, the engine, and the text
//! renderer, and compares the output line for line against known results.

use eurodiff_core::config::DiffusionConfig;
use eurodiff_data::input::{InputError, parse_cases};
use eurodiff_data::report::{CaseOutcome, render_text, run_all};

fn report(input: &str) -> String {
    let config = DiffusionConfig::default();
    let cases = parse_cases(input, &config).unwrap();
    render_text(&run_all(&cases, &config))
}

#[test]
fn classic_three_cases() {
    let input = "\
3
France 1 4 4 6
Spain 3 1 6 3
Portugal 1 1 2 2
1
Luxembourg 1 1 1 1
2
Netherlands 1 3 2 4
Belgium 1 1 2 2
0
";
    let expected = "\
Case Number 1
Spain 382
Portugal 416
France 1325

Case Number 2
Luxembourg 0

Case Number 3
Netherlands 2
Belgium 2
";
    assert_eq!(report(input), expected);
}

#[test]
fn adjacent_single_cities() {
    assert_eq!(
        report("2\nAa 1 1 1 1\nBb 2 1 2 1\n0\n"),
        "Case Number 1\nAa 1\nBb 1\n"
    );
}

#[test]
fn blocks_and_strip() {
    assert_eq!(
        report("3\nAlpha 1 1 3 3\nBeta 4 1 6 3\nGamma 1 4 6 6\n0\n"),
        "Case Number 1\nAlpha 49\nBeta 49\nGamma 577\n"
    );
}

#[test]
fn case_errors_are_reported_in_place() {
    let input = "\
2
Aa 1 1 2 2
Bb 2 2 3 3
2
Aa 1 1 1 1
Bb 3 3 3 3
4
Aa 1 1 10 1
Bb 1 2 10 2
Cc 1 3 10 3
Dd 1 10 10 10
1
Luxembourg 1 1 1 1
0
";
    let expected = "\
Case Number 1
Aa intersects with Bb on [2, 2]

Case Number 2
Aa has no connection with other countries

Case Number 3
Dd has no connection with other countries

Case Number 4
Luxembourg 0
";
    assert_eq!(report(input), expected);
}

#[test]
fn day_limit_reported_per_case() {
    let config = DiffusionConfig {
        max_days: 100,
        ..DiffusionConfig::default()
    };
    let cases = parse_cases(
        "3\nFrance 1 4 4 6\nSpain 3 1 6 3\nPortugal 1 1 2 2\n2\nAa 1 1 1 1\nBb 2 1 2 1\n0\n",
        &config,
    )
    .unwrap();
    let reports = run_all(&cases, &config);
    assert_eq!(
        reports[0].outcome,
        CaseOutcome::Error("simulation did not finish within 100 days".to_string())
    );
    assert!(matches!(reports[1].outcome, CaseOutcome::Standings(_)));
}

#[test]
fn parse_error_aborts_whole_input() {
    let result = parse_cases(
        "1\nLuxembourg 1 1 1 1\n1\nBad 0 1 1 1\n0\n",
        &DiffusionConfig::default(),
    );
    assert!(matches!(
        result,
        Err(InputError::InvalidCoordinates { .. })
    ));
}

#[test]
fn smaller_grid_from_config() {
    let config = DiffusionConfig {
        grid_size: 3,
        ..DiffusionConfig::default()
    };
    assert!(parse_cases("1\nAa 1 1 4 4\n0\n", &config).is_err());
    let cases = parse_cases("2\nAa 1 1 3 1\nBb 1 2 3 3\n0\n", &config).unwrap();
    let reports = run_all(&cases, &config);
    assert!(matches!(reports[0].outcome, CaseOutcome::Standings(ref s) if s.len() == 2));
}
