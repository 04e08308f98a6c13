//! Fixture replay against the optimized library.

use goldbach_rs_core::primality::is_prime;
use goldbach_rs_core::search::{self, ExhaustionReason, SearchResult};
use goldbach_rs_core::solve;

use crate::diff::render_diff;
use crate::fixtures::{
    FixtureCase, FixtureSet, render_error, render_exhausted, render_pair, render_verdict,
};
use crate::verify::VerificationResult;

/// Replays fixture cases through the library entry points and scores
/// each against its captured expectation.
pub struct TestRunner {
    pub campaign: String,
}

impl TestRunner {
    pub fn new(campaign: &str) -> Self {
        Self {
            campaign: campaign.to_string(),
        }
    }

    pub fn run(&self, set: &FixtureSet) -> Vec<VerificationResult> {
        set.cases.iter().map(|case| self.run_case(case)).collect()
    }

    pub fn run_case(&self, case: &FixtureCase) -> VerificationResult {
        let actual = execute(case);
        let passed = actual == case.expected_output;
        let diff = if passed {
            None
        } else {
            Some(render_diff(&case.expected_output, &actual))
        };
        VerificationResult {
            case_name: case.name.clone(),
            contract: case.contract.clone(),
            passed,
            expected: case.expected_output.clone(),
            actual,
            diff,
        }
    }
}

/// Run one case through the operation it names, rendering the outcome
/// with the same helpers capture used. Unknown operations render as
/// `unsupported:` so a schema drift fails loudly in the report rather
/// than silently passing.
fn execute(case: &FixtureCase) -> String {
    match case.operation.as_str() {
        "solve" => match solve::solve(&case.input) {
            Ok(solution) => format!(
                "p={} q={} t={} delta={}",
                solution.p, solution.q, solution.t, solution.delta
            ),
            Err(kind) => render_error(kind.as_str()),
        },
        "is_prime" => match case.input.trim().parse::<u64>() {
            Ok(n) => render_verdict(is_prime(n)),
            Err(_) => format!("unsupported:non-numeric is_prime input {:?}", case.input),
        },
        "search" => execute_search(&case.input),
        other => format!("unsupported:{other}"),
    }
}

/// Search cases carry `<e> <step_limit>` so budget-accounting fixtures
/// can pin exhaustion at exact step counts.
fn execute_search(input: &str) -> String {
    let mut parts = input.split_whitespace();
    let (Some(e), Some(limit), None) = (parts.next(), parts.next(), parts.next()) else {
        return format!("unsupported:search input {input:?} is not `<e> <step_limit>`");
    };
    let (Ok(e), Ok(limit)) = (e.parse::<u64>(), limit.parse::<u64>()) else {
        return format!("unsupported:non-numeric search input {input:?}");
    };
    if e < 4 || e % 2 != 0 {
        return format!("unsupported:search input e={e} outside the even domain");
    }
    match search::search(e, limit) {
        SearchResult::Found(pair) => render_pair(pair.p, pair.q, pair.t),
        SearchResult::NotFound { reason } => render_exhausted(match reason {
            ExhaustionReason::StepLimitExceeded => "StepLimitExceeded",
            ExhaustionReason::DeadlineExceeded => "DeadlineExceeded",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture;

    fn solve_case(name: &str, input: &str, expected: &str) -> FixtureCase {
        FixtureCase {
            name: name.to_string(),
            operation: "solve".to_string(),
            contract: "minimality".to_string(),
            input: input.to_string(),
            expected_output: expected.to_string(),
        }
    }

    #[test]
    fn matching_case_passes_without_a_diff() {
        let runner = TestRunner::new("verify");
        let result = runner.run_case(&solve_case("e100", "100", "p=47 q=53 t=3 delta=6"));
        assert!(result.passed);
        assert_eq!(result.actual, "p=47 q=53 t=3 delta=6");
        assert!(result.diff.is_none());
    }

    #[test]
    fn mismatching_case_fails_with_a_diff() {
        let runner = TestRunner::new("verify");
        let result = runner.run_case(&solve_case("e100", "100", "p=3 q=97 t=47 delta=94"));
        assert!(!result.passed);
        let diff = result.diff.expect("diff on mismatch");
        assert!(diff.contains("-p=3 q=97 t=47 delta=94"));
        assert!(diff.contains("+p=47 q=53 t=3 delta=6"));
    }

    #[test]
    fn error_cases_replay_through_the_solve_boundary() {
        let runner = TestRunner::new("verify");
        let result = runner.run_case(&solve_case("odd", "101", "error:OutOfDomain"));
        assert!(result.passed, "actual was {}", result.actual);
    }

    #[test]
    fn search_cases_honor_the_step_limit() {
        let runner = TestRunner::new("verify");

        let mut case = solve_case("exact", "98 7", "p=37 q=61 t=12 delta=24");
        case.operation = "search".to_string();
        assert!(runner.run_case(&case).passed);

        let mut case = solve_case("short", "98 6", "exhausted:StepLimitExceeded");
        case.operation = "search".to_string();
        assert!(runner.run_case(&case).passed);
    }

    #[test]
    fn unknown_operations_fail_loudly() {
        let runner = TestRunner::new("verify");
        let mut case = solve_case("mystery", "100", "whatever");
        case.operation = "frobnicate".to_string();
        let result = runner.run_case(&case);
        assert!(!result.passed);
        assert_eq!(result.actual, "unsupported:frobnicate");
    }

    #[test]
    fn malformed_search_inputs_fail_loudly() {
        let runner = TestRunner::new("verify");
        for input in ["98", "98 7 9", "ninety 7", "97 5"] {
            let mut case = solve_case("bad", input, "never matched");
            case.operation = "search".to_string();
            let result = runner.run_case(&case);
            assert!(!result.passed, "input {input:?} should not verify");
            assert!(result.actual.starts_with("unsupported:"), "got {}", result.actual);
        }
    }

    #[test]
    fn every_captured_family_replays_clean() {
        let runner = TestRunner::new("verify");
        for family in capture::FAMILIES {
            let set = capture::capture_family(family, 600, 2).expect("known family");
            let results = runner.run(&set);
            let failures: Vec<&VerificationResult> =
                results.iter().filter(|r| !r.passed).collect();
            assert!(
                failures.is_empty(),
                "family {family} had failures: {:?}",
                failures
                    .iter()
                    .map(|r| (&r.case_name, &r.actual))
                    .collect::<Vec<_>>()
            );
        }
    }
}
