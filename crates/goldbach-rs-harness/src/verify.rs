//! Verification results and campaign summaries.

use serde::{Deserialize, Serialize};

/// Outcome of replaying one fixture case against the library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub case_name: String,
    pub contract: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
    /// Rendered diff, present only on mismatch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<String>,
}

/// Aggregate counts over one verification campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl VerificationSummary {
    pub fn from_results(results: &[VerificationResult]) -> Self {
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.passed as f64 / self.total as f64
    }
}
