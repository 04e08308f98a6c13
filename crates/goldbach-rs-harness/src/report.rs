//! Conformance report rendering.
//!
//! A report is the durable artifact of one verification campaign. The
//! markdown form is for humans; the JSON form carries the same data
//! for downstream tooling. Results are expected to arrive pre-sorted
//! so repeated runs of the same fixtures render byte-identical bodies.

use serde::{Deserialize, Serialize};

use crate::verify::{VerificationResult, VerificationSummary};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    pub title: String,
    pub campaign: String,
    pub timestamp: String,
    pub summary: VerificationSummary,
    pub results: Vec<VerificationResult>,
}

impl ConformanceReport {
    pub fn new(
        title: &str,
        campaign: &str,
        timestamp: &str,
        results: Vec<VerificationResult>,
    ) -> Self {
        Self {
            title: title.to_string(),
            campaign: campaign.to_string(),
            timestamp: timestamp.to_string(),
            summary: VerificationSummary::from_results(&results),
            results,
        }
    }

    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Campaign: {}\n", self.campaign));
        out.push_str(&format!("- Generated: {}\n", self.timestamp));
        out.push_str(&format!("- Total cases: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Contract | Status |\n");
        out.push_str("|------|----------|--------|\n");
        for result in &self.results {
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                result.case_name,
                result.contract,
                if result.passed { "PASS" } else { "FAIL" }
            ));
        }

        let failures: Vec<&VerificationResult> =
            self.results.iter().filter(|r| !r.passed).collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for failure in failures {
                out.push_str(&format!("\n### {}\n\n```\n", failure.case_name));
                match &failure.diff {
                    Some(diff) => out.push_str(diff),
                    None => out.push_str(&format!(
                        "expected: {}\nactual:   {}\n",
                        failure.expected, failure.actual
                    )),
                }
                if !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("```\n");
            }
        }

        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
