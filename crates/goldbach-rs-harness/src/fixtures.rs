//! Fixture schema for capture/replay conformance testing.
//!
//! A fixture file is a JSON document holding one `FixtureSet`: a
//! family of cases captured from the reference oracle, replayed later
//! against the optimized library. Expected and actual outputs are
//! compared as rendered strings so that a failure diff is readable
//! without knowing the internal types.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::HarnessError;

/// Fixture schema version. Bump when the case layout changes.
pub const FIXTURE_VERSION: &str = "v1";

/// One captured case: an operation, its textual input, and the output
/// the reference oracle produced for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Unique case name within the set, e.g. `minimal_pair_e100`.
    pub name: String,
    /// Operation to replay: `solve`, `is_prime`, or `search`.
    pub operation: String,
    /// Human-readable contract tag, e.g. `minimality`.
    pub contract: String,
    /// Textual input, in the exact form handed to the operation.
    pub input: String,
    /// Rendered output the oracle produced.
    pub expected_output: String,
}

/// A named family of fixture cases plus capture provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSet {
    pub version: String,
    pub family: String,
    pub captured_at: String,
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Empty set with the current schema version and a capture
    /// timestamp taken now.
    pub fn new(family: &str) -> Self {
        Self {
            version: FIXTURE_VERSION.to_string(),
            family: family.to_string(),
            captured_at: crate::structured_log::now_utc(),
            cases: Vec::new(),
        }
    }

    pub fn push(&mut self, case: FixtureCase) {
        self.cases.push(case);
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load and version-check one fixture file.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        if set.version != FIXTURE_VERSION {
            return Err(HarnessError::UnsupportedFixtureVersion {
                found: set.version,
                expected: FIXTURE_VERSION,
            });
        }
        Ok(set)
    }

    pub fn write_to(&self, path: &Path) -> Result<(), HarnessError> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Canonical rendering of a successful decomposition. Capture and
/// replay both use this, so a mismatch always reflects a value
/// difference rather than a formatting one.
pub fn render_pair(p: u64, q: u64, t: u64) -> String {
    format!("p={p} q={q} t={t} delta={}", 2 * t)
}

/// Canonical rendering of a solve-layer error by its stable name.
pub fn render_error(kind: &str) -> String {
    format!("error:{kind}")
}

/// Canonical rendering of a primality verdict.
pub fn render_verdict(prime: bool) -> String {
    if prime { "prime" } else { "composite" }.to_string()
}

/// Canonical rendering of an exhausted search by its stable reason name.
pub fn render_exhausted(reason: &str) -> String {
    format!("exhausted:{reason}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_set() -> FixtureSet {
        FixtureSet {
            version: FIXTURE_VERSION.to_string(),
            family: "minimal_pairs".to_string(),
            captured_at: "2026-02-11T00:00:00Z".to_string(),
            cases: vec![FixtureCase {
                name: "minimal_pair_e100".to_string(),
                operation: "solve".to_string(),
                contract: "minimality".to_string(),
                input: "100".to_string(),
                expected_output: render_pair(47, 53, 3),
            }],
        }
    }

    #[test]
    fn round_trips_through_json() {
        let set = sample_set();
        let json = set.to_json().expect("serialize");
        let back = FixtureSet::from_json(&json).expect("deserialize");
        assert_eq!(back, set);
    }

    #[test]
    fn renderings_are_stable() {
        assert_eq!(render_pair(47, 53, 3), "p=47 q=53 t=3 delta=6");
        assert_eq!(render_error("OutOfDomain"), "error:OutOfDomain");
        assert_eq!(render_verdict(true), "prime");
        assert_eq!(render_verdict(false), "composite");
        assert_eq!(
            render_exhausted("StepLimitExceeded"),
            "exhausted:StepLimitExceeded"
        );
    }

    #[test]
    fn rejects_unknown_versions_on_load() {
        let dir =
            std::env::temp_dir().join(format!("goldbach-fixture-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("stale.json");

        let mut stale = sample_set();
        stale.version = "v0".to_string();
        stale.write_to(&path).expect("write");

        let err = FixtureSet::from_file(&path).expect_err("must reject v0");
        assert!(matches!(
            err,
            HarnessError::UnsupportedFixtureVersion { .. }
        ));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn accepts_current_version_on_load() {
        let dir =
            std::env::temp_dir().join(format!("goldbach-fixture-load-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("current.json");

        let set = sample_set();
        set.write_to(&path).expect("write");
        let back = FixtureSet::from_file(&path).expect("load");
        assert_eq!(back, set);

        let _ = std::fs::remove_dir_all(&dir);
    }
}
