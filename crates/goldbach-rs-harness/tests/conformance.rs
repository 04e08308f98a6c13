//! End-to-end capture, replay, and evidence-log exercise.

use std::path::PathBuf;

use goldbach_rs_harness::capture::{FAMILIES, capture_boundary, capture_family};
use goldbach_rs_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, Outcome, now_utc, sha256_hex, validate_log_file,
};
use goldbach_rs_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationResult};

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "goldbach-conformance-{tag}-{}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn captured_fixtures_survive_the_filesystem_and_replay_clean() {
    let dir = temp_dir("roundtrip");

    let mut total_cases = 0usize;
    for family in FAMILIES {
        let set = capture_family(family, 400, 2).expect("known family");
        let path = dir.join(format!("{family}.json"));
        set.write_to(&path).expect("write fixture file");

        let loaded = FixtureSet::from_file(&path).expect("reload fixture file");
        assert_eq!(loaded, set, "fixture {family} changed across the filesystem");
        total_cases += loaded.cases.len();

        let results = TestRunner::new("verify").run(&loaded);
        let failures: Vec<&VerificationResult> = results.iter().filter(|r| !r.passed).collect();
        assert!(
            failures.is_empty(),
            "family {family} failed: {:?}",
            failures
                .iter()
                .map(|r| (&r.case_name, &r.actual))
                .collect::<Vec<_>>()
        );
    }
    assert!(total_cases > 200, "suspiciously small corpus: {total_cases}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn a_corrupted_expectation_is_caught_and_reported() {
    let mut set = capture_boundary();
    let case = set
        .cases
        .iter_mut()
        .find(|c| c.name == "smallest_e8")
        .expect("boundary family carries smallest_e8");
    case.expected_output = "p=4 q=4 t=0 delta=0".to_string();

    let results = TestRunner::new("verify").run(&set);
    let bad: Vec<&VerificationResult> = results.iter().filter(|r| !r.passed).collect();
    assert_eq!(bad.len(), 1);
    assert_eq!(bad[0].case_name, "smallest_e8");
    assert_eq!(bad[0].actual, "p=3 q=5 t=1 delta=2");
    let diff = bad[0].diff.as_deref().expect("diff on mismatch");
    assert!(diff.contains("-p=4 q=4 t=0 delta=0"));
    assert!(diff.contains("+p=3 q=5 t=1 delta=2"));

    let report = ConformanceReport::new(
        "Goldbach Conformance Report",
        "verify",
        "2026-02-11T00:00:00Z",
        results,
    );
    assert!(!report.summary.all_passed());
    let md = report.to_markdown();
    assert!(md.contains("| smallest_e8 | smallest_inputs | FAIL |"));
    assert!(md.contains("## Failures"));
}

#[test]
fn emitted_logs_validate_and_checksum() {
    let dir = temp_dir("logs");
    let log_path = dir.join("verify.jsonl");

    let set = capture_boundary();
    let results = TestRunner::new("verify").run(&set);

    let mut emitter =
        LogEmitter::to_file(&log_path, "verify", "r001").expect("open log for writing");
    for result in &results {
        let outcome = if result.passed {
            Outcome::Pass
        } else {
            Outcome::Fail
        };
        emitter
            .emit(
                LogEntry::new(LogLevel::Info, "case_replayed")
                    .with_case(&result.case_name)
                    .with_outcome(outcome),
            )
            .expect("emit case entry");
    }
    emitter
        .emit(LogEntry::new(LogLevel::Info, "campaign_complete"))
        .expect("emit closing entry");
    emitter.flush().expect("flush log");
    assert_eq!(emitter.entries_emitted, results.len() + 1);
    drop(emitter);

    let content = std::fs::read_to_string(&log_path).expect("read log back");
    assert_eq!(content.lines().count(), results.len() + 1);
    let errors = validate_log_file(&content);
    assert!(errors.is_empty(), "log validation errors: {errors:?}");
    assert!(content.contains("verify::r001::001"));

    let mut index = ArtifactIndex::new("verify", "r001");
    index.add(
        &log_path.display().to_string(),
        "structured-log",
        &sha256_hex(content.as_bytes()),
    );
    let rendered = index.to_json().expect("serialize index");
    let reread: ArtifactIndex = serde_json::from_str(&rendered).expect("reparse index");
    assert_eq!(
        reread.artifacts[0].sha256,
        sha256_hex(&std::fs::read(&log_path).expect("reread log bytes"))
    );

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn timestamps_from_the_emitter_are_fresh() {
    let stamp = now_utc();
    assert!(stamp.starts_with("20"), "unexpected stamp {stamp}");
    assert!(stamp.ends_with('Z'));
}
