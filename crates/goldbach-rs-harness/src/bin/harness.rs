//! Command-line conformance harness.
//!
//! `capture` writes reference fixtures, `verify` replays them against
//! the library and renders a report, `solve` runs one decomposition
//! interactively. Exit status is nonzero when verification fails, so
//! the binary slots directly into CI.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};

use goldbach_rs_core::search::{
    DEFAULT_STEP_LIMIT, ExhaustionReason, SearchBudget, SearchResult, search_with_budget,
};
use goldbach_rs_core::solve::validate;
use goldbach_rs_harness::capture::{FAMILIES, capture_family};
use goldbach_rs_harness::riemann::{nearest_gamma, normalized_displacement};
use goldbach_rs_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, Outcome, now_utc, sha256_hex,
};
use goldbach_rs_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationResult};

#[derive(Debug, Parser)]
#[command(name = "harness")]
#[command(about = "Conformance harness for goldbach_rust")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Capture reference-oracle fixtures as JSON files.
    Capture {
        /// Directory to write fixture files into.
        #[arg(long)]
        output: PathBuf,
        /// Family to capture (minimal_pairs, primality, boundary) or `all`.
        #[arg(long, default_value = "all")]
        family: String,
        /// Upper bound for sweep-family inputs.
        #[arg(long, default_value_t = 2_000)]
        limit: u64,
        /// Stride between sweep-family inputs.
        #[arg(long, default_value_t = 2)]
        stride: u64,
    },
    /// Replay fixtures against the library and write a report.
    Verify {
        /// Fixture file, or directory of fixture JSON files.
        #[arg(long)]
        fixtures: PathBuf,
        /// Markdown report path; a sibling `.json` report is written too.
        #[arg(long)]
        report: Option<PathBuf>,
        /// Structured JSONL log path; a sibling artifact index is
        /// written next to it.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Fixed report timestamp, for byte-reproducible reports.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Decompose one even input and print the result.
    Solve {
        /// The even integer E. Digit separators and a 0x prefix are accepted.
        input: String,
        /// Maximum displacements to examine.
        #[arg(long, default_value_t = DEFAULT_STEP_LIMIT)]
        step_limit: u64,
        /// Optional wall-clock ceiling in milliseconds.
        #[arg(long)]
        max_ms: Option<u64>,
        /// Emit machine-readable JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    match cli.command {
        Command::Capture {
            output,
            family,
            limit,
            stride,
        } => run_capture(&output, &family, limit, stride),
        Command::Verify {
            fixtures,
            report,
            log,
            timestamp,
        } => run_verify(&fixtures, report.as_deref(), log.as_deref(), timestamp.as_deref()),
        Command::Solve {
            input,
            step_limit,
            max_ms,
            json,
        } => run_solve(&input, step_limit, max_ms, json),
    }
}

fn run_capture(
    output: &Path,
    family: &str,
    limit: u64,
    stride: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(output)?;
    let selected: Vec<&str> = if family == "all" {
        FAMILIES.to_vec()
    } else {
        vec![family]
    };
    for name in selected {
        let Some(set) = capture_family(name, limit, stride) else {
            return Err(format!(
                "unknown fixture family {name:?}; known families: {}, all",
                FAMILIES.join(", ")
            )
            .into());
        };
        let path = output.join(format!("{name}.json"));
        set.write_to(&path)?;
        eprintln!("captured {} cases into {}", set.cases.len(), path.display());
    }
    Ok(())
}

fn run_verify(
    fixtures: &Path,
    report: Option<&Path>,
    log: Option<&Path>,
    timestamp: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let paths = fixture_paths(fixtures)?;
    if paths.is_empty() {
        return Err(format!("no fixture JSON files under {}", fixtures.display()).into());
    }

    let runner = TestRunner::new("verify");
    let mut results: Vec<VerificationResult> = Vec::new();
    for path in &paths {
        let set = FixtureSet::from_file(path)?;
        eprintln!(
            "replaying {} ({} cases, captured {})",
            set.family,
            set.cases.len(),
            set.captured_at
        );
        results.extend(runner.run(&set));
    }
    // Stable order regardless of fixture file layout, so reports diff
    // cleanly between runs.
    results.sort_by(|a, b| {
        a.contract
            .cmp(&b.contract)
            .then_with(|| a.case_name.cmp(&b.case_name))
    });

    let stamp = timestamp.map_or_else(now_utc, str::to_string);
    let document = ConformanceReport::new("Goldbach Conformance Report", "verify", &stamp, results);

    if let Some(report_path) = report {
        std::fs::write(report_path, document.to_markdown())?;
        let json_path = report_path.with_extension("json");
        std::fs::write(&json_path, document.to_json())?;
        eprintln!("wrote {} and {}", report_path.display(), json_path.display());
    }
    if let Some(log_path) = log {
        write_structured_log(log_path, &document, report)?;
        eprintln!("wrote {}", log_path.display());
    }

    let summary = &document.summary;
    eprintln!(
        "verified {} cases: {} passed, {} failed",
        summary.total, summary.passed, summary.failed
    );
    if !summary.all_passed() {
        return Err(format!("{} fixture case(s) failed", summary.failed).into());
    }
    Ok(())
}

/// A single fixture file, or every `.json` under a directory in path
/// order.
fn fixture_paths(root: &Path) -> std::io::Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(root)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    Ok(paths)
}

/// One log line per replayed case, a closing summary line, then an
/// artifact index (with content checksums) next to the log.
fn write_structured_log(
    log_path: &Path,
    document: &ConformanceReport,
    report_path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let run_id: String = {
        let digits: String = document
            .timestamp
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        format!("r{digits}")
    };

    let mut emitter = LogEmitter::to_file(log_path, "verify", &run_id)?;
    for result in &document.results {
        let (level, outcome) = if result.passed {
            (LogLevel::Info, Outcome::Pass)
        } else {
            (LogLevel::Error, Outcome::Fail)
        };
        let mut entry = LogEntry::new(level, "case_replayed")
            .with_case(&result.case_name)
            .with_outcome(outcome);
        if !result.passed {
            entry = entry.with_details(serde_json::json!({
                "expected": result.expected,
                "actual": result.actual,
            }));
        }
        emitter.emit(entry)?;
    }

    let mut closing = LogEntry::new(LogLevel::Info, "campaign_complete").with_details(
        serde_json::json!({
            "total": document.summary.total,
            "passed": document.summary.passed,
            "failed": document.summary.failed,
        }),
    );
    if let Some(path) = report_path {
        closing = closing.with_artifact_ref(&path.display().to_string());
    }
    emitter.emit(closing)?;
    emitter.flush()?;
    drop(emitter);

    let mut index = ArtifactIndex::new("verify", &run_id);
    index.add(
        &log_path.display().to_string(),
        "structured-log",
        &sha256_hex(&std::fs::read(log_path)?),
    );
    if let Some(path) = report_path {
        index.add(
            &path.display().to_string(),
            "report-markdown",
            &sha256_hex(&std::fs::read(path)?),
        );
        let json_path = path.with_extension("json");
        if json_path.is_file() {
            index.add(
                &json_path.display().to_string(),
                "report-json",
                &sha256_hex(&std::fs::read(&json_path)?),
            );
        }
    }
    let index_path = log_path.with_extension("artifacts.json");
    std::fs::write(&index_path, index.to_json()?)?;
    Ok(())
}

fn run_solve(
    input: &str,
    step_limit: u64,
    max_ms: Option<u64>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let e = validate(input)?;
    let mut budget = SearchBudget::steps(step_limit);
    if let Some(ms) = max_ms {
        budget = budget.with_max_elapsed(Duration::from_millis(ms));
    }

    match search_with_budget(e, &budget) {
        SearchResult::Found(pair) => {
            let f = normalized_displacement(e, pair.t);
            let gamma = nearest_gamma(f);
            if json {
                let doc = serde_json::json!({
                    "e": e.to_string(),
                    "p": pair.p.to_string(),
                    "q": pair.q.to_string(),
                    "t": pair.t.to_string(),
                    "delta": pair.delta.to_string(),
                    "normalized_displacement": f,
                    "nearest_zeta_gamma": gamma,
                });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                println!("{e} = {} + {}", pair.p, pair.q);
                println!("t = {}, delta = {}", pair.t, pair.delta);
                println!("t / ln(E)^2 = {f:.6} (nearest zeta ordinate: {gamma})");
            }
            Ok(())
        }
        SearchResult::NotFound { reason } => Err(match reason {
            ExhaustionReason::StepLimitExceeded => {
                format!("no pair within {step_limit} displacement steps")
            }
            ExhaustionReason::DeadlineExceeded => {
                "search exceeded the wall-clock deadline".to_string()
            }
        }
        .into()),
    }
}
