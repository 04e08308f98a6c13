//! Structured JSONL logging for conformance runs.
//!
//! Every verification campaign can emit one log line per replayed
//! case plus a closing summary line. Lines are self-describing JSON
//! objects with a monotonic trace id, so a log file can be audited
//! after the fact without the process that wrote it. The validator in
//! this module is what the integration tests run against emitted logs.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Log severity. Serialized lowercase to keep the JSONL grep-friendly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Per-case outcome recorded in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Skip,
    Timeout,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Pass => "pass",
            Outcome::Fail => "fail",
            Outcome::Skip => "skip",
            Outcome::Timeout => "timeout",
        }
    }
}

/// One structured log line. Optional fields are omitted from the JSON
/// entirely rather than serialized as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// UTC timestamp, filled by the emitter when left empty.
    pub timestamp: String,
    /// `<campaign>::<run>::<seq>`, assigned by the emitter.
    pub trace_id: String,
    pub level: LogLevel,
    pub event: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub artifact_refs: Vec<String>,
}

impl LogEntry {
    pub fn new(level: LogLevel, event: &str) -> Self {
        Self {
            timestamp: String::new(),
            trace_id: String::new(),
            level,
            event: event.to_string(),
            campaign: None,
            operation: None,
            case: None,
            input: None,
            outcome: None,
            duration_ms: None,
            details: None,
            artifact_refs: Vec::new(),
        }
    }

    pub fn with_case(mut self, name: &str) -> Self {
        self.case = Some(name.to_string());
        self
    }

    pub fn with_operation(mut self, operation: &str) -> Self {
        self.operation = Some(operation.to_string());
        self
    }

    pub fn with_input(mut self, input: &str) -> Self {
        self.input = Some(input.to_string());
        self
    }

    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn with_artifact_ref(mut self, path: &str) -> Self {
        self.artifact_refs.push(path.to_string());
        self
    }
}

/// Writes `LogEntry` lines to a sink, assigning trace ids of the form
/// `<campaign>::<run>::<seq>` with a zero-padded three-digit sequence.
pub struct LogEmitter {
    writer: Box<dyn Write>,
    campaign: String,
    run_id: String,
    seq: u32,
    pub entries_emitted: usize,
}

impl LogEmitter {
    pub fn to_file(path: &Path, campaign: &str, run_id: &str) -> std::io::Result<Self> {
        let file = std::fs::File::create(path)?;
        Ok(Self {
            writer: Box::new(std::io::BufWriter::new(file)),
            campaign: campaign.to_string(),
            run_id: run_id.to_string(),
            seq: 0,
            entries_emitted: 0,
        })
    }

    /// In-memory sink for tests that only care about the returned
    /// trace ids and emit counts.
    pub fn to_buffer(campaign: &str, run_id: &str) -> Self {
        Self {
            writer: Box::new(Vec::new()),
            campaign: campaign.to_string(),
            run_id: run_id.to_string(),
            seq: 0,
            entries_emitted: 0,
        }
    }

    fn next_trace_id(&mut self) -> String {
        self.seq += 1;
        format!("{}::{}::{:03}", self.campaign, self.run_id, self.seq)
    }

    /// Stamp and write one entry, returning the assigned trace id.
    pub fn emit(&mut self, mut entry: LogEntry) -> std::io::Result<String> {
        entry.trace_id = self.next_trace_id();
        if entry.timestamp.is_empty() {
            entry.timestamp = now_utc();
        }
        if entry.campaign.is_none() {
            entry.campaign = Some(self.campaign.clone());
        }
        let line = serde_json::to_string(&entry)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(self.writer, "{line}")?;
        self.entries_emitted += 1;
        Ok(entry.trace_id)
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

/// Index of artifacts a run produced, with content checksums so a
/// report can be matched to the exact bytes it summarizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactIndex {
    pub index_version: u32,
    pub campaign: String,
    pub run_id: String,
    pub generated_utc: String,
    pub artifacts: Vec<ArtifactRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactRecord {
    pub path: String,
    pub kind: String,
    pub sha256: String,
}

impl ArtifactIndex {
    pub fn new(campaign: &str, run_id: &str) -> Self {
        Self {
            index_version: 1,
            campaign: campaign.to_string(),
            run_id: run_id.to_string(),
            generated_utc: now_utc(),
            artifacts: Vec::new(),
        }
    }

    pub fn add(&mut self, path: &str, kind: &str, sha256: &str) {
        self.artifacts.push(ArtifactRecord {
            path: path.to_string(),
            kind: kind.to_string(),
            sha256: sha256.to_string(),
        });
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Hex-encoded SHA-256 of a byte slice.
pub fn sha256_hex(bytes: &[u8]) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hasher
        .finalize()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LogValidationError {
    #[error("line {line} is not a JSON object: {reason}")]
    NotAnObject { line: usize, reason: String },
    #[error("line {line} is missing required field {field:?}")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line} has empty required field {field:?}")]
    EmptyField { line: usize, field: &'static str },
    #[error("line {line} has unknown level {level:?}")]
    UnknownLevel { line: usize, level: String },
    #[error("line {line} has unknown outcome {outcome:?}")]
    UnknownOutcome { line: usize, outcome: String },
    #[error("line {line} trace id {trace_id:?} is not <campaign>::<run>::<seq>")]
    MalformedTraceId { line: usize, trace_id: String },
}

const REQUIRED_FIELDS: [&str; 4] = ["timestamp", "trace_id", "level", "event"];
const KNOWN_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const KNOWN_OUTCOMES: [&str; 4] = ["pass", "fail", "skip", "timeout"];

/// Validate one JSONL line against the schema this module emits.
pub fn validate_log_line(line_no: usize, line: &str) -> Result<(), LogValidationError> {
    let value: serde_json::Value =
        serde_json::from_str(line).map_err(|e| LogValidationError::NotAnObject {
            line: line_no,
            reason: e.to_string(),
        })?;
    let object = value.as_object().ok_or_else(|| LogValidationError::NotAnObject {
        line: line_no,
        reason: "top-level value is not an object".to_string(),
    })?;

    for field in REQUIRED_FIELDS {
        let Some(entry) = object.get(field) else {
            return Err(LogValidationError::MissingField {
                line: line_no,
                field,
            });
        };
        if entry.as_str().is_none_or(str::is_empty) {
            return Err(LogValidationError::EmptyField {
                line: line_no,
                field,
            });
        }
    }

    let level = object["level"].as_str().unwrap_or_default();
    if !KNOWN_LEVELS.contains(&level) {
        return Err(LogValidationError::UnknownLevel {
            line: line_no,
            level: level.to_string(),
        });
    }

    if let Some(outcome) = object.get("outcome") {
        let outcome = outcome.as_str().unwrap_or_default();
        if !KNOWN_OUTCOMES.contains(&outcome) {
            return Err(LogValidationError::UnknownOutcome {
                line: line_no,
                outcome: outcome.to_string(),
            });
        }
    }

    let trace_id = object["trace_id"].as_str().unwrap_or_default();
    if trace_id.split("::").count() != 3 {
        return Err(LogValidationError::MalformedTraceId {
            line: line_no,
            trace_id: trace_id.to_string(),
        });
    }

    Ok(())
}

/// Validate a whole JSONL file, returning an error per offending line.
pub fn validate_log_file(content: &str) -> Vec<LogValidationError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(idx, line)| validate_log_line(idx + 1, line).err())
        .collect()
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`, computed from the
/// system clock without a calendar dependency.
pub fn now_utc() -> String {
    let secs = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let days = (secs / 86_400) as i64;
    let rem = secs % 86_400;
    let (hh, mm, ss) = (rem / 3_600, (rem % 3_600) / 60, rem % 60);

    // Civil-from-days, valid for any date after 1970.
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);

    format!("{year:04}-{month:02}-{day:02}T{hh:02}:{mm:02}:{ss:02}Z")
}
