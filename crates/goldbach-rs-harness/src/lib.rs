//! # goldbach-rs-harness
//!
//! Conformance harness for `goldbach-rs-core`:
//!
//! - **capture**: generate fixture JSON from a naive reference oracle
//! - **verify**: replay fixtures against the optimized library and
//!   render markdown/JSON conformance reports
//! - **structured_log**: JSONL evidence logs with artifact checksums
//!
//! The `harness` binary wires these together; the modules are also
//! usable as a library from integration tests.

#![forbid(unsafe_code)]

pub mod capture;
pub mod diff;
pub mod error;
pub mod fixtures;
pub mod reference;
pub mod report;
pub mod riemann;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FIXTURE_VERSION, FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
