//! The text boundary: parse, validate, search, serialize.
//!
//! Callers hand over one numeral as text and get back either a
//! [`Solution`] whose fields are decimal strings, or an [`ErrorKind`].
//! Strings on both sides keep the boundary exact for callers whose native
//! integers round through floating point.

use std::fmt;

use crate::parse::parse_integer_text;
use crate::search::{SearchBudget, SearchResult, search_with_budget};

/// Largest even input the solver accepts.
pub const MAX_EVEN_INPUT: u64 = 4_000_000_000_000_000_000;

/// The four caller-visible failure conditions.
///
/// All are recoverable; none aborts the process. A value inside the
/// documented domain can only produce `SearchExhausted`, and only under a
/// caller-shrunk budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The text is not a numeral.
    InvalidInput,
    /// The value is odd or below 4.
    OutOfDomain,
    /// The value exceeds [`MAX_EVEN_INPUT`].
    TooLarge,
    /// The search budget ran out before a pair appeared.
    SearchExhausted,
}

impl ErrorKind {
    /// Stable name used in fixtures, reports, and logs.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::OutOfDomain => "OutOfDomain",
            ErrorKind::TooLarge => "TooLarge",
            ErrorKind::SearchExhausted => "SearchExhausted",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            ErrorKind::InvalidInput => "input is not an integer",
            ErrorKind::OutOfDomain => "E must be an even integer >= 4",
            ErrorKind::TooLarge => "E exceeds the supported maximum of 4_000_000_000_000_000_000",
            ErrorKind::SearchExhausted => "no symmetric prime pair found within the step budget",
        };
        f.write_str(message)
    }
}

impl std::error::Error for ErrorKind {}

/// A found decomposition, serialized as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub p: String,
    pub q: String,
    pub t: String,
    pub delta: String,
}

/// Parse and domain-check one input, returning the validated even `E`.
///
/// Check order is parity, then the lower bound, then the upper bound, so
/// an overlong odd numeral reports `OutOfDomain` rather than `TooLarge`
/// (parity of oversized numerals comes from the parser's recorded low
/// bit).
pub fn validate(input: &str) -> Result<u64, ErrorKind> {
    let parsed = parse_integer_text(input).map_err(|_| ErrorKind::InvalidInput)?;
    if !parsed.is_even() {
        return Err(ErrorKind::OutOfDomain);
    }
    if parsed.negative || (!parsed.overflow && parsed.magnitude < 4) {
        return Err(ErrorKind::OutOfDomain);
    }
    if parsed.overflow || parsed.magnitude > MAX_EVEN_INPUT {
        return Err(ErrorKind::TooLarge);
    }
    Ok(parsed.magnitude)
}

/// Solve one input with the default step budget.
pub fn solve(input: &str) -> Result<Solution, ErrorKind> {
    solve_with_budget(input, &SearchBudget::default())
}

/// Solve one input with an explicit budget.
pub fn solve_with_budget(input: &str, budget: &SearchBudget) -> Result<Solution, ErrorKind> {
    let e = validate(input)?;
    match search_with_budget(e, budget) {
        SearchResult::Found(pair) => Ok(Solution {
            p: pair.p.to_string(),
            q: pair.q.to_string(),
            t: pair.t.to_string(),
            delta: pair.delta.to_string(),
        }),
        SearchResult::NotFound { .. } => Err(ErrorKind::SearchExhausted),
    }
}
