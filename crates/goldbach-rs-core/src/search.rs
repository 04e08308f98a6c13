//! # Minimal Symmetric Goldbach Pair Search
//!
//! For an even `e >= 4`, scan displacements `t` outward from the midpoint
//! `x = e / 2` until both `p = x - t` and `q = x + t` are prime, and report
//! the first hit. Because `t` grows strictly, the first hit is the unique
//! minimal symmetric decomposition `e = p + q`.
//!
//! Two structural facts shape the scan:
//!
//! - **Parity.** For `e >= 6` both members of a prime pair must be odd, so
//!   `t` must have the opposite parity of `x`: odd `x` scans t = 0, 2, 4, …
//!   and even `x` scans t = 1, 3, 5, …. The lone even-prime pair (2, 2)
//!   exists only for `e = 4` and is answered directly.
//! - **Mod-3 pruning.** When `3 | x` and `3 | t` (with `t > 0`), both
//!   endpoints are multiples of 3 exceeding 3, so the displacement is
//!   skipped without consulting the oracle.
//!
//! No upper bound on the minimal displacement is provable in general, so
//! the scan carries an explicit budget and exhaustion is an ordinary
//! result variant, not an error. The default step budget is generous
//! enough that every even input in the supported domain returns `Found`
//! well within interactive time; exhaustion is reachable only with a
//! caller-chosen tiny budget or the opt-in wall-clock deadline.

use std::time::{Duration, Instant};

use crate::primality::is_prime;

/// Default maximum number of displacement values examined per search.
pub const DEFAULT_STEP_LIMIT: u64 = 5_000_000;

/// Displacements examined between wall-clock deadline checks.
///
/// The clock is consulted before the first examined displacement and every
/// `DEADLINE_CHECK_INTERVAL` displacements thereafter, so a zero deadline
/// trips before any oracle query.
pub const DEADLINE_CHECK_INTERVAL: u64 = 1024;

/// A symmetric Goldbach decomposition `p + q == e` with `p = e/2 - t` and
/// `q = e/2 + t`.
///
/// Invariants: `p` and `q` prime, `p <= q`, `delta == q - p == 2 * t`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoldbachPair {
    pub p: u64,
    pub q: u64,
    /// Displacement from the midpoint.
    pub t: u64,
    /// Gap between the primes, always `2 * t`.
    pub delta: u64,
}

/// Why a search stopped without finding a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExhaustionReason {
    /// The step budget ran out.
    StepLimitExceeded,
    /// The opt-in wall-clock budget ran out (see [`SearchBudget`]).
    DeadlineExceeded,
}

/// Outcome of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchResult {
    Found(GoldbachPair),
    NotFound { reason: ExhaustionReason },
}

impl SearchResult {
    /// The pair, if one was found.
    #[must_use]
    pub fn found(self) -> Option<GoldbachPair> {
        match self {
            SearchResult::Found(pair) => Some(pair),
            SearchResult::NotFound { .. } => None,
        }
    }
}

/// Resource budget for one search.
///
/// `step_limit` bounds the number of displacement values examined (pruned
/// displacements count). `max_elapsed`, when set, additionally bounds wall
/// time; it is the only way a search reads a clock, so the default budget
/// keeps the search fully deterministic.
#[derive(Debug, Clone, Copy)]
pub struct SearchBudget {
    pub step_limit: u64,
    pub max_elapsed: Option<Duration>,
}

impl SearchBudget {
    /// Pure step-count budget; deterministic.
    #[must_use]
    pub const fn steps(step_limit: u64) -> Self {
        Self {
            step_limit,
            max_elapsed: None,
        }
    }

    /// Add a wall-clock ceiling on top of the step budget.
    #[must_use]
    pub fn with_max_elapsed(mut self, max: Duration) -> Self {
        self.max_elapsed = Some(max);
        self
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::steps(DEFAULT_STEP_LIMIT)
    }
}

/// Find the minimal symmetric Goldbach pair for even `e >= 4` within a
/// step budget.
///
/// Deterministic and re-entrant: identical arguments always produce
/// identical results. The precondition (`e` even, `e >= 4`) is the
/// caller's responsibility and debug-asserted here; the `solve` boundary
/// enforces it for text inputs.
#[must_use]
pub fn search(e: u64, step_limit: u64) -> SearchResult {
    search_with_budget(e, &SearchBudget::steps(step_limit))
}

/// [`search`] with an explicit [`SearchBudget`], for callers that also
/// want the wall-clock ceiling.
#[must_use]
pub fn search_with_budget(e: u64, budget: &SearchBudget) -> SearchResult {
    debug_assert!(e >= 4 && e % 2 == 0, "caller must supply an even e >= 4");

    // (2, 2) is the only prime pair containing the even prime; the
    // odd-odd enumeration below cannot represent it.
    if e == 4 {
        return SearchResult::Found(GoldbachPair {
            p: 2,
            q: 2,
            t: 0,
            delta: 0,
        });
    }

    let x = e / 2;
    let x_mod_3 = x % 3;
    // Opposite parity to x keeps both endpoints odd.
    let mut t: u64 = if x % 2 == 0 { 1 } else { 0 };
    let deadline = budget.max_elapsed.map(|limit| (Instant::now(), limit));

    let mut examined: u64 = 0;
    while examined < budget.step_limit {
        if examined % DEADLINE_CHECK_INTERVAL == 0
            && deadline.is_some_and(|(start, limit)| start.elapsed() >= limit)
        {
            return SearchResult::NotFound {
                reason: ExhaustionReason::DeadlineExceeded,
            };
        }
        examined += 1;

        // Both endpoints would be multiples of 3 exceeding 3. The t > 0
        // guard keeps the pair (3, 3) reachable at t = 0.
        if t > 0 && x_mod_3 == 0 && t % 3 == 0 {
            t += 2;
            continue;
        }

        match (x.checked_sub(t), x.checked_add(t)) {
            (Some(p), Some(q)) if p > 1 && is_prime(p) && is_prime(q) => {
                return SearchResult::Found(GoldbachPair {
                    p,
                    q,
                    t,
                    delta: 2 * t,
                });
            }
            _ => {}
        }
        t += 2;
    }

    SearchResult::NotFound {
        reason: ExhaustionReason::StepLimitExceeded,
    }
}
