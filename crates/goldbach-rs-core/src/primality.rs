//! # Deterministic Miller–Rabin Primality Oracle
//!
//! Total, deterministic primality decision for every `u64`.
//!
//! ## Structure
//!
//! The oracle is a two-stage filter:
//!
//! 1. **Trial division** by the 25 primes up to 97. Equality means prime;
//!    divisibility without equality means composite. This disposes of the
//!    overwhelming majority of random inputs for the price of 25 remainders
//!    and guarantees every value reaching stage 2 is odd, greater than 97,
//!    and coprime to all table entries.
//! 2. **Strong-probable-prime rounds** (Miller–Rabin) against a fixed
//!    witness list. Write `n - 1 = d * 2^s` with `d` odd; witness `a`
//!    passes if `a^d ≡ ±1 (mod n)` or some square `a^(d*2^r) ≡ -1 (mod n)`
//!    for `r < s`. A single failing witness proves compositeness and
//!    short-circuits the remaining rounds.
//!
//! ## Why these witnesses are enough
//!
//! Strong pseudoprimes to a fixed base set are tabulated exhaustively for
//! small sets: the first composite fooling the seven bases {2..17} is
//! 341,550,071,728,321 ≈ 3.4×10^14 (Jaeschke 1993), and
//! 3,825,123,056,546,413,051 ≈ 3.8×10^18 fools the first eleven prime
//! bases. The first *twelve* primes {2..37} admit no strong pseudoprime
//! below 3.18×10^23 (Sorenson–Webster 2015), so across the entire `u64`
//! range, and in particular across the supported even-input domain up to
//! 4×10^18, the twelve-round test is a proof rather than a probability.
//! Both tabulated pseudoprimes above appear in the test suite as
//! regression pins.
//!
//! Each round costs one modular exponentiation, so the worst case (a prime,
//! where every round runs to completion) is 12 × O(log n) modular products.

use crate::arith::{mul_mod, pow_mod, split_odd_factor};

/// Trial-division table: every prime up to 97, in order.
///
/// Module-level read-only configuration, never mutated at runtime.
pub const SMALL_PRIMES: [u64; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

/// Miller–Rabin witness bases: the first twelve primes.
///
/// Deterministic for all n < 3.18×10^23 (Sorenson–Webster), hence for all
/// of `u64`. Kept as a module constant so the proven range is auditable in
/// one place.
pub const MR_WITNESSES: [u64; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// One strong-probable-prime round for witness `a` against odd `n > 2`,
/// with `n - 1 = d * 2^s` precomputed by the caller.
///
/// Returns `true` if `n` passes this witness (i.e. looks prime to it).
/// A witness with `a ≡ 0 (mod n)` carries no compositeness information
/// and passes vacuously.
fn passes_witness(n: u64, d: u64, s: u32, a: u64) -> bool {
    let a = a % n;
    if a == 0 {
        return true;
    }
    let mut x = pow_mod(a, d, n);
    if x == 1 || x == n - 1 {
        return true;
    }
    for _ in 1..s {
        x = mul_mod(x, x, n);
        if x == n - 1 {
            return true;
        }
    }
    false
}

/// Deterministic primality test, correct for every `u64`.
///
/// Total function: never panics, never errors, no state. `0` and `1` are
/// not prime. Cost is 25 remainders for most composites and at most twelve
/// modular exponentiations for primes and hard composites.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    for &p in &SMALL_PRIMES {
        if n == p {
            return true;
        }
        if n % p == 0 {
            return false;
        }
    }
    // n is odd and > 97 here, so n - 1 is even and split_odd_factor is safe.
    let (d, s) = split_odd_factor(n - 1);
    for &a in &MR_WITNESSES {
        if !passes_witness(n, d, s, a) {
            return false;
        }
    }
    true
}
