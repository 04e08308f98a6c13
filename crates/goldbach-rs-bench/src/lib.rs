//! Shared input corpora for the criterion benches.
//!
//! Values are chosen to hit distinct cost profiles rather than to be
//! representative workloads: the pseudoprime forces every witness
//! round, the trailing-small-factor composites exit in the trial
//! division stage, and the even inputs span the supported domain.

#![deny(unsafe_code)]

/// Primes across the magnitude range, smallest to largest. The last
/// entry is the Mersenne prime `2^61 - 1`.
pub const BENCH_PRIMES: [u64; 6] = [
    9_973,
    104_729,
    1_000_003,
    1_000_000_007,
    999_999_999_999_999_989,
    2_305_843_009_213_693_951,
];

/// Composites with distinct rejection paths: a multiple of 3 that
/// trial division catches immediately, the square of 1_000_003, a
/// semiprime with two ten-digit factors, and a strong pseudoprime to
/// the first eleven witness bases that only the final base catches.
pub const BENCH_COMPOSITES: [u64; 4] = [
    999_999_999_999_999_999,
    1_000_006_000_009,
    1_000_000_016_000_000_063,
    3_825_123_056_546_413_051,
];

/// Even search inputs spanning the domain, including the supported
/// maximum.
pub const BENCH_EVENS: [u64; 5] = [
    10_000,
    1_000_000,
    100_000_000,
    1_000_000_000_000_000_000,
    4_000_000_000_000_000_000,
];

#[cfg(test)]
mod tests {
    use goldbach_rs_core::primality::is_prime;

    use super::*;

    #[test]
    fn corpus_classifications_are_correct() {
        for &p in &BENCH_PRIMES {
            assert!(is_prime(p), "{p} should be prime");
        }
        for &c in &BENCH_COMPOSITES {
            assert!(!is_prime(c), "{c} should be composite");
        }
        for &e in &BENCH_EVENS {
            assert!(e % 2 == 0 && e >= 4);
            assert!(e <= 4_000_000_000_000_000_000);
        }
    }
}
