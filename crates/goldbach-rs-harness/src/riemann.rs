//! Displacement normalization against the low zeta zeros.
//!
//! For a decomposition of `E` at displacement `t`, the quantity
//! `t / (ln E)^2` lands in the same numeric range as the imaginary
//! parts of the first nontrivial Riemann zeta zeros, which makes for a
//! suggestive side-by-side in solver output. This is presentation
//! only; nothing in the search consults these constants.

/// Imaginary parts of the first fifteen nontrivial zeta zeros, to six
/// decimal places.
pub const RIEMANN_GAMMAS: [f64; 15] = [
    14.134725, 21.022040, 25.010858, 30.424876, 32.935062, 37.586178, 40.918719, 43.327073,
    48.005151, 49.773832, 52.970321, 56.446248, 59.347044, 60.831779, 65.112544,
];

/// `t / (ln e)^2` for a decomposition of `e` at displacement `t`.
/// Callers must pass `e >= 4`.
pub fn normalized_displacement(e: u64, t: u64) -> f64 {
    debug_assert!(e >= 4);
    let log = (e as f64).ln();
    t as f64 / (log * log)
}

/// Zero ordinate closest to `value`. Ties resolve to the smaller
/// ordinate.
pub fn nearest_gamma(value: f64) -> f64 {
    let mut best = RIEMANN_GAMMAS[0];
    for &gamma in &RIEMANN_GAMMAS[1..] {
        if (gamma - value).abs() < (best - value).abs() {
            best = gamma;
        }
    }
    best
}
