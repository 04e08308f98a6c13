//! Fixture capture from the reference oracle.
//!
//! Three families cover the library surface: `minimal_pairs` sweeps
//! even inputs through the naive pair scan, `primality` sweeps raw
//! verdicts, and `boundary` pins the rejection and budget contracts of
//! the text interface. Expected outputs come from [`crate::reference`]
//! where the oracle can compute them and are written out literally
//! where the contract is a fixed rejection or exhaustion message.

use crate::fixtures::{
    FixtureCase, FixtureSet, render_error, render_exhausted, render_pair, render_verdict,
};
use crate::reference::{is_prime_naive, minimal_pair_naive};

/// Capture families, in the order `capture --family all` emits them.
pub const FAMILIES: [&str; 3] = ["minimal_pairs", "primality", "boundary"];

/// Dispatch by family name. `limit` bounds both sweep families;
/// `stride` thins only `minimal_pairs`, since a strided primality
/// sweep would stay in one residue class. Both knobs are ignored by
/// `boundary`.
pub fn capture_family(family: &str, limit: u64, stride: u64) -> Option<FixtureSet> {
    match family {
        "minimal_pairs" => Some(capture_minimal_pairs(limit, stride)),
        "primality" => Some(capture_primality(limit)),
        "boundary" => Some(capture_boundary()),
        _ => None,
    }
}

fn case(
    name: String,
    operation: &str,
    contract: &str,
    input: String,
    expected: String,
) -> FixtureCase {
    FixtureCase {
        name,
        operation: operation.to_string(),
        contract: contract.to_string(),
        input,
        expected_output: expected,
    }
}

/// Minimal-pair expectations for every even `e` in `[4, limit]`,
/// thinned by `stride` (rounded up to even so the sweep stays on even
/// inputs).
pub fn capture_minimal_pairs(limit: u64, stride: u64) -> FixtureSet {
    let stride = stride.max(2);
    let stride = stride + (stride & 1);
    let mut set = FixtureSet::new("minimal_pairs");
    let mut e: u64 = 4;
    while e <= limit {
        let (p, q, t) = minimal_pair_naive(e)
            .unwrap_or_else(|| panic!("no symmetric pair for e = {e} in the capture range"));
        set.push(case(
            format!("minimal_pair_e{e}"),
            "solve",
            "minimality",
            e.to_string(),
            render_pair(p, q, t),
        ));
        e += stride;
    }
    set
}

/// Primality verdicts for every `n` in `[0, limit]`.
pub fn capture_primality(limit: u64) -> FixtureSet {
    let mut set = FixtureSet::new("primality");
    for n in 0..=limit {
        set.push(case(
            format!("primality_n{n}"),
            "is_prime",
            "primality",
            n.to_string(),
            render_verdict(is_prime_naive(n)),
        ));
    }
    set
}

/// Fixed cases for the text-boundary contracts: input normalization,
/// rejection taxonomy, and step-budget accounting.
pub fn capture_boundary() -> FixtureSet {
    let mut set = FixtureSet::new("boundary");

    // Smallest domain members, including the lone even-prime pair.
    for e in [4u64, 6, 8, 10] {
        let (p, q, t) = minimal_pair_naive(e).unwrap_or_else(|| panic!("no pair for e = {e}"));
        set.push(case(
            format!("smallest_e{e}"),
            "solve",
            "smallest_inputs",
            e.to_string(),
            render_pair(p, q, t),
        ));
    }

    // Separator and radix tolerance: all forms of the same value must
    // produce the value's decomposition.
    for (label, text, value) in [
        ("separators_underscore", "1_000_000", 1_000_000u64),
        ("separators_comma", "1,000,000", 1_000_000),
        ("separators_spaced", " 10 0 ", 100),
        ("radix_hex", "0x64", 100),
        ("sign_positive", "+100", 100),
    ] {
        let (p, q, t) = minimal_pair_naive(value)
            .unwrap_or_else(|| panic!("no pair for e = {value}"));
        set.push(case(
            format!("normalize_{label}"),
            "solve",
            "input_normalization",
            text.to_string(),
            render_pair(p, q, t),
        ));
    }

    // Rejection taxonomy. Parity is checked before magnitude, so an
    // odd numeral too long for the domain still reads OutOfDomain.
    for (label, text, kind) in [
        ("trailing_garbage", "12a4", "InvalidInput"),
        ("empty", "", "InvalidInput"),
        ("separators_only", " , _ ", "InvalidInput"),
        ("decimal_point", "1.5", "InvalidInput"),
        ("bare_radix_prefix", "0x", "InvalidInput"),
        ("odd", "101", "OutOfDomain"),
        ("below_four", "2", "OutOfDomain"),
        ("zero", "0", "OutOfDomain"),
        ("negative", "-8", "OutOfDomain"),
        ("negative_zero", "-0", "OutOfDomain"),
        ("above_bound", "4000000000000000002", "TooLarge"),
        ("huge_even_numeral", "123456789012345678901234567890", "TooLarge"),
        ("huge_odd_numeral", "123456789012345678901234567891", "OutOfDomain"),
    ] {
        set.push(case(
            format!("reject_{label}"),
            "solve",
            "rejection",
            text.to_string(),
            render_error(kind),
        ));
    }

    // Step accounting for e = 98: displacements 0, 2, 4, 6, 8, 10, 12
    // are seven examinations, with the pair landing on the seventh.
    let (p, q, t) = minimal_pair_naive(98).unwrap_or_else(|| panic!("no pair for e = 98"));
    set.push(case(
        "budget_exact_e98".to_string(),
        "search",
        "step_budget",
        "98 7".to_string(),
        render_pair(p, q, t),
    ));
    set.push(case(
        "budget_short_e98".to_string(),
        "search",
        "step_budget",
        "98 6".to_string(),
        render_exhausted("StepLimitExceeded"),
    ));

    // Pruned displacements consume budget: e = 48 examines t = 1,
    // t = 3 (pruned), t = 5.
    let (p, q, t) = minimal_pair_naive(48).unwrap_or_else(|| panic!("no pair for e = 48"));
    set.push(case(
        "budget_counts_pruned_e48".to_string(),
        "search",
        "step_budget",
        "48 3".to_string(),
        render_pair(p, q, t),
    ));
    set.push(case(
        "budget_short_pruned_e48".to_string(),
        "search",
        "step_budget",
        "48 2".to_string(),
        render_exhausted("StepLimitExceeded"),
    ));

    set
}
