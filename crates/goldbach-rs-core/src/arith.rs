//! Modular arithmetic helpers (mul_mod, pow_mod, power-of-two splitting).
//!
//! Everything here operates on `u64` values with `u128` intermediates, so
//! products of two 64-bit operands never truncate. These are the only
//! arithmetic primitives the primality test needs.

/// Modular product `(a * b) mod m` without intermediate overflow.
///
/// The product is formed in `u128`, so the full 128-bit result is reduced
/// exactly. `m` must be nonzero.
#[inline]
#[must_use]
pub fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    debug_assert!(m > 0, "modulus must be nonzero");
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Modular exponentiation `base^exp mod m` by binary square-and-multiply.
///
/// Runs in O(log exp) modular products and never materializes a value wider
/// than 128 bits, which keeps 18-digit moduli fast. `m` must be nonzero;
/// `pow_mod(_, 0, m)` is `1 % m` (so 0 for the degenerate modulus 1).
#[must_use]
pub fn pow_mod(base: u64, exp: u64, m: u64) -> u64 {
    debug_assert!(m > 0, "modulus must be nonzero");
    if m == 1 {
        return 0;
    }
    let mut acc: u64 = 1;
    let mut square = base % m;
    let mut remaining = exp;
    while remaining > 0 {
        if remaining & 1 == 1 {
            acc = mul_mod(acc, square, m);
        }
        square = mul_mod(square, square, m);
        remaining >>= 1;
    }
    acc
}

/// Split `n >= 1` into `(d, s)` with `n == d * 2^s` and `d` odd.
///
/// Used to write `n - 1 = d * 2^s` before a strong-probable-prime round.
#[inline]
#[must_use]
pub fn split_odd_factor(n: u64) -> (u64, u32) {
    debug_assert!(n > 0, "cannot split zero");
    let s = n.trailing_zeros();
    (n >> s, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mul_mod_small_values() {
        assert_eq!(mul_mod(7, 8, 5), 1);
        assert_eq!(mul_mod(0, 123, 7), 0);
        assert_eq!(mul_mod(123, 456, 1), 0);
    }

    #[test]
    fn mul_mod_no_overflow_at_word_boundary() {
        // (M-1)^2 = M^2 - 2M + 1 ≡ 1 (mod M)
        let m = u64::MAX;
        assert_eq!(mul_mod(m - 1, m - 1, m), 1);
        assert_eq!(mul_mod(m - 1, 2, m), m - 2);
    }

    #[test]
    fn pow_mod_basic_identities() {
        assert_eq!(pow_mod(5, 0, 7), 1);
        assert_eq!(pow_mod(0, 0, 7), 1);
        assert_eq!(pow_mod(7, 1, 5), 2);
        assert_eq!(pow_mod(2, 10, 1000), 24);
        assert_eq!(pow_mod(10, 18, u64::MAX), 1_000_000_000_000_000_000);
    }

    #[test]
    fn pow_mod_degenerate_modulus() {
        assert_eq!(pow_mod(42, 42, 1), 0);
    }

    #[test]
    fn pow_mod_fermat_little_theorem() {
        // a^(p-1) ≡ 1 (mod p) for prime p and gcd(a, p) = 1.
        assert_eq!(pow_mod(2, 12, 13), 1);
        assert_eq!(pow_mod(5, 12, 13), 1);
        // 2^61 - 1 is a Mersenne prime; exercises the u128 widening path.
        let m61 = (1u64 << 61) - 1;
        assert_eq!(pow_mod(2, m61 - 1, m61), 1);
        assert_eq!(pow_mod(3, m61 - 1, m61), 1);
    }

    #[test]
    fn split_odd_factor_reconstructs() {
        for n in [1u64, 2, 3, 4, 12, 220, 1024, (1u64 << 61) - 2, u64::MAX] {
            let (d, s) = split_odd_factor(n);
            assert_eq!(d % 2, 1, "odd part of {n} must be odd");
            assert_eq!(d << s, n, "d * 2^s must reconstruct {n}");
        }
    }

    #[test]
    fn split_odd_factor_known_values() {
        assert_eq!(split_odd_factor(220), (55, 2));
        assert_eq!(split_odd_factor(1), (1, 0));
        assert_eq!(split_odd_factor(1024), (1, 10));
    }
}
