//! Residue arithmetic helpers.
//!
//! Every helper returns a representative in `[0, m)` regardless of the sign
//! of its input, so callers never depend on sign-preserving remainder.

/// Reduces `value` to its residue in `[0, modulus)`.
///
/// # Parameters
/// - `value`: Any signed integer.
/// - `modulus`: Positive modulus.
///
/// # Returns
/// The non-negative residue of `value` modulo `modulus`.
pub fn residue(value: i64, modulus: i64) -> i64 {
    value.rem_euclid(modulus)
}

/// Greatest common divisor of the absolute values of `a` and `b`.
///
/// Unsigned so that `gcd(i64::MIN, 0)` is representable. `gcd(0, 0)` is 0.
pub fn gcd(a: i64, b: i64) -> u64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Modular multiplicative inverse of `value` modulo `modulus`.
///
/// Uses the extended Euclidean algorithm on the residue of `value`.
///
/// # Returns
/// `Some(m)` with `m` in `[0, modulus)` and `(value * m) mod modulus == 1`,
/// or `None` when `value` and `modulus` are not coprime.
pub fn mod_inverse(value: i64, modulus: i64) -> Option<i64> {
    let (mut old_r, mut r) = (residue(value, modulus), modulus);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    if old_r != 1 {
        return None;
    }
    Some(residue(old_s, modulus))
}
