//! Greatest common divisor and least common multiple via the Euclidean algorithm.

use crate::MathError;

/// Greatest common divisor of `a` and `b`.
///
/// Reduces `(a, b)` to `(b % a, a)` until the first argument reaches zero.
/// `gcd(0, 0)` is 0.
///
/// # Example
///
/// ```
/// use math::gcd::gcd;
///
/// assert_eq!(gcd(1024, 64), 64);
/// assert_eq!(gcd(48, 18), 6);
/// assert_eq!(gcd(0, 7), 7);
/// ```
pub fn gcd(a: u64, b: u64) -> u64 {
    if a == 0 {
        return b;
    }
    gcd(b % a, a)
}

/// Loop form of [`gcd`]. Same reduction, no call stack.
pub fn gcd_iterative(mut a: u64, mut b: u64) -> u64 {
    while a != 0 {
        let r = b % a;
        b = a;
        a = r;
    }
    b
}

/// Least common multiple of `a` and `b`.
///
/// Fails with [`MathError::DivisionByZero`] when both are zero, and with
/// [`MathError::Overflow`] when the result does not fit in a `u64`.
///
/// # Example
///
/// ```
/// use math::gcd::lcm;
/// use math::MathError;
///
/// assert_eq!(lcm(4, 6), Ok(12));
/// assert_eq!(lcm(0, 5), Ok(0));
/// assert_eq!(lcm(0, 0), Err(MathError::DivisionByZero));
/// ```
pub fn lcm(a: u64, b: u64) -> Result<u64, MathError> {
    let divisor = gcd(a, b);
    if divisor == 0 {
        return Err(MathError::DivisionByZero);
    }
    // divide first: a / gcd is exact and keeps the product no larger than the result
    (a / divisor)
        .checked_mul(b)
        .ok_or(MathError::Overflow { a, b })
}

/// GCD of signed integers, taken over their absolute values.
///
/// ```
/// use math::gcd::gcd_signed;
///
/// assert_eq!(gcd_signed(-48, 18), 6);
/// assert_eq!(gcd_signed(i64::MIN, 0), 1 << 63);
/// ```
pub fn gcd_signed(a: i64, b: i64) -> u64 {
    gcd(a.unsigned_abs(), b.unsigned_abs())
}

/// LCM of signed integers, taken over their absolute values.
pub fn lcm_signed(a: i64, b: i64) -> Result<u64, MathError> {
    lcm(a.unsigned_abs(), b.unsigned_abs())
}
