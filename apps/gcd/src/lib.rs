use math::gcd;
use tracing::debug;

/// Operands of the single printed computation.
pub const OPERANDS: (u64, u64) = (1024, 64);

/// GCD of [`OPERANDS`] as a decimal string.
pub fn solve() -> String {
    let (a, b) = OPERANDS;
    let result = gcd(a, b);
    debug!(a, b, result, "computed gcd");
    result.to_string()
}
