use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("lcm({a}, {b}) overflows u64")]
    Overflow { a: u64, b: u64 },
    #[error("fraction arithmetic overflows u64")]
    FractionOverflow,
    #[error("fraction subtraction would be negative")]
    NegativeFraction,
}
