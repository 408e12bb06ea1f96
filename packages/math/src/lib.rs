pub mod error;
pub mod fraction;
pub mod gcd;

pub use error::MathError;
pub use fraction::Fraction;
pub use gcd::{gcd, gcd_iterative, gcd_signed, lcm, lcm_signed};
