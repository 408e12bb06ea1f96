use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::gcd::{gcd, lcm};
use crate::MathError;

/// Non-negative fraction `numer / denom` with a non-zero denominator.
///
/// Equality compares values, not stored parts: `2/4 == 1/2`.
/// Arithmetic is checked, so every operator yields `Result<Fraction, MathError>`
/// and every result comes back reduced.
///
/// # Example
///
/// ```
/// use math::Fraction;
///
/// let half = Fraction::new(1, 2).unwrap();
/// let third = Fraction::new(1, 3).unwrap();
/// assert_eq!((half + third).unwrap().to_string(), "5/6");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Fraction {
    numer: u64,
    denom: u64,
}

impl Fraction {
    pub fn new(numer: u64, denom: u64) -> Result<Self, MathError> {
        if denom == 0 {
            return Err(MathError::DivisionByZero);
        }
        Ok(Fraction { numer, denom })
    }

    pub fn numer(&self) -> u64 {
        self.numer
    }

    pub fn denom(&self) -> u64 {
        self.denom
    }

    /// Divide both parts by their GCD. `0/d` becomes `0/1`.
    ///
    /// # Example
    ///
    /// ```
    /// use math::Fraction;
    ///
    /// let half = Fraction::new(32, 64).unwrap().reduce();
    /// assert_eq!(half.to_string(), "1/2");
    /// ```
    pub fn reduce(self) -> Self {
        let divisor = gcd(self.numer, self.denom);
        Fraction {
            numer: self.numer / divisor,
            denom: self.denom / divisor,
        }
    }

    pub fn invert(self) -> Result<Self, MathError> {
        Fraction::new(self.denom, self.numer)
    }

    /// Both numerators scaled to `lcm(self.denom, other.denom)`.
    fn common_denominator(self, other: Self) -> Result<(u64, u64, u64), MathError> {
        let denom = lcm(self.denom, other.denom)?;
        let numer_self = self
            .numer
            .checked_mul(denom / self.denom)
            .ok_or(MathError::FractionOverflow)?;
        let numer_other = other
            .numer
            .checked_mul(denom / other.denom)
            .ok_or(MathError::FractionOverflow)?;
        Ok((numer_self, numer_other, denom))
    }
}

impl Add for Fraction {
    type Output = Result<Self, MathError>;

    fn add(self, other: Self) -> Self::Output {
        let (numer_self, numer_other, denom) = self.common_denominator(other)?;
        let numer = numer_self
            .checked_add(numer_other)
            .ok_or(MathError::FractionOverflow)?;
        Ok(Fraction { numer, denom }.reduce())
    }
}

impl Sub for Fraction {
    type Output = Result<Self, MathError>;

    fn sub(self, other: Self) -> Self::Output {
        let (numer_self, numer_other, denom) = self.common_denominator(other)?;
        let numer = numer_self
            .checked_sub(numer_other)
            .ok_or(MathError::NegativeFraction)?;
        Ok(Fraction { numer, denom }.reduce())
    }
}

impl Mul for Fraction {
    type Output = Result<Self, MathError>;

    fn mul(self, other: Self) -> Self::Output {
        // cross-reduce first; denominators are non-zero so neither gcd is zero
        let g1 = gcd(self.numer, other.denom);
        let g2 = gcd(other.numer, self.denom);
        let numer = (self.numer / g1)
            .checked_mul(other.numer / g2)
            .ok_or(MathError::FractionOverflow)?;
        let denom = (self.denom / g2)
            .checked_mul(other.denom / g1)
            .ok_or(MathError::FractionOverflow)?;
        Ok(Fraction { numer, denom }.reduce())
    }
}

impl Div for Fraction {
    type Output = Result<Self, MathError>;

    fn div(self, other: Self) -> Self::Output {
        self * other.invert()?
    }
}

impl From<u64> for Fraction {
    fn from(value: u64) -> Self {
        Fraction {
            numer: value,
            denom: 1,
        }
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // u64 * u64 always fits in u128
        let lhs = self.numer as u128 * other.denom as u128;
        let rhs = other.numer as u128 * self.denom as u128;
        lhs.cmp(&rhs)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.denom != 1 {
            write!(f, "{}/{}", self.numer, self.denom)
        } else {
            write!(f, "{}", self.numer)
        }
    }
}
