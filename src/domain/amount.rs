use std::fmt;

use super::error::DomainError;

/// Fixed-point payout amount stored in minor units (multiply by 100)
/// Represents amounts with 2 decimal places of precision, the granularity
/// the payout API accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Amount(i64);

impl Amount {
    const SCALE: i64 = 100;

    /// Create from raw minor units (cents)
    pub fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Get raw minor units
    pub fn minor(&self) -> i64 {
        self.0
    }

    /// Convert a whole-unit integer amount
    pub fn from_integer(units: i64) -> Result<Self, DomainError> {
        units
            .checked_mul(Self::SCALE)
            .map(Self)
            .ok_or(DomainError::Overflow)
    }

    /// Convert a floating point amount, rounding to the nearest minor unit
    pub fn from_f64(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::InvalidAmount(value.to_string()));
        }

        let scaled = (value * Self::SCALE as f64).round();
        if scaled > i64::MAX as f64 || scaled < i64::MIN as f64 {
            return Err(DomainError::Overflow);
        }

        Ok(Self(scaled as i64))
    }

    /// Convert to decimal string with exactly 2 decimal places
    pub fn to_decimal_string(&self) -> String {
        let abs_value = self.0.unsigned_abs();
        let integer_part = abs_value / Self::SCALE as u64;
        let decimal_part = abs_value % Self::SCALE as u64;

        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, integer_part, decimal_part)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}
