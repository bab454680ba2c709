use std::fmt;
use std::str::FromStr;

use super::error::DomainError;

/// Currencies the incentive program pays out in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Usd,
    Php,
}

impl Currency {
    pub const ALL: [Currency; 2] = [Currency::Usd, Currency::Php];

    /// ISO 4217 code as sent to the payout API
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Php => "PHP",
        }
    }
}

/// Exact, case-sensitive match on the ISO code; case folding is the
/// normalizer's job
impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|currency| currency.code() == s)
            .ok_or_else(|| DomainError::UnsupportedCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
