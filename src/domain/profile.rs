use std::fmt;
use std::str::FromStr;

/// Which flavour of payment sheet is being processed
///
/// `Strict` sheets carry the full column set (including `first_name` and
/// `processed_code`), get their names and currencies normalized and are
/// re-runnable. `Lenient` sheets only need the columns required to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Strict,
    Lenient,
}

impl Profile {
    /// Largest batch the payout API accepts for this sheet flavour
    pub fn default_max_batch_size(&self) -> usize {
        match self {
            Self::Strict => 500,
            Self::Lenient => 250,
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown profile '{}' (expected strict or lenient)", other)),
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Lenient => f.write_str("lenient"),
        }
    }
}
