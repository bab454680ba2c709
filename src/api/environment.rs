use std::fmt;
use std::str::FromStr;

/// Payout API environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Sandbox,
    Live,
}

impl Environment {
    const SANDBOX_URL: &'static str = "https://api-m.sandbox.paypal.com";
    const LIVE_URL: &'static str = "https://api-m.paypal.com";

    /// Base URL of the REST API for this environment
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Sandbox => Self::SANDBOX_URL,
            Self::Live => Self::LIVE_URL,
        }
    }
}

/// Accepts `sandbox`, and `production` or `live` for the live environment
impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sandbox" => Ok(Self::Sandbox),
            "production" | "live" => Ok(Self::Live),
            other => Err(format!(
                "unknown environment '{}' (expected sandbox, production or live)",
                other
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sandbox => f.write_str("sandbox"),
            Self::Live => f.write_str("live"),
        }
    }
}
