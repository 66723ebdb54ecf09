use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Advertising channel under comparison. Meta campaigns report clicks,
/// CTV campaigns report brand searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Meta,
    Ctv,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Meta => write!(f, "meta"),
            Platform::Ctv => write!(f, "ctv"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "meta" => Ok(Platform::Meta),
            "ctv" => Ok(Platform::Ctv),
            _ => Err(format!("Unknown platform: {s}")),
        }
    }
}
