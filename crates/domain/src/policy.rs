use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How one address is chosen when a hostname resolves to several.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Always the resolver's primary answer
    #[default]
    First,
    /// Uniform pick on every call
    Random,
    /// Shared counter, advanced on every selection
    #[serde(alias = "round-robin", alias = "roundrobin")]
    RoundRobin,
}

impl SelectionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Random => "random",
            Self::RoundRobin => "round_robin",
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(Self::First),
            "random" => Ok(Self::Random),
            "round_robin" | "round-robin" | "roundrobin" => Ok(Self::RoundRobin),
            other => Err(format!("Unknown selection policy: {other}")),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
