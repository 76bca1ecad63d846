use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the seller's personal income tax is assessed.
///
/// The five-years-and-only-home exemption overrides whichever mode is
/// selected; see the seller calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PitMode {
    /// No personal income tax is charged.
    Exempt,
    /// Flat 1% of the contract price, assessed by the tax office.
    Assessed1,
    /// 20% of the documented gain after allowable deductions.
    Diff20,
}

impl PitMode {
    /// Stable wire/storage name, matching the persisted form values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exempt => "exempt",
            Self::Assessed1 => "assessed1",
            Self::Diff20 => "diff20",
        }
    }

    /// Human-readable label for summaries and reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Exempt => "exempt",
            Self::Assessed1 => "assessed at 1% of price",
            Self::Diff20 => "20% of deducted gain",
        }
    }
}

/// Error returned when a string is not a recognized [`PitMode`] name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized personal income tax mode '{0}' (expected exempt, assessed1 or diff20)")]
pub struct ParsePitModeError(String);

impl FromStr for PitMode {
    type Err = ParsePitModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exempt" => Ok(Self::Exempt),
            "assessed1" => Ok(Self::Assessed1),
            "diff20" => Ok(Self::Diff20),
            other => Err(ParsePitModeError(other.to_string())),
        }
    }
}

impl fmt::Display for PitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn round_trips_through_str() {
        for mode in [PitMode::Exempt, PitMode::Assessed1, PitMode::Diff20] {
            assert_eq!(mode.as_str().parse::<PitMode>(), Ok(mode));
        }
    }

    #[test]
    fn rejects_unknown_name() {
        assert!("flat3".parse::<PitMode>().is_err());
    }
}
