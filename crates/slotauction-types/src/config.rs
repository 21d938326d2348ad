//! Mechanism configuration.

use serde::{Deserialize, Serialize};

/// How bids of equal value are ordered within a category (and in the
/// second-price ranking). Decides the winner under ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Earlier bid in the input sequence ranks first (stable sort).
    #[default]
    InputOrder,
    /// Lexicographically smaller bidder id ranks first.
    BidderIdAscending,
}

impl std::fmt::Display for TieBreak {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputOrder => write!(f, "INPUT_ORDER"),
            Self::BidderIdAscending => write!(f, "BIDDER_ID_ASCENDING"),
        }
    }
}

/// Settings shared by the allocation, VCG and second-price engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MechanismConfig {
    /// Ordering of equal-value bids.
    pub tie_break: TieBreak,
    /// Reject bid sets in which one bidder id appears twice. When off, the
    /// counterfactual step excludes every bid that carries the winner's id.
    pub enforce_unique_bidders: bool,
}

impl Default for MechanismConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::InputOrder,
            enforce_unique_bidders: true,
        }
    }
}

impl MechanismConfig {
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[must_use]
    pub fn allow_duplicate_bidders(mut self) -> Self {
        self.enforce_unique_bidders = false;
        self
    }
}
