//! Outcome types produced by the mechanism engines.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Allocation, AllocationShape, Bid, BidderId};

/// Winner id -> payment. Only winners appear as keys.
pub type Payments = BTreeMap<BidderId, Decimal>;

/// Sum of all payments (seller revenue).
#[must_use]
pub fn total_revenue(payments: &Payments) -> Decimal {
    payments.values().copied().sum()
}

/// The welfare-maximizing allocation of one bid set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimalAllocation {
    pub allocation: Allocation,
    /// Social welfare: total declared value of the winning bids.
    #[serde(with = "crate::serde_float")]
    pub welfare: Decimal,
    pub shape: AllocationShape,
    /// The winners' bids, each once, in slot order.
    pub winning_bids: Vec<Bid>,
}

impl OptimalAllocation {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            allocation: Allocation::empty(),
            welfare: Decimal::ZERO,
            shape: AllocationShape::Empty,
            winning_bids: Vec::new(),
        }
    }

    /// The bid a winner won with.
    #[must_use]
    pub fn winning_bid(&self, bidder: &BidderId) -> Option<&Bid> {
        self.winning_bids.iter().find(|bid| &bid.bidder_id == bidder)
    }

    /// Welfare the other winners receive under this allocation.
    #[must_use]
    pub fn welfare_of_others(&self, bidder: &BidderId) -> Decimal {
        self.winning_bids
            .iter()
            .filter(|bid| &bid.bidder_id != bidder)
            .map(|bid| bid.value)
            .sum()
    }
}

/// Full VCG result: allocation, welfare and the externality payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VcgOutcome {
    pub allocation: Allocation,
    #[serde(with = "crate::serde_float")]
    pub welfare: Decimal,
    #[serde(with = "crate::serde_float::map")]
    pub payments: Payments,
    #[serde(with = "crate::serde_float")]
    pub total_revenue: Decimal,
}

impl VcgOutcome {
    /// Payment owed by `bidder`, `None` if it did not win.
    #[must_use]
    pub fn payment_of(&self, bidder: &BidderId) -> Option<Decimal> {
        self.payments.get(bidder).copied()
    }
}

/// Single-item second-price result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondPriceOutcome {
    pub winner: BidderId,
    #[serde(with = "crate::serde_float")]
    pub payment: Decimal,
}

impl std::fmt::Display for SecondPriceOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} pays {}", self.winner, self.payment)
    }
}
