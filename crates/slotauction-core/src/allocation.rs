//! Welfare-maximizing allocation of the two slots.
//!
//! With three bid categories and two slots there are only two feasible
//! allocation shapes:
//!
//! 1. **Joint**: the best `Both` bid takes both slots.
//! 2. **Split**: the best `Top` bid takes `top`, the best `Sidebar` bid takes
//!    `sidebar` (either may be missing and then contributes zero).
//!
//! A `Both` winner occupies both slots, so it can never be combined with a
//! single-slot winner. Within a shape welfare is monotone in bid value, so
//! only the head of each category needs to be considered.
//!
//! The joint candidate is evaluated first and kept unless the split candidate
//! is **strictly** better; an exact tie therefore goes to the joint bidder.

use rust_decimal::Decimal;
use slotauction_types::{
    Allocation, AllocationShape, Bid, BidderId, MechanismConfig, OptimalAllocation, SpaceType,
    TieBreak,
};

use crate::book::{CategoryBook, find_duplicate_bidder};

/// Allocation engine over one static bid set.
///
/// The category book is built once at construction and reused by every
/// query on this engine.
#[derive(Debug, Clone)]
pub struct AllocationEngine {
    bids: Vec<Bid>,
    book: CategoryBook,
    config: MechanismConfig,
}

impl AllocationEngine {
    /// Create an engine with the default configuration.
    #[must_use]
    pub fn new(bids: impl IntoIterator<Item = Bid>) -> Self {
        Self::with_config(bids, MechanismConfig::default())
    }

    /// Create an engine with an explicit configuration.
    ///
    /// No uniqueness check happens here; bid sets are validated at intake.
    /// A repeated bidder id is logged because the counterfactual step will
    /// exclude all of its bids together.
    #[must_use]
    pub fn with_config(bids: impl IntoIterator<Item = Bid>, config: MechanismConfig) -> Self {
        let bids: Vec<Bid> = bids.into_iter().collect();
        if let Some(dup) = find_duplicate_bidder(&bids) {
            tracing::warn!(
                bidder = %dup,
                "Duplicate bidder id: counterfactual exclusion will drop all of its bids"
            );
        }
        let book = CategoryBook::build(&bids, config.tie_break);
        Self { bids, book, config }
    }

    /// The bids in input order.
    #[must_use]
    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    #[must_use]
    pub fn book(&self) -> &CategoryBook {
        &self.book
    }

    #[must_use]
    pub fn config(&self) -> &MechanismConfig {
        &self.config
    }

    /// Find the allocation that maximizes social welfare.
    ///
    /// An empty bid set yields the empty allocation with zero welfare.
    #[must_use]
    pub fn find_optimal_allocation(&self) -> OptimalAllocation {
        solve(&self.book)
    }
}

/// Solve the allocation problem over a prepared book.
#[must_use]
pub fn solve(book: &CategoryBook) -> OptimalAllocation {
    let mut best = OptimalAllocation::empty();

    // Candidate 1: joint
    if let Some(joint) = book.best(SpaceType::Both) {
        best = OptimalAllocation {
            allocation: Allocation::joint(joint.bidder_id.clone()),
            welfare: joint.value,
            shape: AllocationShape::Joint,
            winning_bids: vec![joint.clone()],
        };
    }

    // Candidate 2: split, adopted only on strict improvement
    let top = book.best(SpaceType::Top);
    let sidebar = book.best(SpaceType::Sidebar);
    let split_value = top.map_or(Decimal::ZERO, |b| b.value) + sidebar.map_or(Decimal::ZERO, |b| b.value);

    if split_value > best.welfare {
        best = OptimalAllocation {
            allocation: Allocation::split(
                top.map(|b| b.bidder_id.clone()),
                sidebar.map(|b| b.bidder_id.clone()),
            ),
            welfare: split_value,
            shape: AllocationShape::Split,
            winning_bids: top.into_iter().chain(sidebar).cloned().collect(),
        };
    }

    tracing::debug!(
        bids = book.len(),
        shape = %best.shape,
        welfare = %best.welfare,
        allocation = %best.allocation,
        "Allocation solved"
    );

    best
}

/// Optimal welfare of `bids` with every bid of `excluding` removed.
///
/// This is the counterfactual query behind the VCG payment rule.
#[must_use]
pub fn optimal_welfare(bids: &[Bid], excluding: Option<&BidderId>, tie_break: TieBreak) -> Decimal {
    solve(&CategoryBook::build_excluding(bids, excluding, tie_break)).welfare
}
