//! Per-category bid book.
//!
//! Bids are partitioned by [`SpaceType`] and each category is ranked by
//! value, highest first. Equal values are ordered by the configured
//! [`TieBreak`]: input order (stable sort) or ascending bidder id.
//!
//! The allocation rule only ever reads the head of each category; the full
//! ranking is kept for diagnostics and for the second-price engine.

use std::collections::HashSet;

use slotauction_types::{Bid, BidderId, SpaceType, TieBreak};

/// Bids partitioned by category, each category ranked best-first.
#[derive(Debug, Clone, Default)]
pub struct CategoryBook {
    top: Vec<Bid>,
    sidebar: Vec<Bid>,
    both: Vec<Bid>,
}

impl CategoryBook {
    /// Partition and rank a bid set.
    #[must_use]
    pub fn build(bids: &[Bid], tie_break: TieBreak) -> Self {
        Self::build_excluding(bids, None, tie_break)
    }

    /// Partition and rank a bid set with every bid of `excluding` left out.
    #[must_use]
    pub fn build_excluding(bids: &[Bid], excluding: Option<&BidderId>, tie_break: TieBreak) -> Self {
        let mut book = Self::default();
        for bid in bids {
            if excluding == Some(&bid.bidder_id) {
                continue;
            }
            book.category_mut(bid.space_type).push(bid.clone());
        }
        for space_type in SpaceType::ALL {
            rank(book.category_mut(space_type), tie_break);
        }
        book
    }

    /// The ranked bids of one category.
    #[must_use]
    pub fn category(&self, space_type: SpaceType) -> &[Bid] {
        match space_type {
            SpaceType::Top => &self.top,
            SpaceType::Sidebar => &self.sidebar,
            SpaceType::Both => &self.both,
        }
    }

    fn category_mut(&mut self, space_type: SpaceType) -> &mut Vec<Bid> {
        match space_type {
            SpaceType::Top => &mut self.top,
            SpaceType::Sidebar => &mut self.sidebar,
            SpaceType::Both => &mut self.both,
        }
    }

    /// Highest-ranked bid of a category.
    #[must_use]
    pub fn best(&self, space_type: SpaceType) -> Option<&Bid> {
        self.category(space_type).first()
    }

    /// Total bids across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.top.len() + self.sidebar.len() + self.both.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rank bids by value, highest first. The sort is stable, so under
/// [`TieBreak::InputOrder`] equal values keep their relative order.
pub(crate) fn rank(bids: &mut [Bid], tie_break: TieBreak) {
    match tie_break {
        TieBreak::InputOrder => bids.sort_by(|a, b| b.value.cmp(&a.value)),
        TieBreak::BidderIdAscending => bids.sort_by(|a, b| {
            b.value
                .cmp(&a.value)
                .then_with(|| a.bidder_id.cmp(&b.bidder_id))
        }),
    }
}

/// First bidder id that appears on more than one bid, in input order.
#[must_use]
pub fn find_duplicate_bidder(bids: &[Bid]) -> Option<&BidderId> {
    let mut seen: HashSet<&BidderId> = HashSet::with_capacity(bids.len());
    bids.iter()
        .map(|bid| &bid.bidder_id)
        .find(|id| !seen.insert(*id))
}
