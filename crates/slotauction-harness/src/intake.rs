//! Bid intake: the validation gate in front of the engines.
//!
//! The engines accept any bid sequence. Everything that reaches them from
//! outside goes through [`BidIntake`] first:
//!
//! - **Fail-closed**: one bad bid rejects the whole set
//! - **Bounded values**: within `[0, MAX_BID_VALUE]`, so welfare sums and
//!   payments cannot overflow
//! - **One bid per identity**: duplicate ids would make the counterfactual
//!   exclusion drop several bids at once (enforced unless disabled)

use slotauction_core::find_duplicate_bidder;
use slotauction_types::{AuctionError, Bid, MechanismConfig, Result};

/// Validates bid sets against the mechanism's assumptions.
#[derive(Debug, Clone, Copy, Default)]
pub struct BidIntake {
    config: MechanismConfig,
}

impl BidIntake {
    #[must_use]
    pub fn new(config: MechanismConfig) -> Self {
        Self { config }
    }

    /// Validate a bid set.
    ///
    /// # Errors
    /// The first failing check, in input order.
    pub fn validate(&self, bids: &[Bid]) -> Result<()> {
        for bid in bids {
            bid.validate()?;
        }

        if let Some(dup) = find_duplicate_bidder(bids) {
            if self.config.enforce_unique_bidders {
                return Err(AuctionError::DuplicateBidder(dup.clone()));
            }
            tracing::warn!(bidder = %dup, "Duplicate bidder id admitted");
        }

        tracing::debug!(bids = bids.len(), "Bid set admitted");
        Ok(())
    }

    /// Validate and hand back the bid set.
    pub fn admit(&self, bids: Vec<Bid>) -> Result<Vec<Bid>> {
        self.validate(&bids)?;
        Ok(bids)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use slotauction_types::SpaceType;

    use super::*;

    #[test]
    fn valid_set_admitted() {
        let intake = BidIntake::default();
        let bids = vec![Bid::both("A1", 100), Bid::top("B1", 80)];
        assert_eq!(intake.admit(bids.clone()).unwrap(), bids);
    }

    #[test]
    fn empty_set_admitted() {
        assert!(BidIntake::default().validate(&[]).is_ok());
    }

    #[test]
    fn negative_value_rejects_whole_set() {
        let intake = BidIntake::default();
        let err = intake
            .validate(&[Bid::top("A1", 10), Bid::sidebar("B1", -3)])
            .unwrap_err();
        assert!(matches!(err, AuctionError::InvalidBidValue { ref bidder_id, .. } if bidder_id == "B1"));
    }

    #[test]
    fn value_bound_is_inclusive() {
        let intake = BidIntake::default();
        let max = slotauction_types::constants::MAX_BID_VALUE;
        assert!(intake
            .validate(&[Bid::new("A1", max, SpaceType::Top), Bid::new("B1", max, SpaceType::Sidebar)])
            .is_ok());

        let err = intake
            .validate(&[Bid::new("A1", max + Decimal::ONE, SpaceType::Top)])
            .unwrap_err();
        assert!(matches!(err, AuctionError::InvalidBidValue { .. }));
    }

    #[test]
    fn duplicate_rejected_by_default() {
        let intake = BidIntake::default();
        let err = intake
            .validate(&[Bid::top("A1", 60), Bid::sidebar("A1", 50)])
            .unwrap_err();
        assert!(matches!(err, AuctionError::DuplicateBidder(ref id) if id == "A1"));
    }

    #[test]
    fn duplicate_admitted_when_allowed() {
        let intake = BidIntake::new(MechanismConfig::default().allow_duplicate_bidders());
        assert!(intake.validate(&[Bid::top("A1", 60), Bid::sidebar("A1", 50)]).is_ok());
    }
}
