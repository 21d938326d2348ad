//! Single-item second-price auction.
//!
//! Slots are not modeled here: the whole listing is one indivisible good and
//! `space_type` is ignored. The highest bid wins and pays the second-highest
//! value; a lone bidder pays zero. Equal values rank by the configured
//! [`TieBreak`](slotauction_types::TieBreak).

use rust_decimal::Decimal;
use slotauction_types::{AuctionError, Bid, MechanismConfig, Result, SecondPriceOutcome};

use crate::book::rank;

/// Second-price auction over one static bid set.
#[derive(Debug, Clone)]
pub struct SecondPriceAuction {
    bids: Vec<Bid>,
    config: MechanismConfig,
}

impl SecondPriceAuction {
    #[must_use]
    pub fn new(bids: impl IntoIterator<Item = Bid>) -> Self {
        Self::with_config(bids, MechanismConfig::default())
    }

    #[must_use]
    pub fn with_config(bids: impl IntoIterator<Item = Bid>, config: MechanismConfig) -> Self {
        Self {
            bids: bids.into_iter().collect(),
            config,
        }
    }

    /// All bids, highest value first.
    #[must_use]
    pub fn ranking(&self) -> Vec<Bid> {
        let mut ranked = self.bids.clone();
        rank(&mut ranked, self.config.tie_break);
        ranked
    }

    /// Run the auction.
    ///
    /// # Errors
    /// [`AuctionError::EmptyAuction`] if there are no bids.
    pub fn run_auction(&self) -> Result<SecondPriceOutcome> {
        let ranked = self.ranking();
        let mut iter = ranked.into_iter();
        let winner = iter.next().ok_or(AuctionError::EmptyAuction)?;
        let payment = iter.next().map_or(Decimal::ZERO, |runner_up| runner_up.value);

        tracing::info!(
            bids = self.bids.len(),
            winner = %winner.bidder_id,
            bid = %winner.value,
            payment = %payment,
            "Second-price auction complete"
        );

        Ok(SecondPriceOutcome {
            winner: winner.bidder_id,
            payment,
        })
    }
}
