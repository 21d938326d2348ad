//! One experiment: both mechanisms on the same bid set.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use slotauction_core::{AllocationEngine, SecondPriceAuction, outcome_digest_hex};
use slotauction_types::{
    AuctionError, Bid, MechanismConfig, Result, SecondPriceOutcome, VcgOutcome,
};

use crate::BidSetDto;

/// Report for one bid set.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub name: String,
    #[serde(flatten)]
    pub input: BidSetDto,
    /// `allocation`, `welfare`, `payments`, `total_revenue`.
    pub vcg: VcgOutcome,
    /// `winner`, `payment`; `null` when there were no bids.
    pub spa: Option<SecondPriceOutcome>,
    /// Second-price payment over VCG revenue; `null` when VCG revenue is zero.
    pub revenue_ratio: Option<f64>,
    /// Hex SHA-256 over the bids and the VCG outcome.
    pub digest: String,
}

impl ExperimentReport {
    /// Second-price payment, if the auction ran.
    #[must_use]
    pub fn spa_payment(&self) -> Option<Decimal> {
        self.spa.as_ref().map(|spa| spa.payment)
    }
}

/// Run both mechanisms over `bids` and assemble the report.
///
/// The bids are expected to have passed intake already. An empty set still
/// produces a report: the VCG side is empty and `spa` is `null`.
///
/// # Errors
/// Any second-price failure other than [`AuctionError::EmptyAuction`].
pub fn run_experiment(
    name: &str,
    bids: &[Bid],
    config: MechanismConfig,
) -> Result<ExperimentReport> {
    let vcg = AllocationEngine::with_config(bids.iter().cloned(), config).run();

    let spa = match SecondPriceAuction::with_config(bids.iter().cloned(), config).run_auction() {
        Ok(outcome) => Some(outcome),
        Err(AuctionError::EmptyAuction) => {
            tracing::info!(experiment = name, "No bids: second-price auction skipped");
            None
        }
        Err(err) => return Err(err),
    };

    let revenue_ratio = spa
        .as_ref()
        .and_then(|spa| revenue_ratio(spa.payment, vcg.total_revenue));

    let digest = outcome_digest_hex(bids, &vcg);

    tracing::info!(
        experiment = name,
        vcg_revenue = %vcg.total_revenue,
        spa_payment = ?spa.as_ref().map(|s| s.payment),
        ratio = ?revenue_ratio,
        "Experiment complete"
    );

    Ok(ExperimentReport {
        name: name.to_string(),
        input: BidSetDto::from(bids),
        vcg,
        spa,
        revenue_ratio,
        digest,
    })
}

/// `spa / vcg`, or `None` when VCG collected nothing.
#[must_use]
pub fn revenue_ratio(spa_payment: Decimal, vcg_revenue: Decimal) -> Option<f64> {
    if vcg_revenue <= Decimal::ZERO {
        return None;
    }
    spa_payment.checked_div(vcg_revenue)?.to_f64()
}
