//! VCG payment rule.
//!
//! Each winner pays the externality it imposes on everyone else:
//!
//! ```text
//! payment(w) = optimal_welfare(bids without w) - welfare_of_others(w)
//! ```
//!
//! where `welfare_of_others(w)` is the value the *other* winners receive in
//! the original optimal allocation. One counterfactual re-solve per winner,
//! so at most two re-solves per auction. A bidder holding both slots is
//! charged once.
//!
//! ## Bounds
//!
//! Under the joint/split model every payment lies in `[0, value(w)]`:
//! - the others' original assignment stays feasible without `w`, so the
//!   counterfactual optimum is at least `welfare_of_others(w)`;
//! - removing bids never raises the optimum, so the counterfactual optimum is
//!   at most the original welfare.
//!
//! Payments are reported as computed, without clamping.

use rust_decimal::Decimal;
use slotauction_types::{
    Bid, BidderId, OptimalAllocation, Payments, TieBreak, VcgOutcome, total_revenue,
};

use crate::{AllocationEngine, optimal_welfare};

impl AllocationEngine {
    /// VCG payment for every winner of the optimal allocation.
    #[must_use]
    pub fn compute_vcg_payments(&self) -> Payments {
        let optimal = self.find_optimal_allocation();
        self.payments_for(&optimal)
    }

    /// Allocation, welfare, payments and revenue in one pass.
    #[must_use]
    pub fn run(&self) -> VcgOutcome {
        let optimal = self.find_optimal_allocation();
        let payments = self.payments_for(&optimal);
        let revenue = total_revenue(&payments);

        tracing::info!(
            bids = self.bids().len(),
            shape = %optimal.shape,
            welfare = %optimal.welfare,
            winners = payments.len(),
            revenue = %revenue,
            "VCG auction complete"
        );

        VcgOutcome {
            allocation: optimal.allocation,
            welfare: optimal.welfare,
            payments,
            total_revenue: revenue,
        }
    }

    fn payments_for(&self, optimal: &OptimalAllocation) -> Payments {
        optimal
            .allocation
            .winners()
            .into_iter()
            .map(|winner| {
                let payment = vcg_payment(self.bids(), optimal, winner, self.config().tie_break);
                (winner.clone(), payment)
            })
            .collect()
    }
}

/// VCG payment of one winner of `optimal`, computed over `bids`.
#[must_use]
pub fn vcg_payment(
    bids: &[Bid],
    optimal: &OptimalAllocation,
    winner: &BidderId,
    tie_break: TieBreak,
) -> Decimal {
    let without = optimal_welfare(bids, Some(winner), tie_break);
    let others = optimal.welfare_of_others(winner);
    let payment = without - others;

    tracing::debug!(
        winner = %winner,
        welfare_without = %without,
        welfare_of_others = %others,
        payment = %payment,
        "VCG payment computed"
    );

    payment
}
