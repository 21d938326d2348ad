//! Outcome digests for run-to-run reproducibility.
//!
//! The same bid set in the same order must always produce the same VCG
//! outcome. The digest is a SHA-256 over the bids and the outcome, so two
//! reports can be compared without diffing full payloads.

use rust_decimal::Decimal;
use sha2::{Digest, Sha256};
use slotauction_types::{Bid, Slot, VcgOutcome, constants};

fn update_str(hasher: &mut Sha256, s: &str) {
    hasher.update((s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}

fn update_amount(hasher: &mut Sha256, amount: Decimal) {
    // normalize so 70 and 70.0 hash alike
    update_str(hasher, &amount.normalize().to_string());
}

/// Compute the digest of a bid set and its VCG outcome.
///
/// Depends on:
/// - each bid (id, value, category) in input order
/// - the slot assignment
/// - each payment, in bidder-id order
#[must_use]
pub fn compute_outcome_digest(bids: &[Bid], outcome: &VcgOutcome) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(constants::OUTCOME_DIGEST_DOMAIN);
    hasher.update((bids.len() as u64).to_le_bytes());

    for bid in bids {
        update_str(&mut hasher, bid.bidder_id.as_str());
        update_amount(&mut hasher, bid.value);
        update_str(&mut hasher, bid.space_type.code());
    }

    for slot in Slot::ALL {
        match outcome.allocation.get(slot) {
            Some(id) => {
                hasher.update([1u8]);
                update_str(&mut hasher, id.as_str());
            }
            None => hasher.update([0u8]),
        }
    }

    update_amount(&mut hasher, outcome.welfare);
    hasher.update((outcome.payments.len() as u64).to_le_bytes());
    for (id, payment) in &outcome.payments {
        update_str(&mut hasher, id.as_str());
        update_amount(&mut hasher, *payment);
    }

    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

/// Hex form of [`compute_outcome_digest`], as written into reports.
#[must_use]
pub fn outcome_digest_hex(bids: &[Bid], outcome: &VcgOutcome) -> String {
    hex::encode(compute_outcome_digest(bids, outcome))
}

/// Recompute the digest and compare with an expected value.
#[must_use]
pub fn verify_outcome_digest(bids: &[Bid], outcome: &VcgOutcome, expected: &[u8; 32]) -> bool {
    compute_outcome_digest(bids, outcome) == *expected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AllocationEngine;

    fn bids() -> Vec<Bid> {
        vec![
            Bid::both("A1", 100),
            Bid::top("B1", 80),
            Bid::sidebar("C1", 70),
        ]
    }

    #[test]
    fn same_input_same_digest() {
        let outcome_a = AllocationEngine::new(bids()).run();
        let outcome_b = AllocationEngine::new(bids()).run();
        assert_eq!(
            compute_outcome_digest(&bids(), &outcome_a),
            compute_outcome_digest(&bids(), &outcome_b)
        );
    }

    #[test]
    fn bid_order_matters() {
        let forward = bids();
        let mut reversed = bids();
        reversed.reverse();
        let outcome = AllocationEngine::new(forward.clone()).run();
        assert_ne!(
            compute_outcome_digest(&forward, &outcome),
            compute_outcome_digest(&reversed, &outcome)
        );
    }

    #[test]
    fn scale_does_not_matter() {
        let plain = vec![Bid::top("B1", 70)];
        let scaled = vec![Bid::new("B1", Decimal::new(700, 1), slotauction_types::SpaceType::Top)];
        let outcome = AllocationEngine::new(plain.clone()).run();
        assert_eq!(
            compute_outcome_digest(&plain, &outcome),
            compute_outcome_digest(&scaled, &outcome)
        );
    }

    #[test]
    fn verify_roundtrip() {
        let outcome = AllocationEngine::new(bids()).run();
        let digest = compute_outcome_digest(&bids(), &outcome);
        assert!(verify_outcome_digest(&bids(), &outcome, &digest));
        assert!(!verify_outcome_digest(&bids(), &outcome, &[0xAB; 32]));
    }

    #[test]
    fn hex_is_64_chars() {
        let outcome = AllocationEngine::new(Vec::new()).run();
        assert_eq!(outcome_digest_hex(&[], &outcome).len(), 64);
    }
}
