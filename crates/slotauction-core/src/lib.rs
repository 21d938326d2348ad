//! # slotauction-core
//!
//! **Pure deterministic mechanism engines for SlotAuction.**
//!
//! The core takes a complete, static bid set and produces allocations and
//! payments. It has:
//!
//! - **Zero side effects**: no I/O, no shared state between auctions
//! - **Deterministic output**: same bids in the same order -> same outcome
//! - **Exact arithmetic**: values, welfare and payments are `Decimal`
//!
//! ```text
//! bids -> CategoryBook -> AllocationEngine::find_optimal_allocation()
//!                      -> AllocationEngine::compute_vcg_payments()  (one re-solve per winner)
//! bids -> SecondPriceAuction::run_auction()
//! ```

pub mod allocation;
pub mod book;
pub mod determinism;
pub mod second_price;
pub mod vcg;

pub use allocation::{AllocationEngine, optimal_welfare, solve};
pub use book::{CategoryBook, find_duplicate_bidder};
pub use determinism::{compute_outcome_digest, outcome_digest_hex, verify_outcome_digest};
pub use second_price::SecondPriceAuction;
pub use vcg::vcg_payment;
