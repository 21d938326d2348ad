//! # slotauction-harness
//!
//! **Experiment driver** around the SlotAuction engines: bid-set intake,
//! JSON I/O, canned scenario suites, and findings.
//!
//! ## Flow
//!
//! ```text
//! JSON bid set -> io::read_bid_set() -> BidIntake::admit()
//!     -> run_experiment() -> { VCG outcome, second-price outcome, ratio, digest }
//!     -> io::write_json()
//! ```
//!
//! The harness never changes mechanism semantics; it only validates input
//! and assembles reports.

pub mod analysis;
pub mod config;
pub mod experiment;
pub mod intake;
pub mod io;
pub mod scenarios;

pub use analysis::Findings;
pub use config::HarnessConfig;
pub use experiment::{ExperimentReport, run_experiment};
pub use intake::BidIntake;
pub use io::{BidDto, BidSetDto, read_bid_set, write_json};
pub use scenarios::{SuiteReport, run_all_scenarios};
