//! # slotauction-types
//!
//! Shared types, errors, and configuration for the **SlotAuction** engines.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`BidderId`]
//! - **Bid model**: [`Bid`], [`SpaceType`]
//! - **Allocation model**: [`Slot`], [`Allocation`], [`AllocationShape`]
//! - **Outcomes**: [`OptimalAllocation`], [`Payments`], [`VcgOutcome`], [`SecondPriceOutcome`]
//! - **Configuration**: [`MechanismConfig`], [`TieBreak`]
//! - **Errors**: [`AuctionError`] with `SA_ERR_` prefix codes
//! - **Constants**: slot count, engine name, digest domain

pub mod allocation;
pub mod bid;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod outcome;
pub mod serde_float;

// Re-export all primary types at crate root for ergonomic imports:
//   use slotauction_types::{Bid, SpaceType, Allocation, ...};

pub use allocation::*;
pub use bid::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use outcome::*;

// Constants are accessed via `slotauction_types::constants::FOO`
// (not re-exported to avoid name collisions).
