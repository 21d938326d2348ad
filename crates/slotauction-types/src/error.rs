//! Error types for the SlotAuction engines.
//!
//! All errors use the `SA_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Bid validation errors
//! - 2xx: Mechanism errors
//! - 9xx: General errors (serialization, configuration, I/O)
//!
//! An auction with no eligible allocation is **not** an error: the
//! allocation engine returns an empty allocation with zero welfare.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::BidderId;

/// Central error enum for all SlotAuction operations.
#[derive(Debug, Error)]
pub enum AuctionError {
    // =================================================================
    // Validation Errors (1xx)
    // =================================================================
    /// A `space_type` code outside `t`, `s`, `b`. Rejects the whole bid set.
    #[error("SA_ERR_100: Invalid space type code: {code:?} (expected \"t\", \"s\" or \"b\")")]
    InvalidSpaceType { code: String },

    /// A bid value that is negative.
    #[error("SA_ERR_101: Invalid bid value {value} from {bidder_id}: {reason}")]
    InvalidBidValue {
        bidder_id: BidderId,
        value: Decimal,
        reason: String,
    },

    /// Two bids carry the same bidder id.
    #[error("SA_ERR_102: Duplicate bidder id: {0}")]
    DuplicateBidder(BidderId),

    // =================================================================
    // Mechanism Errors (2xx)
    // =================================================================
    /// The second-price auction was run without any bids.
    #[error("SA_ERR_200: Empty auction: at least one bid is required")]
    EmptyAuction,

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("SA_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config file, missing fields, etc.).
    #[error("SA_ERR_902: Configuration error: {0}")]
    Configuration(String),

    /// I/O error (files, stdin/stdout).
    #[error("SA_ERR_903: I/O error: {0}")]
    Io(String),
}

impl AuctionError {
    /// Returns `true` for errors raised while validating bid input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidSpaceType { .. } | Self::InvalidBidValue { .. } | Self::DuplicateBidder(_)
        )
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, AuctionError>;

// Conversion from std::io::Error
impl From<std::io::Error> for AuctionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for AuctionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
