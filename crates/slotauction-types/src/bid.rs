//! Bid types for the two-slot auction.
//!
//! Every bidder submits exactly one [`Bid`], restricted to one of the three
//! [`SpaceType`] demand patterns. A bidder who wants both slots values them
//! only jointly: holding one of the two is worth nothing to a `Both` bid.
//!
//! Bids serialize to the wire shape but are only ever read through the
//! harness DTOs, which parse `space_type` with [`SpaceType::from_str`] and
//! report unknown codes as [`AuctionError::InvalidSpaceType`].

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::{AuctionError, BidderId, Slot, constants};

/// Which slots a bid asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize)]
pub enum SpaceType {
    /// Only the top slot.
    #[serde(rename = "t")]
    Top,
    /// Only the sidebar slot.
    #[serde(rename = "s")]
    Sidebar,
    /// Both slots together.
    #[serde(rename = "b")]
    Both,
}

impl SpaceType {
    /// Every category, in book order.
    pub const ALL: [SpaceType; 3] = [SpaceType::Top, SpaceType::Sidebar, SpaceType::Both];

    /// The single-letter wire code (`t`, `s`, `b`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Top => constants::CODE_TOP,
            Self::Sidebar => constants::CODE_SIDEBAR,
            Self::Both => constants::CODE_BOTH,
        }
    }

    /// The slots a winning bid of this category occupies.
    #[must_use]
    pub const fn slots(self) -> &'static [Slot] {
        match self {
            Self::Top => &[Slot::Top],
            Self::Sidebar => &[Slot::Sidebar],
            Self::Both => &[Slot::Top, Slot::Sidebar],
        }
    }
}

impl std::fmt::Display for SpaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "TOP"),
            Self::Sidebar => write!(f, "SIDEBAR"),
            Self::Both => write!(f, "BOTH"),
        }
    }
}

impl FromStr for SpaceType {
    type Err = AuctionError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            constants::CODE_TOP => Ok(Self::Top),
            constants::CODE_SIDEBAR => Ok(Self::Sidebar),
            constants::CODE_BOTH => Ok(Self::Both),
            other => Err(AuctionError::InvalidSpaceType {
                code: other.to_string(),
            }),
        }
    }
}

/// A sealed bid: one identity, one declared value, one demand pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bid {
    pub bidder_id: BidderId,
    /// Declared value for the requested slot(s). Within
    /// `[0, MAX_BID_VALUE]` once validated.
    #[serde(with = "crate::serde_float")]
    pub value: Decimal,
    pub space_type: SpaceType,
}

impl Bid {
    #[must_use]
    pub fn new(bidder_id: impl Into<BidderId>, value: Decimal, space_type: SpaceType) -> Self {
        Self {
            bidder_id: bidder_id.into(),
            value,
            space_type,
        }
    }

    /// Returns `true` if a win for this bid occupies `slot`.
    #[must_use]
    pub fn covers(&self, slot: Slot) -> bool {
        self.space_type.slots().contains(&slot)
    }

    /// Reject values the mechanism cannot price: negative declarations and
    /// values above [`constants::MAX_BID_VALUE`].
    pub fn validate(&self) -> crate::Result<()> {
        let reason = if self.value < Decimal::ZERO {
            "value must be non-negative".to_string()
        } else if self.value > constants::MAX_BID_VALUE {
            format!("value exceeds maximum {}", constants::MAX_BID_VALUE)
        } else {
            return Ok(());
        };
        Err(AuctionError::InvalidBidValue {
            bidder_id: self.bidder_id.clone(),
            value: self.value,
            reason,
        })
    }
}

impl std::fmt::Display for Bid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}/{}", self.bidder_id, self.value, self.space_type)
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Bid {
    pub fn top(bidder_id: &str, value: i64) -> Self {
        Self::new(bidder_id, Decimal::new(value, 0), SpaceType::Top)
    }

    pub fn sidebar(bidder_id: &str, value: i64) -> Self {
        Self::new(bidder_id, Decimal::new(value, 0), SpaceType::Sidebar)
    }

    pub fn both(bidder_id: &str, value: i64) -> Self {
        Self::new(bidder_id, Decimal::new(value, 0), SpaceType::Both)
    }
}
