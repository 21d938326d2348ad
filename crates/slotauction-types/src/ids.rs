//! Identifiers used throughout SlotAuction.
//!
//! Bidder identities are caller-supplied strings. Uniqueness within one
//! auction is checked at intake, never by the engines themselves.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a bidder (one bid per identity).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BidderId(pub String);

impl BidderId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BidderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BidderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BidderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for BidderId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BidderId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
