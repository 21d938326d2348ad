//! System-wide constants for the SlotAuction engines.

use rust_decimal::Decimal;

/// Number of slots on offer: `top` and `sidebar`.
pub const SLOT_COUNT: usize = 2;

/// Upper bound on winners in one allocation (one per slot).
pub const MAX_WINNERS: usize = SLOT_COUNT;

/// Wire code for a top-only bid.
pub const CODE_TOP: &str = "t";

/// Wire code for a sidebar-only bid.
pub const CODE_SIDEBAR: &str = "s";

/// Wire code for a bid on both slots jointly.
pub const CODE_BOTH: &str = "b";

/// Largest accepted bid value (10^24).
///
/// Welfare sums at most two bids, so every sum and difference the engines
/// compute stays far inside `Decimal`'s range.
pub const MAX_BID_VALUE: Decimal = Decimal::from_parts(2_701_131_776, 466_537_709, 54_210, false, 0);

/// Domain separator for outcome digests.
pub const OUTCOME_DIGEST_DOMAIN: &[u8] = b"slotauction:outcome:v1:";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "SlotAuction";
