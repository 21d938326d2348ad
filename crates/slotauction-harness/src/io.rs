//! JSON bid-set input and report output.
//!
//! Input document:
//!
//! ```json
//! { "bids": [ { "bidder_id": "A1", "value": 100, "space_type": "b" } ] }
//! ```
//!
//! `space_type` is read as a raw string so an unknown code surfaces as
//! [`AuctionError::InvalidSpaceType`] rather than a generic parse failure.

use std::io::{Read, Write};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use slotauction_types::{AuctionError, Bid, Result, SpaceType};

use crate::BidIntake;

/// One bid as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BidDto {
    pub bidder_id: String,
    #[serde(with = "slotauction_types::serde_float")]
    pub value: Decimal,
    pub space_type: String,
}

impl TryFrom<BidDto> for Bid {
    type Error = AuctionError;

    fn try_from(dto: BidDto) -> Result<Self> {
        let space_type: SpaceType = dto.space_type.parse()?;
        Ok(Bid::new(dto.bidder_id, dto.value, space_type))
    }
}

impl From<&Bid> for BidDto {
    fn from(bid: &Bid) -> Self {
        Self {
            bidder_id: bid.bidder_id.to_string(),
            value: bid.value,
            space_type: bid.space_type.code().to_string(),
        }
    }
}

/// The input document: a complete, static bid set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BidSetDto {
    pub bids: Vec<BidDto>,
}

impl BidSetDto {
    /// Convert and validate. Any bad bid rejects the whole set.
    pub fn into_bids(self, intake: &BidIntake) -> Result<Vec<Bid>> {
        let bids = self
            .bids
            .into_iter()
            .map(Bid::try_from)
            .collect::<Result<Vec<_>>>()?;
        intake.admit(bids)
    }
}

impl From<&[Bid]> for BidSetDto {
    fn from(bids: &[Bid]) -> Self {
        Self {
            bids: bids.iter().map(BidDto::from).collect(),
        }
    }
}

/// Read and validate a bid set.
pub fn read_bid_set<R: Read>(reader: R, intake: &BidIntake) -> Result<Vec<Bid>> {
    let dto: BidSetDto = serde_json::from_reader(reader)?;
    dto.into_bids(intake)
}

/// Write any report as JSON, followed by a newline.
pub fn write_json<W: Write, T: Serialize>(mut writer: W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, value)?;
    } else {
        serde_json::to_writer(&mut writer, value)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
