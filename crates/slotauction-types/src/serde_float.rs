//! Serde helpers that emit [`Decimal`] amounts as JSON numbers.
//!
//! Bid sets arrive with plain numeric `value` fields, so outcomes are written
//! back the same way instead of rust_decimal's default string form. Input
//! accepts both numbers and strings.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Scalar amounts: `#[serde(with = "slotauction_types::serde_float")]`.
pub fn serialize<S: Serializer>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error> {
    let float = value
        .to_f64()
        .ok_or_else(|| S::Error::custom(format!("decimal {value} has no f64 form")))?;
    serializer.serialize_f64(float)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Decimal, D::Error> {
    <Decimal as Deserialize>::deserialize(deserializer)
}

/// Maps of amounts keyed by an orderable id (payments).
pub mod map {
    use serde::ser::{Error as _, SerializeMap};

    use super::*;

    pub fn serialize<K, S>(map: &BTreeMap<K, Decimal>, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: Serialize + Ord,
        S: Serializer,
    {
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (key, value) in map {
            let float = value
                .to_f64()
                .ok_or_else(|| S::Error::custom(format!("decimal {value} has no f64 form")))?;
            out.serialize_entry(key, &float)?;
        }
        out.end()
    }

    pub fn deserialize<'de, K, D>(deserializer: D) -> Result<BTreeMap<K, Decimal>, D::Error>
    where
        K: Deserialize<'de> + Ord,
        D: Deserializer<'de>,
    {
        BTreeMap::deserialize(deserializer)
    }
}
