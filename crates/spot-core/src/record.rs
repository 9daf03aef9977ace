//! Raw upstream price records
//!
//! The upstream feed is loosely typed: any field may be missing, and a
//! response body is either a single record or an array of records. Nothing
//! past the pipeline's normalizer ever sees these types.

use serde::{Deserialize, Serialize};

/// Single spot price record as delivered by the upstream feed.
///
/// Every field is optional; records missing a timestamp or the selected
/// price are dropped during normalization rather than reported as errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceRecord {
    /// Interval start, RFC 3339 or naive `YYYY-MM-DDTHH:MM:SS`
    pub timestamp: Option<String>,
    /// Price including tax, per unit
    pub price_with_tax: Option<f64>,
    /// Price excluding tax, per unit
    pub price_no_tax: Option<f64>,
    /// Rank supplied by some upstream variants, ignored by the pipeline
    pub rank: Option<u32>,
}

impl PriceRecord {
    /// The price field matching the caller's tax selection
    pub fn selected_price(&self, include_tax: bool) -> Option<f64> {
        if include_tax {
            self.price_with_tax
        } else {
            self.price_no_tax
        }
    }
}

/// Upstream response body: a bare record or an array of records.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PriceFeed {
    Many(Vec<PriceRecord>),
    One(PriceRecord),
}

impl PriceFeed {
    /// Normalize to a record sequence, wrapping a bare record
    pub fn into_records(self) -> Vec<PriceRecord> {
        match self {
            Self::Many(records) => records,
            Self::One(record) => vec![record],
        }
    }
}
