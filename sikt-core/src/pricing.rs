//! Positive-price totals over a record sequence.
//!
//! A record contributes its price only when the price is present and
//! strictly positive; everything else is skipped silently.

use crate::record::Record;

/// Sum of all strictly positive prices in `records`.
pub fn total(records: &[Record]) -> f64 {
    records
        .iter()
        .filter_map(|record| record.price)
        .filter(|price| *price > 0.0)
        .sum()
}
