//! Price series — the validated market-data input the simulation consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One observation: a trading date and its close price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub price: f64,
}

/// Why a point sequence was rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("price series dates are not strictly increasing at index {index}")]
    OutOfOrder { index: usize },

    #[error("price at index {index} is not finite")]
    NonFinite { index: usize },
}

/// An ordered price history for the single traded instrument.
///
/// Construction enforces the contract every consumer relies on: dates
/// strictly increasing, every price finite. Parsing and coercion of
/// malformed input happen earlier, in the data loaders; code holding a
/// `PriceSeries` never re-checks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Validates and wraps a point sequence. Empty input is a valid
    /// (zero-length) series.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        for (index, point) in points.iter().enumerate() {
            if !point.price.is_finite() {
                return Err(SeriesError::NonFinite { index });
            }
            if index > 0 && points[index - 1].date >= point.date {
                return Err(SeriesError::OutOfOrder { index });
            }
        }
        Ok(Self { points })
    }

    /// A series with no observations.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PricePoint> {
        self.points.get(index)
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// The close prices in order.
    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.price)
    }

    /// Content hash of the series (dataset identity for run summaries).
    ///
    /// Hashes the exact date and price bytes, so two series fingerprint
    /// equal iff they hold identical observations.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for point in &self.points {
            hasher.update(point.date.to_string().as_bytes());
            hasher.update(b",");
            hasher.update(&point.price.to_le_bytes());
            hasher.update(b"\n");
        }
        hasher.finalize().to_hex().to_string()
    }
}
