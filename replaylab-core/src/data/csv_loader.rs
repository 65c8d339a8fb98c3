//! CSV price loader.
//!
//! Reads two-column `date,price` files (header required, dates `%Y-%m-%d`)
//! into a validated `PriceSeries`. All coercion of malformed input happens
//! here; downstream code gets the series contract for free.

use crate::domain::{PricePoint, PriceSeries, SeriesError};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::path::Path;
use thiserror::Error;

/// Why price data could not be loaded.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to open price file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("bad date {value:?} at data row {row} (expected YYYY-MM-DD)")]
    BadDate { row: usize, value: String },

    #[error("invalid series: {0}")]
    Series(#[from] SeriesError),
}

#[derive(Debug, Deserialize)]
struct RawRow {
    date: String,
    price: f64,
}

/// Load a `date,price` CSV into a validated series.
///
/// Row numbers in errors are 1-based data rows (the header is not counted).
/// A header-only file loads as an empty series.
pub fn load_csv(path: &Path) -> Result<PriceSeries, DataError> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut points = Vec::new();
    for (i, row) in reader.deserialize::<RawRow>().enumerate() {
        let row = row?;
        let date =
            NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").map_err(|_| DataError::BadDate {
                row: i + 1,
                value: row.date.clone(),
            })?;
        points.push(PricePoint {
            date,
            price: row.price,
        });
    }

    Ok(PriceSeries::new(points)?)
}
