//! Data sources: CSV files and synthetic generation.

pub mod csv_loader;
pub mod synthetic;

pub use csv_loader::{load_csv, DataError};
pub use synthetic::generate_series;
