//! Domain types: the account state machine, orders, and price series.

pub mod account;
pub mod order;
pub mod series;

pub use account::{Account, AccountError};
pub use order::{MarketOrder, OrderSide};
pub use series::{PricePoint, PriceSeries, SeriesError};
