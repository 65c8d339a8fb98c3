//! Market order value types: side and the order itself.

use super::account::AccountError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which way an order trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = AccountError;

    /// Parses `BUY`/`SELL` in any case. Sides arriving as text (config
    /// files, CSV columns) are rejected here; a constructed `OrderSide`
    /// is always one of the two valid values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BUY" => Ok(OrderSide::Buy),
            "SELL" => Ok(OrderSide::Sell),
            _ => Err(AccountError::InvalidSide(s.to_string())),
        }
    }
}

/// A market order against the single traded instrument.
///
/// `quantity` is a whole unit count; `price` is the execution price observed
/// by the simulation loop at the current step. Orders fill immediately and
/// completely or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketOrder {
    pub side: OrderSide,
    pub quantity: i64,
    pub price: f64,
}

impl MarketOrder {
    pub fn buy(quantity: i64, price: f64) -> Self {
        Self {
            side: OrderSide::Buy,
            quantity,
            price,
        }
    }

    pub fn sell(quantity: i64, price: f64) -> Self {
        Self {
            side: OrderSide::Sell,
            quantity,
            price,
        }
    }

    /// Cash value of the order: `quantity * price`.
    pub fn notional(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}
