//! Account — the cash/position state machine for a single instrument.
//!
//! All mutation goes through `apply_market_order`, which validates before it
//! writes: a rejected order leaves the account exactly as it was. The account
//! knows nothing about time, bars, or strategies; it only answers to orders.

use super::order::{MarketOrder, OrderSide};
use thiserror::Error;

/// Order rejection reasons.
///
/// `InvalidSide` is produced by `OrderSide::from_str` when sides arrive as
/// text; the typed API cannot construct an invalid side, so
/// `apply_market_order` itself never returns it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AccountError {
    #[error("invalid order side {0:?} (expected BUY or SELL)")]
    InvalidSide(String),

    #[error("invalid order quantity {0} (must be a positive whole number)")]
    InvalidQuantity(i64),

    #[error("invalid order price {0} (must be a positive finite number)")]
    InvalidPrice(f64),

    #[error("insufficient cash: order requires {required:.2}, available {available:.2}")]
    InsufficientCash { required: f64, available: f64 },

    #[error("insufficient position: order sells {requested}, held {held}")]
    InsufficientPosition { requested: i64, held: i64 },
}

/// Cash and unit position for the single traded instrument.
///
/// Fields are private so the invariants survive any call sequence: starting
/// from a valid construction, `cash` stays non-negative and `position` stays
/// non-negative (buys are cash-constrained, sells are inventory-constrained).
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    cash: f64,
    position: i64,
}

impl Account {
    /// Opens an account with a starting cash endowment.
    ///
    /// # Panics
    /// If `initial_cash` is negative or not finite.
    pub fn new(initial_cash: f64) -> Self {
        assert!(
            initial_cash.is_finite() && initial_cash >= 0.0,
            "initial cash must be non-negative and finite, got {initial_cash}"
        );
        Self {
            cash: initial_cash,
            position: 0,
        }
    }

    pub fn cash(&self) -> f64 {
        self.cash
    }

    pub fn position(&self) -> i64 {
        self.position
    }

    /// Whether the account holds no units.
    pub fn is_flat(&self) -> bool {
        self.position == 0
    }

    /// Mark-to-market equity at the given price: `cash + position * price`.
    pub fn equity(&self, price: f64) -> f64 {
        self.cash + self.position as f64 * price
    }

    /// Executes a market order against the account.
    ///
    /// Checks run in a fixed order — quantity, price, then the side-specific
    /// constraint — and nothing is written until every check has passed, so
    /// a failed order is a no-op.
    ///
    /// - BUY requires `cash >= quantity * price`; debits cash, credits units.
    /// - SELL requires `position >= quantity`; debits units, credits cash.
    pub fn apply_market_order(&mut self, order: MarketOrder) -> Result<(), AccountError> {
        if order.quantity <= 0 {
            return Err(AccountError::InvalidQuantity(order.quantity));
        }
        if !order.price.is_finite() || order.price <= 0.0 {
            return Err(AccountError::InvalidPrice(order.price));
        }

        let notional = order.notional();
        match order.side {
            OrderSide::Buy => {
                if self.cash < notional {
                    return Err(AccountError::InsufficientCash {
                        required: notional,
                        available: self.cash,
                    });
                }
                self.cash -= notional;
                self.position += order.quantity;
            }
            OrderSide::Sell => {
                if self.position < order.quantity {
                    return Err(AccountError::InsufficientPosition {
                        requested: order.quantity,
                        held: self.position,
                    });
                }
                self.position -= order.quantity;
                self.cash += notional;
            }
        }

        Ok(())
    }
}
