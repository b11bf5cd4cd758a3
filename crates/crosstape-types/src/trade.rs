//! Execution records produced by the two cores.
//!
//! The live crossing pass emits a [`Trade`] per matched pair; the replay
//! simulator emits a [`Fill`] per order that executes against the tape.
//! Both are immutable once created — appended to an output stream, never
//! mutated.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{OrderId, OrderSide, TimeToken, constants};

/// Which side of the liquidity event an order was on.
///
/// The replay simulator only ever constructs [`LiquidityRole::Taker`];
/// `Maker` is a legitimate variant of the record format that the current
/// algorithm does not produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiquidityRole {
    /// The order that triggered an immediate execution against resting
    /// liquidity.
    Taker,
    /// The resting order.
    Maker,
}

impl std::fmt::Display for LiquidityRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Taker => write!(f, "taker"),
            Self::Maker => write!(f, "maker"),
        }
    }
}

/// A trade produced by the live crossing pass.
///
/// Each trade pairs the front order of the best bid level with the front
/// order of the best ask level. The execution price is the resting ask
/// price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub symbol: String,
    pub price: Decimal,
    pub quantity: u64,
    pub ts: TimeToken,
}

impl Trade {
    /// The human-readable trade-log line, price fixed to 2 decimals.
    #[must_use]
    pub fn log_line(&self) -> String {
        format!(
            "TRADE: {} {} @ {:.2}",
            self.quantity,
            self.symbol,
            self.price.round_dp(constants::TRADE_LOG_PRICE_PRECISION)
        )
    }
}

impl std::fmt::Display for Trade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.log_line())
    }
}

/// A fill produced by the replay simulator.
///
/// Reports for exactly one historical order. At most one fill is ever
/// emitted per order, regardless of remaining unfilled quantity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fill {
    pub order_id: OrderId,
    /// Time token of the tape position where the fill executed.
    pub ts: TimeToken,
    pub price: Decimal,
    pub quantity: u64,
    /// Side of the order this fill reports for.
    pub side: OrderSide,
    pub liquidity: LiquidityRole,
}
