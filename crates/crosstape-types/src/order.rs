//! Order types shared by the live matching engine and the replay simulator.
//!
//! An order is owned by whichever side/price FIFO holds it and is removed
//! when its quantity reaches zero — or, on the replay path, after at most
//! one fill attempt.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{CrosstapeError, OrderId, TimeToken};

/// Which side of the book this order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = CrosstapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            other => Err(CrosstapeError::UnknownToken {
                field: "side",
                value: other.to_string(),
            }),
        }
    }
}

/// The kind of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Market,
    Limit,
}

impl std::fmt::Display for OrderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Market => write!(f, "market"),
            Self::Limit => write!(f, "limit"),
        }
    }
}

impl FromStr for OrderKind {
    type Err = CrosstapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market" => Ok(Self::Market),
            "limit" => Ok(Self::Limit),
            other => Err(CrosstapeError::UnknownToken {
                field: "kind",
                value: other.to_string(),
            }),
        }
    }
}

/// How long a replay order stays eligible to fill.
///
/// The live path ignores this — resting orders stay until matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum TimeInForce {
    /// Immediate-or-cancel: checked only at the arrival tick.
    #[serde(rename = "IOC")]
    Ioc,
    /// Good-for-day: eligible through the remainder of the tape.
    #[serde(rename = "GFD")]
    Gfd,
}

impl std::fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ioc => write!(f, "IOC"),
            Self::Gfd => write!(f, "GFD"),
        }
    }
}

impl FromStr for TimeInForce {
    type Err = CrosstapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IOC" => Ok(Self::Ioc),
            "GFD" => Ok(Self::Gfd),
            other => Err(CrosstapeError::UnknownToken {
                field: "tif",
                value: other.to_string(),
            }),
        }
    }
}

/// A submitted order.
///
/// `quantity` is mutated in place as the order is partially filled by the
/// live crossing pass. `price` is carried but ignored for market orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub symbol: String,
    pub side: OrderSide,
    pub kind: OrderKind,
    /// Remaining quantity. Positive on entry; the order is removed from its
    /// FIFO the moment this reaches zero.
    pub quantity: u64,
    /// Limit price. Ignored for market orders.
    pub price: Decimal,
    /// Submission time token.
    pub ts: TimeToken,
    pub tif: TimeInForce,
}

impl Order {
    #[must_use]
    pub fn new(
        id: OrderId,
        symbol: impl Into<String>,
        side: OrderSide,
        kind: OrderKind,
        quantity: u64,
        price: Decimal,
        ts: TimeToken,
        tif: TimeInForce,
    ) -> Self {
        Self {
            id,
            symbol: symbol.into(),
            side,
            kind,
            quantity,
            price,
            ts,
            tif,
        }
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.quantity == 0
    }
}
