//! Top-of-book quote snapshots for the replay tape.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TimeToken;

/// One top-of-book snapshot at one instant of the historical tape.
///
/// Immutable once loaded — the tape is read-only for the duration of a
/// simulator run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookTick {
    pub ts: TimeToken,
    pub bid: Decimal,
    pub ask: Decimal,
    pub bid_size: u64,
    pub ask_size: u64,
}

impl BookTick {
    #[must_use]
    pub fn new(
        ts: impl Into<TimeToken>,
        bid: Decimal,
        ask: Decimal,
        bid_size: u64,
        ask_size: u64,
    ) -> Self {
        Self {
            ts: ts.into(),
            bid,
            ask,
            bid_size,
            ask_size,
        }
    }

    /// Mid price = (bid + ask) / 2.
    #[must_use]
    pub fn mid(&self) -> Decimal {
        (self.bid + self.ask) / Decimal::TWO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mid_price() {
        let tick = BookTick::new("t0", Decimal::new(1000, 1), Decimal::new(1002, 1), 10, 20);
        assert_eq!(tick.mid(), Decimal::new(1001, 1));
    }

    #[test]
    fn serde_round_trip() {
        let tick = BookTick::new("t0", Decimal::new(1000, 1), Decimal::new(1002, 1), 10, 20);
        let json = serde_json::to_string(&tick).unwrap();
        let back: BookTick = serde_json::from_str(&json).unwrap();
        assert_eq!(tick, back);
    }
}
