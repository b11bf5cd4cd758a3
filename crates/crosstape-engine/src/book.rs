//! The price-level book for a single instrument.
//!
//! Uses `BTreeMap` for price-level ordering:
//! - **Bids** (buys): `BTreeMap<Reverse<Decimal>, PriceLevel>` -- highest price first
//! - **Asks** (sells): `BTreeMap<Decimal, PriceLevel>` -- lowest price first
//!
//! The book has no internal synchronization -- the [`MatchingEngine`]
//! guards it with one exclusive lock. There is no removal operation other
//! than the consumption performed by [`OrderBook::cross_once`]; cancellation
//! is not supported.
//!
//! [`MatchingEngine`]: crate::MatchingEngine

use std::cmp::Reverse;
use std::collections::BTreeMap;

use crosstape_types::{Order, OrderId, OrderSide};
use rust_decimal::Decimal;

use crate::price_level::PriceLevel;

/// One execution produced by a single crossing step.
///
/// The engine wraps this into a [`crosstape_types::Trade`] with an
/// execution time token.
#[derive(Debug, Clone)]
pub struct CrossExec {
    pub buy_order_id: OrderId,
    pub sell_order_id: OrderId,
    pub symbol: String,
    /// The resting ask price -- the sell side sets the trade price.
    pub price: Decimal,
    pub quantity: u64,
}

/// The price-level book.
#[derive(Debug, Default)]
pub struct OrderBook {
    /// Buy side: highest price first (`Reverse` key).
    bids: BTreeMap<Reverse<Decimal>, PriceLevel>,
    /// Sell side: lowest price first.
    asks: BTreeMap<Decimal, PriceLevel>,
}

impl OrderBook {
    /// Create a new empty order book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an order at the back of its side/price FIFO, creating the
    /// price level if absent. O(log levels). Always succeeds.
    ///
    /// Market orders rest at their carried price like limit orders -- the
    /// crossing pass makes no distinction between the two kinds.
    pub fn insert(&mut self, order: Order) {
        let price = order.price;
        match order.side {
            OrderSide::Buy => {
                self.bids
                    .entry(Reverse(price))
                    .or_insert_with(|| PriceLevel::new(price))
                    .push_back(order);
            }
            OrderSide::Sell => {
                self.asks
                    .entry(price)
                    .or_insert_with(|| PriceLevel::new(price))
                    .push_back(order);
            }
        }
    }

    // =================================================================
    // Queries
    // =================================================================

    /// Best (highest) bid price, or `None` if no bids.
    #[must_use]
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.keys().next().map(|r| r.0)
    }

    /// Best (lowest) ask price, or `None` if no asks.
    #[must_use]
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.keys().next().copied()
    }

    /// Number of distinct bid price levels.
    #[must_use]
    pub fn bid_depth(&self) -> usize {
        self.bids.len()
    }

    /// Number of distinct ask price levels.
    #[must_use]
    pub fn ask_depth(&self) -> usize {
        self.asks.len()
    }

    /// Returns `true` if the book has no orders on either side.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Iterate bid levels from best (highest) to worst.
    pub fn bid_levels(&self) -> impl Iterator<Item = &PriceLevel> {
        self.bids.values()
    }

    /// Iterate ask levels from best (lowest) to worst.
    pub fn ask_levels(&self) -> impl Iterator<Item = &PriceLevel> {
        self.asks.values()
    }

    // =================================================================
    // Crossing
    // =================================================================

    /// Execute one crossing step: trade the front orders of the best bid
    /// and best ask levels if the prices cross (best bid >= best ask).
    ///
    /// The executed quantity is the minimum of the two front orders'
    /// remaining quantities; the execution price is the best ask price.
    /// Fully filled fronts are popped and emptied levels removed; a
    /// partially filled front keeps its place and time priority.
    ///
    /// Returns `None` when no crossing pair remains.
    pub fn cross_once(&mut self) -> Option<CrossExec> {
        let bid_price = self.best_bid()?;
        let ask_price = self.best_ask()?;
        if bid_price < ask_price {
            return None;
        }

        // Empty levels are removed eagerly, so a present level always has
        // a front order.
        let (buy_order_id, symbol, buy_qty) = {
            let front = self.bids.get(&Reverse(bid_price))?.front()?;
            (front.id, front.symbol.clone(), front.quantity)
        };
        let (sell_order_id, sell_qty) = {
            let front = self.asks.get(&ask_price)?.front()?;
            (front.id, front.quantity)
        };

        let quantity = buy_qty.min(sell_qty);
        self.consume_bid_front(bid_price, quantity);
        self.consume_ask_front(ask_price, quantity);

        Some(CrossExec {
            buy_order_id,
            sell_order_id,
            symbol,
            price: ask_price,
            quantity,
        })
    }

    fn consume_bid_front(&mut self, price: Decimal, quantity: u64) {
        if let Some(level) = self.bids.get_mut(&Reverse(price)) {
            if let Some(front) = level.front_mut() {
                front.quantity -= quantity;
                if front.is_filled() {
                    level.pop_front();
                }
            }
            if level.is_empty() {
                self.bids.remove(&Reverse(price));
            }
        }
    }

    fn consume_ask_front(&mut self, price: Decimal, quantity: u64) {
        if let Some(level) = self.asks.get_mut(&price) {
            if let Some(front) = level.front_mut() {
                front.quantity -= quantity;
                if front.is_filled() {
                    level.pop_front();
                }
            }
            if level.is_empty() {
                self.asks.remove(&price);
            }
        }
    }
}
