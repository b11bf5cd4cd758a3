//! The live matching engine.
//!
//! Owns the price-level book behind one coarse exclusive lock and runs the
//! crossing pass after every submission. Shareable across submitting
//! threads through `&self` (wrap in an `Arc`).
//!
//! `submit` deliberately takes the lock **twice** -- once to insert, once
//! for the crossing pass. Concurrent submitters may interleave between the
//! two phases, so a thread's resting order can be matched by another
//! thread's pass. Every mutation is atomic under the lock and every submit
//! triggers a crossing attempt, so a crossable pair never rests past the
//! next submission.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crosstape_types::{
    CrosstapeError, Order, OrderId, OrderIdCounter, OrderKind, OrderSide, Result, TimeInForce,
    TimeToken, Trade,
};
use rust_decimal::Decimal;

use crate::book::OrderBook;

/// One price level as reported by [`MatchingEngine::snapshot`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelView {
    pub price: Decimal,
    /// Quantity of the order at the **front** of the level's FIFO -- not
    /// the aggregate across all resting orders. This asymmetry between
    /// book state and displayed depth is intentional and preserved.
    pub front_quantity: u64,
}

/// A point-in-time view of the book, best prices first on both sides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookSnapshot {
    pub bids: Vec<LevelView>,
    pub asks: Vec<LevelView>,
}

/// Book plus trade log, guarded together by the engine's single lock.
#[derive(Debug, Default)]
struct EngineState {
    book: OrderBook,
    trade_log: Vec<Trade>,
}

/// The live matching engine for a single instrument.
#[derive(Debug)]
pub struct MatchingEngine {
    state: Mutex<EngineState>,
    /// Id assignment is synchronized independently of the book lock.
    ids: OrderIdCounter,
}

impl MatchingEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(EngineState::default()),
            ids: OrderIdCounter::new(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, EngineState> {
        // Poisoning would require a panic inside the crossing pass; there
        // is no recovery path for a half-mutated book.
        self.state.lock().expect("book lock poisoned")
    }

    /// Submit an order: assign the next id, stamp the submission time,
    /// insert into the book, then run the crossing pass.
    ///
    /// Well-formed input (`price > 0`, `quantity > 0`) always succeeds;
    /// malformed input is a caller contract violation, not a recoverable
    /// error.
    pub fn submit(
        &self,
        side: OrderSide,
        kind: OrderKind,
        price: Decimal,
        quantity: u64,
        symbol: &str,
    ) -> OrderId {
        debug_assert!(quantity > 0, "caller contract: quantity must be positive");
        debug_assert!(
            price > Decimal::ZERO,
            "caller contract: price must be positive"
        );

        let id = self.ids.next_id();
        let order = Order::new(
            id,
            symbol,
            side,
            kind,
            quantity,
            price,
            TimeToken::now(),
            TimeInForce::Gfd,
        );

        // Phase one: insert under the lock, then release.
        self.lock().book.insert(order);

        // Phase two: a separate acquisition for the crossing pass.
        self.crossing_pass();

        id
    }

    /// Repeatedly cross the best bid against the best ask until no
    /// crossing price pair remains, appending one trade per step.
    fn crossing_pass(&self) {
        let mut state = self.lock();
        while let Some(exec) = state.book.cross_once() {
            let trade = Trade {
                buy_order_id: exec.buy_order_id,
                sell_order_id: exec.sell_order_id,
                symbol: exec.symbol,
                price: exec.price,
                quantity: exec.quantity,
                ts: TimeToken::now(),
            };
            tracing::debug!(
                quantity = trade.quantity,
                symbol = %trade.symbol,
                price = %trade.price,
                buy = %trade.buy_order_id,
                sell = %trade.sell_order_id,
                "trade executed"
            );
            state.trade_log.push(trade);
        }
    }

    /// A view of every remaining price level: the price and the quantity
    /// of the order currently at the front of that level's FIFO.
    #[must_use]
    pub fn snapshot(&self) -> BookSnapshot {
        let state = self.lock();
        let level_view = |level: &crate::price_level::PriceLevel| LevelView {
            price: level.price,
            front_quantity: level.front().map_or(0, |o| o.quantity),
        };
        BookSnapshot {
            bids: state.book.bid_levels().map(level_view).collect(),
            asks: state.book.ask_levels().map(level_view).collect(),
        }
    }

    /// Write the full accumulated trade log, one line per trade in
    /// execution order. The in-memory log is not cleared.
    pub fn export_trades(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let state = self.lock();
        let file = File::create(path).map_err(|e| CrosstapeError::Export {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let mut writer = BufWriter::new(file);
        for trade in &state.trade_log {
            writeln!(writer, "{}", trade.log_line())?;
        }
        writer.flush()?;
        tracing::info!(count = state.trade_log.len(), path = %path.display(), "wrote trade log");
        Ok(())
    }

    /// Number of trades executed so far.
    #[must_use]
    pub fn trade_count(&self) -> usize {
        self.lock().trade_log.len()
    }

    /// A copy of the accumulated trade log.
    #[must_use]
    pub fn trades(&self) -> Vec<Trade> {
        self.lock().trade_log.clone()
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}
