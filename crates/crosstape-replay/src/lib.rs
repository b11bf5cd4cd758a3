//! # crosstape-replay
//!
//! **Deterministic quote-tape replay fill simulator.**
//!
//! Replays a batch of historical orders against a read-only top-of-book
//! quote tape and decides which would have filled:
//!
//! - **Latency**: an order arrives `latency_ticks` positions after its
//!   submission token's tape position
//! - **Slippage**: market fills execute at the quote price adjusted
//!   adversely by `slip_bps`; limit fills execute at the quote price
//!   unslipped
//! - **One shot**: at most one fill per order, taker only
//!
//! The same inputs always produce the same fills — there is no clock,
//! no randomness, and no shared mutable state.

pub mod feed;
pub mod simulator;
pub mod tape;

pub use feed::{load_orders, load_quotes, write_fills};
pub use simulator::simulate_fills;
pub use tape::QuoteTape;
