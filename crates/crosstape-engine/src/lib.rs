//! # crosstape-engine
//!
//! **Continuously-matching, concurrently-accessible limit order book.**
//!
//! The engine serializes concurrent submissions through one coarse
//! exclusive lock over the book and trade log:
//!
//! - **Price-time priority**: better prices trade first; among equal
//!   prices the earliest-submitted order trades first
//! - **Ask-priced executions**: the resting sell side sets every trade
//!   price
//! - **Two-phase submit**: insertion and the crossing pass are separate
//!   lock acquisitions, so any thread's pass may match any thread's order

pub mod book;
pub mod engine;
pub mod price_level;

pub use book::{CrossExec, OrderBook};
pub use engine::{BookSnapshot, LevelView, MatchingEngine};
pub use price_level::PriceLevel;
