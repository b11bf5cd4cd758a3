//! # crosstape-types
//!
//! Shared types, errors, and configuration for the **Crosstape** execution
//! cores.
//!
//! This crate is the leaf dependency of the workspace — both execution
//! crates depend on it. It defines:
//!
//! - **Identifiers**: [`OrderId`], [`OrderIdCounter`], [`TimeToken`]
//! - **Order model**: [`Order`], [`OrderSide`], [`OrderKind`], [`TimeInForce`]
//! - **Quote model**: [`BookTick`]
//! - **Execution records**: [`Trade`] (live path), [`Fill`] (replay path), [`LiquidityRole`]
//! - **Configuration**: [`ReplayParams`]
//! - **Errors**: [`CrosstapeError`] with `CT_ERR_` prefix codes
//! - **Constants**: replay defaults and formatting precision

pub mod constants;
pub mod error;
pub mod ids;
pub mod order;
pub mod params;
pub mod quote;
pub mod trade;

// Re-export all primary types at crate root for ergonomic imports:
//   use crosstape_types::{Order, OrderSide, Fill, TimeToken, ...};

pub use error::*;
pub use ids::*;
pub use order::*;
pub use params::*;
pub use quote::*;
pub use trade::*;

// Constants are accessed via `crosstape_types::constants::FOO`
// (not re-exported to avoid name collisions).
