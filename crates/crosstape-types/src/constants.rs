//! System-wide constants for the Crosstape execution cores.

/// Default latency offset for the replay simulator, in tape positions.
pub const DEFAULT_LATENCY_TICKS: usize = 2;

/// Decimal places used for prices in the fill export.
pub const FILL_PRICE_PRECISION: u32 = 8;

/// Decimal places used for prices in the trade log.
pub const TRADE_LOG_PRICE_PRECISION: u32 = 2;

/// Basis-point divisor for slippage arithmetic.
pub const BPS_DIVISOR: u64 = 10_000;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
