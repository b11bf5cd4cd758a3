//! Replay simulator configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants;

/// Read-only configuration for one replay simulator run.
///
/// Neither field affects the live matching engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplayParams {
    /// Number of tape positions an order's effective arrival is delayed
    /// after its submission position, modeling network/processing delay.
    pub latency_ticks: usize,
    /// Adverse price adjustment applied to market (taker) fills, in basis
    /// points. Limit fills are never slipped.
    pub slip_bps: Decimal,
}

impl ReplayParams {
    #[must_use]
    pub fn new(latency_ticks: usize, slip_bps: Decimal) -> Self {
        Self {
            latency_ticks,
            slip_bps,
        }
    }
}

impl Default for ReplayParams {
    fn default() -> Self {
        Self {
            latency_ticks: constants::DEFAULT_LATENCY_TICKS,
            // 0.5 bps
            slip_bps: Decimal::new(5, 1),
        }
    }
}
