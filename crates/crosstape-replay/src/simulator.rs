//! The replay fill simulator.
//!
//! A pure function over (quote tape, historical orders, parameters): each
//! order is evaluated independently, in input order, against the read-only
//! tape. Orders whose submission token never appears on the tape, or whose
//! latency-delayed arrival falls past the end, silently produce no fill.
//!
//! Only taker fills are ever emitted. The maker role exists in the record
//! format but is outside this algorithm's scope.

use crosstape_types::{
    Fill, LiquidityRole, Order, OrderKind, OrderSide, ReplayParams, TimeInForce, constants,
};
use rust_decimal::Decimal;

use crate::tape::QuoteTape;

/// Adverse price adjustment for a taker fill: buys pay up, sells receive
/// less, by `price * slip_bps / 10000`.
fn slip(price: Decimal, side: OrderSide, slip_bps: Decimal) -> Decimal {
    let offset = price * slip_bps / Decimal::from(constants::BPS_DIVISOR);
    match side {
        OrderSide::Buy => price + offset,
        OrderSide::Sell => price - offset,
    }
}

/// Decide fills for a batch of historical orders against the tape.
///
/// Per order: resolve the submission token to a tape position, delay by
/// `latency_ticks`, then
/// - **market**: evaluate only the arrival tick; fill up to the available
///   size at the slipped quote price;
/// - **limit**: scan from arrival to the arrival tick (IOC) or the tape
///   end (GFD); the first tick whose quote satisfies the limit with
///   available size fills at the **quote** price, unslipped.
///
/// At most one fill per order; an unfilled remainder is never retried.
#[must_use]
pub fn simulate_fills(tape: &QuoteTape, orders: &[Order], params: &ReplayParams) -> Vec<Fill> {
    let mut fills = Vec::with_capacity(orders.len());

    for order in orders {
        let Some(position) = tape.position_of(&order.ts) else {
            continue;
        };
        let arrival = position + params.latency_ticks;
        if arrival >= tape.len() {
            continue;
        }

        let fill = match order.kind {
            OrderKind::Market => market_fill(tape, order, arrival, params.slip_bps),
            OrderKind::Limit => limit_fill(tape, order, arrival),
        };
        if let Some(fill) = fill {
            fills.push(fill);
        }
    }

    fills
}

fn market_fill(
    tape: &QuoteTape,
    order: &Order,
    arrival: usize,
    slip_bps: Decimal,
) -> Option<Fill> {
    let tick = tape.get(arrival)?;
    let (quote_price, available) = match order.side {
        OrderSide::Buy => (tick.ask, tick.ask_size),
        OrderSide::Sell => (tick.bid, tick.bid_size),
    };
    let quantity = order.quantity.min(available);
    if quantity == 0 {
        return None;
    }
    Some(Fill {
        order_id: order.id,
        ts: tick.ts.clone(),
        price: slip(quote_price, order.side, slip_bps),
        quantity,
        side: order.side,
        liquidity: LiquidityRole::Taker,
    })
}

fn limit_fill(tape: &QuoteTape, order: &Order, arrival: usize) -> Option<Fill> {
    let end = match order.tif {
        TimeInForce::Ioc => arrival,
        TimeInForce::Gfd => tape.len() - 1,
    };
    for position in arrival..=end {
        let tick = tape.get(position)?;
        let quote = match order.side {
            OrderSide::Buy if tick.ask <= order.price => Some((tick.ask, tick.ask_size)),
            OrderSide::Sell if tick.bid >= order.price => Some((tick.bid, tick.bid_size)),
            _ => None,
        };
        if let Some((quote_price, available)) = quote {
            let quantity = order.quantity.min(available);
            if quantity > 0 {
                return Some(Fill {
                    order_id: order.id,
                    ts: tick.ts.clone(),
                    price: quote_price,
                    quantity,
                    side: order.side,
                    liquidity: LiquidityRole::Taker,
                });
            }
            // Quote satisfies the limit but no size is available: keep
            // scanning (GFD) or give up at the arrival tick (IOC).
        }
    }
    None
}
