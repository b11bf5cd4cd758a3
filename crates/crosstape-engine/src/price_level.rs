//! A single price level in the order book.
//!
//! Orders at the same price are stored in FIFO order (time priority)
//! using a [`VecDeque`].

use std::collections::VecDeque;

use crosstape_types::Order;
use rust_decimal::Decimal;

/// A single price level containing all orders resting at that price.
///
/// Orders are stored in arrival order (FIFO) -- the front of the deque
/// has the highest time priority and trades first. A partially filled
/// front order stays in place, keeping its priority for the next pass.
#[derive(Debug, Clone)]
pub struct PriceLevel {
    /// The price at this level.
    pub price: Decimal,
    /// Orders in time-priority order (front = oldest = highest priority).
    orders: VecDeque<Order>,
}

impl PriceLevel {
    /// Create a new empty price level.
    #[must_use]
    pub fn new(price: Decimal) -> Self {
        Self {
            price,
            orders: VecDeque::new(),
        }
    }

    /// Add an order to the back of this level (lowest time priority).
    pub fn push_back(&mut self, order: Order) {
        self.orders.push_back(order);
    }

    /// Remove and return the front (oldest / highest priority) order.
    pub fn pop_front(&mut self) -> Option<Order> {
        self.orders.pop_front()
    }

    /// Peek at the front order without removing it.
    #[must_use]
    pub fn front(&self) -> Option<&Order> {
        self.orders.front()
    }

    /// Mutable access to the front order, for in-place partial fills.
    pub fn front_mut(&mut self) -> Option<&mut Order> {
        self.orders.front_mut()
    }

    /// Returns `true` if there are no orders at this level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Number of orders at this level.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }
}

#[cfg(test)]
mod tests {
    use crosstape_types::{OrderId, OrderKind, OrderSide, TimeInForce, TimeToken};

    use super::*;

    fn make_order(id: u64, qty: u64) -> Order {
        Order::new(
            OrderId(id),
            "AAPL",
            OrderSide::Buy,
            OrderKind::Limit,
            qty,
            Decimal::new(100, 0),
            TimeToken::from("t0"),
            TimeInForce::Gfd,
        )
    }

    #[test]
    fn push_pop_fifo() {
        let mut level = PriceLevel::new(Decimal::new(100, 0));
        level.push_back(make_order(1, 10));
        level.push_back(make_order(2, 10));

        assert_eq!(level.len(), 2);
        let popped = level.pop_front().unwrap();
        assert_eq!(popped.id, OrderId(1), "FIFO: first in should be first out");
        assert_eq!(level.len(), 1);
    }

    #[test]
    fn front_mut_allows_partial_fill_in_place() {
        let mut level = PriceLevel::new(Decimal::new(100, 0));
        level.push_back(make_order(1, 10));
        level.push_back(make_order(2, 10));

        level.front_mut().unwrap().quantity -= 4;

        let front = level.front().unwrap();
        assert_eq!(front.id, OrderId(1), "partial fill keeps time priority");
        assert_eq!(front.quantity, 6);
    }

    #[test]
    fn empty_level() {
        let level = PriceLevel::new(Decimal::new(100, 0));
        assert!(level.is_empty());
        assert_eq!(level.len(), 0);
        assert!(level.front().is_none());
    }
}
