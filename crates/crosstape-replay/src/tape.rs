//! The historical quote tape and its position index.

use std::collections::HashMap;

use crosstape_types::{BookTick, TimeToken};

/// An ordered, read-only sequence of top-of-book snapshots with an index
/// from time token to tape position.
///
/// The index is built once at construction. When the tape carries
/// duplicate tokens, the **last** occurrence wins -- an order submitted at
/// a duplicated token resolves to the most recently indexed position.
#[derive(Debug, Clone)]
pub struct QuoteTape {
    ticks: Vec<BookTick>,
    index: HashMap<TimeToken, usize>,
}

impl QuoteTape {
    #[must_use]
    pub fn new(ticks: Vec<BookTick>) -> Self {
        let mut index = HashMap::with_capacity(ticks.len());
        for (position, tick) in ticks.iter().enumerate() {
            index.insert(tick.ts.clone(), position);
        }
        Self { ticks, index }
    }

    /// The tape position matching a submission token, if any.
    #[must_use]
    pub fn position_of(&self, ts: &TimeToken) -> Option<usize> {
        self.index.get(ts).copied()
    }

    /// The tick at a given position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&BookTick> {
        self.ticks.get(position)
    }

    /// All ticks, in tape order.
    #[must_use]
    pub fn ticks(&self) -> &[BookTick] {
        &self.ticks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}
