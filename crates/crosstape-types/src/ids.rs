//! Identifiers used throughout Crosstape.
//!
//! Order ids are plain sequential integers, unique per engine instance.
//! Timestamps are opaque comparable tokens — the cores never do clock
//! arithmetic on them.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// OrderId
// ---------------------------------------------------------------------------

/// Monotonically increasing order identifier, unique per engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// OrderIdCounter
// ---------------------------------------------------------------------------

/// Issues sequential [`OrderId`]s, starting at 1.
///
/// Safe under concurrent increment without any external lock — submitters
/// take ids independently of the book lock. Strictly increasing, no gaps.
#[derive(Debug)]
pub struct OrderIdCounter {
    next: AtomicU64,
}

impl OrderIdCounter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Take the next id.
    pub fn next_id(&self) -> OrderId {
        OrderId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Number of ids issued so far.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed) - 1
    }
}

impl Default for OrderIdCounter {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// TimeToken
// ---------------------------------------------------------------------------

/// An opaque, comparable timestamp token.
///
/// The replay tape carries these verbatim from the source feed; the live
/// engine stamps [`TimeToken::now`] at submission. Nothing in either core
/// parses the contents — tokens are only compared for equality and order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeToken(pub String);

impl TimeToken {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Stamp the current UTC instant (live path only).
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TimeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TimeToken {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
