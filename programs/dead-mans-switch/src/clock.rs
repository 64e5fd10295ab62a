//! Ledger time. Every deadline comparison reads time from here, never from
//! an instruction argument.

use anchor_lang::prelude::*;

/// Source of authoritative, non-decreasing ledger time in unix seconds.
pub trait LedgerClock {
    fn unix_timestamp(&self) -> i64;
}

impl LedgerClock for Clock {
    fn unix_timestamp(&self) -> i64 {
        self.unix_timestamp
    }
}

/// Current ledger time from the `Clock` sysvar.
pub fn ledger_time() -> Result<i64> {
    Ok(Clock::get()?.unix_timestamp())
}

/// Host-side clock that only moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManualClock {
    now: i64,
}

impl ManualClock {
    pub fn new(now: i64) -> Self {
        Self { now }
    }

    /// Moves time forward by `seconds`. Negative steps are ignored.
    pub fn advance(&mut self, seconds: i64) {
        if seconds > 0 {
            self.now = self.now.saturating_add(seconds);
        }
    }

    /// Moves time to `timestamp` unless that would go backwards.
    pub fn advance_to(&mut self, timestamp: i64) {
        self.now = self.now.max(timestamp);
    }
}

impl LedgerClock for ManualClock {
    fn unix_timestamp(&self) -> i64 {
        self.now
    }
}
