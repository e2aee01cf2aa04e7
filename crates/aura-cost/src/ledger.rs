// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Daily usage ledger with a hard spending cap.
//!
//! The ledger keeps today's running spend and call count in memory. Both are
//! zeroed lazily: the first gate check or record that sees a calendar date
//! other than `reset_date` resets the counters before doing anything else.
//! A `tracing::warn` is emitted once spend reaches 80% of the cap.
//!
//! Restart recovery goes through [`UsageLedger::from_snapshot`] with a
//! snapshot loaded from a [`UsageStore`](aura_core::UsageStore).

use aura_config::model::CostConfig;
use aura_core::LedgerSnapshot;
use chrono::{Local, NaiveDate};
use tracing::{info, warn};

/// Fraction of the cap at which the ledger starts warning.
const WARN_THRESHOLD: f64 = 0.8;

/// In-memory daily usage ledger.
#[derive(Debug, Clone)]
pub struct UsageLedger {
    cumulative_cost: f64,
    call_count: u64,
    reset_date: NaiveDate,
    daily_cap: f64,
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl UsageLedger {
    /// Empty ledger using the configured daily cap.
    pub fn new(config: &CostConfig) -> Self {
        Self::with_cap(config.daily_budget_usd)
    }

    /// Empty ledger dated today.
    pub fn with_cap(daily_cap: f64) -> Self {
        Self::with_cap_on(daily_cap, today())
    }

    /// Empty ledger dated `date`.
    pub fn with_cap_on(daily_cap: f64, date: NaiveDate) -> Self {
        Self {
            cumulative_cost: 0.0,
            call_count: 0,
            reset_date: date,
            daily_cap,
        }
    }

    /// Rebuild a ledger from persisted state.
    ///
    /// A snapshot from an earlier day is kept as-is; the next operation rolls
    /// it over.
    pub fn from_snapshot(snapshot: LedgerSnapshot, daily_cap: f64) -> Self {
        Self {
            cumulative_cost: snapshot.cumulative_cost.max(0.0),
            call_count: snapshot.call_count,
            reset_date: snapshot.reset_date,
            daily_cap,
        }
    }

    /// Whether another paid call is allowed today.
    pub fn check_gate(&mut self) -> bool {
        self.check_gate_on(today())
    }

    /// [`check_gate`](Self::check_gate) against an explicit date.
    pub fn check_gate_on(&mut self, date: NaiveDate) -> bool {
        self.maybe_rollover(date);

        if self.cumulative_cost >= self.daily_cap {
            return false;
        }
        if self.cumulative_cost >= self.daily_cap * WARN_THRESHOLD {
            warn!(
                daily_total = self.cumulative_cost,
                daily_cap = self.daily_cap,
                "approaching daily cost cap (80%+)"
            );
        }
        true
    }

    /// Add one billed call of `cost_usd` to today's totals.
    pub fn record(&mut self, cost_usd: f64) {
        self.record_on(cost_usd, today());
    }

    /// [`record`](Self::record) against an explicit date.
    pub fn record_on(&mut self, cost_usd: f64, date: NaiveDate) {
        self.maybe_rollover(date);
        self.cumulative_cost += cost_usd.max(0.0);
        self.call_count += 1;
    }

    /// Zero the counters and restamp the ledger with today's date.
    pub fn reset(&mut self) {
        self.reset_on(today());
    }

    /// [`reset`](Self::reset) against an explicit date.
    pub fn reset_on(&mut self, date: NaiveDate) {
        self.cumulative_cost = 0.0;
        self.call_count = 0;
        self.reset_date = date;
    }

    /// Apply a pending daily rollover without gating or recording.
    ///
    /// Returns whether the counters were reset.
    pub fn roll_over_if_stale(&mut self) -> bool {
        self.maybe_rollover(today())
    }

    fn maybe_rollover(&mut self, date: NaiveDate) -> bool {
        if date == self.reset_date {
            return false;
        }
        info!(
            previous = %self.reset_date,
            today = %date,
            spent = self.cumulative_cost,
            "daily usage rolled over"
        );
        self.reset_on(date);
        true
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            cumulative_cost: self.cumulative_cost,
            call_count: self.call_count,
            reset_date: self.reset_date,
        }
    }

    pub fn cumulative_cost(&self) -> f64 {
        self.cumulative_cost
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn reset_date(&self) -> NaiveDate {
        self.reset_date
    }

    pub fn daily_cap(&self) -> f64 {
        self.daily_cap
    }

    /// Spend as a fraction of the cap, clamped to `[0, 1]`.
    ///
    /// A zero cap counts as fully used.
    pub fn utilization(&self) -> f64 {
        if self.daily_cap <= 0.0 {
            return 1.0;
        }
        (self.cumulative_cost / self.daily_cap).clamp(0.0, 1.0)
    }

    /// Budget left today, never negative.
    pub fn remaining(&self) -> f64 {
        (self.daily_cap - self.cumulative_cost).max(0.0)
    }
}
