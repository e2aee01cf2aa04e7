// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cost tracking for Aura.
//!
//! - **Pricing**: per-model cost estimation from a static price table
//! - **Ledger**: in-memory daily spend with a hard cap and lazy rollover
//! - **Store**: SQLite persistence so the cap survives restarts

pub mod ledger;
pub mod pricing;
pub mod store;

pub use ledger::UsageLedger;
pub use pricing::{estimate_cost, estimate_usage_cost, get_pricing, ModelPricing, PriceTable};
pub use store::{local_day_bounds, SqliteUsageStore};
