// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage trait for persisting usage state across restarts.

use async_trait::async_trait;

use crate::error::AuraError;
use crate::types::{LedgerSnapshot, UsageRecord};

/// Persistence backend for the usage ledger.
///
/// The ledger itself lives in memory; a store only mirrors it so the
/// daily cap survives process restarts.
#[async_trait]
pub trait UsageStore: Send + Sync + 'static {
    /// Loads the last saved snapshot, if any.
    async fn load(&self) -> Result<Option<LedgerSnapshot>, AuraError>;

    /// Replaces the saved snapshot.
    async fn save(&self, snapshot: &LedgerSnapshot) -> Result<(), AuraError>;

    /// Appends one billed call to the call log.
    async fn append(&self, record: &UsageRecord) -> Result<(), AuraError>;
}
