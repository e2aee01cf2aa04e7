// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory [`UsageStore`].

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use aura_core::{AuraError, LedgerSnapshot, UsageRecord, UsageStore};

#[derive(Default)]
struct Inner {
    snapshot: Option<LedgerSnapshot>,
    records: Vec<UsageRecord>,
}

/// Usage store held in memory. Clones share state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
    failing: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose `load` returns `snapshot`.
    pub fn with_snapshot(snapshot: LedgerSnapshot) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                snapshot: Some(snapshot),
                records: Vec::new(),
            })),
            failing: false,
        }
    }

    /// A store where every operation fails with a storage error.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub async fn snapshot(&self) -> Option<LedgerSnapshot> {
        self.inner.lock().await.snapshot
    }

    pub async fn records(&self) -> Vec<UsageRecord> {
        self.inner.lock().await.records.clone()
    }

    fn check(&self) -> Result<(), AuraError> {
        if self.failing {
            return Err(AuraError::Storage {
                source: Box::new(std::io::Error::other("memory store set to fail")),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UsageStore for MemoryStore {
    async fn load(&self) -> Result<Option<LedgerSnapshot>, AuraError> {
        self.check()?;
        Ok(self.inner.lock().await.snapshot)
    }

    async fn save(&self, snapshot: &LedgerSnapshot) -> Result<(), AuraError> {
        self.check()?;
        self.inner.lock().await.snapshot = Some(*snapshot);
        Ok(())
    }

    async fn append(&self, record: &UsageRecord) -> Result<(), AuraError> {
        self.check()?;
        self.inner.lock().await.records.push(record.clone());
        Ok(())
    }
}
