// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! On-disk persistence of the usage ledger across store reopenings.

use aura_core::{TokenUsage, UsageRecord, UsageStore};
use aura_cost::{estimate_usage_cost, SqliteUsageStore, UsageLedger};
use chrono::NaiveDate;

#[tokio::test]
async fn ledger_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("usage.db");
    let path = path.to_str().unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

    {
        let store = SqliteUsageStore::open(path).await.unwrap();
        let mut ledger = UsageLedger::with_cap_on(1.0, today);
        let usage = TokenUsage {
            prompt_tokens: 1000,
            completion_tokens: 500,
        };
        let cost = estimate_usage_cost(&usage, "gpt-4");
        ledger.record_on(cost, today);
        store.append(&UsageRecord::new("gpt-4", &usage, cost)).await.unwrap();
        store.save(&ledger.snapshot()).await.unwrap();
    }

    let store = SqliteUsageStore::open(path).await.unwrap();
    let snapshot = store.load().await.unwrap().expect("snapshot persisted");
    let mut ledger = UsageLedger::from_snapshot(snapshot, 1.0);
    assert_eq!(ledger.call_count(), 1);
    assert!((ledger.cumulative_cost() - 0.06).abs() < 1e-10);
    assert_eq!(store.call_log_len().await.unwrap(), 1);

    // The stored day is stale the next morning.
    let tomorrow = today.succ_opt().unwrap();
    assert!(ledger.check_gate_on(tomorrow));
    assert_eq!(ledger.call_count(), 0);
}

#[tokio::test]
async fn exhausted_ledger_stays_blocked_after_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("usage.db");
    let path = path.to_str().unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();

    let store = SqliteUsageStore::open(path).await.unwrap();
    let mut ledger = UsageLedger::with_cap_on(1.0, today);
    ledger.record_on(1.0, today);
    store.save(&ledger.snapshot()).await.unwrap();
    drop(store);

    let store = SqliteUsageStore::open(path).await.unwrap();
    let snapshot = store.load().await.unwrap().unwrap();
    let mut restored = UsageLedger::from_snapshot(snapshot, 1.0);
    assert!(!restored.check_gate_on(today));
}
