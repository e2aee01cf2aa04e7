// SPDX-FileCopyrightText: 2026 Aura Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end dispatch behavior against the mock provider.

use std::sync::Arc;
use std::time::Duration;

use aura_agent::{Dispatcher, Persona, persona::TEAM_PERSONA};
use aura_core::{CompletionResult, LedgerSnapshot, ProviderAdapter};
use aura_cost::UsageLedger;
use aura_router::{Category, classify};
use aura_test_utils::{MemoryStore, MockOutcome, MockProvider};
use chrono::{Days, Local};

fn dispatcher(provider: Option<&MockProvider>, ledger: UsageLedger) -> Dispatcher {
    Dispatcher::new(
        provider.map(|p| Arc::new(p.clone()) as Arc<dyn ProviderAdapter>),
        ledger,
        Persona::default(),
        "gpt-4",
    )
}

fn spent(amount: f64) -> UsageLedger {
    let mut ledger = UsageLedger::with_cap(1.0);
    ledger.record(amount);
    ledger
}

#[tokio::test]
async fn offline_mode_serves_category_document() {
    let d = dispatcher(None, UsageLedger::with_cap(1.0));

    let result = d.dispatch("How do we beat competitors?", None).await;
    assert_eq!(
        result,
        CompletionResult::Success(Category::Market.document().to_string())
    );

    let result = d.dispatch("tell me a joke", None).await;
    assert_eq!(
        result,
        CompletionResult::Success(Category::General.document().to_string())
    );
    assert_eq!(d.usage().await.snapshot.call_count, 0);
}

#[tokio::test]
async fn offline_mode_ignores_exhausted_ledger() {
    let d = dispatcher(None, spent(5.0));
    let result = d.dispatch("growth plan", None).await;
    assert!(result.is_success());
}

#[tokio::test]
async fn exhausted_budget_blocks_without_calling() {
    let mock = MockProvider::new();
    let d = dispatcher(Some(&mock), spent(1.0));

    let result = d.dispatch("anything", None).await;
    assert_eq!(
        result,
        CompletionResult::Blocked("daily cost limit reached ($1.00)".into())
    );
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn billed_call_updates_ledger_and_store() {
    let mock = MockProvider::with_outcomes(vec![MockOutcome::reply("## Plan", 1000, 500)]);
    let store = MemoryStore::new();
    let d = dispatcher(Some(&mock), UsageLedger::with_cap(1.0)).with_store(Arc::new(store.clone()));

    let result = d.dispatch("plan our launch", None).await;
    assert_eq!(result, CompletionResult::Success("## Plan".into()));
    assert_eq!(mock.calls(), 1);

    let report = d.usage().await;
    assert!((report.snapshot.cumulative_cost - 0.06).abs() < 1e-9);
    assert_eq!(report.snapshot.call_count, 1);
    assert!((report.remaining - 0.94).abs() < 1e-9);

    let records = store.records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].model, "gpt-4");
    assert_eq!(records[0].prompt_tokens, 1000);
    assert!((store.snapshot().await.unwrap().cumulative_cost - 0.06).abs() < 1e-9);
}

#[tokio::test]
async fn stale_exhausted_ledger_rolls_over() {
    let yesterday = Local::now()
        .date_naive()
        .checked_sub_days(Days::new(1))
        .unwrap();
    let ledger = UsageLedger::from_snapshot(
        LedgerSnapshot {
            cumulative_cost: 1.0,
            call_count: 12,
            reset_date: yesterday,
        },
        1.0,
    );
    let mock = MockProvider::with_outcomes(vec![MockOutcome::reply("fresh day", 100, 100)]);
    let d = dispatcher(Some(&mock), ledger);

    let result = d.dispatch("anything", None).await;
    assert_eq!(result, CompletionResult::Success("fresh day".into()));
    let report = d.usage().await;
    assert_eq!(report.snapshot.call_count, 1);
    assert_eq!(report.snapshot.reset_date, Local::now().date_naive());
}

#[tokio::test]
async fn usage_report_applies_pending_rollover() {
    let yesterday = Local::now()
        .date_naive()
        .checked_sub_days(Days::new(1))
        .unwrap();
    let store = MemoryStore::new();
    let ledger = UsageLedger::from_snapshot(
        LedgerSnapshot {
            cumulative_cost: 0.7,
            call_count: 3,
            reset_date: yesterday,
        },
        1.0,
    );
    let d = dispatcher(None, ledger).with_store(Arc::new(store.clone()));

    let report = d.usage().await;
    assert_eq!(report.snapshot.call_count, 0);
    assert_eq!(report.remaining, 1.0);
    assert!(!report.online);
    assert_eq!(store.snapshot().await.unwrap().call_count, 0);
}

#[tokio::test]
async fn transport_failure_carries_offline_fallback() {
    let mock = MockProvider::with_outcomes(vec![MockOutcome::Transport(
        "connection refused".into(),
    )]);
    let d = dispatcher(Some(&mock), UsageLedger::with_cap(1.0));

    let prompt = "what should our roadmap look like?";
    let result = d.dispatch(prompt, None).await;
    assert_eq!(
        result,
        CompletionResult::TransportError {
            message: "connection refused".into(),
            fallback: classify(prompt).document().to_string(),
        }
    );
    assert_eq!(d.usage().await.snapshot.call_count, 0);
}

#[tokio::test]
async fn api_error_passes_message_through() {
    let mock = MockProvider::with_outcomes(vec![MockOutcome::Api {
        status: 401,
        message: "Incorrect API key provided".into(),
    }]);
    let d = dispatcher(Some(&mock), UsageLedger::with_cap(1.0));

    let result = d.dispatch("hello", None).await;
    assert_eq!(
        result,
        CompletionResult::ApiError {
            status: 401,
            message: "Incorrect API key provided".into(),
        }
    );
    assert!(result.render().contains("HTTP 401"));
    assert_eq!(d.usage().await.snapshot.call_count, 0);
}

#[tokio::test]
async fn concurrent_dispatches_cannot_overspend() {
    let mock = MockProvider::with_outcomes(vec![
        MockOutcome::reply("first", 1000, 500),
        MockOutcome::reply("second", 1000, 500),
    ])
    .with_delay(Duration::from_millis(50));
    let d = dispatcher(Some(&mock), spent(0.95));

    let (a, b) = tokio::join!(d.dispatch("one", None), d.dispatch("two", None));

    assert_eq!(mock.calls(), 1);
    let blocked = [&a, &b]
        .iter()
        .filter(|r| matches!(r, CompletionResult::Blocked(_)))
        .count();
    let succeeded = [&a, &b].iter().filter(|r| r.is_success()).count();
    assert_eq!(blocked, 1);
    assert_eq!(succeeded, 1);
}

#[tokio::test]
async fn team_analysis_uses_team_persona() {
    let mock = MockProvider::with_outcomes(vec![MockOutcome::reply("panel", 10, 10)]);
    let d = dispatcher(Some(&mock), UsageLedger::with_cap(1.0));

    d.team_analysis("Should we expand to Italy?").await;
    let sent = mock.last_request().await.unwrap();
    assert_eq!(sent.system, TEAM_PERSONA.trim());
    assert!(sent.user.contains("WeWine.app: Should we expand to Italy?"));
}

#[tokio::test]
async fn growth_strategy_defaults_focus_area() {
    let mock = MockProvider::new();
    let d = dispatcher(Some(&mock), UsageLedger::with_cap(1.0));

    d.growth_strategy(None).await;
    let sent = mock.last_request().await.unwrap();
    assert_eq!(sent.system, Persona::default().prompt);
    assert!(sent.user.contains("focused on: user_acquisition"));
}

#[tokio::test]
async fn reset_reopens_the_gate() {
    let mock = MockProvider::with_outcomes(vec![MockOutcome::reply("back", 1, 1)]);
    let d = dispatcher(Some(&mock), spent(1.5));

    assert!(matches!(
        d.dispatch("x", None).await,
        CompletionResult::Blocked(_)
    ));
    d.reset_usage().await;
    assert_eq!(
        d.dispatch("x", None).await,
        CompletionResult::Success("back".into())
    );
}
